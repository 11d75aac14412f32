//! Test utilities for dynarr development.
//!
//! Provides an element type that records its own lifecycle ([`Tracked`]
//! with its [`Ledger`]) and the expected growth trace of the doubling
//! policy, so tests can check ownership and amortized cost without timing.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{Ledger, Tracked};

use dynarr_core::{Doubling, GrowthPolicy, GrowthStats};

/// Capacities a doubling array passes through while `n` elements are
/// appended to it, starting from `initial` slots.
///
/// The first entry is `initial`; each later entry is the capacity after a
/// growth step.
pub fn doubling_trace(initial: usize, n: usize) -> Vec<usize> {
    let mut trace = vec![initial];
    let mut capacity = initial;
    for len in 0..n {
        if len == capacity {
            capacity = Doubling::next_capacity(capacity, len + 1);
            trace.push(capacity);
        }
    }
    trace
}

/// Counters a doubling array from capacity `initial` must report after
/// exactly `n` appends and nothing else.
pub fn expected_append_stats(initial: usize, n: usize) -> GrowthStats {
    let trace = doubling_trace(initial, n);
    let mut stats = GrowthStats::default();
    // Each growth step relocates everything held at the old capacity.
    for &old in &trace[..trace.len() - 1] {
        stats.record_reallocation(old);
    }
    stats
}
