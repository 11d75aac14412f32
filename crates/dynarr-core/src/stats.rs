//! Growth counters for a single container.
//!
//! [`GrowthStats`] records how much element movement a container has done,
//! so the amortized cost of a workload can be checked from a trace instead
//! of from wall-clock timing.

/// Cumulative relocation and shift counters.
///
/// The container bumps these as it works; callers read them through
/// `stats()` and may clear them between phases of a workload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Number of times the backing buffer was replaced by a larger or
    /// smaller one.
    pub reallocations: u64,
    /// Elements moved from an old buffer into its replacement, or cloned
    /// into a fresh buffer by an assignment.
    pub elements_relocated: u64,
    /// Elements moved one slot within the same buffer to open or close a
    /// gap (`push_front`, `insert`, `remove`).
    pub elements_shifted: u64,
}

impl GrowthStats {
    /// Record one reallocation that moved `moved` live elements.
    #[inline]
    pub fn record_reallocation(&mut self, moved: usize) {
        self.reallocations += 1;
        self.elements_relocated += moved as u64;
    }

    /// Record an in-place shift of `count` elements.
    #[inline]
    pub fn record_shift(&mut self, count: usize) {
        self.elements_shifted += count as u64;
    }

    /// Total element moves of either kind.
    pub fn total_moves(&self) -> u64 {
        self.elements_relocated + self.elements_shifted
    }
}
