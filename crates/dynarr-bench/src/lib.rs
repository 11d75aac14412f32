//! Benchmark workloads and utilities for the dynarr container.
//!
//! - [`insert_positions`]: deterministic insertion indices via seed
//! - [`fill_back`] / [`fill_front`]: build an array one element at a time
//! - [`growth_report`]: the counters a workload leaves behind, for
//!   comparing policies without timing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr_array::{ArrayConfig, ArrayError, DynamicArray, GrowthPolicy, GrowthStats};

/// Generate `n` deterministic insertion indices.
///
/// Index `i` is valid for an array holding `i` elements, so applying the
/// indices in order to an empty array never goes out of range.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut positions = Vec::with_capacity(n);
    let mut state = seed;
    for len in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        positions.push(((state >> 33) % (len as u64 + 1)) as usize);
    }
    positions
}

/// Append `0..n` to a fresh array using policy `P`.
pub fn fill_back<P: GrowthPolicy>(n: u64) -> Result<DynamicArray<u64, P>, ArrayError> {
    let mut arr = DynamicArray::with_policy(ArrayConfig::default())?;
    for i in 0..n {
        arr.push_back(i)?;
    }
    Ok(arr)
}

/// Prepend `0..n` to a fresh array using policy `P`; ends in reverse order.
pub fn fill_front<P: GrowthPolicy>(n: u64) -> Result<DynamicArray<u64, P>, ArrayError> {
    let mut arr = DynamicArray::with_policy(ArrayConfig::default())?;
    for i in 0..n {
        arr.push_front(i)?;
    }
    Ok(arr)
}

/// Insert `0..positions.len()` at the given indices using policy `P`.
pub fn fill_at<P: GrowthPolicy>(positions: &[usize]) -> Result<DynamicArray<u64, P>, ArrayError> {
    let mut arr = DynamicArray::with_policy(ArrayConfig::default())?;
    for (value, &index) in positions.iter().enumerate() {
        arr.insert(index, value as u64)?;
    }
    Ok(arr)
}

/// Growth counters after appending `n` elements under policy `P`.
pub fn growth_report<P: GrowthPolicy>(n: u64) -> Result<GrowthStats, ArrayError> {
    Ok(*fill_back::<P>(n)?.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynarr_array::{Doubling, Linear};
    use dynarr_test_utils::expected_append_stats;

    #[test]
    fn insert_positions_are_in_range() {
        let positions = insert_positions(500, 42);
        assert_eq!(positions.len(), 500);
        for (len, &index) in positions.iter().enumerate() {
            assert!(index <= len);
        }
    }

    #[test]
    fn insert_positions_deterministic() {
        assert_eq!(insert_positions(64, 7), insert_positions(64, 7));
        assert_ne!(insert_positions(64, 7), insert_positions(64, 8));
    }

    #[test]
    fn fill_at_applies_every_position() {
        let positions = insert_positions(200, 3);
        let arr = fill_at::<Doubling>(&positions).unwrap();
        assert_eq!(arr.len(), 200);
        let mut sorted: Vec<u64> = arr.iter().copied().collect();
        sorted.sort_unstable();
        assert!(sorted.iter().copied().eq(0..200));
    }

    #[test]
    fn fill_front_reverses() {
        let arr = fill_front::<Doubling>(5).unwrap();
        assert_eq!(arr, [4, 3, 2, 1, 0]);
    }

    #[test]
    fn doubling_report_matches_trace() {
        let report = growth_report::<Doubling>(10_000).unwrap();
        assert_eq!(report, expected_append_stats(1, 10_000));
    }

    #[test]
    fn linear_report_is_quadratic() {
        let doubling = growth_report::<Doubling>(2_000).unwrap();
        let linear = growth_report::<Linear<16>>(2_000).unwrap();
        assert!(linear.elements_relocated > 20 * doubling.elements_relocated);
    }
}
