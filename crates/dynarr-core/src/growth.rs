//! Capacity growth policies.
//!
//! A [`GrowthPolicy`] decides the new capacity when an insertion finds the
//! buffer full. Explicit `reserve` calls bypass the policy and allocate
//! exactly what was asked for.
//!
//! [`Doubling`] is the canonical policy: geometric growth keeps the total
//! relocation work of `n` appends below `2n` element moves. [`Linear`]
//! grows by a fixed step and costs O(n²) over the same sequence; it is kept
//! for comparison benchmarks.

/// Strategy for choosing the next capacity of a full buffer.
pub trait GrowthPolicy {
    /// Capacity to grow to from `current` so that at least `required`
    /// slots are available.
    ///
    /// Implementations must return a value `>= required`. Callers clamp
    /// the result to their configured ceiling.
    fn next_capacity(current: usize, required: usize) -> usize;
}

/// Double the capacity on each growth, starting from at least one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    #[inline]
    fn next_capacity(current: usize, required: usize) -> usize {
        current.saturating_mul(2).max(required).max(1)
    }
}

/// Grow by a fixed `STEP` slots each time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear<const STEP: usize>;

impl<const STEP: usize> GrowthPolicy for Linear<STEP> {
    #[inline]
    fn next_capacity(current: usize, required: usize) -> usize {
        current.saturating_add(STEP.max(1)).max(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_from_zero_gives_one() {
        assert_eq!(Doubling::next_capacity(0, 1), 1);
    }

    #[test]
    fn doubling_doubles() {
        assert_eq!(Doubling::next_capacity(1, 2), 2);
        assert_eq!(Doubling::next_capacity(4, 5), 8);
        assert_eq!(Doubling::next_capacity(1024, 1025), 2048);
    }

    #[test]
    fn doubling_honours_large_requirement() {
        assert_eq!(Doubling::next_capacity(4, 100), 100);
    }

    #[test]
    fn doubling_saturates() {
        assert_eq!(Doubling::next_capacity(usize::MAX / 2 + 1, 1), usize::MAX);
    }

    #[test]
    fn linear_adds_step() {
        assert_eq!(Linear::<4>::next_capacity(0, 1), 4);
        assert_eq!(Linear::<4>::next_capacity(4, 5), 8);
        assert_eq!(Linear::<4>::next_capacity(4, 20), 20);
    }

    #[test]
    fn linear_zero_step_still_grows() {
        assert_eq!(Linear::<0>::next_capacity(3, 4), 4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn doubling_satisfies_requirement(
                current in 0usize..1 << 40,
                extra in 1usize..1 << 20,
            ) {
                let required = current + extra;
                let next = Doubling::next_capacity(current, required);
                prop_assert!(next >= required);
                prop_assert!(next >= current.saturating_mul(2));
            }

            #[test]
            fn linear_satisfies_requirement(
                current in 0usize..1 << 40,
                extra in 1usize..1 << 20,
            ) {
                let required = current + extra;
                prop_assert!(Linear::<16>::next_capacity(current, required) >= required);
            }
        }
    }
}
