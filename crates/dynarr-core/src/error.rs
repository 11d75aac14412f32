//! Error types for dynamic array operations.
//!
//! Every fallible operation reports one of these variants and leaves the
//! container exactly as it was before the call.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index fell outside the valid range for the operation.
    ///
    /// Element access accepts `[0, len)`; insertion accepts `[0, len]`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The allocator could not satisfy a request for `requested` slots.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
    },
    /// The byte size of `requested` slots is not representable.
    CapacityOverflow {
        /// Number of element slots requested.
        requested: usize,
    },
    /// Growth would exceed the configured capacity ceiling.
    CapacityLimit {
        /// Number of element slots requested.
        requested: usize,
        /// The configured ceiling.
        limit: usize,
    },
    /// The configuration passed to a constructor was rejected.
    InvalidConfig {
        /// Description of the rejected value.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} slots failed")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots exceed the address space")
            }
            Self::CapacityLimit { requested, limit } => {
                write!(
                    f,
                    "capacity limit exceeded: requested {requested} slots, limit {limit}"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ArrayError {}

impl ArrayError {
    /// Whether this error came from the allocation path rather than from
    /// a bad index or config.
    pub fn is_allocation(&self) -> bool {
        matches!(
            self,
            Self::AllocationFailed { .. }
                | Self::CapacityOverflow { .. }
                | Self::CapacityLimit { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = ArrayError::OutOfRange { index: 4, len: 4 };
        assert_eq!(err.to_string(), "index 4 out of range for length 4");
    }

    #[test]
    fn capacity_limit_message() {
        let err = ArrayError::CapacityLimit {
            requested: 9,
            limit: 8,
        };
        assert_eq!(
            err.to_string(),
            "capacity limit exceeded: requested 9 slots, limit 8"
        );
    }

    #[test]
    fn allocation_classification() {
        assert!(ArrayError::AllocationFailed { requested: 1 }.is_allocation());
        assert!(ArrayError::CapacityOverflow { requested: 1 }.is_allocation());
        assert!(ArrayError::CapacityLimit {
            requested: 2,
            limit: 1
        }
        .is_allocation());
        assert!(!ArrayError::OutOfRange { index: 0, len: 0 }.is_allocation());
        assert!(!ArrayError::InvalidConfig {
            reason: "x".into()
        }
        .is_allocation());
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn Error> = Box::new(ArrayError::OutOfRange { index: 1, len: 0 });
        assert!(boxed.source().is_none());
    }
}
