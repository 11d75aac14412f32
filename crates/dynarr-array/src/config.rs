//! Array configuration parameters.

use std::error::Error;
use std::fmt;

use dynarr_core::ArrayError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 1, so the first insertion never has to grow from an empty
    /// buffer. Zero is allowed and defers allocation to the first insert.
    pub initial_capacity: usize,

    /// Upper bound on the capacity the array may grow to.
    ///
    /// Default: `usize::MAX`. The effective ceiling is further bounded by
    /// the largest array of `T` a `Layout` can describe. Growth beyond the
    /// ceiling fails with [`ArrayError::CapacityLimit`].
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Default capacity ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// Create a config with the given initial capacity and no ceiling.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Set the capacity ceiling.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_capacity == 0 {
            return Err(ConfigError::ZeroMaxCapacity);
        }
        if self.initial_capacity > self.max_capacity {
            return Err(ConfigError::InitialExceedsMax {
                initial: self.initial_capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Errors detected by [`ArrayConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` is larger than `max_capacity`.
    InitialExceedsMax {
        /// The requested initial capacity.
        initial: usize,
        /// The configured ceiling.
        max: usize,
    },
    /// `max_capacity` is zero, which would forbid every insertion.
    ZeroMaxCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialExceedsMax { initial, max } => {
                write!(f, "initial capacity {initial} exceeds max capacity {max}")
            }
            Self::ZeroMaxCapacity => write!(f, "max capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for ArrayError {
    fn from(err: ConfigError) -> Self {
        ArrayError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warm_started() {
        let config = ArrayConfig::default();
        assert_eq!(config.initial_capacity, 1);
        assert_eq!(config.max_capacity, usize::MAX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_initial_capacity_is_valid() {
        assert!(ArrayConfig::new(0).validate().is_ok());
    }

    #[test]
    fn initial_above_max_rejected() {
        let config = ArrayConfig::new(16).with_max_capacity(8);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InitialExceedsMax { initial: 16, max: 8 })
        );
    }

    #[test]
    fn zero_max_rejected() {
        let config = ArrayConfig::new(0).with_max_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxCapacity));
    }

    #[test]
    fn converts_into_array_error() {
        let err: ArrayError = ConfigError::ZeroMaxCapacity.into();
        assert_eq!(
            err,
            ArrayError::InvalidConfig {
                reason: "max capacity must be at least 1".into()
            }
        );
    }
}
