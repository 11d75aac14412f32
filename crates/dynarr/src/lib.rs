//! Dynarr: a growable, contiguous, random-access array.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates. For most users, adding `dynarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut arr = dynarr![1, 2];
//! arr.push_front(0)?;
//! arr.insert(1, 99)?;
//! assert_eq!(arr, [0, 99, 1, 2]);
//!
//! // Checked access reports the index and the length.
//! assert_eq!(
//!     arr.at(4),
//!     Err(ArrayError::OutOfRange { index: 4, len: 4 })
//! );
//!
//! // Explicit reserve allocates exactly what was asked for.
//! assert!(arr.reserve(32)?);
//! assert_eq!(arr.capacity(), 32);
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dynarr-core` | Errors, growth policies, growth counters |
//! | [`array`] | `dynarr-array` | `DynamicArray`, `ArrayConfig`, iterators |
//!
//! # Features
//!
//! - `tracing`: emit a `trace`-level event for every reallocation. Off by
//!   default; the array does no logging without it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, growth policies and counters (`dynarr-core`).
///
/// Implement [`types::GrowthPolicy`] to plug a custom growth curve into
/// [`DynamicArray`].
pub use dynarr_core as types;

/// The array, its configuration and iterators (`dynarr-array`).
pub use dynarr_array as array;

pub use dynarr_array::{ArrayConfig, DynamicArray};
pub use dynarr_core::ArrayError;

/// Build a [`DynamicArray`] from a literal sequence.
///
/// - `dynarr![]` is an empty array with the default capacity.
/// - `dynarr![a, b, c]` holds the elements in order, with capacity equal to
///   their count.
/// - `dynarr![x; n]` holds `n` clones of `x`.
///
/// ```rust
/// use dynarr::{dynarr, DynamicArray};
///
/// let empty: DynamicArray<u8> = dynarr![];
/// assert_eq!(empty.capacity(), 1);
///
/// let arr = dynarr!["a", "b", "c"];
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.capacity(), 3);
///
/// let zeros = dynarr![0u32; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        ::core::iter::repeat($elem)
            .take($n)
            .collect::<$crate::DynamicArray<_>>()
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::DynamicArray<_>>::from([$($x),+])
    };
}

/// Common imports for typical dynarr usage.
///
/// ```rust
/// use dynarr::prelude::*;
/// ```
///
/// This imports the array, its config and error types, the growth
/// policies and the `dynarr!` macro.
pub mod prelude {
    // Container
    pub use dynarr_array::{ArrayConfig, DynamicArray};

    // Errors
    pub use dynarr_array::ConfigError;
    pub use dynarr_core::ArrayError;

    // Growth
    pub use dynarr_core::{Doubling, GrowthPolicy, GrowthStats, Linear};

    // Macro
    pub use crate::dynarr;
}
