//! Growable contiguous array with explicit capacity control.
//!
//! [`DynamicArray`] owns a single heap buffer, tracks how many of its slots
//! hold live elements, and grows that buffer through a
//! [`GrowthPolicy`](dynarr_core::GrowthPolicy) when an insertion finds it
//! full.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T, P>
//! ├── RawBuffer<T>   (owned allocation, released on drop; no element drops)
//! ├── len            (live prefix of the buffer)
//! ├── max_capacity   (ArrayConfig ceiling, bounded by Layout of T)
//! └── GrowthStats    (reallocation / shift counters)
//! ```
//!
//! # Unsafe code
//!
//! The crate denies `unsafe` by default. The modules that touch
//! uninitialized memory (`raw`, `array`, `iter`) opt back in, and every
//! `unsafe` block carries a `// SAFETY:` comment stating the invariant it
//! relies on.
//!
//! # Invalidation
//!
//! Every call that can reallocate takes `&mut self`, so references and
//! iterators into the array cannot be held across it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod iter;
mod raw;

pub use array::DynamicArray;
pub use config::{ArrayConfig, ConfigError};
pub use dynarr_core::{ArrayError, Doubling, GrowthPolicy, GrowthStats, Linear};
pub use iter::{IntoIter, Iter, IterMut};
