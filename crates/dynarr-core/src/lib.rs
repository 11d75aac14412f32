//! Core types for the dynarr container.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces of the container that carry no memory management of their own:
//! the error type, the growth policies that decide how capacity expands,
//! and the counters that record how much relocation work growth cost.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod growth;
pub mod stats;

pub use error::ArrayError;
pub use growth::{Doubling, GrowthPolicy, Linear};
pub use stats::GrowthStats;
