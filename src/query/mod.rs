#![forbid(unsafe_code)]

//! Chainable query operators over in-memory sequences.
//!
//! The engine wraps a source collection in a [`Query`] and exposes the full
//! operator set as chainable methods. Sequence-returning operators
//! materialize their complete result before wrapping it in a new `Query`,
//! so chains form a linear pipeline of independent instances.

/// Core queryable type: construction, materialization, filtering,
/// projection, and element access.
pub mod engine;

/// Performance profiling for query operators.
///
/// Collects timing and count statistics, enabled via the `CADENA_PROFILE`
/// environment variable.
pub mod profile;

mod aggregate;
mod combine;
mod order;
mod partition;
mod set_ops;

pub use engine::Query;
pub use profile::{profile_snapshot, QueryProfileSnapshot};
