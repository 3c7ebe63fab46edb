//! Cadena: an eager, chainable query engine over in-memory sequences.
//!
//! Wrap any finite collection in a [`Query`] and compose filtering,
//! projection, ordering, set algebra, aggregation, partitioning, and
//! element-access operators into pipelines. Every transforming operator
//! returns a brand-new `Query` backed by a freshly materialized sequence;
//! instances already handed to a caller are never mutated.
//!
//! Evaluation is eager and synchronous: each operator runs to completion
//! when called. There is no lazy iteration, no cursor state, and no
//! background work.

#![warn(missing_docs)]

pub mod error;
pub mod query;

pub use error::{QueryError, Result};
pub use query::Query;
