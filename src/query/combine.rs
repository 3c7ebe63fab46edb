//! Sequence combinators: gluing, pairwise combination, fallbacks, and
//! replication.

use crate::error::{QueryError, Result};
use crate::query::engine::Query;

impl<T: Clone> Query<T> {
    /// This sequence's elements followed by `other`'s, in order, no dedup.
    pub fn concat(&self, other: &Query<T>) -> Query<T> {
        let mut joined = self.items().to_vec();
        joined.extend_from_slice(other.items());
        Query::from_vec(joined)
    }

    /// A one-element sequence holding `default` when this sequence is empty
    /// (an absent source counts as empty); otherwise an unchanged copy.
    pub fn default_if_empty(&self, default: T) -> Query<T> {
        if self.items().is_empty() {
            Query::from_vec(vec![default])
        } else {
            Query::from_vec(self.items().to_vec())
        }
    }

    /// A sequence of `count` elements, each an independent clone of
    /// `element` — never the same shared value repeated, so mutating one
    /// output element later cannot affect another.
    pub fn repeat(element: &T, count: usize) -> Query<T> {
        let cloned: Vec<T> = (0..count).map(|_| element.clone()).collect();
        Query::from_vec(cloned)
    }
}

impl<T> Query<T> {
    /// Pairwise-combines positions `0..min(len, other.len)`; trailing
    /// unmatched elements of the longer sequence are discarded.
    ///
    /// Fails when either sequence is absent (as opposed to merely empty).
    pub fn zip<U, R, F>(&self, other: &Query<U>, mut combine: F) -> Result<Query<R>>
    where
        F: FnMut(&T, &U) -> R,
    {
        if self.is_absent() || other.is_absent() {
            return Err(QueryError::absent("zip"));
        }
        let combined = self
            .items()
            .iter()
            .zip(other.items())
            .map(|(a, b)| combine(a, b))
            .collect();
        Ok(Query::from_vec(combined))
    }
}
