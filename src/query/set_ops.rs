//! Comparison-based set algebra.
//!
//! These operators require the element type to carry a total order
//! (`T: Ord`); `cmp(a, b) == Ordering::Equal` is the value-equality
//! relation throughout. The bound is checked at compile time, so there is no
//! runtime missing-capability failure to report.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::trace;

use crate::query::engine::Query;
use crate::query::profile::{profile_timer, record_profile_timer, ProfileKind};

impl<T: Ord> Query<T> {
    /// True iff some element compares equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.items()
            .iter()
            .any(|item| item.cmp(value) == Ordering::Equal)
    }
}

impl<T: Ord + Clone> Query<T> {
    /// Elements in original order with only the first occurrence of each
    /// comparison-equal group retained.
    pub fn distinct(&self) -> Query<T> {
        let timer = profile_timer();
        let mut seen = BTreeSet::new();
        let mut kept = Vec::new();
        for item in self.items() {
            if seen.insert(item.clone()) {
                kept.push(item.clone());
            }
        }
        record_profile_timer(ProfileKind::SetOp, timer);
        Query::from_vec(kept)
    }

    /// This sequence's elements minus every element comparison-equal to any
    /// element of `other`. All matching occurrences are removed, not just
    /// one.
    pub fn except(&self, other: &Query<T>) -> Query<T> {
        let timer = profile_timer();
        let excluded: BTreeSet<&T> = other.items().iter().collect();
        let kept: Vec<T> = self
            .items()
            .iter()
            .filter(|item| !excluded.contains(item))
            .cloned()
            .collect();
        trace!(kept = kept.len(), excluded = excluded.len(), "except");
        record_profile_timer(ProfileKind::SetOp, timer);
        Query::from_vec(kept)
    }

    /// Elements of `other` that compare equal to at least one element of
    /// this sequence. Result order follows `other`'s order.
    pub fn intersect(&self, other: &Query<T>) -> Query<T> {
        let timer = profile_timer();
        let present: BTreeSet<&T> = self.items().iter().collect();
        let kept: Vec<T> = other
            .items()
            .iter()
            .filter(|item| present.contains(item))
            .cloned()
            .collect();
        record_profile_timer(ProfileKind::SetOp, timer);
        Query::from_vec(kept)
    }

    /// True set union: first occurrences from this sequence, then elements
    /// of `other` with no comparison-equal element already emitted.
    pub fn union(&self, other: &Query<T>) -> Query<T> {
        let timer = profile_timer();
        let mut seen = BTreeSet::new();
        let mut merged = Vec::new();
        for item in self.items().iter().chain(other.items()) {
            if seen.insert(item.clone()) {
                merged.push(item.clone());
            }
        }
        record_profile_timer(ProfileKind::SetOp, timer);
        Query::from_vec(merged)
    }
}
