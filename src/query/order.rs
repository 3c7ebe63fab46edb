//! Ordering operators.

use std::cmp::Ordering;

use tracing::trace;

use crate::query::engine::Query;
use crate::query::profile::{profile_timer, record_profile_timer, ProfileKind};

impl<T: Clone> Query<T> {
    /// Stable sort of a full materialized copy using the caller-supplied
    /// three-way comparator; ties keep their original relative order.
    pub fn order_by<F>(&self, mut compare: F) -> Query<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let timer = profile_timer();
        let mut sorted = self.items().to_vec();
        sorted.sort_by(|a, b| compare(a, b));
        trace!(len = sorted.len(), "order_by materialized");
        record_profile_timer(ProfileKind::Order, timer);
        Query::from_vec(sorted)
    }

    /// `order_by(compare)` followed by a reversal.
    ///
    /// Not a negated comparator: ties end up in reverse-of-original order,
    /// which is observable and intentional.
    pub fn order_by_descending<F>(&self, compare: F) -> Query<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.order_by(compare).reverse()
    }

    /// New sequence with the element order fully inverted.
    pub fn reverse(&self) -> Query<T> {
        let mut inverted = self.items().to_vec();
        inverted.reverse();
        Query::from_vec(inverted)
    }
}
