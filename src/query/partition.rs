//! Partitioning operators: prefix and suffix slicing.

use crate::query::engine::Query;

impl<T: Clone> Query<T> {
    /// Drops the first `count` elements. `skip(0)` copies the sequence
    /// unchanged; `count >= len` yields an empty sequence.
    pub fn skip(&self, count: usize) -> Query<T> {
        let items = self.items();
        let start = count.min(items.len());
        Query::from_vec(items[start..].to_vec())
    }

    /// Drops elements from the start while the predicate holds, then keeps
    /// everything from the first failing element onward.
    ///
    /// The predicate runs once per dropped element plus the one that ends
    /// the run; it is never re-evaluated on retained elements.
    pub fn skip_while<F>(&self, mut predicate: F) -> Query<T>
    where
        F: FnMut(&T) -> bool,
    {
        let items = self.items();
        let mut start = 0;
        while start < items.len() && predicate(&items[start]) {
            start += 1;
        }
        Query::from_vec(items[start..].to_vec())
    }

    /// First `min(count, len)` elements; `take(0)` yields an empty sequence.
    pub fn take(&self, count: usize) -> Query<T> {
        let items = self.items();
        let end = count.min(items.len());
        Query::from_vec(items[..end].to_vec())
    }

    /// Longest prefix of elements satisfying the predicate, stopping
    /// permanently at the first failure even if later elements would
    /// satisfy it.
    pub fn take_while<F>(&self, mut predicate: F) -> Query<T>
    where
        F: FnMut(&T) -> bool,
    {
        let items = self.items();
        let mut end = 0;
        while end < items.len() && predicate(&items[end]) {
            end += 1;
        }
        Query::from_vec(items[..end].to_vec())
    }
}
