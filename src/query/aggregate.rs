//! Scalar aggregation operators.
//!
//! Numeric extraction uses `f64`: the bare variants require the element type
//! to convert losslessly (`T: Into<f64> + Copy`), the `_by` variants take a
//! selector. All folds are a single left-to-right pass; `min`/`max` seed the
//! accumulator with the first extracted value.

use crate::error::{QueryError, Result};
use crate::query::engine::Query;
use crate::query::profile::{profile_timer, record_profile_timer, ProfileKind};

impl<T> Query<T> {
    /// Number of elements in the sequence.
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Number of elements satisfying the predicate.
    pub fn count_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.items().iter().filter(|item| predicate(item)).count()
    }

    /// Sum of the selected values, folded left to right.
    ///
    /// Fails when the source is absent; an empty sequence sums to `0.0`.
    pub fn sum_by<F>(&self, mut selector: F) -> Result<f64>
    where
        F: FnMut(&T) -> f64,
    {
        if self.is_absent() {
            return Err(QueryError::absent("sum"));
        }
        let timer = profile_timer();
        let total = self
            .items()
            .iter()
            .map(|item| selector(item))
            .fold(0.0, |acc, value| acc + value);
        record_profile_timer(ProfileKind::Aggregate, timer);
        Ok(total)
    }

    /// Arithmetic mean of the selected values.
    ///
    /// Fails with an empty-sequence error when there is nothing to average
    /// (an absent source counts as empty here).
    pub fn average_by<F>(&self, selector: F) -> Result<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let len = self.items().len();
        if len == 0 {
            return Err(QueryError::empty("average"));
        }
        let total = self.sum_by(selector)?;
        Ok(total / len as f64)
    }

    /// Largest selected value; fails on an empty sequence.
    pub fn max_by<F>(&self, mut selector: F) -> Result<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let timer = profile_timer();
        let mut values = self.items().iter().map(|item| selector(item));
        let seed = values.next().ok_or_else(|| QueryError::empty("max"))?;
        let best = values.fold(seed, |best, value| if value > best { value } else { best });
        record_profile_timer(ProfileKind::Aggregate, timer);
        Ok(best)
    }

    /// Smallest selected value; fails on an empty sequence.
    pub fn min_by<F>(&self, mut selector: F) -> Result<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let timer = profile_timer();
        let mut values = self.items().iter().map(|item| selector(item));
        let seed = values.next().ok_or_else(|| QueryError::empty("min"))?;
        let best = values.fold(seed, |best, value| if value < best { value } else { best });
        record_profile_timer(ProfileKind::Aggregate, timer);
        Ok(best)
    }
}

impl<T> Query<T>
where
    T: Into<f64> + Copy,
{
    /// Sum of the elements themselves. See [`Query::sum_by`].
    pub fn sum(&self) -> Result<f64> {
        self.sum_by(|item| (*item).into())
    }

    /// Arithmetic mean of the elements themselves. See [`Query::average_by`].
    pub fn average(&self) -> Result<f64> {
        self.average_by(|item| (*item).into())
    }

    /// Largest element value. See [`Query::max_by`].
    pub fn max(&self) -> Result<f64> {
        self.max_by(|item| (*item).into())
    }

    /// Smallest element value. See [`Query::min_by`].
    pub fn min(&self) -> Result<f64> {
        self.min_by(|item| (*item).into())
    }
}
