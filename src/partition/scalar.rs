//! Partitions of scalar outcomes.
//!
//! A void partition stores its successes as a `Vec<()>`, which never allocates, so
//! the success side is effectively a counter.

use super::Partition;
use crate::{Outcome, VoidOutcome};

/// Partition of [`IntOutcome`](crate::IntOutcome)s.
pub type IntPartition<E> = Partition<E, i32>;

/// Partition of [`LongOutcome`](crate::LongOutcome)s.
pub type LongPartition<E> = Partition<E, i64>;

/// Partition of [`DoubleOutcome`](crate::DoubleOutcome)s.
pub type DoublePartition<E> = Partition<E, f64>;

/// Partition of [`VoidOutcome`]s.
pub type VoidPartition<E> = Partition<E, ()>;

impl<E> Partition<E, ()> {
    /// A void partition with `errs` and `count` successes.
    pub fn from_errs_and_count<I>(errs: I, count: usize) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Partition::from_parts(errs, std::iter::repeat(()).take(count))
    }

    /// Number of successes collected.
    #[inline]
    pub fn ok_count(&self) -> usize {
        self.oks().len()
    }

    /// Add `count` more successes.
    pub fn add_done(self, count: usize) -> Self {
        self.add_oks(std::iter::repeat(()).take(count))
    }

    /// Collapse into the failures, or the number of successes when there were none.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{Outcome, VoidOutcome, VoidPartition};
    ///
    /// let writes: VoidPartition<&str> = vec![VoidOutcome::done(), VoidOutcome::done()]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(writes.fold_count(), Outcome::ok(2));
    /// ```
    pub fn fold_count(self) -> Outcome<Vec<E>, usize> {
        self.fold_with(|errs| errs, |oks| oks.len())
    }

    /// Collapse into a single void outcome, mapping the failures if there are any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{VoidOutcome, VoidPartition};
    ///
    /// let writes: VoidPartition<&str> = vec![VoidOutcome::done(), VoidOutcome::err("disk full")]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(writes.fold_void(|errs| errs.join("; ")), VoidOutcome::err("disk full".to_string()));
    /// ```
    pub fn fold_void<U, F>(self, fn_err: F) -> VoidOutcome<U>
    where
        F: FnOnce(Vec<E>) -> U,
    {
        self.fold_with(fn_err, |_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DoubleOutcome, IntOutcome, LongOutcome};

    #[test]
    fn test_void_counts() {
        let p: VoidPartition<&str> = vec![
            VoidOutcome::done(),
            VoidOutcome::err("a"),
            VoidOutcome::done(),
        ]
        .into_iter()
        .collect();
        assert_eq!(p.ok_count(), 2);
        assert!(p.has_both());
        assert_eq!(p.add_done(3).ok_count(), 5);
    }

    #[test]
    fn test_from_errs_and_count() {
        let p = VoidPartition::from_errs_and_count(vec!["x"], 4);
        assert_eq!(p.errs(), &["x"]);
        assert_eq!(p.ok_count(), 4);
    }

    #[test]
    fn test_fold_count() {
        let clean: VoidPartition<&str> = VoidPartition::from_errs_and_count(vec![], 3);
        assert_eq!(clean.fold_count(), Outcome::ok(3));

        let dirty = VoidPartition::from_errs_and_count(vec!["x"], 3);
        assert_eq!(dirty.fold_count(), Outcome::err(vec!["x"]));
    }

    #[test]
    fn test_fold_void() {
        let clean: VoidPartition<&str> = VoidPartition::empty();
        assert_eq!(clean.fold_void(|errs| errs.len()), VoidOutcome::done());

        let dirty = VoidPartition::from_errs_and_count(vec!["x", "y"], 1);
        assert_eq!(dirty.fold_void(|errs| errs.len()), VoidOutcome::err(2));
    }

    #[test]
    fn test_int_partition_sums_through_fold_with() {
        let p: IntPartition<String> = (1..=4).map(IntOutcome::ok).collect();
        assert_eq!(p.fold_with(|e| e, |oks| oks.iter().sum::<i32>()), Outcome::ok(10));
    }

    #[test]
    fn test_long_and_double_partitions() {
        let longs: LongPartition<&str> = vec![LongOutcome::ok(i64::MAX), LongOutcome::err("x")]
            .into_iter()
            .collect();
        assert_eq!(longs.oks(), &[i64::MAX]);

        let doubles: DoublePartition<&str> = vec![DoubleOutcome::ok(0.5), DoubleOutcome::ok(1.5)]
            .into_iter()
            .collect();
        assert_eq!(doubles.fold(), Outcome::ok(vec![0.5, 1.5]));
    }
}
