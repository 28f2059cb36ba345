//! Splitting a sequence of outcomes into failures and successes.
//!
//! A [`Partition`] holds two ordered vectors: every failure payload and every
//! success payload, each in the relative order they were seen. It is built by
//! collecting an iterator of [`Outcome`]s and collapsed back into a single
//! `Outcome` with [`Partition::fold`] and friends.
//!
//! # Example
//!
//! ```rust
//! use bifold::{Outcome, Partition};
//!
//! let parsed: Partition<String, i32> = ["1", "x", "3"]
//!     .iter()
//!     .map(|s| s.parse::<i32>().map_err(|_| format!("not a number: {}", s)))
//!     .map(Outcome::from)
//!     .collect();
//!
//! assert!(parsed.has_both());
//! assert_eq!(parsed.oks(), &[1, 3]);
//!
//! // Any failure wins; the successes are dropped
//! let folded = parsed.fold();
//! assert_eq!(folded, Outcome::err(vec!["not a number: x".to_string()]));
//! ```
//!
//! # Merging partial partitions
//!
//! Partitions (and their [`PartitionBuilder`]s) form a [`Monoid`]: `combine`
//! appends the right-hand failures after the left-hand ones, and likewise for
//! successes. Partials built over disjoint slices of the input can therefore be
//! merged in any grouping. Order is kept within each partial. The global order is
//! the order in which the partials are merged, so callers that merge in completion
//! order get failures and successes in completion order.

mod builder;
#[cfg(feature = "rayon")]
mod parallel;
mod scalar;

pub use builder::PartitionBuilder;
pub use scalar::{DoublePartition, IntPartition, LongPartition, VoidPartition};

use crate::{Monoid, Outcome, Semigroup};

/// The failures and successes of a sequence of outcomes, kept apart.
///
/// A `Partition` never mutates in place through its own API: every `add_*` and
/// `map_*` consumes it and returns a new one. The exceptions are the standard
/// [`Extend`] impl and, with the `rayon` feature, `ParallelExtend`. Both append
/// after the existing elements and are there so a `Partition` can sit behind
/// `&mut` in iterator adapters. Use [`PartitionBuilder`] for explicit accumulation.
///
/// # Example
///
/// ```rust
/// use bifold::{Outcome, Partition};
///
/// let p = Partition::from_parts(vec!["late"], vec![10, 20])
///     .add_oks(vec![30])
///     .add_errs(vec!["lost"]);
///
/// assert_eq!(p.errs(), &["late", "lost"]);
/// assert_eq!(p.oks(), &[10, 20, 30]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition<E, O> {
    errs: Vec<E>,
    oks: Vec<O>,
}

impl<E, O> Partition<E, O> {
    // ========== Constructors ==========

    /// A partition with no elements.
    #[inline]
    pub fn empty() -> Self {
        Partition {
            errs: Vec::new(),
            oks: Vec::new(),
        }
    }

    /// A partition holding the payload of a single outcome on its side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{Outcome, Partition};
    ///
    /// let p: Partition<&str, i32> = Partition::singleton(Outcome::err("nope"));
    /// assert_eq!(p.errs(), &["nope"]);
    /// assert!(!p.has_oks());
    /// ```
    pub fn singleton(outcome: Outcome<E, O>) -> Self {
        outcome.reduce(
            |e| Partition::from_parts(vec![e], Vec::new()),
            |o| Partition::from_parts(Vec::new(), vec![o]),
        )
    }

    /// A partition from ready-made failure and success sequences.
    pub fn from_parts<I, J>(errs: I, oks: J) -> Self
    where
        I: IntoIterator<Item = E>,
        J: IntoIterator<Item = O>,
    {
        Partition {
            errs: errs.into_iter().collect(),
            oks: oks.into_iter().collect(),
        }
    }

    /// Like [`Partition::from_parts`], then routes `more` onto the end of each side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{Outcome, Partition};
    ///
    /// let p = Partition::from_parts_with(
    ///     vec!["a"],
    ///     vec![1],
    ///     vec![Outcome::ok(2), Outcome::err("b")],
    /// );
    /// assert_eq!(p.errs(), &["a", "b"]);
    /// assert_eq!(p.oks(), &[1, 2]);
    /// ```
    pub fn from_parts_with<I, J, K>(errs: I, oks: J, more: K) -> Self
    where
        I: IntoIterator<Item = E>,
        J: IntoIterator<Item = O>,
        K: IntoIterator<Item = Outcome<E, O>>,
    {
        Partition::from_parts(errs, oks).add_outcomes(more)
    }

    // ========== Queries ==========

    /// `true` when at least one failure was collected.
    #[inline]
    pub fn has_errs(&self) -> bool {
        !self.errs.is_empty()
    }

    /// `true` when at least one success was collected.
    #[inline]
    pub fn has_oks(&self) -> bool {
        !self.oks.is_empty()
    }

    /// `true` when both sides are non-empty.
    #[inline]
    pub fn has_both(&self) -> bool {
        self.has_errs() && self.has_oks()
    }

    /// The failures, in order.
    #[inline]
    pub fn errs(&self) -> &[E] {
        &self.errs
    }

    /// The successes, in order.
    #[inline]
    pub fn oks(&self) -> &[O] {
        &self.oks
    }

    /// Total number of collected elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.errs.len() + self.oks.len()
    }

    /// `true` when nothing was collected on either side.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errs.is_empty() && self.oks.is_empty()
    }

    /// Take both sides out.
    #[inline]
    pub fn into_parts(self) -> (Vec<E>, Vec<O>) {
        (self.errs, self.oks)
    }

    // ========== Appends ==========

    /// Append failures after the existing ones.
    pub fn add_errs<I>(mut self, errs: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.errs.extend(errs);
        self
    }

    /// Append successes after the existing ones.
    pub fn add_oks<I>(mut self, oks: I) -> Self
    where
        I: IntoIterator<Item = O>,
    {
        self.oks.extend(oks);
        self
    }

    /// Append failures and successes in one step.
    pub fn add_parts<I, J>(self, errs: I, oks: J) -> Self
    where
        I: IntoIterator<Item = E>,
        J: IntoIterator<Item = O>,
    {
        self.add_errs(errs).add_oks(oks)
    }

    /// Append another partition's sides after this one's.
    #[inline]
    pub fn add_all(self, other: Partition<E, O>) -> Self {
        self.combine(other)
    }

    /// Route each outcome onto the end of its side.
    pub fn add_outcomes<I>(self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome<E, O>>,
    {
        let more: Partition<E, O> = outcomes.into_iter().collect();
        self.combine(more)
    }

    // ========== Maps ==========

    /// Replace the failure vector with `f(failures)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Partition;
    ///
    /// let p = Partition::from_parts(vec!["b", "a"], vec![1])
    ///     .map_errs(|mut errs| {
    ///         errs.sort();
    ///         errs.into_iter().map(str::len).collect()
    ///     });
    /// assert_eq!(p.errs(), &[1, 1]);
    /// ```
    pub fn map_errs<E2, F>(self, f: F) -> Partition<E2, O>
    where
        F: FnOnce(Vec<E>) -> Vec<E2>,
    {
        Partition {
            errs: f(self.errs),
            oks: self.oks,
        }
    }

    /// Replace the success vector with `f(successes)`.
    pub fn map_oks<O2, F>(self, f: F) -> Partition<E, O2>
    where
        F: FnOnce(Vec<O>) -> Vec<O2>,
    {
        Partition {
            errs: self.errs,
            oks: f(self.oks),
        }
    }

    // ========== Folds ==========

    /// Collapse into one outcome.
    ///
    /// If any failure was collected the result is `Err` with all failures, and the
    /// successes are discarded. Otherwise the result is `Ok` with all successes.
    /// An empty partition folds to `Ok(vec![])`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{Outcome, Partition};
    ///
    /// let clean: Partition<&str, i32> = Partition::from_parts(vec![], vec![1, 2]);
    /// assert_eq!(clean.fold(), Outcome::ok(vec![1, 2]));
    ///
    /// let dirty = Partition::from_parts(vec!["x"], vec![1, 2]);
    /// assert_eq!(dirty.fold(), Outcome::err(vec!["x"]));
    /// ```
    pub fn fold(self) -> Outcome<Vec<E>, Vec<O>> {
        self.fold_with(|errs| errs, |oks| oks)
    }

    /// Collapse like [`Partition::fold`], mapping whichever side wins.
    pub fn fold_with<U, V, F, G>(self, fn_err: F, fn_ok: G) -> Outcome<U, V>
    where
        F: FnOnce(Vec<E>) -> U,
        G: FnOnce(Vec<O>) -> V,
    {
        if self.has_errs() {
            self.trace_discard();
            Outcome::Err(fn_err(self.errs))
        } else {
            Outcome::Ok(fn_ok(self.oks))
        }
    }

    /// Collapse into a single value. `fn_err` runs if any failure was collected,
    /// `fn_ok` otherwise.
    pub fn reduce<T, F, G>(self, fn_err: F, fn_ok: G) -> T
    where
        F: FnOnce(Vec<E>) -> T,
        G: FnOnce(Vec<O>) -> T,
    {
        self.fold_with(fn_err, fn_ok).reduce(|t| t, |t| t)
    }

    /// Map each non-empty side, then hand both (possibly absent) results to
    /// `combiner`. Nothing is discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Partition;
    ///
    /// let p = Partition::from_parts(vec!["e1", "e2"], vec![5, 6, 7]);
    /// let summary = p.reduce_both(
    ///     |errs| errs.len(),
    ///     |oks| oks.iter().sum::<i32>(),
    ///     |errs, total| format!("{:?} failed, total {:?}", errs, total),
    /// );
    /// assert_eq!(summary, "Some(2) failed, total Some(18)");
    /// ```
    pub fn reduce_both<T, U, V, F, G, C>(self, fn_err: F, fn_ok: G, combiner: C) -> T
    where
        F: FnOnce(Vec<E>) -> U,
        G: FnOnce(Vec<O>) -> V,
        C: FnOnce(Option<U>, Option<V>) -> T,
    {
        let errs = if self.errs.is_empty() {
            None
        } else {
            Some(fn_err(self.errs))
        };
        let oks = if self.oks.is_empty() {
            None
        } else {
            Some(fn_ok(self.oks))
        };
        combiner(errs, oks)
    }

    /// Hand both vectors to `f` as they are.
    #[inline]
    pub fn reduce_parts<T, F>(self, f: F) -> T
    where
        F: FnOnce(Vec<E>, Vec<O>) -> T,
    {
        f(self.errs, self.oks)
    }

    #[cfg(feature = "tracing")]
    fn trace_discard(&self) {
        if !self.oks.is_empty() {
            tracing::trace!(
                errs = self.errs.len(),
                discarded = self.oks.len(),
                "partition fold dropped successes"
            );
        }
    }

    #[cfg(not(feature = "tracing"))]
    #[inline]
    fn trace_discard(&self) {}
}

impl<E, O> Default for Partition<E, O> {
    #[inline]
    fn default() -> Self {
        Partition::empty()
    }
}

impl<E, O> Semigroup for Partition<E, O> {
    fn combine(self, other: Self) -> Self {
        let (errs, oks) = (self.errs, self.oks).combine((other.errs, other.oks));
        Partition { errs, oks }
    }
}

impl<E, O> Monoid for Partition<E, O> {
    #[inline]
    fn empty() -> Self {
        Partition::empty()
    }
}

impl<E, O> From<PartitionBuilder<E, O>> for Partition<E, O> {
    #[inline]
    fn from(builder: PartitionBuilder<E, O>) -> Self {
        builder.finish()
    }
}

impl<E, O> FromIterator<Outcome<E, O>> for Partition<E, O> {
    fn from_iter<I: IntoIterator<Item = Outcome<E, O>>>(iter: I) -> Self {
        let mut builder = PartitionBuilder::new();
        builder.extend(iter);
        builder.finish()
    }
}

/// Appends in place, after the existing elements.
impl<E, O> Extend<Outcome<E, O>> for Partition<E, O> {
    fn extend<I: IntoIterator<Item = Outcome<E, O>>>(&mut self, iter: I) {
        for outcome in iter {
            match outcome {
                Outcome::Err(e) => self.errs.push(e),
                Outcome::Ok(o) => self.oks.push(o),
            }
        }
    }
}
