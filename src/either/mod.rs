//! A semantically neutral sum type for representing one of two possible values.
//!
//! # Either vs Outcome
//!
//! `Either<L, R>` carries no success/failure meaning: neither side is the happy
//! path. It has the same projection layer as [`Outcome`], minus the operations
//! that only make sense once a side has been declared the failure.
//!
//! `Left` lines up with `Err` and `Right` with `Ok`, so conversions in both
//! directions are lossless.
//!
//! # Examples
//!
//! ```rust
//! use bifold::Either;
//!
//! // Representing two valid data sources
//! fn get_data(from_cache: bool) -> Either<String, i32> {
//!     if from_cache {
//!         Either::left("cached".to_string())
//!     } else {
//!         Either::right(42)
//!     }
//! }
//!
//! let description = get_data(true).reduce(
//!     |cached| format!("From cache: {}", cached),
//!     |fresh| format!("Fresh value: {}", fresh),
//! );
//! assert_eq!(description, "From cache: cached");
//!
//! let bumped = get_data(false).as_right().map(|n| n + 1);
//! assert_eq!(bumped, Either::right(43));
//! ```

mod view;

pub use view::{LeftView, RightView};

use crate::Outcome;
use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Every transformation consumes the value and returns a new one.
///
/// # Example
///
/// ```rust
/// use bifold::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// match left {
///     Either::Left(n) => assert_eq!(n, 42),
///     Either::Right(_) => unreachable!(),
/// }
///
/// let result = right.reduce(
///     |n| format!("number: {}", n),
///     |s| format!("string: {}", s),
/// );
/// assert_eq!(result, "string: hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a Left value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a Right value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Projections ==========

    /// View the left side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(3);
    /// assert_eq!(e.as_left().opt(), Some(3));
    /// assert_eq!(e.as_right().opt(), None);
    /// ```
    #[inline]
    pub fn as_left(self) -> LeftView<L, R> {
        LeftView::new(self)
    }

    /// View the right side.
    #[inline]
    pub fn as_right(self) -> RightView<L, R> {
        RightView::new(self)
    }

    /// Convert from `&Either<L, R>` to `Either<&L, &R>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<String, i32> = Either::left("hello".to_string());
    /// let r: Either<&String, &i32> = e.as_ref();
    /// assert_eq!(r, Either::left(&"hello".to_string()));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Transformations ==========

    /// Swap Left and Right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert_eq!(e.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Map both sides with their own function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert_eq!(e.map_both(|n| n * 2, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn map_both<L2, R2, F, G>(self, fn_left: F, fn_right: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(fn_left(l)),
            Either::Right(r) => Either::Right(fn_right(r)),
        }
    }

    /// Run the consumer for whichever side is present and return `self`.
    #[inline]
    pub fn peek_both<F, G>(self, fn_left: F, fn_right: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match &self {
            Either::Left(l) => fn_left(l),
            Either::Right(r) => fn_right(r),
        }
        self
    }

    /// Collapse to a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<i32, String> = Either::left(42);
    /// assert_eq!(e.reduce(|n| n.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn reduce<T, F, G>(self, fn_left: F, fn_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => fn_left(l),
            Either::Right(r) => fn_right(r),
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result<R, L>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(42);
    /// assert_eq!(e.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from `Result<R, L>`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Convert to an [`Outcome`], reading Left as the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{Either, Outcome};
    ///
    /// let e: Either<&str, i32> = Either::left("bad");
    /// assert_eq!(e.into_outcome(), Outcome::err("bad"));
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<L, R> {
        match self {
            Either::Left(l) => Outcome::Err(l),
            Either::Right(r) => Outcome::Ok(r),
        }
    }

    /// Create from an [`Outcome`]: `Err` becomes Left, `Ok` becomes Right.
    #[inline]
    pub fn from_outcome(outcome: Outcome<L, R>) -> Self {
        match outcome {
            Outcome::Err(e) => Either::Left(e),
            Outcome::Ok(o) => Either::Right(o),
        }
    }
}

impl<T> Either<T, T> {
    /// Place `value` on the left when `is_left` is set, on the right otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// assert_eq!(Either::of(true, 1), Either::left(1));
    /// assert_eq!(Either::of(false, 1), Either::right(1));
    /// ```
    #[inline]
    pub fn of(is_left: bool, value: T) -> Self {
        if is_left {
            Either::Left(value)
        } else {
            Either::Right(value)
        }
    }

    /// Place `value` on the left when `is_left(&value)` holds, on the right otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let negative = Either::of_with(|n: &i32| *n < 0, -4);
    /// assert_eq!(negative, Either::left(-4));
    /// ```
    #[inline]
    pub fn of_with<P>(is_left: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let left = is_left(&value);
        Either::of(left, value)
    }

    /// The value, whichever side it is on.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(v) | Either::Right(v) => v,
        }
    }
}

// Flatten for nested Either
impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested Either.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(42));
    /// assert_eq!(nested.flatten(), Either::right(42));
    ///
    /// let outer_left: Either<&str, Either<&str, i32>> = Either::left("outer");
    /// assert_eq!(outer_left.flatten(), Either::left("outer"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(inner) => inner,
        }
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> From<Outcome<L, R>> for Either<L, R> {
    fn from(outcome: Outcome<L, R>) -> Self {
        Either::from_outcome(outcome)
    }
}

impl<L, R> From<Either<L, R>> for Outcome<L, R> {
    fn from(either: Either<L, R>) -> Self {
        either.into_outcome()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left[{}]", l),
            Either::Right(r) => write!(f, "Right[{}]", r),
        }
    }
}

// ========== Collection Utilities ==========

/// Partition an iterator of Either into two vectors.
///
/// # Example
///
/// ```rust
/// use bifold::either::{partition, Either};
///
/// let items = vec![
///     Either::left(1),
///     Either::right("a"),
///     Either::left(2),
///     Either::right("b"),
/// ];
///
/// let (lefts, rights) = partition(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a", "b"]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }

    (lefts, rights)
}

/// Extract all Left values from an iterator.
///
/// # Example
///
/// ```rust
/// use bifold::either::{lefts, Either};
///
/// let items = vec![Either::left(1), Either::right("a"), Either::left(2)];
///
/// let left_values: Vec<_> = lefts(items).collect();
/// assert_eq!(left_values, vec![1, 2]);
/// ```
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(|e| e.as_left().opt())
}

/// Extract all Right values from an iterator.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(|e| e.as_right().opt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Either::<i32, &str>::left(42).is_left());
        assert!(Either::<i32, &str>::right("hello").is_right());
    }

    #[test]
    fn test_predicates() {
        let left: Either<i32, &str> = Either::left(42);
        assert!(left.is_left());
        assert!(!left.is_right());

        let right: Either<i32, &str> = Either::right("hello");
        assert!(!right.is_left());
        assert!(right.is_right());
    }

    #[test]
    fn test_of() {
        assert_eq!(Either::of(true, "x"), Either::left("x"));
        assert_eq!(Either::of(false, "x"), Either::right("x"));
        assert_eq!(Either::of_with(|s: &&str| s.is_empty(), ""), Either::left(""));
        assert_eq!(Either::of_with(|s: &&str| s.is_empty(), "y"), Either::right("y"));
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Either::<i32, i32>::left(1).into_inner(), 1);
        assert_eq!(Either::<i32, i32>::right(2).into_inner(), 2);
    }

    #[test]
    fn test_as_ref() {
        let e: Either<String, i32> = Either::right(7);
        assert_eq!(e.as_ref(), Either::right(&7));
    }

    #[test]
    fn test_swap() {
        let e: Either<i32, &str> = Either::left(42);
        assert_eq!(e.swap(), Either::right(42));

        let e: Either<i32, &str> = Either::right("hello");
        assert_eq!(e.swap(), Either::left("hello"));
    }

    #[test]
    fn test_map_both() {
        let left: Either<i32, &str> = Either::left(21);
        assert_eq!(left.map_both(|n| n * 2, |s| s.len()), Either::left(42));

        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(right.map_both(|n| n * 2, |s| s.len()), Either::right(5));
    }

    #[test]
    fn test_peek_both_runs_one_side() {
        let mut left_seen = None;
        let mut right_seen = None;
        let e: Either<i32, i32> = Either::right(3);
        let back = e.peek_both(|l| left_seen = Some(*l), |r| right_seen = Some(*r));
        assert_eq!(back, e);
        assert_eq!(left_seen, None);
        assert_eq!(right_seen, Some(3));
    }

    #[test]
    fn test_reduce() {
        let left: Either<i32, String> = Either::left(42);
        assert_eq!(left.reduce(|n| n.to_string(), |s| s), "42");

        let right: Either<i32, String> = Either::right("hi".to_string());
        assert_eq!(right.reduce(|n| n.to_string(), |s| s), "hi");
    }

    #[test]
    fn test_result_conversion() {
        let ok: Result<i32, &str> = Ok(42);
        let either: Either<&str, i32> = ok.into();
        assert_eq!(either, Either::right(42));

        let err: Result<i32, &str> = Err("error");
        let either: Either<&str, i32> = err.into();
        assert_eq!(either, Either::left("error"));

        let original: Either<&str, i32> = Either::right(42);
        let result: Result<i32, &str> = original.into();
        let back: Either<&str, i32> = result.into();
        assert_eq!(back, Either::right(42));
    }

    #[test]
    fn test_outcome_conversion() {
        let left: Either<&str, i32> = Either::left("bad");
        let outcome: Outcome<&str, i32> = left.into();
        assert_eq!(outcome, Outcome::err("bad"));
        assert_eq!(Either::from(outcome), left);

        let right: Either<&str, i32> = Either::right(1);
        assert_eq!(right.into_outcome(), Outcome::ok(1));
    }

    #[test]
    fn test_nested_in_outcome() {
        let nested: Outcome<String, Either<i32, char>> = Outcome::ok(Either::left(5));
        let inner = nested.as_ok().map(|e| e.as_left().map(|n| n * 2));
        assert_eq!(inner, Outcome::ok(Either::left(10)));
    }

    #[test]
    fn test_display() {
        let left: Either<i32, &str> = Either::left(1);
        let right: Either<i32, &str> = Either::right("r");
        assert_eq!(left.to_string(), "Left[1]");
        assert_eq!(right.to_string(), "Right[r]");
    }

    #[test]
    fn test_partition() {
        let items = vec![
            Either::left(1),
            Either::right("a"),
            Either::left(2),
            Either::right("b"),
        ];

        let (lefts, rights) = partition(items);
        assert_eq!(lefts, vec![1, 2]);
        assert_eq!(rights, vec!["a", "b"]);
    }

    #[test]
    fn test_lefts() {
        let items = vec![Either::left(1), Either::right("a"), Either::left(2)];

        let left_values: Vec<_> = lefts(items).collect();
        assert_eq!(left_values, vec![1, 2]);
    }

    #[test]
    fn test_rights() {
        let items = vec![Either::left(1), Either::right("a"), Either::right("b")];

        let right_values: Vec<_> = rights(items).collect();
        assert_eq!(right_values, vec!["a", "b"]);
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(42));
        assert_eq!(nested.flatten(), Either::right(42));

        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
        assert_eq!(nested.flatten(), Either::left("inner"));

        let nested: Either<&str, Either<&str, i32>> = Either::left("outer");
        assert_eq!(nested.flatten(), Either::left("outer"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let e: Either<String, i32> = Either::right(3);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"Right":3}"#);
        let back: Either<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_swap_involution(x: i32) {
            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.swap().swap(), e);

            let e: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(e.swap().swap(), e);
        }

        #[test]
        fn prop_result_roundtrip(x: i32) {
            let either: Either<(), i32> = Either::right(x);
            let result: Result<i32, ()> = either.into();
            let back: Either<(), i32> = result.into();
            prop_assert_eq!(back, Either::right(x));
        }

        #[test]
        fn prop_outcome_roundtrip(x: i32, left: bool) {
            let either: Either<i32, i32> = Either::of(left, x);
            prop_assert_eq!(Either::from_outcome(either.into_outcome()), either);
        }

        #[test]
        fn prop_map_both_swap_commutes(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.map_both(f, g).swap(), e.swap().map_both(g, f));

            let e: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(e.map_both(f, g).swap(), e.swap().map_both(g, f));
        }
    }
}
