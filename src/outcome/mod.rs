//! A two-sided success/failure value with optional-like projections.
//!
//! `Outcome<E, O>` holds exactly one payload: a failure `E` or a success `O`.
//! Any value is a legal payload for the active side, including `None`, `()` or an
//! empty collection.
//!
//! # Outcome vs Result
//!
//! `Outcome` converts losslessly to and from `std::result::Result`. What it adds
//! is the projection layer: [`Outcome::as_ok`] and [`Outcome::as_err`] hand back a
//! view of one side that behaves like an `Option`, while still remembering the
//! opposite payload so it can be recovered, flipped or passed through.
//!
//! # Examples
//!
//! ```rust
//! use bifold::Outcome;
//!
//! let parsed: Outcome<String, i32> = Outcome::ok(21);
//!
//! let doubled = parsed.as_ok().map(|n| n * 2);
//! assert_eq!(doubled, Outcome::ok(42));
//!
//! // The empty side answers as absent but can still see the other payload
//! let failed: Outcome<String, i32> = Outcome::err("bad input".to_string());
//! assert_eq!(failed.clone().as_ok().opt(), None);
//! assert_eq!(failed.as_ok().or_else_map(|msg| msg.len() as i32), 9);
//! ```
//!
//! # Views compare like the value they wrap
//!
//! A view is equal to the `Outcome` it was taken from, and to any view (of either
//! side) taken from an equal `Outcome`:
//!
//! ```rust
//! use bifold::Outcome;
//!
//! let a: Outcome<(), &str> = Outcome::ok("same");
//! let b: Outcome<(), &str> = Outcome::ok("same");
//!
//! assert_eq!(a.as_ok(), b.as_err());
//! assert_eq!(a.as_err(), b);
//! ```

mod scalar;
mod view;

pub use scalar::{DoubleOutcome, IntOutcome, LongOutcome, Scalar, VoidOutcome};
pub use view::{ErrView, OkView};

use std::fmt;

/// A value that is either a failure `Err(E)` or a success `Ok(O)`.
///
/// Instances are immutable: every transformation consumes the value and returns a
/// new one.
///
/// # Example
///
/// ```rust
/// use bifold::Outcome;
///
/// let ok: Outcome<&str, i32> = Outcome::ok(42);
/// let err: Outcome<&str, i32> = Outcome::err("boom");
///
/// assert!(ok.is_ok());
/// assert!(err.is_err());
///
/// let described = err.reduce(|e| format!("failed: {}", e), |v| format!("got {}", v));
/// assert_eq!(described, "failed: boom");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<E, O> {
    /// The failure variant
    Err(E),
    /// The success variant
    Ok(O),
}

impl<E, O> Outcome<E, O> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let o: Outcome<String, Option<i32>> = Outcome::ok(None);
    /// assert!(o.is_ok());
    /// ```
    #[inline]
    pub fn ok(value: O) -> Self {
        Outcome::Ok(value)
    }

    /// Create a failed outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let o: Outcome<&str, i32> = Outcome::err("nope");
    /// assert!(o.is_err());
    /// ```
    #[inline]
    pub fn err(value: E) -> Self {
        Outcome::Err(value)
    }

    /// Create a success from `Some`, or a failure built by `err_fn` from `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let found: Outcome<&str, i32> = Outcome::ok_or_else(Some(42), || "missing");
    /// let missing: Outcome<&str, i32> = Outcome::ok_or_else(None, || "missing");
    ///
    /// assert_eq!(found, Outcome::ok(42));
    /// assert_eq!(missing, Outcome::err("missing"));
    /// ```
    #[inline]
    pub fn ok_or_else<F>(maybe_ok: Option<O>, err_fn: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match maybe_ok {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(err_fn()),
        }
    }

    /// Wrap every element as a failure, preserving order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let wrapped: Vec<Outcome<i32, String>> = Outcome::wrap_errs(vec![1, 2]);
    /// assert_eq!(wrapped, vec![Outcome::err(1), Outcome::err(2)]);
    /// ```
    pub fn wrap_errs<I>(errs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = E>,
    {
        errs.into_iter().map(Outcome::Err).collect()
    }

    /// Wrap every element as a success, preserving order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let wrapped: Vec<Outcome<String, i32>> = Outcome::wrap_oks(vec![1, 2]);
    /// assert_eq!(wrapped, vec![Outcome::ok(1), Outcome::ok(2)]);
    /// ```
    pub fn wrap_oks<I>(oks: I) -> Vec<Self>
    where
        I: IntoIterator<Item = O>,
    {
        oks.into_iter().map(Outcome::Ok).collect()
    }

    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    // ========== Projections ==========

    /// View this outcome through its success side.
    ///
    /// The view is matching when this is an `Ok`, and empty otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let ok: Outcome<&str, i32> = Outcome::ok(7);
    /// assert_eq!(ok.as_ok().get(), 7);
    /// ```
    #[inline]
    pub fn as_ok(self) -> OkView<E, O> {
        OkView::new(self)
    }

    /// View this outcome through its failure side.
    ///
    /// The view is matching when this is an `Err`, and empty otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let err: Outcome<&str, i32> = Outcome::err("bad");
    /// assert_eq!(err.as_err().get(), "bad");
    /// ```
    #[inline]
    pub fn as_err(self) -> ErrView<E, O> {
        ErrView::new(self)
    }

    /// Convert to `Outcome<&E, &O>`, so a projection can be taken without
    /// giving the value up.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let ok: Outcome<String, String> = Outcome::ok("kept".to_string());
    /// assert_eq!(ok.as_ref().as_ok().map(|s| s.len()), Outcome::ok(4));
    /// assert!(ok.is_ok());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&E, &O> {
        match self {
            Outcome::Err(e) => Outcome::Err(e),
            Outcome::Ok(o) => Outcome::Ok(o),
        }
    }

    // ========== Transformations ==========

    /// Swap the sides, keeping the payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::err(42);
    /// assert_eq!(err.swap(), Outcome::ok(42));
    /// assert_eq!(err.swap().swap(), err);
    /// ```
    #[inline]
    pub fn swap(self) -> Outcome<O, E> {
        match self {
            Outcome::Err(e) => Outcome::Ok(e),
            Outcome::Ok(o) => Outcome::Err(o),
        }
    }

    /// Transform whichever payload is active, keeping the tag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::err(42);
    /// let ok: Outcome<i32, &str> = Outcome::ok("");
    ///
    /// assert_eq!(err.map_both(|i| i as i64 * 2, |s| s.is_empty()), Outcome::err(84i64));
    /// assert_eq!(ok.map_both(|i| i as i64 * 2, |s| s.is_empty()), Outcome::ok(true));
    /// ```
    #[inline]
    pub fn map_both<E2, O2, F, G>(self, fn_err: F, fn_ok: G) -> Outcome<E2, O2>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(O) -> O2,
    {
        match self {
            Outcome::Err(e) => Outcome::Err(fn_err(e)),
            Outcome::Ok(o) => Outcome::Ok(fn_ok(o)),
        }
    }

    /// Run a side effect on whichever payload is active and return `self`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let mut seen = None;
    /// let ok: Outcome<&str, i32> = Outcome::ok(3);
    /// let same = ok.peek_both(|_| (), |v| seen = Some(*v));
    ///
    /// assert_eq!(same, Outcome::ok(3));
    /// assert_eq!(seen, Some(3));
    /// ```
    #[inline]
    pub fn peek_both<F, G>(self, fn_err: F, fn_ok: G) -> Self
    where
        F: FnOnce(&E),
        G: FnOnce(&O),
    {
        match &self {
            Outcome::Err(e) => fn_err(e),
            Outcome::Ok(o) => fn_ok(o),
        }
        self
    }

    /// Collapse both sides into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let err: Outcome<i32, bool> = Outcome::err(42);
    /// assert_eq!(err.reduce(|i| i.to_string(), |b| b.to_string()), "42");
    /// ```
    #[inline]
    pub fn reduce<T, F, G>(self, fn_err: F, fn_ok: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(O) -> T,
    {
        match self {
            Outcome::Err(e) => fn_err(e),
            Outcome::Ok(o) => fn_ok(o),
        }
    }

    /// Convert the success payload through a lossless `From` conversion.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{IntOutcome, LongOutcome};
    ///
    /// let narrow: IntOutcome<&str> = IntOutcome::ok(7);
    /// let wide: LongOutcome<&str> = narrow.widen();
    /// assert_eq!(wide, LongOutcome::ok(7i64));
    /// ```
    #[inline]
    pub fn widen<Z>(self) -> Outcome<E, Z>
    where
        Z: From<O>,
    {
        match self {
            Outcome::Err(e) => Outcome::Err(e),
            Outcome::Ok(o) => Outcome::Ok(Z::from(o)),
        }
    }

    // ========== Conversions ==========

    /// Wrap this outcome in a single-element `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<Self> {
        vec![self]
    }

    /// Turn this outcome into an iterator yielding it exactly once.
    ///
    /// Useful with `flat_map` when a pipeline step produces one outcome.
    #[inline]
    pub fn into_once(self) -> std::iter::Once<Self> {
        std::iter::once(self)
    }

    /// Convert to a `Result` (`Ok` stays `Ok`, `Err` stays `Err`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let ok: Outcome<&str, i32> = Outcome::ok(42);
    /// assert_eq!(ok.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<O, E> {
        match self {
            Outcome::Err(e) => Err(e),
            Outcome::Ok(o) => Ok(o),
        }
    }

    /// Create from a `Result`.
    #[inline]
    pub fn from_result(result: Result<O, E>) -> Self {
        match result {
            Ok(o) => Outcome::Ok(o),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<E, O> Outcome<Vec<E>, O> {
    /// Create a failure holding all the given errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let errs: Outcome<Vec<&str>, i32> = Outcome::err_vec(["a", "b"]);
    /// assert_eq!(errs, Outcome::err(vec!["a", "b"]));
    /// ```
    pub fn err_vec<I>(errs: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Outcome::Err(errs.into_iter().collect())
    }
}

impl<E, O> Outcome<E, Vec<O>> {
    /// Create a success holding all the given values.
    pub fn ok_vec<I>(oks: I) -> Self
    where
        I: IntoIterator<Item = O>,
    {
        Outcome::Ok(oks.into_iter().collect())
    }
}

// ========== Trait Implementations ==========

impl<E, O> From<Result<O, E>> for Outcome<E, O> {
    fn from(result: Result<O, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<E, O> From<Outcome<E, O>> for Result<O, E> {
    fn from(outcome: Outcome<E, O>) -> Self {
        outcome.into_result()
    }
}

impl<E: fmt::Display, O: fmt::Display> fmt::Display for Outcome<E, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Err(e) => write!(f, "Err[{}]", e),
            Outcome::Ok(o) => write!(f, "Ok[{}]", o),
        }
    }
}
