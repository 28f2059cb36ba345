//! Success-side and failure-side views of an [`Outcome`].
//!
//! A view owns the outcome it was taken from. When the view's side matches the
//! active tag it exposes the payload; otherwise it is empty, answers every query as
//! absent, and passes the wrapped outcome through untouched.
//!
//! Equality and hashing are defined on the wrapped outcome only, so a view is
//! interchangeable with the outcome itself and with the opposite view of an equal
//! outcome.

use super::{DoubleOutcome, IntOutcome, LongOutcome, Outcome, VoidOutcome};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The success-side view of an [`Outcome`], created by [`Outcome::as_ok`].
///
/// # Example
///
/// ```rust
/// use bifold::Outcome;
///
/// let ok: Outcome<String, i32> = Outcome::ok(5);
/// assert!(ok.clone().as_ok().filter(|n| *n > 0));
/// assert_eq!(ok.as_ok().map(|n| n + 1), Outcome::ok(6));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OkView<E, O> {
    outcome: Outcome<E, O>,
}

/// The failure-side view of an [`Outcome`], created by [`Outcome::as_err`].
///
/// # Example
///
/// ```rust
/// use bifold::Outcome;
///
/// let err: Outcome<i32, String> = Outcome::err(42);
/// let flipped = err.as_err().filter_map(|i| *i == 42, |_| "forty-two".to_string());
/// assert_eq!(flipped, Outcome::ok("forty-two".to_string()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ErrView<E, O> {
    outcome: Outcome<E, O>,
}

impl<E, O> OkView<E, O> {
    #[inline]
    pub(crate) fn new(outcome: Outcome<E, O>) -> Self {
        OkView { outcome }
    }

    /// Returns `true` if the wrapped outcome is an `Ok`.
    #[inline]
    pub fn is_matching(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Give back the wrapped outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<E, O> {
        self.outcome
    }

    /// Extract the success value.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Err`. Reading the wrong side is a
    /// programming error, not a domain failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let ok: Outcome<&str, i32> = Outcome::ok(42);
    /// assert_eq!(ok.as_ok().get(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(self) -> O {
        match self.outcome {
            Outcome::Ok(o) => o,
            Outcome::Err(_) => panic!("called `OkView::get()` on an `Err` outcome"),
        }
    }

    /// Return the success value, or the fault built from the failure payload.
    ///
    /// The fault comes back as the `Err` of a `Result` so it can be raised with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// fn port(raw: Outcome<String, u16>) -> Result<u16, std::io::Error> {
    ///     raw.as_ok()
    ///         .or_raise(|msg| std::io::Error::new(std::io::ErrorKind::InvalidInput, msg))
    /// }
    ///
    /// assert_eq!(port(Outcome::ok(8080)).unwrap(), 8080);
    /// assert!(port(Outcome::err("no port".to_string())).is_err());
    /// ```
    #[inline]
    pub fn or_raise<X, F>(self, fault_fn: F) -> Result<O, X>
    where
        F: FnOnce(E) -> X,
    {
        match self.outcome {
            Outcome::Ok(o) => Ok(o),
            Outcome::Err(e) => Err(fault_fn(e)),
        }
    }

    /// Return the success value, or derive one from the failure payload.
    #[inline]
    pub fn or_else_map<F>(self, f: F) -> O
    where
        F: FnOnce(E) -> O,
    {
        match self.outcome {
            Outcome::Ok(o) => o,
            Outcome::Err(e) => f(e),
        }
    }

    /// Return the success value, or `fallback`.
    #[inline]
    pub fn or(self, fallback: O) -> O {
        match self.outcome {
            Outcome::Ok(o) => o,
            Outcome::Err(_) => fallback,
        }
    }

    /// Return the success value as an `Option`.
    #[inline]
    pub fn opt(self) -> Option<O> {
        match self.outcome {
            Outcome::Ok(o) => Some(o),
            Outcome::Err(_) => None,
        }
    }

    /// Test the success value. An empty view always passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let ok: Outcome<&str, i32> = Outcome::ok(3);
    /// let err: Outcome<&str, i32> = Outcome::err("x");
    ///
    /// assert!(!ok.as_ok().filter(|n| *n > 5));
    /// assert!(err.as_ok().filter(|n| *n > 5));
    /// ```
    #[inline]
    pub fn filter<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&O) -> bool,
    {
        match &self.outcome {
            Outcome::Ok(o) => predicate(o),
            Outcome::Err(_) => true,
        }
    }

    /// Run `f` on the success value, if any, and return the wrapped outcome.
    #[inline]
    pub fn peek<F>(self, f: F) -> Outcome<E, O>
    where
        F: FnOnce(&O),
    {
        if let Outcome::Ok(o) = &self.outcome {
            f(o);
        }
        self.outcome
    }

    /// Turn a success into a failure when `predicate` holds.
    ///
    /// An empty view returns the wrapped outcome unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok("Forty-Two!");
    /// assert_eq!(ok.as_ok().filter_map(|s| *s == "Forty-Two!", |_| 42), Outcome::err(42));
    /// assert_eq!(ok.as_ok().filter_map(|s| *s == "Not 42", |_| 42), ok);
    /// ```
    #[inline]
    pub fn filter_map<P, F>(self, predicate: P, f: F) -> Outcome<E, O>
    where
        P: FnOnce(&O) -> bool,
        F: FnOnce(O) -> E,
    {
        match self.outcome {
            Outcome::Ok(o) => {
                if predicate(&o) {
                    Outcome::Err(f(o))
                } else {
                    Outcome::Ok(o)
                }
            }
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Transform the success value, passing failures through unchanged.
    #[inline]
    pub fn map<Z, F>(self, f: F) -> Outcome<E, Z>
    where
        F: FnOnce(O) -> Z,
    {
        match self.outcome {
            Outcome::Ok(o) => Outcome::Ok(f(o)),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Chain a computation on the success value.
    #[inline]
    pub fn flat_map<Z, F>(self, f: F) -> Outcome<E, Z>
    where
        F: FnOnce(O) -> Outcome<E, Z>,
    {
        match self.outcome {
            Outcome::Ok(o) => f(o),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Change the failure type of a success without touching the value.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Err`: its failure payload has no
    /// value of the new type to become.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let ok: Outcome<std::io::Error, i32> = Outcome::ok(1);
    /// let retyped: Outcome<String, i32> = ok.as_ok().retype();
    /// assert_eq!(retyped, Outcome::ok(1));
    /// ```
    #[inline]
    #[track_caller]
    pub fn retype<Z>(self) -> Outcome<Z, O> {
        match self.outcome {
            Outcome::Ok(o) => Outcome::Ok(o),
            Outcome::Err(_) => {
                panic!("called `OkView::retype()` on an `Err` outcome")
            }
        }
    }

    /// [`retype`](Self::retype) into a single-element `Vec`.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Err`.
    #[inline]
    #[track_caller]
    pub fn retype_vec<Z>(self) -> Vec<Outcome<Z, O>> {
        match self.outcome {
            Outcome::Ok(o) => vec![Outcome::Ok(o)],
            Outcome::Err(_) => {
                panic!("called `OkView::retype_vec()` on an `Err` outcome")
            }
        }
    }

    /// [`retype`](Self::retype) into a one-shot iterator.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Err`.
    #[inline]
    #[track_caller]
    pub fn retype_iter<Z>(self) -> std::iter::Once<Outcome<Z, O>> {
        match self.outcome {
            Outcome::Ok(o) => std::iter::once(Outcome::Ok(o)),
            Outcome::Err(_) => {
                panic!("called `OkView::retype_iter()` on an `Err` outcome")
            }
        }
    }

    // ========== Scalar conversions ==========

    /// Convert the success value to an `i32`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{IntOutcome, Outcome};
    ///
    /// let word: Outcome<&str, &str> = Outcome::ok("four");
    /// let len: IntOutcome<&str> = word.as_ok().map_to_int(|w| w.len() as i32);
    /// assert_eq!(len, IntOutcome::ok(4));
    /// ```
    #[inline]
    pub fn map_to_int<F>(self, f: F) -> IntOutcome<E>
    where
        F: FnOnce(O) -> i32,
    {
        self.map(f)
    }

    /// Convert the success value to an `i64`.
    #[inline]
    pub fn map_to_long<F>(self, f: F) -> LongOutcome<E>
    where
        F: FnOnce(O) -> i64,
    {
        self.map(f)
    }

    /// Convert the success value to an `f64`.
    #[inline]
    pub fn map_to_double<F>(self, f: F) -> DoubleOutcome<E>
    where
        F: FnOnce(O) -> f64,
    {
        self.map(f)
    }

    /// Consume the success value with `f`, keeping only the fact that it succeeded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{Outcome, VoidOutcome};
    ///
    /// let mut sink = Vec::new();
    /// let ok: Outcome<&str, i32> = Outcome::ok(9);
    /// let done: VoidOutcome<&str> = ok.as_ok().map_to_void(|v| sink.push(v));
    ///
    /// assert_eq!(done, VoidOutcome::done());
    /// assert_eq!(sink, vec![9]);
    /// ```
    #[inline]
    pub fn map_to_void<F>(self, f: F) -> VoidOutcome<E>
    where
        F: FnOnce(O),
    {
        self.map(f)
    }

    /// Chain a computation producing an [`IntOutcome`].
    #[inline]
    pub fn flat_map_to_int<F>(self, f: F) -> IntOutcome<E>
    where
        F: FnOnce(O) -> IntOutcome<E>,
    {
        self.flat_map(f)
    }

    /// Chain a computation producing a [`LongOutcome`].
    #[inline]
    pub fn flat_map_to_long<F>(self, f: F) -> LongOutcome<E>
    where
        F: FnOnce(O) -> LongOutcome<E>,
    {
        self.flat_map(f)
    }

    /// Chain a computation producing a [`DoubleOutcome`].
    #[inline]
    pub fn flat_map_to_double<F>(self, f: F) -> DoubleOutcome<E>
    where
        F: FnOnce(O) -> DoubleOutcome<E>,
    {
        self.flat_map(f)
    }

    /// Chain a computation producing a [`VoidOutcome`].
    #[inline]
    pub fn flat_map_to_void<F>(self, f: F) -> VoidOutcome<E>
    where
        F: FnOnce(O) -> VoidOutcome<E>,
    {
        self.flat_map(f)
    }
}

impl<E, O> ErrView<E, O> {
    #[inline]
    pub(crate) fn new(outcome: Outcome<E, O>) -> Self {
        ErrView { outcome }
    }

    /// Returns `true` if the wrapped outcome is an `Err`.
    #[inline]
    pub fn is_matching(&self) -> bool {
        self.outcome.is_err()
    }

    /// Give back the wrapped outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<E, O> {
        self.outcome
    }

    /// Extract the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn get(self) -> E {
        match self.outcome {
            Outcome::Err(e) => e,
            Outcome::Ok(_) => panic!("called `ErrView::get()` on an `Ok` outcome"),
        }
    }

    /// Return the failure value, or the fault built from the success payload.
    #[inline]
    pub fn or_raise<X, F>(self, fault_fn: F) -> Result<E, X>
    where
        F: FnOnce(O) -> X,
    {
        match self.outcome {
            Outcome::Err(e) => Ok(e),
            Outcome::Ok(o) => Err(fault_fn(o)),
        }
    }

    /// Return the failure value, or derive one from the success payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::err(42);
    /// let ok: Outcome<i32, &str> = Outcome::ok("Forty-Two!");
    ///
    /// assert_eq!(err.as_err().or_else_map(|_| -42), 42);
    /// assert_eq!(ok.as_err().or_else_map(|_| -42), -42);
    /// ```
    #[inline]
    pub fn or_else_map<F>(self, f: F) -> E
    where
        F: FnOnce(O) -> E,
    {
        match self.outcome {
            Outcome::Err(e) => e,
            Outcome::Ok(o) => f(o),
        }
    }

    /// Return the failure value, or `fallback`.
    #[inline]
    pub fn or(self, fallback: E) -> E {
        match self.outcome {
            Outcome::Err(e) => e,
            Outcome::Ok(_) => fallback,
        }
    }

    /// Return the failure value as an `Option`.
    #[inline]
    pub fn opt(self) -> Option<E> {
        match self.outcome {
            Outcome::Err(e) => Some(e),
            Outcome::Ok(_) => None,
        }
    }

    /// Test the failure value. An empty view always passes.
    #[inline]
    pub fn filter<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match &self.outcome {
            Outcome::Err(e) => predicate(e),
            Outcome::Ok(_) => true,
        }
    }

    /// Run `f` on the failure value, if any, and return the wrapped outcome.
    #[inline]
    pub fn peek<F>(self, f: F) -> Outcome<E, O>
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(e) = &self.outcome {
            f(e);
        }
        self.outcome
    }

    /// Turn a failure into a success when `predicate` holds.
    #[inline]
    pub fn filter_map<P, F>(self, predicate: P, f: F) -> Outcome<E, O>
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(E) -> O,
    {
        match self.outcome {
            Outcome::Err(e) => {
                if predicate(&e) {
                    Outcome::Ok(f(e))
                } else {
                    Outcome::Err(e)
                }
            }
            Outcome::Ok(o) => Outcome::Ok(o),
        }
    }

    /// Transform the failure value, passing successes through unchanged.
    #[inline]
    pub fn map<Z, F>(self, f: F) -> Outcome<Z, O>
    where
        F: FnOnce(E) -> Z,
    {
        match self.outcome {
            Outcome::Err(e) => Outcome::Err(f(e)),
            Outcome::Ok(o) => Outcome::Ok(o),
        }
    }

    /// Chain a computation on the failure value, typically a recovery.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Outcome;
    ///
    /// let err: Outcome<&str, i32> = Outcome::err("retryable");
    /// let recovered: Outcome<String, i32> = err.as_err().flat_map(|e| {
    ///     if e == "retryable" { Outcome::ok(0) } else { Outcome::err(e.to_string()) }
    /// });
    /// assert_eq!(recovered, Outcome::ok(0));
    /// ```
    #[inline]
    pub fn flat_map<Z, F>(self, f: F) -> Outcome<Z, O>
    where
        F: FnOnce(E) -> Outcome<Z, O>,
    {
        match self.outcome {
            Outcome::Err(e) => f(e),
            Outcome::Ok(o) => Outcome::Ok(o),
        }
    }

    /// Change the success type of a failure without touching the value.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn retype<Z>(self) -> Outcome<E, Z> {
        match self.outcome {
            Outcome::Err(e) => Outcome::Err(e),
            Outcome::Ok(_) => {
                panic!("called `ErrView::retype()` on an `Ok` outcome")
            }
        }
    }

    /// [`retype`](Self::retype) into a single-element `Vec`.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn retype_vec<Z>(self) -> Vec<Outcome<E, Z>> {
        match self.outcome {
            Outcome::Err(e) => vec![Outcome::Err(e)],
            Outcome::Ok(_) => {
                panic!("called `ErrView::retype_vec()` on an `Ok` outcome")
            }
        }
    }

    /// [`retype`](Self::retype) into a one-shot iterator.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped outcome is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn retype_iter<Z>(self) -> std::iter::Once<Outcome<E, Z>> {
        match self.outcome {
            Outcome::Err(e) => std::iter::once(Outcome::Err(e)),
            Outcome::Ok(_) => {
                panic!("called `ErrView::retype_iter()` on an `Ok` outcome")
            }
        }
    }
}

// ========== Equality bridge ==========

macro_rules! impl_view_traits {
    ($view:ident) => {
        impl<E: PartialEq, O: PartialEq> PartialEq for $view<E, O> {
            fn eq(&self, other: &Self) -> bool {
                self.outcome == other.outcome
            }
        }

        impl<E: Eq, O: Eq> Eq for $view<E, O> {}

        impl<E: PartialEq, O: PartialEq> PartialEq<Outcome<E, O>> for $view<E, O> {
            fn eq(&self, other: &Outcome<E, O>) -> bool {
                self.outcome == *other
            }
        }

        impl<E: PartialEq, O: PartialEq> PartialEq<$view<E, O>> for Outcome<E, O> {
            fn eq(&self, other: &$view<E, O>) -> bool {
                *self == other.outcome
            }
        }

        impl<E: Hash, O: Hash> Hash for $view<E, O> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.outcome.hash(state)
            }
        }

        impl<E: fmt::Display, O: fmt::Display> fmt::Display for $view<E, O> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.outcome.fmt(f)
            }
        }

        impl<E, O> From<$view<E, O>> for Outcome<E, O> {
            fn from(view: $view<E, O>) -> Self {
                view.outcome
            }
        }
    };
}

impl_view_traits!(OkView);
impl_view_traits!(ErrView);

impl<E: PartialEq, O: PartialEq> PartialEq<ErrView<E, O>> for OkView<E, O> {
    fn eq(&self, other: &ErrView<E, O>) -> bool {
        self.outcome == other.outcome
    }
}

impl<E: PartialEq, O: PartialEq> PartialEq<OkView<E, O>> for ErrView<E, O> {
    fn eq(&self, other: &OkView<E, O>) -> bool {
        self.outcome == other.outcome
    }
}
