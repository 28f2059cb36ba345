//! Turning fallible calls into outcomes.
//!
//! The `attempt` family runs a closure that returns `Result<_, X>` and captures
//! any error as a [`Fault`] in the failure slot. Anything that converts into
//! `Box<dyn Error + Send + Sync>` is accepted as `X`, which covers every
//! `std::error::Error` type as well as plain `&str` and `String` messages.
//!
//! Panics are not caught. A panic from reading the wrong side of a view is a bug
//! in the caller and keeps unwinding.
//!
//! # Examples
//!
//! ```
//! use bifold::attempt::{attempt, Fault};
//! use bifold::Outcome;
//!
//! let port: Outcome<Fault, u16> = attempt(|| "8080".parse::<u16>());
//! assert_eq!(port.as_ok().opt(), Some(8080));
//!
//! let bad: Outcome<Fault, u16> = attempt(|| "http".parse::<u16>());
//! let fault = bad.as_err().get();
//! assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
//! ```

use crate::{DoubleOutcome, IntOutcome, LongOutcome, Outcome, VoidOutcome};
use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error captured at the adapter boundary, with an optional trail of context.
///
/// The original error is kept intact and can be recovered with
/// [`Fault::downcast_ref`] or [`Fault::into_inner`].
///
/// # Examples
///
/// ```
/// use bifold::attempt::Fault;
///
/// let fault = Fault::new("connection refused")
///     .context("connecting to database")
///     .context("loading user profile");
///
/// assert_eq!(fault.to_string(), "connection refused\n  -> connecting to database\n  -> loading user profile");
/// ```
#[derive(Debug)]
pub struct Fault {
    error: BoxError,
    context: Vec<String>,
}

impl Fault {
    /// Wrap an error with an empty context trail.
    pub fn new<X>(error: X) -> Self
    where
        X: Into<BoxError>,
    {
        Fault {
            error: error.into(),
            context: Vec::new(),
        }
    }

    /// Add a context layer. Layers read from innermost to outermost.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// The context messages in the order they were added.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// The captured error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Give back the captured error, dropping the context trail.
    pub fn into_inner(self) -> BoxError {
        self.error
    }

    /// Borrow the captured error as `T`, if that is its concrete type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bifold::attempt::Fault;
    /// use std::io;
    ///
    /// let fault = Fault::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
    /// let io_err = fault.downcast_ref::<io::Error>().unwrap();
    /// assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    /// assert!(fault.downcast_ref::<std::fmt::Error>().is_none());
    /// ```
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.error.downcast_ref::<T>()
    }

    /// `true` when the captured error is a `T`.
    pub fn is<T>(&self) -> bool
    where
        T: StdError + 'static,
    {
        self.error.is::<T>()
    }

    fn capture<X>(error: X) -> Self
    where
        X: Into<BoxError>,
    {
        let fault = Fault::new(error);
        #[cfg(feature = "tracing")]
        tracing::debug!(fault = %fault.error, "attempt captured a fault");
        fault
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }

        Ok(())
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.error.as_ref())
    }
}

// ========== Suppliers ==========

/// Run `f`, capturing an error as a [`Fault`].
pub fn attempt<O, X, F>(f: F) -> Outcome<Fault, O>
where
    F: FnOnce() -> Result<O, X>,
    X: Into<BoxError>,
{
    match f() {
        Ok(o) => Outcome::Ok(o),
        Err(x) => Outcome::Err(Fault::capture(x)),
    }
}

/// Run `f` for its effect only.
///
/// # Examples
///
/// ```
/// use bifold::attempt::attempt_run;
///
/// let flushed = attempt_run(|| -> Result<(), std::io::Error> { Ok(()) });
/// assert!(flushed.is_ok());
/// ```
pub fn attempt_run<X, F>(f: F) -> VoidOutcome<Fault>
where
    F: FnOnce() -> Result<(), X>,
    X: Into<BoxError>,
{
    attempt(f)
}

/// [`attempt`] for an `i32` result.
pub fn attempt_int<X, F>(f: F) -> IntOutcome<Fault>
where
    F: FnOnce() -> Result<i32, X>,
    X: Into<BoxError>,
{
    attempt(f)
}

/// [`attempt`] for an `i64` result.
pub fn attempt_long<X, F>(f: F) -> LongOutcome<Fault>
where
    F: FnOnce() -> Result<i64, X>,
    X: Into<BoxError>,
{
    attempt(f)
}

/// [`attempt`] for an `f64` result.
pub fn attempt_double<X, F>(f: F) -> DoubleOutcome<Fault>
where
    F: FnOnce() -> Result<f64, X>,
    X: Into<BoxError>,
{
    attempt(f)
}

// ========== Function adapters ==========

/// Lift a fallible function into one that returns outcomes.
///
/// # Examples
///
/// ```
/// use bifold::attempt::attempt_fn;
/// use bifold::Partition;
///
/// let parse = attempt_fn(|s: &str| s.parse::<i32>());
/// let p: Partition<_, i32> = ["1", "two", "3"].into_iter().map(parse).collect();
///
/// assert_eq!(p.oks(), &[1, 3]);
/// assert_eq!(p.errs().len(), 1);
/// ```
pub fn attempt_fn<T, U, X, F>(f: F) -> impl Fn(T) -> Outcome<Fault, U>
where
    F: Fn(T) -> Result<U, X>,
    X: Into<BoxError>,
{
    move |t| attempt(|| f(t))
}

/// Lift a fallible consumer into one that returns void outcomes.
pub fn attempt_each<T, X, F>(f: F) -> impl Fn(T) -> VoidOutcome<Fault>
where
    F: Fn(T) -> Result<(), X>,
    X: Into<BoxError>,
{
    move |t| attempt(|| f(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::num::ParseIntError;

    #[test]
    fn test_attempt_ok() {
        let out = attempt(|| Ok::<_, io::Error>(5));
        assert_eq!(out.as_ok().get(), 5);
    }

    #[test]
    fn test_attempt_keeps_concrete_error() {
        let out: Outcome<Fault, i32> = attempt(|| "x".parse::<i32>());
        let fault = out.as_err().get();
        assert!(fault.is::<ParseIntError>());
        assert!(!fault.is::<io::Error>());
        assert_eq!(fault.to_string(), "invalid digit found in string");
    }

    #[test]
    fn test_attempt_accepts_string_messages() {
        let out: Outcome<Fault, ()> = attempt(|| Err("plain message"));
        assert_eq!(out.as_err().get().to_string(), "plain message");

        let out: Outcome<Fault, ()> = attempt(|| Err(format!("code {}", 7)));
        assert_eq!(out.as_err().get().to_string(), "code 7");
    }

    #[test]
    fn test_scalar_attempts() {
        assert_eq!(attempt_int(|| "12".parse::<i32>()).as_ok().get(), 12);
        assert_eq!(attempt_long(|| "-9000000000".parse::<i64>()).as_ok().get(), -9_000_000_000);
        assert_eq!(attempt_double(|| "0.25".parse::<f64>()).as_ok().get(), 0.25);
        assert!(attempt_int(|| "".parse::<i32>()).is_err());
    }

    #[test]
    fn test_attempt_run() {
        let mut ran = false;
        let out = attempt_run(|| {
            ran = true;
            Err::<(), _>(io::Error::new(io::ErrorKind::Other, "disk full"))
        });
        assert!(ran);
        assert_eq!(out.as_err().get().to_string(), "disk full");
    }

    #[test]
    fn test_attempt_fn_reusable() {
        let parse = attempt_fn(|s: &str| s.parse::<u8>());
        assert_eq!(parse("7").as_ok().get(), 7);
        assert!(parse("300").is_err());
        assert_eq!(parse("8").as_ok().get(), 8);
    }

    #[test]
    fn test_attempt_each() {
        let check = attempt_each(|n: i32| if n >= 0 { Ok(()) } else { Err("negative") });
        assert!(check(1).is_ok());
        assert_eq!(check(-1).as_err().get().to_string(), "negative");
    }

    #[test]
    #[should_panic(expected = "called `OkView::get()` on an `Err` outcome")]
    fn test_panics_are_not_captured() {
        let _ = attempt(|| {
            let inner: Outcome<&str, i32> = Outcome::err("e");
            Ok::<_, io::Error>(inner.as_ok().get())
        });
    }

    #[test]
    fn test_context_trail() {
        let fault = Fault::new("base").context("step 1").context("step 2");
        assert_eq!(fault.context_trail(), &["step 1", "step 2"]);
        assert_eq!(fault.to_string(), "base\n  -> step 1\n  -> step 2");
    }

    #[test]
    fn test_source_and_into_inner() {
        let fault = Fault::new(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(fault.source().map(|s| s.to_string()), Some("gone".to_string()));
        assert_eq!(fault.inner().to_string(), "gone");

        let inner = fault.into_inner();
        assert_eq!(
            inner.downcast_ref::<io::Error>().map(|e| e.kind()),
            Some(io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_fault_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fault>();
        assert_send_sync::<Outcome<Fault, String>>();
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_capture_is_logged() {
        let _ = attempt(|| "nope".parse::<i32>());
        assert!(logs_contain("attempt captured a fault"));
    }
}
