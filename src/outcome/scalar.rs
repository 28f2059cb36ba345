//! Outcomes with a scalar success payload.
//!
//! The int, long, double and void forms are plain aliases of [`Outcome`]. Every
//! method is generic, so each alias compiles to its own unboxed code without a
//! separate implementation. What the aliases add is a vocabulary for moving a
//! success between widths while the failure type rides along unchanged.
//!
//! ```rust
//! use bifold::{DoubleOutcome, IntOutcome, Outcome};
//!
//! let count: IntOutcome<String> = IntOutcome::ok(3);
//! let ratio: DoubleOutcome<String> = count.as_ok().map_to_double(|n| n as f64 / 4.0);
//! assert_eq!(ratio, DoubleOutcome::ok(0.75));
//!
//! let label: Outcome<String, String> = ratio.as_ok().map_to_obj(|r| format!("{:.0}%", r * 100.0));
//! assert_eq!(label, Outcome::ok("75%".to_string()));
//! ```

use super::{OkView, Outcome};

/// An outcome whose success is an `i32`.
pub type IntOutcome<E> = Outcome<E, i32>;

/// An outcome whose success is an `i64`.
pub type LongOutcome<E> = Outcome<E, i64>;

/// An outcome whose success is an `f64`.
pub type DoubleOutcome<E> = Outcome<E, f64>;

/// An outcome whose success carries no value.
pub type VoidOutcome<E> = Outcome<E, ()>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for () {}
}

/// The success payloads that have a dedicated outcome alias.
///
/// This trait is sealed. It only gates [`OkView::map_to_obj`].
pub trait Scalar: sealed::Sealed {}

impl Scalar for i32 {}
impl Scalar for i64 {}
impl Scalar for f64 {}
impl Scalar for () {}

impl<E> Outcome<E, ()> {
    /// The success of a void outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::VoidOutcome;
    ///
    /// let done: VoidOutcome<String> = VoidOutcome::done();
    /// assert!(done.is_ok());
    /// ```
    #[inline]
    pub fn done() -> Self {
        Outcome::Ok(())
    }
}

impl<E, S: Scalar> OkView<E, S> {
    /// Promote the scalar success to any other type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::{IntOutcome, Outcome};
    ///
    /// let id: IntOutcome<&str> = IntOutcome::ok(7);
    /// let key: Outcome<&str, String> = id.as_ok().map_to_obj(|n| format!("user-{}", n));
    /// assert_eq!(key, Outcome::ok("user-7".to_string()));
    /// ```
    #[inline]
    pub fn map_to_obj<Z, F>(self, f: F) -> Outcome<E, Z>
    where
        F: FnOnce(S) -> Z,
    {
        self.map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_to_obj_from_every_scalar() {
        let int: IntOutcome<()> = IntOutcome::ok(1);
        assert_eq!(int.as_ok().map_to_obj(|v| v.to_string()), Outcome::ok("1".to_string()));

        let long: LongOutcome<()> = LongOutcome::ok(2);
        assert_eq!(long.as_ok().map_to_obj(|v| v * 10), Outcome::ok(20i64));

        let double: DoubleOutcome<()> = DoubleOutcome::ok(1.5);
        assert_eq!(double.as_ok().map_to_obj(|v| v > 1.0), Outcome::ok(true));

        let done: VoidOutcome<&str> = VoidOutcome::done();
        assert_eq!(done.as_ok().map_to_obj(|()| "done"), Outcome::ok("done"));

        let failed: VoidOutcome<&str> = VoidOutcome::err("x");
        assert_eq!(failed.as_ok().map_to_obj(|()| 0u8), Outcome::err("x"));
    }

    #[test]
    fn test_int_to_long_to_double() {
        let i: IntOutcome<&str> = IntOutcome::ok(i32::MAX);
        let l = i.as_ok().map_to_long(|v| v as i64 + 1);
        assert_eq!(l, LongOutcome::ok(i32::MAX as i64 + 1));

        let d = l.as_ok().map_to_double(|v| v as f64 / 2.0);
        assert_eq!(d, DoubleOutcome::ok((i32::MAX as i64 + 1) as f64 / 2.0));
    }

    #[test]
    fn test_widen() {
        let i: IntOutcome<&str> = IntOutcome::ok(-3);
        let l: LongOutcome<&str> = i.widen();
        let d: DoubleOutcome<&str> = i.widen();
        assert_eq!(l, LongOutcome::ok(-3));
        assert_eq!(d, DoubleOutcome::ok(-3.0));
    }

    #[test]
    fn test_failure_rides_through_conversions() {
        let e: DoubleOutcome<String> = DoubleOutcome::err("overflow".to_string());
        let i = e.clone().as_ok().map_to_int(|v| v as i32);
        let o = e.as_ok().map_to_obj(|v| v.to_string());
        assert_eq!(i, IntOutcome::err("overflow".to_string()));
        assert_eq!(o, Outcome::err("overflow".to_string()));
    }

    #[test]
    fn test_void_swap_moves_unit_to_failure() {
        let done: VoidOutcome<&str> = VoidOutcome::done();
        assert_eq!(done.swap(), Outcome::err(()));
    }

    #[test]
    fn test_void_filter_map_turns_done_into_failure() {
        let done: VoidOutcome<&str> = VoidOutcome::done();
        let failed = done.as_ok().filter_map(|_| true, |_| "late");
        assert_eq!(failed, VoidOutcome::err("late"));
    }

    #[test]
    fn test_double_nan_is_not_equal_to_itself() {
        let a: DoubleOutcome<()> = DoubleOutcome::ok(f64::NAN);
        let b: DoubleOutcome<()> = DoubleOutcome::ok(f64::NAN);
        assert_ne!(a, b);
    }
}
