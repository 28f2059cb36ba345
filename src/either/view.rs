//! Left-side and right-side views of an [`Either`].
//!
//! These mirror the outcome views: the matching view exposes the payload, the
//! empty one passes the wrapped value through. Neither side is a failure, so
//! there is no retyping of the opposite side.

use super::Either;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The left-side view of an [`Either`], created by [`Either::as_left`].
#[derive(Clone, Copy, Debug)]
pub struct LeftView<L, R> {
    either: Either<L, R>,
}

/// The right-side view of an [`Either`], created by [`Either::as_right`].
#[derive(Clone, Copy, Debug)]
pub struct RightView<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftView<L, R> {
    #[inline]
    pub(crate) fn new(either: Either<L, R>) -> Self {
        LeftView { either }
    }

    /// Returns `true` if the wrapped value is a Left.
    #[inline]
    pub fn is_matching(&self) -> bool {
        self.either.is_left()
    }

    /// Give back the wrapped value.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }

    /// Extract the left value.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped value is a Right.
    #[inline]
    #[track_caller]
    pub fn get(self) -> L {
        match self.either {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `LeftView::get()` on a `Right` value"),
        }
    }

    /// Return the left value, or the fault built from the right payload.
    #[inline]
    pub fn or_raise<X, F>(self, fault_fn: F) -> Result<L, X>
    where
        F: FnOnce(R) -> X,
    {
        match self.either {
            Either::Left(l) => Ok(l),
            Either::Right(r) => Err(fault_fn(r)),
        }
    }

    /// Return the left value, or derive one from the right payload.
    #[inline]
    pub fn or_else_map<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self.either {
            Either::Left(l) => l,
            Either::Right(r) => f(r),
        }
    }

    /// Return the left value, or `fallback`.
    #[inline]
    pub fn or(self, fallback: L) -> L {
        match self.either {
            Either::Left(l) => l,
            Either::Right(_) => fallback,
        }
    }

    /// Return the left value as an `Option`.
    #[inline]
    pub fn opt(self) -> Option<L> {
        match self.either {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Test the left value. An empty view always passes.
    #[inline]
    pub fn filter<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.either {
            Either::Left(l) => predicate(l),
            Either::Right(_) => true,
        }
    }

    /// Run `f` on the left value, if any, and return the wrapped value.
    #[inline]
    pub fn peek<F>(self, f: F) -> Either<L, R>
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self.either {
            f(l);
        }
        self.either
    }

    /// Move a left value to the right when `predicate` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<i32, String> = Either::left(7);
    /// let moved = e.as_left().filter_map(|n| n % 2 == 1, |n| format!("odd {}", n));
    /// assert_eq!(moved, Either::right("odd 7".to_string()));
    /// ```
    #[inline]
    pub fn filter_map<P, F>(self, predicate: P, f: F) -> Either<L, R>
    where
        P: FnOnce(&L) -> bool,
        F: FnOnce(L) -> R,
    {
        match self.either {
            Either::Left(l) => {
                if predicate(&l) {
                    Either::Right(f(l))
                } else {
                    Either::Left(l)
                }
            }
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the left value, passing a right value through.
    #[inline]
    pub fn map<Z, F>(self, f: F) -> Either<Z, R>
    where
        F: FnOnce(L) -> Z,
    {
        match self.either {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain a computation on the left value.
    #[inline]
    pub fn flat_map<Z, F>(self, f: F) -> Either<Z, R>
    where
        F: FnOnce(L) -> Either<Z, R>,
    {
        match self.either {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Zero or one left values.
    #[inline]
    pub fn iter(self) -> std::option::IntoIter<L> {
        self.opt().into_iter()
    }
}

impl<L, R> RightView<L, R> {
    #[inline]
    pub(crate) fn new(either: Either<L, R>) -> Self {
        RightView { either }
    }

    /// Returns `true` if the wrapped value is a Right.
    #[inline]
    pub fn is_matching(&self) -> bool {
        self.either.is_right()
    }

    /// Give back the wrapped value.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }

    /// Extract the right value.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped value is a Left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let e: Either<(), &str> = Either::right("r");
    /// assert_eq!(e.as_right().get(), "r");
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(self) -> R {
        match self.either {
            Either::Right(r) => r,
            Either::Left(_) => panic!("called `RightView::get()` on a `Left` value"),
        }
    }

    /// Return the right value, or the fault built from the left payload.
    #[inline]
    pub fn or_raise<X, F>(self, fault_fn: F) -> Result<R, X>
    where
        F: FnOnce(L) -> X,
    {
        match self.either {
            Either::Right(r) => Ok(r),
            Either::Left(l) => Err(fault_fn(l)),
        }
    }

    /// Return the right value, or derive one from the left payload.
    #[inline]
    pub fn or_else_map<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self.either {
            Either::Right(r) => r,
            Either::Left(l) => f(l),
        }
    }

    /// Return the right value, or `fallback`.
    #[inline]
    pub fn or(self, fallback: R) -> R {
        match self.either {
            Either::Right(r) => r,
            Either::Left(_) => fallback,
        }
    }

    /// Return the right value as an `Option`.
    #[inline]
    pub fn opt(self) -> Option<R> {
        match self.either {
            Either::Right(r) => Some(r),
            Either::Left(_) => None,
        }
    }

    /// Test the right value. An empty view always passes.
    #[inline]
    pub fn filter<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.either {
            Either::Right(r) => predicate(r),
            Either::Left(_) => true,
        }
    }

    /// Run `f` on the right value, if any, and return the wrapped value.
    #[inline]
    pub fn peek<F>(self, f: F) -> Either<L, R>
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self.either {
            f(r);
        }
        self.either
    }

    /// Move a right value to the left when `predicate` holds.
    #[inline]
    pub fn filter_map<P, F>(self, predicate: P, f: F) -> Either<L, R>
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self.either {
            Either::Right(r) => {
                if predicate(&r) {
                    Either::Left(f(r))
                } else {
                    Either::Right(r)
                }
            }
            Either::Left(l) => Either::Left(l),
        }
    }

    /// Transform the right value, passing a left value through.
    #[inline]
    pub fn map<Z, F>(self, f: F) -> Either<L, Z>
    where
        F: FnOnce(R) -> Z,
    {
        match self.either {
            Either::Right(r) => Either::Right(f(r)),
            Either::Left(l) => Either::Left(l),
        }
    }

    /// Chain a computation on the right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bifold::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::right(n / 2) } else { Either::left("odd") };
    ///
    /// let e: Either<&str, i32> = Either::right(8);
    /// assert_eq!(e.as_right().flat_map(halve), Either::right(4));
    /// assert_eq!(Either::right(3).as_right().flat_map(halve), Either::left("odd"));
    /// ```
    #[inline]
    pub fn flat_map<Z, F>(self, f: F) -> Either<L, Z>
    where
        F: FnOnce(R) -> Either<L, Z>,
    {
        match self.either {
            Either::Right(r) => f(r),
            Either::Left(l) => Either::Left(l),
        }
    }

    /// Zero or one right values.
    #[inline]
    pub fn iter(self) -> std::option::IntoIter<R> {
        self.opt().into_iter()
    }
}

macro_rules! impl_view_traits {
    ($view:ident) => {
        impl<L: PartialEq, R: PartialEq> PartialEq for $view<L, R> {
            fn eq(&self, other: &Self) -> bool {
                self.either == other.either
            }
        }

        impl<L: Eq, R: Eq> Eq for $view<L, R> {}

        impl<L: PartialEq, R: PartialEq> PartialEq<Either<L, R>> for $view<L, R> {
            fn eq(&self, other: &Either<L, R>) -> bool {
                self.either == *other
            }
        }

        impl<L: PartialEq, R: PartialEq> PartialEq<$view<L, R>> for Either<L, R> {
            fn eq(&self, other: &$view<L, R>) -> bool {
                *self == other.either
            }
        }

        impl<L: Hash, R: Hash> Hash for $view<L, R> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.either.hash(state)
            }
        }

        impl<L: fmt::Display, R: fmt::Display> fmt::Display for $view<L, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.either.fmt(f)
            }
        }

        impl<L, R> From<$view<L, R>> for Either<L, R> {
            fn from(view: $view<L, R>) -> Self {
                view.either
            }
        }
    };
}

impl_view_traits!(LeftView);
impl_view_traits!(RightView);

impl<L: PartialEq, R: PartialEq> PartialEq<RightView<L, R>> for LeftView<L, R> {
    fn eq(&self, other: &RightView<L, R>) -> bool {
        self.either == other.either
    }
}

impl<L: PartialEq, R: PartialEq> PartialEq<LeftView<L, R>> for RightView<L, R> {
    fn eq(&self, other: &LeftView<L, R>) -> bool {
        self.either == other.either
    }
}
