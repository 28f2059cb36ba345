//! Testing utilities for code built on bifold's types
//!
//! Assertion macros that report the unexpected payload on failure, and
//! `proptest::Arbitrary` impls for [`Outcome`](crate::Outcome),
//! [`Either`](crate::Either) and [`Partition`](crate::Partition) behind the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use bifold::{assert_err, assert_ok_eq, Outcome};
//!
//! let ok: Outcome<String, i32> = Outcome::ok(42);
//! assert_ok_eq!(ok, 42);
//!
//! let err: Outcome<&str, i32> = Outcome::err("boom");
//! assert_err!(err);
//! ```

/// Assert that an outcome is `Ok`.
///
/// Panics with the failure payload if it is an `Err`.
///
/// # Example
///
/// ```rust
/// use bifold::{assert_ok, Outcome};
///
/// let out = Outcome::<&str, _>::ok(1);
/// assert_ok!(out);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) => {}
            $crate::Outcome::Err(e) => {
                panic!("Expected Ok, got Err: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is `Err`.
///
/// Panics with the success payload if it is an `Ok`.
///
/// # Example
///
/// ```rust
/// use bifold::{assert_err, Outcome};
///
/// let out = Outcome::<_, i32>::err("nope");
/// assert_err!(out);
/// ```
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(_) => {}
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err, got Ok: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is `Ok` with the expected value.
///
/// # Example
///
/// ```rust
/// use bifold::{assert_ok_eq, Outcome};
///
/// let out = Outcome::<&str, _>::ok(vec![1, 2]);
/// assert_ok_eq!(out, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_ok_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Ok(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Outcome::Err(e) => {
                panic!("Expected Ok({:?}), got Err: {:?}", $expected, e);
            }
        }
    };
}

/// Assert that an outcome is `Err` with the expected value.
///
/// # Example
///
/// ```rust
/// use bifold::{assert_err_eq, Partition};
///
/// let p = Partition::from_parts(vec!["a", "b"], vec![1]);
/// assert_err_eq!(p.fold(), vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_err_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Err(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err({:?}), got Ok: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use crate::{Either, Outcome, Partition};
    use proptest::collection::SizeRange;
    use proptest::prelude::*;

    impl<E, O> Arbitrary for Outcome<E, O>
    where
        E: Arbitrary + 'static,
        O: Arbitrary + 'static,
    {
        type Parameters = (E::Parameters, O::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (e_params, o_params) = args;
            prop_oneof![
                any_with::<E>(e_params).prop_map(Outcome::err),
                any_with::<O>(o_params).prop_map(Outcome::ok),
            ]
            .boxed()
        }
    }

    impl<L, R> Arbitrary for Either<L, R>
    where
        L: Arbitrary + 'static,
        R: Arbitrary + 'static,
    {
        type Parameters = (L::Parameters, R::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (l_params, r_params) = args;
            prop_oneof![
                any_with::<L>(l_params).prop_map(Either::left),
                any_with::<R>(r_params).prop_map(Either::right),
            ]
            .boxed()
        }
    }

    impl<E, O> Arbitrary for Partition<E, O>
    where
        E: Arbitrary + 'static,
        O: Arbitrary + 'static,
    {
        type Parameters = (E::Parameters, O::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (e_params, o_params) = args;
            let size = SizeRange::default();
            (
                proptest::collection::vec(any_with::<E>(e_params), size.clone()),
                proptest::collection::vec(any_with::<O>(o_params), size),
            )
                .prop_map(|(errs, oks)| Partition::from_parts(errs, oks))
                .boxed()
        }
    }
}
