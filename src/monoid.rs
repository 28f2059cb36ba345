//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` with an identity element. That identity is the
//! starting point for any accumulation, so a collection of partial results can be
//! folded without first checking whether it is empty.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Monoid, it must satisfy:
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**:
//!    ```text
//!    a.combine(M::empty()) == a
//!    ```
//! 3. **Left Identity**:
//!    ```text
//!    M::empty().combine(a) == a
//!    ```
//!
//! # Examples
//!
//! ```
//! use bifold::{Monoid, Outcome, Partition, Semigroup};
//!
//! let first: Partition<&str, i32> = vec![Outcome::ok(1), Outcome::err("no")].into_iter().collect();
//! let empty: Partition<&str, i32> = Monoid::empty();
//! assert_eq!(first.clone().combine(empty), first);
//! ```

use crate::Semigroup;

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// For any value `a` of type `M` where `M: Monoid`:
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
///
/// # Example
///
/// ```rust
/// use bifold::{Monoid, Semigroup};
///
/// let v1 = vec![1, 2, 3];
/// let empty: Vec<i32> = Monoid::empty();
///
/// assert_eq!(v1.clone().combine(empty.clone()), v1);
/// assert_eq!(empty.combine(v1.clone()), v1);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    ///
    /// Satisfies: `a.combine(Self::empty()) == a` and `Self::empty().combine(a) == a`
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Vec::new()
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    #[inline]
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

/// Fold an iterator of monoids into one value, starting from the identity.
///
/// An empty iterator yields `M::empty()`.
///
/// # Example
///
/// ```
/// use bifold::monoid::fold_all;
/// use bifold::{Outcome, Partition};
///
/// let chunks = vec![
///     Partition::from_parts(vec!["a"], vec![1]),
///     Partition::from_parts(vec![], vec![2, 3]),
/// ];
///
/// let all: Partition<&str, i32> = fold_all(chunks);
/// assert_eq!(all.errs(), &["a"]);
/// assert_eq!(all.oks(), &[1, 2, 3]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_identity() {
        let v = vec![1, 2, 3];
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(v.clone().combine(empty.clone()), v);
        assert_eq!(empty.combine(v.clone()), v);
    }

    #[test]
    fn test_tuple_empty() {
        let empty: (Vec<i32>, Vec<&str>) = Monoid::empty();
        assert_eq!(empty, (vec![], vec![]));
    }

    #[test]
    fn test_fold_all_vec() {
        let vecs = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(fold_all(vecs), vec![1, 2, 3]);
    }

    #[test]
    fn test_fold_all_empty() {
        let vecs: Vec<Vec<i32>> = vec![];
        assert_eq!(fold_all(vecs), Vec::<i32>::new());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_fold_all_vec(vecs in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..5), 0..8)) {
            let result = fold_all(vecs.clone());
            let expected: Vec<i32> = vecs.into_iter().flatten().collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn prop_pair_identity(
            a in (prop::collection::vec(any::<u8>(), 0..5), prop::collection::vec(any::<i16>(), 0..5))
        ) {
            let empty = <(Vec<u8>, Vec<i16>)>::empty();
            prop_assert_eq!(a.clone().combine(empty.clone()), a.clone());
            prop_assert_eq!(empty.combine(a.clone()), a);
        }
    }
}
