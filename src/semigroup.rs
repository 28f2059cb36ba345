//! Associative combination of partial results
//!
//! A Semigroup is a type with an associative binary operation. Partitions built
//! over separate slices of the input are joined with `combine`, so the only
//! requirement on a join is that grouping does not matter.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use bifold::Semigroup;
//!
//! let v1 = vec![1, 2, 3];
//! let v2 = vec![4, 5, 6];
//! assert_eq!(v1.combine(v2), vec![1, 2, 3, 4, 5, 6]);
//!
//! // Pairs combine component-wise
//! let t1 = (vec!["bad"], vec![1]);
//! let t2 = (vec!["worse"], vec![2]);
//! assert_eq!(t1.combine(t2), (vec!["bad", "worse"], vec![1, 2]));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first if the inputs are needed afterwards.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use bifold::Semigroup;
    ///
    /// let result = vec![1, 2].combine(vec![3, 4]);
    /// assert_eq!(result, vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    #[inline]
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_vec_associative(
            a in prop::collection::vec(any::<i32>(), 0..10),
            b in prop::collection::vec(any::<i32>(), 0..10),
            c in prop::collection::vec(any::<i32>(), 0..10),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_pair_associative(
            a in (prop::collection::vec(any::<u8>(), 0..5), prop::collection::vec(any::<bool>(), 0..5)),
            b in (prop::collection::vec(any::<u8>(), 0..5), prop::collection::vec(any::<bool>(), 0..5)),
            c in (prop::collection::vec(any::<u8>(), 0..5), prop::collection::vec(any::<bool>(), 0..5)),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
