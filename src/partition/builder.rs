//! Mutable accumulator behind [`Partition`] collection.

use super::Partition;
use crate::{Monoid, Outcome, Semigroup};

/// Accumulates outcomes one at a time, then freezes into a [`Partition`].
///
/// Independent builders may be filled over disjoint slices of the input (one per
/// thread, say) and joined with [`PartitionBuilder::merge`]. Each builder keeps
/// the order it saw; the joined order is the merge order.
///
/// # Example
///
/// ```rust
/// use bifold::{Outcome, PartitionBuilder};
///
/// let mut left = PartitionBuilder::new();
/// left.push(Outcome::ok(1));
/// left.push(Outcome::err("a"));
///
/// let mut right = PartitionBuilder::new();
/// right.push(Outcome::ok(2));
///
/// let p = left.merge(right).finish();
/// assert_eq!(p.errs(), &["a"]);
/// assert_eq!(p.oks(), &[1, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct PartitionBuilder<E, O> {
    errs: Vec<E>,
    oks: Vec<O>,
}

impl<E, O> PartitionBuilder<E, O> {
    /// An empty builder.
    #[inline]
    pub fn new() -> Self {
        PartitionBuilder {
            errs: Vec::new(),
            oks: Vec::new(),
        }
    }

    /// Route one outcome onto the end of its side.
    #[inline]
    pub fn push(&mut self, outcome: Outcome<E, O>) {
        match outcome {
            Outcome::Err(e) => self.errs.push(e),
            Outcome::Ok(o) => self.oks.push(o),
        }
    }

    /// Append everything `partial` holds after what this builder holds.
    pub fn merge(mut self, partial: PartitionBuilder<E, O>) -> Self {
        self.errs.extend(partial.errs);
        self.oks.extend(partial.oks);
        self
    }

    /// Number of outcomes pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.errs.len() + self.oks.len()
    }

    /// `true` when nothing has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freeze into a [`Partition`].
    #[inline]
    pub fn finish(self) -> Partition<E, O> {
        Partition::from_parts(self.errs, self.oks)
    }
}

impl<E, O> Default for PartitionBuilder<E, O> {
    #[inline]
    fn default() -> Self {
        PartitionBuilder::new()
    }
}

impl<E, O> Extend<Outcome<E, O>> for PartitionBuilder<E, O> {
    fn extend<I: IntoIterator<Item = Outcome<E, O>>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

impl<E, O> Semigroup for PartitionBuilder<E, O> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl<E, O> Monoid for PartitionBuilder<E, O> {
    #[inline]
    fn empty() -> Self {
        PartitionBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monoid::fold_all;
    use std::thread;

    #[test]
    fn test_push_routes_by_tag() {
        let mut b = PartitionBuilder::new();
        b.push(Outcome::err("x"));
        b.push(Outcome::ok(1));
        b.push(Outcome::ok(2));
        assert_eq!(b.len(), 3);
        let p = b.finish();
        assert_eq!(p.errs(), &["x"]);
        assert_eq!(p.oks(), &[1, 2]);
    }

    #[test]
    fn test_new_is_empty() {
        let b: PartitionBuilder<(), ()> = PartitionBuilder::default();
        assert!(b.is_empty());
        assert!(b.finish().is_empty());
    }

    #[test]
    fn test_merge_appends_partial_after_self() {
        let mut a = PartitionBuilder::new();
        a.extend(vec![Outcome::ok(1), Outcome::err('a')]);
        let mut b = PartitionBuilder::new();
        b.extend(vec![Outcome::err('b'), Outcome::ok(2)]);

        let p = a.merge(b).finish();
        assert_eq!(p.errs(), &['a', 'b']);
        assert_eq!(p.oks(), &[1, 2]);
    }

    #[test]
    fn test_threaded_partials_keep_per_partial_order() {
        let input: Vec<Outcome<usize, usize>> = (0..400)
            .map(|i| if i % 3 == 0 { Outcome::err(i) } else { Outcome::ok(i) })
            .collect();

        let partials: Vec<PartitionBuilder<usize, usize>> = thread::scope(|s| {
            let handles: Vec<_> = input
                .chunks(100)
                .map(|chunk| {
                    s.spawn(move || {
                        let mut b = PartitionBuilder::new();
                        b.extend(chunk.iter().cloned());
                        b
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        // Merge in reverse to show the global order is the merge order
        let merged = fold_all(partials.into_iter().rev()).finish();
        assert_eq!(merged.len(), 400);
        assert_eq!(merged.errs().len(), 134);

        // Each chunk's successes are still contiguous and ascending
        let expected: Vec<usize> = input
            .chunks(100)
            .rev()
            .flat_map(|chunk| chunk.iter().filter_map(|o| o.as_ref().as_ok().opt().copied()))
            .collect();
        assert_eq!(merged.oks(), expected.as_slice());
        assert_eq!(merged.errs().first(), Some(&300));
    }
}
