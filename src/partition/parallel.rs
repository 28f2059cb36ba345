//! Rayon collection into [`Partition`].
//!
//! Each rayon split fills its own [`PartitionBuilder`] and the builders are joined
//! with [`PartitionBuilder::merge`]. For indexed sources rayon joins adjacent
//! splits left to right, so the input order survives. Unindexed sources such as
//! `par_bridge` give no such promise: order is kept within a split only.

use super::{Partition, PartitionBuilder};
use crate::Outcome;
use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator};

impl<E, O> FromParallelIterator<Outcome<E, O>> for Partition<E, O>
where
    E: Send,
    O: Send,
{
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = Outcome<E, O>>,
    {
        par_iter
            .into_par_iter()
            .fold(PartitionBuilder::new, |mut builder, outcome| {
                builder.push(outcome);
                builder
            })
            .reduce(PartitionBuilder::new, PartitionBuilder::merge)
            .finish()
    }
}

/// Appends in place like [`Extend`], after the existing elements.
impl<E, O> ParallelExtend<Outcome<E, O>> for Partition<E, O>
where
    E: Send,
    O: Send,
{
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = Outcome<E, O>>,
    {
        let more = Partition::from_par_iter(par_iter);
        let (errs, oks) = more.into_parts();
        self.errs.extend(errs);
        self.oks.extend(oks);
    }
}
