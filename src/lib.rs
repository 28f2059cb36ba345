//! # Bifold
//!
//! Two-sided values with optional-like projections, and a collector that splits
//! many of them into failures and successes.
//!
//! ## Overview
//!
//! - [`Outcome<E, O>`] holds either a failure `E` or a success `O`. Its views,
//!   [`OkView`] and [`ErrView`], behave like an `Option` over one side while still
//!   carrying the other.
//! - [`Either<L, R>`] is the same shape without success/failure meaning.
//! - [`IntOutcome`], [`LongOutcome`], [`DoubleOutcome`] and [`VoidOutcome`] fix
//!   the success payload to a scalar.
//! - [`Partition<E, O>`] collects outcomes into ordered failure and success
//!   vectors and folds them back into one outcome.
//! - [`attempt`](mod@attempt) turns `Result`-returning calls into outcomes whose
//!   failure is a [`Fault`](attempt::Fault).
//!
//! ## Quick Example
//!
//! ```rust
//! use bifold::attempt::attempt_fn;
//! use bifold::{Outcome, Partition};
//!
//! let parse = attempt_fn(|s: &str| s.parse::<u32>());
//!
//! let ports: Partition<_, u32> = ["80", "443", "ssh"].into_iter().map(parse).collect();
//! assert!(ports.has_both());
//!
//! let summary = ports.reduce_both(
//!     |faults| faults.len(),
//!     |oks| oks.iter().max().copied(),
//!     |bad, best| format!("{} bad, best {:?}", bad.unwrap_or(0), best.flatten()),
//! );
//! assert_eq!(summary, "1 bad, best Some(443)");
//!
//! let checked: Outcome<String, u32> = Outcome::ok(8080);
//! let shifted = checked.as_ok().filter_map(|p| *p > 1024, |p| format!("{} is unprivileged", p));
//! assert_eq!(shifted, Outcome::err("8080 is unprivileged".to_string()));
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: log captured faults and lossy folds through `tracing`.
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`, `Either` and `Partition`.
//! - `proptest`: `Arbitrary` impls for the same types.
//! - `rayon`: collect a `Partition` from a parallel iterator.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attempt;
pub mod either;
pub mod monoid;
pub mod outcome;
pub mod partition;
pub mod semigroup;
pub mod testing;

// Re-exports
pub use either::{Either, LeftView, RightView};
pub use monoid::Monoid;
pub use outcome::{
    DoubleOutcome, ErrView, IntOutcome, LongOutcome, OkView, Outcome, Scalar, VoidOutcome,
};
pub use partition::{
    DoublePartition, IntPartition, LongPartition, Partition, PartitionBuilder, VoidPartition,
};
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attempt::{attempt, attempt_fn, Fault};
    pub use crate::either::Either;
    pub use crate::monoid::Monoid;
    pub use crate::outcome::{
        DoubleOutcome, ErrView, IntOutcome, LongOutcome, OkView, Outcome, VoidOutcome,
    };
    pub use crate::partition::{Partition, PartitionBuilder};
    pub use crate::semigroup::Semigroup;
}
