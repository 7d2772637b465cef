use range_traits::{Bounded, PartialEnum};
use std::fmt::{Debug, Display};

/// Key types a cache can be indexed by.
///
/// A discrete, totally ordered domain where every value except the extremes
/// has an immediate predecessor and successor. This is what makes two known
/// ranges `[a, b]` and `[b + 1, c]` adjacent, and therefore mergeable.
///
/// It is implemented for every type satisfying the bounds, which includes all
/// the primitive integer types.
pub trait Discrete: Clone + Ord + PartialEnum + Bounded + Debug + Display {}

impl<T: Clone + Ord + PartialEnum + Bounded + Debug + Display> Discrete for T {}
