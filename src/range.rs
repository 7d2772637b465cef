use crate::{Discrete, RangeError};
use std::{cmp, fmt};

mod endpoint;

pub use endpoint::*;

/// Immutable, inclusive range over the extended key line.
///
/// Both endpoints are included and `from <= to` always holds, so a range is
/// never empty. Either endpoint may be infinite.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Range<N> {
	from: Endpoint<N>,
	to: Endpoint<N>,
}

impl<N> Range<N> {
	/// Creates the range `[from, to]`.
	///
	/// ```
	/// use sparse_range_cache::{Endpoint, Range};
	///
	/// let range = Range::<i64>::new(Endpoint::NegInfinity, 1337).unwrap();
	/// assert_eq!(range.to_string(), "-Infinity to 1337");
	/// assert!(Range::<i64>::new(11, 5).is_err());
	/// ```
	pub fn new(from: impl Into<Endpoint<N>>, to: impl Into<Endpoint<N>>) -> Result<Self, RangeError>
	where
		N: Ord + fmt::Display,
	{
		Self::from_endpoints(from.into(), to.into())
	}

	pub fn from_endpoints(from: Endpoint<N>, to: Endpoint<N>) -> Result<Self, RangeError>
	where
		N: Ord + fmt::Display,
	{
		if from > to {
			Err(RangeError::InvalidOrder {
				from: from.to_string(),
				to: to.to_string(),
			})
		} else {
			Ok(Range { from, to })
		}
	}

	/// Callers guarantee `from <= to`.
	pub(crate) fn new_unchecked(from: Endpoint<N>, to: Endpoint<N>) -> Self
	where
		N: Ord,
	{
		debug_assert!(from <= to);
		Range { from, to }
	}

	/// The range made of the single key `value`.
	pub fn singleton(value: impl Into<Endpoint<N>>) -> Self
	where
		N: Clone,
	{
		let value = value.into();
		Range {
			from: value.clone(),
			to: value,
		}
	}

	/// The whole key line, `-inf` to `+inf`.
	pub fn full() -> Self {
		Range {
			from: Endpoint::NegInfinity,
			to: Endpoint::PosInfinity,
		}
	}

	pub fn from(&self) -> &Endpoint<N> {
		&self.from
	}

	pub fn to(&self) -> &Endpoint<N> {
		&self.to
	}

	pub fn includes(&self, value: &Endpoint<N>) -> bool
	where
		N: Ord,
	{
		*value >= self.from && *value <= self.to
	}

	pub fn intersects(&self, other: &Range<N>) -> bool
	where
		N: Ord,
	{
		!(self.from > other.to || self.to < other.from)
	}

	pub fn intersection(&self, other: &Range<N>) -> Option<Range<N>>
	where
		N: Clone + Ord,
	{
		if self.intersects(other) {
			Some(Range {
				from: cmp::max(&self.from, &other.from).clone(),
				to: cmp::min(&self.to, &other.to).clone(),
			})
		} else {
			None
		}
	}

	/// Checks if the two ranges overlap or touch, i.e. their union is a range.
	pub fn connected_to(&self, other: &Range<N>) -> bool
	where
		N: Discrete,
	{
		self.from <= other.to.saturating_succ() && other.from <= self.to.saturating_succ()
	}
}

impl<N: fmt::Display> fmt::Display for Range<N> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} to {}", self.from, self.to)
	}
}
