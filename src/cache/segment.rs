use crate::{Endpoint, Range};

/// Piece of a range query result.
///
/// A query yields segments in ascending order, and together they cover the
/// queried range exactly once.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Segment<E, N> {
	/// Part of a known sub-range along with its entries.
	Known { range: Range<N>, entries: Vec<E> },

	/// Gap that must still be fetched.
	Missing(Range<N>),
}

impl<E, N> Segment<E, N> {
	pub fn range(&self) -> &Range<N> {
		match self {
			Segment::Known { range, .. } => range,
			Segment::Missing(range) => range,
		}
	}

	pub fn is_missing(&self) -> bool {
		matches!(self, Segment::Missing(_))
	}

	/// Known entries of this segment, empty for gaps.
	pub fn entries(&self) -> &[E] {
		match self {
			Segment::Known { entries, .. } => entries,
			Segment::Missing(_) => &[],
		}
	}
}

/// Result of a neighbor query.
#[derive(PartialEq, Eq, Debug)]
pub enum Neighbor<'a, E, N> {
	/// Nearest known entry in the requested direction.
	Entry(&'a E),

	/// Largest unfetched range that could hold the neighbor.
	Missing(Range<N>),

	/// Everything in the requested direction is known and holds no entry.
	NoValue,
}

impl<'a, E, N: Clone> Clone for Neighbor<'a, E, N> {
	fn clone(&self) -> Self {
		match self {
			Neighbor::Entry(entry) => Neighbor::Entry(*entry),
			Neighbor::Missing(range) => Neighbor::Missing(range.clone()),
			Neighbor::NoValue => Neighbor::NoValue,
		}
	}
}

/// Input of point operations and neighbor queries.
///
/// Either a raw key or an entry from which the key is extracted.
#[derive(Debug)]
pub enum Lookup<'a, E, N> {
	Key(Endpoint<N>),
	Entry(&'a E),
}

impl<'a, E, N> Lookup<'a, E, N> {
	pub fn key(value: N) -> Self {
		Lookup::Key(Endpoint::Finite(value))
	}

	pub(crate) fn resolve(self, sort_key: fn(&E) -> N) -> Endpoint<N> {
		match self {
			Lookup::Key(key) => key,
			Lookup::Entry(entry) => Endpoint::Finite(sort_key(entry)),
		}
	}
}

impl<'a, E, N> From<&'a E> for Lookup<'a, E, N> {
	fn from(entry: &'a E) -> Self {
		Lookup::Entry(entry)
	}
}

impl<'a, E, N> From<Endpoint<N>> for Lookup<'a, E, N> {
	fn from(key: Endpoint<N>) -> Self {
		Lookup::Key(key)
	}
}
