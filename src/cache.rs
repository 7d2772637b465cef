use crate::{Discrete, Endpoint, InsertError, ListenerError, Range};
use range_traits::PartialEnum;
use std::{cmp, fmt};
use tracing::{debug, trace};

mod known;
mod listener;
mod minify;
mod segment;

pub(crate) use known::Known;
use listener::Listeners;
pub use listener::{Callback, ListenerId};
pub use segment::*;

/// Extracts the key of an entry.
pub type SortKey<E, N> = fn(&E) -> N;

/// Sparse cache of fetched key ranges.
///
/// The cache tracks which ranges of keys have been fetched from some slow
/// source, along with the entries found in those ranges. Every key outside of
/// the known sub-ranges is *missing*.
///
/// Known sub-ranges are kept sorted, disjoint and never adjacent: two
/// sub-ranges `[a, b]` and `[b + 1, c]` are always merged into `[a, c]`.
pub struct RangeCache<E, N> {
	known: Vec<Known<E, N>>,
	listeners: Listeners<E, N>,
	sort_key: SortKey<E, N>,
}

/// Piece of a walk through the cache.
enum Piece<N> {
	/// Range not covered by any known sub-range.
	Gap(Range<N>),

	/// Known sub-range at `index`, clipped to the walked span.
	Known { index: usize, range: Range<N> },
}

impl<N: Discrete> RangeCache<N, N> {
	/// Creates a cache whose entries are their own keys.
	pub fn numeric() -> Self {
		Self::new(N::clone)
	}
}

impl<E, N: Discrete> RangeCache<E, N> {
	pub fn new(sort_key: SortKey<E, N>) -> Self {
		RangeCache {
			known: Vec::new(),
			listeners: Listeners::new(),
			sort_key,
		}
	}

	pub fn sort_key(&self) -> SortKey<E, N> {
		self.sort_key
	}

	/// Number of known sub-ranges.
	pub fn range_count(&self) -> usize {
		self.known.len()
	}

	/// Number of entries over all known sub-ranges.
	pub fn entry_count(&self) -> usize {
		self.known.iter().map(Known::len).sum()
	}

	/// Checks if nothing is known yet.
	pub fn is_empty(&self) -> bool {
		self.known.is_empty()
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	/// Iterates over the known sub-ranges and their entries, in ascending
	/// order.
	pub fn iter(&self) -> impl Iterator<Item = (&Range<N>, &[E])> {
		self.known.iter().map(|known| (known.range(), known.entries()))
	}

	/// Search for the known sub-range including `key`.
	///
	/// Returns `Ok(index)` if it exists, or `Err(index)` where `index` is the
	/// position of the first sub-range starting after `key`.
	fn locate(&self, key: &Endpoint<N>) -> Result<usize, usize> {
		// invariants:
		// known[..i] ends before key
		// known[j..] starts after key
		let mut i = 0;
		let mut j = self.known.len();

		while i < j {
			let k = (i + j) / 2;
			let range = self.known[k].range();

			if key < range.from() {
				j = k
			} else if key > range.to() {
				i = k + 1
			} else {
				return Ok(k);
			}
		}

		Err(i)
	}

	/// Walks through `span`, alternating between gaps and known sub-ranges.
	fn walk(&self, span: &Range<N>) -> Vec<Piece<N>> {
		let mut pieces = Vec::new();
		let mut index = match self.locate(span.from()) {
			Ok(i) | Err(i) => i,
		};
		let mut cursor = Some(span.from().clone());

		while let Some(current) = cursor.take() {
			if current > *span.to() {
				break;
			}

			match self.known.get(index) {
				Some(known) if *known.range().from() <= current => {
					let to = cmp::min(known.range().to(), span.to()).clone();
					cursor = known.range().to().succ();
					pieces.push(Piece::Known {
						index,
						range: Range::new_unchecked(current, to),
					});
					index += 1;
				}
				Some(known) if known.range().from() <= span.to() => {
					let next = known.range().from().clone();
					pieces.push(Piece::Gap(Range::new_unchecked(
						current,
						next.saturating_pred(),
					)));
					cursor = Some(next);
				}
				_ => pieces.push(Piece::Gap(Range::new_unchecked(
					current,
					span.to().clone(),
				))),
			}
		}

		pieces
	}

	/// Checks that `entries` can describe `range`.
	fn validate(&self, range: &Range<N>, entries: &[E]) -> Result<(), InsertError> {
		let out_of_bounds = || InsertError::EntryOutOfBounds {
			range: range.to_string(),
		};

		let mut keys = entries.iter().map(self.sort_key);
		let Some(mut current) = keys.next() else {
			return Ok(());
		};

		if !range.includes(&Endpoint::Finite(current.clone())) {
			return Err(out_of_bounds());
		}

		for next in keys {
			match next.cmp(&current) {
				cmp::Ordering::Less => return Err(InsertError::UnsortedEntries),
				cmp::Ordering::Equal => {
					return Err(InsertError::DuplicateKey {
						key: next.to_string(),
					})
				}
				cmp::Ordering::Greater => current = next,
			}
		}

		if !range.includes(&Endpoint::Finite(current)) {
			return Err(out_of_bounds());
		}

		Ok(())
	}

	/// Merges `range` and its `entries` into the known sub-ranges.
	///
	/// Every known sub-range overlapping or touching `range` is absorbed. The
	/// absorbed entries inside of `range` are replaced by `entries`, the ones
	/// outside are kept. Returns the number of absorbed sub-ranges and the
	/// resulting sub-range.
	///
	/// Callers guarantee the entries are valid for `range`.
	fn splice(&mut self, range: &Range<N>, entries: Vec<E>) -> (usize, Range<N>) {
		let span_from = match range.from().pred() {
			Some(pred) if self.locate(&pred).is_ok() => pred,
			_ => range.from().clone(),
		};
		let span_to = match range.to().succ() {
			Some(succ) if self.locate(&succ).is_ok() => succ,
			_ => range.to().clone(),
		};
		let span = Range::new_unchecked(span_from, span_to);

		let pieces = self.walk(&span);
		let first = match self.locate(span.from()) {
			Ok(i) | Err(i) => i,
		};
		let count = pieces
			.iter()
			.filter(|piece| matches!(piece, Piece::Known { .. }))
			.count();
		let mut incoming = Known::new(range.clone(), entries, self.sort_key);
		let mut absorbed = self.known.drain(first..(first + count));
		let mut merged = Vec::new();
		let mut from = span.from().clone();
		let mut to = span.to().clone();

		for piece in pieces {
			match piece {
				Piece::Gap(gap) => merged.extend(incoming.take_in(gap.from(), gap.to())),
				Piece::Known { .. } => {
					let Some(mut existing) = absorbed.next() else {
						continue;
					};
					let bounds = existing.range().clone();
					from = cmp::min(from, bounds.from().clone());
					to = cmp::max(to, bounds.to().clone());

					if bounds.from() < range.from() {
						merged.extend(existing.take_in(bounds.from(), &range.from().saturating_pred()));
					}

					merged.extend(incoming.take_in(bounds.from(), bounds.to()));

					if bounds.to() > range.to() {
						merged.extend(existing.take_in(&range.to().saturating_succ(), bounds.to()));
					}
				}
			}
		}

		drop(absorbed);
		let result = Range::new_unchecked(from, to);
		self.known.insert(
			first,
			Known::new(result.clone(), merged, self.sort_key),
		);

		(count, result)
	}
}

impl<E: Clone, N: Discrete> RangeCache<E, N> {
	/// Inserts a freshly fetched range along with every entry it holds.
	///
	/// `entries` fully describe `range`: whatever was known inside of `range`
	/// is replaced. Known sub-ranges overlapping or touching `range` are merged
	/// with it.
	///
	/// The entries must be sorted by strictly increasing key and lie within
	/// `range`, otherwise the cache is left untouched and an error is returned.
	pub fn insert_range(&mut self, range: Range<N>, entries: Vec<E>) -> Result<(), InsertError> {
		self.validate(&range, &entries)?;

		let len = entries.len();
		let (absorbed, result) = self.splice(&range, entries);
		debug!(range = %range, entries = len, absorbed, result = %result, "inserted range");

		self.notify(&range);
		Ok(())
	}

	/// Adds a single entry.
	///
	/// If the entry key is not known, the entry is only added when
	/// `create_range` is set, in which case the key becomes known and is merged
	/// with the adjacent sub-ranges.
	///
	/// Returns `false` if nothing was added, for instance because an entry with
	/// the same key already exists.
	pub fn add(&mut self, entry: E, create_range: bool) -> bool {
		let key = Endpoint::Finite((self.sort_key)(&entry));

		let added = match self.locate(&key) {
			Ok(index) => self.known[index].add(entry),
			Err(_) if create_range => {
				self.splice(&Range::singleton(key.clone()), vec![entry]);
				true
			}
			Err(_) => false,
		};

		if added {
			trace!(key = %key, create_range, "added entry");
			self.notify(&Range::singleton(key));
		}

		added
	}

	/// Removes the entry with the given key, returning it.
	///
	/// Deleting from a missing range is not an error and returns `None`.
	pub fn delete<'a>(&mut self, lookup: impl Into<Lookup<'a, E, N>>) -> Option<E>
	where
		E: 'a,
	{
		let key = lookup.into().resolve(self.sort_key);
		let index = self.locate(&key).ok()?;
		let removed = self.known[index].delete(&key)?;

		trace!(key = %key, "deleted entry");
		self.notify(&Range::singleton(key));
		Some(removed)
	}

	/// Replaces the known entry with the same key, returning the previous one.
	///
	/// Returns `None` and leaves the cache untouched if no such entry exists.
	pub fn update(&mut self, entry: E) -> Option<E> {
		let key = Endpoint::Finite((self.sort_key)(&entry));
		let index = self.locate(&key).ok()?;
		let previous = self.known[index].update(entry)?;

		trace!(key = %key, "updated entry");
		self.notify(&Range::singleton(key));
		Some(previous)
	}

	/// Describes what is known about `range`.
	///
	/// The returned segments are in ascending order and cover `range` exactly.
	/// Known segments hold the entries clipped to the segment.
	pub fn entries(&self, range: &Range<N>) -> Vec<Segment<E, N>> {
		self.walk(range)
			.into_iter()
			.map(|piece| match piece {
				Piece::Gap(gap) => Segment::Missing(gap),
				Piece::Known { index, range } => Segment::Known {
					entries: self.known[index]
						.entries_in(range.from(), range.to())
						.to_vec(),
					range,
				},
			})
			.collect()
	}

	/// Finds the first entry with a key greater or equal to the given one.
	///
	/// Returns the missing range that could hold such an entry if there is
	/// none in the enclosing known sub-range, or `NoValue` if every key above
	/// is known.
	pub fn next_entry<'a>(&self, lookup: impl Into<Lookup<'a, E, N>>) -> Neighbor<'_, E, N>
	where
		E: 'a,
	{
		let key = lookup.into().resolve(self.sort_key);

		match self.locate(&key) {
			Ok(index) => {
				let known = &self.known[index];

				if let Some(entry) = known.entries_in(&key, &Endpoint::PosInfinity).first() {
					Neighbor::Entry(entry)
				} else if *known.range().to() == Endpoint::PosInfinity {
					Neighbor::NoValue
				} else {
					Neighbor::Missing(Range::new_unchecked(
						known.range().to().saturating_succ(),
						self.gap_end(index + 1),
					))
				}
			}
			Err(index) => {
				let from = match index.checked_sub(1) {
					Some(previous) => self.known[previous].range().to().saturating_succ(),
					None => key,
				};
				Neighbor::Missing(Range::new_unchecked(from, self.gap_end(index)))
			}
		}
	}

	/// Finds the last entry with a key lower or equal to the given one.
	///
	/// Returns the missing range that could hold such an entry if there is
	/// none in the enclosing known sub-range, or `NoValue` if every key below
	/// is known.
	pub fn previous_entry<'a>(&self, lookup: impl Into<Lookup<'a, E, N>>) -> Neighbor<'_, E, N>
	where
		E: 'a,
	{
		let key = lookup.into().resolve(self.sort_key);

		match self.locate(&key) {
			Ok(index) => {
				let known = &self.known[index];

				if let Some(entry) = known.entries_in(&Endpoint::NegInfinity, &key).last() {
					Neighbor::Entry(entry)
				} else if *known.range().from() == Endpoint::NegInfinity {
					Neighbor::NoValue
				} else {
					Neighbor::Missing(Range::new_unchecked(
						self.gap_start(index),
						known.range().from().saturating_pred(),
					))
				}
			}
			Err(index) => {
				let to = match self.known.get(index) {
					Some(next) => next.range().from().saturating_pred(),
					None => key,
				};
				Neighbor::Missing(Range::new_unchecked(self.gap_start(index), to))
			}
		}
	}

	/// First key of the gap ending right before the sub-range at `index`.
	fn gap_start(&self, index: usize) -> Endpoint<N> {
		match index.checked_sub(1) {
			Some(previous) => self.known[previous].range().to().saturating_succ(),
			None => Endpoint::NegInfinity,
		}
	}

	/// Last key of the gap starting right before the sub-range at `index`.
	fn gap_end(&self, index: usize) -> Endpoint<N> {
		match self.known.get(index) {
			Some(next) => next.range().from().saturating_pred(),
			None => Endpoint::PosInfinity,
		}
	}

	/// Registers a listener on `range`.
	///
	/// The callback is immediately called with the current view of `range`,
	/// and then every time a mutation affects `range`.
	pub fn add_listener(
		&mut self,
		range: Range<N>,
		callback: Callback<E, N>,
	) -> Result<ListenerId, ListenerError> {
		if self.listeners.contains(&callback) {
			return Err(ListenerError::DuplicateListener);
		}

		let view = self.entries(&range);
		let id = self.listeners.insert(range.clone(), callback.clone());
		debug!(listener = %id, range = %range, "added listener");

		callback(&view);
		Ok(id)
	}

	/// Removes a listener.
	///
	/// Returns `false` if no such listener is registered.
	pub fn remove_listener(&mut self, id: ListenerId) -> bool {
		match self.listeners.remove(id) {
			Some(range) => {
				debug!(listener = %id, range = %range, "removed listener");
				true
			}
			None => false,
		}
	}

	/// Delivers a fresh view to every listener whose range intersects
	/// `changed`, in registration order.
	fn notify(&self, changed: &Range<N>) {
		for (id, listener) in self.listeners.intersecting(changed) {
			trace!(listener = %id, range = %listener.range(), "notifying listener");
			(listener.callback())(&self.entries(listener.range()));
		}
	}
}

impl<E: fmt::Debug, N: Discrete> fmt::Debug for RangeCache<E, N> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
