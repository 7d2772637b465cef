use crate::{Discrete, Endpoint, Range};
use std::{cmp::Ordering, ops};

use super::SortKey;

/// A fetched range along with every entry it holds.
///
/// Entries are sorted by strictly increasing key, and every key lies within
/// `range`.
pub(crate) struct Known<E, N> {
	range: Range<N>,
	entries: Vec<E>,
	sort_key: SortKey<E, N>,
}

impl<E, N: Discrete> Known<E, N> {
	/// Callers guarantee the entries are sorted, unique and within `range`.
	pub fn new(range: Range<N>, entries: Vec<E>, sort_key: SortKey<E, N>) -> Self {
		Known {
			range,
			entries,
			sort_key,
		}
	}

	pub fn range(&self) -> &Range<N> {
		&self.range
	}

	pub fn entries(&self) -> &[E] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Inserts `entry` unless an entry with the same key exists.
	pub fn add(&mut self, entry: E) -> bool {
		let key = Endpoint::Finite((self.sort_key)(&entry));
		match self.search(&key) {
			Ok(_) => false,
			Err(index) => {
				self.entries.insert(index, entry);
				true
			}
		}
	}

	pub fn delete(&mut self, key: &Endpoint<N>) -> Option<E> {
		self.search(key).ok().map(|index| self.entries.remove(index))
	}

	/// Replaces the entry with the same key, returning the previous one.
	pub fn update(&mut self, entry: E) -> Option<E> {
		let key = Endpoint::Finite((self.sort_key)(&entry));
		match self.search(&key) {
			Ok(index) => Some(std::mem::replace(&mut self.entries[index], entry)),
			Err(_) => None,
		}
	}

	/// Entries with a key in `[from, to]`.
	pub fn entries_in(&self, from: &Endpoint<N>, to: &Endpoint<N>) -> &[E] {
		let span = self.span(from, to);
		&self.entries[span]
	}

	/// Removes and returns the entries with a key in `[from, to]`.
	pub fn take_in(&mut self, from: &Endpoint<N>, to: &Endpoint<N>) -> Vec<E> {
		let span = self.span(from, to);
		self.entries.drain(span).collect()
	}

	/// Index span of the entries with a key in `[from, to]`, clamped to the
	/// bounds of this range.
	fn span(&self, from: &Endpoint<N>, to: &Endpoint<N>) -> ops::Range<usize> {
		if self.entries.is_empty() || from > to || from > self.range.to() || to < self.range.from() {
			return 0..0;
		}

		let start = if from <= self.range.from() {
			0
		} else {
			match self.search(from) {
				Ok(i) | Err(i) => i,
			}
		};

		let end = if to >= self.range.to() {
			self.entries.len()
		} else {
			match self.search(to) {
				Ok(i) => i + 1,
				Err(i) => i,
			}
		};

		start..end
	}

	/// Search for the entry with the given key.
	///
	/// Returns `Ok(index)` if it exists, or `Err(index)` where `index` is the
	/// lowest position whose key is greater than `key`.
	pub fn search(&self, key: &Endpoint<N>) -> Result<usize, usize> {
		binary_search(&self.entries, key, self.sort_key)
	}
}

fn compare<N: Ord>(entry_key: &N, key: &Endpoint<N>) -> Ordering {
	match key {
		Endpoint::NegInfinity => Ordering::Greater,
		Endpoint::Finite(key) => entry_key.cmp(key),
		Endpoint::PosInfinity => Ordering::Less,
	}
}

fn binary_search<E, N: Ord>(entries: &[E], key: &Endpoint<N>, sort_key: SortKey<E, N>) -> Result<usize, usize> {
	// invariants:
	// entries[..i] < key
	// entries[j..] > key
	let mut i = 0;
	let mut j = entries.len();

	while i < j {
		let k = (i + j) / 2;

		match compare(&sort_key(&entries[k]), key) {
			Ordering::Less => i = k + 1,
			Ordering::Greater => j = k,
			Ordering::Equal => return Ok(k),
		}
	}

	Err(i)
}
