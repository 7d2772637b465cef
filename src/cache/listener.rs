use crate::{Range, Segment};
use btree_slab::BTreeMap;
use std::{fmt, rc::Rc};

/// Listener callback.
///
/// Receives the full current view of the listener's range every time the
/// range is affected by a mutation.
pub type Callback<E, N> = Rc<dyn Fn(&[Segment<E, N>])>;

/// Handle returned by listener registration.
///
/// Handles are never reused within the same cache.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

pub(crate) struct Listener<E, N> {
	range: Range<N>,
	callback: Callback<E, N>,
}

impl<E, N> Listener<E, N> {
	pub fn range(&self) -> &Range<N> {
		&self.range
	}

	pub fn callback(&self) -> &Callback<E, N> {
		&self.callback
	}
}

/// Registered listeners, in registration order.
pub(crate) struct Listeners<E, N> {
	map: BTreeMap<ListenerId, Listener<E, N>>,
	next_id: u64,
}

impl<E, N> Listeners<E, N> {
	pub fn new() -> Self {
		Listeners {
			map: BTreeMap::new(),
			next_id: 0,
		}
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Checks if the exact same callback is already registered.
	pub fn contains(&self, callback: &Callback<E, N>) -> bool {
		self.map
			.iter()
			.any(|(_, listener)| Rc::ptr_eq(&listener.callback, callback))
	}

	pub fn insert(&mut self, range: Range<N>, callback: Callback<E, N>) -> ListenerId {
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		self.map.insert(id, Listener { range, callback });
		id
	}

	pub fn remove(&mut self, id: ListenerId) -> Option<Range<N>> {
		self.map.remove(&id).map(|listener| listener.range)
	}

	/// Listeners whose range intersects `changed`.
	pub fn intersecting<'a>(
		&'a self,
		changed: &'a Range<N>,
	) -> impl Iterator<Item = (ListenerId, &'a Listener<E, N>)> + 'a
	where
		N: Ord,
	{
		self.map
			.iter()
			.filter(move |(_, listener)| listener.range.intersects(changed))
			.map(|(id, listener)| (*id, listener))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn callback() -> Callback<i64, i64> {
		Rc::new(|_: &[Segment<i64, i64>]| ())
	}

	#[test]
	fn registration_order() {
		let mut listeners = Listeners::new();
		let a = listeners.insert(Range::new(0, 5).unwrap(), callback());
		let b = listeners.insert(Range::new(10, 20).unwrap(), callback());
		let c = listeners.insert(Range::full(), callback());
		assert!(a < b && b < c);

		let changed = Range::new(3, 12).unwrap();
		let ids: Vec<_> = listeners.intersecting(&changed).map(|(id, _)| id).collect();
		assert_eq!(ids, vec![a, b, c]);

		let changed = Range::singleton(7);
		let ids: Vec<_> = listeners.intersecting(&changed).map(|(id, _)| id).collect();
		assert_eq!(ids, vec![c]);
	}

	#[test]
	fn identity() {
		let mut listeners = Listeners::new();
		let f = callback();
		let id = listeners.insert(Range::full(), f.clone());

		assert!(listeners.contains(&f));
		assert!(!listeners.contains(&callback()));

		assert_eq!(listeners.remove(id), Some(Range::full()));
		assert_eq!(listeners.remove(id), None);
		assert!(!listeners.contains(&f));
		assert_eq!(listeners.len(), 0);

		// ids are not reused
		let next = listeners.insert(Range::full(), f);
		assert_ne!(next, id);
	}
}
