mod common;

use common::*;
use sparse_range_cache::{Endpoint, InsertError, Range, RangeCache, Segment};

#[test]
fn insert_range() {
	let cache = cache();

	assert_eq!(cache.range_count(), 3);
	assert_eq!(cache.entry_count(), 7);
	assert_eq!(
		cache.entries(&range(0, 7)),
		vec![known(0, 7, records_0_to_5())]
	);
	assert_eq!(cache.entries(&range(10, 15)), vec![known(10, 15, vec![])]);
	assert_eq!(
		cache.entries(&range(23, 28)),
		vec![known(23, 28, records_23_to_28())]
	);
}

#[test]
fn insert_replaces_overlap() {
	let mut cache = cache();

	cache.insert_range(range(3, 13), records_3_to_13()).unwrap();
	cache.insert_range(range(16, 20), records_16_to_20()).unwrap();
	cache.insert_range(range(25, 27), records_25_to_27()).unwrap();

	assert_eq!(cache.entries(&range(0, 28)), segments_after_inserts());
	assert_eq!(cache.range_count(), 2);
	assert_eq!(cache.entry_count(), 14);
}

#[test]
fn insert_fuses_neighbors() {
	let mut cache: RangeCache<i64, i64> = RangeCache::numeric();
	cache.insert_range(range(0, 5), vec![0, 1, 4]).unwrap();
	cache.insert_range(range(10, 15), vec![12]).unwrap();

	cache.insert_range(range(6, 9), vec![]).unwrap();

	assert_eq!(cache.range_count(), 1);
	assert_eq!(
		cache.entries(&range(0, 15)),
		vec![Segment::Known {
			range: range(0, 15),
			entries: vec![0, 1, 4, 12]
		}]
	);
}

#[test]
fn insert_keeps_edges() {
	let mut cache: RangeCache<i64, i64> = RangeCache::numeric();
	cache.insert_range(range(0, 5), vec![0, 1, 4]).unwrap();

	cache.insert_range(range(3, 13), vec![3, 4, 8, 9, 12]).unwrap();

	assert_eq!(
		cache.iter().map(|(r, e)| (*r, e.to_vec())).collect::<Vec<_>>(),
		vec![(range(0, 13), vec![0, 1, 3, 4, 8, 9, 12])]
	);
}

#[test]
fn insert_replaces_interior() {
	let mut cache: RangeCache<i64, i64> = RangeCache::numeric();
	cache.insert_range(range(0, 20), vec![0, 5, 10, 15, 20]).unwrap();

	cache.insert_range(range(4, 16), vec![7]).unwrap();

	assert_eq!(cache.range_count(), 1);
	assert_eq!(cache.iter().next().unwrap().1, &[0, 7, 20]);
}

#[test]
fn insert_absorbs_many() {
	let mut cache: RangeCache<i64, i64> = RangeCache::numeric();
	cache.insert_range(range(0, 1), vec![0]).unwrap();
	cache.insert_range(range(4, 5), vec![5]).unwrap();
	cache.insert_range(range(8, 9), vec![8]).unwrap();
	cache.insert_range(range(12, 13), vec![13]).unwrap();
	assert_eq!(cache.range_count(), 4);

	cache.insert_range(range(2, 11), vec![2, 6]).unwrap();

	assert_eq!(cache.range_count(), 1);
	assert_eq!(cache.iter().next().unwrap().0, &range(0, 13));
	assert_eq!(cache.iter().next().unwrap().1, &[0, 2, 6, 13]);
}

#[test]
fn insert_is_idempotent() {
	let mut once = cache();
	once.insert_range(range(3, 13), records_3_to_13()).unwrap();

	let mut twice = cache();
	twice.insert_range(range(3, 13), records_3_to_13()).unwrap();
	twice.insert_range(range(3, 13), records_3_to_13()).unwrap();

	assert_eq!(layout(&once, id), layout(&twice, id));
	assert_eq!(once.entries(&range(-10, 40)), twice.entries(&range(-10, 40)));
}

#[test]
fn insert_infinite() {
	let mut cache: RangeCache<i64, i64> = RangeCache::numeric();
	cache.insert_range(range(0, 5), vec![3]).unwrap();

	cache
		.insert_range(
			Range::new(Endpoint::NegInfinity, -1).unwrap(),
			vec![-100],
		)
		.unwrap();
	cache
		.insert_range(
			Range::new(6, Endpoint::PosInfinity).unwrap(),
			vec![i64::MAX],
		)
		.unwrap();

	assert_eq!(cache.range_count(), 1);
	assert_eq!(
		layout(&cache, |n| *n),
		vec![(
			Endpoint::NegInfinity,
			Endpoint::PosInfinity,
			vec![-100, 3, i64::MAX]
		)]
	);
}

#[test]
fn insert_unsorted() {
	let mut cache = cache();
	let records = records_0_to_5();

	assert_eq!(
		cache.insert_range(range(0, 5), vec![records[1].clone(), records[0].clone()]),
		Err(InsertError::UnsortedEntries)
	);
	assert_eq!(
		cache
			.insert_range(range(0, 5), vec![records[0].clone(), records[0].clone()])
			.unwrap_err()
			.to_string(),
		"multiple entries with key `0`"
	);
}

#[test]
fn insert_out_of_bounds() {
	let mut cache = cache();

	assert_eq!(
		cache.insert_range(range(10, 15), records_0_to_5()),
		Err(InsertError::EntryOutOfBounds {
			range: "10 to 15".to_string()
		})
	);
	assert_eq!(
		cache.insert_range(range(0, 5), records_23_to_28()),
		Err(InsertError::EntryOutOfBounds {
			range: "0 to 5".to_string()
		})
	);

	// rejected insertions leave the cache untouched.
	assert_eq!(layout(&cache, id), layout(&common::cache(), id));
}
