#![allow(dead_code)]

use serde_json::{json, Value};
use sparse_range_cache::{BoxError, Endpoint, Range, RangeCache, Segment};

/// Record of some paginated database.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Record {
	pub id: i64,
	pub payload: String,
}

pub fn record(id: i64, payload: &str) -> Record {
	Record {
		id,
		payload: payload.to_string(),
	}
}

pub fn id(record: &Record) -> i64 {
	record.id
}

pub fn range(from: i64, to: i64) -> Range<i64> {
	Range::new(from, to).unwrap()
}

pub fn known(from: i64, to: i64, entries: Vec<Record>) -> Segment<Record, i64> {
	Segment::Known {
		range: range(from, to),
		entries,
	}
}

pub fn missing(from: i64, to: i64) -> Segment<Record, i64> {
	Segment::Missing(range(from, to))
}

pub fn records_0_to_5() -> Vec<Record> {
	vec![
		record(0, "the zeroth record"),
		record(1, "another record"),
		record(4, "2 and 3 were deleted, 5 too"),
	]
}

pub fn records_23_to_28() -> Vec<Record> {
	vec![
		record(23, "twenty-three"),
		record(25, "a quarter"),
		record(26, "26"),
		record(28, "twenty-eight"),
	]
}

pub fn records_3_to_13() -> Vec<Record> {
	vec![
		record(3, "three"),
		records_0_to_5()[2].clone(),
		record(8, "octagon"),
		record(9, "three times three"),
		record(12, "a dozen"),
	]
}

pub fn records_16_to_20() -> Vec<Record> {
	vec![
		record(16, "sixteen"),
		record(18, "eighteen"),
		record(19, "nineteen"),
	]
}

pub fn records_25_to_27() -> Vec<Record> {
	vec![record(26, "twenty-six"), record(27, "27")]
}

/// Cache knowing `[0, 7]`, `[10, 15]` and `[23, 28]`, with 7 entries.
pub fn cache() -> RangeCache<Record, i64> {
	let mut cache: RangeCache<Record, i64> = RangeCache::new(id);
	cache
		.insert_range(range(23, 28), records_23_to_28())
		.unwrap();
	cache.insert_range(range(0, 5), records_0_to_5()).unwrap();
	cache.insert_range(range(10, 15), vec![]).unwrap();
	cache.insert_range(range(6, 7), vec![]).unwrap();
	cache
}

/// State of [`cache`] after inserting `[3, 13]`, `[16, 20]` and `[25, 27]`.
pub fn segments_after_inserts() -> Vec<Segment<Record, i64>> {
	let mut first = records_0_to_5()[..2].to_vec();
	first.extend(records_3_to_13());
	first.extend(records_16_to_20());

	let old = records_23_to_28();
	let mut last = vec![old[0].clone()];
	last.extend(records_25_to_27());
	last.push(old[3].clone());

	vec![known(0, 20, first), missing(21, 22), known(23, 28, last)]
}

pub fn minifier(record: &Record) -> Value {
	json!({ "i": record.id, "p": record.payload })
}

pub fn unminifier(value: &Value) -> Result<Record, BoxError> {
	let id = value
		.get("i")
		.and_then(Value::as_i64)
		.ok_or("record without an integer `i` field")?;
	let payload = value
		.get("p")
		.and_then(Value::as_str)
		.ok_or("record without a string `p` field")?;
	Ok(record(id, payload))
}

/// Known sub-ranges as `(from, to, keys)` triples.
pub fn layout<E>(cache: &RangeCache<E, i64>, key: fn(&E) -> i64) -> Vec<(Endpoint<i64>, Endpoint<i64>, Vec<i64>)> {
	cache
		.iter()
		.map(|(range, entries)| (*range.from(), *range.to(), entries.iter().map(key).collect()))
		.collect()
}
