use super::{Known, RangeCache, SortKey};
use crate::{BoxError, Discrete, Endpoint, Range, RangeError, UnminifyError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

impl<E, N: Discrete + Serialize> Known<E, N> {
	/// Compact form `{"e": entries, "f": from, "t": to}`.
	pub fn minify<F: Fn(&E) -> Value>(&self, minifier: F) -> Value {
		let entries: Vec<Value> = self.entries().iter().map(minifier).collect();
		json!({
			"e": entries,
			"f": self.range().from(),
			"t": self.range().to(),
		})
	}
}

impl<E, N: Discrete + Serialize> RangeCache<E, N> {
	/// Compact form of the cache.
	///
	/// Produces an array holding one `{"e": entries, "f": from, "t": to}`
	/// object per known sub-range, in ascending order. Entries are minified
	/// with `minifier`.
	pub fn minify<F: Fn(&E) -> Value>(&self, minifier: F) -> Value {
		Value::Array(self.known.iter().map(|known| known.minify(&minifier)).collect())
	}
}

impl<E: Clone, N: Discrete + DeserializeOwned> RangeCache<E, N> {
	/// Rebuilds a cache from its compact form.
	///
	/// Each sub-range is inserted in order with
	/// [`insert_range`](Self::insert_range), so the same validation and
	/// merging rules apply. Bounds are decoded as [`Endpoint`]s and handed to
	/// `range_factory`.
	pub fn unminify<U, R>(
		sort_key: SortKey<E, N>,
		unminifier: U,
		range_factory: R,
		minified: &Value,
	) -> Result<Self, UnminifyError>
	where
		U: Fn(&Value) -> Result<E, BoxError>,
		R: Fn(Endpoint<N>, Endpoint<N>) -> Result<Range<N>, RangeError>,
	{
		let intervals = minified.as_array().ok_or(UnminifyError::NotAnArray)?;
		let mut cache = Self::new(sort_key);

		for (index, interval) in intervals.iter().enumerate() {
			let (entries, from, to) = match (interval.get("e"), interval.get("f"), interval.get("t")) {
				(Some(Value::Array(entries)), Some(from), Some(to)) if !from.is_null() && !to.is_null() => {
					(entries, from, to)
				}
				_ => return Err(UnminifyError::MalformedInterval { index }),
			};

			let entries = entries
				.iter()
				.map(&unminifier)
				.collect::<Result<Vec<_>, _>>()
				.map_err(UnminifyError::UnminifyFailed)?;
			let range = range_factory(endpoint(from)?, endpoint(to)?).map_err(failed)?;

			cache.insert_range(range, entries).map_err(failed)?;
		}

		Ok(cache)
	}
}

fn endpoint<N: DeserializeOwned>(value: &Value) -> Result<Endpoint<N>, UnminifyError> {
	serde_json::from_value(value.clone()).map_err(|_| {
		failed(RangeError::InvalidEndpoint {
			value: value.to_string(),
		})
	})
}

fn failed(e: impl std::error::Error + Send + Sync + 'static) -> UnminifyError {
	UnminifyError::UnminifyFailed(Box::new(e))
}
