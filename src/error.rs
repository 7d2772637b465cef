use thiserror::Error;

/// Boxed error produced by caller-supplied conversion functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while building a [`Range`](crate::Range).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
	/// The endpoint is neither an integer nor an infinity.
	#[error("endpoint `{value}` is neither an integer nor infinite")]
	InvalidEndpoint { value: String },

	#[error("from value `{from}` is greater than to value `{to}`")]
	InvalidOrder { from: String, to: String },
}

/// Reasons a bulk insertion is rejected.
///
/// A rejected insertion leaves the cache untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
	#[error("entries are not sorted in ascending order by key")]
	UnsortedEntries,

	#[error("multiple entries with key `{key}`")]
	DuplicateKey { key: String },

	#[error("entries outside of range {range}")]
	EntryOutOfBounds { range: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListenerError {
	#[error("a listener with the same callback already exists")]
	DuplicateListener,
}

/// Errors raised while rebuilding a cache from its minified form.
///
/// No partially rebuilt cache is ever returned.
#[derive(Debug, Error)]
pub enum UnminifyError {
	#[error("cannot unminify range cache: minified value is not an array")]
	NotAnArray,

	#[error("cannot unminify range cache: malformed interval at index {index}")]
	MalformedInterval { index: usize },

	#[error("cannot unminify range cache: {0}")]
	UnminifyFailed(#[source] BoxError),
}
