//! A *sparse range cache* remembers which ranges of keys have already been
//! fetched from a slow source (a paginated backend for instance), and holds
//! the entries found in those ranges. It can tell what is known about any
//! range of keys, and what is still missing, without touching the source.
//!
//! Keys live on the extended integer line: every finite value of some
//! discrete type `N` plus `-Infinity` and `+Infinity`.
//!
//! ## Usage
//!
//! Entries are ordered by a key extracted with a plain function given at
//! construction. Freshly fetched ranges are merged in with
//! [`RangeCache::insert_range`], and [`RangeCache::entries`] describes a range
//! as known segments interleaved with missing gaps.
//!
//! ```
//! use sparse_range_cache::{Range, RangeCache, Segment};
//!
//! let mut cache: RangeCache<i64, i64> = RangeCache::numeric();
//! cache.insert_range(Range::new(0, 5).unwrap(), vec![0, 1, 4]).unwrap();
//! cache.insert_range(Range::new(10, 15).unwrap(), vec![]).unwrap();
//!
//! let segments = cache.entries(&Range::new(3, 12).unwrap());
//! assert_eq!(
//! 	segments,
//! 	vec![
//! 		Segment::Known {
//! 			range: Range::new(3, 5).unwrap(),
//! 			entries: vec![4]
//! 		},
//! 		Segment::Missing(Range::new(6, 9).unwrap()),
//! 		Segment::Known {
//! 			range: Range::new(10, 12).unwrap(),
//! 			entries: vec![]
//! 		},
//! 	]
//! );
//!
//! // filling the gap fuses everything into a single sub-range.
//! cache.insert_range(Range::new(6, 9).unwrap(), vec![]).unwrap();
//! assert_eq!(cache.range_count(), 1);
//! ```
//!
//! Single entries observed outside of a fetch can be added, updated and
//! deleted directly:
//!
//! ```
//! # use sparse_range_cache::{Lookup, Range, RangeCache};
//! # let mut cache: RangeCache<i64, i64> = RangeCache::numeric();
//! # cache.insert_range(Range::new(0, 5).unwrap(), vec![0, 1, 4]).unwrap();
//! assert!(cache.add(3, false));
//! assert!(!cache.add(8, false)); // `8` has never been fetched.
//! assert!(cache.add(8, true)); // unless we say so.
//! assert_eq!(cache.delete(Lookup::key(1)), Some(1));
//! assert_eq!(cache.entry_count(), 4);
//! ```
//!
//! ## Listeners
//!
//! A listener is notified with the full current view of its range every time
//! a mutation affects it. See [`RangeCache::add_listener`].
//!
//! ## Persistence
//!
//! [`RangeCache::minify`] and [`RangeCache::unminify`] convert a cache to and
//! from a compact JSON form where infinite endpoints are written as the
//! strings `"-Infinity"` and `"Infinity"`.
mod cache;
mod error;
mod range;
mod serde;
pub mod util;

pub use cache::*;
pub use error::*;
pub use range::*;
pub use util::Discrete;
