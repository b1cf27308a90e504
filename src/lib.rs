//! # Stratasort
//!
//! `stratasort` is a small ordering engine: stable multi-key sorting with
//! per-field ascending/descending directions, plus a keyed priority queue for
//! incremental minimum extraction.
//!
//! Most standard sorts take a single key and a single direction, and whether
//! equal keys keep their input order depends on which library function you
//! happened to call. This crate makes those choices explicit and tested:
//!
//! - **Composite keys**: a [`KeyRule`] extracts an ordered tuple of fields
//!   per record; tuples compare field by field, left to right.
//! - **Per-field direction**: each field independently sorts
//!   [`Ascending`](Direction::Ascending) or
//!   [`Descending`](Direction::Descending). Descending reverses the field's
//!   comparison result rather than negating values, so it works for text.
//! - **Stability as a contract**: records tied on every key field keep their
//!   relative input order, guaranteed and tested, not inherited from a
//!   platform default.
//! - **One key per record**: the key rule runs exactly once per record and
//!   the result is cached, never re-derived per comparison.
//!
//! ## Usage
//!
//! ### Batch sorting
//!
//! ```rust
//! use stratasort::prelude::*;
//!
//! let intervals = vec![[1i64, 3], [2, 1], [1, 2]];
//!
//! // Sort by end ascending, then start descending.
//! let by_end_start = rule(|iv: &[i64; 2]| vec![iv[1].into(), iv[0].into()]);
//! let directions = [Direction::Ascending, Direction::Descending];
//!
//! let sorted = stratasort(&intervals, &by_end_start, &directions).unwrap();
//! assert_eq!(sorted, vec![[2, 1], [1, 2], [1, 3]]);
//! ```
//!
//! In-place and index-based variants are available as [`stratasort_mut`] and
//! [`stratasort_indices`]; only the in-place variant touches the input.
//!
//! ### Incremental minimum extraction
//!
//! ```rust
//! use stratasort::prelude::*;
//!
//! let mut queue = KeyedHeap::new(rule(|n: &i64| vec![(*n).into()]));
//! for n in [3i64, 1, 2] {
//!     queue.push(n).unwrap();
//! }
//!
//! assert_eq!(queue.pop_min().unwrap(), 1);
//! queue.push(0).unwrap();
//! assert_eq!(queue.pop_min().unwrap(), 0);
//! ```
//!
//! Note that heap extraction is **not** stable: records with equal keys pop
//! in no particular order. Callers that rely on tie order must use the batch
//! sort.
//!
//! ## Failure model
//!
//! A key rule that fails on a record, or produces key tuples of inconsistent
//! shape within one call, aborts the whole operation with
//! [`SortError::InvalidKeyRule`]; no partial result is ever returned.
//! [`KeyedHeap::pop_min`] on an empty queue reports
//! [`SortError::EmptyQueue`]. All failures are deterministic.
//!
//! ## Performance characteristics
//!
//! - `O(n log n)` comparisons per batch sort, `O(n)` auxiliary space for the
//!   cached keys and the index permutation.
//! - `O(log n)` per queue push or pop.

pub mod algo;
pub mod core;
pub mod heap;

pub use algo::{stratasort, stratasort_indices, stratasort_mut};
pub use core::{Direction, Field, KeyError, KeyRule, KeyTuple, SortError, rule};
pub use heap::KeyedHeap;

pub mod prelude {
    pub use crate::algo::{stratasort, stratasort_indices, stratasort_mut};
    pub use crate::core::{Direction, Field, KeyError, KeyRule, KeyTuple, SortError, rule};
    pub use crate::heap::KeyedHeap;
}
