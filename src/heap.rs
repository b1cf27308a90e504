//! Keyed priority queue for incremental minimum extraction.
//!
//! [`KeyedHeap`] covers the case where records arrive one at a time and the
//! smallest must be available at each step without re-sorting from scratch.
//! It is a plain binary min-heap over `(key, record)` entries; the composite
//! key is computed once at push time and stored alongside the record, never
//! recomputed during sifting.
//!
//! Unlike the batch sort, extraction order among records with equal keys is
//! **unspecified**: heap extraction is not stable. Callers that need stable
//! ties must use [`stratasort`](crate::algo::stratasort) instead.

use std::cmp::Ordering;

use crate::core::{
    Direction, KeyRule, KeyTuple, SortError, check_directions, check_shape, compare_keys,
};

/// One resident record with its cached composite key.
struct HeapEntry<T> {
    key: KeyTuple,
    record: T,
}

/// A priority queue ordered by a composite key rule.
///
/// The queue owns its rule and direction configuration; every pushed record
/// is keyed once and shape-checked against the keys already resident, so a
/// ragged rule is caught at the offending `push` rather than corrupting the
/// heap order.
///
/// # Examples
///
/// ```
/// use stratasort::prelude::*;
///
/// let mut heap = KeyedHeap::new(rule(|p: &(i64, i64)| vec![p.0.into(), p.1.into()]));
/// for pair in [(6i64, 3i64), (4, 5), (9, 7)] {
///     heap.push(pair).unwrap();
/// }
///
/// assert_eq!(heap.pop_min().unwrap(), (4, 5));
/// assert_eq!(heap.pop_min().unwrap(), (6, 3));
/// assert_eq!(heap.pop_min().unwrap(), (9, 7));
/// assert!(heap.pop_min().is_err());
/// ```
pub struct KeyedHeap<T, R: KeyRule<T>> {
    rule: R,
    directions: Vec<Direction>,
    entries: Vec<HeapEntry<T>>,
}

impl<T, R: KeyRule<T>> KeyedHeap<T, R> {
    /// Creates an empty queue with every key field ascending.
    pub fn new(rule: R) -> Self {
        Self::with_directions(rule, &[])
    }

    /// Creates an empty queue with per-field directions.
    ///
    /// "Minimum" then means smallest under the directed comparator, so a
    /// descending field yields its largest values first.
    pub fn with_directions(rule: R, directions: &[Direction]) -> Self {
        KeyedHeap {
            rule,
            directions: directions.to_vec(),
            entries: Vec::new(),
        }
    }

    /// Inserts a record, maintaining the heap invariant.
    ///
    /// The composite key is computed here, once, and cached for the record's
    /// lifetime in the queue.
    ///
    /// # Errors
    ///
    /// [`SortError::InvalidKeyRule`] if the rule fails on this record, the
    /// key's shape disagrees with the resident keys, or (on the first push)
    /// the configured directions do not match the key arity. The record is
    /// not inserted.
    pub fn push(&mut self, record: T) -> Result<(), SortError> {
        let key = self
            .rule
            .key(&record)
            .map_err(|e| SortError::InvalidKeyRule(e.to_string()))?;

        match self.entries.first() {
            Some(first) => check_shape(&first.key, &key, self.entries.len())?,
            None => check_directions(key.len(), &self.directions)?,
        }

        self.entries.push(HeapEntry { key, record });
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Removes and returns the record with the smallest composite key.
    ///
    /// Ties among equal keys pop in no particular order.
    ///
    /// # Errors
    ///
    /// [`SortError::EmptyQueue`] if the queue has no elements.
    pub fn pop_min(&mut self) -> Result<T, SortError> {
        if self.entries.is_empty() {
            return Err(SortError::EmptyQueue);
        }

        let entry = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(entry.record)
    }

    /// Returns the record that `pop_min` would return, without removing it.
    pub fn peek_min(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.record)
    }

    /// Returns the number of records in the queue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the queue has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        compare_keys(
            &self.entries[a].key,
            &self.entries[b].key,
            &self.directions,
        ) == Ordering::Less
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.less(child, parent) {
                break;
            }
            self.entries.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let left = 2 * parent + 1;
            if left >= self.entries.len() {
                break;
            }

            let right = left + 1;
            let mut smallest = left;
            if right < self.entries.len() && self.less(right, left) {
                smallest = right;
            }

            if !self.less(smallest, parent) {
                break;
            }
            self.entries.swap(parent, smallest);
            parent = smallest;
        }
    }
}
