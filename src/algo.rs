//! Batch sorting entry points.
//!
//! The pipeline is the same for every variant:
//! 1. Invoke the key rule exactly once per record and cache the result.
//! 2. Validate the cached keys: consistent arity and per-position field kind,
//!    and a direction list matching the arity. Any violation aborts the whole
//!    sort with no partial result.
//! 3. Order `(key, input position)` entries with the std stable sort, so
//!    records with equal keys keep their relative input order.
//!
//! The main entry points are [`stratasort`], [`stratasort_indices`] and
//! [`stratasort_mut`].

use crate::core::{
    Direction, KeyRule, KeyTuple, SortError, check_directions, check_shape, compare_keys,
};

/// Cached key plus the record's input position.
struct SortEntry {
    index: usize,
    key: KeyTuple,
}

/// Sorts into a fresh vector, leaving the input untouched.
///
/// Records whose keys compare equal on every field keep their relative input
/// order (stability). The `directions` list has one entry per key field;
/// pass `&[]` for all-ascending.
///
/// # Arguments
///
/// * `records` - The records to order.
/// * `rule` - The key rule; invoked once per record.
/// * `directions` - Per-field sort directions, or `&[]` for all-ascending.
///
/// # Errors
///
/// [`SortError::InvalidKeyRule`] if the rule fails on any record, the key
/// tuples disagree in shape, or `directions` does not match the key arity.
///
/// # Examples
///
/// ```
/// use stratasort::prelude::*;
///
/// let intervals = vec![[1i64, 3], [2, 1], [1, 2]];
/// let by_start_end = rule(|iv: &[i64; 2]| vec![iv[0].into(), iv[1].into()]);
///
/// let sorted = stratasort(&intervals, &by_start_end, &[]).unwrap();
/// assert_eq!(sorted, vec![[1, 2], [1, 3], [2, 1]]);
/// ```
///
/// Mixed directions, end ascending then start descending:
///
/// ```
/// use stratasort::prelude::*;
///
/// let intervals = vec![[1i64, 3], [2, 1], [1, 2]];
/// let by_end_start = rule(|iv: &[i64; 2]| vec![iv[1].into(), iv[0].into()]);
/// let directions = [Direction::Ascending, Direction::Descending];
///
/// let sorted = stratasort(&intervals, &by_end_start, &directions).unwrap();
/// assert_eq!(sorted, vec![[2, 1], [1, 2], [1, 3]]);
/// ```
pub fn stratasort<T, R>(
    records: &[T],
    rule: &R,
    directions: &[Direction],
) -> Result<Vec<T>, SortError>
where
    T: Clone,
    R: KeyRule<T> + ?Sized,
{
    let indices = stratasort_indices(records, rule, directions)?;
    Ok(indices.into_iter().map(|i| records[i].clone()).collect())
}

/// Index-based sort: returns the permutation instead of moving records.
///
/// The result is a vector of input positions such that reading `records` in
/// that order yields the stably sorted sequence. No `Clone` bound and no
/// mutation; useful when records are large or owned elsewhere.
///
/// # Examples
///
/// ```
/// use stratasort::prelude::*;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let by_text = rule(|s: &&str| vec![(*s).into()]);
///
/// let indices = stratasort_indices(&data, &by_text, &[]).unwrap();
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn stratasort_indices<T, R>(
    records: &[T],
    rule: &R,
    directions: &[Direction],
) -> Result<Vec<usize>, SortError>
where
    R: KeyRule<T> + ?Sized,
{
    let mut entries = build_entries(records, rule, directions)?;

    // Stable sort: entries tied on every key field keep their input order,
    // because `sort_by` is merge-based and the comparator never sees indices.
    entries.sort_by(|a, b| compare_keys(&a.key, &b.key, directions));

    Ok(entries.into_iter().map(|e| e.index).collect())
}

/// Sorts a mutable slice in place.
///
/// Computes the sorted permutation via [`stratasort_indices`] and applies it
/// by cycle-walking swaps, so the element values themselves are never cloned
/// or reallocated. On error the slice is left in its original order.
///
/// # Examples
///
/// ```
/// use stratasort::prelude::*;
///
/// let mut data = vec![(1, "a"), (1, "b"), (0, "c")];
/// stratasort_mut(&mut data, &rule(|r: &(i64, &str)| vec![r.0.into()]), &[]).unwrap();
///
/// // Stable: "a" stays before "b".
/// assert_eq!(data, vec![(0, "c"), (1, "a"), (1, "b")]);
/// ```
pub fn stratasort_mut<T, R>(
    records: &mut [T],
    rule: &R,
    directions: &[Direction],
) -> Result<(), SortError>
where
    R: KeyRule<T> + ?Sized,
{
    let indices = stratasort_indices(records, rule, directions)?;
    apply_permutation(records, indices);
    Ok(())
}

/// Extracts and validates one key per record.
///
/// The first record's key fixes the expected shape; every later key must
/// match it in arity and per-position kind. An empty input skips validation
/// entirely (there is no shape to check the directions against).
fn build_entries<T, R>(
    records: &[T],
    rule: &R,
    directions: &[Direction],
) -> Result<Vec<SortEntry>, SortError>
where
    R: KeyRule<T> + ?Sized,
{
    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let key = rule
            .key(record)
            .map_err(|e| SortError::InvalidKeyRule(format!("record {index}: {e}")))?;
        entries.push(SortEntry { index, key });
    }

    if let Some(first) = entries.first() {
        check_directions(first.key.len(), directions)?;
        for entry in &entries[1..] {
            check_shape(&first.key, &entry.key, entry.index)?;
        }
    }

    Ok(entries)
}

/// Applies a sorted-index permutation to the slice by walking its cycles.
///
/// `order[i]` is the input position of the record that belongs at output
/// position `i`. Each cycle is resolved with swaps and its slots marked as
/// placed, so every element moves at most once.
fn apply_permutation<T>(records: &mut [T], mut order: Vec<usize>) {
    for i in 0..records.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            records.swap(current, next);
            order[current] = current; // Mark as placed
            current = next;
        }
        order[current] = current;
    }
}
