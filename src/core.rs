//! Core types and traits for Stratasort.
//!
//! This module defines:
//! - [`Field`] / [`KeyTuple`]: the composite-key representation.
//! - [`Direction`]: per-field sort direction.
//! - [`KeyRule`]: the trait callers implement (or build from a closure via
//!   [`rule`]) to extract composite keys from their records.
//! - [`SortError`] / [`KeyError`]: the error surface.

use std::cmp::Ordering;
use thiserror::Error;

/// One scalar component of a composite key.
///
/// Keys are built from integers and text. All records in one sort call (or
/// one [`KeyedHeap`](crate::heap::KeyedHeap)) must produce the same field
/// kind at each position; mixed kinds are rejected as
/// [`SortError::InvalidKeyRule`] before any reordering happens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Signed integer field. Unsigned sources up to `u32` convert losslessly.
    Int(i64),
    /// Text field, compared lexicographically by `str` ordering.
    Text(String),
}

impl Field {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Field::Int(_) => "int",
            Field::Text(_) => "text",
        }
    }

    pub(crate) fn same_kind(&self, other: &Field) -> bool {
        matches!(
            (self, other),
            (Field::Int(_), Field::Int(_)) | (Field::Text(_), Field::Text(_))
        )
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Int(value)
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Field::Int(value.into())
    }
}

impl From<i16> for Field {
    fn from(value: i16) -> Self {
        Field::Int(value.into())
    }
}

impl From<i8> for Field {
    fn from(value: i8) -> Self {
        Field::Int(value.into())
    }
}

impl From<u32> for Field {
    fn from(value: u32) -> Self {
        Field::Int(value.into())
    }
}

impl From<u16> for Field {
    fn from(value: u16) -> Self {
        Field::Int(value.into())
    }
}

impl From<u8> for Field {
    fn from(value: u8) -> Self {
        Field::Int(value.into())
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<char> for Field {
    fn from(value: char) -> Self {
        Field::Text(value.to_string())
    }
}

/// An ordered composite key: one [`Field`] per sort criterion, compared
/// field by field, left to right.
pub type KeyTuple = Vec<Field>;

/// Sort direction for one key field.
///
/// `Descending` reverses that field's comparison result. It never negates
/// values, so it applies to text fields the same way as to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest key first (the default for every field).
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

/// Error a fallible key rule returns when it cannot derive a key for a
/// record. The engine wraps it into [`SortError::InvalidKeyRule`].
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct KeyError(String);

impl KeyError {
    /// Creates a key error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        KeyError(message.into())
    }
}

/// Errors reported by the sort entry points and by [`KeyedHeap`](crate::heap::KeyedHeap).
///
/// All failures are deterministic: re-invoking with the same input reproduces
/// the same error, so there is nothing to retry.
#[derive(Debug, Clone, Error)]
pub enum SortError {
    /// The key rule failed on a record, produced key tuples of inconsistent
    /// shape across records, or the direction list does not match the key
    /// arity. The whole operation aborts with no partial result.
    #[error("invalid key rule: {0}")]
    InvalidKeyRule(String),

    /// `pop_min` was called on an empty queue.
    #[error("pop_min on an empty queue")]
    EmptyQueue,
}

/// A rule extracting the composite key of a record.
///
/// The rule must be deterministic and side-effect-free for the duration of
/// one sort call: the engine invokes it exactly once per record and caches
/// the result, so a stateful rule would silently disagree with what gets
/// compared.
///
/// Closures returning `Result<KeyTuple, KeyError>` implement this trait
/// directly; infallible closures are adapted with [`rule`].
///
/// # Examples
///
/// Implementing for a custom record type:
///
/// ```
/// use stratasort::core::{KeyError, KeyRule, KeyTuple};
///
/// struct ByNameThenAge;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl KeyRule<User> for ByNameThenAge {
///     fn key(&self, record: &User) -> Result<KeyTuple, KeyError> {
///         Ok(vec![record.name.as_str().into(), record.age.into()])
///     }
/// }
/// ```
pub trait KeyRule<T> {
    /// Extracts the composite key for one record.
    fn key(&self, record: &T) -> Result<KeyTuple, KeyError>;
}

// Blanket implementation for fallible closures.
impl<T, F> KeyRule<T> for F
where
    F: Fn(&T) -> Result<KeyTuple, KeyError>,
{
    fn key(&self, record: &T) -> Result<KeyTuple, KeyError> {
        self(record)
    }
}

/// Wraps an infallible key function as a [`KeyRule`].
///
/// # Examples
///
/// ```
/// use stratasort::prelude::*;
///
/// let by_len_then_text = rule(|s: &String| vec![(s.len() as i64).into(), s.as_str().into()]);
/// let sorted = stratasort(
///     &["pear".to_string(), "fig".to_string(), "kiwi".to_string()],
///     &by_len_then_text,
///     &[],
/// )
/// .unwrap();
///
/// assert_eq!(sorted, vec!["fig", "kiwi", "pear"]);
/// ```
pub fn rule<T, F>(f: F) -> impl KeyRule<T>
where
    F: Fn(&T) -> KeyTuple,
{
    move |record: &T| Ok(f(record))
}

/// Compares two key tuples field by field, left to right.
///
/// The first field that differs under its direction decides; a missing
/// direction means ascending. Tuples equal on every field compare `Equal`;
/// callers that need stability tie-break on input position themselves.
#[inline]
pub(crate) fn compare_keys(a: &[Field], b: &[Field], directions: &[Direction]) -> Ordering {
    for (position, (left, right)) in a.iter().zip(b.iter()).enumerate() {
        let mut ord = left.cmp(right);
        if directions.get(position) == Some(&Direction::Descending) {
            ord = ord.reverse();
        }
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Rejects a non-empty direction list whose length differs from the key arity.
pub(crate) fn check_directions(arity: usize, directions: &[Direction]) -> Result<(), SortError> {
    if !directions.is_empty() && directions.len() != arity {
        return Err(SortError::InvalidKeyRule(format!(
            "{} directions for {} key fields",
            directions.len(),
            arity
        )));
    }
    Ok(())
}

/// Rejects a key tuple that disagrees with the reference shape (arity or
/// per-position field kind).
pub(crate) fn check_shape(
    reference: &[Field],
    candidate: &[Field],
    record: usize,
) -> Result<(), SortError> {
    if reference.len() != candidate.len() {
        return Err(SortError::InvalidKeyRule(format!(
            "record {record} produced a {}-field key, expected {} fields",
            candidate.len(),
            reference.len()
        )));
    }
    for (position, (expected, actual)) in reference.iter().zip(candidate.iter()).enumerate() {
        if !expected.same_kind(actual) {
            return Err(SortError::InvalidKeyRule(format!(
                "record {record} key field {position} is {}, expected {}",
                actual.kind(),
                expected.kind()
            )));
        }
    }
    Ok(())
}
