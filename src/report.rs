//! Per-field error reports
//!
//! A failed validation carries a [`ValidationReport`]: a non-empty, ordered list of
//! [`FieldErrors`] buckets, one per failing field, each holding a non-empty list of
//! error identifiers. A field name appears at most once.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{FieldErrors, NonEmptyVec, ValidationReport};
//!
//! let report = ValidationReport::new(NonEmptyVec::new(
//!     FieldErrors::new("code", NonEmptyVec::singleton("missing_code")),
//!     vec![FieldErrors::new("currency", NonEmptyVec::singleton("bad_length"))],
//! ));
//!
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.get(&"currency").map(|e| e.head()), Some(&"bad_length"));
//! assert_eq!(report.to_string(), "code: missing_code\ncurrency: bad_length");
//! ```

use std::fmt;

use crate::nonempty::NonEmptyVec;
use crate::Semigroup;

/// Every error reported for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldErrors<K, E> {
    /// The field's grouping name.
    pub name: K,
    /// The field's errors, in report order.
    pub errors: NonEmptyVec<E>,
}

impl<K, E> FieldErrors<K, E> {
    /// Create a bucket for one field.
    pub fn new(name: K, errors: NonEmptyVec<E>) -> Self {
        Self { name, errors }
    }
}

/// The failure side of a record validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ValidationReport<K, E> {
    fields: NonEmptyVec<FieldErrors<K, E>>,
}

impl<K, E> ValidationReport<K, E> {
    /// Wrap a list of buckets.
    ///
    /// The caller is responsible for keeping names unique; the engine always does.
    pub fn new(fields: NonEmptyVec<FieldErrors<K, E>>) -> Self {
        Self { fields }
    }

    /// Build a report from buckets, or `None` when there are none.
    pub fn from_vec(fields: Vec<FieldErrors<K, E>>) -> Option<Self> {
        NonEmptyVec::from_vec(fields).map(Self::new)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`: a report has at least one failing field.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the buckets in report order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldErrors<K, E>> {
        self.fields.iter()
    }

    /// Iterate over the failing field names in report order.
    pub fn names(&self) -> impl Iterator<Item = &K> {
        self.fields.iter().map(|bucket| &bucket.name)
    }

    /// The underlying buckets.
    pub fn fields(&self) -> &NonEmptyVec<FieldErrors<K, E>> {
        &self.fields
    }

    /// Consume the report, returning the buckets.
    pub fn into_inner(self) -> NonEmptyVec<FieldErrors<K, E>> {
        self.fields
    }

    /// Reverse the bucket order and each bucket's error order.
    pub(crate) fn reverse(self) -> Self {
        Self {
            fields: self.fields.reverse().map(|bucket| FieldErrors {
                name: bucket.name,
                errors: bucket.errors.reverse(),
            }),
        }
    }
}

impl<K: PartialEq, E> ValidationReport<K, E> {
    /// Errors reported for the field named `name`.
    pub fn get(&self, name: &K) -> Option<&NonEmptyVec<E>> {
        self.fields
            .iter()
            .find(|bucket| &bucket.name == name)
            .map(|bucket| &bucket.errors)
    }

    /// Whether the field named `name` failed.
    pub fn contains(&self, name: &K) -> bool {
        self.get(name).is_some()
    }
}

/// Appends the other report's buckets; a bucket whose name is already present is
/// folded into the existing one, so names stay unique.
impl<K: PartialEq, E> Semigroup for ValidationReport<K, E> {
    fn combine(mut self, other: Self) -> Self {
        for bucket in other.fields {
            let existing = self.fields.iter_mut().find(|own| own.name == bucket.name);
            match existing {
                Some(own) => own.errors.extend(bucket.errors),
                None => self.fields.push(bucket),
            }
        }
        self
    }
}

impl<K, E> IntoIterator for ValidationReport<K, E> {
    type Item = FieldErrors<K, E>;
    type IntoIter = std::vec::IntoIter<FieldErrors<K, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// One line per failing field: `name: error, error`.
impl<K: fmt::Display, E: fmt::Display> fmt::Display for ValidationReport<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", bucket.name)?;
            for (j, error) in bucket.errors.iter().enumerate() {
                let sep = if j == 0 { " " } else { ", " };
                write!(f, "{}{}", sep, error)?;
            }
        }
        Ok(())
    }
}
