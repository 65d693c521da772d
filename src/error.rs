//! Configuration errors raised while validating
//!
//! Validation failures are never errors in this crate: they are returned as data inside
//! [`Validation::Failure`](crate::Validation::Failure). The types here cover the other
//! case, a field specification that cannot address the record it was handed. That is a
//! bug in the specification, not bad input, so it surfaces as `Err` and stops the run.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{validate, required_field, AccessError, Index};
//!
//! let specs = vec![required_field("third", Index(2), "missing", vec![])];
//! let record: Vec<Option<i32>> = vec![Some(1), None];
//!
//! let err = validate(&record, &specs).unwrap_err();
//! assert_eq!(err.field(), "\"third\"");
//! assert_eq!(err.access_error(), &AccessError::IndexOutOfBounds { index: 2, len: 2 });
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Why an accessor could not reach its slot in a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A positional accessor pointed past the end of the record.
    IndexOutOfBounds {
        /// The position the accessor asked for.
        index: usize,
        /// How many slots the record actually has.
        len: usize,
    },
    /// A keyed accessor named a key the record does not carry.
    MissingKey {
        /// The key the accessor asked for.
        key: String,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for record of {} fields", index, len)
            }
            AccessError::MissingKey { key } => write!(f, "record has no key {:?}", key),
        }
    }
}

impl StdError for AccessError {}

/// A field specification that does not fit the record passed to `validate`.
///
/// Carries the offending field's name (rendered with `Debug`, since names are opaque)
/// and the underlying [`AccessError`], which is also exposed through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecError {
    field: String,
    source: AccessError,
}

impl SpecError {
    /// Create a new spec error for the named field.
    pub fn new(field: impl Into<String>, source: AccessError) -> Self {
        Self {
            field: field.into(),
            source,
        }
    }

    /// The name of the field whose accessor failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The accessor failure behind this error.
    pub fn access_error(&self) -> &AccessError {
        &self.source
    }

    /// Consume the error, returning the accessor failure.
    pub fn into_access_error(self) -> AccessError {
        self.source
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field spec {} cannot address record: {}",
            self.field, self.source
        )
    }
}

impl StdError for SpecError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}
