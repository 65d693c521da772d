//! Field accessors
//!
//! An [`Accessor`] knows how to pull one field's value out of a record. It answers
//! with `Ok(Some(&value))` when the value is present, `Ok(None)` when it is absent,
//! and `Err(AccessError)` when the record does not have the slot at all.
//!
//! Three accessors ship with the crate:
//!
//! - [`Getter`], built with [`getter`], wraps a closure over a typed struct. It cannot fail.
//! - [`Index`] addresses positional records (`Vec<Option<V>>`, slices, arrays).
//! - [`Key`], built with [`key`], addresses keyed records (`HashMap` / `BTreeMap` of
//!   `Option<V>`).
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::accessor::{getter, key, Accessor, Index};
//! use std::collections::HashMap;
//!
//! struct Payment {
//!     currency: Option<String>,
//! }
//!
//! let currency = getter(|p: &Payment| p.currency.as_deref());
//! let payment = Payment { currency: Some("EUR".to_string()) };
//! assert_eq!(currency.access(&payment), Ok(Some("EUR")));
//!
//! let row: Vec<Option<i32>> = vec![Some(7), None];
//! assert_eq!(Index(0).access(&row), Ok(Some(&7)));
//! assert_eq!(Index(1).access(&row), Ok(None));
//! assert!(Index(2).access(&row).is_err());
//!
//! let mut map: HashMap<String, Option<u32>> = HashMap::new();
//! map.insert("qty".to_string(), Some(3));
//! assert_eq!(key("qty").access(&map), Ok(Some(&3)));
//! ```

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::error::AccessError;

/// Extracts one field's value from a record of type `R`.
///
/// `None` is the single absence sentinel: the engine never looks inside the value
/// to decide whether it is present.
pub trait Accessor<R: ?Sized>: Send + Sync {
    /// The type of the extracted value.
    type Value: ?Sized;

    /// Look up the value in `record`.
    fn access<'r>(&self, record: &'r R) -> Result<Option<&'r Self::Value>, AccessError>;
}

/// Accessor backed by a closure over a typed record.
///
/// Created by [`getter`].
pub struct Getter<F, V: ?Sized> {
    get: F,
    _value: PhantomData<fn(&V)>,
}

impl<F, V: ?Sized> fmt::Debug for Getter<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter").finish_non_exhaustive()
    }
}

impl<F: Clone, V: ?Sized> Clone for Getter<F, V> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            _value: PhantomData,
        }
    }
}

impl<R, V, F> Accessor<R> for Getter<F, V>
where
    R: ?Sized,
    V: ?Sized,
    F: for<'r> Fn(&'r R) -> Option<&'r V> + Send + Sync,
{
    type Value = V;

    #[inline]
    fn access<'r>(&self, record: &'r R) -> Result<Option<&'r V>, AccessError> {
        Ok((self.get)(record))
    }
}

/// Wrap a closure returning `Option<&V>` as an accessor.
///
/// # Example
///
/// ```rust
/// use fieldcheck::accessor::{getter, Accessor};
///
/// struct User {
///     nickname: Option<String>,
/// }
///
/// let nickname = getter(|u: &User| u.nickname.as_ref());
/// assert_eq!(nickname.access(&User { nickname: None }), Ok(None));
/// ```
pub fn getter<R, V, F>(get: F) -> Getter<F, V>
where
    R: ?Sized,
    V: ?Sized,
    F: for<'r> Fn(&'r R) -> Option<&'r V> + Send + Sync,
{
    Getter {
        get,
        _value: PhantomData,
    }
}

/// Positional accessor for records laid out as a sequence of optional slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(pub usize);

impl<V> Accessor<[Option<V>]> for Index {
    type Value = V;

    #[inline]
    fn access<'r>(&self, record: &'r [Option<V>]) -> Result<Option<&'r V>, AccessError> {
        record
            .get(self.0)
            .map(Option::as_ref)
            .ok_or(AccessError::IndexOutOfBounds {
                index: self.0,
                len: record.len(),
            })
    }
}

impl<V> Accessor<Vec<Option<V>>> for Index {
    type Value = V;

    #[inline]
    fn access<'r>(&self, record: &'r Vec<Option<V>>) -> Result<Option<&'r V>, AccessError> {
        <Self as Accessor<[Option<V>]>>::access(self, record.as_slice())
    }
}

impl<V, const N: usize> Accessor<[Option<V>; N]> for Index {
    type Value = V;

    #[inline]
    fn access<'r>(&self, record: &'r [Option<V>; N]) -> Result<Option<&'r V>, AccessError> {
        <Self as Accessor<[Option<V>]>>::access(self, record.as_slice())
    }
}

/// Keyed accessor for records laid out as a map of optional values.
///
/// A key that is not in the map is a shape mismatch ([`AccessError::MissingKey`]);
/// a key mapped to `None` is an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(pub Cow<'static, str>);

/// Create a keyed accessor.
///
/// # Example
///
/// ```rust
/// use fieldcheck::accessor::{key, Accessor};
/// use std::collections::BTreeMap;
///
/// let mut row: BTreeMap<&str, Option<&str>> = BTreeMap::new();
/// row.insert("code", None);
///
/// assert_eq!(key("code").access(&row), Ok(None));
/// assert!(key("name").access(&row).is_err());
/// ```
pub fn key(name: impl Into<Cow<'static, str>>) -> Key {
    Key(name.into())
}

impl Key {
    fn missing(&self) -> AccessError {
        AccessError::MissingKey {
            key: self.0.to_string(),
        }
    }
}

impl<K, V, S> Accessor<HashMap<K, Option<V>, S>> for Key
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn access<'r>(
        &self,
        record: &'r HashMap<K, Option<V>, S>,
    ) -> Result<Option<&'r V>, AccessError> {
        let name: &str = &self.0;
        record
            .get(name)
            .map(Option::as_ref)
            .ok_or_else(|| self.missing())
    }
}

impl<K, V> Accessor<BTreeMap<K, Option<V>>> for Key
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    #[inline]
    fn access<'r>(
        &self,
        record: &'r BTreeMap<K, Option<V>>,
    ) -> Result<Option<&'r V>, AccessError> {
        let name: &str = &self.0;
        record
            .get(name)
            .map(Option::as_ref)
            .ok_or_else(|| self.missing())
    }
}
