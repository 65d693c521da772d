//! Non-empty vector type
//!
//! A field bucket in a [`ValidationReport`](crate::ValidationReport) always carries at
//! least one error, and a failed report always carries at least one bucket.
//! `NonEmptyVec<T>` encodes that in the type so callers never have to handle an empty
//! failure.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("too_short", vec!["not_upper"]);
//! assert_eq!(errors.head(), &"too_short");
//! assert_eq!(errors.len(), 2);
//! assert!(NonEmptyVec::<&str>::from_vec(vec![]).is_none());
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from its first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldcheck::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("missing_name");
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to build a non-empty vector from a `Vec`, returning `None` if it is empty.
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to pair with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            n => self.tail.get(n - 1),
        }
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Append every element of another non-empty vector.
    pub fn extend(&mut self, other: NonEmptyVec<T>) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Reverse the order of the elements.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldcheck::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]).reverse();
    /// assert_eq!(nev.into_vec(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(self) -> Self {
        let Self { head, mut tail } = self;
        match tail.pop() {
            None => Self::singleton(head),
            Some(last) => {
                tail.reverse();
                tail.push(head);
                Self::new(last, tail)
            }
        }
    }

    /// Transform every element.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        std::iter::once(&mut self.head).chain(self.tail.iter_mut())
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
