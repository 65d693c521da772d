//! Semigroup trait for merging accumulated errors
//!
//! A Semigroup is a type with an associative binary operation. `fieldcheck` uses it to
//! combine failures: two [`Validation`](crate::Validation) failures joined with
//! [`Validation::and`](crate::Validation::and) merge their errors through `combine`
//! instead of keeping only the first one.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Semigroup;
//!
//! assert_eq!(vec!["too_short"].combine(vec!["not_ascii"]), vec!["too_short", "not_ascii"]);
//! ```
//!
//! [`ValidationReport`](crate::ValidationReport) and [`NonEmptyVec`](crate::NonEmptyVec)
//! implement it too; a report merges buckets that share a field name.

/// A type that supports an associative binary operation
///
/// `combine` takes both values by value; clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
