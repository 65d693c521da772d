//! Predicates used as constraint bodies
//!
//! A [`Constraint`](crate::Constraint) pairs a [`Predicate`] with an error. Closures are
//! predicates already; this module adds logical combinators (`and`, `or`, `not`) and a
//! handful of ready-made string, number and collection predicates.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::predicate::*;
//!
//! // String predicates cover both `str` and `String`, so name the target when chaining.
//! let currency = PredicateExt::<str>::and(len_eq(3), all_chars(|c| c.is_ascii_uppercase()));
//! assert!(Predicate::<str>::check(&currency, "EUR"));
//! assert!(!Predicate::<str>::check(&currency, "EURO"));
//! assert!(!Predicate::<str>::check(&currency, "eur"));
//! ```

mod collection;
mod combinators;
mod number;
mod string;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use string::{
    all_chars, contains, len_between, len_eq, len_max, len_min, not_empty, starts_with, AllChars,
    Contains, LenBetween, NotEmpty, StartsWith,
};

pub use number::{between, ge, gt, le, lt, non_negative, positive, Between, Ge, Gt, Le, Lt};

pub use collection::{every, has_max_len, has_min_len, is_not_empty, Every, SizeBetween};
