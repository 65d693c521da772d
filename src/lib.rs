//! # fieldcheck
//!
//! Declarative field validation for structured records.
//!
//! Describe a record type once: which fields are required, which are optional, and
//! which rules each value must satisfy. Then check any number of records against that
//! description. Each check returns either success or a per-field report of every rule
//! that was broken, never just the first.
//!
//! - **Constraint**: a [`Predicate`](predicate::Predicate) plus the error it reports.
//! - **FieldSpec**: name, [`Accessor`], required/optional policy and constraints.
//! - **validate**: evaluates a record against an ordered list of field specs.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::predicate::len_eq;
//! use fieldcheck::{constraint, getter, optional_field, required_field, validate, Validation};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Invalid {
//!     MissingCode,
//!     CodeLength,
//!     CurrencyLength,
//! }
//!
//! struct Price {
//!     code: Option<String>,
//!     currency: Option<String>,
//! }
//!
//! let specs = vec![
//!     required_field(
//!         "code",
//!         getter(|p: &Price| p.code.as_deref()),
//!         Invalid::MissingCode,
//!         vec![constraint(len_eq(2), Invalid::CodeLength)],
//!     ),
//!     optional_field(
//!         "currency",
//!         getter(|p: &Price| p.currency.as_deref()),
//!         vec![constraint(len_eq(3), Invalid::CurrencyLength)],
//!     ),
//! ];
//!
//! let price = Price { code: Some("NL".into()), currency: Some("EURO".into()) };
//!
//! match validate(&price, &specs).expect("specs fit Price") {
//!     Validation::Success(()) => println!("valid"),
//!     Validation::Failure(report) => {
//!         assert_eq!(report.len(), 1);
//!         assert_eq!(report.get(&"currency").map(|e| e.head()), Some(&Invalid::CurrencyLength));
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` spans and events while validating.
//! - `serde`: `Serialize` for reports, `Serialize`/`Deserialize` for [`ReportOrder`].
//! - `proptest`: `Arbitrary` for [`Validation`] and [`ReportOrder`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accessor;
pub mod constraint;
pub mod engine;
pub mod error;
pub mod field;
pub mod nonempty;
pub mod predicate;
pub mod report;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use accessor::{getter, key, Accessor, Getter, Index, Key};
pub use constraint::{constraint, Constraint};
pub use engine::{validate, validate_with_order, FieldValidation, ReportOrder, Specification};
pub use error::{AccessError, SpecError};
pub use field::{optional_field, required_field, FieldSpec, Presence};
pub use nonempty::NonEmptyVec;
pub use report::{FieldErrors, ValidationReport};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accessor::{getter, key, Accessor, Index};
    pub use crate::constraint::{constraint, Constraint};
    pub use crate::engine::{
        validate, validate_with_order, FieldValidation, ReportOrder, Specification,
    };
    pub use crate::error::{AccessError, SpecError};
    pub use crate::field::{optional_field, required_field, FieldSpec};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::report::{FieldErrors, ValidationReport};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
