//! The validation engine
//!
//! [`validate`] walks an ordered list of [`FieldSpec`]s, pulls each field out of the record,
//! applies the required/optional policy and the constraints, and folds the failures into
//! a [`FieldValidation`]. [`Specification`] bundles the specs with a [`ReportOrder`] so the
//! whole contract can be built once and passed around.
//!
//! Two outcomes are kept apart:
//!
//! - bad data becomes `Ok(Validation::Failure(report))`;
//! - a spec whose accessor cannot address the record becomes `Err(SpecError)`.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::predicate::len_eq;
//! use fieldcheck::{constraint, getter, optional_field, required_field, Specification, Validation};
//!
//! struct Money {
//!     code: Option<String>,
//!     currency: Option<String>,
//! }
//!
//! let spec = Specification::new(vec![
//!     required_field(
//!         "code",
//!         getter(|m: &Money| m.code.as_deref()),
//!         "missing_code",
//!         vec![constraint(len_eq(2), "code_length")],
//!     ),
//!     optional_field(
//!         "currency",
//!         getter(|m: &Money| m.currency.as_deref()),
//!         vec![constraint(len_eq(3), "currency_length")],
//!     ),
//! ]);
//!
//! let ok = Money { code: Some("NL".into()), currency: Some("EUR".into()) };
//! assert_eq!(spec.validate(&ok), Ok(Validation::Success(())));
//!
//! let bad = Money { code: Some("NL".into()), currency: Some("EURO".into()) };
//! let report = spec.validate(&bad).unwrap().into_failure().unwrap();
//! assert_eq!(report.names().collect::<Vec<_>>(), vec![&"currency"]);
//! ```

use std::fmt;

use crate::error::SpecError;
use crate::field::FieldSpec;
use crate::report::{FieldErrors, ValidationReport};
use crate::Validation;

/// Outcome of checking one record: `Success(())` or the per-field report.
pub type FieldValidation<K, E> = Validation<(), ValidationReport<K, E>>;

/// Order of the buckets in a report, and of the errors inside each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ReportOrder {
    /// Buckets follow the spec order, errors follow the constraint order.
    #[default]
    Declaration,
    /// Buckets and errors are both reversed, matching a left fold that prepends each
    /// result.
    Reversed,
}

impl fmt::Display for ReportOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportOrder::Declaration => f.write_str("declaration"),
            ReportOrder::Reversed => f.write_str("reversed"),
        }
    }
}

/// Validate `record` against `specs`, reporting in declaration order.
///
/// Fields not named in `specs` are never looked at. See [`validate_with_order`] for the
/// reversed layout.
pub fn validate<R, E, K>(
    record: &R,
    specs: &[FieldSpec<R, E, K>],
) -> Result<FieldValidation<K, E>, SpecError>
where
    R: ?Sized,
    E: Clone,
    K: Clone + PartialEq + fmt::Debug,
{
    validate_with_order(record, specs, ReportOrder::Declaration)
}

/// Validate `record` against `specs`, laying the report out in `order`.
///
/// Stops at the first accessor that cannot address `record` and returns it as a
/// [`SpecError`]; no partial report is produced in that case.
pub fn validate_with_order<R, E, K>(
    record: &R,
    specs: &[FieldSpec<R, E, K>],
    order: ReportOrder,
) -> Result<FieldValidation<K, E>, SpecError>
where
    R: ?Sized,
    E: Clone,
    K: Clone + PartialEq + fmt::Debug,
{
    #[cfg(feature = "tracing")]
    let _span =
        tracing::debug_span!("validate", field_count = specs.len(), order = %order).entered();

    let mut buckets = Vec::new();
    for spec in specs {
        let errors = spec.evaluate(record).map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                field = ?spec.name(),
                error = %source,
                "accessor cannot address record"
            );
            SpecError::new(format!("{:?}", spec.name()), source)
        })?;

        let Some(errors) = errors else {
            continue;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(field = ?spec.name(), error_count = errors.len(), "field failed");

        // Specs sharing a name share one bucket.
        match buckets
            .iter_mut()
            .find(|bucket: &&mut FieldErrors<K, E>| bucket.name == *spec.name())
        {
            Some(bucket) => bucket.errors.extend(errors),
            None => buckets.push(FieldErrors::new(spec.name().clone(), errors)),
        }
    }

    let Some(report) = ValidationReport::from_vec(buckets) else {
        #[cfg(feature = "tracing")]
        tracing::debug!("record valid");
        return Ok(Validation::Success(()));
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(failed_fields = report.len(), "record invalid");

    let report = match order {
        ReportOrder::Declaration => report,
        ReportOrder::Reversed => report.reverse(),
    };
    Ok(Validation::Failure(report))
}

/// A reusable validation contract for records of type `R`.
///
/// Build it once (at startup, or in a `LazyLock`) and hand it to every call site.
pub struct Specification<R: ?Sized, E, K = &'static str> {
    fields: Vec<FieldSpec<R, E, K>>,
    order: ReportOrder,
}

impl<R: ?Sized, E, K> Specification<R, E, K> {
    /// Create a specification from field specs, reporting in declaration order.
    pub fn new(fields: impl IntoIterator<Item = FieldSpec<R, E, K>>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            order: ReportOrder::default(),
        }
    }

    /// Append a field spec.
    pub fn field(mut self, spec: FieldSpec<R, E, K>) -> Self {
        self.fields.push(spec);
        self
    }

    /// Choose how reports are ordered.
    pub fn with_order(mut self, order: ReportOrder) -> Self {
        self.order = order;
        self
    }

    /// The configured report order.
    pub fn order(&self) -> ReportOrder {
        self.order
    }

    /// The field specs, in declaration order.
    pub fn fields(&self) -> &[FieldSpec<R, E, K>] {
        &self.fields
    }
}

impl<R: ?Sized, E: Clone, K: Clone + PartialEq + fmt::Debug> Specification<R, E, K> {
    /// Validate one record. See [`validate_with_order`].
    pub fn validate(&self, record: &R) -> Result<FieldValidation<K, E>, SpecError> {
        validate_with_order(record, &self.fields, self.order)
    }

    /// Whether `record` passes every field spec.
    pub fn is_valid(&self, record: &R) -> Result<bool, SpecError> {
        self.validate(record).map(|outcome| outcome.is_success())
    }
}

impl<R: ?Sized, E, K> FromIterator<FieldSpec<R, E, K>> for Specification<R, E, K> {
    fn from_iter<I: IntoIterator<Item = FieldSpec<R, E, K>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<R: ?Sized, E: Clone, K: Clone> Clone for Specification<R, E, K> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            order: self.order,
        }
    }
}

impl<R: ?Sized, E: fmt::Debug, K: fmt::Debug> fmt::Debug for Specification<R, E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("fields", &self.fields)
            .field("order", &self.order)
            .finish()
    }
}
