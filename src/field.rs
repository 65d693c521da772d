//! Field specifications
//!
//! A [`FieldSpec`] is the verification contract for one field of a record type: a
//! grouping name, an [`Accessor`], a required/optional policy and an ordered list of
//! [`Constraint`]s. Build one with [`required_field`] or [`optional_field`].
//!
//! The field's value type is erased inside the spec, so fields of different types fit
//! in one `Vec<FieldSpec<R, E>>`.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{constraint, getter, optional_field, required_field, FieldSpec};
//!
//! struct Order {
//!     sku: Option<String>,
//!     quantity: Option<u32>,
//! }
//!
//! let specs: Vec<FieldSpec<Order, &str>> = vec![
//!     required_field("sku", getter(|o: &Order| o.sku.as_deref()), "missing_sku", vec![]),
//!     optional_field(
//!         "quantity",
//!         getter(|o: &Order| o.quantity.as_ref()),
//!         vec![constraint(|q: &u32| *q > 0, "zero_quantity")],
//!     ),
//! ];
//!
//! assert!(specs[0].is_required());
//! assert_eq!(specs[0].missing_error(), Some(&"missing_sku"));
//! assert_eq!(specs[1].missing_error(), None);
//! assert_eq!(specs[1].constraint_count(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::accessor::Accessor;
use crate::constraint::Constraint;
use crate::error::AccessError;
use crate::nonempty::NonEmptyVec;

/// Whether a field must be present, and what to report when it is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence<E> {
    /// The field must be present; absence reports the contained error.
    Required(E),
    /// The field may be absent; absence reports nothing.
    Optional,
}

/// The type-erased half of a field spec: the accessor plus its constraints.
trait FieldRules<R: ?Sized, E>: Send + Sync {
    /// `Ok(None)` when the value is absent, otherwise the errors of every failed
    /// constraint in declaration order.
    fn evaluate(&self, record: &R) -> Result<Option<Vec<E>>, AccessError>;

    fn constraint_count(&self) -> usize;
}

struct Rules<R: ?Sized, A: Accessor<R>, E> {
    accessor: A,
    constraints: Vec<Constraint<A::Value, E>>,
    _record: PhantomData<fn(&R)>,
}

impl<R, A, E> FieldRules<R, E> for Rules<R, A, E>
where
    R: ?Sized,
    A: Accessor<R>,
    E: Clone + Send + Sync,
{
    fn evaluate(&self, record: &R) -> Result<Option<Vec<E>>, AccessError> {
        let Some(value) = self.accessor.access(record)? else {
            return Ok(None);
        };
        let failed = self
            .constraints
            .iter()
            .filter_map(|c| c.violation(value))
            .cloned()
            .collect();
        Ok(Some(failed))
    }

    fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// The verification contract for one field of records of type `R`.
///
/// `E` is the caller's error identifier and `K` the name used to group errors in the
/// report. Both are opaque to the engine. Specs are immutable; `clone` shares the
/// accessor and constraints.
pub struct FieldSpec<R: ?Sized, E, K = &'static str> {
    name: K,
    presence: Presence<E>,
    rules: Arc<dyn FieldRules<R, E>>,
}

impl<R: ?Sized, E, K> FieldSpec<R, E, K> {
    /// The grouping name for this field's errors.
    pub fn name(&self) -> &K {
        &self.name
    }

    /// The required/optional policy.
    pub fn presence(&self) -> &Presence<E> {
        &self.presence
    }

    /// Whether the field must be present.
    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required(_))
    }

    /// The error reported when a required field is absent; `None` for optional fields.
    pub fn missing_error(&self) -> Option<&E> {
        match &self.presence {
            Presence::Required(error) => Some(error),
            Presence::Optional => None,
        }
    }

    /// How many constraints apply when the value is present.
    pub fn constraint_count(&self) -> usize {
        self.rules.constraint_count()
    }
}

impl<R: ?Sized, E: Clone, K> FieldSpec<R, E, K> {
    /// Check this field of `record`.
    ///
    /// Returns the field's errors in declaration order, `None` if it passed (or is
    /// optional and absent), or the accessor failure if `record` has no such slot.
    pub(crate) fn evaluate(&self, record: &R) -> Result<Option<NonEmptyVec<E>>, AccessError> {
        match self.rules.evaluate(record)? {
            Some(failed) => Ok(NonEmptyVec::from_vec(failed)),
            None => Ok(self.missing_error().cloned().map(NonEmptyVec::singleton)),
        }
    }
}

impl<R: ?Sized, E: Clone, K: Clone> Clone for FieldSpec<R, E, K> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            presence: self.presence.clone(),
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<R: ?Sized, E: fmt::Debug, K: fmt::Debug> fmt::Debug for FieldSpec<R, E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .field("constraints", &self.constraint_count())
            .finish()
    }
}

fn build<R, A, E, K, I>(
    name: K,
    presence: Presence<E>,
    accessor: A,
    constraints: I,
) -> FieldSpec<R, E, K>
where
    R: ?Sized + 'static,
    A: Accessor<R> + 'static,
    E: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = Constraint<A::Value, E>>,
{
    FieldSpec {
        name,
        presence,
        rules: Arc::new(Rules {
            accessor,
            constraints: constraints.into_iter().collect(),
            _record: PhantomData,
        }),
    }
}

/// Build a spec for a field that must be present.
///
/// An absent value reports exactly `missing_error`; the constraints only run on
/// present values.
pub fn required_field<R, A, E, K, I>(
    name: K,
    accessor: A,
    missing_error: E,
    constraints: I,
) -> FieldSpec<R, E, K>
where
    R: ?Sized + 'static,
    A: Accessor<R> + 'static,
    E: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = Constraint<A::Value, E>>,
{
    build(name, Presence::Required(missing_error), accessor, constraints)
}

/// Build a spec for a field that may be absent.
///
/// An absent value is skipped entirely; the constraints only run on present values.
pub fn optional_field<R, A, E, K, I>(name: K, accessor: A, constraints: I) -> FieldSpec<R, E, K>
where
    R: ?Sized + 'static,
    A: Accessor<R> + 'static,
    E: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = Constraint<A::Value, E>>,
{
    build(name, Presence::Optional, accessor, constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{getter, Index};
    use crate::constraint::constraint;
    use crate::predicate::len_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Payment {
        code: Option<String>,
        amount: Option<i64>,
    }

    fn code_spec() -> FieldSpec<Payment, &'static str> {
        required_field(
            "code",
            getter(|p: &Payment| p.code.as_deref()),
            "missing_code",
            vec![
                constraint(len_eq(2), "bad_length"),
                constraint(|s: &str| s.chars().all(|c| c.is_ascii_uppercase()), "not_upper"),
            ],
        )
    }

    #[test]
    fn test_required_absent_reports_missing_error_only() {
        let payment = Payment {
            code: None,
            amount: None,
        };
        assert_eq!(
            code_spec().evaluate(&payment),
            Ok(Some(NonEmptyVec::singleton("missing_code")))
        );
    }

    #[test]
    fn test_optional_absent_reports_nothing() {
        let spec: FieldSpec<Payment, &str> = optional_field(
            "amount",
            getter(|p: &Payment| p.amount.as_ref()),
            vec![constraint(|n: &i64| *n > 0, "not_positive")],
        );
        let payment = Payment {
            code: None,
            amount: None,
        };
        assert_eq!(spec.evaluate(&payment), Ok(None));
    }

    #[test]
    fn test_present_collects_failures_in_declaration_order() {
        let payment = Payment {
            code: Some("nld".to_string()),
            amount: None,
        };
        assert_eq!(
            code_spec().evaluate(&payment),
            Ok(Some(NonEmptyVec::new("bad_length", vec!["not_upper"])))
        );
    }

    #[test]
    fn test_present_and_valid_reports_nothing() {
        let payment = Payment {
            code: Some("NL".to_string()),
            amount: None,
        };
        assert_eq!(code_spec().evaluate(&payment), Ok(None));
    }

    #[test]
    fn test_constraints_not_run_on_absent_value() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let spec: FieldSpec<Vec<Option<i32>>, &str> = required_field(
            "first",
            Index(0),
            "missing",
            vec![constraint(
                |_: &i32| {
                    CALLS.fetch_add(1, Ordering::SeqCst);
                    false
                },
                "never_reported",
            )],
        );
        let record: Vec<Option<i32>> = vec![None];
        assert_eq!(
            spec.evaluate(&record),
            Ok(Some(NonEmptyVec::singleton("missing")))
        );
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_accessor_failure_is_an_error() {
        let spec: FieldSpec<Vec<Option<i32>>, &str> = optional_field("second", Index(1), vec![]);
        let record: Vec<Option<i32>> = vec![Some(1)];
        assert_eq!(
            spec.evaluate(&record),
            Err(AccessError::IndexOutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_metadata_and_debug() {
        let spec = code_spec();
        assert_eq!(spec.name(), &"code");
        assert!(spec.is_required());
        assert_eq!(spec.presence(), &Presence::Required("missing_code"));
        assert_eq!(spec.constraint_count(), 2);
        assert_eq!(
            format!("{:?}", spec.clone()),
            "FieldSpec { name: \"code\", presence: Required(\"missing_code\"), constraints: 2 }"
        );
    }
}
