//! Testing utilities
//!
//! Assertion macros for [`Validation`](crate::Validation) outcomes and, behind the
//! `proptest` feature, `Arbitrary` implementations for property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::{assert_field_errors, assert_success, getter, required_field, validate};
//!
//! struct Login {
//!     user: Option<String>,
//! }
//!
//! let specs = vec![required_field("user", getter(|l: &Login| l.user.as_deref()), "missing_user", vec![])];
//!
//! assert_success!(validate(&Login { user: Some("ada".into()) }, &specs).unwrap());
//! assert_field_errors!(validate(&Login { user: None }, &specs).unwrap(), "user", ["missing_user"]);
//! ```

/// Assert that a validation succeeds.
///
/// Panics with the failure value if it is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// Panics with the success value if it is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given failure value.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Validation, assert_validation_errors};
///
/// let val = Validation::<(), _>::failure(vec!["error1", "error2"]);
/// assert_validation_errors!(val, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a record validation failed on `name` with exactly `expected` errors,
/// in report order.
///
/// `expected` is anything comparable with a `Vec` of the error type (an array or a
/// `vec!`).
#[macro_export]
macro_rules! assert_field_errors {
    ($validation:expr, $name:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(report) => match report.get(&$name) {
                Some(errors) => {
                    let actual: ::std::vec::Vec<_> = errors.iter().cloned().collect();
                    assert_eq!(actual, $expected);
                }
                None => panic!(
                    "Expected errors for field {:?}, report has none: {:?}",
                    $name, report
                ),
            },
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure on field {:?}, got Success: {:?}",
                    $name, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(crate::Validation::success),
            any_with::<E>(e_params).prop_map(crate::Validation::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for crate::ReportOrder {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(crate::ReportOrder::Declaration),
            Just(crate::ReportOrder::Reversed),
        ]
        .boxed()
    }
}
