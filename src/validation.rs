//! Validation type for accumulating errors
//!
//! `Validation` is the shape every field check returns. It is similar to `Result`,
//! but combining two failures with [`Validation::and`] merges their errors through
//! [`Semigroup`] instead of stopping at the first one.
//!
//! For a record check the success side is `()` and the failure side is a
//! [`ValidationReport`](crate::ValidationReport); see
//! [`FieldValidation`](crate::FieldValidation).
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Validation;
//!
//! let ok = Validation::<_, Vec<&str>>::success(42);
//! assert!(ok.is_success());
//!
//! let v1 = Validation::<i32, _>::failure(vec!["missing_code"]);
//! let v2 = Validation::<i32, _>::failure(vec!["bad_currency"]);
//! assert_eq!(v1.and(v2), Validation::Failure(vec!["missing_code", "bad_currency"]));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` to accumulate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The failure value, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let v = Validation::<(), _>::failure(vec!["too_long"]);
    /// assert_eq!(v.failure_ref(), Some(&vec!["too_long"]));
    /// ```
    #[inline]
    pub fn failure_ref(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Consume the validation, returning the failure value if any
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both succeed, returns a success with a tuple of both values. If either or
    /// both fail, the errors are merged with `Semigroup::combine`, left first.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine every validation in an iterator
    ///
    /// Returns a success with every success value if all succeed; otherwise the
    /// failures are folded together in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let result = Validation::all(vec![
    ///     Validation::<i32, _>::failure(vec!["first"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["second"]),
    /// ]);
    /// assert_eq!(result, Validation::Failure(vec!["first", "second"]));
    /// ```
    pub fn all<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
