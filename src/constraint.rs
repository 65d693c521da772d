//! Constraints: a predicate paired with the error it reports
//!
//! A [`Constraint`] is immutable once built. Cloning shares the predicate, so one
//! constraint can back any number of field specs.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{constraint, predicate::len_eq};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Rule {
//!     WrongLength,
//! }
//!
//! let two_letters = constraint::<str, _, _>(len_eq(2), Rule::WrongLength);
//! assert_eq!(two_letters.violation("NL"), None);
//! assert_eq!(two_letters.violation("NLD"), Some(&Rule::WrongLength));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

/// A named predicate rule over values of type `V`.
pub struct Constraint<V: ?Sized, E> {
    predicate: Arc<dyn Predicate<V>>,
    error: E,
}

impl<V: ?Sized, E> Constraint<V, E> {
    /// Wrap `predicate`, reporting `error` whenever it returns `false`.
    pub fn new<P>(predicate: P, error: E) -> Self
    where
        P: Predicate<V> + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            error,
        }
    }

    /// The error reported when the predicate fails.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Whether `value` satisfies the rule.
    #[inline]
    pub fn check(&self, value: &V) -> bool {
        self.predicate.check(value)
    }

    /// The error for `value`, if it breaks the rule.
    #[inline]
    pub fn violation(&self, value: &V) -> Option<&E> {
        if self.check(value) {
            None
        } else {
            Some(&self.error)
        }
    }
}

impl<V: ?Sized, E: Clone> Clone for Constraint<V, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            error: self.error.clone(),
        }
    }
}

impl<V: ?Sized, E: fmt::Debug> fmt::Debug for Constraint<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Build a [`Constraint`] from a predicate and its error.
///
/// Any predicate is accepted, closures included; nothing about its behaviour is checked.
///
/// # Example
///
/// ```rust
/// use fieldcheck::constraint;
///
/// let positive = constraint(|n: &i32| *n > 0, "not_positive");
/// assert!(positive.check(&3));
/// assert_eq!(positive.error(), &"not_positive");
/// ```
pub fn constraint<V, E, P>(predicate: P, error: E) -> Constraint<V, E>
where
    V: ?Sized,
    P: Predicate<V> + 'static,
{
    Constraint::new(predicate, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{len_eq, PredicateExt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_violation_reports_error_only_on_failure() {
        let c = constraint(|s: &str| s.starts_with('N'), "bad_prefix");
        assert_eq!(c.violation("NL"), None);
        assert_eq!(c.violation("DE"), Some(&"bad_prefix"));
    }

    #[test]
    fn test_clone_shares_predicate() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let counting = constraint(
            |_: &u8| {
                CALLS.fetch_add(1, Ordering::SeqCst);
                true
            },
            "never",
        );
        let copy = counting.clone();

        assert!(counting.check(&1));
        assert!(copy.check(&2));
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
        assert_eq!(copy.error(), counting.error());
    }

    #[test]
    fn test_combined_predicate() {
        let c = Constraint::<String, _>::new(
            PredicateExt::<String>::or(len_eq(2), len_eq(3)),
            "bad_length",
        );
        assert!(c.check(&"NL".to_string()));
        assert!(c.check(&"EUR".to_string()));
        assert_eq!(c.violation(&"EURO".to_string()), Some(&"bad_length"));
    }

    #[test]
    fn test_debug_shows_error() {
        let c = constraint(|n: &i32| *n > 0, "not_positive");
        assert_eq!(
            format!("{:?}", c),
            "Constraint { error: \"not_positive\", .. }"
        );
    }
}
