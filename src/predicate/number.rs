//! Number predicates
//!
//! Comparisons against a fixed threshold. They work for any `PartialOrd` type,
//! not only numbers.

use super::combinators::Predicate;

macro_rules! threshold_predicate {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, $op:tt) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name<T>(pub T);

        impl<T: PartialOrd + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        $(#[$meta])*
        pub fn $ctor<T: PartialOrd + Send + Sync>(threshold: T) -> $name<T> {
            $name(threshold)
        }
    };
}

threshold_predicate!(
    /// Value is strictly greater than the threshold.
    Gt, gt, >
);
threshold_predicate!(
    /// Value is greater than or equal to the threshold.
    Ge, ge, >=
);
threshold_predicate!(
    /// Value is strictly less than the threshold.
    Lt, lt, <
);
threshold_predicate!(
    /// Value is less than or equal to the threshold.
    Le, le, <=
);

/// Predicate for an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let quantity = between(1, 99);
/// assert!(quantity.check(&1));
/// assert!(quantity.check(&99));
/// assert!(!quantity.check(&0));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Create a predicate that checks a value is greater than its type's default (zero).
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(positive::<i64>().check(&3));
/// assert!(!positive::<i64>().check(&0));
/// ```
pub fn positive<T: PartialOrd + Default + Send + Sync>() -> Gt<T> {
    Gt(T::default())
}

/// Create a predicate that checks a value is at least its type's default (zero).
pub fn non_negative<T: PartialOrd + Default + Send + Sync>() -> Ge<T> {
    Ge(T::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(ge(5).check(&5));
        assert!(lt(5).check(&4));
        assert!(!lt(5).check(&5));
        assert!(le(5).check(&5));
    }

    #[test]
    fn test_between_inclusive() {
        let p = between(0.5, 1.5);
        assert!(p.check(&0.5));
        assert!(p.check(&1.5));
        assert!(!p.check(&1.6));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(positive::<i32>().check(&1));
        assert!(!positive::<i32>().check(&-1));
        assert!(non_negative::<u8>().check(&0));
    }

    #[test]
    fn test_non_numeric_ordering() {
        assert!(ge('a').check(&'b'));
        assert!(lt("m").check(&"a"));
    }
}
