//! Core predicate trait and logical combinators

/// A reusable rule over values of type `T`.
///
/// Every [`Constraint`](crate::Constraint) is a predicate paired with an error. Any
/// `Fn(&T) -> bool + Send + Sync` closure is a predicate, so ad-hoc rules need no
/// wrapper type.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let two_letters = |s: &str| s.len() == 2;
/// assert!(two_letters.check("NL"));
/// assert!(!len_eq(3).check("EURO"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method chaining for combining predicates with logical operators.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let outside = ge(0).and(le(100)).not();
/// assert!(outside.check(&-1));
/// assert!(!outside.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// True when the original predicate is false.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
