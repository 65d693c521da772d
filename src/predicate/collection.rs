//! Collection predicates
//!
//! Size checks for `Vec<T>` and slice fields.

use super::combinators::Predicate;

/// Predicate that checks a collection's length is in an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeBetween {
    min: usize,
    max: usize,
}

impl SizeBetween {
    #[inline]
    fn fits(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

impl<T> Predicate<Vec<T>> for SizeBetween {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        self.fits(value.len())
    }
}

impl<T> Predicate<[T]> for SizeBetween {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        self.fits(value.len())
    }
}

/// Create a predicate that checks a collection is not empty.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(is_not_empty().check(&vec!["line"]));
/// assert!(!is_not_empty().check(&Vec::<&str>::new()));
/// ```
pub fn is_not_empty() -> SizeBetween {
    has_min_len(1)
}

/// Create a predicate that checks a collection has at least `min` elements.
pub fn has_min_len(min: usize) -> SizeBetween {
    SizeBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks a collection has at most `max` elements.
pub fn has_max_len(max: usize) -> SizeBetween {
    SizeBetween { min: 0, max }
}

/// Predicate that checks every element matches an element predicate.
#[derive(Clone, Copy, Debug)]
pub struct Every<P>(P);

impl<T, P: Predicate<T>> Predicate<Vec<T>> for Every<P> {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        value.iter().all(|item| self.0.check(item))
    }
}

impl<T, P: Predicate<T>> Predicate<[T]> for Every<P> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.iter().all(|item| self.0.check(item))
    }
}

/// Create a predicate that checks every element satisfies `predicate`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let quantities = every(positive::<i32>());
/// assert!(quantities.check(&vec![1, 2]));
/// assert!(!quantities.check(&vec![1, 0]));
/// ```
pub fn every<P>(predicate: P) -> Every<P> {
    Every(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::gt;

    #[test]
    fn test_size_bounds_on_vec() {
        assert!(has_min_len(2).check(&vec![1, 2]));
        assert!(!has_min_len(2).check(&vec![1]));
        assert!(has_max_len(1).check(&Vec::<u8>::new()));
        assert!(!has_max_len(1).check(&vec![1, 2]));
    }

    #[test]
    fn test_size_bounds_on_slice() {
        let items: &[i32] = &[1, 2, 3];
        assert!(is_not_empty().check(items));
        assert!(!has_max_len(2).check(items));
    }

    #[test]
    fn test_every() {
        let p = every(gt(10));
        assert!(p.check(&vec![11, 12]));
        assert!(p.check(&Vec::<i32>::new()));
        assert!(!p.check(&vec![11, 3]));
    }
}
