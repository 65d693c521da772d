//! String predicates
//!
//! Each predicate here works on both `str` and `String`, so it fits a field accessor
//! that yields either. Lengths are counted in characters, not bytes.

use super::combinators::Predicate;

macro_rules! impl_str_predicate {
    ($ty:ty, |$self_:ident, $value:ident| $body:expr) => {
        impl Predicate<str> for $ty {
            #[inline]
            fn check(&$self_, $value: &str) -> bool {
                $body
            }
        }

        impl Predicate<String> for $ty {
            #[inline]
            fn check(&$self_, $value: &String) -> bool {
                let $value: &str = $value;
                $body
            }
        }
    };
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl_str_predicate!(NotEmpty, |self, value| !value.is_empty());

/// Create a predicate that checks if a string is not empty.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(not_empty().check("NL"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks string length (in characters) is in an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl_str_predicate!(LenBetween, |self, value| {
    let len = value.chars().count();
    len >= self.min && len <= self.max
});

/// Create a predicate that checks if string length is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let p = len_between(2, 3);
/// assert!(!p.check("E"));
/// assert!(p.check("NL"));
/// assert!(p.check("EUR"));
/// assert!(!p.check("EURO"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks if string length is at least min.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Create a predicate that checks if string length is exactly len.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(len_eq(3).check("EUR"));
/// assert!(len_eq(3).check("€€€"));
/// assert!(!len_eq(3).check("EURO"));
/// ```
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}

/// Predicate that checks every character matches a char predicate.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(F);

impl<F> Predicate<str> for AllChars<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

impl<F> Predicate<String> for AllChars<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().all(&self.0)
    }
}

/// Create a predicate that checks every character satisfies `f`.
///
/// The empty string passes.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let upper = all_chars(|c| c.is_ascii_uppercase());
/// assert!(upper.check("EUR"));
/// assert!(!upper.check("Eur"));
/// ```
pub fn all_chars<F>(f: F) -> AllChars<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    AllChars(f)
}

/// Predicate that checks a string starts with a prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartsWith(String);

impl_str_predicate!(StartsWith, |self, value| value.starts_with(self.0.as_str()));

/// Create a predicate that checks a string starts with `prefix`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(starts_with("NL").check("NL91ABNA"));
/// assert!(!starts_with("NL").check("DE89"));
/// ```
pub fn starts_with(prefix: impl Into<String>) -> StartsWith {
    StartsWith(prefix.into())
}

/// Predicate that checks a string contains a substring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contains(String);

impl_str_predicate!(Contains, |self, value| value.contains(self.0.as_str()));

/// Create a predicate that checks a string contains `needle`.
pub fn contains(needle: impl Into<String>) -> Contains {
    Contains(needle.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_on_str_and_string() {
        assert!(not_empty().check("a"));
        assert!(!not_empty().check(""));
        assert!(Predicate::<String>::check(&not_empty(), &"a".to_string()));
    }

    #[test]
    fn test_len_counts_chars() {
        assert!(len_eq(2).check("éé"));
        assert!(!len_eq(4).check("éé"));
    }

    #[test]
    fn test_len_bounds() {
        assert!(len_min(2).check("NL"));
        assert!(!len_min(2).check("N"));
        assert!(len_max(2).check(""));
        assert!(!len_max(2).check("EUR"));
        assert!(Predicate::<String>::check(&len_between(1, 3), &"EUR".to_string()));
    }

    #[test]
    fn test_all_chars() {
        let digits = all_chars(|c| c.is_ascii_digit());
        assert!(digits.check("0042"));
        assert!(digits.check(""));
        assert!(!digits.check("4x"));
        assert!(Predicate::<String>::check(&digits, &"12".to_string()));
    }

    #[test]
    fn test_starts_with_and_contains() {
        assert!(starts_with("EU").check("EUR"));
        assert!(!starts_with("EU").check("USD"));
        assert!(contains("@").check("a@b"));
        assert!(!contains("@").check("ab"));
    }
}
