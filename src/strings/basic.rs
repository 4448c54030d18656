//! Emptiness checks, defaults and simple predicates

use rand::Rng;

use super::filter::{AnyOf, CharFilter, Whitespace};

/// `true` when the text is absent or has no characters
pub fn is_empty(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

/// `true` when the text is present and has characters
pub fn is_not_empty(text: Option<&str>) -> bool {
    !is_empty(text)
}

/// `true` when the text is absent, empty or only whitespace
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.chars().all(|c| Whitespace.accept(c)))
}

/// The text, or `""` when absent
pub fn default_string(text: Option<&str>) -> &str {
    text.unwrap_or("")
}

/// The text, or `default` when absent or empty
pub fn default_if_empty<'a>(text: Option<&'a str>, default: &'a str) -> &'a str {
    match text {
        Some(t) if !t.is_empty() => t,
        _ => default,
    }
}

/// Trimmed text, `None` when nothing is left
pub fn trim_to_none(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// Strip any of `strip` from both ends; whitespace when `strip` is `None`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::strip_chars;
///
/// assert_eq!(strip_chars("xxabcyx", Some("xy")), "abc");
/// assert_eq!(strip_chars("  abc ", None), "abc");
/// ```
pub fn strip_chars<'a>(text: &'a str, strip: Option<&str>) -> &'a str {
    match strip {
        None => text.trim(),
        Some(set) => {
            let filter = AnyOf::new(set);
            text.trim_matches(|c: char| filter.accept(c))
        }
    }
}

/// `true` when the text is non-empty and every character is a digit
///
/// # Example
///
/// ```rust
/// use commons_util::strings::is_numeric;
///
/// assert!(is_numeric("123"));
/// assert!(!is_numeric("12.3"));
/// assert!(!is_numeric(""));
/// ```
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

/// `true` when the trimmed text parses as a finite floating-point number
pub fn is_parsable(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .map_or(false, f64::is_finite)
}

/// Random string of `length` characters drawn from `alphabet`
///
/// The alphabet defaults to `"abcdef0123456789"`; an empty alphabet yields
/// an empty string.
pub fn random_string(length: usize, alphabet: Option<&str>) -> String {
    let charset: Vec<char> = alphabet.unwrap_or("abcdef0123456789").chars().collect();
    if charset.is_empty() {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(is_empty(None));
        assert!(is_empty(Some("")));
        assert!(!is_empty(Some(" ")));
        assert!(is_not_empty(Some("a")));
        assert!(is_blank(Some(" \t\n")));
        assert!(is_blank(None));
        assert!(!is_blank(Some(" a ")));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_string(None), "");
        assert_eq!(default_string(Some("x")), "x");
        assert_eq!(default_if_empty(Some(""), "d"), "d");
        assert_eq!(default_if_empty(None, "d"), "d");
        assert_eq!(default_if_empty(Some("v"), "d"), "v");
        assert_eq!(trim_to_none(Some("   ")), None);
        assert_eq!(trim_to_none(Some(" a ")), Some("a"));
        assert_eq!(trim_to_none(None), None);
    }

    #[test]
    fn test_strip_chars() {
        assert_eq!(strip_chars("abcxx", Some("x")), "abc");
        assert_eq!(strip_chars("abc", Some("")), "abc");
        assert_eq!(strip_chars("\tabc\n", None), "abc");
    }

    #[test]
    fn test_numeric_predicates() {
        assert!(is_numeric("0123"));
        assert!(!is_numeric("-1"));
        assert!(is_parsable("-123.45"));
        assert!(is_parsable("  7 "));
        assert!(!is_parsable("NaN"));
        assert!(!is_parsable("12.34.56"));
        assert!(!is_parsable(""));
    }

    #[test]
    fn test_random_string() {
        let s = random_string(32, None);
        assert_eq!(s.chars().count(), 32);
        assert!(s.chars().all(|c| "abcdef0123456789".contains(c)));

        let s = random_string(8, Some("ÄÖÜ"));
        assert_eq!(s.chars().count(), 8);
        assert!(s.chars().all(|c| "ÄÖÜ".contains(c)));

        assert_eq!(random_string(5, Some("")), "");
        assert_eq!(random_string(0, None), "");
    }
}
