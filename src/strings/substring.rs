//! Character-indexed substrings
//!
//! Negative positions count back from the end of the text; out-of-range
//! positions are clamped rather than reported.

use super::{chars_of, find_chars, rfind_chars};

/// Resolve a possibly negative position against `len`, clamped to `0..=len`
fn resolve(position: isize, len: usize) -> usize {
    if position < 0 {
        len.saturating_sub(position.unsigned_abs())
    } else {
        position.unsigned_abs().min(len)
    }
}

/// Substring from `start` to the end
///
/// # Example
///
/// ```rust
/// use commons_util::strings::substring;
///
/// assert_eq!(substring("abc", 2), "c");
/// assert_eq!(substring("abc", -2), "bc");
/// assert_eq!(substring("abc", 4), "");
/// ```
pub fn substring(text: &str, start: isize) -> String {
    let chars = chars_of(text);
    let start = resolve(start, chars.len());
    chars[start..].iter().collect()
}

/// Substring between `start` (inclusive) and `end` (exclusive)
///
/// # Example
///
/// ```rust
/// use commons_util::strings::substring_range;
///
/// assert_eq!(substring_range("abc", 0, 2), "ab");
/// assert_eq!(substring_range("abc", -2, -1), "b");
/// assert_eq!(substring_range("abc", 2, 0), "");
/// ```
pub fn substring_range(text: &str, start: isize, end: isize) -> String {
    let chars = chars_of(text);
    let start = resolve(start, chars.len());
    let end = resolve(end, chars.len());
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect()
}

/// The leftmost `len` characters
pub fn left(text: &str, len: usize) -> String {
    text.chars().take(len).collect()
}

/// The rightmost `len` characters
pub fn right(text: &str, len: usize) -> String {
    let chars = chars_of(text);
    let start = chars.len().saturating_sub(len);
    chars[start..].iter().collect()
}

/// Up to `len` characters starting at `position`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::mid;
///
/// assert_eq!(mid("abc", 0, 2), "ab");
/// assert_eq!(mid("abc", 2, 4), "c");
/// assert_eq!(mid("abc", -2, 2), "ab");
/// ```
pub fn mid(text: &str, position: isize, len: usize) -> String {
    let position = position.max(0).unsigned_abs();
    text.chars().skip(position).take(len).collect()
}

/// Text before the first `separator`; the whole text when it is missing
///
/// # Example
///
/// ```rust
/// use commons_util::strings::substring_before;
///
/// assert_eq!(substring_before("abcba", "b"), "a");
/// assert_eq!(substring_before("abc", "d"), "abc");
/// assert_eq!(substring_before("abc", ""), "");
/// ```
pub fn substring_before(text: &str, separator: &str) -> String {
    let chars = chars_of(text);
    match find_chars(&chars, &chars_of(separator), 0) {
        Some(pos) => chars[..pos].iter().collect(),
        None => text.to_string(),
    }
}

/// Text after the first `separator`; empty when it is missing
///
/// # Example
///
/// ```rust
/// use commons_util::strings::substring_after;
///
/// assert_eq!(substring_after("abcba", "b"), "cba");
/// assert_eq!(substring_after("abc", "d"), "");
/// assert_eq!(substring_after("abc", ""), "abc");
/// ```
pub fn substring_after(text: &str, separator: &str) -> String {
    let chars = chars_of(text);
    let sep = chars_of(separator);
    match find_chars(&chars, &sep, 0) {
        Some(pos) => chars[pos + sep.len()..].iter().collect(),
        None => String::new(),
    }
}

/// Text before the last `separator`; the whole text when it is missing or
/// empty
pub fn substring_before_last(text: &str, separator: &str) -> String {
    if separator.is_empty() {
        return text.to_string();
    }
    let chars = chars_of(text);
    match rfind_chars(&chars, &chars_of(separator), chars.len()) {
        Some(pos) => chars[..pos].iter().collect(),
        None => text.to_string(),
    }
}

/// Text after the last `separator`; empty when it is missing or empty
///
/// # Example
///
/// ```rust
/// use commons_util::strings::substring_after_last;
///
/// assert_eq!(substring_after_last("abcba", "b"), "a");
/// assert_eq!(substring_after_last("a", "a"), "");
/// ```
pub fn substring_after_last(text: &str, separator: &str) -> String {
    if separator.is_empty() {
        return String::new();
    }
    let chars = chars_of(text);
    let sep = chars_of(separator);
    match rfind_chars(&chars, &sep, chars.len()) {
        Some(pos) => chars[pos + sep.len()..].iter().collect(),
        None => String::new(),
    }
}

/// Text between the first `open` and the next `close` after it
///
/// # Example
///
/// ```rust
/// use commons_util::strings::substring_between;
///
/// assert_eq!(substring_between("wx[b]yz", "[", "]"), Some("b".to_string()));
/// assert_eq!(substring_between("yabczyabcz", "y", "z"), Some("abc".to_string()));
/// assert_eq!(substring_between("abc", "[", "]"), None);
/// ```
pub fn substring_between(text: &str, open: &str, close: &str) -> Option<String> {
    let chars = chars_of(text);
    let open = chars_of(open);
    let close = chars_of(close);
    let start = find_chars(&chars, &open, 0)? + open.len();
    let end = find_chars(&chars, &close, start)?;
    Some(chars[start..end].iter().collect())
}

/// Every substring delimited by `open` and `close`, in order
///
/// Empty delimiters find nothing.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::substrings_between;
///
/// assert_eq!(substrings_between("[a][b][c]", "[", "]"), vec!["a", "b", "c"]);
/// assert!(substrings_between("abc", "[", "]").is_empty());
/// ```
pub fn substrings_between(text: &str, open: &str, close: &str) -> Vec<String> {
    if open.is_empty() || close.is_empty() {
        return Vec::new();
    }

    let chars = chars_of(text);
    let open = chars_of(open);
    let close = chars_of(close);
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(start) = find_chars(&chars, &open, pos) {
        let start = start + open.len();
        let Some(end) = find_chars(&chars, &close, start) else {
            break;
        };
        found.push(chars[start..end].iter().collect());
        pos = end + close.len();
    }

    found
}
