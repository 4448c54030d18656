//! Character-indexed searching

use super::filter::{AnyOf, CharFilter, Not};
use super::{chars_of, find_chars, rfind_chars};

fn same_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

fn matches_at(hay: &[char], needle: &[char], at: usize) -> bool {
    hay[at..at + needle.len()]
        .iter()
        .zip(needle)
        .all(|(&a, &b)| same_ignore_case(a, b))
}

/// Index of the first occurrence of `search`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::index_of;
///
/// assert_eq!(index_of("aabaabaa", "ab"), Some(1));
/// assert_eq!(index_of("aabaabaa", ""), Some(0));
/// assert_eq!(index_of("aabaabaa", "z"), None);
/// ```
pub fn index_of(text: &str, search: &str) -> Option<usize> {
    find_chars(&chars_of(text), &chars_of(search), 0)
}

/// Index of the first occurrence of `search` at or after `start`
///
/// A negative start searches from the beginning. A start past the end
/// clamps to the length, so an empty search still matches there.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::index_of_from;
///
/// assert_eq!(index_of_from("aabaabaa", "b", 3), Some(5));
/// assert_eq!(index_of_from("aabaabaa", "b", -1), Some(2));
/// assert_eq!(index_of_from("aabaabaa", "b", 9), None);
/// assert_eq!(index_of_from("abc", "", 9), Some(3));
/// ```
pub fn index_of_from(text: &str, search: &str, start: isize) -> Option<usize> {
    let chars = chars_of(text);
    let start = start.max(0).unsigned_abs().min(chars.len());
    find_chars(&chars, &chars_of(search), start)
}

/// Index of the first `c`
pub fn index_of_char(text: &str, c: char) -> Option<usize> {
    index_of_filter(text, &c)
}

/// Index of the last occurrence of `search`
pub fn last_index_of(text: &str, search: &str) -> Option<usize> {
    let chars = chars_of(text);
    rfind_chars(&chars, &chars_of(search), chars.len())
}

/// Index of the last occurrence of `search` starting at or before `start`
///
/// A negative start finds nothing.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::last_index_of_from;
///
/// assert_eq!(last_index_of_from("aabaabaa", "b", 4), Some(2));
/// assert_eq!(last_index_of_from("aabaabaa", "ab", 8), Some(4));
/// assert_eq!(last_index_of_from("aabaabaa", "b", -1), None);
/// ```
pub fn last_index_of_from(text: &str, search: &str, start: isize) -> Option<usize> {
    if start < 0 {
        return None;
    }
    rfind_chars(&chars_of(text), &chars_of(search), start.unsigned_abs())
}

/// Case-insensitive [`index_of`]
///
/// # Example
///
/// ```rust
/// use commons_util::strings::index_of_ignore_case;
///
/// assert_eq!(index_of_ignore_case("aabaabaa", "AB"), Some(1));
/// ```
pub fn index_of_ignore_case(text: &str, search: &str) -> Option<usize> {
    let hay = chars_of(text);
    let needle = chars_of(search);
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&i| matches_at(&hay, &needle, i))
}

/// Case-insensitive [`last_index_of`]
pub fn last_index_of_ignore_case(text: &str, search: &str) -> Option<usize> {
    let hay = chars_of(text);
    let needle = chars_of(search);
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len())
        .rev()
        .find(|&i| matches_at(&hay, &needle, i))
}

/// Index of the first character accepted by `filter`
pub fn index_of_filter<F: CharFilter + ?Sized>(text: &str, filter: &F) -> Option<usize> {
    text.chars().position(|c| filter.accept(c))
}

/// Index of the last character accepted by `filter`
pub fn last_index_of_filter<F: CharFilter + ?Sized>(text: &str, filter: &F) -> Option<usize> {
    let chars = chars_of(text);
    chars.iter().rposition(|&c| filter.accept(c))
}

/// Index of the first character that appears in `chars`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::index_of_any_char;
///
/// assert_eq!(index_of_any_char("zzabyycdxx", "by"), Some(3));
/// assert_eq!(index_of_any_char("aba", "z"), None);
/// ```
pub fn index_of_any_char(text: &str, chars: &str) -> Option<usize> {
    index_of_filter(text, &AnyOf::new(chars))
}

/// Index of the first character that does not appear in `chars`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::index_of_any_but;
///
/// assert_eq!(index_of_any_but("zzabyycdxx", "za"), Some(3));
/// assert_eq!(index_of_any_but("aba", "ab"), None);
/// ```
pub fn index_of_any_but(text: &str, chars: &str) -> Option<usize> {
    index_of_filter(text, &Not(AnyOf::new(chars)))
}

/// Earliest index at which any of `searches` occurs
///
/// # Example
///
/// ```rust
/// use commons_util::strings::index_of_any;
///
/// assert_eq!(index_of_any("zzabyycdxx", &["ab", "cd"]), Some(2));
/// assert_eq!(index_of_any("zzabyycdxx", &["cd", "ab"]), Some(2));
/// assert_eq!(index_of_any("zzabyycdxx", &["zab", "aby"]), Some(1));
/// assert_eq!(index_of_any("zzabyycdxx", &["mn", "op"]), None);
/// ```
pub fn index_of_any(text: &str, searches: &[&str]) -> Option<usize> {
    let hay = chars_of(text);
    searches
        .iter()
        .filter_map(|search| find_chars(&hay, &chars_of(search), 0))
        .min()
}

/// Latest index at which any of `searches` occurs
pub fn last_index_of_any(text: &str, searches: &[&str]) -> Option<usize> {
    let hay = chars_of(text);
    searches
        .iter()
        .filter_map(|search| rfind_chars(&hay, &chars_of(search), hay.len()))
        .max()
}

/// Index of the `ordinal`-th (1-based) occurrence of `search`
///
/// Occurrences may overlap. An ordinal of zero finds nothing.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::ordinal_index_of;
///
/// assert_eq!(ordinal_index_of("aabaabaa", "b", 2), Some(5));
/// assert_eq!(ordinal_index_of("aaaa", "aa", 2), Some(1));
/// assert_eq!(ordinal_index_of("aabaabaa", "b", 3), None);
/// ```
pub fn ordinal_index_of(text: &str, search: &str, ordinal: usize) -> Option<usize> {
    if ordinal == 0 {
        return None;
    }

    let hay = chars_of(text);
    let needle = chars_of(search);
    if needle.is_empty() {
        return Some(0);
    }

    let mut found = find_chars(&hay, &needle, 0)?;
    for _ in 1..ordinal {
        found = find_chars(&hay, &needle, found + 1)?;
    }
    Some(found)
}

/// `true` if `search` occurs in `text`
pub fn contains(text: &str, search: &str) -> bool {
    index_of(text, search).is_some()
}

/// Case-insensitive [`contains`]
pub fn contains_ignore_case(text: &str, search: &str) -> bool {
    index_of_ignore_case(text, search).is_some()
}

/// `true` if any character of `chars` occurs in `text`
pub fn contains_any(text: &str, chars: &str) -> bool {
    index_of_any_char(text, chars).is_some()
}

/// Number of non-overlapping occurrences of `search`; zero for an empty
/// search
///
/// # Example
///
/// ```rust
/// use commons_util::strings::count_matches;
///
/// assert_eq!(count_matches("abba", "a"), 2);
/// assert_eq!(count_matches("aaaa", "aa"), 2);
/// assert_eq!(count_matches("abba", ""), 0);
/// ```
pub fn count_matches(text: &str, search: &str) -> usize {
    let hay = chars_of(text);
    let needle = chars_of(search);
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = find_chars(&hay, &needle, pos) {
        count += 1;
        pos = found + needle.len();
    }
    count
}
