//! Replacement of substrings and characters

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{chars_of, find_chars};
use crate::error::{Result, UtilError};

/// Replace every occurrence of `search` with `replacement`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::replace;
///
/// assert_eq!(replace("aba", "a", "z"), "zbz");
/// assert_eq!(replace("aba", "", "z"), "aba");
/// ```
pub fn replace(text: &str, search: &str, replacement: &str) -> String {
    replace_max(text, search, replacement, None)
}

/// Replace the first occurrence of `search` with `replacement`
pub fn replace_once(text: &str, search: &str, replacement: &str) -> String {
    replace_max(text, search, replacement, Some(1))
}

/// Replace up to `max` occurrences, left to right; `None` replaces all
///
/// # Example
///
/// ```rust
/// use commons_util::strings::replace_max;
///
/// assert_eq!(replace_max("abaa", "a", "z", Some(2)), "zbza");
/// assert_eq!(replace_max("abaa", "a", "z", Some(0)), "abaa");
/// ```
pub fn replace_max(text: &str, search: &str, replacement: &str, max: Option<usize>) -> String {
    if search.is_empty() {
        return text.to_string();
    }
    match max {
        None => text.replace(search, replacement),
        Some(n) => text.replacen(search, replacement, n),
    }
}

/// Replace each character of `search_chars` with the character at the
/// same position in `replace_chars`, deleting it when there is none
///
/// # Example
///
/// ```rust
/// use commons_util::strings::replace_chars;
///
/// assert_eq!(replace_chars("hello", "ho", "jy"), "jelly");
/// assert_eq!(replace_chars("abcba", "bc", "y"), "ayya");
/// ```
pub fn replace_chars(text: &str, search_chars: &str, replace_chars: &str) -> String {
    let search = chars_of(search_chars);
    let replace = chars_of(replace_chars);

    text.chars()
        .filter_map(|c| match search.iter().position(|&s| s == c) {
            Some(i) => replace.get(i).copied(),
            None => Some(c),
        })
        .collect()
}

/// One left-to-right pass; `None` when nothing matched
fn replace_pass(text: &str, searches: &[&str], replacements: &[&str]) -> Option<String> {
    let hay = chars_of(text);
    let needles: Vec<Vec<char>> = searches.iter().map(|s| chars_of(s)).collect();

    // earliest match wins, ties go to the earlier search
    let next_match = |from: usize| {
        needles
            .iter()
            .enumerate()
            .filter(|(_, needle)| !needle.is_empty())
            .filter_map(|(i, needle)| find_chars(&hay, needle, from).map(|pos| (pos, i)))
            .min()
    };

    let mut found = next_match(0)?;
    let mut result = String::with_capacity(text.len());
    let mut start = 0;

    loop {
        let (pos, i) = found;
        result.extend(&hay[start..pos]);
        result.push_str(replacements[i]);
        start = pos + needles[i].len();

        match next_match(start) {
            Some(next) => found = next,
            None => break,
        }
    }
    result.extend(&hay[start..]);

    Some(result)
}

fn check_lengths(searches: &[&str], replacements: &[&str]) -> Result<()> {
    if searches.len() != replacements.len() {
        debug!(
            searches = searches.len(),
            replacements = replacements.len(),
            "replace_each: list lengths differ"
        );
        return Err(UtilError::MismatchedReplaceLengths {
            searches: searches.len(),
            replacements: replacements.len(),
        });
    }
    Ok(())
}

/// Replace every occurrence of each search string with the replacement at
/// the same position, in a single pass
///
/// # Example
///
/// ```rust
/// use commons_util::strings::replace_each;
///
/// let out = replace_each("abcde", &["ab", "d"], &["w", "t"]).unwrap();
/// assert_eq!(out, "wcte");
///
/// // replacements are not rescanned
/// let out = replace_each("abcde", &["ab", "d"], &["d", "t"]).unwrap();
/// assert_eq!(out, "dcte");
///
/// assert!(replace_each("abc", &["a"], &[]).is_err());
/// ```
pub fn replace_each(text: &str, searches: &[&str], replacements: &[&str]) -> Result<String> {
    check_lengths(searches, replacements)?;
    Ok(replace_pass(text, searches, replacements).unwrap_or_else(|| text.to_string()))
}

/// Like [`replace_each`], but repeats until the text stops changing
///
/// Fails with [`UtilError::ReplaceCycle`] when a pass reproduces text seen
/// before. Once one pass per search string (plus one) has run, a pass that
/// grows the text while some replacement still contains a search string is
/// treated as unbounded and fails the same way.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::replace_each_repeatedly;
///
/// let out = replace_each_repeatedly("abcde", &["ab", "d"], &["d", "t"]).unwrap();
/// assert_eq!(out, "tcte");
///
/// // shrinking rewrites run to completion
/// let out = replace_each_repeatedly("aaaaaaaa", &["aa"], &["a"]).unwrap();
/// assert_eq!(out, "a");
///
/// assert!(replace_each_repeatedly("abcde", &["ab", "d"], &["d", "ab"]).is_err());
/// ```
pub fn replace_each_repeatedly(text: &str, searches: &[&str], replacements: &[&str]) -> Result<String> {
    check_lengths(searches, replacements)?;

    let feeds_itself = replacements
        .iter()
        .any(|r| searches.iter().any(|s| !s.is_empty() && r.contains(s)));

    let mut seen = HashSet::new();
    let mut current = text.to_string();
    let mut passes_left = searches.len() + 1;

    while let Some(next) = replace_pass(&current, searches, replacements) {
        let grows = next.len() > current.len();
        seen.insert(current);

        if seen.contains(&next) || (passes_left == 0 && grows && feeds_itself) {
            warn!(text, "replace_each_repeatedly: output keeps matching, aborting");
            return Err(UtilError::ReplaceCycle(text.to_string()));
        }

        current = next;
        passes_left = passes_left.saturating_sub(1);
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_variants() {
        assert_eq!(replace("", "a", "z"), "");
        assert_eq!(replace("aba", "a", ""), "b");
        assert_eq!(replace_once("aba", "a", "z"), "zba");
        assert_eq!(replace_max("abaa", "a", "z", None), "zbzz");
        assert_eq!(replace("äöä", "ä", "a"), "aöa");
    }

    #[test]
    fn test_replace_chars() {
        assert_eq!(replace_chars("abc", "", "y"), "abc");
        assert_eq!(replace_chars("abcba", "bc", "yzx"), "ayzya");
        assert_eq!(replace_chars("abc", "b", ""), "ac");
    }

    #[test]
    fn test_replace_each() {
        assert_eq!(replace_each("", &["a"], &["b"]).unwrap(), "");
        assert_eq!(replace_each("aba", &[], &[]).unwrap(), "aba");
        assert_eq!(replace_each("aba", &["a"], &[""]).unwrap(), "b");
        assert_eq!(replace_each("abcde", &["", "b"], &["x", "y"]).unwrap(), "aycde");
        // ties go to the first search string
        assert_eq!(replace_each("abc", &["a", "ab"], &["1", "2"]).unwrap(), "1bc");
        assert_eq!(replace_each("abc", &["ab", "a"], &["2", "1"]).unwrap(), "2c");
    }

    #[test]
    fn test_replace_each_length_mismatch() {
        let err = replace_each("abc", &["a", "b"], &["x"]).unwrap_err();
        assert_eq!(
            err,
            UtilError::MismatchedReplaceLengths { searches: 2, replacements: 1 }
        );
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_replace_each_repeatedly() {
        assert_eq!(replace_each_repeatedly("abc", &["x"], &["y"]).unwrap(), "abc");
        assert_eq!(replace_each_repeatedly("aaa", &["aa"], &["a"]).unwrap(), "a");
        assert_eq!(replace_each_repeatedly("aaaa", &["aa"], &["a"]).unwrap(), "a");

        let err = replace_each_repeatedly("ab", &["a", "b"], &["b", "a"]).unwrap_err();
        assert!(matches!(err, UtilError::ReplaceCycle(_)));
    }

    #[test]
    fn test_replace_each_repeatedly_long_convergence() {
        // more shrinking passes than search strings
        assert_eq!(replace_each_repeatedly("aaaaaaaa", &["aa"], &["a"]).unwrap(), "a");
        assert_eq!(replace_each_repeatedly(&"a".repeat(64), &["aa"], &["a"]).unwrap(), "a");
        // order-changing rewrite that settles without shrinking
        assert_eq!(
            replace_each_repeatedly("cba", &["ba", "ca", "cb"], &["ab", "ac", "bc"]).unwrap(),
            "abc"
        );
    }

    #[test]
    fn test_replace_each_repeatedly_divergence() {
        let err = replace_each_repeatedly("a", &["a"], &["aa"]).unwrap_err();
        assert_eq!(err, UtilError::ReplaceCycle("a".to_string()));

        let err = replace_each_repeatedly("xay", &["a", "b"], &["b", "a"]).unwrap_err();
        assert_eq!(err, UtilError::ReplaceCycle("xay".to_string()));
    }
}
