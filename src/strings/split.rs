//! Splitting by separator character, separator string, filter or
//! character type

use super::filter::{CharFilter, CharType, Whitespace};
use super::{chars_of, find_chars};

/// Options for [`split_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Maximum number of tokens; the last token holds the unsplit rest
    pub max: Option<usize>,
    /// Keep empty tokens produced by adjacent separators
    pub preserve_all_tokens: bool,
}

impl SplitOptions {
    /// Create new SplitOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum token count (`0` means unlimited)
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = (max > 0).then_some(max);
        self
    }

    /// Set whether empty tokens are kept
    pub fn with_preserve_all_tokens(mut self, preserve: bool) -> Self {
        self.preserve_all_tokens = preserve;
        self
    }
}

/// Split at every character accepted by `separator`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::{split_with, SplitOptions};
///
/// let opts = SplitOptions::new().with_max(2);
/// assert_eq!(split_with("a:b:c", &':', opts), vec!["a", "b:c"]);
///
/// let opts = SplitOptions::new().with_preserve_all_tokens(true);
/// assert_eq!(split_with("a::b", &':', opts), vec!["a", "", "b"]);
/// ```
pub fn split_with<F: CharFilter + ?Sized>(text: &str, separator: &F, options: SplitOptions) -> Vec<String> {
    let chars = chars_of(text);
    let len = chars.len();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let mut in_token = false;
    let mut last_was_separator = false;

    while i < len {
        if separator.accept(chars[i]) {
            if in_token || options.preserve_all_tokens {
                last_was_separator = true;
                if options.max == Some(tokens.len() + 1) {
                    i = len;
                    last_was_separator = false;
                }
                tokens.push(chars[start..i].iter().collect());
                in_token = false;
            }
            i += 1;
            start = i;
            continue;
        }
        last_was_separator = false;
        in_token = true;
        i += 1;
    }

    if in_token || (options.preserve_all_tokens && last_was_separator) {
        tokens.push(chars[start..i].iter().collect());
    }

    tokens
}

/// Split at `separator`, dropping empty tokens
///
/// # Example
///
/// ```rust
/// use commons_util::strings::split_by_char;
///
/// assert_eq!(split_by_char("a..b.c.", '.'), vec!["a", "b", "c"]);
/// assert!(split_by_char("", '.').is_empty());
/// ```
pub fn split_by_char(text: &str, separator: char) -> Vec<String> {
    split_with(text, &separator, SplitOptions::default())
}

/// Split at `separator`, keeping empty tokens between adjacent separators
///
/// # Example
///
/// ```rust
/// use commons_util::strings::split_preserve_all_tokens;
///
/// assert_eq!(split_preserve_all_tokens("a..b.", '.'), vec!["a", "", "b", ""]);
/// ```
pub fn split_preserve_all_tokens(text: &str, separator: char) -> Vec<String> {
    split_with(text, &separator, SplitOptions::new().with_preserve_all_tokens(true))
}

/// Split at every character accepted by `filter`, dropping empty tokens
pub fn split_by_filter<F: CharFilter + ?Sized>(text: &str, filter: &F) -> Vec<String> {
    split_with(text, filter, SplitOptions::default())
}

/// Split at every whole occurrence of `separator`, dropping empty tokens
///
/// An empty separator splits on whitespace.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::split_by_str;
///
/// assert_eq!(split_by_str("ab::cd::::ef", "::"), vec!["ab", "cd", "ef"]);
/// assert_eq!(split_by_str("ab cd", ""), vec!["ab", "cd"]);
/// ```
pub fn split_by_str(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return split_by_filter(text, &Whitespace);
    }

    let chars = chars_of(text);
    let sep = chars_of(separator);
    let mut tokens = Vec::new();
    let mut start = 0;

    while let Some(found) = find_chars(&chars, &sep, start) {
        if found > start {
            tokens.push(chars[start..found].iter().collect());
        }
        start = found + sep.len();
    }
    if start < chars.len() {
        tokens.push(chars[start..].iter().collect());
    }

    tokens
}

fn split_by_type(text: &str, camel_case: bool) -> Vec<String> {
    let chars = chars_of(text);
    let Some(&first) = chars.first() else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    let mut token_start = 0;
    let mut current = CharType::of(first);

    for (pos, &c) in chars.iter().enumerate().skip(1) {
        let kind = CharType::of(c);
        if kind == current {
            continue;
        }
        if camel_case && kind == CharType::Lowercase && current == CharType::Uppercase {
            // the last upper-case letter starts the new word
            let new_start = pos - 1;
            if new_start != token_start {
                tokens.push(chars[token_start..new_start].iter().collect());
                token_start = new_start;
            }
        } else {
            tokens.push(chars[token_start..pos].iter().collect());
            token_start = pos;
        }
        current = kind;
    }
    tokens.push(chars[token_start..].iter().collect());

    tokens
}

/// Split wherever the [`CharType`] changes
///
/// # Example
///
/// ```rust
/// use commons_util::strings::split_by_char_type;
///
/// assert_eq!(split_by_char_type("ab   de fg"), vec!["ab", "   ", "de", " ", "fg"]);
/// assert_eq!(split_by_char_type("number5"), vec!["number", "5"]);
/// assert_eq!(split_by_char_type("fooBar"), vec!["foo", "B", "ar"]);
/// ```
pub fn split_by_char_type(text: &str) -> Vec<String> {
    split_by_type(text, false)
}

/// Like [`split_by_char_type`], but an upper-case letter followed by lower
/// case letters stays with them
///
/// # Example
///
/// ```rust
/// use commons_util::strings::split_by_char_type_camel_case;
///
/// assert_eq!(split_by_char_type_camel_case("fooBar"), vec!["foo", "Bar"]);
/// assert_eq!(split_by_char_type_camel_case("ASFRules"), vec!["ASF", "Rules"]);
/// ```
pub fn split_by_char_type_camel_case(text: &str) -> Vec<String> {
    split_by_type(text, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::filter::AnyOf;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_by_char() {
        assert_eq!(split_by_char("a.b.c", '.'), vec!["a", "b", "c"]);
        assert_eq!(split_by_char("a b c", ' '), vec!["a", "b", "c"]);
        assert_eq!(split_by_char(".a.", '.'), vec!["a"]);
        assert!(split_by_char("...", '.').is_empty());
    }

    #[test]
    fn test_preserve_all_tokens() {
        assert_eq!(split_preserve_all_tokens(".a", '.'), vec!["", "a"]);
        assert_eq!(split_preserve_all_tokens("a.", '.'), vec!["a", ""]);
        assert_eq!(split_preserve_all_tokens("a b  c", ' '), vec!["a", "b", "", "c"]);
        assert!(split_preserve_all_tokens("", '.').is_empty());
    }

    #[test]
    fn test_split_with_max() {
        let opts = SplitOptions::new().with_max(2);
        assert_eq!(split_with("ab cd ef", &' ', opts), vec!["ab", "cd ef"]);
        assert_eq!(split_with("  ab   cd ef", &' ', opts), vec!["ab", "cd ef"]);

        let opts = SplitOptions::new().with_max(0);
        assert_eq!(opts.max, None);
        assert_eq!(split_with("a b c", &' ', opts), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_by_filter() {
        assert_eq!(split_by_filter("a1b22c", &|c: char| c.is_ascii_digit()), vec!["a", "b", "c"]);
        assert_eq!(split_by_filter("a,b;c", &AnyOf::new(",;")), vec!["a", "b", "c"]);
        assert_eq!(split_by_filter(" a \t b ", &Whitespace), vec!["a", "b"]);
    }

    #[test]
    fn test_split_by_str() {
        assert_eq!(split_by_str("ab-!-cd", "-!-"), vec!["ab", "cd"]);
        assert_eq!(split_by_str("-!-ab", "-!-"), vec!["ab"]);
        assert_eq!(split_by_str("abc", "xyz"), vec!["abc"]);
        assert!(split_by_str("", ":").is_empty());
    }

    #[test]
    fn test_split_by_char_type() {
        assert_eq!(split_by_char_type("foo200Bar"), vec!["foo", "200", "B", "ar"]);
        assert_eq!(split_by_char_type("ASFRules"), vec!["ASFR", "ules"]);
        assert_eq!(split_by_char_type("2.0"), vec!["2", ".", "0"]);
        assert_eq!(split_by_char_type("a()b"), vec!["a", "(", ")", "b"]);
        assert_eq!(split_by_char_type("a-.b"), vec!["a", "-", ".", "b"]);
        assert_eq!(split_by_char_type("x+=$5"), vec!["x", "+=", "$", "5"]);
        assert!(split_by_char_type("").is_empty());
    }

    #[test]
    fn test_split_by_char_type_camel_case() {
        assert_eq!(split_by_char_type_camel_case("foo200Bar"), vec!["foo", "200", "Bar"]);
        assert_eq!(split_by_char_type_camel_case("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(split_by_char_type_camel_case("Hello"), vec!["Hello"]);
        assert_eq!(split_by_char_type_camel_case("ab   de"), vec!["ab", "   ", "de"]);
    }
}
