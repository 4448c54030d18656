//! String utility functions
//!
//! Searching, splitting, padding, case conversion and replacement. Every
//! index in this module counts `char`s (Unicode scalar values), never bytes,
//! and search results are `Option<usize>`.

pub mod basic;
pub mod case;
pub mod filter;
pub mod pad;
pub mod replace;
pub mod search;
pub mod split;
pub mod substring;

pub use basic::{
    default_if_empty,
    default_string,
    is_blank,
    is_empty,
    is_not_empty,
    is_numeric,
    is_parsable,
    random_string,
    strip_chars,
    trim_to_none,
};
pub use case::{
    capitalize,
    is_all_lower_case,
    is_all_upper_case,
    lower_case,
    swap_case,
    to_camel_case,
    to_snake_case,
    uncapitalize,
    upper_case,
};
pub use filter::{AnyOf, CharFilter, CharType, Digit, Letter, Not, Whitespace};
pub use pad::{center, center_str, left_pad, left_pad_str, repeat, repeat_with_separator, right_pad, right_pad_str};
pub use replace::{replace, replace_chars, replace_each, replace_each_repeatedly, replace_max, replace_once};
pub use search::{
    contains,
    contains_any,
    contains_ignore_case,
    count_matches,
    index_of,
    index_of_any,
    index_of_any_but,
    index_of_any_char,
    index_of_char,
    index_of_filter,
    index_of_from,
    index_of_ignore_case,
    last_index_of,
    last_index_of_any,
    last_index_of_filter,
    last_index_of_from,
    last_index_of_ignore_case,
    ordinal_index_of,
};
pub use split::{
    split_by_char,
    split_by_char_type,
    split_by_char_type_camel_case,
    split_by_filter,
    split_by_str,
    split_preserve_all_tokens,
    split_with,
    SplitOptions,
};
pub use substring::{
    left,
    mid,
    right,
    substring,
    substring_after,
    substring_after_last,
    substring_before,
    substring_before_last,
    substring_between,
    substring_range,
    substrings_between,
};

/// Collect the characters of `s` for index-based work
pub(crate) fn chars_of(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// First occurrence of `needle` in `hay` at or after `from`
///
/// An empty needle matches at `from` when `from <= hay.len()`.
pub(crate) fn find_chars(hay: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from > hay.len() || needle.len() > hay.len() - from {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    (from..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()] == *needle)
}

/// Last occurrence of `needle` in `hay` starting at or before `from`
pub(crate) fn rfind_chars(hay: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    let last_start = (hay.len() - needle.len()).min(from);
    (0..=last_start)
        .rev()
        .find(|&i| hay[i..i + needle.len()] == *needle)
}
