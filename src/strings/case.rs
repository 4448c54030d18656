//! Case conversion

use super::split::split_by_char_type_camel_case;

/// Upper-case every character
pub fn upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Lower-case every character
pub fn lower_case(text: &str) -> String {
    text.to_lowercase()
}

fn map_first(text: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut result = f(first);
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Upper-case the first character, leaving the rest unchanged
///
/// # Example
///
/// ```rust
/// use commons_util::strings::capitalize;
///
/// assert_eq!(capitalize("cat"), "Cat");
/// assert_eq!(capitalize("cAt"), "CAt");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    map_first(text, |c| c.to_uppercase().collect())
}

/// Lower-case the first character, leaving the rest unchanged
pub fn uncapitalize(text: &str) -> String {
    map_first(text, |c| c.to_lowercase().collect())
}

/// Swap upper and lower case of every character
pub fn swap_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            result.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// `true` when the text is non-empty and every character is upper case
pub fn is_all_upper_case(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_uppercase)
}

/// `true` when the text is non-empty and every character is lower case
pub fn is_all_lower_case(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_lowercase)
}

/// Convert a delimited string to camelCase
///
/// Every non-alphanumeric character is a delimiter. Letters are lowered
/// except the first letter after a delimiter, which is raised; the result
/// always starts lower case.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::to_camel_case;
///
/// assert_eq!(to_camel_case("hello-world_test"), "helloWorldTest");
/// assert_eq!(to_camel_case("  Some  WORDS "), "someWords");
/// ```
pub fn to_camel_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = false;

    for c in text.chars() {
        if !c.is_alphanumeric() {
            capitalize_next = !result.is_empty();
            continue;
        }
        if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Convert camelCase or delimited text to snake_case
///
/// Words are found by character type, so acronyms stay together.
///
/// # Example
///
/// ```rust
/// use commons_util::strings::to_snake_case;
///
/// assert_eq!(to_snake_case("HelloWorld"), "hello_world");
/// assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(text: &str) -> String {
    split_by_char_type_camel_case(text)
        .into_iter()
        .filter(|token| token.chars().all(char::is_alphanumeric))
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
