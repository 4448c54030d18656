//! Character conversion helpers

/// First character of the text, or `default` when absent or empty
pub fn to_char_from_str(text: Option<&str>, default: char) -> char {
    text.and_then(|t| t.chars().next()).unwrap_or(default)
}

/// Value of an ASCII decimal digit
///
/// # Example
///
/// ```rust
/// use commons_util::convert::character::to_int_value;
///
/// assert_eq!(to_int_value('7'), Some(7));
/// assert_eq!(to_int_value('x'), None);
/// ```
pub fn to_int_value(c: char) -> Option<u32> {
    c.to_digit(10)
}

/// Value of an ASCII decimal digit, or `default`
pub fn to_int_value_or(c: char, default: u32) -> u32 {
    to_int_value(c).unwrap_or(default)
}

/// `true` for characters in the printable ASCII range (32..=126)
pub fn is_ascii_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Escape as `\uXXXX`, one escape per UTF-16 code unit
pub fn unicode_escaped(c: char) -> String {
    let mut units = [0u16; 2];
    c.encode_utf16(&mut units)
        .iter()
        .map(|unit| format!("\\u{:04x}", unit))
        .collect()
}
