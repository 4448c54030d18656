//! Boolean conversion helpers

use crate::error::{Result, UtilError};

const TRUE_WORDS: [&str; 5] = ["true", "on", "yes", "y", "t"];
const FALSE_WORDS: [&str; 5] = ["false", "off", "no", "n", "f"];

fn matches_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.eq_ignore_ascii_case(word))
}

/// Read a boolean word, `false` for anything else
///
/// `true`, `on`, `yes`, `y` and `t` (any ASCII case) are true.
///
/// # Example
///
/// ```rust
/// use commons_util::convert::boolean::to_boolean_str;
///
/// assert!(to_boolean_str(Some("YES")));
/// assert!(!to_boolean_str(Some("nope")));
/// assert!(!to_boolean_str(None));
/// ```
pub fn to_boolean_str(text: Option<&str>) -> bool {
    to_boolean_object_str(text).unwrap_or(false)
}

/// Read a boolean word, `None` when it is neither a true nor a false word
pub fn to_boolean_object_str(text: Option<&str>) -> Option<bool> {
    let text = text?;
    if matches_word(text, &TRUE_WORDS) {
        Some(true)
    } else if matches_word(text, &FALSE_WORDS) {
        Some(false)
    } else {
        None
    }
}

/// 1 for `true`, 0 for `false`
pub fn to_int(value: bool) -> i32 {
    i32::from(value)
}

/// Boxed form of [`to_int`]
pub fn to_int_object(value: Option<bool>) -> Option<i32> {
    value.map(to_int)
}

/// Logical negation that preserves absence
pub fn negate(value: Option<bool>) -> Option<bool> {
    value.map(|b| !b)
}

/// `"true"` or `"false"`
pub fn to_string_true_false(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// `"on"` or `"off"`
pub fn to_string_on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// `"yes"` or `"no"`
pub fn to_string_yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn require_values(values: &[bool]) -> Result<()> {
    if values.is_empty() {
        return Err(UtilError::InvalidArgument("array is empty".to_string()));
    }
    Ok(())
}

/// Logical AND over every value
///
/// # Errors
///
/// [`UtilError::InvalidArgument`] for an empty slice
pub fn and(values: &[bool]) -> Result<bool> {
    require_values(values)?;
    Ok(values.iter().all(|&b| b))
}

/// Logical OR over every value
///
/// # Errors
///
/// [`UtilError::InvalidArgument`] for an empty slice
pub fn or(values: &[bool]) -> Result<bool> {
    require_values(values)?;
    Ok(values.iter().any(|&b| b))
}

/// Exclusive OR over every value (odd number of `true`)
///
/// # Errors
///
/// [`UtilError::InvalidArgument`] for an empty slice
pub fn xor(values: &[bool]) -> Result<bool> {
    require_values(values)?;
    Ok(values.iter().fold(false, |acc, &b| acc ^ b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_table() {
        for word in ["true", "On", "YES", "y", "T"] {
            assert_eq!(to_boolean_object_str(Some(word)), Some(true), "{word}");
        }
        for word in ["false", "OFF", "No", "n", "f"] {
            assert_eq!(to_boolean_object_str(Some(word)), Some(false), "{word}");
        }
        assert_eq!(to_boolean_object_str(Some("1")), None);
        assert_eq!(to_boolean_object_str(Some("")), None);
        assert_eq!(to_boolean_object_str(None), None);
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(to_int(true), 1);
        assert_eq!(to_int(false), 0);
        assert_eq!(to_int_object(None), None);
        assert_eq!(to_int_object(Some(true)), Some(1));
        assert_eq!(negate(Some(true)), Some(false));
        assert_eq!(negate(None), None);
    }

    #[test]
    fn test_string_forms() {
        assert_eq!(to_string_true_false(true), "true");
        assert_eq!(to_string_on_off(false), "off");
        assert_eq!(to_string_yes_no(true), "yes");
    }

    #[test]
    fn test_logic_operations() {
        assert_eq!(and(&[true, true]), Ok(true));
        assert_eq!(and(&[true, false]), Ok(false));
        assert_eq!(or(&[false, true]), Ok(true));
        assert_eq!(xor(&[true, true, true]), Ok(true));
        assert_eq!(xor(&[true, true]), Ok(false));
        assert!(xor(&[]).unwrap_err().is_argument_error());
        assert!(and(&[]).is_err());
        assert!(or(&[]).is_err());
    }
}
