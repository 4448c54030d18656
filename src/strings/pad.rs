//! Padding, centering and repetition
//!
//! Sizes count characters. A size not larger than the input returns the
//! input unchanged, and an empty pad string pads with spaces.

/// Build `count` characters by cycling through `pad`
fn pad_run(pad: &str, count: usize) -> String {
    let pad = if pad.is_empty() { " " } else { pad };
    pad.chars().cycle().take(count).collect()
}

fn missing(text: &str, size: usize) -> usize {
    size.saturating_sub(text.chars().count())
}

/// Left-pad `text` to `size` characters with `pad`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::left_pad;
///
/// assert_eq!(left_pad("bat", 5, 'z'), "zzbat");
/// assert_eq!(left_pad("bat", 1, 'z'), "bat");
/// ```
pub fn left_pad(text: &str, size: usize, pad: char) -> String {
    let count = missing(text, size);
    let mut result: String = std::iter::repeat(pad).take(count).collect();
    result.push_str(text);
    result
}

/// Left-pad `text` to `size` characters by cycling through `pad`
///
/// # Example
///
/// ```rust
/// use commons_util::strings::left_pad_str;
///
/// assert_eq!(left_pad_str("bat", 8, "yz"), "yzyzybat");
/// assert_eq!(left_pad_str("bat", 5, ""), "  bat");
/// ```
pub fn left_pad_str(text: &str, size: usize, pad: &str) -> String {
    let mut result = pad_run(pad, missing(text, size));
    result.push_str(text);
    result
}

/// Right-pad `text` to `size` characters with `pad`
pub fn right_pad(text: &str, size: usize, pad: char) -> String {
    let count = missing(text, size);
    let mut result = String::from(text);
    result.extend(std::iter::repeat(pad).take(count));
    result
}

/// Right-pad `text` to `size` characters by cycling through `pad`
pub fn right_pad_str(text: &str, size: usize, pad: &str) -> String {
    let mut result = String::from(text);
    result.push_str(&pad_run(pad, missing(text, size)));
    result
}

/// Center `text` in `size` characters; odd padding puts the extra
/// character on the right
///
/// # Example
///
/// ```rust
/// use commons_util::strings::center;
///
/// assert_eq!(center("a", 4, 'y'), "yayy");
/// assert_eq!(center("ab", 4, ' '), " ab ");
/// ```
pub fn center(text: &str, size: usize, pad: char) -> String {
    let len = text.chars().count();
    if size <= len {
        return text.to_string();
    }
    let left = left_pad(text, len + (size - len) / 2, pad);
    right_pad(&left, size, pad)
}

/// Center `text` in `size` characters, cycling through `pad`
pub fn center_str(text: &str, size: usize, pad: &str) -> String {
    let len = text.chars().count();
    if size <= len {
        return text.to_string();
    }
    let left = left_pad_str(text, len + (size - len) / 2, pad);
    right_pad_str(&left, size, pad)
}

/// `text` repeated `count` times
pub fn repeat(text: &str, count: usize) -> String {
    text.repeat(count)
}

/// `text` repeated `count` times with `separator` between the copies
///
/// # Example
///
/// ```rust
/// use commons_util::strings::repeat_with_separator;
///
/// assert_eq!(repeat_with_separator("?", ", ", 3), "?, ?, ?");
/// assert_eq!(repeat_with_separator("?", ", ", 0), "");
/// ```
pub fn repeat_with_separator(text: &str, separator: &str, count: usize) -> String {
    vec![text; count].join(separator)
}
