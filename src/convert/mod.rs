//! Primitive-type conversion utilities
//!
//! One generic surface over `bool`, `char`, `i8`, `i16`, `i32`, `i64`, `f32`
//! and `f64`. Every lossy or fallible conversion has a sentinel form that
//! falls back to the type's [`Primitive::DEFAULT`] (or a caller-supplied
//! default) instead of failing.

use std::fmt;

use num_bigint::BigInt;
use num_traits::AsPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

pub mod boolean;
pub mod character;
pub mod codec;
pub mod date;
pub mod numbers;
mod primitives;

pub use codec::{
    from_byte_array,
    from_byte_array_or,
    to_byte_array,
    to_byte_array_named,
    ByteCodec,
    ByteOrder,
};
pub use date::{from_date, to_date, to_date_or};
pub use numbers::{from_big_integer, from_decimal, to_big_integer, to_decimal};

/// A scalar with a default value and conversions to every other scalar form
pub trait Primitive: Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// Value used when a conversion has nothing to convert
    const DEFAULT: Self;

    /// Language-neutral name of the type (`"int"`, `"double"`, ...)
    const TYPE_NAME: &'static str;

    /// `true` for anything other than zero / `'\0'` / `false`
    fn to_boolean(self) -> bool;

    /// Parse text, `None` when it does not denote a value of this type
    fn parse_str(text: &str) -> Option<Self>;

    /// The value as a Unicode scalar, `'\0'` when it is not one
    fn to_char(self) -> char;

    /// Exact integer value; floats truncate, `None` for NaN or infinities
    fn to_big_integer(self) -> Option<BigInt>;

    /// Narrow a big integer, keeping low-order bits on overflow
    fn from_big_integer(value: &BigInt) -> Self;

    /// Decimal value, `None` when it is not representable
    fn to_decimal(self) -> Option<Decimal>;

    /// Narrow a decimal; the fraction is truncated
    fn from_decimal(value: &Decimal) -> Self;

    /// The value read as milliseconds since the Unix epoch
    fn to_epoch_millis(self) -> Option<i64>;
}

/// Unwrap a boxed value, using the type default when absent
///
/// # Example
///
/// ```rust
/// use commons_util::convert::{to_primitive, Primitive};
///
/// assert_eq!(to_primitive(Some(5i32)), 5);
/// assert_eq!(to_primitive::<i32>(None), <i32 as Primitive>::DEFAULT);
/// assert_eq!(to_primitive::<bool>(None), false);
/// ```
pub fn to_primitive<T: Primitive>(value: Option<T>) -> T {
    value.unwrap_or(T::DEFAULT)
}

/// Unwrap a boxed value, using `default` when absent
pub fn to_primitive_or<T: Primitive>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Parse text into a boxed value, `None` when absent or malformed
pub fn parse_object<T: Primitive>(text: Option<&str>) -> Option<T> {
    text.and_then(T::parse_str)
}

/// Parse text, falling back to the type default
///
/// # Example
///
/// ```rust
/// use commons_util::convert::parse;
///
/// assert_eq!(parse::<i32>(Some("42")), 42);
/// assert_eq!(parse::<i32>(Some("4x2")), 0);
/// assert_eq!(parse::<f64>(Some(" 2.5 ")), 2.5);
/// assert_eq!(parse::<i64>(None), 0);
/// ```
pub fn parse<T: Primitive>(text: Option<&str>) -> T {
    parse_or(text, T::DEFAULT)
}

/// Parse text, falling back to `default`
pub fn parse_or<T: Primitive>(text: Option<&str>, default: T) -> T {
    match text {
        Some(raw) => T::parse_str(raw).unwrap_or_else(|| {
            trace!("Unparseable {} {:?}, using default {}", T::TYPE_NAME, raw, default);
            default
        }),
        None => default,
    }
}

/// Primitive cast with truncating/saturating semantics
///
/// Integer narrowing keeps the low-order bits, float-to-integer saturates
/// and maps NaN to 0.
///
/// # Example
///
/// ```rust
/// use commons_util::convert::cast;
///
/// assert_eq!(cast::<i32, i8>(300), 44);
/// assert_eq!(cast::<f64, i32>(1e20), i32::MAX);
/// assert_eq!(cast::<i32, i64>(-7), -7);
/// ```
pub fn cast<T, U>(value: T) -> U
where
    T: AsPrimitive<U>,
    U: Copy + 'static,
{
    value.as_()
}

/// Cast a boxed value, using `default` when absent
pub fn cast_or<T, U>(value: Option<T>, default: U) -> U
where
    T: AsPrimitive<U>,
    U: Copy + 'static,
{
    value.map_or(default, AsPrimitive::as_)
}

/// `true` for non-zero values
pub fn to_boolean<T: Primitive>(value: T) -> bool {
    value.to_boolean()
}

/// Boxed form of [`to_boolean`]; absence is preserved
pub fn to_boolean_object<T: Primitive>(value: Option<T>) -> Option<bool> {
    value.map(Primitive::to_boolean)
}

/// The value as a Unicode scalar, `'\0'` when it is not one
pub fn to_char<T: Primitive>(value: T) -> char {
    value.to_char()
}

/// Render a value as text
pub fn to_string<T: Primitive>(value: T) -> String {
    value.to_string()
}

/// Render a boxed value, using `default` when absent
pub fn to_string_or<T: Primitive>(value: Option<T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), |value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        assert_eq!(<i32 as Primitive>::DEFAULT, 0);
        assert_eq!(<i64 as Primitive>::DEFAULT, 0);
        assert_eq!(<f64 as Primitive>::DEFAULT, 0.0);
        assert_eq!(<bool as Primitive>::DEFAULT, false);
        assert_eq!(<char as Primitive>::DEFAULT, '\0');
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(to_primitive(Some(3i16)), 3);
        assert_eq!(to_primitive::<i16>(None), 0);
        assert_eq!(to_primitive_or::<i16>(None, -1), -1);
        assert_eq!(to_primitive_or(Some('q'), 'z'), 'q');
    }

    #[test]
    fn test_parse_with_defaults() {
        assert_eq!(parse::<i32>(Some("-17")), -17);
        assert_eq!(parse::<i32>(Some("+5")), 5);
        assert_eq!(parse::<i32>(Some(" 5")), 0);
        assert_eq!(parse::<i8>(Some("128")), 0);
        assert_eq!(parse_or::<i32>(Some("abc"), 9), 9);
        assert_eq!(parse_or::<i32>(None, 9), 9);
        assert_eq!(parse::<f32>(Some("1.5")), 1.5);
        assert_eq!(parse_or::<f32>(Some(""), 2.0), 2.0);
        assert_eq!(parse::<bool>(Some("yes")), true);
        assert_eq!(parse_or::<bool>(Some("maybe"), true), true);
        assert_eq!(parse::<char>(Some("xyz")), 'x');
        assert_eq!(parse::<char>(Some("")), '\0');
    }

    #[test]
    fn test_parse_object() {
        assert_eq!(parse_object::<i64>(Some("12")), Some(12));
        assert_eq!(parse_object::<i64>(Some("1.2")), None);
        assert_eq!(parse_object::<i64>(None), None);
    }

    #[test]
    fn test_cast() {
        assert_eq!(cast::<i32, i64>(i32::MIN), i64::from(i32::MIN));
        assert_eq!(cast::<i64, i32>(0x1_0000_0005), 5);
        assert_eq!(cast::<i32, i16>(70_000), 4_464);
        assert_eq!(cast::<f64, i64>(f64::NAN), 0);
        assert_eq!(cast::<f32, i32>(-2.9), -2);
        assert_eq!(cast::<i32, f64>(3), 3.0);
        assert_eq!(cast::<bool, i32>(true), 1);
        assert_eq!(cast::<char, u32>('A'), 65);
        assert_eq!(cast_or::<i32, i64>(None, 8), 8);
        assert_eq!(cast_or::<i32, i64>(Some(2), 8), 2);
    }

    #[test]
    fn test_to_boolean() {
        assert!(to_boolean(1i32));
        assert!(to_boolean(-1i64));
        assert!(!to_boolean(0i8));
        assert!(!to_boolean(0.0f64));
        assert!(to_boolean(0.1f32));
        assert!(!to_boolean('\0'));
        assert_eq!(to_boolean_object(Some(0i32)), Some(false));
        assert_eq!(to_boolean_object::<i32>(None), None);
    }

    #[test]
    fn test_to_char() {
        assert_eq!(to_char(65i32), 'A');
        assert_eq!(to_char(-1i32), '\0');
        assert_eq!(to_char(0xD800i32), '\0');
        assert_eq!(to_char(97.9f64), 'a');
        assert_eq!(to_char(f32::NAN), '\0');
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(42i32), "42");
        assert_eq!(to_string(true), "true");
        assert_eq!(to_string_or::<i32>(None, "n/a"), "n/a");
        assert_eq!(to_string_or(Some(1.5f64), "n/a"), "1.5");
    }
}
