//! Big-integer and decimal conversions
//!
//! Narrowing from a big number keeps the low-order two's-complement bits,
//! the same way a fixed-width cast would.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use rust_decimal::Decimal;

use super::Primitive;

/// Low-order 64 bits of a big integer, as two's complement
pub(crate) fn low_order_i64(value: &BigInt) -> i64 {
    let bytes = value.to_signed_bytes_le();
    let fill = if value.is_negative() { 0xff } else { 0x00 };
    let mut buf = [fill; 8];
    let take = bytes.len().min(8);
    buf[..take].copy_from_slice(&bytes[..take]);
    i64::from_le_bytes(buf)
}

/// Integer part of a decimal, wrapped to 64 bits
pub(crate) fn decimal_low_order_i64(value: &Decimal) -> i64 {
    value.trunc().to_i128().map_or(0, |whole| whole as i64)
}

/// Exact integer value of a primitive
///
/// # Example
///
/// ```rust
/// use commons_util::convert::to_big_integer;
/// use num_bigint::BigInt;
///
/// assert_eq!(to_big_integer(i64::MAX), Some(BigInt::from(i64::MAX)));
/// assert_eq!(to_big_integer(-2.7f64), Some(BigInt::from(-2)));
/// assert_eq!(to_big_integer(f64::NAN), None);
/// ```
pub fn to_big_integer<T: Primitive>(value: T) -> Option<BigInt> {
    value.to_big_integer()
}

/// Narrow a big integer, defaulting when absent
pub fn from_big_integer<T: Primitive>(value: Option<&BigInt>) -> T {
    value.map_or(T::DEFAULT, T::from_big_integer)
}

/// Decimal value of a primitive
pub fn to_decimal<T: Primitive>(value: T) -> Option<Decimal> {
    value.to_decimal()
}

/// Narrow a decimal, defaulting when absent
pub fn from_decimal<T: Primitive>(value: Option<&Decimal>) -> T {
    value.map_or(T::DEFAULT, T::from_decimal)
}
