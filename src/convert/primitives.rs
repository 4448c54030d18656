//! `Primitive` implementations for the built-in scalars

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use rust_decimal::Decimal;

use super::boolean::to_boolean_object_str;
use super::numbers::{decimal_low_order_i64, low_order_i64};
use super::Primitive;

macro_rules! impl_integer_primitive {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Primitive for $t {
                const DEFAULT: Self = 0;
                const TYPE_NAME: &'static str = $name;

                fn to_boolean(self) -> bool {
                    self != 0
                }

                fn parse_str(text: &str) -> Option<Self> {
                    text.parse().ok()
                }

                fn to_char(self) -> char {
                    u32::try_from(self)
                        .ok()
                        .and_then(char::from_u32)
                        .unwrap_or('\0')
                }

                fn to_big_integer(self) -> Option<BigInt> {
                    Some(BigInt::from(self))
                }

                fn from_big_integer(value: &BigInt) -> Self {
                    low_order_i64(value) as Self
                }

                fn to_decimal(self) -> Option<Decimal> {
                    Some(Decimal::from(self))
                }

                fn from_decimal(value: &Decimal) -> Self {
                    decimal_low_order_i64(value) as Self
                }

                fn to_epoch_millis(self) -> Option<i64> {
                    Some(i64::from(self))
                }
            }
        )*
    };
}

impl_integer_primitive!(i8 => "byte", i16 => "short", i32 => "int", i64 => "long");

macro_rules! impl_float_primitive {
    ($($t:ty => $name:literal, $from_float:ident),* $(,)?) => {
        $(
            impl Primitive for $t {
                const DEFAULT: Self = 0.0;
                const TYPE_NAME: &'static str = $name;

                fn to_boolean(self) -> bool {
                    self != 0.0
                }

                fn parse_str(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }

                fn to_char(self) -> char {
                    if self.is_finite() && self >= 0.0 {
                        char::from_u32(self as u32).unwrap_or('\0')
                    } else {
                        '\0'
                    }
                }

                fn to_big_integer(self) -> Option<BigInt> {
                    BigInt::$from_float(self)
                }

                fn from_big_integer(value: &BigInt) -> Self {
                    value.to_f64().map_or(Self::DEFAULT, |v| v as Self)
                }

                fn to_decimal(self) -> Option<Decimal> {
                    Decimal::$from_float(self)
                }

                fn from_decimal(value: &Decimal) -> Self {
                    value.to_f64().map_or(Self::DEFAULT, |v| v as Self)
                }

                fn to_epoch_millis(self) -> Option<i64> {
                    self.is_finite().then(|| self as i64)
                }
            }
        )*
    };
}

impl_float_primitive!(f32 => "float", from_f32, f64 => "double", from_f64);

impl Primitive for bool {
    const DEFAULT: Self = false;
    const TYPE_NAME: &'static str = "boolean";

    fn to_boolean(self) -> bool {
        self
    }

    fn parse_str(text: &str) -> Option<Self> {
        to_boolean_object_str(Some(text))
    }

    fn to_char(self) -> char {
        char::from(u8::from(self))
    }

    fn to_big_integer(self) -> Option<BigInt> {
        Some(BigInt::from(u8::from(self)))
    }

    fn from_big_integer(value: &BigInt) -> Self {
        !value.is_zero()
    }

    fn to_decimal(self) -> Option<Decimal> {
        Some(Decimal::from(u8::from(self)))
    }

    fn from_decimal(value: &Decimal) -> Self {
        !value.is_zero()
    }

    fn to_epoch_millis(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl Primitive for char {
    const DEFAULT: Self = '\0';
    const TYPE_NAME: &'static str = "char";

    fn to_boolean(self) -> bool {
        self != Self::DEFAULT
    }

    fn parse_str(text: &str) -> Option<Self> {
        text.chars().next()
    }

    fn to_char(self) -> char {
        self
    }

    fn to_big_integer(self) -> Option<BigInt> {
        Some(BigInt::from(u32::from(self)))
    }

    fn from_big_integer(value: &BigInt) -> Self {
        char::from_u32(low_order_i64(value) as u32).unwrap_or(Self::DEFAULT)
    }

    fn to_decimal(self) -> Option<Decimal> {
        Some(Decimal::from(u32::from(self)))
    }

    fn from_decimal(value: &Decimal) -> Self {
        char::from_u32(decimal_low_order_i64(value) as u32).unwrap_or(Self::DEFAULT)
    }

    fn to_epoch_millis(self) -> Option<i64> {
        Some(i64::from(u32::from(self)))
    }
}
