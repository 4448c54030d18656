//! Fixed-width integer to byte-array codec
//!
//! Values are written as exactly `WIDTH` bytes in the requested order and
//! read back from slices of exactly that length.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, UtilError};

/// Byte order of a serialized integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ByteOrder {
    /// Most significant byte first
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the running platform
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    /// Canonical name (`BIG_ENDIAN` / `LITTLE_ENDIAN`)
    pub fn name(self) -> &'static str {
        match self {
            ByteOrder::BigEndian => "BIG_ENDIAN",
            ByteOrder::LittleEndian => "LITTLE_ENDIAN",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = UtilError;

    /// Parse `BIG_ENDIAN` or `LITTLE_ENDIAN`, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("BIG_ENDIAN") {
            Ok(ByteOrder::BigEndian)
        } else if s.eq_ignore_ascii_case("LITTLE_ENDIAN") {
            Ok(ByteOrder::LittleEndian)
        } else {
            debug!("Rejected byte order name {:?}", s);
            Err(UtilError::UnsupportedByteOrder(s.to_string()))
        }
    }
}

/// Fixed-width integer with a byte-array form
pub trait ByteCodec: Sized + Copy {
    /// Number of bytes in the encoded form
    const WIDTH: usize;

    /// Encode as exactly `WIDTH` bytes
    fn to_byte_array(self, order: ByteOrder) -> Vec<u8>;

    /// Decode from exactly `WIDTH` bytes
    ///
    /// # Errors
    ///
    /// [`UtilError::InvalidByteLength`] for any other slice length
    fn from_byte_array(bytes: &[u8], order: ByteOrder) -> Result<Self>;
}

macro_rules! impl_byte_codec {
    ($($t:ty),* $(,)?) => {
        $(
            impl ByteCodec for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn to_byte_array(self, order: ByteOrder) -> Vec<u8> {
                    match order {
                        ByteOrder::BigEndian => self.to_be_bytes().to_vec(),
                        ByteOrder::LittleEndian => self.to_le_bytes().to_vec(),
                    }
                }

                fn from_byte_array(bytes: &[u8], order: ByteOrder) -> Result<Self> {
                    let raw: [u8; std::mem::size_of::<$t>()] = bytes.try_into().map_err(|_| {
                        debug!("Cannot decode {} from {} bytes", stringify!($t), bytes.len());
                        UtilError::InvalidByteLength {
                            expected: Self::WIDTH,
                            actual: bytes.len(),
                        }
                    })?;
                    Ok(match order {
                        ByteOrder::BigEndian => <$t>::from_be_bytes(raw),
                        ByteOrder::LittleEndian => <$t>::from_le_bytes(raw),
                    })
                }
            }
        )*
    };
}

impl_byte_codec!(i16, i32, i64, u16, u32, u64);

/// Encode an integer in the given byte order
///
/// # Example
///
/// ```rust
/// use commons_util::convert::{to_byte_array, ByteOrder};
///
/// let bytes = to_byte_array(0xAB00_AB00u32 as i32, ByteOrder::BigEndian);
/// assert_eq!(bytes, vec![0xAB, 0x00, 0xAB, 0x00]);
///
/// let bytes = to_byte_array(0x0102i16, ByteOrder::LittleEndian);
/// assert_eq!(bytes, vec![0x02, 0x01]);
/// ```
pub fn to_byte_array<T: ByteCodec>(value: T, order: ByteOrder) -> Vec<u8> {
    value.to_byte_array(order)
}

/// Encode an integer, naming the byte order as text
///
/// # Errors
///
/// [`UtilError::UnsupportedByteOrder`] if the name is not a known order
pub fn to_byte_array_named<T: ByteCodec>(value: T, order: &str) -> Result<Vec<u8>> {
    let order = order.parse::<ByteOrder>()?;
    Ok(value.to_byte_array(order))
}

/// Decode an integer from exactly `T::WIDTH` bytes
///
/// # Example
///
/// ```rust
/// use commons_util::convert::{from_byte_array, ByteOrder};
///
/// let value: i32 = from_byte_array(&[0xAB, 0x00, 0xAB, 0x00], ByteOrder::BigEndian).unwrap();
/// assert_eq!(value, 0xAB00_AB00u32 as i32);
/// assert!(from_byte_array::<i64>(&[1, 2, 3], ByteOrder::BigEndian).is_err());
/// ```
pub fn from_byte_array<T: ByteCodec>(bytes: &[u8], order: ByteOrder) -> Result<T> {
    T::from_byte_array(bytes, order)
}

/// Decode an integer, using `default` when the bytes are absent or malformed
pub fn from_byte_array_or<T: ByteCodec>(bytes: Option<&[u8]>, order: ByteOrder, default: T) -> T {
    bytes
        .and_then(|bytes| T::from_byte_array(bytes, order).ok())
        .unwrap_or(default)
}
