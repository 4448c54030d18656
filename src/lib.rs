//! commons-util
//!
//! General-purpose helper functions for arrays, primitive conversions,
//! strings, hash-code combination and type names. Every function is a
//! stateless transformation of its arguments.
//!
//! # Features
//!
//! - **Arrays**: null-tolerant sub-sequence, search, insert and remove over
//!   slices, with clamped index pairs
//! - **Conversions**: one generic surface over the primitive scalars, with
//!   sentinel defaults, big-number and date conversions and an endian-aware
//!   byte codec
//! - **Strings**: character-indexed search, split, padding, substring, case
//!   and replacement helpers
//! - **Hashing**: a deterministic running-hash combiner for hand-written
//!   hash codes
//! - **Types**: primitive kinds, widening rules, short/package names and
//!   array type descriptors
//!
//! # Quick Start
//!
//! ```rust
//! use commons_util::{array, convert, strings, ByteOrder, Hash};
//!
//! let letters = ['a', 'b', 'c', 'd', 'e', 'f'];
//! assert_eq!(array::subarray(Some(&letters[..]), -2, 4), Some(vec!['a', 'b', 'c', 'd']));
//!
//! assert_eq!(convert::to_byte_array(0xAB00AB00u32 as i32, ByteOrder::BigEndian), vec![0xAB, 0x00, 0xAB, 0x00]);
//! assert_eq!(Hash::combine(7, 11, &true), 78);
//! assert_eq!(strings::to_snake_case("XMLHttpRequest"), "xml_http_request");
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;

pub mod array;
pub mod convert;
pub mod hash;
pub mod strings;
pub mod types;

// Re-exports for convenience
pub use convert::{ByteCodec, ByteOrder, Primitive};
pub use error::{Result, UtilError};
pub use hash::{Hash, HashBuilder, HashField};
pub use strings::{CharFilter, SplitOptions};
pub use types::{PrimitiveKind, TypeDescriptor};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        // Version should follow semantic versioning
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_array_literals() {
        let letters = ["a", "b", "c", "d", "e", "f"];
        assert_eq!(
            array::subarray(Some(&letters[..]), -2, 4),
            Some(vec!["a", "b", "c", "d"])
        );
        assert_eq!(array::index_of_from(Some(&[0, 1, 2, 3, 0][..]), &0, 2), Some(4));
    }

    #[test]
    fn test_codec_and_hash_literals() {
        let bytes = convert::to_byte_array(0xAB00AB00u32 as i32, ByteOrder::BigEndian);
        assert_eq!(bytes, vec![0xAB, 0x00, 0xAB, 0x00]);
        assert_eq!(convert::from_byte_array::<i32>(&bytes, ByteOrder::BigEndian).unwrap(), 0xAB00AB00u32 as i32);
        assert_eq!(Hash::combine(7, 11, &true), 78);
    }

    #[test]
    fn test_modules_cooperate() {
        // split a list, then look the tokens up as primitive names
        let kinds: Vec<PrimitiveKind> = strings::split_by_char(" int,long ,double", ',')
            .iter()
            .filter_map(|token| token.trim().parse().ok())
            .collect();
        assert_eq!(kinds, vec![PrimitiveKind::Int, PrimitiveKind::Long, PrimitiveKind::Double]);

        let hash = HashBuilder::new().append("int").append(&(kinds.len() as i32)).to_hash_code();
        let expected = Hash::combine(Hash::combine(17, 37, "int"), 37, &3i32);
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_error_reexport() {
        let err: Result<()> = Err(UtilError::custom("boom"));
        assert_eq!(err.unwrap_err().to_string(), "boom");
    }
}
