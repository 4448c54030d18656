//! Hash-code combination
//!
//! A running, order-sensitive accumulator for hand-written hash functions:
//! `combine(seed, multiplier, value) = seed * multiplier + contribution(value)`
//! with 32-bit wrapping arithmetic. It has no collision-resistance guarantee
//! and is not meant for anything cryptographic.

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, VecDeque};
use std::hash::{Hash as StdHash, Hasher};

pub mod builder;

pub use builder::HashBuilder;

/// Canonical bit pattern for a NaN `f32`
const F32_CANONICAL_NAN: u32 = 0x7fc0_0000;

/// Canonical bit pattern for a NaN `f64`
const F64_CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

#[inline]
fn step(seed: i32, multiplier: i32, contribution: i32) -> i32 {
    seed.wrapping_mul(multiplier).wrapping_add(contribution)
}

#[inline]
fn fold_u64(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as i32
}

/// A value that can be folded into a running hash
///
/// Scalars contribute a single step. Containers fold every element with
/// the running seed, so nested containers recurse naturally.
pub trait HashField {
    /// Fold this value into `seed`
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32;
}

macro_rules! impl_int_field {
    ($($t:ty),*) => {
        $(
            impl HashField for $t {
                #[inline]
                fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
                    step(seed, multiplier, *self as i32)
                }
            }
        )*
    };
}

impl_int_field!(i8, u8, i16, u16, i32, u32);

impl HashField for bool {
    #[inline]
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        step(seed, multiplier, i32::from(*self))
    }
}

impl HashField for char {
    #[inline]
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        step(seed, multiplier, *self as i32)
    }
}

impl HashField for i64 {
    #[inline]
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        step(seed, multiplier, fold_u64(*self as u64))
    }
}

impl HashField for u64 {
    #[inline]
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        step(seed, multiplier, fold_u64(*self))
    }
}

impl HashField for f32 {
    #[inline]
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        let bits = if self.is_nan() { F32_CANONICAL_NAN } else { self.to_bits() };
        step(seed, multiplier, bits as i32)
    }
}

impl HashField for f64 {
    #[inline]
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        let bits = if self.is_nan() { F64_CANONICAL_NAN } else { self.to_bits() };
        step(seed, multiplier, fold_u64(bits))
    }
}

impl HashField for str {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        step(seed, multiplier, string_hash(self))
    }
}

impl HashField for String {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        self.as_str().fold_into(seed, multiplier)
    }
}

impl<T: HashField + ?Sized> HashField for &T {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        (**self).fold_into(seed, multiplier)
    }
}

impl<T: HashField> HashField for Option<T> {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        match self {
            Some(value) => value.fold_into(seed, multiplier),
            None => step(seed, multiplier, 0),
        }
    }
}

impl<T: HashField> HashField for [T] {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        Hash::combine_iter(seed, multiplier, self)
    }
}

impl<T: HashField, const N: usize> HashField for [T; N] {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        self.as_slice().fold_into(seed, multiplier)
    }
}

impl<T: HashField> HashField for Vec<T> {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        self.as_slice().fold_into(seed, multiplier)
    }
}

impl<T: HashField> HashField for VecDeque<T> {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        Hash::combine_iter(seed, multiplier, self)
    }
}

impl<T: HashField> HashField for BTreeSet<T> {
    fn fold_into(&self, seed: i32, multiplier: i32) -> i32 {
        Hash::combine_iter(seed, multiplier, self)
    }
}

/// Polynomial string hash over UTF-16 code units (`h = 31 * h + unit`)
///
/// # Example
///
/// ```rust
/// use commons_util::hash::string_hash;
///
/// assert_eq!(string_hash(""), 0);
/// assert_eq!(string_hash("a"), 97);
/// assert_eq!(string_hash("ab"), 31 * 97 + 98);
/// ```
pub fn string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hash-combination entry points
pub struct Hash;

impl Hash {
    /// Fold `value` into `seed`
    ///
    /// # Arguments
    ///
    /// * `seed` - The hash accumulated so far
    /// * `multiplier` - Factor applied to the seed before adding
    /// * `value` - Any [`HashField`]: scalar, string, option or container
    ///
    /// # Example
    ///
    /// ```rust
    /// use commons_util::hash::Hash;
    ///
    /// assert_eq!(Hash::combine(7, 11, &true), 78);
    /// assert_eq!(Hash::combine(7, 11, &None::<i32>), 77);
    /// assert_eq!(Hash::combine(7, 11, &[1, 2]), (7 * 11 + 1) * 11 + 2);
    /// ```
    pub fn combine<T: HashField + ?Sized>(seed: i32, multiplier: i32, value: &T) -> i32 {
        value.fold_into(seed, multiplier)
    }

    /// Fold every item of an iterator into `seed`, in iteration order
    pub fn combine_iter<I>(seed: i32, multiplier: i32, items: I) -> i32
    where
        I: IntoIterator,
        I::Item: HashField,
    {
        items
            .into_iter()
            .fold(seed, |acc, item| item.fold_into(acc, multiplier))
    }

    /// Fold a value through its own [`std::hash::Hash`] implementation
    ///
    /// The 64-bit `DefaultHasher` output is XOR-folded to 32 bits. `None`
    /// contributes 0.
    pub fn combine_hashable<T: StdHash + ?Sized>(seed: i32, multiplier: i32, value: Option<&T>) -> i32 {
        let contribution = value.map_or(0, |value| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            fold_u64(hasher.finish())
        });
        step(seed, multiplier, contribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_contributions() {
        assert_eq!(Hash::combine(7, 11, &true), 78);
        assert_eq!(Hash::combine(7, 11, &false), 77);
        assert_eq!(Hash::combine(1, 31, &'A'), 31 + 65);
        assert_eq!(Hash::combine(0, 31, &-3i8), -3);
        assert_eq!(Hash::combine(0, 31, &255u8), 255);
        assert_eq!(Hash::combine(2, 3, &40_000i32), 40_006);
    }

    #[test]
    fn test_long_folds_high_and_low_words() {
        let value: i64 = 0x0000_0001_0000_0002;
        assert_eq!(Hash::combine(0, 1, &value), 3);
        assert_eq!(Hash::combine(0, 1, &-1i64), 0);
    }

    #[test]
    fn test_float_bits() {
        assert_eq!(Hash::combine(0, 1, &1.0f32), 0x3f80_0000);
        assert_eq!(Hash::combine(0, 1, &f32::NAN), 0x7fc0_0000);
        assert_eq!(Hash::combine(0, 1, &1.0f64), 0x3ff0_0000);
        assert_eq!(Hash::combine(0, 1, &-f64::NAN), 0x7ff8_0000);
    }

    #[test]
    fn test_none_contributes_zero() {
        assert_eq!(Hash::combine(5, 9, &None::<String>), 45);
        assert_eq!(Hash::combine(5, 9, &None::<Vec<i32>>), 45);
        assert_eq!(Hash::combine_hashable::<str>(5, 9, None), 45);
    }

    #[test]
    fn test_containers_fold_with_running_seed() {
        let expected = Hash::combine(Hash::combine(Hash::combine(3, 5, &1), 5, &2), 5, &3);
        assert_eq!(Hash::combine(3, 5, &[1, 2, 3]), expected);
        assert_eq!(Hash::combine(3, 5, &vec![1, 2, 3]), expected);
        assert_eq!(Hash::combine(3, 5, &VecDeque::from(vec![1, 2, 3])), expected);
        assert_eq!(Hash::combine(3, 5, &BTreeSet::from([3, 1, 2])), expected);
        assert_eq!(Hash::combine_iter(3, 5, [1, 2, 3]), expected);
    }

    #[test]
    fn test_nested_containers_recurse() {
        let nested = vec![vec![1, 2], vec![3]];
        let flat = [1, 2, 3];
        assert_eq!(Hash::combine(17, 37, &nested), Hash::combine(17, 37, &flat));
    }

    #[test]
    fn test_empty_container_keeps_seed() {
        let empty: [i32; 0] = [];
        assert_eq!(Hash::combine(17, 37, &empty), 17);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(Hash::combine(17, 37, &[1, 2]), Hash::combine(17, 37, &[2, 1]));
    }

    #[test]
    fn test_strings() {
        assert_eq!(string_hash("hello"), 99_162_322);
        assert_eq!(Hash::combine(0, 1, "hello"), 99_162_322);
        assert_eq!(Hash::combine(0, 1, &String::from("hello")), 99_162_322);
        // surrogate pairs count as two code units
        assert_eq!(string_hash("\u{1F600}"), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn test_wrapping_arithmetic() {
        assert_eq!(Hash::combine(i32::MAX, 2, &0), -2);
        assert_eq!(Hash::combine(i32::MAX, 1, &1), i32::MIN);
    }

    #[test]
    fn test_combine_hashable_is_deterministic() {
        let a = Hash::combine_hashable(17, 37, Some(&("x", 1)));
        let b = Hash::combine_hashable(17, 37, Some(&("x", 1)));
        assert_eq!(a, b);
    }
}
