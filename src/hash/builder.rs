//! Fluent hash accumulation

use super::{Hash, HashField};

/// Accumulates fields into a hash code
///
/// Defaults to seed 17 and multiplier 37. Both can be changed with the
/// `with_*` methods before any field is appended.
///
/// # Example
///
/// ```rust
/// use commons_util::hash::HashBuilder;
///
/// let code = HashBuilder::new()
///     .append(&42)
///     .append("name")
///     .append(&Some(1.5f64))
///     .to_hash_code();
///
/// let again = HashBuilder::new().append(&42).append("name").append(&Some(1.5f64));
/// assert_eq!(code, again.to_hash_code());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashBuilder {
    /// Initial accumulator value
    pub seed: i32,
    /// Factor applied before each field is added
    pub multiplier: i32,
    total: i32,
}

impl Default for HashBuilder {
    fn default() -> Self {
        HashBuilder {
            seed: Self::DEFAULT_SEED,
            multiplier: Self::DEFAULT_MULTIPLIER,
            total: Self::DEFAULT_SEED,
        }
    }
}

impl HashBuilder {
    /// Default initial accumulator value
    pub const DEFAULT_SEED: i32 = 17;

    /// Default multiplier
    pub const DEFAULT_MULTIPLIER: i32 = 37;

    /// Create a builder with the default seed and multiplier
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed, restarting the accumulator
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self.total = seed;
        self
    }

    /// Set the multiplier
    pub fn with_multiplier(mut self, multiplier: i32) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Fold one more field into the hash
    pub fn append<T: HashField + ?Sized>(mut self, value: &T) -> Self {
        self.total = Hash::combine(self.total, self.multiplier, value);
        self
    }

    /// Fold every item of an iterator into the hash
    pub fn append_all<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: HashField,
    {
        self.total = Hash::combine_iter(self.total, self.multiplier, items);
        self
    }

    /// The hash accumulated so far
    pub fn to_hash_code(&self) -> i32 {
        self.total
    }
}
