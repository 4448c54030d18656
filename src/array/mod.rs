//! Array utility functions
//!
//! Null-tolerant helpers over slices. An absent array is `None` and is
//! propagated rather than rejected; index pairs for sub-sequences are clamped
//! into range, while single-index insert/remove fail with
//! [`UtilError::IndexOutOfBounds`](crate::error::UtilError::IndexOutOfBounds).
//!
//! Empty results are returned as `Vec::new()`, which never allocates.

pub mod boxing;
pub mod modify;
pub mod search;
pub mod slice;

pub use boxing::{to_object, to_primitive, to_primitive_or};
pub use modify::{add, add_all, add_at, remove, remove_all, remove_element};
pub use search::{
    contains,
    contains_tolerance,
    index_of,
    index_of_from,
    index_of_tolerance,
    index_of_tolerance_from,
    last_index_of,
    last_index_of_from,
    last_index_of_tolerance,
    last_index_of_tolerance_from,
};
pub use slice::{
    clone_array,
    is_empty,
    is_not_empty,
    is_same_length,
    length,
    null_to_empty,
    reverse,
    reverse_range,
    subarray,
};

/// Clamp a signed index into `[0, len]`
pub(crate) fn clamp_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len)
    }
}
