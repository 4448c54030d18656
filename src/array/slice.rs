//! Sub-sequence extraction and length queries

use super::clamp_index;

/// Extract the elements in `[start, end)` as a new vector
///
/// Indices are clamped into `[0, len]`; negative values mean 0, not an
/// offset from the end. An empty range yields a non-allocating empty vector.
///
/// # Arguments
///
/// * `array` - The source array, or `None`
/// * `start` - Inclusive start index
/// * `end` - Exclusive end index
///
/// # Returns
///
/// `None` when `array` is `None`, otherwise the copied range
///
/// # Example
///
/// ```rust
/// use commons_util::array::subarray;
///
/// let data = ['a', 'b', 'c', 'd', 'e', 'f'];
/// assert_eq!(subarray(Some(&data[..]), -2, 4), Some(vec!['a', 'b', 'c', 'd']));
/// assert_eq!(subarray(Some(&data[..]), 4, 2), Some(vec![]));
/// assert_eq!(subarray::<char>(None, 0, 2), None);
/// ```
pub fn subarray<T: Clone>(array: Option<&[T]>, start: isize, end: isize) -> Option<Vec<T>> {
    let array = array?;
    let start = clamp_index(start, array.len());
    let end = clamp_index(end, array.len());

    if start >= end {
        return Some(Vec::new());
    }

    Some(array[start..end].to_vec())
}

/// Length of an array, 0 when absent
pub fn length<T>(array: Option<&[T]>) -> usize {
    array.map_or(0, <[T]>::len)
}

/// `true` when the array is absent or has no elements
pub fn is_empty<T>(array: Option<&[T]>) -> bool {
    length(array) == 0
}

/// `true` when the array is present and has at least one element
pub fn is_not_empty<T>(array: Option<&[T]>) -> bool {
    !is_empty(array)
}

/// `true` when both arrays have the same length, treating absence as empty
pub fn is_same_length<T, U>(first: Option<&[T]>, second: Option<&[U]>) -> bool {
    length(first) == length(second)
}

/// Replace an absent array with the static empty slice
///
/// # Example
///
/// ```rust
/// use commons_util::array::null_to_empty;
///
/// let empty: &[i32] = null_to_empty(None);
/// assert!(empty.is_empty());
/// ```
pub fn null_to_empty<T>(array: Option<&[T]>) -> &[T] {
    array.unwrap_or(&[])
}

/// Shallow copy of an array, `None` stays `None`
pub fn clone_array<T: Clone>(array: Option<&[T]>) -> Option<Vec<T>> {
    array.map(<[T]>::to_vec)
}

/// Reverse the array in place
pub fn reverse<T>(array: &mut [T]) {
    array.reverse();
}

/// Reverse the elements in `[start, end)` in place, with clamped indices
pub fn reverse_range<T>(array: &mut [T], start: isize, end: isize) {
    let start = clamp_index(start, array.len());
    let end = clamp_index(end, array.len());
    if start < end {
        array[start..end].reverse();
    }
}
