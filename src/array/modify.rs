//! Insertion, removal and append
//!
//! These helpers always build a new vector; the source slice is untouched.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Result, UtilError};

/// Validate `index` against `[0, limit]` and convert it to `usize`
fn checked_index(index: isize, limit: usize, length: usize) -> Result<usize> {
    if index < 0 || index as usize > limit {
        debug!("Rejected array index {} for length {}", index, length);
        return Err(UtilError::index_out_of_bounds(index, length));
    }
    Ok(index as usize)
}

/// Append `element` to a copy of the array
///
/// An absent array behaves like an empty one, so the result always has the
/// element's type and holds at least that element.
///
/// # Example
///
/// ```rust
/// use commons_util::array::add;
///
/// assert_eq!(add(Some(&[1, 2][..]), 3), vec![1, 2, 3]);
/// assert_eq!(add(None, "only"), vec!["only"]);
/// ```
pub fn add<T: Clone>(array: Option<&[T]>, element: T) -> Vec<T> {
    let array = array.unwrap_or(&[]);
    let mut result = Vec::with_capacity(array.len() + 1);
    result.extend_from_slice(array);
    result.push(element);
    result
}

/// Insert `element` at `index` in a copy of the array
///
/// # Errors
///
/// [`UtilError::IndexOutOfBounds`] when `index < 0` or `index > len`
///
/// # Example
///
/// ```rust
/// use commons_util::array::add_at;
///
/// assert_eq!(add_at(Some(&[1, 3][..]), 1, 2).unwrap(), vec![1, 2, 3]);
/// let err = add_at(Some(&[1, 3][..]), -1, 2).unwrap_err();
/// assert_eq!(err.to_string(), "Index: -1, Length: 2");
/// ```
pub fn add_at<T: Clone>(array: Option<&[T]>, index: isize, element: T) -> Result<Vec<T>> {
    let array = array.unwrap_or(&[]);
    let index = checked_index(index, array.len(), array.len())?;

    let mut result = Vec::with_capacity(array.len() + 1);
    result.extend_from_slice(&array[..index]);
    result.push(element);
    result.extend_from_slice(&array[index..]);
    Ok(result)
}

/// Concatenate two arrays
///
/// If one side is absent a copy of the other is returned; both absent gives
/// `None`.
pub fn add_all<T: Clone>(first: Option<&[T]>, second: Option<&[T]>) -> Option<Vec<T>> {
    match (first, second) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only.to_vec()),
        (Some(first), Some(second)) => {
            let mut result = Vec::with_capacity(first.len() + second.len());
            result.extend_from_slice(first);
            result.extend_from_slice(second);
            Some(result)
        }
    }
}

/// Remove the element at `index` from a copy of the array
///
/// # Errors
///
/// [`UtilError::IndexOutOfBounds`] when `index < 0` or `index >= len`; an
/// absent array has length 0, so every index fails.
pub fn remove<T: Clone>(array: Option<&[T]>, index: isize) -> Result<Vec<T>> {
    let array = array.unwrap_or(&[]);
    if array.is_empty() {
        return Err(UtilError::index_out_of_bounds(index, 0));
    }
    let index = checked_index(index, array.len() - 1, array.len())?;

    let mut result = Vec::with_capacity(array.len() - 1);
    result.extend_from_slice(&array[..index]);
    result.extend_from_slice(&array[index + 1..]);
    Ok(result)
}

/// Remove every listed index from a copy of the array
///
/// Duplicate indices are removed once. Each index is validated as in
/// [`remove`] before anything is removed.
pub fn remove_all<T: Clone>(array: Option<&[T]>, indices: &[isize]) -> Result<Vec<T>> {
    let array = array.unwrap_or(&[]);
    let mut doomed = BTreeSet::new();
    for &index in indices {
        if array.is_empty() {
            return Err(UtilError::index_out_of_bounds(index, 0));
        }
        doomed.insert(checked_index(index, array.len() - 1, array.len())?);
    }

    Ok(array
        .iter()
        .enumerate()
        .filter(|(i, _)| !doomed.contains(i))
        .map(|(_, item)| item.clone())
        .collect())
}

/// Remove the first occurrence of `element` from a copy of the array
///
/// Returns an unchanged copy if the element is not present.
pub fn remove_element<T: Clone + PartialEq>(array: Option<&[T]>, element: &T) -> Option<Vec<T>> {
    let array = array?;
    match array.iter().position(|item| item == element) {
        Some(index) => {
            let mut result = array.to_vec();
            result.remove(index);
            Some(result)
        }
        None => Some(array.to_vec()),
    }
}
