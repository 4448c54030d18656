//! Conversions between plain and nullable element arrays

use crate::error::{Result, UtilError};

/// Wrap every element in `Some`
pub fn to_object<T: Copy>(array: Option<&[T]>) -> Option<Vec<Option<T>>> {
    array.map(|items| items.iter().copied().map(Some).collect())
}

/// Unwrap every element, failing on the first absent one
///
/// # Errors
///
/// [`UtilError::NullElement`] with the index of the first `None`
///
/// # Example
///
/// ```rust
/// use commons_util::array::to_primitive;
///
/// assert_eq!(to_primitive(Some(&[Some(1), Some(2)][..])).unwrap(), Some(vec![1, 2]));
/// assert!(to_primitive(Some(&[Some(1), None][..])).is_err());
/// ```
pub fn to_primitive<T: Copy>(array: Option<&[Option<T>]>) -> Result<Option<Vec<T>>> {
    let Some(items) = array else {
        return Ok(None);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.ok_or(UtilError::NullElement { index }))
        .collect::<Result<Vec<T>>>()
        .map(Some)
}

/// Unwrap every element, substituting `value_for_null` for absent ones
pub fn to_primitive_or<T: Copy>(array: Option<&[Option<T>]>, value_for_null: T) -> Option<Vec<T>> {
    array.map(|items| items.iter().map(|item| item.unwrap_or(value_for_null)).collect())
}
