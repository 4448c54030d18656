//! Linear element search
//!
//! Forward searches clamp a negative start to 0 and report "not found" past
//! the end; backward searches report "not found" for a negative start and
//! clamp a start past the end to the last element.

use num_traits::Float;

/// Normalize a forward search start, `None` when nothing can match
fn forward_start(start: isize, len: usize) -> Option<usize> {
    let start = start.max(0) as usize;
    (start < len).then_some(start)
}

/// Normalize a backward search start, `None` when nothing can match
fn backward_start(start: isize, len: usize) -> Option<usize> {
    if start < 0 || len == 0 {
        return None;
    }
    Some((start as usize).min(len - 1))
}

fn position_from<T, F>(array: Option<&[T]>, start: isize, matches: F) -> Option<usize>
where
    F: Fn(&T) -> bool,
{
    let array = array?;
    let start = forward_start(start, array.len())?;
    array[start..]
        .iter()
        .position(matches)
        .map(|offset| start + offset)
}

fn rposition_from<T, F>(array: Option<&[T]>, start: isize, matches: F) -> Option<usize>
where
    F: Fn(&T) -> bool,
{
    let array = array?;
    let start = backward_start(start, array.len())?;
    array[..=start].iter().rposition(matches)
}

/// Find the first index of `value`
///
/// Use an array of `Option<T>` for null-safe matching: `None` finds `None`.
///
/// # Example
///
/// ```rust
/// use commons_util::array::index_of;
///
/// assert_eq!(index_of(Some(&[3, 1, 3][..]), &3), Some(0));
/// assert_eq!(index_of(Some(&[Some("a"), None][..]), &None), Some(1));
/// ```
pub fn index_of<T: PartialEq>(array: Option<&[T]>, value: &T) -> Option<usize> {
    index_of_from(array, value, 0)
}

/// Find the first index of `value` at or after `start`
///
/// # Example
///
/// ```rust
/// use commons_util::array::index_of_from;
///
/// let data = [0, 1, 2, 3, 0];
/// assert_eq!(index_of_from(Some(&data[..]), &0, 2), Some(4));
/// assert_eq!(index_of_from(Some(&data[..]), &0, -7), Some(0));
/// assert_eq!(index_of_from(Some(&data[..]), &0, 5), None);
/// ```
pub fn index_of_from<T: PartialEq>(array: Option<&[T]>, value: &T, start: isize) -> Option<usize> {
    position_from(array, start, |candidate| candidate == value)
}

/// Find the last index of `value`
pub fn last_index_of<T: PartialEq>(array: Option<&[T]>, value: &T) -> Option<usize> {
    last_index_of_from(array, value, isize::MAX)
}

/// Find the last index of `value` at or before `start`
pub fn last_index_of_from<T: PartialEq>(array: Option<&[T]>, value: &T, start: isize) -> Option<usize> {
    rposition_from(array, start, |candidate| candidate == value)
}

/// `true` if the array holds `value`
pub fn contains<T: PartialEq>(array: Option<&[T]>, value: &T) -> bool {
    index_of(array, value).is_some()
}

/// Find the first element within `tolerance` of `value`
///
/// # Example
///
/// ```rust
/// use commons_util::array::index_of_tolerance;
///
/// let data = [0.0, 1.05, 2.0];
/// assert_eq!(index_of_tolerance(Some(&data[..]), 1.0, 0.1), Some(1));
/// assert_eq!(index_of_tolerance(Some(&data[..]), 1.0, 0.01), None);
/// ```
pub fn index_of_tolerance<F: Float>(array: Option<&[F]>, value: F, tolerance: F) -> Option<usize> {
    index_of_tolerance_from(array, value, tolerance, 0)
}

/// Find the first element within `tolerance` of `value` at or after `start`
pub fn index_of_tolerance_from<F: Float>(
    array: Option<&[F]>,
    value: F,
    tolerance: F,
    start: isize,
) -> Option<usize> {
    position_from(array, start, |&candidate| (candidate - value).abs() <= tolerance)
}

/// Find the last element within `tolerance` of `value`
pub fn last_index_of_tolerance<F: Float>(array: Option<&[F]>, value: F, tolerance: F) -> Option<usize> {
    last_index_of_tolerance_from(array, value, tolerance, isize::MAX)
}

/// Find the last element within `tolerance` of `value` at or before `start`
pub fn last_index_of_tolerance_from<F: Float>(
    array: Option<&[F]>,
    value: F,
    tolerance: F,
    start: isize,
) -> Option<usize> {
    rposition_from(array, start, |&candidate| (candidate - value).abs() <= tolerance)
}

/// `true` if some element is within `tolerance` of `value`
pub fn contains_tolerance<F: Float>(array: Option<&[F]>, value: F, tolerance: F) -> bool {
    index_of_tolerance(array, value, tolerance).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_forward() {
        let data = [0, 1, 2, 3, 0];
        let src = Some(&data[..]);

        assert_eq!(index_of(src, &0), Some(0));
        assert_eq!(index_of(src, &3), Some(3));
        assert_eq!(index_of(src, &99), None);
        assert_eq!(index_of_from(src, &0, 2), Some(4));
        assert_eq!(index_of_from(src, &2, -1), Some(2));
        assert_eq!(index_of_from(src, &0, 5), None);
        assert_eq!(index_of::<i32>(None, &0), None);
        assert_eq!(index_of::<i32>(Some(&[]), &0), None);
    }

    #[test]
    fn test_last_index_of_backward() {
        let data = [0, 1, 2, 3, 0];
        let src = Some(&data[..]);

        assert_eq!(last_index_of(src, &0), Some(4));
        assert_eq!(last_index_of_from(src, &0, 3), Some(0));
        assert_eq!(last_index_of_from(src, &3, 88), Some(3));
        assert_eq!(last_index_of_from(src, &0, -1), None);
        assert_eq!(last_index_of::<i32>(Some(&[]), &0), None);
    }

    #[test]
    fn test_null_safe_object_search() {
        let data = [Some("a"), None, Some("b"), None];
        let src = Some(&data[..]);

        assert_eq!(index_of(src, &None), Some(1));
        assert_eq!(last_index_of(src, &None), Some(3));
        assert_eq!(index_of(src, &Some("b")), Some(2));
        assert!(contains(src, &Some("a")));
        assert!(!contains(src, &Some("z")));
    }

    #[test]
    fn test_found_index_matches_and_nothing_earlier() {
        let data = [4, 2, 4, 1, 2, 4];
        for start in -2..8isize {
            for value in 0..6 {
                if let Some(found) = index_of_from(Some(&data[..]), &value, start) {
                    assert_eq!(data[found], value);
                    let from = start.max(0) as usize;
                    assert!(data[from..found].iter().all(|&v| v != value));
                }
            }
        }
    }

    #[test]
    fn test_tolerance_search() {
        let data = [0.0f64, 1.0, 1.5, 2.0, 1.02];
        let src = Some(&data[..]);

        assert_eq!(index_of_tolerance(src, 1.01, 0.02), Some(1));
        assert_eq!(last_index_of_tolerance(src, 1.01, 0.02), Some(4));
        assert_eq!(index_of_tolerance_from(src, 1.01, 0.02, 2), Some(4));
        assert_eq!(last_index_of_tolerance_from(src, 1.01, 0.02, 3), Some(1));
        assert!(contains_tolerance(src, 1.9, 0.15));
        assert!(!contains_tolerance(src, 3.0, 0.5));
        assert_eq!(index_of_tolerance::<f32>(None, 0.0, 1.0), None);
    }

    #[test]
    fn test_nan_never_matches() {
        let data = [f64::NAN, 1.0];
        assert_eq!(index_of(Some(&data[..]), &f64::NAN), None);
        assert_eq!(index_of_tolerance(Some(&data[..]), f64::NAN, 1.0), None);
    }
}
