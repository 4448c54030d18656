//! Array helpers: clamping, search, insertion and removal
//!
//! Run: cargo test --test array_behaviour

use commons_util::array;
use commons_util::UtilError;
use pretty_assertions::assert_eq;

#[test]
fn test_subarray_literal_scenario() {
    let letters = ['a', 'b', 'c', 'd', 'e', 'f'];
    assert_eq!(
        array::subarray(Some(&letters[..]), -2, 4),
        Some(vec!['a', 'b', 'c', 'd'])
    );
}

#[test]
fn test_subarray_length_and_capacity() {
    let data: Vec<i64> = (0..6).collect();
    let len = data.len() as isize;

    for start in -3..=8isize {
        for end in -3..=8isize {
            let result = array::subarray(Some(&data[..]), start, end).unwrap();
            let expected_len = (end.min(len) - start.max(0)).max(0) as usize;
            assert_eq!(result.len(), expected_len, "subarray({}, {})", start, end);

            if expected_len == 0 {
                // empty results never allocate
                assert_eq!(result.capacity(), 0);
            } else {
                assert_eq!(result[0], start.max(0) as i64);
            }
        }
    }
}

#[test]
fn test_index_of_from_literal_and_property() {
    let numbers = [0, 1, 2, 3, 0];
    assert_eq!(array::index_of_from(Some(&numbers[..]), &0, 2), Some(4));

    let data = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    for start in -2..=12isize {
        for value in 0..10 {
            if let Some(i) = array::index_of_from(Some(&data[..]), &value, start) {
                let from = start.max(0) as usize;
                assert_eq!(data[i], value);
                assert!(i >= from);
                assert!(!data[from..i].contains(&value));
            }
        }
    }
}

#[test]
fn test_search_on_absent_and_empty() {
    let empty: [i32; 0] = [];
    assert_eq!(array::index_of::<i32>(None, &1), None);
    assert_eq!(array::index_of(Some(&empty[..]), &1), None);
    assert!(!array::contains::<i32>(None, &1));
    assert_eq!(array::last_index_of(Some(&[1, 2, 1][..]), &1), Some(2));
    assert_eq!(array::last_index_of_from(Some(&[1, 2, 1][..]), &1, 1), Some(0));
    assert_eq!(array::last_index_of_from(Some(&[1, 2, 1][..]), &1, -1), None);
}

#[test]
fn test_nullable_elements_compare_as_values() {
    let data = [Some("a"), None, Some("b")];
    assert_eq!(array::index_of(Some(&data[..]), &None), Some(1));
    assert_eq!(array::index_of(Some(&data[..]), &Some("b")), Some(2));
}

#[test]
fn test_tolerance_search() {
    let data = [1.0, 1.49, 2.0, 2.51];
    assert_eq!(array::index_of_tolerance(Some(&data[..]), 1.5, 0.02), Some(1));
    assert_eq!(array::index_of_tolerance(Some(&data[..]), 2.5, 0.0), None);
    assert_eq!(array::last_index_of_tolerance(Some(&data[..]), 2.0, 0.6), Some(3));
    assert!(array::contains_tolerance(Some(&data[..]), 0.9, 0.2));
}

#[test]
fn test_add_family() {
    assert_eq!(array::add(None, "x"), vec!["x"]);
    assert_eq!(array::add(Some(&["a"][..]), "b"), vec!["a", "b"]);

    assert_eq!(array::add_at(Some(&[1, 3][..]), 1, 2).unwrap(), vec![1, 2, 3]);
    assert_eq!(array::add_at(Some(&[1, 2][..]), 2, 3).unwrap(), vec![1, 2, 3]);
    assert_eq!(array::add_at::<i32>(None, 0, 9).unwrap(), vec![9]);
    assert_eq!(
        array::add_at(Some(&[1, 2][..]), 3, 0).unwrap_err(),
        UtilError::IndexOutOfBounds { index: 3, length: 2 }
    );

    assert_eq!(array::add_all(Some(&[1][..]), Some(&[2, 3][..])), Some(vec![1, 2, 3]));
    assert_eq!(array::add_all(None, Some(&[2][..])), Some(vec![2]));
    assert_eq!(array::add_all::<i32>(None, None), None);
}

#[test]
fn test_remove_family() {
    let data = ['a', 'b', 'c', 'd'];
    assert_eq!(array::remove(Some(&data[..]), 1).unwrap(), vec!['a', 'c', 'd']);

    let err = array::remove(Some(&data[..]), 4).unwrap_err();
    assert_eq!(err.to_string(), "Index: 4, Length: 4");
    assert!(err.is_index_error());
    assert!(array::remove::<char>(None, 0).is_err());

    assert_eq!(array::remove_all(Some(&data[..]), &[3, 0, 3]).unwrap(), vec!['b', 'c']);
    assert!(array::remove_all(Some(&data[..]), &[0, -1]).is_err());

    assert_eq!(array::remove_element(Some(&data[..]), &'c'), Some(vec!['a', 'b', 'd']));
    assert_eq!(array::remove_element(Some(&data[..]), &'z'), Some(data.to_vec()));
    assert_eq!(array::remove_element::<char>(None, &'a'), None);
}

#[test]
fn test_boxing() {
    let boxed = array::to_object(Some(&[1i16, 2][..])).unwrap();
    assert_eq!(boxed, vec![Some(1), Some(2)]);
    assert_eq!(array::to_primitive(Some(&boxed[..])).unwrap(), Some(vec![1, 2]));

    let holes = [Some(1), None, Some(3), None];
    assert_eq!(
        array::to_primitive(Some(&holes[..])).unwrap_err(),
        UtilError::NullElement { index: 1 }
    );
    assert_eq!(array::to_primitive_or(Some(&holes[..]), 0), Some(vec![1, 0, 3, 0]));
}

#[test]
fn test_length_queries_and_reverse() {
    assert_eq!(array::length::<u8>(None), 0);
    assert!(array::is_empty::<u8>(None));
    assert!(array::is_not_empty(Some(&[0u8][..])));
    assert!(array::is_same_length::<u8, char>(None, Some(&[][..])));
    assert!(!array::is_same_length(Some(&[1][..]), Some(&['a', 'b'][..])));
    assert!(array::null_to_empty::<u8>(None).is_empty());
    assert_eq!(array::clone_array(Some(&[1, 2][..])), Some(vec![1, 2]));

    let mut data = [1, 2, 3, 4, 5];
    array::reverse_range(&mut data, 1, 10);
    assert_eq!(data, [1, 5, 4, 3, 2]);
    array::reverse(&mut data);
    assert_eq!(data, [2, 3, 4, 5, 1]);
}
