use array_algos::{
    binary_search, binary_search_recursive, find_max, find_min, kth_largest, kth_smallest,
    ArrayError,
};

#[test]
fn test_min_and_max() {
    let arr = [3, 1, 4, 1, 5, 9, 2, 6, 5];
    assert_eq!(find_min(&arr), Ok(1));
    assert_eq!(find_max(&arr), Ok(9));
}

#[test]
fn test_min_and_max_negative_values() {
    let arr = [-7, -3, -12, -1];
    assert_eq!(find_min(&arr), Ok(-12));
    assert_eq!(find_max(&arr), Ok(-1));
}

#[test]
fn test_min_and_max_single_element() {
    assert_eq!(find_min(&[42]), Ok(42));
    assert_eq!(find_max(&[42]), Ok(42));
}

#[test]
fn test_min_and_max_reject_empty_input() {
    assert_eq!(find_min(&[]), Err(ArrayError::EmptyInput));
    assert_eq!(find_max(&[]), Err(ArrayError::EmptyInput));
}

#[test]
fn test_binary_search_finds_every_element() {
    let arr = [1, 3, 5, 7, 9, 11, 13];
    for (i, &value) in arr.iter().enumerate() {
        assert_eq!(binary_search(&arr, value), Some(i), "value {value}");
        assert_eq!(binary_search_recursive(&arr, value), Some(i), "value {value}");
    }
}

#[test]
fn test_binary_search_absent_values() {
    let arr = [1, 3, 5, 7, 9];
    for value in [0, 2, 4, 6, 8, 10, -5] {
        assert_eq!(binary_search(&arr, value), None);
        assert_eq!(binary_search_recursive(&arr, value), None);
    }
}

#[test]
fn test_binary_search_with_duplicates() {
    let sorted = [1, 2, 2, 3, 4, 5, 5, 6, 9];
    let idx = binary_search(&sorted, 5).unwrap();
    assert_eq!(sorted[idx], 5);
    let idx = binary_search_recursive(&sorted, 2).unwrap();
    assert_eq!(sorted[idx], 2);
}

#[test]
fn test_binary_search_empty() {
    assert_eq!(binary_search(&[], 1), None);
    assert_eq!(binary_search_recursive(&[], 1), None);
}

#[test]
fn test_kth_largest_and_smallest() {
    let arr = [3, 1, 4, 1, 5, 9, 2, 6, 5];
    assert_eq!(kth_largest(&mut arr.clone(), 2), Ok(6));
    assert_eq!(kth_smallest(&mut arr.clone(), 3), Ok(2));
}

#[test]
fn test_kth_matches_sorted_order() {
    let arr = [7, -2, 7, 0, 13, 4, 4, -9, 1];
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();

    for k in 1..=arr.len() {
        assert_eq!(kth_smallest(&mut arr.clone(), k), Ok(sorted[k - 1]), "k = {k}");
        assert_eq!(
            kth_largest(&mut arr.clone(), k),
            Ok(sorted[arr.len() - k]),
            "k = {k}"
        );
    }
}

#[test]
fn test_kth_all_equal() {
    let mut arr = [5, 5, 5, 5];
    assert_eq!(kth_largest(&mut arr, 1), Ok(5));
    assert_eq!(kth_smallest(&mut arr, 4), Ok(5));
}

#[test]
fn test_kth_keeps_elements() {
    let mut arr = [3, 1, 4, 1, 5, 9, 2, 6, 5];
    kth_largest(&mut arr, 4).unwrap();
    let mut after = arr.to_vec();
    after.sort_unstable();
    assert_eq!(after, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
}

#[test]
fn test_kth_out_of_range() {
    let mut arr = [1, 2, 3];
    assert_eq!(
        kth_largest(&mut arr, 0),
        Err(ArrayError::OrderOutOfRange { k: 0, length: 3 })
    );
    assert_eq!(
        kth_smallest(&mut arr, 4),
        Err(ArrayError::OrderOutOfRange { k: 4, length: 3 })
    );
    assert_eq!(
        kth_smallest(&mut [], 1),
        Err(ArrayError::OrderOutOfRange { k: 1, length: 0 })
    );
}
