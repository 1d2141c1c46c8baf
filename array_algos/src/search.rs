use crate::error::ArrayError;

/// Returns the smallest element.
///
/// # Errors
///
/// Returns `ArrayError::EmptyInput` if `arr` is empty.
pub fn find_min(arr: &[i64]) -> Result<i64, ArrayError> {
    let (&first, rest) = arr.split_first().ok_or(ArrayError::EmptyInput)?;
    Ok(rest.iter().fold(first, |min, &n| min.min(n)))
}

/// Returns the largest element.
///
/// # Errors
///
/// Returns `ArrayError::EmptyInput` if `arr` is empty.
pub fn find_max(arr: &[i64]) -> Result<i64, ArrayError> {
    let (&first, rest) = arr.split_first().ok_or(ArrayError::EmptyInput)?;
    Ok(rest.iter().fold(first, |max, &n| max.max(n)))
}

/// Iterative binary search over an ascending slice.
///
/// Returns the index of an element equal to `target`, or `None`.
/// With duplicates, any matching index may be returned.
#[must_use]
pub fn binary_search(arr: &[i64], target: i64) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        match arr[m].cmp(&target) {
            core::cmp::Ordering::Equal => return Some(m),
            core::cmp::Ordering::Less => l = m + 1,
            core::cmp::Ordering::Greater => r = m,
        }
    }
    None
}

/// Recursive binary search, same contract as [`binary_search`].
#[must_use]
pub fn binary_search_recursive(arr: &[i64], target: i64) -> Option<usize> {
    search_half_open(arr, target, 0, arr.len())
}

fn search_half_open(arr: &[i64], target: i64, l: usize, r: usize) -> Option<usize> {
    if l >= r {
        return None;
    }
    let m = l + (r - l) / 2;
    match arr[m].cmp(&target) {
        core::cmp::Ordering::Equal => Some(m),
        core::cmp::Ordering::Less => search_half_open(arr, target, m + 1, r),
        core::cmp::Ordering::Greater => search_half_open(arr, target, l, m),
    }
}

/// Returns the `k`-th largest element (1-based) using quickselect.
///
/// The slice is partially reordered as a side effect.
///
/// # Errors
///
/// Returns `ArrayError::OrderOutOfRange` if `k` is 0 or greater than the length.
pub fn kth_largest(arr: &mut [i64], k: usize) -> Result<i64, ArrayError> {
    check_order(arr.len(), k)?;
    let target = arr.len() - k;
    Ok(quickselect(arr, target))
}

/// Returns the `k`-th smallest element (1-based) using quickselect.
///
/// The slice is partially reordered as a side effect.
///
/// # Errors
///
/// Returns `ArrayError::OrderOutOfRange` if `k` is 0 or greater than the length.
pub fn kth_smallest(arr: &mut [i64], k: usize) -> Result<i64, ArrayError> {
    check_order(arr.len(), k)?;
    Ok(quickselect(arr, k - 1))
}

fn check_order(length: usize, k: usize) -> Result<(), ArrayError> {
    if k == 0 || k > length {
        return Err(ArrayError::OrderOutOfRange { k, length });
    }
    Ok(())
}

// `index` must be within `arr`; callers go through `check_order`.
fn quickselect(arr: &mut [i64], index: usize) -> i64 {
    let mut window = arr;
    let mut index = index;
    loop {
        if window.len() == 1 {
            return window[0];
        }
        let p = partition(window);
        if index == p {
            return window[p];
        }
        let current = window;
        if index < p {
            window = &mut current[..p];
        } else {
            window = &mut current[p + 1..];
            index -= p + 1;
        }
    }
}

/// Lomuto partition around the last element. Elements `<=` pivot go left.
fn partition(arr: &mut [i64]) -> usize {
    let pivot_index = arr.len() - 1;
    let mut store = 0;
    for j in 0..pivot_index {
        if arr[j] <= arr[pivot_index] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, pivot_index);
    store
}
