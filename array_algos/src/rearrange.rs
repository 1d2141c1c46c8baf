//! In-place rearrangements. Length never changes; compaction reports a new
//! logical length and leaves the tail as unused padding.

/// Reverses a slice in place by swapping from both ends.
///
/// Generic over the element type, so it also serves text routines that work
/// on `char` buffers.
pub fn reverse<T>(arr: &mut [T]) {
    if arr.is_empty() {
        return;
    }
    let (mut l, mut r) = (0, arr.len() - 1);
    while l < r {
        arr.swap(l, r);
        l += 1;
        r -= 1;
    }
}

/// Moves every zero to the end, keeping the order of the non-zero elements.
pub fn move_zeroes(arr: &mut [i64]) {
    let mut idx = 0;
    for i in 0..arr.len() {
        if arr[i] != 0 {
            arr[idx] = arr[i];
            idx += 1;
        }
    }
    for slot in &mut arr[idx..] {
        *slot = 0;
    }
}

/// Compacts an ascending slice so each value appears once at the front.
///
/// Returns the new logical length. Slots past it keep stale values.
pub fn remove_duplicates_sorted(arr: &mut [i64]) -> usize {
    if arr.is_empty() {
        return 0;
    }
    let mut idx = 1;
    for i in 1..arr.len() {
        if arr[i] != arr[i - 1] {
            arr[idx] = arr[i];
            idx += 1;
        }
    }
    idx
}

/// Rotates right by `k` positions using three reversals.
///
/// `k` is taken modulo the length; an empty slice is left as is.
pub fn rotate_right(arr: &mut [i64], k: usize) {
    if arr.is_empty() {
        return;
    }
    let k = k % arr.len();
    reverse(arr);
    let (head, tail) = arr.split_at_mut(k);
    reverse(head);
    reverse(tail);
}

/// Rearranges into the next lexicographically greater permutation.
///
/// When the slice is already the greatest permutation it wraps around to the
/// ascending one. Returns `false` exactly in that wrapping case.
pub fn next_permutation(arr: &mut [i64]) -> bool {
    let n = arr.len();
    if n < 2 {
        return false;
    }

    // Rightmost i with arr[i] < arr[i + 1]
    let pivot = (0..n - 1).rev().find(|&i| arr[i] < arr[i + 1]);

    match pivot {
        Some(i) => {
            let mut j = n - 1;
            while arr[j] <= arr[i] {
                j -= 1;
            }
            arr.swap(i, j);
            reverse(&mut arr[i + 1..]);
            true
        }
        None => {
            reverse(arr);
            false
        }
    }
}
