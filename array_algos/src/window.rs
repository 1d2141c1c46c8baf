use std::collections::VecDeque;

use crate::error::ArrayError;

/// Maximum of every window of `k` consecutive elements.
///
/// Keeps a deque of indices whose values decrease from front to back, so each
/// index is pushed and popped at most once. Returns an empty vector when `k`
/// is 0 or larger than the input.
#[must_use]
pub fn max_sliding_window(arr: &[i64], k: usize) -> Vec<i64> {
    try_max_sliding_window(arr, k).unwrap_or_default()
}

/// Like [`max_sliding_window`], but rejects an unusable window size.
///
/// # Errors
///
/// Returns `ArrayError::InvalidWindowSize` if `k` is 0 or exceeds the length.
pub fn try_max_sliding_window(arr: &[i64], k: usize) -> Result<Vec<i64>, ArrayError> {
    if k == 0 || k > arr.len() {
        return Err(ArrayError::InvalidWindowSize {
            window: k,
            length: arr.len(),
        });
    }

    let mut res = Vec::with_capacity(arr.len() - k + 1);
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(k);
    for (i, &n) in arr.iter().enumerate() {
        // Drop the index that slid out of the window
        if dq.front().is_some_and(|&front| front + k <= i) {
            dq.pop_front();
        }
        while dq.back().is_some_and(|&back| arr[back] < n) {
            dq.pop_back();
        }
        dq.push_back(i);
        if i + 1 >= k {
            if let Some(&front) = dq.front() {
                res.push(arr[front]);
            }
        }
    }
    Ok(res)
}
