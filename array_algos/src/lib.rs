//! `array_algos`: classical algorithms over slices of signed integers.
//!
//! Every routine is a free function over `&[i64]` or `&mut [i64]` with no
//! hidden state. Routines that rearrange their input do so in place and never
//! change its length.
//!
//! # Complexity Overview
//!
//! ## Linear scans, O(n)
//! - `find_min()`, `find_max()`, `max_subarray_sum()` (Kadane), `prefix_sum()`
//! - `product_except_self()`: two passes, no division
//! - `majority_element()`: Boyer-Moore voting, no verification pass
//! - `trap_rain_water()`: two pointers with running maxima
//! - `missing_number()`: arithmetic series subtraction
//! - `find_duplicate()`: Floyd's cycle detection over values used as indices
//!
//! ## Hashing, O(n) average
//! - `two_sum()`, `subarray_sum_count()`, `longest_consecutive()`
//!
//! ## Searching and selection
//! - `binary_search()`, `binary_search_recursive()`: O(log n) on ascending input
//! - `kth_largest()`, `kth_smallest()`: quickselect, average O(n), worst O(n²)
//!
//! ## Windows and intervals
//! - `max_sliding_window()`: monotonic deque, O(n)
//! - `merge_intervals()`: O(n log n) for the sort, then one pass
//!
//! # Error Handling
//!
//! Empty input where an element is required, window sizes that do not fit, and
//! out-of-range order statistics are reported as [`ArrayError`]. Routines with a
//! natural sentinel return `Option` or an empty `Vec` instead.
//!
//! No routine panics on extreme values. Sums and products wrap as two's
//! complement `i64`, in debug and release builds alike, while neighbour
//! lookups (`x - 1`, `x + 1`, `target - x`) stop at the `i64` bounds.
//!
//! ```
//! use array_algos::{find_max, kth_largest, ArrayError};
//!
//! let mut arr = [3, 1, 4, 1, 5, 9, 2, 6, 5];
//! assert_eq!(find_max(&arr), Ok(9));
//! assert_eq!(kth_largest(&mut arr, 2), Ok(6));
//!
//! assert_eq!(find_max(&[]), Err(ArrayError::EmptyInput));
//! assert_eq!(
//!     kth_largest(&mut arr, 10),
//!     Err(ArrayError::OrderOutOfRange { k: 10, length: 9 })
//! );
//! ```
//!
//! # In-place Rearrangement
//!
//! ```
//! use array_algos::{next_permutation, remove_duplicates_sorted, rotate_right};
//!
//! let mut arr = [1, 2, 3, 4, 5, 6, 7];
//! rotate_right(&mut arr, 3);
//! assert_eq!(arr, [5, 6, 7, 1, 2, 3, 4]);
//!
//! let mut sorted = [1, 2, 2, 3, 4, 5, 5, 6, 9];
//! let len = remove_duplicates_sorted(&mut sorted);
//! assert_eq!(&sorted[..len], &[1, 2, 3, 4, 5, 6, 9]);
//!
//! // The greatest permutation wraps around to the smallest one
//! let mut perm = [3, 2, 1];
//! assert!(!next_permutation(&mut perm));
//! assert_eq!(perm, [1, 2, 3]);
//! ```
//!
//! # Intervals
//!
//! ```
//! use array_algos::{merge_intervals, Interval};
//!
//! let intervals = vec![(1, 3), (2, 6), (8, 10), (15, 18)]
//!     .into_iter()
//!     .map(Interval::from)
//!     .collect();
//! let merged: Vec<(i64, i64)> = merge_intervals(intervals)
//!     .into_iter()
//!     .map(Into::into)
//!     .collect();
//! assert_eq!(merged, vec![(1, 6), (8, 10), (15, 18)]);
//! ```

mod error;
mod hashing;
mod interval;
mod rearrange;
mod scan;
mod search;
mod window;

pub use error::ArrayError;
pub use hashing::{longest_consecutive, subarray_sum_count, two_sum};
pub use interval::{merge_intervals, Interval};
pub use rearrange::{move_zeroes, next_permutation, remove_duplicates_sorted, reverse, rotate_right};
pub use scan::{
    find_duplicate, majority_element, max_subarray_sum, missing_number, prefix_sum,
    product_except_self, trap_rain_water,
};
pub use search::{
    binary_search, binary_search_recursive, find_max, find_min, kth_largest, kth_smallest,
};
pub use window::{max_sliding_window, try_max_sliding_window};
