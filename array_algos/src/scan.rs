use crate::error::ArrayError;

/// Kadane's algorithm: the largest sum of any non-empty contiguous run.
///
/// Running sums wrap on `i64` overflow, like every accumulator in this module.
///
/// # Errors
///
/// Returns `ArrayError::EmptyInput` if `arr` is empty.
pub fn max_subarray_sum(arr: &[i64]) -> Result<i64, ArrayError> {
    let (&first, rest) = arr.split_first().ok_or(ArrayError::EmptyInput)?;
    let mut best = first;
    let mut ending_here = first;
    for &n in rest {
        ending_here = n.max(ending_here.wrapping_add(n));
        best = best.max(ending_here);
    }
    Ok(best)
}

/// Running totals, `out[i] = arr[0] + ... + arr[i]`, wrapping on overflow.
#[must_use]
pub fn prefix_sum(arr: &[i64]) -> Vec<i64> {
    arr.iter()
        .scan(0i64, |acc, &n| {
            *acc = acc.wrapping_add(n);
            Some(*acc)
        })
        .collect()
}

/// For each position, the product of all other elements. No division.
///
/// Products wrap on overflow.
#[must_use]
pub fn product_except_self(arr: &[i64]) -> Vec<i64> {
    let mut res = vec![1i64; arr.len()];

    let mut left: i64 = 1;
    for (slot, &n) in res.iter_mut().zip(arr) {
        *slot = left;
        left = left.wrapping_mul(n);
    }

    let mut right: i64 = 1;
    for (slot, &n) in res.iter_mut().zip(arr).rev() {
        *slot = slot.wrapping_mul(right);
        right = right.wrapping_mul(n);
    }
    res
}

/// Boyer-Moore voting.
///
/// Assumes a majority element exists; the candidate is not verified, so for
/// inputs without one the result is just the last surviving candidate.
///
/// # Errors
///
/// Returns `ArrayError::EmptyInput` if `arr` is empty.
pub fn majority_element(arr: &[i64]) -> Result<i64, ArrayError> {
    if arr.is_empty() {
        return Err(ArrayError::EmptyInput);
    }
    let mut candidate = 0;
    let mut count = 0i64;
    for &n in arr {
        if count == 0 {
            candidate = n;
        }
        count += if n == candidate { 1 } else { -1 };
    }
    Ok(candidate)
}

/// The one value of `0..=n` absent from `arr`, where `n = arr.len()`.
///
/// Assumes exactly one value is missing and there are no duplicates. Sums
/// wrap, which leaves the difference exact.
#[must_use]
pub fn missing_number(arr: &[i64]) -> i64 {
    let n = arr.len() as i64;
    let total = n.wrapping_mul(n.wrapping_add(1)) / 2;
    arr.iter().fold(total, |acc, &v| acc.wrapping_sub(v))
}

/// Floyd's tortoise and hare over the "value is the next index" graph.
///
/// # Errors
///
/// Returns `ArrayError::PreconditionViolated` unless the array has at least two
/// elements and every value lies in `1..len`.
pub fn find_duplicate(arr: &[i64]) -> Result<i64, ArrayError> {
    if arr.len() < 2 {
        return Err(ArrayError::PreconditionViolated {
            reason: "duplicate search needs at least two elements",
        });
    }
    let links = arr
        .iter()
        .map(|&v| usize::try_from(v).ok().filter(|&i| i >= 1 && i < arr.len()))
        .collect::<Option<Vec<usize>>>()
        .ok_or(ArrayError::PreconditionViolated {
            reason: "every value must be a valid index in 1..len",
        })?;

    let mut slow = links[0];
    let mut fast = links[0];
    loop {
        slow = links[slow];
        fast = links[links[fast]];
        if slow == fast {
            break;
        }
    }

    slow = links[0];
    while slow != fast {
        slow = links[slow];
        fast = links[fast];
    }
    Ok(slow as i64)
}

/// Water trapped between bars of the given heights. Two pointers, O(1) space.
///
/// The total wraps on overflow.
#[must_use]
pub fn trap_rain_water(heights: &[i64]) -> i64 {
    if heights.is_empty() {
        return 0;
    }
    let (mut l, mut r) = (0, heights.len() - 1);
    let (mut left_max, mut right_max): (i64, i64) = (0, 0);
    let mut water: i64 = 0;
    while l < r {
        if heights[l] < heights[r] {
            if heights[l] >= left_max {
                left_max = heights[l];
            } else {
                water = water.wrapping_add(left_max.wrapping_sub(heights[l]));
            }
            l += 1;
        } else {
            if heights[r] >= right_max {
                right_max = heights[r];
            } else {
                water = water.wrapping_add(right_max.wrapping_sub(heights[r]));
            }
            r -= 1;
        }
    }
    water
}
