use std::collections::{HashMap, HashSet};

/// Finds two positions whose values add up to `target`.
///
/// Single pass with a value-to-index map. The returned pair has the earliest
/// possible second index; for a repeated value the map keeps the index where
/// it was first seen. A complement outside the `i64` range cannot be in the
/// slice, so that element only gets recorded.
#[must_use]
pub fn two_sum(arr: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(arr.len());
    for (i, &n) in arr.iter().enumerate() {
        let partner = target.checked_sub(n).and_then(|complement| seen.get(&complement));
        if let Some(&j) = partner {
            return Some((j, i));
        }
        seen.entry(n).or_insert(i);
    }
    None
}

/// Counts contiguous runs that sum exactly to `k`.
///
/// Works with negative values, since it counts matching prefix sums rather
/// than growing and shrinking a window. Prefix sums wrap on `i64` overflow, so
/// a run counts when its sum equals `k` modulo 2^64.
#[must_use]
pub fn subarray_sum_count(arr: &[i64], k: i64) -> usize {
    let mut prefix_counts: HashMap<i64, usize> = HashMap::new();
    prefix_counts.insert(0, 1);
    let mut sum: i64 = 0;
    let mut count = 0;
    for &n in arr {
        sum = sum.wrapping_add(n);
        count += prefix_counts.get(&sum.wrapping_sub(k)).copied().unwrap_or(0);
        *prefix_counts.entry(sum).or_insert(0) += 1;
    }
    count
}

/// Length of the longest run of consecutive integers, in any order.
///
/// Runs end at the `i64` bounds; `i64::MAX` and `i64::MIN` are not adjacent.
#[must_use]
pub fn longest_consecutive(arr: &[i64]) -> usize {
    let set: HashSet<i64> = arr.iter().copied().collect();
    let mut longest = 0;
    for &n in &set {
        // Only count from the start of a run
        if n.checked_sub(1).is_some_and(|prev| set.contains(&prev)) {
            continue;
        }
        let mut len = 1;
        let mut curr = n;
        while let Some(next) = curr.checked_add(1).filter(|next| set.contains(next)) {
            curr = next;
            len += 1;
        }
        longest = longest.max(len);
    }
    longest
}
