use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

/// Occurrences of each character.
///
/// Keys come back in first-occurrence order; callers should not rely on the
/// order for anything but stable printing.
#[must_use]
pub fn char_frequency(s: &str) -> IndexMap<char, usize> {
    let mut freq = IndexMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Drops repeated characters, keeping each first occurrence in place.
#[must_use]
pub fn remove_duplicate_chars(s: &str) -> String {
    let seen: IndexSet<char> = s.chars().collect();
    seen.into_iter().collect()
}

/// Whether any value appears more than once.
#[must_use]
pub fn contains_duplicate(nums: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(nums.len());
    nums.iter().any(|n| !seen.insert(n))
}
