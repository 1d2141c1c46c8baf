use std::collections::{HashMap, VecDeque};

use crate::error::StringError;

/// Length in characters of the longest substring with no repeated character.
///
/// Sliding window; the left edge jumps past the last sighting of a repeated
/// character, but never moves backwards.
#[must_use]
pub fn longest_unique_substring_len(s: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut left = 0;
    let mut longest = 0;
    for (right, c) in s.chars().enumerate() {
        if let Some(&prev) = last_seen.get(&c) {
            if prev >= left {
                left = prev + 1;
            }
        }
        last_seen.insert(c, right);
        longest = longest.max(right - left + 1);
    }
    longest
}

/// Longest palindromic substring by expanding around every center.
///
/// Both odd (single character) and even (between two characters) centers are
/// tried. On ties the first palindrome found wins.
#[must_use]
pub fn longest_palindromic_substring(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let (mut best_start, mut best_len) = (0, 0);
    for i in 0..chars.len() {
        for (l, r) in [(i, i + 1), (i + 1, i + 1)] {
            let (start, len) = expand_from_center(&chars, l, r);
            if len > best_len {
                best_start = start;
                best_len = len;
            }
        }
    }
    chars[best_start..best_start + best_len].iter().collect()
}

/// Grows the palindrome `chars[l..r]` outwards while both ends match.
///
/// Returns the start and length of the widest palindrome found.
fn expand_from_center(chars: &[char], mut l: usize, mut r: usize) -> (usize, usize) {
    while l > 0 && r < chars.len() && chars[l - 1] == chars[r] {
        l -= 1;
        r += 1;
    }
    (l, r - l)
}

/// Maximum digit in every window of `k` characters of a digit string.
///
/// An unusable window size (0 or longer than the string) yields an empty
/// result, as the array version does.
///
/// # Errors
///
/// Returns `StringError::NotADigit` if `s` contains anything other than
/// ASCII digits.
pub fn sliding_window_max_digits(s: &str, k: usize) -> Result<Vec<u32>, StringError> {
    match try_sliding_window_max_digits(s, k) {
        Err(StringError::InvalidWindowSize { .. }) => Ok(Vec::new()),
        other => other,
    }
}

/// Like [`sliding_window_max_digits`], but rejects an unusable window size.
///
/// # Errors
///
/// Returns `StringError::NotADigit` for a non-digit character, then
/// `StringError::InvalidWindowSize` if `k` is 0 or exceeds the length.
pub fn try_sliding_window_max_digits(s: &str, k: usize) -> Result<Vec<u32>, StringError> {
    let digits = s
        .chars()
        .enumerate()
        .map(|(index, found)| {
            found
                .to_digit(10)
                .ok_or(StringError::NotADigit { index, found })
        })
        .collect::<Result<Vec<u32>, StringError>>()?;

    if k == 0 || k > digits.len() {
        return Err(StringError::InvalidWindowSize {
            window: k,
            length: digits.len(),
        });
    }

    let mut res = Vec::with_capacity(digits.len() - k + 1);
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(k);
    for (i, &d) in digits.iter().enumerate() {
        if dq.front().is_some_and(|&front| front + k <= i) {
            dq.pop_front();
        }
        // Equal digits are dropped too; the newer index lives longer
        while dq.back().is_some_and(|&back| digits[back] <= d) {
            dq.pop_back();
        }
        dq.push_back(i);
        if i + 1 >= k {
            if let Some(&front) = dq.front() {
                res.push(digits[front]);
            }
        }
    }
    Ok(res)
}
