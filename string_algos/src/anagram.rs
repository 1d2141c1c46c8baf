//! Anagram and permutation checks. All three compare multisets of symbols and
//! short-circuit to `false` on a length mismatch.

use crate::error::StringError;

/// Anagram check with a fixed 26-slot counter.
///
/// # Errors
///
/// Returns `StringError::PreconditionViolated` if the lengths match but either
/// string contains anything other than ASCII lowercase letters.
pub fn is_anagram_counting(s: &str, t: &str) -> Result<bool, StringError> {
    if s.len() != t.len() {
        return Ok(false);
    }
    let mut counter = [0i32; 26];
    for (a, b) in s.bytes().zip(t.bytes()) {
        if !a.is_ascii_lowercase() || !b.is_ascii_lowercase() {
            return Err(StringError::PreconditionViolated {
                reason: "counting anagram check accepts only ASCII lowercase letters",
            });
        }
        counter[usize::from(a - b'a')] += 1;
        counter[usize::from(b - b'a')] -= 1;
    }
    Ok(counter.iter().all(|&count| count == 0))
}

/// Anagram check by sorting both character sequences.
#[must_use]
pub fn is_anagram_sorted(s: &str, t: &str) -> bool {
    let mut s_chars: Vec<char> = s.chars().collect();
    let mut t_chars: Vec<char> = t.chars().collect();
    if s_chars.len() != t_chars.len() {
        return false;
    }
    s_chars.sort_unstable();
    t_chars.sort_unstable();
    s_chars == t_chars
}

/// Whether `t` is a rearrangement of the bytes of `s`.
///
/// Uses a 256-slot counter over UTF-8 bytes, incremented for `s` and
/// decremented for `t`; every slot must net to zero.
#[must_use]
pub fn is_permutation(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }
    let mut count = [0i32; 256];
    for b in s.bytes() {
        count[usize::from(b)] += 1;
    }
    for b in t.bytes() {
        count[usize::from(b)] -= 1;
    }
    count.iter().all(|&c| c == 0)
}
