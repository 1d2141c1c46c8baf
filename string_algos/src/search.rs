//! Substring search over UTF-8 bytes. Both searches return the byte offset of
//! the first occurrence, and an empty needle matches at offset 0.

const BASE: i64 = 256;
const MODULUS: i64 = 101;

/// Brute-force search, O(n·m).
#[must_use]
pub fn substring_search(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let p = needle.as_bytes();
    if p.len() > h.len() {
        return None;
    }
    (0..=h.len() - p.len()).find(|&i| &h[i..i + p.len()] == p)
}

/// Rabin-Karp search with a rolling polynomial hash (base 256, modulus 101).
///
/// Equal hashes are only candidates: each one is confirmed by comparing the
/// bytes, so collisions never produce a false match.
#[must_use]
pub fn rabin_karp(haystack: &str, needle: &str) -> Option<usize> {
    let t = haystack.as_bytes();
    let p = needle.as_bytes();
    let (n, m) = (t.len(), p.len());
    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    // BASE^(m-1) mod MODULUS, weight of the byte leaving the window
    let mut high = 1;
    for _ in 1..m {
        high = (high * BASE) % MODULUS;
    }

    let mut hash_p = 0;
    let mut hash_t = 0;
    for i in 0..m {
        hash_p = (BASE * hash_p + i64::from(p[i])) % MODULUS;
        hash_t = (BASE * hash_t + i64::from(t[i])) % MODULUS;
    }

    for i in 0..=n - m {
        if hash_p == hash_t && &t[i..i + m] == p {
            return Some(i);
        }
        if i < n - m {
            hash_t = (BASE * (hash_t - i64::from(t[i]) * high) + i64::from(t[i + m])) % MODULUS;
            if hash_t < 0 {
                hash_t += MODULUS;
            }
        }
    }
    None
}
