//! `string_algos`: classical string algorithms.
//!
//! All routines take `&str` and leave it untouched; routines that rebuild text
//! return a fresh `String`.
//!
//! # Characters and Bytes
//!
//! Character-level routines (palindromes, reversal, frequencies, windows, edit
//! distance, compression) work on Unicode scalar values. Substring search and
//! the 256-slot permutation check work on UTF-8 bytes, and search results are
//! byte offsets, so they can be used to slice the haystack directly:
//!
//! ```
//! use string_algos::{rabin_karp, substring_search};
//!
//! let haystack = "banana";
//! assert_eq!(substring_search(haystack, "ana"), Some(1));
//! assert_eq!(rabin_karp(haystack, "ana"), Some(1));
//! assert_eq!(rabin_karp(haystack, "nab"), None);
//! ```
//!
//! # Rabin-Karp
//!
//! The rolling hash uses base 256 and the small prime modulus 101, so hash
//! collisions are common. Every equal-hash window
//! is confirmed by a byte comparison; the result always agrees with the naive
//! search.
//!
//! # Error Handling
//!
//! Inputs outside a routine's alphabet are reported as [`StringError`]:
//!
//! ```
//! use string_algos::{is_anagram_counting, sliding_window_max_digits, StringError};
//!
//! assert_eq!(is_anagram_counting("anagram", "nagaram"), Ok(true));
//! assert!(matches!(
//!     is_anagram_counting("Abc", "cbA"),
//!     Err(StringError::PreconditionViolated { .. })
//! ));
//!
//! assert_eq!(sliding_window_max_digits("123459876", 3), Ok(vec![3, 4, 5, 9, 9, 9, 8]));
//! assert_eq!(
//!     sliding_window_max_digits("12x", 2),
//!     Err(StringError::NotADigit { index: 2, found: 'x' })
//! );
//! ```
//!
//! # Parsing
//!
//! `string_to_int()` mirrors C's `atoi`: it stops at the first non-digit and
//! wraps on overflow instead of failing.
//!
//! ```
//! use string_algos::string_to_int;
//!
//! assert_eq!(string_to_int("  -12345"), -12345);
//! assert_eq!(string_to_int("42abc"), 42);
//! assert_eq!(string_to_int("abc"), 0);
//! ```

mod anagram;
mod compare;
mod convert;
mod counting;
mod error;
mod search;
mod transform;
mod window;

pub use anagram::{is_anagram_counting, is_anagram_sorted, is_permutation};
pub use compare::{edit_distance, is_palindrome, is_rotation, longest_common_prefix};
pub use convert::{int_to_string, string_to_int};
pub use counting::{char_frequency, contains_duplicate, remove_duplicate_chars};
pub use error::StringError;
pub use search::{rabin_karp, substring_search};
pub use transform::{compress, reverse_string};
pub use window::{
    longest_palindromic_substring, longest_unique_substring_len, sliding_window_max_digits,
    try_sliding_window_max_digits,
};
