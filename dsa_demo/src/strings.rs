use anyhow::Result;
use serde_json::{Map, Value};
use string_algos::{
    char_frequency, compress, contains_duplicate, edit_distance, int_to_string,
    is_anagram_counting, is_anagram_sorted, is_palindrome, is_permutation, is_rotation,
    longest_common_prefix, longest_palindromic_substring, longest_unique_substring_len,
    rabin_karp, remove_duplicate_chars, reverse_string, sliding_window_max_digits,
    string_to_int, substring_search,
};

use crate::report::Report;

const TOPIC: &str = "strings";

/// Runs every string routine on the fixed samples.
///
/// # Errors
///
/// Returns an error if a routine rejects its sample or a value cannot be
/// serialized.
pub fn report() -> Result<Report> {
    let mut report = Report::new();

    report.push(TOPIC, "isAnagram (counting)", is_anagram_counting("anagram", "nagaram")?)?;
    report.push(TOPIC, "isAnagram (sort)", is_anagram_sorted("listen", "silent"))?;
    report.push(TOPIC, "isPalindrome", is_palindrome("racecar"))?;
    report.push(TOPIC, "Reverse", reverse_string("hello"))?;
    report.push(
        TOPIC,
        "Index of 'ana' in 'banana'",
        substring_search("banana", "ana").map_or(-1, |i| i as i64),
    )?;

    let frequency: Map<String, Value> = char_frequency("hello world")
        .into_iter()
        .map(|(c, count)| (c.to_string(), Value::from(count)))
        .collect();
    report.push(TOPIC, "Char frequency", frequency)?;

    report.push(TOPIC, "Remove duplicates", remove_duplicate_chars("programming"))?;
    report.push(TOPIC, "String to int", string_to_int("-12345"))?;
    report.push(TOPIC, "Int to string", int_to_string(-6789))?;
    report.push(
        TOPIC,
        "Longest common prefix",
        longest_common_prefix(&["flower", "flow", "flight"]),
    )?;
    report.push(TOPIC, "Is rotation", is_rotation("waterbottle", "erbottlewat"))?;
    report.push(TOPIC, "Contains duplicate", contains_duplicate(&[1, 2, 3, 4, 4]))?;
    report.push(
        TOPIC,
        "Longest substring without repeating in 'abcabcbb'",
        longest_unique_substring_len("abcabcbb"),
    )?;
    report.push(
        TOPIC,
        "Longest palindromic substring in 'babad'",
        longest_palindromic_substring("babad"),
    )?;
    report.push(TOPIC, "Is permutation 'abc', 'cab'", is_permutation("abc", "cab"))?;
    report.push(TOPIC, "Compress 'aabcccccaaa'", compress("aabcccccaaa"))?;
    report.push(
        TOPIC,
        "Edit distance 'kitten' -> 'sitting'",
        edit_distance("kitten", "sitting"),
    )?;
    report.push(
        TOPIC,
        "Rabin-Karp index of 'ana' in 'banana'",
        rabin_karp("banana", "ana").map_or(-1, |i| i as i64),
    )?;
    report.push(
        TOPIC,
        "Sliding window max in '123459876' (k=3)",
        sliding_window_max_digits("123459876", 3)?,
    )?;

    Ok(report)
}
