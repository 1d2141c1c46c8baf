use string_algos::{edit_distance, is_palindrome, is_rotation, longest_common_prefix};

#[test]
fn test_is_palindrome() {
    assert!(is_palindrome("racecar"));
    assert!(is_palindrome("abba"));
    assert!(is_palindrome("a"));
    assert!(is_palindrome(""));
    assert!(!is_palindrome("hello"));
    assert!(!is_palindrome("ab"));
}

#[test]
fn test_is_palindrome_is_case_sensitive() {
    assert!(!is_palindrome("Racecar"));
    assert!(is_palindrome("kajak"));
    assert!(is_palindrome("żółóż"));
}

#[test]
fn test_longest_common_prefix() {
    assert_eq!(longest_common_prefix(&["flower", "flow", "flight"]), "fl");
    assert_eq!(longest_common_prefix(&["interview", "internet", "interval"]), "inter");
}

#[test]
fn test_longest_common_prefix_none_shared() {
    assert_eq!(longest_common_prefix(&["dog", "racecar", "car"]), "");
    assert_eq!(longest_common_prefix(&["", "abc"]), "");
}

#[test]
fn test_longest_common_prefix_degenerate_sets() {
    let empty: [&str; 0] = [];
    assert_eq!(longest_common_prefix(&empty), "");
    assert_eq!(longest_common_prefix(&["alone"]), "alone");
    assert_eq!(longest_common_prefix(&["same", "same"]), "same");
}

#[test]
fn test_longest_common_prefix_owned_strings() {
    let strs = vec![String::from("prefix"), String::from("prefab"), String::from("pref")];
    assert_eq!(longest_common_prefix(&strs), "pref");
}

#[test]
fn test_is_rotation() {
    assert!(is_rotation("waterbottle", "erbottlewat"));
    assert!(is_rotation("abc", "abc"));
    assert!(is_rotation("", ""));
    assert!(!is_rotation("abc", "acb"));
    assert!(!is_rotation("abc", "abca"));
    assert!(!is_rotation("aa", "a"));
}

#[test]
fn test_edit_distance() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("horse", "ros"), 3);
    assert_eq!(edit_distance("intention", "execution"), 5);
}

#[test]
fn test_edit_distance_against_empty() {
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("", ""), 0);
    assert_eq!(edit_distance("same", "same"), 0);
}

#[test]
fn test_edit_distance_is_symmetric() {
    let words = ["kitten", "sitting", "flaw", "lawn", "", "a"];
    for a in words {
        for b in words {
            assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a:?} / {b:?}");
        }
    }
}
