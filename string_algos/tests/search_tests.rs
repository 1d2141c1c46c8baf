use string_algos::{rabin_karp, substring_search};

#[test]
fn test_substring_search() {
    assert_eq!(substring_search("banana", "ana"), Some(1));
    assert_eq!(substring_search("banana", "nana"), Some(2));
    assert_eq!(substring_search("banana", "band"), None);
}

#[test]
fn test_rabin_karp() {
    assert_eq!(rabin_karp("banana", "ana"), Some(1));
    assert_eq!(rabin_karp("hello world", "world"), Some(6));
    assert_eq!(rabin_karp("hello world", "worlds"), None);
}

#[test]
fn test_search_edge_cases() {
    for search in [substring_search, rabin_karp] {
        assert_eq!(search("abc", ""), Some(0));
        assert_eq!(search("", ""), Some(0));
        assert_eq!(search("", "a"), None);
        assert_eq!(search("ab", "abc"), None);
        assert_eq!(search("abc", "abc"), Some(0));
        assert_eq!(search("aaab", "ab"), Some(2));
    }
}

#[test]
fn test_rabin_karp_rejects_hash_collisions() {
    // With modulus 101, many distinct windows share a hash. Search a needle
    // that is absent in a long haystack of varied windows.
    let haystack: String = (0..2000u32)
        .map(|i| char::from(b'a' + (i * 7 % 26) as u8))
        .collect();
    let needle = "zzzz";
    assert_eq!(substring_search(&haystack, needle), None);
    assert_eq!(rabin_karp(&haystack, needle), None);
}

#[test]
fn test_rabin_karp_agrees_with_naive_search() {
    let cases = [
        ("abracadabra", "cad"),
        ("abracadabra", "abra"),
        ("abracadabra", "dab"),
        ("mississippi", "issip"),
        ("mississippi", "ppi"),
        ("mississippi", "pis"),
        ("aaaaaaaaaa", "aaa"),
        ("the quick brown fox", "fox"),
        ("the quick brown fox", "The"),
        ("naïve café", "café"),
    ];
    for (haystack, needle) in cases {
        assert_eq!(
            rabin_karp(haystack, needle),
            substring_search(haystack, needle),
            "{haystack:?} / {needle:?}"
        );
        assert_eq!(rabin_karp(haystack, needle), haystack.find(needle));
    }
}

#[test]
fn test_search_returns_byte_offsets() {
    let haystack = "naïve café";
    let idx = rabin_karp(haystack, "café").unwrap();
    assert_eq!(&haystack[idx..], "café");
}
