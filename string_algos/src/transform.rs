use array_algos::reverse;

/// Returns the characters of `s` in reverse order.
#[must_use]
pub fn reverse_string(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    reverse(&mut chars);
    chars.into_iter().collect()
}

/// Run-length encoding, `aabcccccaaa` becomes `a2b1c5a3`.
///
/// The encoded form is returned only when it has strictly fewer characters
/// than `s`; otherwise `s` comes back unchanged, so the result is never longer.
#[must_use]
pub fn compress(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    let mut encoded_chars = 0;
    let mut original_chars = 0;

    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }
        original_chars += run;

        let count = run.to_string();
        encoded.push(c);
        encoded.push_str(&count);
        // Counts are ASCII digits, one char per byte
        encoded_chars += 1 + count.len();
    }

    if encoded_chars < original_chars {
        encoded
    } else {
        s.to_string()
    }
}
