/// Whether `s` reads the same forwards and backwards, character by character.
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Longest string that every input starts with.
///
/// Starts from the first string and drops its last character until the next
/// input starts with it. An empty input set gives an empty prefix.
#[must_use]
pub fn longest_common_prefix<S: AsRef<str>>(strs: &[S]) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return String::new();
    };
    let mut prefix = first.as_ref();
    for s in rest {
        let s = s.as_ref();
        while !s.starts_with(prefix) {
            let Some(last) = prefix.chars().next_back() else {
                return String::new();
            };
            prefix = &prefix[..prefix.len() - last.len_utf8()];
        }
    }
    prefix.to_string()
}

/// Whether `goal` is `s` rotated by some offset.
#[must_use]
pub fn is_rotation(s: &str, goal: &str) -> bool {
    s.len() == goal.len() && format!("{s}{s}").contains(goal)
}

/// Levenshtein distance with unit costs, full dynamic-programming table.
#[must_use]
pub fn edit_distance(word1: &str, word2: &str) -> usize {
    let a: Vec<char> = word1.chars().collect();
    let b: Vec<char> = word2.chars().collect();
    let (m, n) = (a.len(), b.len());

    // dp[i][j]: distance between a[..i] and b[..j]
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j - 1].min(dp[i - 1][j]).min(dp[i][j - 1])
            };
        }
    }
    dp[m][n]
}
