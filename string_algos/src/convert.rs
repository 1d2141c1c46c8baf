/// Parses a leading decimal integer, `atoi` style.
///
/// Surrounding whitespace is trimmed, one optional `+` or `-` is accepted, and
/// ASCII digits are consumed up to the first non-digit. Input without leading
/// digits yields 0.
///
/// There is no overflow check: accumulation wraps as 32-bit two's complement,
/// so out-of-range input produces a truncated value rather than an error.
#[must_use]
pub fn string_to_int(s: &str) -> i32 {
    let s = s.trim();
    let mut chars = s.chars().peekable();

    let sign = match chars.peek() {
        Some('-') => {
            chars.next();
            -1
        }
        Some('+') => {
            chars.next();
            1
        }
        _ => 1,
    };

    let mut num: i32 = 0;
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        let value = digit as i32 - '0' as i32;
        num = num.wrapping_mul(10).wrapping_add(value);
    }
    num.wrapping_mul(sign)
}

/// Decimal rendering, with a leading `-` for negative values.
#[must_use]
pub fn int_to_string(num: i32) -> String {
    num.to_string()
}
