use crate::error::NumberError;

/// Euclid's algorithm, iterative modulo form. `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Euclid's algorithm, recursive form.
#[must_use]
pub fn gcd_recursive(a: u64, b: u64) -> u64 {
    if b == 0 {
        return a;
    }
    gcd_recursive(b, a % b)
}

/// GCD by repeatedly subtracting the smaller operand from the larger.
///
/// Much slower than [`gcd`] when the operands differ greatly in size. A zero
/// operand returns the other one, since subtracting zero never converges.
#[must_use]
pub fn gcd_subtraction(mut a: u64, mut b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a.max(b);
    }
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
    a
}

/// Least common multiple, computed as `a / gcd(a, b) * b`.
///
/// `lcm(0, n) == 0` for any `n > 0`.
///
/// # Errors
///
/// Returns `NumberError::DivisionByZero` if both operands are zero, and
/// `NumberError::Overflow` if the result exceeds `u64::MAX`.
pub fn lcm(a: u64, b: u64) -> Result<u64, NumberError> {
    let g = gcd(a, b);
    if g == 0 {
        return Err(NumberError::DivisionByZero);
    }
    (a / g).checked_mul(b).ok_or(NumberError::Overflow { a, b })
}

/// GCD of every value, folded left to right.
///
/// # Errors
///
/// Returns `NumberError::EmptyInput` if `values` is empty.
pub fn gcd_of(values: &[u64]) -> Result<u64, NumberError> {
    let (&first, rest) = values.split_first().ok_or(NumberError::EmptyInput)?;
    Ok(rest.iter().fold(first, |acc, &v| gcd(acc, v)))
}

/// LCM of every value, folded left to right.
///
/// # Errors
///
/// Returns `NumberError::EmptyInput` if `values` is empty, or the first error
/// of a pairwise [`lcm`] step.
pub fn lcm_of(values: &[u64]) -> Result<u64, NumberError> {
    let (&first, rest) = values.split_first().ok_or(NumberError::EmptyInput)?;
    rest.iter().try_fold(first, |acc, &v| lcm(acc, v))
}
