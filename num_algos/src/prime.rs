/// Trial division by every candidate up to `√n`.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    // i <= n / i is i * i <= n without overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Trial division by 2, 3 and the `6k ± 1` candidates up to `√n`.
#[must_use]
pub fn is_prime_6k(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Sieve of Eratosthenes: every prime `<= n`, ascending.
#[must_use]
pub fn sieve(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i <= n / i {
        if is_prime[i] {
            for j in (i * i..=n).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| if p { Some(i) } else { None })
        .collect()
}

/// Number of primes `<= n`.
#[must_use]
pub fn count_primes(n: usize) -> usize {
    sieve(n).len()
}

/// Prime factors of `n` with multiplicity, ascending. Their product is `n`.
///
/// Values below 2 have no prime factors.
#[must_use]
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }
    let mut i = 2;
    while i <= n / i {
        while n % i == 0 {
            factors.push(i);
            n /= i;
        }
        i += 1;
    }
    // Whatever is left has no factor <= its square root
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Primes in the inclusive range `[low, high]`, ascending.
///
/// Only the range itself is allocated; composites are crossed off with the
/// base primes up to `√high`. Values below 2 are never reported.
#[must_use]
pub fn segmented_sieve(low: usize, high: usize) -> Vec<usize> {
    let low = low.max(2);
    if low > high {
        return Vec::new();
    }

    let mut is_prime = vec![true; high - low + 1];
    for p in sieve(integer_sqrt(high)) {
        // First multiple of p in range, but never p itself
        let first = (p * p).max(low.div_ceil(p) * p);
        for j in (first..=high).step_by(p) {
            is_prime[j - low] = false;
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(offset, &p)| if p { Some(low + offset) } else { None })
        .collect()
}

/// Largest `r` with `r * r <= n`.
fn integer_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r > 0 && r > n / r {
        r -= 1;
    }
    while (r + 1) <= n / (r + 1) {
        r += 1;
    }
    r
}
