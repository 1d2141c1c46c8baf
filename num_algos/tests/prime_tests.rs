use num_algos::{count_primes, is_prime, is_prime_6k, prime_factors, segmented_sieve, sieve};

const PRIMES_TO_50: [usize; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

#[test]
fn test_is_prime_samples() {
    assert!(is_prime(29));
    assert!(is_prime_6k(97));
    assert!(!is_prime(91)); // 7 * 13
    assert!(!is_prime_6k(91));
    assert!(!is_prime_6k(25));
    assert!(!is_prime_6k(49));
}

#[test]
fn test_is_prime_small_values() {
    for n in [0, 1] {
        assert!(!is_prime(n));
        assert!(!is_prime_6k(n));
    }
    for n in [2, 3, 5, 7] {
        assert!(is_prime(n));
        assert!(is_prime_6k(n));
    }
    for n in [4, 6, 8, 9] {
        assert!(!is_prime(n));
        assert!(!is_prime_6k(n));
    }
}

#[test]
fn test_primality_checks_agree() {
    for n in 0..5000u64 {
        assert_eq!(is_prime(n), is_prime_6k(n), "n = {n}");
    }
}

#[test]
fn test_primality_large_values() {
    assert!(is_prime_6k(1_000_000_007));
    assert!(is_prime(1_000_000_007));
    assert!(!is_prime_6k(1_000_000_007 * 3));
    // u64::MAX = 3 * 5 * 17 * 257 * 641 * 65537 * 6700417
    assert!(!is_prime(u64::MAX));
    assert!(!is_prime_6k(u64::MAX));
    assert_eq!(
        prime_factors(u64::MAX),
        vec![3, 5, 17, 257, 641, 65537, 6_700_417]
    );
}

#[test]
fn test_sieve() {
    assert_eq!(sieve(50), PRIMES_TO_50.to_vec());
    assert_eq!(sieve(2), vec![2]);
    assert_eq!(sieve(3), vec![2, 3]);
}

#[test]
fn test_sieve_below_two_is_empty() {
    assert!(sieve(0).is_empty());
    assert!(sieve(1).is_empty());
}

#[test]
fn test_sieve_matches_primality() {
    let n = 2000;
    let primes = sieve(n);
    assert_eq!(primes.len(), count_primes(n));
    for value in 0..=n {
        assert_eq!(
            primes.binary_search(&value).is_ok(),
            is_prime_6k(value as u64),
            "value = {value}"
        );
    }
}

#[test]
fn test_count_primes() {
    assert_eq!(count_primes(50), 15);
    assert_eq!(count_primes(100), 25);
    assert_eq!(count_primes(1000), 168);
    assert_eq!(count_primes(1), 0);
}

#[test]
fn test_prime_factors() {
    assert_eq!(prime_factors(84), vec![2, 2, 3, 7]);
    assert_eq!(prime_factors(97), vec![97]);
    assert_eq!(prime_factors(1024), vec![2; 10]);
    assert_eq!(prime_factors(2 * 3 * 5 * 7 * 11 * 13), vec![2, 3, 5, 7, 11, 13]);
}

#[test]
fn test_prime_factors_degenerate() {
    assert!(prime_factors(0).is_empty());
    assert!(prime_factors(1).is_empty());
    assert_eq!(prime_factors(2), vec![2]);
}

#[test]
fn test_prime_factors_multiply_back() {
    for n in 2..3000u64 {
        let factors = prime_factors(n);
        assert_eq!(factors.iter().product::<u64>(), n, "n = {n}");
        assert!(factors.windows(2).all(|w| w[0] <= w[1]), "n = {n}");
        assert!(factors.iter().all(|&f| is_prime(f)), "n = {n}");
    }
}

#[test]
fn test_prime_factors_more_than_fixed_capacity() {
    // 2^40 has more factors than a 32-slot buffer could hold
    assert_eq!(prime_factors(1 << 40), vec![2; 40]);
}

#[test]
fn test_segmented_sieve() {
    assert_eq!(
        segmented_sieve(10, 50),
        vec![11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
    );
    assert_eq!(segmented_sieve(2, 50), PRIMES_TO_50.to_vec());
}

#[test]
fn test_segmented_sieve_matches_sieve() {
    let all = sieve(1000);
    for (low, high) in [(0, 1000), (100, 200), (997, 1000), (500, 500), (24, 28)] {
        let expected: Vec<usize> = all
            .iter()
            .copied()
            .filter(|&p| p >= low && p <= high)
            .collect();
        assert_eq!(segmented_sieve(low, high), expected, "[{low}, {high}]");
    }
}

#[test]
fn test_segmented_sieve_edge_ranges() {
    assert!(segmented_sieve(0, 1).is_empty());
    assert_eq!(segmented_sieve(0, 2), vec![2]);
    assert!(segmented_sieve(50, 10).is_empty());
    assert_eq!(segmented_sieve(13, 13), vec![13]);
    assert!(segmented_sieve(14, 16).is_empty());
}
