use anyhow::Result;
use num_algos::{count_primes, is_prime, is_prime_6k, prime_factors, segmented_sieve, sieve};

use crate::report::Report;

const TOPIC: &str = "primes";

const LIMIT: usize = 50;

/// Runs the prime routines on the fixed samples.
///
/// # Errors
///
/// Returns an error if a value cannot be serialized.
pub fn report() -> Result<Report> {
    let mut report = Report::new();

    report.push(TOPIC, format!("Primes up to {LIMIT}"), sieve(LIMIT))?;
    report.push(TOPIC, "Is 29 prime?", is_prime(29))?;
    report.push(TOPIC, "Is 97 prime (optimized)?", is_prime_6k(97))?;
    report.push(TOPIC, format!("Count of primes up to {LIMIT}"), count_primes(LIMIT))?;
    report.push(TOPIC, "Prime factors of 84", prime_factors(84))?;
    report.push(TOPIC, "Primes in range 10 to 50", segmented_sieve(10, 50))?;

    Ok(report)
}
