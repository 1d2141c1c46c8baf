//! `num_algos`: GCD, LCM and prime-number algorithms.
//!
//! # GCD and LCM
//!
//! Three GCD implementations compute the same function and exist to be compared:
//! the iterative Euclidean loop ([`gcd`]), its recursive form
//! ([`gcd_recursive`]) and repeated subtraction ([`gcd_subtraction`]).
//!
//! [`lcm`] divides before multiplying and reports what the plain formula
//! `a * b / gcd(a, b)` would get wrong: both operands zero, and overflow.
//!
//! ```
//! use num_algos::{gcd, gcd_of, lcm, lcm_of, NumberError};
//!
//! assert_eq!(gcd(12, 15), 3);
//! assert_eq!(lcm(12, 15), Ok(60));
//! assert_eq!(gcd_of(&[12, 15, 21]), Ok(3));
//! assert_eq!(lcm_of(&[12, 15, 21]), Ok(420));
//!
//! assert_eq!(lcm(0, 0), Err(NumberError::DivisionByZero));
//! assert_eq!(gcd_of(&[]), Err(NumberError::EmptyInput));
//! ```
//!
//! # Primes
//!
//! - `is_prime()`: trial division, O(√n)
//! - `is_prime_6k()`: trial division by `6k ± 1` only, same result, about a third
//!   of the divisions
//! - `sieve()`, `count_primes()`: Sieve of Eratosthenes, O(n log log n)
//! - `segmented_sieve()`: primes in `[low, high]` using memory proportional to
//!   the range
//! - `prime_factors()`: factorization with multiplicity
//!
//! ```
//! use num_algos::{count_primes, prime_factors, segmented_sieve, sieve};
//!
//! assert_eq!(sieve(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
//! assert_eq!(count_primes(50), 15);
//! assert_eq!(prime_factors(84), vec![2, 2, 3, 7]);
//! assert_eq!(segmented_sieve(10, 30), vec![11, 13, 17, 19, 23, 29]);
//! ```

mod error;
mod gcd;
mod prime;

pub use error::NumberError;
pub use gcd::{gcd, gcd_of, gcd_recursive, gcd_subtraction, lcm, lcm_of};
pub use prime::{count_primes, is_prime, is_prime_6k, prime_factors, segmented_sieve, sieve};
