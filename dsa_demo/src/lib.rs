//! Demonstration reports for `array_algos`, `string_algos` and `num_algos`.
//!
//! Each topic module runs its routines against fixed sample inputs and collects
//! the results into a [`Report`], which the binary prints as text or JSON.

pub mod arrays;
pub mod gcd;
pub mod logging;
pub mod primes;
pub mod report;
pub mod strings;

use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

pub use report::{Entry, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Topic {
    /// Searching, selection, two pointers and sliding windows over integers
    Arrays,
    /// Anagrams, substring search, parsing and edit distance
    Strings,
    /// GCD and LCM of pairs and sequences
    Gcd,
    /// Primality tests, sieves and factorization
    Primes,
    /// Every topic above, in order
    All,
}

/// Builds the report for one topic, or all of them.
///
/// # Errors
///
/// Returns the first error raised while computing a sample result.
pub fn build(topic: Topic) -> Result<Report> {
    let report = match topic {
        Topic::Arrays => arrays::report()?,
        Topic::Strings => strings::report()?,
        Topic::Gcd => gcd::report()?,
        Topic::Primes => primes::report()?,
        Topic::All => {
            let mut all = Report::new();
            for topic in [Topic::Arrays, Topic::Strings, Topic::Gcd, Topic::Primes] {
                all.extend(build(topic)?);
            }
            all
        }
    };
    debug!(?topic, entries = report.len(), "report built");
    Ok(report)
}
