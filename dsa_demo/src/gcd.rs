use anyhow::Result;
use num_algos::{gcd, gcd_of, gcd_recursive, gcd_subtraction, lcm, lcm_of};

use crate::report::Report;

const TOPIC: &str = "gcd";

const A: u64 = 12;
const B: u64 = 15;
const VALUES: [u64; 3] = [12, 15, 21];

/// Runs the GCD and LCM routines on the fixed samples.
///
/// # Errors
///
/// Returns an error if LCM fails for a sample or a value cannot be serialized.
pub fn report() -> Result<Report> {
    let mut report = Report::new();

    report.push(TOPIC, format!("GCD of {A} and {B}"), gcd(A, B))?;
    report.push(TOPIC, format!("LCM of {A} and {B}"), lcm(A, B)?)?;
    report.push(
        TOPIC,
        format!("GCD using recursive Euclidean algorithm of {A} and {B}"),
        gcd_recursive(A, B),
    )?;
    report.push(
        TOPIC,
        format!("GCD using subtraction of {A} and {B}"),
        gcd_subtraction(A, B),
    )?;
    report.push(TOPIC, "GCD of array {12, 15, 21}", gcd_of(&VALUES)?)?;
    report.push(TOPIC, "LCM of array {12, 15, 21}", lcm_of(&VALUES)?)?;

    Ok(report)
}
