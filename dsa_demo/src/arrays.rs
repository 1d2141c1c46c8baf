use anyhow::{Context, Result};
use array_algos::{
    binary_search, find_duplicate, find_max, find_min, kth_largest, kth_smallest,
    longest_consecutive, majority_element, max_sliding_window, max_subarray_sum, merge_intervals,
    missing_number, move_zeroes, next_permutation, prefix_sum, product_except_self,
    remove_duplicates_sorted, reverse, rotate_right, subarray_sum_count, trap_rain_water, two_sum,
    Interval,
};

use crate::report::Report;

const TOPIC: &str = "arrays";

const SAMPLE: [i64; 9] = [3, 1, 4, 1, 5, 9, 2, 6, 5];
const SORTED: [i64; 9] = [1, 2, 2, 3, 4, 5, 5, 6, 9];
const WITH_ZEROES: [i64; 5] = [0, 1, 0, 3, 12];
const FOR_ROTATION: [i64; 7] = [1, 2, 3, 4, 5, 6, 7];
const INTERVALS: [(i64, i64); 4] = [(1, 3), (2, 6), (8, 10), (15, 18)];
const FOR_PRODUCT: [i64; 4] = [1, 2, 3, 4];
const FOR_MAJORITY: [i64; 7] = [2, 2, 1, 1, 1, 2, 2];
const FOR_PERMUTATION: [i64; 3] = [1, 2, 3];
const FOR_SUM_K: [i64; 3] = [1, 2, 3];
const FOR_MISSING: [i64; 3] = [3, 0, 1];
const FOR_DUPLICATE: [i64; 5] = [1, 3, 4, 2, 2];
const FOR_RAIN: [i64; 12] = [0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
const FOR_CONSECUTIVE: [i64; 6] = [100, 4, 200, 1, 3, 2];
const FOR_SLIDING: [i64; 8] = [1, 3, -1, -3, 5, 3, 6, 7];

/// Runs every array routine on the fixed samples.
///
/// # Errors
///
/// Returns an error if a routine rejects its sample or a value cannot be
/// serialized.
pub fn report() -> Result<Report> {
    let mut report = Report::new();

    report.push(TOPIC, "Min", find_min(&SAMPLE)?)?;
    report.push(TOPIC, "Max", find_max(&SAMPLE)?)?;

    let mut reversed = SAMPLE;
    reverse(&mut reversed);
    report.push(TOPIC, "Reverse", reversed)?;

    // -1 is the printed not-found sentinel
    let found = binary_search(&SORTED, 5).map_or(-1, |i| i as i64);
    report.push(TOPIC, "Binary search 5", found)?;

    // Quickselect reorders its input, so each call gets a fresh copy
    let mut scratch = SAMPLE;
    report.push(TOPIC, "2nd largest", kth_largest(&mut scratch, 2)?)?;
    let mut scratch = SAMPLE;
    report.push(TOPIC, "3rd smallest", kth_smallest(&mut scratch, 3)?)?;

    report.push(TOPIC, "Two sum (target 8)", two_sum(&SAMPLE, 8))?;

    let mut zeroes = WITH_ZEROES;
    move_zeroes(&mut zeroes);
    report.push(TOPIC, "Move zeroes", zeroes)?;

    let mut deduped = SORTED;
    let len = remove_duplicates_sorted(&mut deduped);
    report.push(TOPIC, "Remove duplicates", len)?;

    let mut rotated = FOR_ROTATION;
    rotate_right(&mut rotated, 3);
    report.push(TOPIC, "Rotate by 3", rotated)?;

    report.push(TOPIC, "Max subarray sum", max_subarray_sum(&SAMPLE)?)?;
    report.push(TOPIC, "Prefix sum", prefix_sum(&SAMPLE))?;

    let merged: Vec<(i64, i64)> = merge_intervals(INTERVALS.map(Interval::from).to_vec())
        .into_iter()
        .map(Into::into)
        .collect();
    report.push(TOPIC, "Merged intervals", merged)?;

    report.push(TOPIC, "Product except self", product_except_self(&FOR_PRODUCT))?;
    report.push(TOPIC, "Majority element", majority_element(&FOR_MAJORITY)?)?;

    let mut permutation = FOR_PERMUTATION;
    next_permutation(&mut permutation);
    report.push(TOPIC, "Next permutation", permutation)?;

    report.push(TOPIC, "Subarray sum equals 3", subarray_sum_count(&FOR_SUM_K, 3))?;
    report.push(TOPIC, "Missing number", missing_number(&FOR_MISSING))?;
    report.push(
        TOPIC,
        "Duplicate number",
        find_duplicate(&FOR_DUPLICATE).context("duplicate sample is malformed")?,
    )?;
    report.push(TOPIC, "Trapped rain water", trap_rain_water(&FOR_RAIN))?;
    report.push(
        TOPIC,
        "Longest consecutive sequence",
        longest_consecutive(&FOR_CONSECUTIVE),
    )?;
    report.push(TOPIC, "Sliding window max", max_sliding_window(&FOR_SLIDING, 3))?;

    Ok(report)
}
