/// A closed interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Lower bound, inclusive
    pub start: i64,
    /// Upper bound, inclusive
    pub end: i64,
}

impl Interval {
    #[must_use]
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

impl From<Interval> for (i64, i64) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

/// Sorts by start and coalesces overlapping or touching intervals.
///
/// Two intervals are merged when the current end is `>=` the next start, so
/// `[1, 4]` and `[4, 5]` become `[1, 5]`.
#[must_use]
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|interval| interval.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(current) if current.end >= interval.start => {
                current.end = current.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}
