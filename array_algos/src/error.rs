use thiserror::Error;

/// Error types for array algorithm preconditions
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ArrayError {
    /// The operation needs at least one element
    #[error("Empty input: operation requires a non-empty array")]
    EmptyInput,
    /// Sliding window size is zero or larger than the input
    #[error("Invalid window size: window {window} does not fit array length {length}")]
    InvalidWindowSize {
        /// Requested window size
        window: usize,
        /// Length of the input array
        length: usize,
    },
    /// Order statistic `k` is outside `1..=length`
    #[error("Order out of range: k = {k} is not within 1..={length}")]
    OrderOutOfRange {
        /// Requested 1-based order
        k: usize,
        /// Length of the input array
        length: usize,
    },
    /// Input does not satisfy the documented shape of the algorithm
    #[error("Precondition violated: {reason}")]
    PreconditionViolated {
        /// Description of the violated precondition
        reason: &'static str,
    },
}
