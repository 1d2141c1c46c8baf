use thiserror::Error;

/// Error types for string algorithm preconditions
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StringError {
    /// Sliding window size is zero or larger than the input
    #[error("Invalid window size: window {window} does not fit string length {length}")]
    InvalidWindowSize {
        /// Requested window size
        window: usize,
        /// Number of characters in the input
        length: usize,
    },
    /// A digit string contains something other than `0`-`9`
    #[error("Not a digit: found {found:?} at character index {index}")]
    NotADigit {
        /// Character index of the offending character
        index: usize,
        /// The offending character
        found: char,
    },
    /// Input does not satisfy the documented shape of the algorithm
    #[error("Precondition violated: {reason}")]
    PreconditionViolated {
        /// Description of the violated precondition
        reason: &'static str,
    },
}
