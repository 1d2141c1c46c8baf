use thiserror::Error;

/// Error types for number-theory operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum NumberError {
    /// A fold over a sequence was given no values
    #[error("Empty input: at least one value is required")]
    EmptyInput,
    /// `lcm(0, 0)` would divide by `gcd(0, 0) == 0`
    #[error("Division by zero: lcm is undefined when both operands are zero")]
    DivisionByZero,
    /// The result does not fit in `u64`
    #[error("Overflow: lcm({a}, {b}) does not fit in u64")]
    Overflow {
        /// Left operand
        a: u64,
        /// Right operand
        b: u64,
    },
}
