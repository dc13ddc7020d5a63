/// Errors produced by the `sundial-core` crate.
///
/// The `Display` text of each variant is the message returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The body was absent or one or more operands were missing or `null`.
    #[error("Missing required parameters: {}", .names.join(", "))]
    MissingParameters { names: Vec<&'static str> },

    /// An operand was present but is not an integer.
    #[error("num1 and num2 must be valid integers")]
    InvalidIntegers,

    /// The sum does not fit in a signed 64-bit integer.
    #[error("sum of num1 and num2 is out of range")]
    SumOutOfRange,

    /// A decimal operand contained something other than ASCII digits.
    #[error("not a decimal integer: '{value}'")]
    NotDecimal { value: String },
}
