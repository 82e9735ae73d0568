/// Parsing errors.
///
/// Raised when the text handed to the evaluator does not describe a
/// well-formed expression: stray characters, misplaced operators, unbalanced
/// parentheses, empty input or nesting beyond the supported depth.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while folding a parsed tree into a number. The only runtime
/// failure is division by zero, and only when strict division is enabled.
pub mod runtime_error;
/// Decoding errors.
///
/// Raised by the service layer when an encoded query cannot be turned back
/// into UTF-8 text.
pub mod decode_error;

pub use decode_error::DecodeError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure the full pipeline can report.
///
/// Rejection by the validator is a value here like every other outcome, so
/// callers branch on `Error` instead of catching anything.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The query could not be decoded to text.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The validator rejected the expression.
    #[error("Invalid expression: {expression}")]
    Invalid {
        /// The normalized expression that was rejected.
        expression: String,
    },
    /// The expression passed validation but could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of the parsed tree failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
