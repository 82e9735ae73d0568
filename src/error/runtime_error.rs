/// Represents all errors that can occur while evaluating a parsed tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero with strict division enabled.
    #[error("Division by zero: {dividend} / 0.")]
    DivisionByZero {
        /// The value that was being divided.
        dividend: f64,
    },
}
