use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Knobs that change how a tree is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Report division by zero as [`RuntimeError::DivisionByZero`] instead of
    /// producing an infinity or `NaN`.
    pub strict_division: bool,
}

impl EvalOptions {
    /// Options with strict division enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict_division: true }
    }
}

/// Folds expression trees into numbers.
///
/// The evaluator holds no state besides its options, so a single instance can
/// be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    /// Creates an evaluator with the given options.
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// The options this evaluator was created with.
    #[must_use]
    pub const fn options(&self) -> EvalOptions {
        self.options
    }

    /// Evaluates an expression tree.
    ///
    /// Operands are evaluated left before right, then combined with the node's
    /// operator in `f64`. The walk keeps its pending work on a heap stack, so
    /// the depth of the tree is not limited by the call stack.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when strict division is enabled
    /// and a divisor evaluates to zero.
    ///
    /// # Example
    /// ```
    /// use calculus::{
    ///     ast::{BinaryOperator, Expr},
    ///     engine::evaluator::{EvalOptions, Evaluator},
    /// };
    ///
    /// let tree = Expr::binary(Expr::number(1.0), BinaryOperator::Div, Expr::number(0.0));
    ///
    /// let lenient = Evaluator::default();
    /// assert_eq!(lenient.eval(&tree).unwrap(), f64::INFINITY);
    ///
    /// let strict = Evaluator::new(EvalOptions::strict());
    /// assert!(strict.eval(&tree).is_err());
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let mut pending = Vec::new();
        let mut node = expr;

        loop {
            // Descend the left spine down to a leaf.
            let mut value = loop {
                match node {
                    Expr::Number { value } => break *value,
                    Expr::BinaryOp { left, op, right } => {
                        pending.push(Step::Right { op:    *op,
                                                   right: &**right, });
                        node = &**left;
                    },
                }
            };

            // Combine finished operands until a right operand is still due.
            loop {
                match pending.pop() {
                    None => return Ok(value),
                    Some(Step::Right { op, right }) => {
                        pending.push(Step::Combine { op, left: value });
                        node = right;
                        break;
                    },
                    Some(Step::Combine { op, left }) => value = self.eval_binary(op, left, value)?,
                }
            }
        }
    }

    /// Applies a single operator to two evaluated operands.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` for `x / 0` under strict
    /// division.
    pub fn eval_binary(&self, op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        if self.options.strict_division && op == BinaryOperator::Div && right == 0.0 {
            return Err(RuntimeError::DivisionByZero { dividend: left });
        }

        let value = op.apply(left, right);
        trace!("{left} {op} {right} = {value}");
        Ok(value)
    }
}

/// Work left over while descending a tree.
enum Step<'a> {
    /// The left operand is being evaluated; `right` comes next.
    Right { op: BinaryOperator, right: &'a Expr },
    /// The left operand is done; combine it once the right one is.
    Combine { op: BinaryOperator, left: f64 },
}
