//! # calculus
//!
//! calculus is a small arithmetic expression engine written in Rust.
//! It normalizes, validates and evaluates expressions built from decimal
//! literals, the four operators `+ - * /`, and parentheses, honoring the usual
//! precedence and left associativity.
//!
//! ```
//! assert_eq!(calculus::normalize("2 (12 + 12) + 10"), "2*(12+12)+10");
//! assert!(calculus::validate("2*(12+12)+10"));
//! assert_eq!(calculus::evaluate("2*(12+12)+10").unwrap(), 58.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Expr,
    engine::{
        evaluator::{EvalOptions, Evaluator},
        parser::core::parse_expression,
        validator::is_valid,
    },
    error::{Error, ParseError},
};

/// Defines the expression tree and the operator table.
///
/// This module declares the `Expr` enum produced by the parser and consumed by
/// the evaluator, together with `BinaryOperator`, its precedence tiers and
/// its arithmetic.
///
/// # Responsibilities
/// - Represents parsed expressions as typed nodes.
/// - Holds the fixed mapping from operator symbol to function and tier.
pub mod ast;
/// Command-line configuration and execution.
///
/// Turns parsed command-line arguments into a `Config` and runs a single
/// input line under that configuration.
pub mod cli;
/// The expression engine.
///
/// Every stage between raw text and a number: normalization, validation,
/// splitting into groups, tokenizing, parsing and evaluation. All stages are
/// pure functions of their input.
///
/// # Responsibilities
/// - Canonicalizes text and decides whether it can be solved.
/// - Resolves parenthesized groups recursively into a tree.
/// - Evaluates trees in double precision.
pub mod engine;
/// Provides unified error types for every phase.
///
/// Parse errors carry the byte offset they refer to; runtime and decoding
/// errors carry the values involved.
pub mod error;
/// The request handler wrapped around the engine.
///
/// Decodes base64 queries, gates them with the validator, evaluates them and
/// shapes JSON responses. Also routes the root greeting and unknown paths.
pub mod service;

pub use engine::{normalizer::normalize, splitter::split_top_level};

/// Returns `true` when `text` can be solved.
///
/// The verdict is computed on `text` as given; pass it through [`normalize`]
/// first to accept implicit multiplications such as `2(3)`.
///
/// # Example
/// ```
/// assert!(calculus::validate("1 + (2 * 3)"));
/// assert!(!calculus::validate("1 + (4 + 5"));
/// assert!(!calculus::validate("1 ( 1*1 ) + 2"));
/// assert!(calculus::validate(&calculus::normalize("1 ( 1*1 ) + 2")));
/// ```
#[must_use]
pub fn validate(text: &str) -> bool {
    is_valid(text)
}

/// Parses `text` into an expression tree.
///
/// # Errors
/// Returns a [`ParseError`] when `text` is not a well-formed expression.
///
/// # Example
/// ```
/// let tree = calculus::parse("1 + 2 * 3").unwrap();
/// assert_eq!(tree.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    parse_expression(text)
}

/// Evaluates `text` with the default options.
///
/// `text` is expected to satisfy `validate(&normalize(text))`. Input that
/// does not fails with a [`ParseError`] instead of producing a number. Division
/// by zero yields an infinity or `NaN`.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed input.
///
/// # Example
/// ```
/// let value = calculus::evaluate("1 + (1 + 1 * 12 + (1 + 1) + 1) + 12").unwrap();
/// assert_eq!(value, 29.0);
///
/// assert!(calculus::evaluate("1 +").is_err());
/// assert!(calculus::evaluate("1 / 0").unwrap().is_infinite());
/// ```
pub fn evaluate(text: &str) -> Result<f64, Error> {
    let tree = parse_expression(text)?;
    Ok(Evaluator::default().eval(&tree)?)
}

/// Runs the whole pipeline: normalize, validate, parse and evaluate.
///
/// Rejection by the validator is reported as [`Error::Invalid`] carrying the
/// normalized text.
///
/// # Errors
/// - [`Error::Invalid`] when the normalized text does not validate.
/// - [`Error::Parse`] when it validates but still has no value, such as a
///   trailing operator.
/// - [`Error::Runtime`] for division by zero under strict division.
///
/// # Example
/// ```
/// use calculus::{engine::evaluator::EvalOptions, error::Error};
///
/// assert_eq!(calculus::solve("4.5 + 2.3", EvalOptions::default()).unwrap(), 6.8);
/// assert!(matches!(calculus::solve("4.5+6.4.5", EvalOptions::default()),
///                  Err(Error::Invalid { .. })));
/// assert!(calculus::solve("1/0", EvalOptions::strict()).is_err());
/// ```
pub fn solve(text: &str, options: EvalOptions) -> Result<f64, Error> {
    let normalized = normalize(text);
    if !is_valid(&normalized) {
        return Err(Error::Invalid { expression: normalized });
    }

    let tree = parse_expression(&normalized)?;
    let value = Evaluator::new(options).eval(&tree)?;
    debug!("solved {normalized:?} = {value}");
    Ok(value)
}
