/// The normalizer rewrites raw input into the canonical form.
///
/// Whitespace is removed and implicit multiplications next to parentheses
/// are made explicit. Every other stage expects normalized text.
pub mod normalizer;
/// The validator decides whether an expression can be solved.
///
/// It is a single left-to-right scan over characters that returns a verdict
/// instead of an error, so rejection is an ordinary outcome.
pub mod validator;
/// The splitter separates top-level parenthesized groups from plain runs.
///
/// The parser uses it to resolve groups recursively before it looks at
/// operators.
pub mod splitter;
/// The lexer tokenizes plain runs.
///
/// A plain run contains only number literals and operator symbols. Any
/// parenthesis that reaches the lexer is unmatched.
pub mod lexer;
/// The parser builds the expression tree.
///
/// Groups are resolved through the splitter and recursion, then operators are
/// collapsed in two passes: `*`/`/` first, `+`/`-` second.
pub mod parser;
/// The evaluator folds an expression tree into a number.
///
/// All arithmetic is done in `f64`. Division by zero follows IEEE-754 unless
/// strict division is requested.
pub mod evaluator;
