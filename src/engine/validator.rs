use log::debug;

use crate::ast::BinaryOperator;

/// Decides whether an expression can be solved by the evaluator.
///
/// The scan treats every expression `x` as `0 + x`: the cursor holding the
/// previous character starts at `'+'`, so the legal first characters are
/// exactly those legal after an operator. Whitespace is skipped.
///
/// Rules, applied to each character in order:
/// - a digit may follow anything except `)`;
/// - `(` may only follow an operator;
/// - `)` may only follow a digit or `)`, and only while a group is open;
/// - `.` may only follow a digit, once per number literal;
/// - an operator may only follow a digit or `)`;
/// - any other character is rejected.
///
/// The expression is valid when every character is legal and every opened
/// group has been closed.
///
/// A consequence of the starting cursor is that an expression may not begin
/// with an operator, and neither may a group: there is no unary minus.
///
/// # Example
/// ```
/// use calculus::engine::validator::is_valid;
///
/// assert!(is_valid("4.5+2.3"));
/// assert!(!is_valid("4.5.6 +2"));
/// assert!(!is_valid("1 + (4 + 5"));
/// assert!(!is_valid("-1"));
/// ```
#[must_use]
pub fn is_valid(expr: &str) -> bool {
    let mut previous = '+';
    let mut opens = 0usize;
    let mut closes = 0usize;
    let mut seen_decimal = false;

    for (position, c) in expr.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let legal = match c {
            '0'..='9' => previous != ')',
            '(' => {
                opens += 1;
                is_operator(previous)
            },
            ')' => {
                closes += 1;
                (previous.is_ascii_digit() || previous == ')') && closes <= opens
            },
            '.' => {
                let legal = previous.is_ascii_digit() && !seen_decimal;
                seen_decimal = true;
                legal
            },
            _ if is_operator(c) => {
                seen_decimal = false;
                previous.is_ascii_digit() || previous == ')'
            },
            _ => false,
        };

        if !legal {
            debug!("rejected {expr:?}: {c:?} cannot follow {previous:?} (character {position})");
            return false;
        }
        previous = c;
    }

    if opens != closes {
        debug!("rejected {expr:?}: {opens} group(s) opened, {closes} closed");
        return false;
    }
    true
}

fn is_operator(c: char) -> bool {
    BinaryOperator::from_symbol(c).is_some()
}
