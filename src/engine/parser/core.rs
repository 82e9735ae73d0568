use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    engine::{
        lexer::{Token, tokenize},
        normalizer::normalize,
        parser::binary::{collapse_high_tier, fold_low_tier},
        splitter::{is_group, split_top_level, strip_outer_group},
    },
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// One element of the bracket-free form of a group.
///
/// After every nested group has been parsed into a subtree, a level of the
/// expression is a flat sequence alternating operands and operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A number or an already parsed group.
    Operand {
        /// The operand's tree.
        expr:     Expr,
        /// Byte offset where the operand starts.
        position: usize,
    },
    /// One of the four arithmetic operators.
    Operator {
        /// The operator.
        op:       BinaryOperator,
        /// Byte offset of the operator symbol.
        position: usize,
    },
}

impl Item {
    /// Byte offset where the item starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Operand { position, .. } | Self::Operator { position, .. } => *position,
        }
    }
}

/// Parses an expression into a tree.
///
/// This is the entry point for parsing. The text is normalized first, so it
/// may contain whitespace and implicit multiplications. Reported positions are
/// byte offsets into the normalized text.
///
/// # Errors
/// Returns a `ParseError` for anything the validator would reject, and for
/// validated text that still has no value (empty input, a trailing operator).
///
/// # Example
/// ```
/// use calculus::engine::parser::core::parse_expression;
///
/// let tree = parse_expression("2(1 + 3) - 4 / 2").unwrap();
/// assert_eq!(tree.to_string(), "((2 * (1 + 3)) - (4 / 2))");
/// ```
pub fn parse_expression(expr: &str) -> ParseResult<Expr> {
    let normalized = normalize(expr);
    let tree = parse_level(&normalized, 0, 0)?;
    debug!("parsed {normalized:?} as {tree}");
    Ok(tree)
}

/// Parses one nesting level.
///
/// A level wrapped in a single pair of parentheses is unwrapped and parsed one
/// level deeper. Otherwise the level is normalized again, split into plain runs
/// and top-level groups, flattened, and collapsed by precedence tier.
fn parse_level(expr: &str, offset: usize, depth: usize) -> ParseResult<Expr> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
    }

    if let Some(inner) = strip_outer_group(expr) {
        return parse_level(inner, offset + 1, depth + 1);
    }

    let normalized = normalize(expr);
    let items = flatten(&normalized, offset, depth)?;
    let end = offset + normalized.len();
    let reduced = collapse_high_tier(items, end)?;
    fold_low_tier(reduced, end)
}

/// Produces the bracket-free form of a level.
///
/// Every top-level group is parsed recursively into an operand; every plain
/// run is tokenized.
fn flatten(expr: &str, offset: usize, depth: usize) -> ParseResult<Vec<Item>> {
    let mut items = Vec::new();
    let mut position = offset;

    for piece in split_top_level(expr) {
        if is_group(piece) {
            let inner = strip_outer_group(piece).ok_or(ParseError::UnbalancedParentheses { position })?;
            items.push(Item::Operand { expr: parse_level(inner, position + 1, depth + 1)?,
                                       position });
        } else {
            for (token, at) in tokenize(piece, position)? {
                items.push(token_to_item(token, at)?);
            }
        }
        position += piece.len();
    }

    Ok(items)
}

/// Converts a token of a plain run into an item.
///
/// A parenthesis inside a plain run has no partner: the splitter moves every
/// matched pair into a group.
fn token_to_item(token: Token, position: usize) -> ParseResult<Item> {
    if let Some(op) = token.operator() {
        return Ok(Item::Operator { op, position });
    }

    match token {
        Token::Number(value) => Ok(Item::Operand { expr: Expr::number(value),
                                                   position }),
        _ => Err(ParseError::UnbalancedParentheses { position }),
    }
}
