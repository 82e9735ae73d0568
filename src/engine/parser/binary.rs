use crate::{
    ast::Expr,
    engine::parser::core::{Item, ParseResult},
    error::ParseError,
};

/// Collapses every `*` and `/` of a flattened level.
///
/// Walks the items left to right, remembering the previous operator. When
/// the previous operator is of the high tier, the last operand is popped and
/// combined with the current one, and the product is pushed back. Low tier
/// operators and their operands pass through untouched, so products and
/// quotients are collapsed left to right: `a / b / c` is `(a / b) / c`.
///
/// The walk also checks that operands and operators alternate, starting and
/// ending with an operand.
///
/// # Parameters
/// - `items`: The bracket-free form of one level.
/// - `end`: Byte offset just past the level, for errors at end of input.
///
/// # Returns
/// The reduced items, containing only `+` and `-` operators.
///
/// # Errors
/// - `EmptyExpression` if there are no items.
/// - `UnexpectedToken` if two operands or two operators are adjacent, or if an
///   operator comes first.
/// - `UnexpectedEndOfInput` if an operator comes last.
pub fn collapse_high_tier(items: Vec<Item>, end: usize) -> ParseResult<Vec<Item>> {
    if items.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut reduced: Vec<Item> = Vec::with_capacity(items.len());
    let mut pending = None;
    let mut expect_operand = true;

    for item in items {
        match item {
            Item::Operand { expr, position } if expect_operand => {
                let item = match pending.take() {
                    Some(op) => match reduced.pop() {
                        Some(Item::Operand { expr: left,
                                             position: start, }) => {
                            Item::Operand { expr:     Expr::binary(left, op, expr),
                                            position: start, }
                        },
                        _ => {
                            return Err(ParseError::UnexpectedToken { token: op.to_string(),
                                                                     expected: "a number or '('",
                                                                     position });
                        },
                    },
                    None => Item::Operand { expr, position },
                };
                reduced.push(item);
                expect_operand = false;
            },
            Item::Operator { op, position } if !expect_operand => {
                if op.is_high_tier() {
                    pending = Some(op);
                } else {
                    reduced.push(Item::Operator { op, position });
                }
                expect_operand = true;
            },
            Item::Operand { position, .. } => {
                return Err(ParseError::UnexpectedToken { token: "operand".to_string(),
                                                         expected: "an operator",
                                                         position });
            },
            Item::Operator { op, position } => {
                return Err(ParseError::UnexpectedToken { token: op.to_string(),
                                                         expected: "a number or '('",
                                                         position });
            },
        }
    }

    if expect_operand {
        return Err(ParseError::UnexpectedEndOfInput { position: end });
    }

    Ok(reduced)
}

/// Folds the reduced items of a level into a single tree.
///
/// Starts with the first operand, then repeatedly consumes an operator and
/// the operand after it, building `(accumulator op operand)`. Only `+` and `-`
/// remain at this point, so the fold is strictly left-associative:
/// `a - b - c` is `(a - b) - c`.
///
/// # Errors
/// - `EmptyExpression` if there are no items.
/// - `UnexpectedToken` if the items do not alternate operand, operator.
/// - `UnexpectedEndOfInput` if an operator has no right operand.
pub fn fold_low_tier(reduced: Vec<Item>, end: usize) -> ParseResult<Expr> {
    let mut items = reduced.into_iter();

    let mut accumulator = match items.next() {
        Some(Item::Operand { expr, .. }) => expr,
        Some(Item::Operator { op, position }) => {
            return Err(ParseError::UnexpectedToken { token: op.to_string(),
                                                     expected: "a number or '('",
                                                     position });
        },
        None => return Err(ParseError::EmptyExpression),
    };

    while let Some(item) = items.next() {
        let Item::Operator { op, .. } = item else {
            return Err(ParseError::UnexpectedToken { token: "operand".to_string(),
                                                     expected: "an operator",
                                                     position: item.position(), });
        };

        match items.next() {
            Some(Item::Operand { expr, .. }) => accumulator = Expr::binary(accumulator, op, expr),
            Some(Item::Operator { op, position }) => {
                return Err(ParseError::UnexpectedToken { token: op.to_string(),
                                                         expected: "a number or '('",
                                                         position });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: end }),
        }
    }

    Ok(accumulator)
}
