use std::fmt;

use logos::Logos;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
};

/// Represents a lexical token of a plain run.
///
/// Parentheses are recognized so that an unmatched one can be reported
/// precisely; a well-formed plain run never contains them.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Maps an operator token to its binary operator.
    ///
    /// # Example
    /// ```
    /// use calculus::{ast::BinaryOperator, engine::lexer::Token};
    ///
    /// assert_eq!(Token::Star.operator(), Some(BinaryOperator::Mul));
    /// assert_eq!(Token::Number(1.0).operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            Self::Number(_) | Self::LParen | Self::RParen => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes `source`, pairing each token with its byte offset.
///
/// `offset` is added to every position so that tokens of a run can be
/// reported relative to the text the run was cut from.
///
/// # Errors
/// - `InvalidNumber` if a literal matched the number pattern but did not
///   parse.
/// - `UnexpectedCharacter` for anything outside the expression alphabet,
///   including a `.` that does not follow digits.
///
/// # Example
/// ```
/// use calculus::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1.5*2", 0).unwrap();
/// assert_eq!(tokens,
///            [(Token::Number(1.5), 0), (Token::Star, 3), (Token::Number(2.0), 4)]);
/// ```
pub fn tokenize(source: &str, offset: usize) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = offset + lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                return Err(match slice.chars().next() {
                               Some(c) if c.is_ascii_digit() => {
                                   ParseError::InvalidNumber { literal: slice.to_string(),
                                                               position }
                               },
                               Some(character) => {
                                   ParseError::UnexpectedCharacter { character, position }
                               },
                               None => ParseError::EmptyExpression,
                           });
            },
        }
    }

    Ok(tokens)
}
