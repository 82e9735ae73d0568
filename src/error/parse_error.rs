/// Represents all errors that can occur while turning text into a tree.
///
/// Positions are byte offsets into the normalized text of the whole
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a character that is not part of the expression alphabet.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Found a token where a different kind of token was required.
    #[error("Unexpected token '{token}' at position {position}: expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still required.
    #[error("Unexpected end of input at position {position}: expected a number or '('.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A parenthesis has no partner.
    #[error("Unbalanced parenthesis at position {position}.")]
    UnbalancedParentheses {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// The expression (or a group) contains nothing to evaluate.
    #[error("Empty expression.")]
    EmptyExpression,
    /// A numeric literal could not be read as a number.
    #[error("Invalid number literal '{literal}' at position {position}.")]
    InvalidNumber {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// Parentheses are nested deeper than the parser supports.
    #[error("Parentheses are nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum supported depth.
        limit: usize,
    },
}
