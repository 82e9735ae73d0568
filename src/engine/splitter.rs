/// Splits an expression into top-level groups and the plain runs around them.
///
/// The scan tracks parenthesis depth and cuts the input every time a group
/// opens at depth zero or closes back to depth zero. Nested groups stay
/// inside their enclosing group. Empty pieces are dropped.
///
/// The pieces borrow from `expr` and, concatenated in order, reproduce it
/// exactly. A `)` with no open group is kept in the surrounding run and an
/// unterminated group runs to the end of the input; deciding whether either
/// is an error is left to the caller.
///
/// # Example
/// ```
/// use calculus::engine::splitter::split_top_level;
///
/// assert_eq!(split_top_level("1+(1+2)"), ["1+", "(1+2)"]);
/// assert_eq!(split_top_level("(1*(2+3))-4/(5)"),
///            ["(1*(2+3))", "-4/", "(5)"]);
/// ```
#[must_use]
pub fn split_top_level(expr: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;

    for (i, c) in expr.char_indices() {
        match c {
            '(' => {
                if depth == 0 {
                    pieces.push(&expr[start..i]);
                    start = i;
                }
                depth += 1;
            },
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    pieces.push(&expr[start..=i]);
                    start = i + 1;
                }
            },
            _ => {},
        }
    }
    pieces.push(&expr[start..]);

    pieces.retain(|piece| !piece.is_empty());
    pieces
}

/// Returns `true` when `piece` is a parenthesized group produced by
/// [`split_top_level`].
///
/// # Example
/// ```
/// use calculus::engine::splitter::is_group;
///
/// assert!(is_group("(1+2)"));
/// assert!(!is_group("1+"));
/// ```
#[must_use]
pub fn is_group(piece: &str) -> bool {
    piece.starts_with('(')
}

/// Returns the interior of `expr` if the whole of it is a single group.
///
/// `(1+2)` is wrapped, `(1)+(2)` is not: its first parenthesis closes before
/// the end. Only one pair is removed.
///
/// # Example
/// ```
/// use calculus::engine::splitter::strip_outer_group;
///
/// assert_eq!(strip_outer_group("((1+2))"), Some("(1+2)"));
/// assert_eq!(strip_outer_group("(1)+(2)"), None);
/// assert_eq!(strip_outer_group("1+2"), None);
/// ```
#[must_use]
pub fn strip_outer_group(expr: &str) -> Option<&str> {
    if !expr.starts_with('(') || !expr.ends_with(')') || expr.len() < 2 {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in expr.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return (i == expr.len() - 1).then(|| &expr[1..i]);
                }
            },
            _ => {},
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{is_group, split_top_level, strip_outer_group};

    #[test]
    fn plain_run_is_a_single_piece() {
        assert_eq!(split_top_level("1+2*3"), ["1+2*3"]);
    }

    #[test]
    fn empty_input_gives_no_pieces() {
        assert!(split_top_level("").is_empty());
    }

    #[test]
    fn nested_groups_stay_in_their_top_level_group() {
        assert_eq!(split_top_level("1+(1+1*12+(1+1)+1)+12"),
                   ["1+", "(1+1*12+(1+1)+1)", "+12"]);
    }

    #[test]
    fn adjacent_groups_are_separate_pieces() {
        assert_eq!(split_top_level("(1)(2)"), ["(1)", "(2)"]);
    }

    #[test]
    fn stray_and_unterminated_parentheses_keep_every_character() {
        assert_eq!(split_top_level("1)+2"), ["1)+2"]);
        assert_eq!(split_top_level("1+(2*(3"), ["1+", "(2*(3"]);
        assert_eq!(split_top_level("1)+(2"), ["1)+", "(2"]);
    }

    #[test]
    fn groups_are_told_apart_from_runs() {
        let pieces = split_top_level("2*(12+12)+10");
        let kinds: Vec<bool> = pieces.iter().map(|p| is_group(p)).collect();
        assert_eq!(kinds, [false, true, false]);
    }

    #[test]
    fn strip_outer_group_only_accepts_a_single_wrapping_pair() {
        assert_eq!(strip_outer_group("(1+2)"), Some("1+2"));
        assert_eq!(strip_outer_group("()"), Some(""));
        assert_eq!(strip_outer_group("(1+2"), None);
        assert_eq!(strip_outer_group(")1+2("), None);
        assert_eq!(strip_outer_group("(1))"), None);
    }
}
