use log::trace;

/// Rewrites an expression into normalized form.
///
/// Two things happen in a single pass:
/// 1. every whitespace character is dropped;
/// 2. an explicit `*` is inserted between a digit and a following `(`, and
///    between a `)` and a following digit.
///
/// No other character is touched. In particular `)(` is left as is, so two
/// juxtaposed groups stay juxtaposed and are later rejected by the
/// validator.
///
/// The transform is idempotent: normalized text contains no adjacency left to
/// rewrite.
///
/// # Example
/// ```
/// use calculus::engine::normalizer::normalize;
///
/// assert_eq!(normalize("1(1 + 1)"), "1*(1+1)");
/// assert_eq!(normalize("(2)3"), "(2)*3");
/// assert_eq!(normalize("(1)(2)"), "(1)(2)");
/// ```
#[must_use]
pub fn normalize(expr: &str) -> String {
    let mut normalized = String::with_capacity(expr.len());
    let mut previous = None;

    for c in expr.chars().filter(|c| !c.is_whitespace()) {
        if let Some(prev) = previous
           && needs_implicit_multiplication(prev, c)
        {
            normalized.push('*');
        }
        normalized.push(c);
        previous = Some(c);
    }

    trace!("normalized {expr:?} to {normalized:?}");
    normalized
}

/// Returns `true` when `previous` followed by `next` hides a multiplication.
const fn needs_implicit_multiplication(previous: char, next: char) -> bool {
    (previous.is_ascii_digit() && next == '(') || (previous == ')' && next.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_every_kind_of_whitespace() {
        assert_eq!(normalize(" 1 +\t2\n* 3 "), "1+2*3");
        assert_eq!(normalize("1\u{00a0}+\u{2003}2"), "1+2");
    }

    #[test]
    fn inserts_multiplication_next_to_groups() {
        assert_eq!(normalize("2(3)"), "2*(3)");
        assert_eq!(normalize("(3)2"), "(3)*2");
        assert_eq!(normalize("1 + (1(1+1(1-1+1) -1) +1*1/1 -1)"),
                   "1+(1*(1+1*(1-1+1)-1)+1*1/1-1)");
    }

    #[test]
    fn adjacency_across_removed_whitespace_is_detected() {
        assert_eq!(normalize("2 (3)"), "2*(3)");
        assert_eq!(normalize("(3) 2"), "(3)*2");
    }

    #[test]
    fn leaves_juxtaposed_groups_and_decimal_points_alone() {
        assert_eq!(normalize("(1)(2)"), "(1)(2)");
        assert_eq!(normalize("1.(2)"), "1.(2)");
    }

    #[test]
    fn empty_and_blank_input_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        for expr in ["1(1 + 1)", "(2)3(4)5", "  ", "1 + 2", "((1))2"] {
            let once = normalize(expr);
            assert_eq!(normalize(&once), once);
        }
    }
}
