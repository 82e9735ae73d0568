use calculus::{
    ast::BinaryOperator,
    engine::evaluator::EvalOptions,
    evaluate, normalize, solve, split_top_level, validate,
};
use proptest::prelude::*;

fn number() -> impl Strategy<Value = String> {
    "[0-9]{1,3}(\\.[0-9]{1,2})?"
}

fn operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

// Non-negative expressions with balanced parentheses, no leading operator and
// no operator right after '('. Spacing and implicit multiplication vary.
fn expression() -> impl Strategy<Value = String> {
    number().prop_recursive(4, 48, 4, |inner| {
                prop_oneof![(inner.clone(), operator(), inner.clone()).prop_map(|(l, op, r)| {
                                                                                    format!("{l}{op}{r}")
                                                                                }),
                            (inner.clone(), operator(), inner.clone()).prop_map(|(l, op, r)| {
                                                                                    format!("{l} {op} {r}")
                                                                                }),
                            inner.clone().prop_map(|e| format!("({e})")),
                            (number(), inner.clone()).prop_map(|(n, e)| format!("{n}({e})")),
                            (inner, number()).prop_map(|(e, n)| format!("({e}){n}")),]
            })
}

proptest! {
    #[test]
    fn prop_generated_expressions_validate(e in expression()) {
        prop_assert!(validate(&normalize(&e)), "{e:?} normalized to {:?}", normalize(&e));
    }

    #[test]
    fn prop_generated_expressions_evaluate(e in expression()) {
        prop_assert!(evaluate(&e).is_ok(), "{e:?} failed: {:?}", evaluate(&e));
        prop_assert!(solve(&e, EvalOptions::default()).is_ok());
    }

    #[test]
    fn prop_normalize_is_idempotent(e in "[0-9 .+*/()\t-]{0,48}|\\PC{0,48}") {
        let once = normalize(&e);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_split_reproduces_its_input(e in "[0-9.+*/()-]{0,48}|\\PC{0,48}") {
        prop_assert_eq!(split_top_level(&e).concat(), e);
    }

    #[test]
    fn prop_split_pieces_are_never_empty(e in "[0-9+()]{0,48}") {
        prop_assert!(split_top_level(&e).iter().all(|piece| !piece.is_empty()));
    }

    #[test]
    fn prop_arbitrary_input_never_panics(e in "[0-9 .+*/()a-]{0,64}|\\PC{0,64}") {
        let _ = validate(&e);
        let _ = evaluate(&e);
        let _ = solve(&e, EvalOptions::strict());
    }

    #[test]
    fn prop_flat_expressions_match_a_reference_fold(
        first in 0u32..1000,
        rest in prop::collection::vec((operator(), 1u32..1000), 0..12),
    ) {
        let mut text = first.to_string();
        for (op, n) in &rest {
            text.push(*op);
            text.push_str(&n.to_string());
        }

        // Sum of terms, each term a left-to-right product/quotient.
        let mut total = 0.0;
        let mut sign = 1.0;
        let mut term = f64::from(first);
        for (symbol, n) in &rest {
            let n = f64::from(*n);
            match BinaryOperator::from_symbol(*symbol) {
                Some(BinaryOperator::Mul) => term *= n,
                Some(BinaryOperator::Div) => term /= n,
                Some(op) => {
                    total += sign * term;
                    sign = if op == BinaryOperator::Sub { -1.0 } else { 1.0 };
                    term = n;
                },
                None => unreachable!(),
            }
        }
        total += sign * term;

        let value = evaluate(&text).unwrap();
        prop_assert!((value - total).abs() <= 1e-9 * total.abs().max(1.0),
                     "{text} = {value}, reference {total}");
    }
}
