use infix_tree::{Expression, ParseError, evaluate_once, interpreter::matcher::Keyword};
use rstest::rstest;

const NO_NAMES: &[&str] = &[];

fn eval(src: &str) -> f64 {
    evaluate_once(src, NO_NAMES, &[]).unwrap_or_else(|e| panic!("Expression `{src}` failed: {e}"))
}

fn eval_with(src: &str, names: &[&str], values: &[f64]) -> f64 {
    evaluate_once(src, names, values).unwrap_or_else(|e| panic!("Expression `{src}` failed: {e}"))
}

#[rstest]
#[case::precedence("2+3*4", 14.0)]
#[case::left_associative_sub("8-3-2", 3.0)]
#[case::left_associative_div("16/4/2", 2.0)]
#[case::same_class_mul_mod("2*3%4", 2.0)]
#[case::parentheses("(2+3)*4", 20.0)]
#[case::nested_parentheses("((2))", 2.0)]
#[case::two_groups("(1+2)*(3+4)", 21.0)]
#[case::group_then_chain("2*(3+4)-1", 13.0)]
#[case::mixed_chain("10-2*3+1", 5.0)]
#[case::whitespace("  1 +   2 ", 3.0)]
#[case::decimals("3.25 * 4", 13.0)]
#[case::remainder("7.5 % 2", 1.5)]
fn arithmetic(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case::leading("-3+5", 2.0)]
#[case::after_operator("2*-3", -6.0)]
#[case::before_product("-3*2", -6.0)]
#[case::group("-(2+3)", -5.0)]
#[case::after_open_paren("(-2)*3", -6.0)]
#[case::double_keeps_last("- - 3", -3.0)]
#[case::fraction_truncates("-2.5", -2.0)]
#[case::after_close_paren_is_binary("(5)-2", 3.0)]
fn unary_minus(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case::less("1 < 2", 1.0)]
#[case::less_equal("2 <= 1", 0.0)]
#[case::greater("3 > 2", 1.0)]
#[case::greater_equal("2 >= 2", 1.0)]
#[case::equal("3 == 3", 1.0)]
#[case::not_equal("3 != 3", 0.0)]
#[case::exact_fractions("0.5 == 0.50", 1.0)]
#[case::and("1 && 0", 0.0)]
#[case::or("1 || 0", 1.0)]
#[case::not("!0", 1.0)]
#[case::not_dropped_before_negation("!-1", -1.0)]
#[case::truncated_and("0.9 && 1", 0.0)]
#[case::comparison_below_sum("1 + 2 == 3", 1.0)]
#[case::and_below_comparison("2 < 3 && 3 < 4", 1.0)]
#[case::or_below_and("0 || 1 && 0", 0.0)]
fn comparisons_and_logic(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case::and("6 & 3", 2.0)]
#[case::or("6 | 3", 7.0)]
#[case::xor("6 ^ 3", 5.0)]
#[case::complement("~0", -1.0)]
#[case::shift_left("1 << 4", 16.0)]
#[case::shift_right("256 >> 4", 16.0)]
#[case::shift_below_sum("1 << 2 + 1", 8.0)]
#[case::bitwise_ladder("1 | 2 ^ 3 & 1", 3.0)]
#[case::truncated_operands("6.9 & 3.9", 2.0)]
fn bitwise(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[test]
fn identifiers_resolve_by_registration_index() {
    assert_eq!(eval_with("x*y*2-8", &["x", "y"], &[2.0, 4.0]), 8.0);
    assert_eq!(eval_with("y - x", &["x", "y"], &[2.0, 4.0]), 2.0);
}

#[test]
fn identifiers_need_no_separators() {
    assert_eq!(eval_with("2*x+y", &["x", "y"], &[3.0, 1.0]), 7.0);
    assert_eq!(eval_with("(x)(y)", &["x", "y"], &[3.0, 1.0]), 3.0);
}

#[test]
fn longer_name_wins_over_its_prefix() {
    let names = ["val", "value"];
    assert_eq!(eval_with("value*2", &names, &[3.0, 5.0]), 10.0);
    assert_eq!(eval_with("val*2", &names, &[3.0, 5.0]), 6.0);
    assert_eq!(eval_with("value-val", &names, &[3.0, 5.0]), 2.0);
}

#[test]
fn out_of_range_identifier_is_one() {
    assert_eq!(eval_with("y", &["x", "y"], &[2.0]), 1.0);
    assert_eq!(eval_with("x + y", &["x", "y"], &[5.0]), 6.0);
}

#[test]
fn missing_operands_are_one() {
    assert_eq!(eval("2+"), 3.0);
    assert_eq!(eval("*3"), 3.0);
}

#[test]
fn blank_expression_builds_an_empty_tree() {
    let mut expression = Expression::new();
    assert!(expression.build("   ", NO_NAMES).is_ok());
    assert!(!expression.is_built());
    assert_eq!(expression.evaluate(&[]), 1.0);
}

#[test]
fn unrecognizable_expression_is_error() {
    let mut expression = Expression::new();
    expression.build("1+1", NO_NAMES).unwrap();

    let err = expression.build("abc", NO_NAMES).unwrap_err();
    assert_eq!(err, ParseError::NoTokens { expression: "abc".to_string() });
    assert!(!expression.is_built(), "failed build must release the old tree");
}

#[test]
fn unbalanced_parentheses_are_tolerated() {
    assert_eq!(eval("(2+3"), 5.0);
    assert_eq!(eval("2+3)"), 5.0);
}

#[test]
fn division_by_zero_follows_float_semantics() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval("-1/0"), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
    assert!(eval("1 % 0").is_nan());
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let mut expression = Expression::new();
    expression.build("x / 3 + y * 0.1", &["x", "y"]).unwrap();

    let values = [1.0, 7.0];
    let first = expression.evaluate(&values);
    for _ in 0..10 {
        assert_eq!(expression.evaluate(&values).to_bits(), first.to_bits());
    }
}

#[test]
fn build_release_rebuild() {
    let mut expression = Expression::new();
    expression.build("1+2", NO_NAMES).unwrap();
    assert_eq!(expression.evaluate(&[]), 3.0);

    expression.release();
    assert!(!expression.is_built());
    assert_eq!(expression.evaluate(&[]), 1.0);
    expression.release();

    expression.build("x*3", &["x"]).unwrap();
    assert_eq!(expression.evaluate(&[2.0]), 6.0);
    assert_eq!(expression.root().map(ToString::to_string).as_deref(), Some("($0 * 3)"));

    expression.build("x-y", &["y", "x"]).unwrap();
    assert_eq!(expression.evaluate(&[1.0, 10.0]), 9.0);
}

#[test]
fn rebuild_uses_stored_source() {
    let mut expression = Expression::with_source("a*b");
    assert_eq!(expression.source(), Some("a*b"));

    expression.rebuild(&["a", "b"]).unwrap();
    assert_eq!(expression.evaluate(&[2.0, 5.0]), 10.0);

    expression.rebuild(&["b", "a"]).unwrap();
    assert_eq!(expression.evaluate(&[2.0, 7.0]), 14.0);
}

#[test]
fn rebuild_without_source_is_error() {
    let mut expression = Expression::new();
    assert_eq!(expression.rebuild(NO_NAMES), Err(ParseError::MissingSource));
}

#[test]
fn keyword_options_apply_per_name() {
    let mut expression = Expression::new();
    let keywords = [Keyword::new("PI").case_insensitive(), Keyword::new("r")];

    expression.build_with_keywords("pi * r * r", keywords.clone()).unwrap();
    assert_eq!(expression.evaluate(&[3.0, 2.0]), 12.0);

    // `R` is not `r`: it is skipped, leaving `*` without a right operand.
    expression.build_with_keywords("Pi * R", keywords).unwrap();
    assert_eq!(expression.evaluate(&[3.0, 2.0]), 3.0);
}

#[test]
fn line_anchored_name_only_at_line_start() {
    let mut expression = Expression::new();

    expression.build_with_keywords("  x + 1", [Keyword::new("x").line_anchored()]).unwrap();
    assert_eq!(expression.evaluate(&[5.0]), 6.0);

    // Not at the line start: `x` is not recognized and `+` loses its right
    // operand.
    expression.build_with_keywords("1 + x", [Keyword::new("x").line_anchored()]).unwrap();
    assert_eq!(expression.evaluate(&[5.0]), 2.0);
}

#[test]
fn long_chains_build_and_release() {
    let src = vec!["1"; 2000].join("+");
    let mut expression = Expression::new();
    expression.build(&src, NO_NAMES).unwrap();

    assert_eq!(expression.evaluate(&[]), 2000.0);
    assert_eq!(expression.root().map(|root| root.node_count()), Some(3999));

    expression.release();
    assert!(expression.root().is_none());
}

#[test]
fn long_numerals_evaluate_to_their_value() {
    assert_eq!(eval(&format!("1.{}", "0".repeat(400))), 1.0);
    assert_eq!(eval(&format!("0.{} * 3", "3".repeat(350))), 1.0);
}
