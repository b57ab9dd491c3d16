use infix_tree::{
    ast::{BinaryOperator, Operator, UnaryOperator},
    interpreter::{
        lexer::{Token, tokenize},
        matcher::Matcher,
    },
};
use rstest::rstest;

fn lex(src: &str, names: &[&str]) -> Vec<Token> {
    let mut matcher = Matcher::from_keywords(names.iter().copied());
    tokenize(src, &matcher.scan(src))
}

fn operators(tokens: &[Token]) -> Vec<Operator> {
    tokens.iter().filter_map(Token::as_operator).map(|op| op.op).collect()
}

fn numbers(tokens: &[Token]) -> Vec<f64> {
    tokens.iter()
          .filter_map(|token| match token {
              Token::Number(value) => Some(*value),
              _ => None,
          })
          .collect()
}

#[rstest]
#[case("1+2", BinaryOperator::Add)]
#[case("1-2", BinaryOperator::Sub)]
#[case("1*2", BinaryOperator::Mul)]
#[case("1/2", BinaryOperator::Div)]
#[case("1%2", BinaryOperator::Mod)]
#[case("1^2", BinaryOperator::BitXor)]
#[case("1==2", BinaryOperator::Equal)]
#[case("1!=2", BinaryOperator::NotEqual)]
#[case("1<2", BinaryOperator::Less)]
#[case("1>2", BinaryOperator::Greater)]
#[case("1<=2", BinaryOperator::LessEqual)]
#[case("1>=2", BinaryOperator::GreaterEqual)]
#[case("1&&2", BinaryOperator::And)]
#[case("1||2", BinaryOperator::Or)]
#[case("1&2", BinaryOperator::BitAnd)]
#[case("1|2", BinaryOperator::BitOr)]
#[case("1<<2", BinaryOperator::ShiftLeft)]
#[case("1>>2", BinaryOperator::ShiftRight)]
fn binary_operators(#[case] src: &str, #[case] expected: BinaryOperator) {
    let tokens = lex(src, &[]);
    assert_eq!(operators(&tokens), vec![Operator::Binary(expected)]);
    assert_eq!(numbers(&tokens), vec![1.0, 2.0]);
}

#[rstest]
#[case::trailing_less("1<", Operator::Binary(BinaryOperator::Less))]
#[case::trailing_ampersand("1&", Operator::Binary(BinaryOperator::BitAnd))]
#[case::trailing_pipe("1|", Operator::Binary(BinaryOperator::BitOr))]
#[case::trailing_bang("1!", Operator::Unary(UnaryOperator::Not))]
#[case::tilde("~1", Operator::Unary(UnaryOperator::BitNot))]
fn single_character_forms_at_end_of_text(#[case] src: &str, #[case] expected: Operator) {
    assert_eq!(operators(&lex(src, &[])), vec![expected]);
}

#[rstest]
#[case::start_of_expression("-1", &[true])]
#[case::after_number("2-1", &[false])]
#[case::after_open_paren("(-1)", &[true])]
#[case::after_operator("2*-1", &[false, true])]
#[case::after_close_paren("(1)-2", &[false])]
#[case::after_identifier("x-1", &[false])]
#[case::double("--1", &[true, true])]
fn minus_is_negation_in_prefix_position(#[case] src: &str, #[case] is_negation: &[bool]) {
    let minus_kinds: Vec<bool> =
        operators(&lex(src, &["x"])).into_iter()
                                    .filter(|op| {
                                        matches!(op,
                                                 Operator::Unary(UnaryOperator::Negate)
                                                 | Operator::Binary(BinaryOperator::Sub))
                                    })
                                    .map(|op| op == Operator::Unary(UnaryOperator::Negate))
                                    .collect();
    assert_eq!(minus_kinds, is_negation);
}

#[test]
fn operators_carry_parenthesis_depth() {
    let tokens = lex("(1+(2*3))-4", &[]);
    let depths: Vec<isize> = tokens.iter().filter_map(Token::as_operator).map(|op| op.depth).collect();
    assert_eq!(depths, vec![1, 2, 0]);
}

#[test]
fn operator_ranks_decrease_in_source_order() {
    let tokens = lex("1+2+3*4-5", &[]);
    let ranks: Vec<usize> = tokens.iter().filter_map(Token::as_operator).map(|op| op.rank).collect();
    assert_eq!(ranks.len(), 4);
    assert!(ranks.windows(2).all(|pair| pair[0] > pair[1]));
}

#[rstest]
#[case::integer("42", &[42.0])]
#[case::leading_zeros("007", &[7.0])]
#[case::decimal("12.5", &[12.5])]
#[case::leading_dot(".5", &[0.5])]
#[case::trailing_dot("3.", &[3.0])]
#[case::first_dot_only("1.2.3", &[1.23])]
#[case::space_separated("1 2", &[1.0, 2.0])]
#[case::lone_dot(".", &[])]
#[case::dots_only("..", &[])]
fn numerals(#[case] src: &str, #[case] expected: &[f64]) {
    assert_eq!(numbers(&lex(src, &[])), expected);
}

#[rstest]
#[case::trailing_zeros(format!("1.{}", "0".repeat(400)), 1.0)]
#[case::repeating_fraction(format!("0.{}", "3".repeat(400)), 1.0 / 3.0)]
#[case::leading_zeros(format!("{}2.5", "0".repeat(400)), 2.5)]
#[case::vanishing_fraction(format!("0.{}1", "0".repeat(400)), 0.0)]
fn long_numerals_stay_finite(#[case] src: String, #[case] expected: f64) {
    assert_eq!(numbers(&lex(&src, &[])), vec![expected]);
}

#[test]
fn unrecognized_characters_are_skipped() {
    let tokens = lex("1 $ 2 + 3", &[]);
    assert_eq!(numbers(&tokens), vec![1.0, 2.0, 3.0]);
    assert_eq!(operators(&tokens), vec![Operator::Binary(BinaryOperator::Add)]);

    assert_eq!(lex("1=2", &[]), vec![Token::Number(1.0), Token::Number(2.0)]);
    assert!(lex("abc", &[]).is_empty());
}

#[test]
fn identifiers_come_from_matches() {
    let tokens = lex("value+val", &["val", "value"]);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], Token::Identifier(1));
    assert_eq!(tokens[2], Token::Identifier(0));
}

#[test]
fn overlapped_matches_are_not_consumed_twice() {
    let tokens = lex("ab+b", &["ab", "b"]);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], Token::Identifier(0));
    assert_eq!(tokens[2], Token::Identifier(1));
}

#[test]
fn numerals_and_identifiers_keep_source_order() {
    assert_eq!(lex("2x", &["x"]), vec![Token::Number(2.0), Token::Identifier(0)]);
    assert_eq!(lex("x2", &["x"]), vec![Token::Identifier(0), Token::Number(2.0)]);
}

#[test]
fn identifiers_may_contain_operator_characters() {
    let tokens = lex("a-b*2", &["a-b"]);
    assert_eq!(tokens[0], Token::Identifier(0));
    assert_eq!(operators(&tokens), vec![Operator::Binary(BinaryOperator::Mul)]);
}
