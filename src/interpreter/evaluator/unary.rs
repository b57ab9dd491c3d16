use crate::{
    ast::UnaryOperator,
    util::num::{from_bool, truncate, widen},
};

/// Evaluates a prefix operator on its operand.
///
/// - `Negate`: negation of the truncated operand.
/// - `Not`: `1` if the truncated operand is zero, otherwise `0`.
/// - `BitNot`: bitwise complement of the truncated operand.
///
/// # Example
/// ```
/// use infix_tree::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 2.5), -2.0);
/// assert_eq!(eval_unary(UnaryOperator::Not, 0.4), 1.0);
/// assert_eq!(eval_unary(UnaryOperator::BitNot, 5.0), -6.0);
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, operand: f64) -> f64 {
    match op {
        UnaryOperator::Negate => widen(truncate(operand).saturating_neg()),
        UnaryOperator::Not => from_bool(truncate(operand) == 0),
        UnaryOperator::BitNot => widen(!truncate(operand)),
    }
}
