use crate::{
    ast::BinaryOperator,
    util::num::{from_bool, shift_left, shift_right, truncate, widen},
};

/// Evaluates an infix operator on two operands.
///
/// Arithmetic operates on the floating-point values directly, with `%` as
/// the floating remainder. Comparisons are exact (no tolerance) and yield
/// `1` or `0`. Logical and bitwise operators work on the truncated integer
/// views of both operands; both sides are always evaluated.
///
/// # Example
/// ```
/// use infix_tree::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Mod, 7.5, 2.0), 1.5);
/// assert_eq!(eval_binary(BinaryOperator::LessEqual, 2.0, 2.0), 1.0);
/// assert_eq!(eval_binary(BinaryOperator::And, 0.9, 3.0), 0.0);
/// assert_eq!(eval_binary(BinaryOperator::ShiftLeft, 3.7, 2.0), 12.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    use BinaryOperator::{
        Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod,
        Mul, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
    };

    let (left_view, right_view) = (truncate(left), truncate(right));

    match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => left / right,
        Mod => left % right,

        Equal => from_bool(left == right),
        NotEqual => from_bool(left != right),
        Less => from_bool(left < right),
        Greater => from_bool(left > right),
        LessEqual => from_bool(left <= right),
        GreaterEqual => from_bool(left >= right),

        And => from_bool(left_view != 0 && right_view != 0),
        Or => from_bool(left_view != 0 || right_view != 0),

        BitAnd => widen(left_view & right_view),
        BitOr => widen(left_view | right_view),
        BitXor => widen(left_view ^ right_view),
        ShiftLeft => widen(shift_left(left_view, right_view)),
        ShiftRight => widen(shift_right(left_view, right_view)),
    }
}
