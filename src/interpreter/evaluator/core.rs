use crate::{
    ast::Node,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Value of an absent operand, such as a missing side of a malformed binary
/// operation or the tree of a blank expression.
pub const ABSENT_OPERAND: f64 = 1.0;

/// Value of an identifier whose keyword id has no entry in the value vector.
pub const UNKNOWN_IDENTIFIER: f64 = 1.0;

/// Evaluates a tree against a value vector.
///
/// Children are evaluated before their parent. The tree is only read, so
/// repeated calls with the same values give bit-identical results.
///
/// Degenerate cases never fail:
/// - an absent subtree evaluates to [`ABSENT_OPERAND`];
/// - an identifier past the end of `values` evaluates to
///   [`UNKNOWN_IDENTIFIER`];
/// - division by zero and other numeric exceptions follow `f64` semantics
///   (infinities and `NaN`).
///
/// # Parameters
/// - `node`: The tree, or `None` for an absent subtree.
/// - `values`: Variable values indexed by keyword id.
///
/// # Example
/// ```
/// use infix_tree::{
///     ast::{BinaryOperator, Node},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let tree = Node::Binary { op:    BinaryOperator::Mul,
///                           left:  Some(Box::new(Node::Identifier(0))),
///                           right: Some(Box::new(Node::Identifier(1))), };
/// assert_eq!(evaluate(Some(&tree), &[2.0, 4.0]), 8.0);
///
/// // `$1` is out of range and falls back to 1.
/// assert_eq!(evaluate(Some(&tree), &[2.0]), 2.0);
/// assert_eq!(evaluate(None, &[]), 1.0);
/// ```
#[must_use]
pub fn evaluate(node: Option<&Node>, values: &[f64]) -> f64 {
    let Some(node) = node else {
        return ABSENT_OPERAND;
    };

    match node {
        Node::Number(value) => *value,
        Node::Identifier(id) => values.get(*id).copied().unwrap_or(UNKNOWN_IDENTIFIER),
        Node::Unary { op, operand } => eval_unary(*op, evaluate(operand.as_deref(), values)),
        Node::Binary { op, left, right } => {
            let left = evaluate(left.as_deref(), values);
            let right = evaluate(right.as_deref(), values);
            eval_binary(*op, left, right)
        },
    }
}
