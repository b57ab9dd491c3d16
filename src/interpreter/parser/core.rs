use tracing::debug;

use crate::{
    ast::{Node, Operator},
    interpreter::{lexer::Token, parser::split::select_split},
};

/// Builds the operator tree for a token range.
///
/// The operator chosen by [`select_split`] becomes the root. Tokens left of
/// it form the left subtree and tokens right of it the right subtree, each
/// built the same way. A range without operators becomes a leaf, and an
/// empty range becomes an absent subtree (`None`).
///
/// Prefix operators have no left operand: anything left of a prefix split is
/// discarded.
///
/// # Parameters
/// - `tokens`: A contiguous token range.
///
/// # Returns
/// The root of the tree, or `None` for an empty range.
///
/// # Example
/// ```
/// use infix_tree::interpreter::{lexer::tokenize, parser::core::build_tree};
///
/// let tree = build_tree(&tokenize("8-3-2", &[])).unwrap();
/// assert_eq!(tree.to_string(), "((8 - 3) - 2)");
///
/// let tree = build_tree(&tokenize("2+3*4", &[])).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
/// ```
#[must_use]
pub fn build_tree(tokens: &[Token]) -> Option<Box<Node>> {
    let Some(split) = select_split(tokens) else {
        return build_leaf(tokens);
    };

    let (before, rest) = tokens.split_at(split);
    let Some((Token::Operator(operator), after)) = rest.split_first() else {
        return None;
    };

    let node = match operator.op {
        Operator::Unary(op) => {
            if !before.is_empty() {
                debug!(discarded = before.len(), operator = %op, "dropping tokens left of prefix operator");
            }
            Node::Unary { op,
                          operand: build_tree(after) }
        },
        Operator::Binary(op) => Node::Binary { op,
                                               left: build_tree(before),
                                               right: build_tree(after) },
    };

    Some(Box::new(node))
}

/// Builds a leaf from a range holding no operator tokens.
fn build_leaf(tokens: &[Token]) -> Option<Box<Node>> {
    let (first, rest) = tokens.split_first()?;

    if !rest.is_empty() {
        debug!(ignored = rest.len(), "operand followed by operands without an operator");
    }

    match *first {
        Token::Number(value) => Some(Box::new(Node::Number(value))),
        Token::Identifier(id) => Some(Box::new(Node::Identifier(id))),
        Token::Operator(_) => None,
    }
}
