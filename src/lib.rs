//! # infix-tree
//!
//! infix-tree turns small infix expressions over named variables into
//! operator trees that can be evaluated again and again with different
//! variable values.
//!
//! Names are located with a multi-pattern matcher, so they need no
//! separators around them; the tokenizer merges those occurrences with
//! operators and numerals, and the parser shapes the tree by parenthesis
//! depth, precedence and position.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the operator tree.
///
/// This module declares the `Node` enum that represents a built expression
/// together with the operator kinds and their precedence classes.
///
/// # Responsibilities
/// - Defines unary and binary operators and their binding strength.
/// - Owns tree nodes exclusively and releases them without recursion.
pub mod ast;
/// Provides the error types of the build boundary.
///
/// Evaluation never fails, so the only errors are those raised when an
/// expression cannot be built at all.
pub mod error;
/// The public handle tying matcher, lexer, parser and evaluator together.
pub mod expression;
/// Orchestrates the pipeline from text to value.
///
/// This module holds the matcher, lexer, parser and evaluator stages.
///
/// # Responsibilities
/// - Locates registered names in the expression text.
/// - Converts text into tokens and tokens into a tree.
/// - Evaluates trees against value vectors.
pub mod interpreter;
/// General numeric helpers.
///
/// Integer operand views and panic-free shifts shared by the evaluator.
pub mod util;

pub use crate::{
    error::{ParseError, ParseResult},
    expression::Expression,
};

/// Builds `expression` once and evaluates it with `values`.
///
/// Convenient for one-off calculations; use [`Expression`] to evaluate the
/// same expression repeatedly.
///
/// # Errors
/// Returns an error if the expression contains nothing recognizable.
///
/// # Examples
/// ```
/// use infix_tree::evaluate_once;
///
/// assert_eq!(evaluate_once("2+3*4", &[] as &[&str], &[]).unwrap(), 14.0);
/// assert_eq!(evaluate_once("(2+3)*4", &[] as &[&str], &[]).unwrap(), 20.0);
/// assert_eq!(evaluate_once("PI * 2", &["PI"], &[3.0]).unwrap(), 6.0);
///
/// assert!(evaluate_once("abc", &[] as &[&str], &[]).is_err());
/// ```
pub fn evaluate_once<S: AsRef<str>>(expression: &str,
                                    names: &[S],
                                    values: &[f64])
                                    -> ParseResult<f64> {
    let mut built = Expression::new();
    built.build(expression, names)?;
    Ok(built.evaluate(values))
}
