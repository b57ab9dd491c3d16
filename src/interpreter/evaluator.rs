/// Tree walking.
///
/// Resolves leaves against the value vector and dispatches operator nodes,
/// substituting sentinels for absent operands and unknown identifiers.
pub mod core;

/// Prefix operator evaluation: negation, logical NOT and bitwise complement.
pub mod unary;

/// Infix operator evaluation.
///
/// Arithmetic on the floating-point values, exact comparisons yielding
/// `0`/`1`, and logical and bitwise operators on truncated integer views.
pub mod binary;
