/// Tree construction.
///
/// Recursively partitions a token range around its split operator and
/// produces the operator tree.
pub mod core;

/// Split-point selection.
///
/// Ranks operator tokens by parenthesis depth, precedence and position so
/// the root of every subtree can be chosen by a single minimum.
pub mod split;
