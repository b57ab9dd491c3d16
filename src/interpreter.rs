/// The evaluator module computes a scalar from an operator tree.
///
/// The evaluator walks the tree built by the parser, resolves identifiers
/// against the caller's value vector and applies fixed numeric, logical and
/// bitwise semantics per operator.
///
/// # Responsibilities
/// - Evaluates every node kind, post-order.
/// - Substitutes sentinel values for absent operands and out-of-range
///   identifiers instead of failing.
pub mod evaluator;
/// The lexer module tokenizes expressions for the parser.
///
/// The lexer reads the raw expression together with the matcher's keyword
/// occurrences and produces operator, numeral and identifier tokens, tracking
/// parenthesis depth and telling unary from binary minus.
///
/// # Responsibilities
/// - Recognizes single- and double-character operators.
/// - Decodes decimal numerals.
/// - Consumes keyword matches as identifiers without double-consuming text.
pub mod lexer;
/// The matcher module finds registered names in expression text.
///
/// Names are located with an Aho-Corasick automaton, so no separators are
/// needed around them and the cost of a scan does not grow with the number
/// of names.
///
/// # Responsibilities
/// - Registers keywords with case-sensitivity and line-anchoring options.
/// - Reports every occurrence, overlapping ones included, in one pass.
pub mod matcher;
/// The parser module builds the operator tree from tokens.
///
/// The parser picks, for every token range, the operator that must sit at
/// the root of that range, and recurses on both sides of it.
///
/// # Responsibilities
/// - Ranks split candidates by depth, precedence and position.
/// - Produces left-associative chains and self-contained parenthesized
///   groups.
pub mod parser;
