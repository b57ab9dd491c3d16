use crate::{
    ast::Precedence,
    interpreter::lexer::{OperatorToken, Token},
};

/// Ordering key of a split candidate; the minimum wins.
///
/// Fields compare in declaration order:
/// 1. `depth`: shallower operators win, so parenthesized groups stay whole.
/// 2. `precedence`: weaker-binding operators win, since they are applied
///    last and belong nearest the root.
/// 3. `order`: the later occurrence wins, which makes binary chains
///    left-associative. A prefix operator never takes a left operand, so in
///    `- - x` the second `-` becomes the root and the first is dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SplitKey {
    /// Parenthesis depth of the operator.
    pub depth:      isize,
    /// Binding strength class of the operator.
    pub precedence: Precedence,
    /// Position tie-break.
    pub order:      usize,
}

impl SplitKey {
    /// Builds the key for one operator token.
    ///
    /// Ranks decrease in source order, so the rank is the position
    /// tie-break as it stands.
    ///
    /// # Example
    /// ```
    /// use infix_tree::{
    ///     ast::{BinaryOperator, Operator},
    ///     interpreter::{lexer::OperatorToken, parser::split::SplitKey},
    /// };
    ///
    /// let earlier = OperatorToken { op:    Operator::Binary(BinaryOperator::Sub),
    ///                               depth: 0,
    ///                               rank:  5, };
    /// let later = OperatorToken { rank: 4, ..earlier };
    /// assert!(SplitKey::of(&later) < SplitKey::of(&earlier));
    /// ```
    #[must_use]
    pub const fn of(token: &OperatorToken) -> Self {
        Self { depth:      token.depth,
               precedence: token.op.precedence(),
               order:      token.rank, }
    }
}

/// Finds the index of the operator that must be the root of `tokens`.
///
/// # Returns
/// The index of the operator token with the smallest [`SplitKey`], or
/// `None` if the range holds no operator.
///
/// # Example
/// ```
/// use infix_tree::interpreter::{lexer::tokenize, parser::split::select_split};
///
/// // `2+3*4`: the `+` at index 1 binds weakest.
/// let tokens = tokenize("2+3*4", &[]);
/// assert_eq!(select_split(&tokens), Some(1));
///
/// // `(2+3)*4`: the `*` at index 3 sits outside the parentheses.
/// let tokens = tokenize("(2+3)*4", &[]);
/// assert_eq!(select_split(&tokens), Some(3));
/// ```
#[must_use]
pub fn select_split(tokens: &[Token]) -> Option<usize> {
    tokens.iter()
          .enumerate()
          .filter_map(|(index, token)| token.as_operator().map(|op| (index, SplitKey::of(op))))
          .min_by_key(|&(_, key)| key)
          .map(|(index, _)| index)
}
