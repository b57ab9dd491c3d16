use tracing::debug;

use crate::{
    ast::Node,
    error::{ParseError, ParseResult},
    interpreter::{
        evaluator::core::evaluate,
        lexer::tokenize,
        matcher::{Keyword, Matcher},
        parser::core::build_tree,
    },
};

/// A built, re-evaluable expression.
///
/// `Expression` owns the operator tree of the last successful build. Building
/// again (or calling [`Expression::release`]) frees the previous tree first;
/// every node is freed exactly once, iteratively, however deep the tree is.
///
/// The keyword matcher is kept between builds and only rebuilt when the
/// registered names change.
///
/// A handle is meant for one thread at a time. Evaluating from several
/// threads requires one handle per thread.
///
/// # Example
/// ```
/// use infix_tree::Expression;
///
/// let mut expression = Expression::new();
/// expression.build("x*y*2-8", &["x", "y"]).unwrap();
///
/// assert_eq!(expression.evaluate(&[2.0, 4.0]), 8.0);
/// assert_eq!(expression.evaluate(&[3.0, 4.0]), 16.0);
///
/// expression.release();
/// assert!(!expression.is_built());
/// ```
#[derive(Debug, Default)]
pub struct Expression {
    source:  Option<String>,
    matcher: Matcher,
    root:    Option<Box<Node>>,
}

impl Expression {
    /// Creates an empty handle. Evaluating it yields the absent-operand
    /// sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle that remembers `source` for a later
    /// [`Expression::rebuild`].
    #[must_use]
    pub fn with_source(source: impl Into<String>) -> Self {
        Self { source: Some(source.into()),
               ..Self::default() }
    }

    /// Builds the tree for `expression`, recognizing `names` as
    /// case-sensitive variables. The n-th name is read from the n-th entry of
    /// the value vector passed to [`Expression::evaluate`].
    ///
    /// # Errors
    /// Returns [`ParseError::NoTokens`] if `expression` is not blank but
    /// contains nothing recognizable. The previous tree is released either
    /// way.
    pub fn build<S: AsRef<str>>(&mut self, expression: &str, names: &[S]) -> ParseResult<()> {
        self.build_with_keywords(expression, names.iter().map(|name| Keyword::new(name.as_ref())))
    }

    /// Builds the tree for `expression` with fully specified keywords, so
    /// individual names can be case-insensitive or line-anchored.
    ///
    /// # Errors
    /// Same as [`Expression::build`].
    ///
    /// # Example
    /// ```
    /// use infix_tree::{Expression, interpreter::matcher::Keyword};
    ///
    /// let mut expression = Expression::new();
    /// expression.build_with_keywords("pi * 2", [Keyword::new("PI").case_insensitive()])
    ///           .unwrap();
    /// assert_eq!(expression.evaluate(&[3.0]), 6.0);
    /// ```
    pub fn build_with_keywords<I>(&mut self, expression: &str, keywords: I) -> ParseResult<()>
        where I: IntoIterator,
              I::Item: Into<Keyword>
    {
        self.release();
        self.source = Some(expression.to_owned());

        let keywords: Vec<Keyword> = keywords.into_iter().map(Into::into).collect();
        if self.matcher.keywords() != keywords.as_slice() {
            self.matcher = Matcher::from_keywords(keywords);
        }

        let matches = self.matcher.scan(expression);
        let tokens = tokenize(expression, &matches);

        if tokens.is_empty() && !expression.trim().is_empty() {
            return Err(ParseError::NoTokens { expression: expression.to_owned() });
        }

        self.root = build_tree(&tokens);
        debug!(matches = matches.len(),
               tokens = tokens.len(),
               nodes = self.root.as_deref().map_or(0, Node::node_count),
               "built expression tree");
        Ok(())
    }

    /// Rebuilds the tree from the stored source with a new list of names.
    ///
    /// # Errors
    /// Returns [`ParseError::MissingSource`] if the handle has never been
    /// given source text, otherwise the same errors as
    /// [`Expression::build`].
    ///
    /// # Example
    /// ```
    /// use infix_tree::Expression;
    ///
    /// let mut expression = Expression::with_source("a + b");
    /// expression.rebuild(&["a", "b"]).unwrap();
    /// assert_eq!(expression.evaluate(&[1.0, 2.0]), 3.0);
    /// ```
    pub fn rebuild<S: AsRef<str>>(&mut self, names: &[S]) -> ParseResult<()> {
        let source = self.source.take().ok_or(ParseError::MissingSource)?;
        self.build(&source, names)
    }

    /// Evaluates the current tree with `values` indexed by keyword id.
    ///
    /// Never fails: a missing tree or operand evaluates to `1`, as does a
    /// name whose id is past the end of `values`.
    #[must_use]
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        evaluate(self.root.as_deref(), values)
    }

    /// Frees the current tree. Safe to call on an empty handle.
    pub fn release(&mut self) {
        self.root = None;
    }

    /// The root of the current tree, if one is built.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Whether a tree is currently built.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.root.is_some()
    }

    /// The text of the last build, or of [`Expression::with_source`].
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
