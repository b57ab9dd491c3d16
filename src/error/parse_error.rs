use thiserror::Error;

/// Result type returned by the build entry points.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur while building an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression contains non-blank text, but none of it was recognized
    /// as a numeral, an operator or a registered name.
    #[error("Expression `{expression}` contains no numerals, operators or known names.")]
    NoTokens {
        /// The expression that was rejected.
        expression: String,
    },
    /// `rebuild` was called on a handle that never received source text.
    #[error("No expression source to rebuild from.")]
    MissingSource,
}
