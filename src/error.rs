/// Expression build errors.
///
/// Defines the errors surfaced at the public build boundary when an
/// expression cannot be turned into a tree at all. Evaluation itself never
/// fails; degenerate cases there resolve to sentinel values instead.
pub mod parse_error;

pub use parse_error::{ParseError, ParseResult};
