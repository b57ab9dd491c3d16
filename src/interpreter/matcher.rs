/// Trie construction and failure links.
///
/// Holds the arena of trie states, builds failure links breadth-first and
/// propagates completed keyword ids along them.
pub mod automaton;

/// The multi-pattern matcher.
///
/// Registers keywords with their matching options and scans text for all of
/// them in one pass, honoring per-keyword case folding and line anchoring.
pub mod core;

/// Keyword and match value types.
pub mod keyword;

pub use self::{
    core::Matcher,
    keyword::{Keyword, KeywordId, Match},
};
