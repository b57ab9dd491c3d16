use tracing::{debug, trace};

use crate::interpreter::matcher::{
    automaton::{Automaton, ROOT},
    keyword::{Keyword, KeywordId, Match},
};

/// Locates every occurrence of a set of keywords in a single pass.
///
/// Case-sensitive keywords live in one automaton fed the raw text;
/// case-insensitive keywords live in a second automaton fed the lowercased
/// text. Both advance together over the same characters, so a scan costs
/// `O(text length + matches)` regardless of how many keywords are
/// registered.
///
/// ## Example
/// ```
/// use infix_tree::interpreter::matcher::{Keyword, Matcher};
///
/// let mut matcher = Matcher::new();
/// let val = matcher.register(Keyword::new("val"));
/// let value = matcher.register(Keyword::new("value"));
///
/// let matches = matcher.scan("value");
/// assert!(matches.iter().any(|m| m.keyword == value && m.position == 0 && m.length == 5));
/// assert!(matches.iter().any(|m| m.keyword == val && m.position == 0 && m.length == 3));
/// ```
#[derive(Debug, Default)]
pub struct Matcher {
    keywords: Vec<Keyword>,
    /// Character count of each keyword, indexed by id.
    lengths:  Vec<usize>,
    exact:    Automaton,
    caseless: Automaton,
}

impl Matcher {
    /// Creates a matcher with no keywords.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher and registers every keyword in order, so the n-th
    /// item receives id `n`.
    pub fn from_keywords<I>(keywords: I) -> Self
        where I: IntoIterator,
              I::Item: Into<Keyword>
    {
        let mut matcher = Self::new();
        for keyword in keywords {
            matcher.register(keyword);
        }
        matcher
    }

    /// Adds a keyword and returns its id, which is its registration index.
    ///
    /// Failure links are recomputed lazily by the next [`Matcher::scan`].
    pub fn register(&mut self, keyword: impl Into<Keyword>) -> KeywordId {
        let keyword = keyword.into();
        let id = self.keywords.len();

        if keyword.case_sensitive {
            self.exact.insert(keyword.name.chars(), id);
        } else {
            self.caseless.insert(keyword.name.chars().map(fold), id);
        }

        self.lengths.push(keyword.name.chars().count());
        self.keywords.push(keyword);
        id
    }

    /// The registered keywords, indexed by id.
    #[must_use]
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Computes failure links for any keywords registered since the last
    /// compile. Called by [`Matcher::scan`]; exposed so the preprocessing
    /// cost can be paid up front.
    pub fn compile(&mut self) {
        if self.exact.is_compiled() && self.caseless.is_compiled() {
            return;
        }

        self.exact.compile();
        self.caseless.compile();
        debug!(keywords = self.keywords.len(),
               states = self.exact.state_count() + self.caseless.state_count(),
               "compiled keyword automaton");
    }

    /// Scans `text` and returns every keyword occurrence.
    ///
    /// Matches are ordered by their end position. All keywords ending at the
    /// same position are reported, longer ones first, including overlapping
    /// ones such as `val` and `value`. Line-anchored keywords are reported
    /// only when their first character sits at the start of a line or is
    /// preceded on its line by nothing but spaces and tabs.
    pub fn scan(&mut self, text: &str) -> Vec<Match> {
        self.compile();
        self.find_all(text)
    }

    fn find_all(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        if text.is_empty() || self.keywords.is_empty() {
            return matches;
        }

        // Per character: its byte offset, and whether a line-anchored
        // keyword may start there.
        let mut offsets = Vec::with_capacity(text.len());
        let mut anchorable = Vec::with_capacity(text.len());
        let mut at_line_start = true;

        let mut exact_state = ROOT;
        let mut caseless_state = ROOT;

        for (index, (offset, c)) in text.char_indices().enumerate() {
            offsets.push(offset);
            anchorable.push(at_line_start);

            let end = offset + c.len_utf8();

            if !self.exact.is_empty() {
                exact_state = self.exact.transition(exact_state, c);
            }
            if !self.caseless.is_empty() {
                caseless_state = self.caseless.transition(caseless_state, fold(c));
            }

            let completed = self.exact
                                .outputs(exact_state)
                                .iter()
                                .chain(self.caseless.outputs(caseless_state));

            for &id in completed {
                let start = index + 1 - self.lengths[id];
                if self.keywords[id].line_anchored && !anchorable[start] {
                    trace!(keyword = %self.keywords[id].name, offset = offsets[start],
                           "anchored keyword not at line start");
                    continue;
                }

                matches.push(Match { position: offsets[start],
                                     length:   end - offsets[start],
                                     keyword:  id, });
            }

            match c {
                '\n' => at_line_start = true,
                ' ' | '\t' => {},
                _ => at_line_start = false,
            }
        }

        matches
    }
}

/// Folds a character for case-insensitive matching.
///
/// Characters whose lowercase form is more than one character are left as
/// they are, so folding never changes the character count.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
