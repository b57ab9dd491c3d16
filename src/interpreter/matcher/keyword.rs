/// Index of a keyword in registration order.
///
/// The same index selects the keyword's value from the value vector at
/// evaluation time.
pub type KeywordId = usize;

/// A registered search pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// The text to search for.
    pub name:           String,
    /// Whether letters must match exactly. Case-insensitive keywords match
    /// any per-character lowercase-equal spelling.
    pub case_sensitive: bool,
    /// Whether the keyword only matches when nothing but spaces or tabs
    /// precede it on its line.
    pub line_anchored:  bool,
}

impl Keyword {
    /// Creates a case-sensitive, unanchored keyword.
    ///
    /// ## Example
    /// ```
    /// use infix_tree::interpreter::matcher::Keyword;
    ///
    /// let keyword = Keyword::new("PI").case_insensitive();
    /// assert_eq!(keyword.name, "PI");
    /// assert!(!keyword.case_sensitive);
    /// assert!(!keyword.line_anchored);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:           name.into(),
               case_sensitive: true,
               line_anchored:  false, }
    }

    /// Makes the keyword match regardless of letter case.
    #[must_use]
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Restricts the keyword to the first non-blank position of a line.
    #[must_use]
    pub fn line_anchored(mut self) -> Self {
        self.line_anchored = true;
        self
    }
}

impl From<&str> for Keyword {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Keyword {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// One located occurrence of a keyword.
///
/// `position` and `length` are byte offsets into the scanned text and always
/// fall on char boundaries; `position + length` never exceeds the text
/// length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Match {
    /// Byte offset of the first character of the occurrence.
    pub position: usize,
    /// Length of the occurrence in bytes.
    pub length:   usize,
    /// The keyword that occurred.
    pub keyword:  KeywordId,
}

impl Match {
    /// Byte offset one past the last character of the occurrence.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.length
    }
}
