use logos::Logos;
use tracing::{trace, warn};

use crate::{
    ast::{BinaryOperator, Operator, UnaryOperator},
    interpreter::matcher::{KeywordId, Match},
};

/// A single character-level symbol recognized at the current scan position.
///
/// Names are never lexed here; they come from the matcher. Anything this
/// lexer rejects is skipped by the tokenizer.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// A single decimal digit, carrying its value.
    #[regex("[0-9]", parse_digit)]
    Digit(u8),
    /// `.`
    #[token(".")]
    Dot,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]")]
    Whitespace,
}

impl Symbol {
    /// Maps the symbol to the operator it denotes.
    ///
    /// `-` is negation when it appears in prefix position (after an
    /// operator, after `(`, or at the start of the expression) and
    /// subtraction otherwise. Returns `None` for symbols that are not
    /// operators.
    ///
    /// # Example
    /// ```
    /// use infix_tree::{
    ///     ast::{BinaryOperator, Operator, UnaryOperator},
    ///     interpreter::lexer::Symbol,
    /// };
    ///
    /// assert_eq!(Symbol::Minus.operator(true), Some(Operator::Unary(UnaryOperator::Negate)));
    /// assert_eq!(Symbol::Minus.operator(false), Some(Operator::Binary(BinaryOperator::Sub)));
    /// assert_eq!(Symbol::Dot.operator(false), None);
    /// ```
    #[must_use]
    pub const fn operator(self, prefix_position: bool) -> Option<Operator> {
        use BinaryOperator as B;
        use UnaryOperator as U;

        let op = match self {
            Self::Minus if prefix_position => Operator::Unary(U::Negate),
            Self::Minus => Operator::Binary(B::Sub),
            Self::Bang => Operator::Unary(U::Not),
            Self::Tilde => Operator::Unary(U::BitNot),
            Self::Plus => Operator::Binary(B::Add),
            Self::Star => Operator::Binary(B::Mul),
            Self::Slash => Operator::Binary(B::Div),
            Self::Percent => Operator::Binary(B::Mod),
            Self::Caret => Operator::Binary(B::BitXor),
            Self::DoubleAmpersand => Operator::Binary(B::And),
            Self::DoublePipe => Operator::Binary(B::Or),
            Self::Ampersand => Operator::Binary(B::BitAnd),
            Self::Pipe => Operator::Binary(B::BitOr),
            Self::ShiftLeft => Operator::Binary(B::ShiftLeft),
            Self::ShiftRight => Operator::Binary(B::ShiftRight),
            Self::EqualEqual => Operator::Binary(B::Equal),
            Self::BangEqual => Operator::Binary(B::NotEqual),
            Self::LessEqual => Operator::Binary(B::LessEqual),
            Self::GreaterEqual => Operator::Binary(B::GreaterEqual),
            Self::Less => Operator::Binary(B::Less),
            Self::Greater => Operator::Binary(B::Greater),
            Self::LParen | Self::RParen | Self::Digit(_) | Self::Dot | Self::Whitespace => {
                return None;
            },
        };
        Some(op)
    }
}

/// Parses the value of a digit symbol from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(u8)`: The digit's value.
/// - `None`: If the slice is not a single ASCII digit.
fn parse_digit(lex: &logos::Lexer<Symbol>) -> Option<u8> {
    lex.slice().bytes().next().map(|b| b - b'0')
}

/// An operator occurrence, stamped with what the tree builder needs to pick
/// split points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorToken {
    /// The operator.
    pub op:    Operator,
    /// Parenthesis depth at the operator; unbalanced `)` may drive it
    /// negative.
    pub depth: isize,
    /// Position rank. Strictly decreasing in source order, so later
    /// operators have smaller ranks.
    pub rank:  usize,
}

/// A token of the expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    /// An operator.
    Operator(OperatorToken),
    /// A decoded numeral.
    Number(f64),
    /// A registered name, by keyword id.
    Identifier(KeywordId),
}

impl Token {
    /// Returns the operator payload if this is an operator token.
    #[must_use]
    pub const fn as_operator(&self) -> Option<&OperatorToken> {
        match self {
            Self::Operator(op) => Some(op),
            Self::Number(_) | Self::Identifier(_) => None,
        }
    }
}

/// Digits accumulated for the numeral currently being read.
///
/// Kept as text and parsed once complete.
#[derive(Debug, Default)]
struct Numeral {
    digits:     String,
    seen_digit: bool,
    seen_dot:   bool,
}

impl Numeral {
    fn push_digit(&mut self, digit: u8) {
        self.digits.push(char::from(b'0' + digit));
        self.seen_digit = true;
    }

    /// Only the first decimal point counts; later ones change nothing.
    fn push_dot(&mut self) {
        if !self.seen_dot {
            self.digits.push('.');
            self.seen_dot = true;
        }
    }

    /// Finishes the numeral, returning its value if any digit was read.
    fn finish(&mut self) -> Option<f64> {
        let numeral = std::mem::take(self);
        if !numeral.seen_digit {
            return None;
        }
        numeral.digits.parse().ok()
    }
}

/// Single-pass tokenizer state.
struct Tokenizer<'a> {
    text:            &'a str,
    /// Matches sorted by position, longest first among equal positions.
    matches:         Vec<Match>,
    next_match:      usize,
    tokens:          Vec<Token>,
    numeral:         Numeral,
    depth:           isize,
    /// Operators emitted so far; drives the decreasing rank.
    operators:       usize,
    prefix_position: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(text: &'a str, matches: &[Match]) -> Self {
        let mut matches = matches.to_vec();
        matches.sort_by(|a, b| a.position.cmp(&b.position).then(b.length.cmp(&a.length)));

        Self { text,
               matches,
               next_match: 0,
               tokens: Vec::new(),
               numeral: Numeral::default(),
               depth: 0,
               operators: 0,
               prefix_position: true }
    }

    fn run(mut self) -> Vec<Token> {
        let text = self.text;
        let mut position = 0;

        while position < text.len() {
            if let Some(found) = self.match_at(position) {
                self.flush_numeral();
                self.tokens.push(Token::Identifier(found.keyword));
                self.prefix_position = false;
                position += found.length;
                continue;
            }

            let rest = &text[position..];
            let mut lexer = Symbol::lexer(rest);
            let Some(result) = lexer.next() else {
                break;
            };

            let width = match result {
                Ok(symbol) => {
                    self.accept(symbol);
                    lexer.span().end
                },
                Err(()) => {
                    self.flush_numeral();
                    let skipped = rest.chars().next().map_or(rest.len(), char::len_utf8);
                    trace!(offset = position, skipped = &rest[..skipped], "skipping unrecognized character");
                    skipped
                },
            };

            if width == 0 {
                break;
            }
            position += width;
        }

        self.flush_numeral();

        if self.depth != 0 {
            warn!(depth = self.depth, expression = text, "unbalanced parentheses");
        }

        self.tokens
    }

    /// The longest unconsumed match starting exactly at `position`, if any.
    /// Matches starting before `position` overlap consumed text and are
    /// dropped.
    fn match_at(&mut self, position: usize) -> Option<Match> {
        while let Some(found) = self.matches.get(self.next_match)
              && found.position < position
        {
            self.next_match += 1;
        }

        let found = *self.matches.get(self.next_match)?;
        if found.position != position || found.length == 0 {
            return None;
        }

        self.next_match += 1;
        Some(found)
    }

    fn accept(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::Digit(digit) => self.numeral.push_digit(digit),
            Symbol::Dot => self.numeral.push_dot(),
            Symbol::Whitespace => self.flush_numeral(),
            Symbol::LParen => {
                self.flush_numeral();
                self.depth += 1;
                self.prefix_position = true;
            },
            Symbol::RParen => {
                self.flush_numeral();
                self.depth -= 1;
                self.prefix_position = false;
            },
            operator => {
                self.flush_numeral();
                if let Some(op) = operator.operator(self.prefix_position) {
                    let rank = self.text.len().saturating_sub(self.operators);
                    self.operators += 1;
                    self.tokens.push(Token::Operator(OperatorToken { op,
                                                                     depth: self.depth,
                                                                     rank }));
                    self.prefix_position = true;
                }
            },
        }
    }

    fn flush_numeral(&mut self) {
        if let Some(value) = self.numeral.finish() {
            self.tokens.push(Token::Number(value));
            self.prefix_position = false;
        }
    }
}

/// Turns an expression into tokens, merging the matcher's output with
/// operator and numeral recognition.
///
/// Whitespace and unrecognized characters are skipped. Parentheses produce
/// no tokens; they only raise and lower the depth stamped onto operators.
/// Where several matches start at the same position the longest wins, and
/// matches overlapping an already consumed name are ignored.
///
/// # Parameters
/// - `text`: The expression.
/// - `matches`: Keyword occurrences in `text`, as produced by
///   [`Matcher::scan`](crate::interpreter::matcher::Matcher::scan).
///
/// # Returns
/// The tokens in source order.
///
/// # Example
/// ```
/// use infix_tree::interpreter::{
///     lexer::{Token, tokenize},
///     matcher::Matcher,
/// };
///
/// let mut matcher = Matcher::from_keywords(["x"]);
/// let text = "x*2.5";
/// let tokens = tokenize(text, &matcher.scan(text));
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], Token::Identifier(0));
/// assert!(tokens[1].as_operator().is_some());
/// assert_eq!(tokens[2], Token::Number(2.5));
/// ```
#[must_use]
pub fn tokenize(text: &str, matches: &[Match]) -> Vec<Token> {
    Tokenizer::new(text, matches).run()
}
