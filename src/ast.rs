use std::fmt;

/// Represents a unary (prefix) operator.
///
/// Prefix operators bind tighter than every binary operator and only ever
/// take a right-hand operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x` where `-` follows an operator, `(` or the
    /// start of the expression).
    Negate,
    /// Logical NOT (`!x`).
    Not,
    /// Bitwise complement (`~x`).
    BitNot,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, logical connectives and
/// bitwise operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating remainder (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Right shift (`>>`)
    ShiftRight,
}

/// Either kind of operator, as carried by operator tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// A prefix operator.
    Unary(UnaryOperator),
    /// An infix operator.
    Binary(BinaryOperator),
}

/// Binding strength classes, ordered from weakest to strongest.
///
/// The derived ordering is what the tree builder minimizes: the weakest
/// class present in a range becomes the root of that range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `||`
    Or,
    /// `&&`
    And,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `<<`, `>>`
    Shift,
    /// `==`, `!=`, `<`, `>`, `<=`, `>=`
    Comparison,
    /// `+`, `-`
    Additive,
    /// `*`, `/`, `%`
    Multiplicative,
    /// Unary `-`, `!`, `~`
    Prefix,
}

impl Operator {
    /// Returns the binding strength class of this operator.
    ///
    /// # Example
    /// ```
    /// use infix_tree::ast::{BinaryOperator, Operator, Precedence};
    ///
    /// let add = Operator::Binary(BinaryOperator::Add);
    /// let mul = Operator::Binary(BinaryOperator::Mul);
    /// assert_eq!(add.precedence(), Precedence::Additive);
    /// assert!(add.precedence() < mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };

        match self {
            Self::Unary(_) => Precedence::Prefix,
            Self::Binary(op) => match op {
                Or => Precedence::Or,
                And => Precedence::And,
                BitOr => Precedence::BitOr,
                BitXor => Precedence::BitXor,
                BitAnd => Precedence::BitAnd,
                ShiftLeft | ShiftRight => Precedence::Shift,
                Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                    Precedence::Comparison
                },
                Add | Sub => Precedence::Additive,
                Mul | Div | Mod => Precedence::Multiplicative,
            },
        }
    }
}

/// A node of the operator tree produced by the tree builder.
///
/// The tree is strictly binary and acyclic. Every child is exclusively owned
/// by its parent; an absent child (`None`) marks an operand that was missing
/// from the source and evaluates to the absent-operand sentinel.
///
/// Dropping a `Node` is iterative, so arbitrarily deep trees (long chains of
/// same-precedence operators) can be released without exhausting the stack.
#[derive(Debug, PartialEq)]
pub enum Node {
    /// A decoded numeral.
    Number(f64),
    /// A variable, referenced by its keyword id (its index in the value
    /// vector supplied at evaluation time).
    Identifier(usize),
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Option<Box<Self>>,
    },
    /// An infix operation.
    Binary {
        /// The operator to apply.
        op:    BinaryOperator,
        /// Left operand.
        left:  Option<Box<Self>>,
        /// Right operand.
        right: Option<Box<Self>>,
    },
}

impl Node {
    /// Counts the nodes of this tree without recursing.
    ///
    /// # Example
    /// ```
    /// use infix_tree::ast::{BinaryOperator, Node};
    ///
    /// let tree = Node::Binary { op:    BinaryOperator::Add,
    ///                           left:  Some(Box::new(Node::Number(1.0))),
    ///                           right: Some(Box::new(Node::Identifier(0))), };
    /// assert_eq!(tree.node_count(), 3);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            match node {
                Self::Unary { operand, .. } => stack.extend(operand.as_deref()),
                Self::Binary { left, right, .. } => {
                    stack.extend(left.as_deref());
                    stack.extend(right.as_deref());
                },
                Self::Number(_) | Self::Identifier(_) => {},
            }
        }

        count
    }

    /// Moves this node's children onto `stack`, leaving it childless.
    fn detach_children(&mut self, stack: &mut Vec<Box<Self>>) {
        match self {
            Self::Unary { operand, .. } => stack.extend(operand.take()),
            Self::Binary { left, right, .. } => {
                stack.extend(left.take());
                stack.extend(right.take());
            },
            Self::Number(_) | Self::Identifier(_) => {},
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);

        // Each popped node is childless by the time it goes out of scope, so
        // its own `drop` does no further work.
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            ShiftLeft => "<<",
            ShiftRight => ">>",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(op) => write!(f, "{op}"),
            Self::Binary(op) => write!(f, "{op}"),
        }
    }
}

/// Renders the tree fully parenthesized, with identifiers as `$id` and
/// absent operands as `_`.
///
/// ```
/// use infix_tree::ast::{Node, UnaryOperator};
///
/// let tree = Node::Unary { op:      UnaryOperator::Negate,
///                          operand: Some(Box::new(Node::Identifier(2))), };
/// assert_eq!(tree.to_string(), "(-$2)");
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(id) => write!(f, "${id}"),
            Self::Unary { op, operand } => {
                write!(f, "({op}")?;
                write_operand(f, operand.as_deref())?;
                write!(f, ")")
            },
            Self::Binary { op, left, right } => {
                write!(f, "(")?;
                write_operand(f, left.as_deref())?;
                write!(f, " {op} ")?;
                write_operand(f, right.as_deref())?;
                write!(f, ")")
            },
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: Option<&Node>) -> fmt::Result {
    match operand {
        Some(node) => write!(f, "{node}"),
        None => write!(f, "_"),
    }
}
