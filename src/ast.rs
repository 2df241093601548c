use std::fmt;

use crate::interpreter::lexer::{Token, TokenKind};

/// A numeric literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

/// A node of the abstract syntax tree.
///
/// Trees are built bottom-up by the parser and never modified afterwards.
/// Every node owns its children, so a tree is always acyclic. Trees from the
/// parser are at most `MAX_NESTING` levels high, which bounds the recursion of
/// every walk below.
///
/// Equality is structural: two trees are equal when they hold the same
/// literals and operators in the same shape, wherever they came from in the
/// source.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric leaf holding an `Int` or `Float` token.
    Number {
        /// The literal token.
        token: Token,
    },
    /// A binary arithmetic operation.
    BinaryOperation {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token: `Plus`, `Minus`, `Mul` or `Div`.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Node {
    /// Creates a number leaf.
    ///
    /// # Panics
    /// Debug builds assert that `token` is a numeric literal.
    #[must_use]
    pub fn number(token: Token) -> Self {
        debug_assert!(token.value().is_some(), "number node from {token}");
        Self::Number { token }
    }

    /// Creates a binary operation over two owned subtrees.
    ///
    /// # Panics
    /// Debug builds assert that `operator` is an arithmetic operator.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        debug_assert!(matches!(operator.kind(),
                               TokenKind::Plus | TokenKind::Minus | TokenKind::Mul | TokenKind::Div),
                      "binary node from {operator}");
        Self::BinaryOperation { left: Box::new(left),
                                operator,
                                right: Box::new(right) }
    }

    /// Height of the tree; a single number has depth `1`.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::BinaryOperation { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of literal leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::BinaryOperation { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Renders the tree as fully parenthesised infix source.
    ///
    /// Every operation is wrapped in parentheses and real literals keep
    /// their decimal point, so lexing and parsing the result again yields
    /// an equal tree.
    ///
    /// ## Example
    /// ```
    /// use arithma_front::run;
    ///
    /// let tree = run("<stdin>", "1 - 2 - 3 * 4.0").unwrap();
    /// assert_eq!(tree.to_canonical(), "((1 - 2) - (3 * 4.0))");
    /// ```
    #[must_use]
    pub fn to_canonical(&self) -> String {
        match self {
            Self::Number { token } => token.lexeme(),
            Self::BinaryOperation { left, operator, right } => {
                format!("({} {} {})",
                        left.to_canonical(),
                        operator.lexeme(),
                        right.to_canonical())
            },
        }
    }
}

/// Nodes print in tree form: a number as its token, an operation as
/// `(left, OPERATOR, right)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { token } => write!(f, "{token}"),
            Self::BinaryOperation { left, operator, right } => {
                write!(f, "({left}, {operator}, {right})")
            },
        }
    }
}
