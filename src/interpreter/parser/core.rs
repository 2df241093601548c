use std::{iter::Peekable, slice};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, TokenStream},
        position::Span,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts, both for open parentheses and for the
/// height of the tree it builds.
pub const MAX_NESTING: usize = 128;

/// Recursive-descent parser over a lexed [`TokenStream`].
///
/// The only state is the cursor into the token sequence; every decision is
/// made on the single token under it, so the parser never backtracks.
///
/// Grammar, lowest precedence first:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := INT | FLOAT | "(" expression ")"
/// ```
///
/// Parentheses open at once and tree height are both capped at
/// [`MAX_NESTING`], so neither the parser nor any walk over its trees can run
/// out of stack.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens:       Peekable<slice::Iter<'a, SpannedToken>>,
    pub(in crate::interpreter::parser) end_of_input: &'a Span,
    /// Parentheses currently open.
    pub(in crate::interpreter::parser) nesting:      usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(stream: &'a TokenStream) -> Self {
        Self { tokens:       stream.tokens.iter().peekable(),
               end_of_input: &stream.end_of_input,
               nesting:      0, }
    }

    /// Parses one complete expression.
    ///
    /// # Errors
    /// - Propagates any error from the grammar rules.
    /// - `UnexpectedTrailingToken` if tokens remain after the expression.
    pub fn parse(mut self) -> ParseResult<Node> {
        let tree = self.expression()?;

        match self.tokens.next() {
            Some((token, span)) => Err(ParseError::UnexpectedTrailingToken { token: *token,
                                                                             span:  span.clone(), }),
            None => Ok(tree),
        }
    }

    /// Span to report when the parser runs out of tokens.
    pub(in crate::interpreter::parser) fn end_span(&self) -> Span {
        self.end_of_input.clone()
    }

    pub(in crate::interpreter::parser) fn too_deep(span: &Span) -> ParseError {
        ParseError::NestingTooDeep { limit: MAX_NESTING,
                                     span:  span.clone(), }
    }
}

/// Parses a token stream into a syntax tree.
///
/// # Errors
/// Returns the first [`ParseError`]; no partial tree is produced.
///
/// # Example
/// ```
/// use arithma_front::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("<stdin>", "2 + 3 * 4").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
/// ```
pub fn parse(stream: &TokenStream) -> ParseResult<Node> {
    Parser::new(stream).parse()
}
