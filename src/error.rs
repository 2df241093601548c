/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that start no
/// token and literals that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while building the syntax tree: a missing operand, an unclosed
/// parenthesis, tokens left over after a complete expression, or nesting
/// too deep to build a tree for.
pub mod parse_error;

use std::fmt;

pub use lex_error::LexError;
pub use parse_error::ParseError;

use crate::interpreter::position::Position;

/// The category of a failure, shared by lexing and parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalCharacter,
    LiteralTooLarge,
    ExpectedExpression,
    ExpectedClosingParen,
    UnexpectedTrailingToken,
    NestingTooDeep,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IllegalCharacter => "Illegal Character",
            Self::LiteralTooLarge => "Literal Too Large",
            Self::ExpectedExpression => "Expected Expression",
            Self::ExpectedClosingParen => "Expected Closing Paren",
            Self::UnexpectedTrailingToken => "Unexpected Trailing Token",
            Self::NestingTooDeep => "Nesting Too Deep",
        };
        write!(f, "{name}")
    }
}

/// A rendered diagnostic for any failure of the pipeline.
///
/// Displays as `<kind>: <details> file: <file_name>, line: <line>`, taking the
/// file and the 0-based line from `pos_start`.
///
/// # Example
/// ```
/// use arithma_front::{error::ErrorKind, run};
///
/// let error = run("calc", "2 # 3").unwrap_err();
/// assert_eq!(error.kind, ErrorKind::IllegalCharacter);
/// assert_eq!(error.to_string(), "Illegal Character: '#' file: calc, line: 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {details} file: {}, line: {}", .pos_start.file_name, .pos_start.line)]
pub struct Error {
    /// What went wrong.
    pub kind:      ErrorKind,
    /// Human-readable detail, such as the offending character.
    pub details:   String,
    /// Where the offending input starts.
    pub pos_start: Position,
    /// Just past the offending input.
    pub pos_end:   Position,
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        let span = error.span().clone();
        Self { kind:      error.kind(),
               details:   error.details(),
               pos_start: span.start,
               pos_end:   span.end, }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        let span = error.span().clone();
        Self { kind:      error.kind(),
               details:   error.details(),
               pos_start: span.start,
               pos_end:   span.end, }
    }
}
