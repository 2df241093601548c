use thiserror::Error;

use crate::{error::ErrorKind, interpreter::position::Span};

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Illegal Character: '{character}'")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Covers exactly the offending character.
        span:      Span,
    },
    /// A literal too large for its 64-bit type: an integer beyond `i64::MAX`
    /// or a real that would read as infinity.
    #[error("Literal Too Large: {literal}")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Covers the whole literal.
        span:    Span,
    },
}

impl LexError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalCharacter { .. } => ErrorKind::IllegalCharacter,
            Self::LiteralTooLarge { .. } => ErrorKind::LiteralTooLarge,
        }
    }

    /// Detail text: the offending character in single quotes, or the
    /// oversized literal.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::IllegalCharacter { character, .. } => format!("'{character}'"),
            Self::LiteralTooLarge { literal, .. } => {
                format!("{literal} does not fit in a 64-bit number")
            },
        }
    }

    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::IllegalCharacter { span, .. } | Self::LiteralTooLarge { span, .. } => span,
        }
    }
}
