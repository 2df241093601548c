use thiserror::Error;

use crate::{
    error::ErrorKind,
    interpreter::{lexer::Token, position::Span},
};

/// Describes what the parser found, `end of input` when it ran out of tokens.
fn describe(found: Option<&Token>) -> String {
    found.map_or_else(|| "end of input".to_string(), ToString::to_string)
}

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A number or `(` was required but something else was found.
    #[error("Expected Expression: found {}", describe(.found.as_ref()))]
    ExpectedExpression {
        /// The token found instead, `None` at end of input.
        found: Option<Token>,
        /// Location of `found`, or the end of input.
        span:  Span,
    },
    /// A parenthesised expression was not closed with `)`.
    #[error("Expected Closing Paren: found {}", describe(.found.as_ref()))]
    ExpectedClosingParen {
        /// The token found instead, `None` at end of input.
        found: Option<Token>,
        /// Location of `found`, or the end of input.
        span:  Span,
    },
    /// Tokens remained after a complete expression.
    #[error("Unexpected Trailing Token: {token}")]
    UnexpectedTrailingToken {
        /// The first token not consumed.
        token: Token,
        /// Location of `token`.
        span:  Span,
    },
    /// Parentheses or operator chains nest deeper than the parser accepts.
    #[error("Nesting Too Deep: more than {limit} levels")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
        /// The `(` or operator that crossed the limit.
        span:  Span,
    },
}

impl ParseError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ExpectedExpression { .. } => ErrorKind::ExpectedExpression,
            Self::ExpectedClosingParen { .. } => ErrorKind::ExpectedClosingParen,
            Self::UnexpectedTrailingToken { .. } => ErrorKind::UnexpectedTrailingToken,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::ExpectedExpression { found, .. } => {
                format!("expected INT, FLOAT or LPAREN but found {}",
                        describe(found.as_ref()))
            },
            Self::ExpectedClosingParen { found, .. } => {
                format!("expected RPAREN but found {}", describe(found.as_ref()))
            },
            Self::UnexpectedTrailingToken { token, .. } => {
                format!("{token} after a complete expression")
            },
            Self::NestingTooDeep { limit, .. } => {
                format!("expression nests deeper than {limit} levels")
            },
        }
    }

    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::ExpectedExpression { span, .. }
            | Self::ExpectedClosingParen { span, .. }
            | Self::UnexpectedTrailingToken { span, .. }
            | Self::NestingTooDeep { span, .. } => span,
        }
    }
}
