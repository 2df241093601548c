use std::fmt;

use logos::Logos;

use crate::{
    ast::LiteralValue,
    error::LexError,
    interpreter::position::{Position, Span},
    util::num::format_real,
};

pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
///
/// Spaces and tabs separate tokens and are never emitted. Any other character
/// that does not start one of the variants below is an illegal character.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexicalError)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Real literal tokens, such as `3.25` or `7.`.
    ///
    /// A literal holds at most one decimal point: `1.2.3` scans as `1.2`
    /// and leaves the second `.` for the next token.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// The payload-free kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Int,
    Float,
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use arithma_front::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Int(3).kind(), TokenKind::Int);
    /// assert_eq!(Token::LParen.kind(), TokenKind::LParen);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Int(_) => TokenKind::Int,
            Self::Float(_) => TokenKind::Float,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }

    /// The literal carried by `Int` and `Float` tokens.
    #[must_use]
    pub const fn value(&self) -> Option<LiteralValue> {
        match self {
            Self::Int(value) => Some(LiteralValue::Integer(*value)),
            Self::Float(value) => Some(LiteralValue::Real(*value)),
            _ => None,
        }
    }

    /// Source text that lexes back into this token.
    #[must_use]
    pub fn lexeme(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format_real(*value),
            Self::Plus => "+".to_string(),
            Self::Minus => "-".to_string(),
            Self::Mul => "*".to_string(),
            Self::Div => "/".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
        };
        write!(f, "{name}")
    }
}

/// Tokens print as `KIND` or, for literals, `KIND:value`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}:{value}", self.kind()),
            Self::Float(value) => write!(f, "{}:{}", self.kind(), format_real(*value)),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Errors raised inside logos callbacks.
///
/// The default variant is what logos reports for input no pattern matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexicalError {
    #[default]
    UnrecognizedCharacter,
    LiteralOverflow,
}

/// Parses a floating-point literal from the current token slice.
///
/// # Errors
/// `LiteralOverflow` if the literal is too large to be a finite `f64`.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexicalError> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
       .ok_or(LexicalError::LiteralOverflow)
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// `LiteralOverflow` if the literal does not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexicalError> {
    lex.slice()
       .parse()
       .map_err(|_| LexicalError::LiteralOverflow)
}

/// A token paired with the span of source it was scanned from.
pub type SpannedToken = (Token, Span);

/// The output of [`tokenize`]: every token in source order, plus the span
/// just past the end of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    /// Tokens in the order they appear.
    pub tokens:       Vec<SpannedToken>,
    /// Empty span at the end of the input; parse errors that run out of
    /// tokens point here.
    pub end_of_input: Span,
}

impl TokenStream {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpannedToken> {
        self.tokens.iter()
    }

    /// The tokens without their spans.
    #[must_use]
    pub fn to_tokens(&self) -> Vec<Token> {
        self.tokens.iter().map(|(token, _)| *token).collect()
    }

    /// The kind of every token, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|(token, _)| token.kind()).collect()
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (token, _)) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{token}")?;
        }
        write!(f, "]")
    }
}

/// Scans one line of source text into tokens.
///
/// Wraps the logos-generated scanner and walks a [`Position`] cursor over
/// every character it consumes, skipped whitespace included, so each token
/// carries line and column information.
pub struct Lexer<'src> {
    scanner:  logos::Lexer<'src, Token>,
    text:     &'src str,
    position: Position,
    consumed: usize,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(file_name: &str, text: &'src str) -> Self {
        let mut position = Position::new(file_name, text);
        position.advance(None);

        Self { scanner: Token::lexer(text),
               text,
               position,
               consumed: 0 }
    }

    /// Returns the next token, `None` at the end of input.
    ///
    /// # Errors
    /// - `IllegalCharacter` for a character that starts no token. Only that
    ///   one character is covered by the error span.
    /// - `LiteralTooLarge` for an integer literal beyond `i64::MAX`, or a real
    ///   literal too large to be finite.
    pub fn next_token(&mut self) -> Option<LexResult<SpannedToken>> {
        let scanned = self.scanner.next()?;
        let range = self.scanner.span();

        self.advance_to(range.start);
        let start = self.position.clone();

        let result = match scanned {
            Ok(token) => {
                self.advance_to(range.end);
                Ok((token, Span::new(start, self.position.clone())))
            },
            Err(LexicalError::UnrecognizedCharacter) => {
                let character = self.scanner.slice().chars().next().unwrap_or_default();
                self.advance_to(range.start + character.len_utf8());
                Err(LexError::IllegalCharacter { character,
                                                 span: Span::new(start,
                                                                 self.position.clone()) })
            },
            Err(LexicalError::LiteralOverflow) => {
                self.advance_to(range.end);
                Err(LexError::LiteralTooLarge { literal: self.scanner.slice().to_string(),
                                                span:    Span::new(start,
                                                                   self.position.clone()), })
            },
        };

        Some(result)
    }

    /// Consumes the rest of the input, collecting every token.
    ///
    /// # Errors
    /// Stops at, and returns, the first lexical error.
    pub fn make_tokens(mut self) -> LexResult<TokenStream> {
        let mut tokens = Vec::new();

        while let Some(next) = self.next_token() {
            tokens.push(next?);
        }

        self.advance_to(self.text.len());

        Ok(TokenStream { tokens,
                         end_of_input: Span::empty(&self.position) })
    }

    /// Advances the position cursor, one character at a time, up to the byte
    /// offset `offset`.
    fn advance_to(&mut self, offset: usize) {
        let pending = self.text.get(self.consumed..offset).unwrap_or_default();

        for ch in pending.chars() {
            self.position.advance(Some(ch));
        }

        self.consumed = self.consumed.max(offset);
    }
}

/// Tokenizes `text`, naming it `file_name` in diagnostics.
///
/// # Errors
/// Returns the first [`LexError`] encountered; no tokens are returned in that
/// case.
///
/// # Example
/// ```
/// use arithma_front::interpreter::lexer::{Token, tokenize};
///
/// let stream = tokenize("<stdin>", "1 + 2.5").unwrap();
/// assert_eq!(stream.to_tokens(), vec![Token::Int(1), Token::Plus, Token::Float(2.5)]);
///
/// assert!(tokenize("<stdin>", "1 $ 2").is_err());
/// ```
pub fn tokenize(file_name: &str, text: &str) -> LexResult<TokenStream> {
    Lexer::new(file_name, text).make_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        tokenize("test", text).unwrap().to_tokens()
    }

    #[test]
    fn single_character_operators() {
        assert_eq!(tokens("+-*/()"),
                   vec![Token::Plus,
                        Token::Minus,
                        Token::Mul,
                        Token::Div,
                        Token::LParen,
                        Token::RParen]);
    }

    #[test]
    fn integers_and_floats() {
        assert_eq!(tokens("42"), vec![Token::Int(42)]);
        assert_eq!(tokens("3.25"), vec![Token::Float(3.25)]);
        assert_eq!(tokens("7."), vec![Token::Float(7.0)]);
        assert_eq!(tokens("007"), vec![Token::Int(7)]);
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(tokens(" \t1 \t+\t 2 "),
                   vec![Token::Int(1), Token::Plus, Token::Int(2)]);
        assert!(tokens("").is_empty());
        assert!(tokens(" \t ").is_empty());
    }

    #[test]
    fn spans_track_columns() {
        let stream = tokenize("test", "12 + 3").unwrap();
        let columns: Vec<_> = stream.iter()
                                    .map(|(_, span)| (span.start.index, span.end.index))
                                    .collect();
        assert_eq!(columns, vec![(0, 2), (3, 4), (5, 6)]);
        assert_eq!(stream.end_of_input.start.index, 6);
    }

    #[test]
    fn illegal_character_stops_lexing() {
        let err = tokenize("test", "1 + x + 2").unwrap_err();
        match err {
            LexError::IllegalCharacter { character, span } => {
                assert_eq!(character, 'x');
                assert_eq!(span.start.index, 4);
                assert_eq!(span.end.index, 5);
            },
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn newline_is_illegal() {
        let err = tokenize("test", "1\n2").unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { character: '\n', .. }));
        assert_eq!(err.span().end.line, 1);
    }

    #[test]
    fn leading_dot_is_illegal() {
        let err = tokenize("test", ".5").unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { character: '.', .. }));
    }

    #[test]
    fn second_decimal_point_ends_the_literal() {
        let mut lexer = Lexer::new("test", "1.2.3");
        let (first, _) = lexer.next_token().unwrap().unwrap();
        assert_eq!(first, Token::Float(1.2));

        let err = lexer.next_token().unwrap().unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { character: '.', .. }));
        assert_eq!(err.span().start.index, 3);
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let err = tokenize("test", "99999999999999999999").unwrap_err();
        assert!(matches!(err, LexError::LiteralTooLarge { ref literal, .. }
                              if literal == "99999999999999999999"));
    }

    #[test]
    fn oversized_real_is_rejected() {
        let text = format!("{}.5", "9".repeat(400));
        let err = tokenize("test", &text).unwrap_err();
        assert!(matches!(err, LexError::LiteralTooLarge { ref literal, .. } if *literal == text));
        assert_eq!(err.span().range(), 0..text.len());

        let largest = format!("{}.", "9".repeat(308));
        assert!(matches!(tokens(&largest)[..], [Token::Float(value)] if value.is_finite()));
    }

    #[test]
    fn multibyte_character_is_reported_whole() {
        let err = tokenize("test", "1 × 2").unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { character: '×', .. }));
        assert_eq!(err.span().range(), 2..3);
    }

    #[test]
    fn token_display_matches_debug_repr() {
        assert_eq!(Token::Int(0).to_string(), "INT:0");
        assert_eq!(Token::Float(2.0).to_string(), "FLOAT:2.0");
        assert_eq!(Token::Plus.to_string(), "PLUS");
        assert_eq!(tokenize("test", "(1+2.5)").unwrap().to_string(),
                   "[LPAREN, INT:1, PLUS, FLOAT:2.5, RPAREN]");
    }
}
