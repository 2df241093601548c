use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a numeric literal or a parenthesised expression.
    ///
    /// Grammar:
    /// ```text
    ///     factor := INT | FLOAT | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `ExpectedExpression` for any other token, or at end of input.
    /// - `NestingTooDeep` for a `(` opened inside [`MAX_NESTING`] others.
    pub(in crate::interpreter::parser) fn factor(&mut self) -> ParseResult<Node> {
        match self.tokens.next() {
            Some((token @ (Token::Int(_) | Token::Float(_)), _)) => Ok(Node::number(*token)),
            Some((Token::LParen, span)) => {
                if self.nesting == MAX_NESTING {
                    return Err(Self::too_deep(span));
                }

                self.nesting += 1;
                let inner = self.grouping();
                self.nesting -= 1;
                inner
            },
            Some((token @ (Token::Plus
                          | Token::Minus
                          | Token::Mul
                          | Token::Div
                          | Token::RParen),
                  span)) => Err(ParseError::ExpectedExpression { found: Some(*token),
                                                                 span:  span.clone(), }),
            None => Err(ParseError::ExpectedExpression { found: None,
                                                         span:  self.end_span(), }),
        }
    }

    /// Parses the inside of a parenthesised expression.
    ///
    /// The opening `(` has already been consumed; the matching `)` is
    /// consumed here. The parentheses leave no trace in the tree.
    ///
    /// # Errors
    /// `ExpectedClosingParen` if the expression is not followed by `)`.
    fn grouping(&mut self) -> ParseResult<Node> {
        let inner = self.expression()?;

        match self.tokens.next() {
            Some((Token::RParen, _)) => Ok(inner),
            Some((token, span)) => Err(ParseError::ExpectedClosingParen { found: Some(*token),
                                                                          span:  span.clone(), }),
            None => Err(ParseError::ExpectedClosingParen { found: None,
                                                           span:  self.end_span(), }),
        }
    }
}
