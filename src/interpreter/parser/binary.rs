use crate::{
    ast::Node,
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_NESTING, ParseResult, Parser},
    },
};

/// A grammar rule producing one operand of a binary operation.
pub(in crate::interpreter::parser) type Rule<'a> = fn(&mut Parser<'a>) -> ParseResult<Node>;

impl<'a> Parser<'a> {
    /// Parses addition and subtraction.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Node> {
        self.binary_operation(Self::term, &[TokenKind::Plus, TokenKind::Minus])
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(in crate::interpreter::parser) fn term(&mut self) -> ParseResult<Node> {
        self.binary_operation(Self::factor, &[TokenKind::Mul, TokenKind::Div])
    }

    /// Parses a left-associative chain of operators of equal precedence.
    ///
    /// Parses one operand with `next_rule`, then folds every following
    /// `operator operand` pair whose operator kind is in `operators` into a
    /// new node over everything parsed so far. `a - b - c` therefore becomes
    /// `(a - b) - c`.
    ///
    /// # Errors
    /// - Propagates any error from `next_rule`.
    /// - `NestingTooDeep` at the operator whose node would be higher than
    ///   [`MAX_NESTING`].
    pub(in crate::interpreter::parser) fn binary_operation(&mut self,
                                                           next_rule: Rule<'a>,
                                                           operators: &[TokenKind])
                                                           -> ParseResult<Node> {
        let mut left = next_rule(self)?;
        let mut height = left.depth();

        while let Some((operator, span)) =
            self.tokens
                .next_if(|(token, _)| operators.contains(&token.kind()))
        {
            let right = next_rule(self)?;

            height = height.max(right.depth()) + 1;
            if height > MAX_NESTING {
                return Err(Self::too_deep(span));
            }

            left = Node::binary(left, *operator, right);
        }

        Ok(left)
    }
}
