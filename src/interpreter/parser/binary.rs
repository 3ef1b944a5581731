use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing and the lowest
    /// precedence level: left-associative addition and subtraction.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree, or the single term if no operator follows.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = self.line();
            self.advance()?;
            let right = self.parse_term()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles the left-associative operators `*` and `/`, which bind tighter
    /// than `+` and `-`.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = self.line();
            self.advance()?;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }
}

/// Maps an arithmetic token to its operator.
///
/// Comparison tokens are lexed but have no place in the grammar, so they map
/// to `None` like every other token.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
