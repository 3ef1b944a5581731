use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     factor := NUMBER
    ///             | STRING
    ///             | IDENTIFIER ("[" expression "]")?
    ///             | "(" expression ")"
    ///             | "[" (expression ("," expression)*)? "]"
    /// ```
    ///
    /// # Errors
    /// `SyntaxError::UnexpectedToken` if the lookahead cannot start a factor.
    /// This includes the comparison operators, which the language lexes but
    /// cannot use.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        let line = self.line();

        match self.current() {
            Token::Number(value) => {
                let value = *value;
                self.advance()?;
                Ok(Expr::Number { value, line })
            },
            Token::Str(text) => {
                let text = text.clone();
                self.advance()?;
                Ok(Expr::Str { text, line })
            },
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                self.parse_variable_or_index(name, line)
            },
            Token::LParen => {
                self.advance()?;
                self.parse_grouping()
            },
            Token::LBracket => {
                self.advance()?;
                self.parse_array_literal(line)
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses an optional `[ expression ]` suffix after a variable name.
    ///
    /// Only a plain identifier can be indexed, and only once: `a[0][1]` is a
    /// syntax error.
    fn parse_variable_or_index(&mut self, name: String, line: usize) -> ParseResult<Expr> {
        if self.accept(&Token::LBracket)? {
            let index = self.parse_expression()?;
            self.expect(&Token::RBracket)?;
            return Ok(Expr::ArrayIndex { name,
                                         index: Box::new(index),
                                         line });
        }
        Ok(Expr::Variable { name, line })
    }

    /// Parses the rest of `( expression )` after the opening parenthesis.
    ///
    /// Returns the inner expression as-is (no wrapper node).
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        self.expect(&Token::RParen)?;
        Ok(expr)
    }

    /// Parses the rest of an array literal after the opening bracket.
    ///
    /// An immediately encountered `]` produces an empty array. A trailing
    /// comma is not allowed.
    ///
    /// Grammar: `array := "[" (expression ("," expression)*)? "]"`
    fn parse_array_literal(&mut self, line: usize) -> ParseResult<Expr> {
        let mut elements = Vec::new();
        if *self.current() != Token::RBracket {
            loop {
                elements.push(self.parse_expression()?);
                if !self.accept(&Token::Comma)? {
                    break;
                }
            }
        }
        self.expect(&Token::RBracket)?;

        Ok(Expr::ArrayLiteral { elements, line })
    }
}
