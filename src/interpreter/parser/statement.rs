use crate::{
    ast::Statement,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// The identifier that introduces a print statement.
pub const PRINT: &str = "print";

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - `print ( expression ) ;`
    /// - `identifier = expression ;`
    /// - `expression ;`
    ///
    /// `print` is only special as the first token of a statement. Any other
    /// leading identifier must be the target of an assignment; a bare
    /// identifier statement such as `x;` is rejected with
    /// `SyntaxError::InvalidAfterIdentifier`.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    ///
    /// # Errors
    /// Returns a `SyntaxError` when the tokens do not form a statement, or a
    /// `LexError` raised while reading them.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let line = self.line();

        match self.current() {
            Token::Identifier(name) if name == PRINT => self.parse_print(line),
            Token::Identifier(name) => {
                let name = name.clone();
                self.parse_assignment(name, line)
            },
            _ => {
                let expr = self.parse_expression()?;
                self.expect(&Token::Semicolon)?;
                Ok(Statement::Expression { expr, line })
            },
        }
    }

    /// Parses `print ( expression ) ;` with the lookahead on `print`.
    fn parse_print(&mut self, line: usize) -> ParseResult<Statement> {
        self.advance()?;
        self.expect(&Token::LParen)?;
        let expr = self.parse_expression()?;
        self.expect(&Token::RParen)?;
        self.expect(&Token::Semicolon)?;

        Ok(Statement::Print { expr, line })
    }

    /// Parses `identifier = expression ;` with the lookahead on the
    /// identifier `name`.
    fn parse_assignment(&mut self, name: String, line: usize) -> ParseResult<Statement> {
        self.advance()?;

        if !self.accept(&Token::Equals)? {
            return Err(SyntaxError::InvalidAfterIdentifier { name,
                                                             found: self.current().to_string(),
                                                             line: self.line() }.into());
        }

        let value = self.parse_expression()?;
        self.expect(&Token::Semicolon)?;

        Ok(Statement::Assignment { name, value, line })
    }
}
