use crate::{
    ast::Program,
    error::{Error, SyntaxError},
    interpreter::lexer::{Lexer, Token},
};

/// Result type used by the parser.
///
/// Tokens are pulled lazily while parsing, so a parse can fail with either a
/// lexing or a syntax error.
pub type ParseResult<T> = Result<T, Error>;

/// The recursive-descent parser context.
///
/// The parser owns the lexer cursor and exactly one token of lookahead. Every
/// grammar rule is a method that inspects [`Parser::current`], consumes what
/// it needs and returns the node it built.
///
/// # Example
/// ```
/// use alphadelta::{
///     ast::{Expr, Statement},
///     interpreter::parser::core::Parser,
/// };
///
/// let program = Parser::new("x = 4;").unwrap().parse_program().unwrap();
///
/// assert_eq!(program,
///            vec![Statement::Assignment { name:  "x".to_string(),
///                                         value: Expr::Number { value: 4.0,
///                                                               line:  1, },
///                                         line:  1, }]);
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    line:    usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a lexing error if the first token is malformed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let (current, line) = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  line })
    }

    /// Parses statements until the end of input.
    ///
    /// Grammar: `program := statement* EOF`
    ///
    /// # Errors
    /// Returns the first lexing or syntax error encountered; parsing does not
    /// recover.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();
        while self.current != Token::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// The line the lookahead token starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Moves to the next token and returns the one that was current.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let (next, line) = self.lexer.next_token()?;
        self.line = line;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the lookahead if it equals `expected`.
    ///
    /// # Returns
    /// `true` if the token was consumed.
    pub(in crate::interpreter::parser) fn accept(&mut self, expected: &Token) -> ParseResult<bool> {
        if self.current == *expected {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the lookahead, which must equal `expected`.
    ///
    /// # Errors
    /// `SyntaxError::UnexpectedToken` naming both tokens when they differ.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        if self.accept(expected)? {
            return Ok(());
        }
        Err(self.unexpected(expected.to_string()))
    }

    /// Builds an `UnexpectedToken` error for the lookahead token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: impl Into<String>) -> Error {
        SyntaxError::UnexpectedToken { expected: expected.into(),
                                       found:    self.current.to_string(),
                                       line:     self.line, }.into()
    }
}
