use std::fmt;

use logos::{Logos, Skip};

use crate::error::LexError;

/// Result type produced by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// There are no keywords: `print` is an ordinary identifier that the parser
/// recognises by its text.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\x0B\x0C]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `7.` or `2e10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens. The payload is the raw text between the quotes;
    /// backslash escapes are kept verbatim.
    #[token("\"", lex_string)]
    Str(String),
    /// Identifier tokens such as `x`, `_tmp` or `print`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// A lone `!`. Never produced: the lexer rejects it with
    /// [`LexError::InvalidCharacter`].
    #[token("!", reject_bang)]
    Bang,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
    /// End of input. Returned by [`Lexer::next_token`] once the source is
    /// exhausted, as many times as it is asked for.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Number(n) => return write!(f, "number {n}"),
            Self::Str(s) => return write!(f, "string \"{s}\""),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::Eof => return write!(f, "end of input"),
            Self::NewLine => return write!(f, "newline"),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Semicolon => ";",
            Self::Equals => "=",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Bang => "!",
        };
        write!(f, "'{symbol}'")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// The raw failure reported by the generated lexer, before the line number and
/// offending character are attached by [`Lexer::next_token`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexFault {
    /// A string literal ran into the end of input.
    UnterminatedString,
    /// `!` was not followed by `=`.
    InvalidCharacter,
    /// No rule matched.
    #[default]
    UnknownCharacter,
}

/// Parses a numeric literal from the current token slice.
///
/// The regexes only admit decimal spellings Rust's float parser accepts, so
/// the fallback is never taken in practice.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    lex.slice()
       .parse()
       .map_err(|_| LexFault::UnknownCharacter)
}

/// A `!` is only valid as the first half of `!=`, which is matched as a
/// longer token before this rule is considered.
fn reject_bang(_: &mut logos::Lexer<Token>) -> Result<(), LexFault> {
    Err(LexFault::InvalidCharacter)
}

/// Scans a string literal whose opening quote was just matched.
///
/// A backslash swallows the following character, so `\"` does not close the
/// literal. Nothing is unescaped: the returned text is the exact source span
/// between the quotes.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexFault> {
    let remainder = lex.remainder();
    let mut chars = remainder.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                let body = &remainder[..offset];
                lex.extras.line += body.matches('\n').count();
                lex.bump(offset + 1);
                return Ok(body.to_owned());
            },
            '\\' => {
                chars.next();
            },
            _ => {},
        }
    }

    lex.bump(remainder.len());
    Err(LexFault::UnterminatedString)
}

/// An on-demand tokenizer over a complete source text.
///
/// The lexer is a cursor: every call to [`Lexer::next_token`] yields one token
/// and moves past it. It can be created at any offset of the source with
/// [`Lexer::starting_at`], and keeps yielding [`Token::Eof`] once the input is
/// exhausted.
///
/// # Example
/// ```
/// use alphadelta::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 1.5;");
///
/// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("x".into()), 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Equals, 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Number(1.5), 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Semicolon, 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::starting_at(source, 0)
    }

    /// Creates a lexer that resumes at byte `offset` of `source`.
    ///
    /// Offsets past the end are clamped to the end of input, and an offset
    /// inside a multi-byte character is moved back to the start of that
    /// character. The line counter is computed from the skipped prefix.
    ///
    /// # Example
    /// ```
    /// use alphadelta::interpreter::lexer::{Lexer, Token};
    ///
    /// let source = "a = 1;\nb = 2;";
    /// let mut lexer = Lexer::starting_at(source, 7);
    ///
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("b".into()), 2));
    /// ```
    #[must_use]
    pub fn starting_at(source: &'src str, offset: usize) -> Self {
        let offset = (0..=offset.min(source.len())).rev()
                                                   .find(|&i| source.is_char_boundary(i))
                                                   .unwrap_or(0);
        let line = 1 + source[..offset].matches('\n').count();

        let mut inner = Token::lexer_with_extras(source, LexerExtras { line });
        inner.bump(offset);

        Self { inner }
    }

    /// Returns the byte offset just past the last token produced.
    ///
    /// Feeding this value to [`Lexer::starting_at`] resumes lexing exactly
    /// where this lexer stands.
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.span().end
    }

    /// Returns the line the cursor is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Produces the next token together with the line it starts on.
    ///
    /// # Errors
    /// - `LexError::UnterminatedString` when a string literal has no closing
    ///   quote.
    /// - `LexError::InvalidCharacter` for a `!` not followed by `=`.
    /// - `LexError::UnknownCharacter` for anything no rule matches.
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        match self.inner.next() {
            None => Ok((Token::Eof, self.line())),
            Some(Ok(token)) => {
                // String literals may span lines; report the line they open on.
                let line = self.line() - self.inner.slice().matches('\n').count();
                Ok((token, line))
            },
            Some(Err(fault)) => Err(self.attach(fault)),
        }
    }

    fn attach(&self, fault: LexFault) -> LexError {
        let line = self.line();
        match fault {
            LexFault::UnterminatedString => LexError::UnterminatedString { line },
            LexFault::InvalidCharacter => LexError::InvalidCharacter { line },
            LexFault::UnknownCharacter => {
                let character = self.inner.slice().chars().next().unwrap_or('\0');
                LexError::UnknownCharacter { character, line }
            },
        }
    }
}
