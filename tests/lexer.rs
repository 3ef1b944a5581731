use alphadelta::{
    error::LexError,
    interpreter::lexer::{Lexer, Token},
};

fn tokens(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    let mut out = Vec::new();
    loop {
        let (token, _) = lexer.next_token().unwrap();
        if token == Token::Eof {
            return out;
        }
        out.push(token);
    }
}

#[test]
fn classifies_every_token_kind() {
    assert_eq!(tokens("+ - * / ( ) [ ] ; = , : . > < >= <= == !="),
               vec![Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::LBracket,
                    Token::RBracket,
                    Token::Semicolon,
                    Token::Equals,
                    Token::Comma,
                    Token::Colon,
                    Token::Dot,
                    Token::Greater,
                    Token::Less,
                    Token::GreaterEqual,
                    Token::LessEqual,
                    Token::EqualEqual,
                    Token::BangEqual]);
}

#[test]
fn numbers_parse_as_written() {
    assert_eq!(tokens("42 3.25 .5 7. 2e3 1.5E-2"),
               vec![Token::Number(42.0),
                    Token::Number(3.25),
                    Token::Number(0.5),
                    Token::Number(7.0),
                    Token::Number(2000.0),
                    Token::Number(0.015)]);
}

#[test]
fn print_is_an_identifier() {
    assert_eq!(tokens("print _x1"),
               vec![Token::Identifier("print".into()), Token::Identifier("_x1".into())]);
}

#[test]
fn strings_keep_escapes_verbatim() {
    assert_eq!(tokens(r#""a\"b" "c\\""#),
               vec![Token::Str(r#"a\"b"#.into()), Token::Str(r"c\\".into())]);
    assert_eq!(tokens("\"\""), vec![Token::Str(String::new())]);
}

#[test]
fn tracks_lines() {
    let mut lexer = Lexer::new("a\n\nb \"x\ny\" c");

    assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("a".into()), 1));
    assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("b".into()), 3));
    assert_eq!(lexer.next_token().unwrap(), (Token::Str("x\ny".into()), 3));
    assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("c".into()), 4));
    assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 4));
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new("   ");
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
    }
}

#[test]
fn resumes_from_reported_position() {
    let source = "x = [1, 2];\nprint(x[0]);";
    let mut lexer = Lexer::new(source);
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();

    let mut resumed = Lexer::starting_at(source, lexer.position());
    let rest = std::iter::from_fn(|| match resumed.next_token().unwrap() {
                   (Token::Eof, _) => None,
                   token => Some(token),
               }).collect::<Vec<_>>();

    assert_eq!(rest.first(), Some(&(Token::LBracket, 1)));
    assert_eq!(rest.iter().filter(|(_, line)| *line == 2).count(), 8);
}

#[test]
fn offset_past_end_is_eof() {
    let mut lexer = Lexer::starting_at("x = 1;", 100);
    assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
}

#[test]
fn reports_lexical_errors() {
    let mut lexer = Lexer::new("\n\"never closed");
    assert_eq!(lexer.next_token(), Err(LexError::UnterminatedString { line: 2 }));

    let mut lexer = Lexer::new("a ! b");
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token(), Err(LexError::InvalidCharacter { line: 1 }));

    let mut lexer = Lexer::new("#");
    assert_eq!(lexer.next_token(),
               Err(LexError::UnknownCharacter { character: '#',
                                                line:      1, }));
}
