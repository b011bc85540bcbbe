use logos::Logos;

/// Tokens of the concrete EXPR grammar. Whitespace is not skipped
/// implicitly by the lexer: the grammar treats a single ASCII space as a
/// significant separator between siblings, so `Token::Space` is emitted and
/// the parser consumes it explicitly between arguments.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("~")]
    Tilde,
    #[token(" ")]
    Space,
    #[regex("[01]", |lex| lex.slice().as_bytes()[0] - b'0')]
    Lit(u8),
    #[regex("[A-Za-z]", |lex| lex.slice().chars().next().unwrap())]
    Var(char),
}

/// A lexed token paired with the byte offset it started at, for error
/// reporting in the parser.
#[derive(Debug, Clone, Copy)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Lexes `text` fully, or reports the byte position of the first
/// unrecognized character.
pub fn tokenize(text: &str) -> Result<Vec<Spanned>, usize> {
    let mut lex = Token::lexer(text);
    let mut out = Vec::new();
    while let Some(result) = lex.next() {
        match result {
            Ok(token) => out.push(Spanned {
                token,
                position: lex.span().start,
            }),
            Err(_) => return Err(lex.span().start),
        }
    }
    Ok(out)
}
