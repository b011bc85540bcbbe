use crate::ast::Expr;
use crate::error::ParseError;
use crate::lexer::{tokenize, Spanned, Token};

/// Walks a token stream one position at a time, tracking position for
/// error reporting.
struct TokenCursor<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    text_len: usize,
}

impl<'a> TokenCursor<'a> {
    fn next(&mut self) -> Option<Spanned> {
        let t = self.tokens.get(self.pos).copied();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn end_position(&self) -> usize {
        self.tokens.get(self.pos).map(|s| s.position).unwrap_or(self.text_len)
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<(), ParseError> {
        match self.next() {
            Some(s) if s.token == expected => Ok(()),
            Some(s) => Err(ParseError::new(
                s.position,
                format!("expected {what} at column {}", s.position),
            )),
            None => Err(ParseError::new(self.end_position(), format!("expected {what}, found end of input"))),
        }
    }
}

/// Parses `text` against the EXPR grammar.
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text).map_err(|pos| ParseError::new(pos, "unexpected character"))?;
    let mut cursor = TokenCursor {
        tokens: &tokens,
        pos: 0,
        text_len: text.len(),
    };
    let expr = parse_expr(&mut cursor)?;
    match cursor.next() {
        None => Ok(expr),
        Some(s) => Err(ParseError::new(
            s.position,
            format!("expected end of input at column {}", s.position),
        )),
    }
}

fn parse_expr(cursor: &mut TokenCursor) -> Result<Expr, ParseError> {
    let spanned = cursor
        .next()
        .ok_or_else(|| ParseError::new(cursor.end_position(), "unexpected end of input"))?;

    match spanned.token {
        Token::Lit(bit) => Ok(Expr::lit(bit)),
        Token::Var(c) => Ok(Expr::var(c.to_string())),
        Token::LParen => {
            let op = cursor
                .next()
                .ok_or_else(|| ParseError::new(cursor.end_position(), "expected operator, found end of input"))?;

            match op.token {
                Token::Tilde => {
                    cursor.expect(Token::Space, "space after operator")?;
                    let inner = parse_expr(cursor)?;
                    cursor.expect(Token::RParen, "closing paren")?;
                    Ok(Expr::not(inner))
                }
                Token::Plus | Token::Star => {
                    cursor.expect(Token::Space, "space after operator")?;
                    let lhs = parse_expr(cursor)?;
                    cursor.expect(Token::Space, "space between arguments")?;
                    let rhs = parse_expr(cursor)?;
                    cursor.expect(Token::RParen, "closing paren")?;
                    if op.token == Token::Plus {
                        Ok(Expr::or(lhs, rhs))
                    } else {
                        Ok(Expr::and(lhs, rhs))
                    }
                }
                _ => Err(ParseError::new(
                    op.position,
                    format!("unexpected operator at column {}", op.position),
                )),
            }
        }
        _ => Err(ParseError::new(
            spanned.position,
            format!("unexpected token at column {}", spanned.position),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal() {
        assert_eq!(parse("0").unwrap(), Expr::lit(0));
        assert_eq!(parse("1").unwrap(), Expr::lit(1));
    }

    #[test]
    fn parses_variable() {
        assert_eq!(parse("a").unwrap(), Expr::var("a"));
    }

    #[test]
    fn parses_not() {
        assert_eq!(parse("(~ a)").unwrap(), Expr::not(Expr::var("a")));
    }

    #[test]
    fn parses_and_or() {
        assert_eq!(
            parse("(* a b)").unwrap(),
            Expr::and(Expr::var("a"), Expr::var("b"))
        );
        assert_eq!(
            parse("(+ a b)").unwrap(),
            Expr::or(Expr::var("a"), Expr::var("b"))
        );
    }

    #[test]
    fn parses_nested() {
        let e = parse("(+ a (~ a))").unwrap();
        assert_eq!(e, Expr::or(Expr::var("a"), Expr::not(Expr::var("a"))));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse("a b").is_err());
    }

    #[test]
    fn rejects_missing_closing_paren() {
        assert!(parse("(+ a b").is_err());
    }

    #[test]
    fn rejects_unknown_operator() {
        assert!(parse("(^ a b)").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse("").is_err());
    }

    #[test]
    fn error_reports_position() {
        let err = parse("(+ a #)").unwrap_err();
        assert_eq!(err.position, 5);
    }
}
