use crate::error::{ExprError, ExprResult};
use crate::token::{Span, Token, TokenKind};

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> ExprResult<Vec<Token>> {
        while !self.is_at_end() {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            let token = self.next_token()?;
            // Insert implicit multiplication if applicable
            if let Some(prev) = self.tokens.last() {
                if prev.kind.can_end_implicit_mul() && token.kind.can_start_implicit_mul() {
                    // Don't insert implicit mul before '(' if previous token is an identifier
                    // (that's a function call, not multiplication)
                    let is_func_call = matches!(&prev.kind, TokenKind::Ident(_))
                        && matches!(&token.kind, TokenKind::LParen);
                    if !is_func_call {
                        let span = Span::new(prev.span.end, token.span.start);
                        self.tokens.push(Token::new(TokenKind::Star, span));
                    }
                }
            }
            self.tokens.push(token);
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(self.pos, self.pos)));
        Ok(self.tokens)
    }

    fn next_token(&mut self) -> ExprResult<Token> {
        let start = self.pos;
        let ch = self.advance();

        match ch {
            '+' => Ok(Token::new(TokenKind::Plus, Span::new(start, self.pos))),
            '-' => Ok(Token::new(TokenKind::Minus, Span::new(start, self.pos))),
            '*' => {
                // Accept '**' as an alternate power spelling
                if self.peek() == Some('*') {
                    self.advance();
                    Ok(Token::new(TokenKind::Caret, Span::new(start, self.pos)))
                } else {
                    Ok(Token::new(TokenKind::Star, Span::new(start, self.pos)))
                }
            }
            '/' => Ok(Token::new(TokenKind::Slash, Span::new(start, self.pos))),
            '^' => Ok(Token::new(TokenKind::Caret, Span::new(start, self.pos))),
            '%' => Ok(Token::new(TokenKind::Percent, Span::new(start, self.pos))),
            '(' => Ok(Token::new(TokenKind::LParen, Span::new(start, self.pos))),
            ')' => Ok(Token::new(TokenKind::RParen, Span::new(start, self.pos))),
            ',' => Ok(Token::new(TokenKind::Comma, Span::new(start, self.pos))),
            c if c.is_ascii_digit() || c == '.' => self.lex_number(start),
            c if c.is_alphabetic() || c == '_' => self.lex_ident(start),
            c => Err(ExprError::lex(
                format!("unexpected character '{c}'"),
                Span::new(start, self.pos),
            )),
        }
    }

    fn lex_number(&mut self, start: usize) -> ExprResult<Token> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        // Scientific suffix: 1e3, 2.5e-4
        if matches!(self.peek(), Some('e') | Some('E')) {
            let next = self.peek_at(1);
            let after_sign = self.peek_at(2);
            let has_exponent = next.is_some_and(|c| c.is_ascii_digit())
                || (matches!(next, Some('+') | Some('-'))
                    && after_sign.is_some_and(|c| c.is_ascii_digit()));
            if has_exponent {
                self.advance();
                if matches!(self.peek(), Some('+') | Some('-')) {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        let span = Span::new(start, self.pos);
        let text: String = self.source[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map(|value| Token::new(TokenKind::Number(value), span))
            .map_err(|_| ExprError::lex(format!("invalid number '{text}'"), span))
    }

    fn lex_ident(&mut self, start: usize) -> ExprResult<Token> {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }
        let span = Span::new(start, self.pos);
        let name: String = self.source[start..self.pos].iter().collect();
        Ok(Token::new(TokenKind::Ident(name), span))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.source[self.pos];
        self.pos += 1;
        ch
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn numbers_and_operators() {
        assert_eq!(
            kinds("1 + 2.5"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Plus,
                TokenKind::Number(2.5),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(
            kinds("2.5e-3"),
            vec![TokenKind::Number(2.5e-3), TokenKind::Eof]
        );
    }

    #[test]
    fn implicit_multiplication_inserted() {
        assert_eq!(
            kinds("2x"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Star,
                TokenKind::Ident("x".to_string()),
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("3(x)"),
            vec![
                TokenKind::Number(3.0),
                TokenKind::Star,
                TokenKind::LParen,
                TokenKind::Ident("x".to_string()),
                TokenKind::RParen,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn function_call_is_not_implicit_mul() {
        assert_eq!(
            kinds("sin(x)"),
            vec![
                TokenKind::Ident("sin".to_string()),
                TokenKind::LParen,
                TokenKind::Ident("x".to_string()),
                TokenKind::RParen,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            kinds("x ** 2"),
            vec![
                TokenKind::Ident("x".to_string()),
                TokenKind::Caret,
                TokenKind::Number(2.0),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn rejects_unexpected_character() {
        assert!(Lexer::new("x $ 2").tokenize().is_err());
    }

    #[test]
    fn exponent_requires_digits() {
        // "2e" is the number 2 followed by the identifier e (implicit mul)
        assert_eq!(
            kinds("2e"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Star,
                TokenKind::Ident("e".to_string()),
                TokenKind::Eof
            ]
        );
    }
}
