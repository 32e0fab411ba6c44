use crate::ast::{BinOp, Expr};
use crate::error::{ExprError, ExprResult};
use crate::token::{Span, Token, TokenKind};

/// Pratt parser for a single arithmetic expression.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

// Unary minus binds tighter than mul/div but looser than power,
// so -x^2 parses as -(x^2).
const NEG_BP: u8 = 5;

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse exactly one expression spanning the whole token stream.
    pub fn parse_expression(&mut self) -> ExprResult<Expr> {
        let expr = self.parse_expr(0)?;
        match self.peek_kind() {
            TokenKind::Eof => Ok(expr),
            kind => Err(ExprError::parse(
                format!("unexpected trailing {kind:?}"),
                self.peek_span(),
            )),
        }
    }

    fn parse_expr(&mut self, min_bp: u8) -> ExprResult<Expr> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let (op, l_bp, r_bp) = match self.peek_kind() {
                TokenKind::Plus => (BinOp::Add, 1, 2),
                TokenKind::Minus => (BinOp::Sub, 1, 2),
                TokenKind::Star => (BinOp::Mul, 3, 4),
                TokenKind::Slash => (BinOp::Div, 3, 4),
                TokenKind::Percent => (BinOp::Rem, 3, 4),
                // Right-associative: left power above right
                TokenKind::Caret => (BinOp::Pow, 8, 7),
                _ => break,
            };
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr(r_bp)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> ExprResult<Expr> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Ident(name) => {
                if self.peek_kind() == &TokenKind::LParen {
                    self.parse_call(name)
                } else {
                    Ok(Expr::Ident(name))
                }
            }
            TokenKind::Minus => {
                let operand = self.parse_expr(NEG_BP)?;
                Ok(Expr::Neg(Box::new(operand)))
            }
            TokenKind::Plus => {
                // Unary plus is a no-op
                self.parse_expr(NEG_BP)
            }
            TokenKind::LParen => {
                let inner = self.parse_expr(0)?;
                self.expect(TokenKind::RParen, "expected ')'")?;
                Ok(inner)
            }
            kind => Err(ExprError::parse(
                format!("expected expression, found {kind:?}"),
                token.span,
            )),
        }
    }

    fn parse_call(&mut self, name: String) -> ExprResult<Expr> {
        self.expect(TokenKind::LParen, "expected '('")?;
        let mut args = Vec::new();
        if self.peek_kind() != &TokenKind::RParen {
            loop {
                args.push(self.parse_expr(0)?);
                if self.peek_kind() == &TokenKind::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "expected ')' after arguments")?;
        Ok(Expr::Call { name, args })
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> ExprResult<Token> {
        if self.peek_kind() == &kind {
            Ok(self.advance())
        } else {
            Err(ExprError::parse(message, self.peek_span()))
        }
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn peek_span(&self) -> Span {
        self.tokens[self.pos].span
    }
}

/// Lex and parse `source` into an AST.
pub fn parse(source: &str) -> ExprResult<Expr> {
    let tokens = crate::lexer::Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse_expression()
}
