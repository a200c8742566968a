//! Pratt parser for unit expressions.
//!
//! ```text
//! expr     := operand (('*' | '/') operand)*
//! operand  := primary ('^' exponent)*
//! primary  := SYMBOL | INTEGER | '(' expr ')'
//! exponent := ['+' | '-'] INTEGER | '(' ['+' | '-'] INTEGER ')'
//! ```
//!
//! `*` and `/` share a precedence and associate to the left; `^`
//! binds tighter than both. `**` is accepted as a spelling of `^`.

use super::ast::{BinaryOp, UnitExpr};
use super::error::EvalError;
use super::precedence::Precedence;
use super::source::Span;
use super::tokenizer::{Token, TokenKind};

const PRODUCT_PRECEDENCE: Precedence = Precedence::new(1);
const POWER_PRECEDENCE: Precedence = Precedence::new(2);

/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING: usize = 32;

/// Longest token stream accepted. Evaluation recurses once per
/// operator, so this bounds its depth too.
pub const MAX_TOKENS: usize = 1024;

/// Parses a complete token stream. Trailing tokens are an error.
pub fn parse_tokens(tokens: &[Token]) -> Result<UnitExpr, EvalError> {
  if let Some(token) = tokens.get(MAX_TOKENS) {
    return Err(unexpected(token));
  }
  let mut parser = Parser { tokens, position: 0, depth: 0 };
  let expr = parser.parse_expr(Precedence::MIN)?;
  match parser.peek() {
    None => Ok(expr),
    Some(token) => Err(unexpected(token)),
  }
}

struct Parser<'t> {
  tokens: &'t [Token],
  position: usize,
  depth: usize,
}

#[derive(Debug, Clone, Copy)]
enum InfixOp {
  Binary(BinaryOp),
  Power,
}

impl InfixOp {
  fn from_token(token: &Token) -> Option<InfixOp> {
    match token.kind {
      TokenKind::Star => Some(InfixOp::Binary(BinaryOp::Mul)),
      TokenKind::Slash => Some(InfixOp::Binary(BinaryOp::Div)),
      TokenKind::Caret => Some(InfixOp::Power),
      _ => None,
    }
  }

  fn precedence(self) -> Precedence {
    match self {
      InfixOp::Binary(_) => PRODUCT_PRECEDENCE,
      InfixOp::Power => POWER_PRECEDENCE,
    }
  }
}

impl<'t> Parser<'t> {
  fn peek(&self) -> Option<&'t Token> {
    self.tokens.get(self.position)
  }

  fn next(&mut self) -> Option<&'t Token> {
    let token = self.tokens.get(self.position)?;
    self.position += 1;
    Some(token)
  }

  fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, EvalError> {
    let token = self.next().ok_or(EvalError::UnexpectedEof)?;
    if token.kind == kind {
      Ok(token)
    } else {
      Err(unexpected(token))
    }
  }

  fn parse_expr(&mut self, min_precedence: Precedence) -> Result<UnitExpr, EvalError> {
    let mut left = self.parse_primary()?;
    while let Some(token) = self.peek() {
      let Some(op) = InfixOp::from_token(token) else {
        // A closing parenthesis ends the operand; anything else is
        // reported by the caller.
        break;
      };
      if op.precedence() < min_precedence {
        break;
      }
      self.position += 1;
      left = match op {
        InfixOp::Binary(op) => {
          let right = self.parse_expr(op_right_precedence(op))?;
          UnitExpr::binary(op, left, right)
        }
        InfixOp::Power => {
          let (exponent, span) = self.parse_exponent()?;
          UnitExpr::power(left, exponent, span)
        }
      };
    }
    Ok(left)
  }

  fn parse_primary(&mut self) -> Result<UnitExpr, EvalError> {
    let token = self.next().ok_or(EvalError::UnexpectedEof)?;
    match token.kind {
      TokenKind::Symbol => Ok(UnitExpr::symbol(token.text.clone(), token.span)),
      TokenKind::Integer => Ok(UnitExpr::Integer { text: token.text.clone(), span: token.span }),
      TokenKind::LeftParen => {
        if self.depth >= MAX_NESTING {
          return Err(unexpected(token));
        }
        self.depth += 1;
        let inner = self.parse_expr(Precedence::MIN)?;
        self.expect(TokenKind::RightParen)?;
        self.depth -= 1;
        Ok(inner)
      }
      _ => Err(unexpected(token)),
    }
  }

  fn parse_exponent(&mut self) -> Result<(i64, Span), EvalError> {
    if self.peek().is_some_and(|t| t.kind == TokenKind::LeftParen) {
      self.position += 1;
      let exponent = self.parse_signed_integer()?;
      self.expect(TokenKind::RightParen)?;
      Ok(exponent)
    } else {
      self.parse_signed_integer()
    }
  }

  fn parse_signed_integer(&mut self) -> Result<(i64, Span), EvalError> {
    let mut negative = false;
    let mut token = self.next().ok_or(EvalError::UnexpectedEof)?;
    let sign_span = token.span;
    if matches!(token.kind, TokenKind::Plus | TokenKind::Minus) {
      negative = token.kind == TokenKind::Minus;
      token = self.next().ok_or(EvalError::UnexpectedEof)?;
    }
    if token.kind != TokenKind::Integer {
      return Err(unexpected(token));
    }
    let magnitude: i64 = token.text.parse()
      .map_err(|_| EvalError::ExponentOverflow { text: token.text.clone(), span: token.span })?;
    let exponent = if negative { -magnitude } else { magnitude };
    Ok((exponent, sign_span.merge(token.span)))
  }
}

/// Left-associative: the right operand binds one step tighter.
fn op_right_precedence(_op: BinaryOp) -> Precedence {
  PRODUCT_PRECEDENCE.incremented()
}

fn unexpected(token: &Token) -> EvalError {
  EvalError::UnexpectedToken { token: token.text.clone(), span: token.span }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::SourceOffset;
  use crate::parsing::tokenizer::tokenize;

  fn parse(input: &str) -> Result<String, EvalError> {
    parse_tokens(&tokenize(input)?).map(|expr| expr.to_string())
  }

  #[test]
  fn test_products_associate_left() {
    assert_eq!(parse("m * s / kg").unwrap(), "((m * s) / kg)");
    assert_eq!(parse("m / s / s").unwrap(), "((m / s) / s)");
  }

  #[test]
  fn test_power_binds_tighter() {
    assert_eq!(parse("kg * m^2 / s^-2").unwrap(), "((kg * m^2) / s^-2)");
    assert_eq!(parse("m**3").unwrap(), "m^3");
    assert_eq!(parse("s^(-1)").unwrap(), "s^-1");
    assert_eq!(parse("cm^+3").unwrap(), "cm^3");
  }

  #[test]
  fn test_parentheses() {
    assert_eq!(parse("mol / (m^2 * s)").unwrap(), "(mol / (m^2 * s))");
    assert_eq!(parse("(m / s)^2").unwrap(), "(m / s)^2");
    assert_eq!(parse("1 / s").unwrap(), "(1 / s)");
  }

  #[test]
  fn test_syntax_errors() {
    assert_eq!(parse(""), Err(EvalError::UnexpectedEof));
    assert_eq!(parse("m *"), Err(EvalError::UnexpectedEof));
    assert!(matches!(parse("m s"), Err(EvalError::UnexpectedToken { token, .. }) if token == "s"));
    assert!(matches!(parse("m ^ s"), Err(EvalError::UnexpectedToken { token, .. }) if token == "s"));
    assert!(matches!(parse("(m"), Err(EvalError::UnexpectedEof)));
    assert!(matches!(parse("m)"), Err(EvalError::UnexpectedToken { token, .. }) if token == ")"));
    assert!(matches!(parse("-m"), Err(EvalError::UnexpectedToken { token, .. }) if token == "-"));
  }

  #[test]
  fn test_nesting_limit() {
    let nested = |depth: usize| format!("{}m{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&nested(MAX_NESTING)).unwrap(), "m");
    assert!(matches!(parse(&nested(MAX_NESTING + 1)), Err(EvalError::UnexpectedToken { token, .. }) if token == "("));
    assert!(matches!(parse(&nested(10_000)), Err(EvalError::UnexpectedToken { token, .. }) if token == "("));
  }

  #[test]
  fn test_token_limit() {
    let long_product = vec!["m"; MAX_TOKENS].join("*");
    assert!(matches!(parse(&long_product), Err(EvalError::UnexpectedToken { .. })));
    let short_product = vec!["m"; 16].join("*");
    assert!(parse(&short_product).is_ok());
  }

  #[test]
  fn test_exponent_spans() {
    let expr = parse_tokens(&tokenize("kg^-2").unwrap()).unwrap();
    let UnitExpr::Power { exponent_span, .. } = &expr else {
      panic!("expected a power, got {expr}");
    };
    assert_eq!(*exponent_span, Span::new(SourceOffset(3), SourceOffset(5)));
    assert_eq!(expr.span(), Span::new(SourceOffset(0), SourceOffset(5)));
  }

  #[test]
  fn test_exponent_overflow() {
    assert!(matches!(parse("m^99999999999999999999"), Err(EvalError::ExponentOverflow { .. })));
  }
}
