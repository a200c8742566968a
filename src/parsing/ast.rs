use super::error::EvalError;
use super::source::Span;
use crate::units::composite::CompositeUnit;
use crate::units::parsing::UnitParser;

use std::fmt::{self, Display, Formatter};

/// A parsed unit expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitExpr {
  Symbol { name: String, span: Span },
  /// A bare integer. Only `1` evaluates (to the unitless value), so
  /// that reciprocal units like `1/s` can be written.
  Integer { text: String, span: Span },
  Binary { op: BinaryOp, left: Box<UnitExpr>, right: Box<UnitExpr> },
  /// `exponent_span` covers the exponent, including any sign.
  Power { base: Box<UnitExpr>, exponent: i64, exponent_span: Span },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Mul,
  Div,
}

impl UnitExpr {
  pub fn symbol(name: impl Into<String>, span: Span) -> Self {
    UnitExpr::Symbol { name: name.into(), span }
  }

  pub fn binary(op: BinaryOp, left: UnitExpr, right: UnitExpr) -> Self {
    UnitExpr::Binary { op, left: Box::new(left), right: Box::new(right) }
  }

  pub fn power(base: UnitExpr, exponent: i64, exponent_span: Span) -> Self {
    UnitExpr::Power { base: Box::new(base), exponent, exponent_span }
  }

  /// The source span covered by this expression. Enclosing
  /// parentheses are not included.
  pub fn span(&self) -> Span {
    match self {
      UnitExpr::Symbol { span, .. } | UnitExpr::Integer { span, .. } => *span,
      UnitExpr::Binary { left, right, .. } => left.span().merge(right.span()),
      UnitExpr::Power { base, exponent_span, .. } => base.span().merge(*exponent_span),
    }
  }

  /// Evaluates the expression, resolving each symbol with `parser`.
  /// Operands are evaluated left to right, so an
  /// [`EvalError::UnrecognizedSymbol`] always names the leftmost
  /// unknown symbol.
  ///
  /// Exponents which leave the `i64` range, either in the unit itself
  /// or in its dimension, fail with [`EvalError::ExponentOverflow`].
  pub fn evaluate<P>(&self, parser: &P) -> Result<CompositeUnit, EvalError>
  where P: UnitParser + ?Sized {
    let unit = self.evaluate_node(parser)?;
    if unit.checked_dimension().is_none() {
      return Err(self.overflow());
    }
    Ok(unit)
  }

  fn evaluate_node<P>(&self, parser: &P) -> Result<CompositeUnit, EvalError>
  where P: UnitParser + ?Sized {
    match self {
      UnitExpr::Symbol { name, span } => {
        parser.parse_unit(name)
          .map(CompositeUnit::from)
          .map_err(|_| EvalError::UnrecognizedSymbol { token: name.clone(), span: *span })
      }
      UnitExpr::Integer { text, span } => {
        if text.trim_start_matches('0') == "1" {
          Ok(CompositeUnit::unitless())
        } else {
          Err(EvalError::ScalarFactor { text: text.clone(), span: *span })
        }
      }
      UnitExpr::Binary { op, left, right } => {
        let left = left.evaluate_node(parser)?;
        let right = right.evaluate_node(parser)?;
        let product = match op {
          BinaryOp::Mul => left.checked_mul(right),
          BinaryOp::Div => left.checked_div(right),
        };
        product.ok_or_else(|| self.overflow())
      }
      UnitExpr::Power { base, exponent, exponent_span } => {
        base.evaluate_node(parser)?
          .checked_pow(*exponent)
          .ok_or_else(|| EvalError::ExponentOverflow { text: exponent.to_string(), span: *exponent_span })
      }
    }
  }

  fn overflow(&self) -> EvalError {
    EvalError::ExponentOverflow { text: self.to_string(), span: self.span() }
  }
}

impl Display for BinaryOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      BinaryOp::Mul => write!(f, "*"),
      BinaryOp::Div => write!(f, "/"),
    }
  }
}

/// Fully parenthesized rendering, mostly useful in tests and logs.
impl Display for UnitExpr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      UnitExpr::Symbol { name, .. } => write!(f, "{name}"),
      UnitExpr::Integer { text, .. } => write!(f, "{text}"),
      UnitExpr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
      UnitExpr::Power { base, exponent, .. } => write!(f, "{base}^{exponent}"),
    }
  }
}
