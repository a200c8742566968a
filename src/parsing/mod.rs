//! Tokenizing, parsing, and evaluating unit expressions such as
//! `kg * m^2 / s^-2`.

pub mod ast;
pub mod error;
pub mod parser;
pub mod precedence;
pub mod source;
pub mod tokenizer;

pub use ast::{BinaryOp, UnitExpr};
pub use error::EvalError;
pub use source::{SourceOffset, Span};

use crate::units::composite::CompositeUnit;
use crate::units::parsing::UnitParser;

/// Tokenizes and parses `input` into an expression tree.
pub fn parse_unit_expr(input: &str) -> Result<UnitExpr, EvalError> {
  let tokens = tokenizer::tokenize(input)?;
  parser::parse_tokens(&tokens)
}

/// Parses `input` and evaluates it against `parser`.
pub fn evaluate_unit_expr<P>(input: &str, parser: &P) -> Result<CompositeUnit, EvalError>
where P: UnitParser + ?Sized {
  parse_unit_expr(input)?.evaluate(parser)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::BaseDimension;
  use crate::units::parsing::default_parser;

  use approx::assert_relative_eq;
  use num::pow::Pow;

  #[test]
  fn test_evaluate_compound() {
    let parser = default_parser();
    let unit = evaluate_unit_expr("kg * m^2 / s^2", &parser).unwrap();
    let expected_dim =
      BaseDimension::Mass * BaseDimension::Length.pow(2) / BaseDimension::Time.pow(2);
    assert_eq!(unit.dimension(), expected_dim);
    assert_relative_eq!(unit.amount_of_base(), 1000.0);
  }

  #[test]
  fn test_evaluate_reciprocal() {
    let parser = default_parser();
    let unit = evaluate_unit_expr("1 / s", &parser).unwrap();
    assert_eq!(unit.to_string(), "s^-1");
    let unit = evaluate_unit_expr("01/min", &parser).unwrap();
    assert_relative_eq!(unit.amount_of_base(), 1.0 / 60.0);
  }

  #[test]
  fn test_scalar_factor_rejected() {
    let parser = default_parser();
    let err = evaluate_unit_expr("1000 * m", &parser).unwrap_err();
    assert!(matches!(err, EvalError::ScalarFactor { text, .. } if text == "1000"));
  }

  #[test]
  fn test_leftmost_unknown_symbol_reported() {
    let parser = default_parser();
    let err = evaluate_unit_expr("m * ug / bogus", &parser).unwrap_err();
    assert_eq!(
      err,
      EvalError::UnrecognizedSymbol {
        token: String::from("ug"),
        span: Span::new(SourceOffset(4), SourceOffset(6)),
      },
    );
  }

  #[test]
  fn test_exponent_overflow_spans() {
    let parser = default_parser();
    let err = evaluate_unit_expr("s * m^9223372036854775807 * (m)", &parser).unwrap_err();
    assert_eq!(
      err,
      EvalError::ExponentOverflow {
        text: String::from("((s * m^9223372036854775807) * m)"),
        span: Span::new(SourceOffset(0), SourceOffset(30)),
      },
    );
    let err = evaluate_unit_expr("(m^-3)^(-3074457345618258603)", &parser).unwrap_err();
    assert_eq!(
      err,
      EvalError::ExponentOverflow {
        text: String::from("-3074457345618258603"),
        span: Span::new(SourceOffset(8), SourceOffset(28)),
      },
    );
  }

  #[test]
  fn test_evaluate_micro_sign() {
    let parser = default_parser();
    let unit = evaluate_unit_expr("\u{B5}g / m^3", &parser).unwrap();
    assert_relative_eq!(unit.amount_of_base(), 1e-6);
  }
}
