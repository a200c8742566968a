use super::source::{SourceOffset, Span};

use thiserror::Error;

/// Failure to tokenize, parse, or evaluate a unit expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
  /// A symbol which the unit parser does not know. Carries the
  /// symbol and its position so callers can decide how to recover.
  #[error("unrecognized unit symbol '{token}' at {span}")]
  UnrecognizedSymbol { token: String, span: Span },
  #[error("invalid character '{ch}' at {offset}")]
  InvalidCharacter { ch: char, offset: SourceOffset },
  #[error("unexpected token '{token}' at {span}")]
  UnexpectedToken { token: String, span: Span },
  #[error("unexpected end of unit expression")]
  UnexpectedEof,
  #[error("exponent '{text}' at {span} is out of range")]
  ExponentOverflow { text: String, span: Span },
  #[error("numeric factor '{text}' at {span} is not allowed in a unit expression")]
  ScalarFactor { text: String, span: Span },
}
