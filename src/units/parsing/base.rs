use crate::units::unit::Unit;

use thiserror::Error;

/// A type capable of resolving a single unit symbol (such as "km" or
/// "ppbv") to a [`Unit`]. A unit parser is only responsible for named
/// units; products, quotients and powers are handled by the
/// expression evaluator in [`crate::parsing`].
pub trait UnitParser {
  /// Parses the string as a unit, or produces an error if the string
  /// is not a known unit symbol.
  fn parse_unit(&self, input: &str) -> Result<Unit, UnitParserError>;

  /// The magnitude prefixes this parser accepts in front of unit
  /// names. The sanitizer uses these as permitted left context for
  /// alias matches.
  fn prefix_names(&self) -> Vec<String> {
    Vec::new()
  }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to parse '{input}' as a unit")]
pub struct UnitParserError {
  pub input: String,
}

impl UnitParserError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}

impl<'a, P> UnitParser for &'a P
where P: UnitParser + ?Sized {
  fn parse_unit(&self, input: &str) -> Result<Unit, UnitParserError> {
    (**self).parse_unit(input)
  }

  fn prefix_names(&self) -> Vec<String> {
    (**self).prefix_names()
  }
}
