//! Parsing free-form unit strings, as found in data file headers,
//! into [`CompositeUnit`] values.
//!
//! Input is sanitized against an [`AliasTable`] and then evaluated
//! against a [`UnitParser`]. When evaluation stops at a symbol such as
//! `ug`, the leading `u` is read as the micro sign and the string is
//! tried again.

use crate::aliases::{AliasTable, default_aliases};
use crate::parsing::{EvalError, evaluate_unit_expr};
use crate::sanitize::sanitize;
use crate::units::composite::CompositeUnit;
use crate::units::parsing::{UnitParser, shared_default_parser};
use crate::units::prefix::MICRO_SIGN;

use thiserror::Error;
use tracing::debug;

/// Upper bound on the number of `u` to `µ` corrections applied to a
/// single unit string.
pub const MAX_MICRO_RETRIES: usize = 8;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitParsingError {
  #[error(transparent)]
  Evaluator(#[from] EvalError),
  #[error("could not parse unit string '{original}' (also tried '{corrected}'): {source}")]
  MicroRetry {
    original: String,
    corrected: String,
    source: Box<UnitParsingError>,
  },
  #[error("gave up on unit string '{original}' after {limit} micro prefix corrections")]
  RetryLimit { original: String, limit: usize },
}

/// Sanitizes and evaluates unit strings against a fixed alias table
/// and unit lookup.
#[derive(Debug, Clone)]
pub struct UnitStringParser<'a, P: ?Sized> {
  aliases: &'a AliasTable,
  parser: &'a P,
  prefixes: Vec<String>,
}

impl UnitParsingError {
  /// The innermost error, following [`UnitParsingError::MicroRetry`]
  /// chains.
  pub fn innermost(&self) -> &UnitParsingError {
    match self {
      UnitParsingError::MicroRetry { source, .. } => source.innermost(),
      err => err,
    }
  }
}

impl<'a, P: UnitParser + ?Sized> UnitStringParser<'a, P> {
  pub fn new(aliases: &'a AliasTable, parser: &'a P) -> Self {
    let prefixes = parser.prefix_names();
    Self { aliases, parser, prefixes }
  }

  pub fn sanitize(&self, raw: &str) -> String {
    sanitize(raw, self.aliases, &self.prefixes)
  }

  pub fn parse(&self, raw: &str) -> Result<CompositeUnit, UnitParsingError> {
    self.parse_with_retries(raw, 0)
  }

  fn parse_with_retries(&self, raw: &str, retries: usize) -> Result<CompositeUnit, UnitParsingError> {
    let sanitized = self.sanitize(raw);
    let err = match evaluate_unit_expr(&sanitized, self.parser) {
      Ok(unit) => return Ok(unit),
      Err(err) => err,
    };
    let Some(corrected) = micro_correction(&sanitized, &err) else {
      return Err(err.into());
    };
    if retries >= MAX_MICRO_RETRIES {
      return Err(UnitParsingError::RetryLimit { original: raw.to_owned(), limit: MAX_MICRO_RETRIES });
    }
    debug!(original = raw, corrected = %corrected, attempt = retries + 1, "retrying unit string with micro prefix");
    self.parse_with_retries(&corrected, retries + 1).map_err(|source| {
      UnitParsingError::MicroRetry { original: raw.to_owned(), corrected, source: Box::new(source) }
    })
  }
}

/// If `err` names a symbol of the form `u<letter>...`, returns
/// `sanitized` with that `u` replaced by the micro sign.
fn micro_correction(sanitized: &str, err: &EvalError) -> Option<String> {
  let EvalError::UnrecognizedSymbol { span, .. } = err else {
    return None;
  };
  let mut chars = span.slice(sanitized)?.chars();
  if chars.next() != Some('u') || !chars.next().is_some_and(char::is_alphabetic) {
    return None;
  }
  let start = span.start.0;
  let mut corrected = String::with_capacity(sanitized.len() + 1);
  corrected.push_str(sanitized.get(..start)?);
  corrected.push(MICRO_SIGN);
  corrected.push_str(sanitized.get(start + 1..)?);
  Some(corrected)
}

fn with_aliases<T>(aliases: Option<&AliasTable>, f: impl FnOnce(&AliasTable) -> T) -> T {
  match aliases {
    Some(aliases) => f(aliases),
    None => f(&*default_aliases()),
  }
}

/// Sanitizes `raw` against `aliases`, or the process-wide default
/// alias table if `None`, and the default parser's prefixes.
pub fn sanitize_raw_unit_strings(raw: &str, aliases: Option<&AliasTable>) -> String {
  with_aliases(aliases, |aliases| {
    UnitStringParser::new(aliases, shared_default_parser()).sanitize(raw)
  })
}

/// Parses `raw` against `aliases` (or the process-wide default alias
/// table) and the default unit parser.
pub fn parse_unit_string(raw: &str, aliases: Option<&AliasTable>) -> Result<CompositeUnit, UnitParsingError> {
  with_aliases(aliases, |aliases| {
    UnitStringParser::new(aliases, shared_default_parser()).parse(raw)
  })
}
