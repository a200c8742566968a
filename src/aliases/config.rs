//! Parser for the alias configuration format.
//!
//! Each non-blank line has the form
//!
//! ```text
//! <canonical>:<alias1>,<alias2>,...[:<mode>]
//! ```
//!
//! where `<mode>` is `append` (the default) or `replace`, compared
//! case-insensitively. Lines starting with `#` are comments.

use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How a directive combines with an existing entry for the same
/// canonical symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AliasMode {
  /// Extend the existing alias list (or create the entry).
  #[default]
  Append,
  /// Overwrite the existing alias list.
  Replace,
}

/// One parsed line of an alias configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDirective {
  pub canonical: String,
  pub aliases: Vec<String>,
  pub mode: AliasMode,
  /// 1-based line number in the source text.
  pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigFormatError {
  #[error("line {line}: expected '<canonical>:<aliases>[:<mode>]', got '{content}'")]
  MissingFields { line: usize, content: String },
  #[error("line {line}: too many ':'-separated fields in '{content}'")]
  TooManyFields { line: usize, content: String },
  #[error("line {line}: unknown alias mode '{mode}' (expected 'append' or 'replace')")]
  UnknownMode { line: usize, mode: String },
  #[error("line {line}: empty canonical unit symbol in '{content}'")]
  EmptyCanonical { line: usize, content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown alias mode '{0}'")]
pub struct ParseAliasModeError(String);

impl ConfigFormatError {
  pub fn line(&self) -> usize {
    match self {
      ConfigFormatError::MissingFields { line, .. } => *line,
      ConfigFormatError::TooManyFields { line, .. } => *line,
      ConfigFormatError::UnknownMode { line, .. } => *line,
      ConfigFormatError::EmptyCanonical { line, .. } => *line,
    }
  }
}

impl FromStr for AliasMode {
  type Err = ParseAliasModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "append" => Ok(AliasMode::Append),
      "replace" => Ok(AliasMode::Replace),
      _ => Err(ParseAliasModeError(s.trim().to_owned())),
    }
  }
}

impl Display for AliasMode {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      AliasMode::Append => write!(f, "append"),
      AliasMode::Replace => write!(f, "replace"),
    }
  }
}

/// Parses a whole alias configuration. Fails on the first malformed
/// line.
pub fn parse_alias_config(text: &str) -> Result<Vec<AliasDirective>, ConfigFormatError> {
  text.lines()
    .enumerate()
    .filter(|(_, line)| !is_skippable(line))
    .map(|(index, line)| parse_directive(line, index + 1))
    .collect()
}

fn is_skippable(line: &str) -> bool {
  let line = line.trim();
  line.is_empty() || line.starts_with('#')
}

/// Parses a single directive line. `line_number` is only used for
/// error reporting.
pub fn parse_directive(line: &str, line_number: usize) -> Result<AliasDirective, ConfigFormatError> {
  let fields: Vec<&str> = line.split(':').collect();
  let (canonical, aliases, mode) = match fields.as_slice() {
    [canonical, aliases] => (*canonical, *aliases, None),
    [canonical, aliases, mode] => (*canonical, *aliases, Some(*mode)),
    [_] => {
      return Err(ConfigFormatError::MissingFields { line: line_number, content: line.to_owned() });
    }
    _ => {
      return Err(ConfigFormatError::TooManyFields { line: line_number, content: line.to_owned() });
    }
  };

  let canonical = canonical.trim();
  if canonical.is_empty() {
    return Err(ConfigFormatError::EmptyCanonical { line: line_number, content: line.to_owned() });
  }
  let mode = match mode {
    None => AliasMode::Append,
    Some(mode) => mode.parse::<AliasMode>().map_err(|ParseAliasModeError(mode)| {
      ConfigFormatError::UnknownMode { line: line_number, mode }
    })?,
  };
  let aliases = aliases.split(',')
    .map(str::trim)
    .filter(|alias| !alias.is_empty())
    .map(str::to_owned)
    .collect();

  Ok(AliasDirective {
    canonical: canonical.to_owned(),
    aliases,
    mode,
    line: line_number,
  })
}
