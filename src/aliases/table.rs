use super::config::{AliasDirective, AliasMode, ConfigFormatError, parse_alias_config};

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, warn};

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A canonical unit symbol together with its known alternate
/// spellings, in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
  pub canonical: String,
  pub aliases: Vec<String>,
}

/// Mapping from canonical unit symbol to alternate spellings. Entries
/// keep the order in which they were first added, which is the order
/// the sanitizer applies them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
  entries: Vec<AliasEntry>,
}

/// Record of a `replace` directive which discarded a non-empty alias
/// list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasOverwrite {
  pub canonical: String,
  pub old_aliases: Vec<String>,
  pub new_aliases: Vec<String>,
  pub line: usize,
}

#[derive(Debug, Error)]
pub enum LoadAliasesError {
  #[error("could not read alias file {}: {source}", path.display())]
  Io { path: PathBuf, #[source] source: io::Error },
  #[error("malformed alias file: {0}")]
  Format(#[from] ConfigFormatError),
}

impl AliasTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parses an alias configuration into a fresh table.
  pub fn load(text: &str) -> Result<Self, ConfigFormatError> {
    let mut table = Self::new();
    table.merge_str(text)?;
    Ok(table)
  }

  /// Reads and parses an alias configuration file into a fresh table.
  pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadAliasesError> {
    let mut table = Self::new();
    table.merge_file(path)?;
    Ok(table)
  }

  /// Parses `text` and merges it into this table. On a format error
  /// the table is left unchanged.
  pub fn merge_str(&mut self, text: &str) -> Result<Vec<AliasOverwrite>, ConfigFormatError> {
    let directives = parse_alias_config(text)?;
    Ok(self.merge(directives))
  }

  pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<AliasOverwrite>, LoadAliasesError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
      .map_err(|source| LoadAliasesError::Io { path: path.to_owned(), source })?;
    let overwrites = self.merge_str(&text)?;
    debug!(path = %path.display(), entries = self.len(), "merged alias file");
    Ok(overwrites)
  }

  /// Applies directives in order. `append` extends (or creates) an
  /// entry, keeping duplicates; `replace` overwrites it. Every
  /// `replace` which discards a non-empty list is logged as a warning
  /// and returned.
  pub fn merge(&mut self, directives: impl IntoIterator<Item = AliasDirective>) -> Vec<AliasOverwrite> {
    let mut overwrites = Vec::new();
    for directive in directives {
      let AliasDirective { canonical, aliases, mode, line } = directive;
      let Some(entry) = self.entries.iter_mut().find(|e| e.canonical == canonical) else {
        self.entries.push(AliasEntry { canonical, aliases });
        continue;
      };
      match mode {
        AliasMode::Append => {
          entry.aliases.extend(aliases);
        }
        AliasMode::Replace => {
          let old_aliases = std::mem::replace(&mut entry.aliases, aliases);
          if !old_aliases.is_empty() {
            warn!(
              canonical = %canonical,
              line,
              old = %old_aliases.iter().join(", "),
              new = %entry.aliases.iter().join(", "),
              "replacing alias list",
            );
            overwrites.push(AliasOverwrite {
              canonical,
              old_aliases,
              new_aliases: entry.aliases.clone(),
              line,
            });
          }
        }
      }
    }
    overwrites
  }

  pub fn aliases_for(&self, canonical: &str) -> Option<&[String]> {
    self.entries.iter()
      .find(|e| e.canonical == canonical)
      .map(|e| e.aliases.as_slice())
  }

  pub fn contains(&self, canonical: &str) -> bool {
    self.aliases_for(canonical).is_some()
  }

  pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Renders the table back in configuration syntax.
impl Display for AliasTable {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for entry in &self.entries {
      writeln!(f, "{}: {}", entry.canonical, entry.aliases.iter().join(", "))?;
    }
    Ok(())
  }
}
