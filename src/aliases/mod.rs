//! The alias table: alternate spellings of canonical unit symbols.
//!
//! A default table is bundled with the crate and shared process-wide
//! behind a read-write lock. Explicit [`AliasTable`] values can be
//! passed to every operation instead.

mod config;
mod table;

pub use config::{AliasDirective, AliasMode, ConfigFormatError, parse_alias_config, parse_directive};
pub use table::{AliasEntry, AliasOverwrite, AliasTable, LoadAliasesError};

use once_cell::sync::Lazy;

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// The alias configuration shipped with the crate.
pub const BUNDLED_ALIASES: &str = include_str!("../../resources/unit_aliases.txt");

static DEFAULT_ALIASES: Lazy<RwLock<AliasTable>> =
  Lazy::new(|| RwLock::new(AliasTable::bundled()));

impl AliasTable {
  /// A fresh copy of the bundled alias table.
  pub fn bundled() -> Self {
    AliasTable::load(BUNDLED_ALIASES).expect("bundled alias table should be well-formed")
  }
}

/// Read access to the process-wide default alias table.
pub fn default_aliases() -> RwLockReadGuard<'static, AliasTable> {
  DEFAULT_ALIASES.read().unwrap_or_else(PoisonError::into_inner)
}

/// Merges an alias configuration into the process-wide default table.
pub fn merge_default_aliases(text: &str) -> Result<Vec<AliasOverwrite>, ConfigFormatError> {
  let mut table = DEFAULT_ALIASES.write().unwrap_or_else(PoisonError::into_inner);
  table.merge_str(text)
}

/// Merges an alias configuration file into the process-wide default
/// table.
pub fn merge_default_aliases_from_path(path: impl AsRef<Path>) -> Result<Vec<AliasOverwrite>, LoadAliasesError> {
  let mut table = DEFAULT_ALIASES.write().unwrap_or_else(PoisonError::into_inner);
  table.merge_file(path)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bundled_table_loads() {
    let table = AliasTable::bundled();
    assert!(table.contains("deg"));
    assert_eq!(table.aliases_for("deg").unwrap(), &["degree", "degrees", "°"]);
  }

  #[test]
  fn test_bundled_table_shares_ppb_alias() {
    // Both entries list "ppb"; kept exactly as shipped.
    let table = AliasTable::bundled();
    assert!(table.aliases_for("ppb").unwrap().iter().any(|a| a == "ppb"));
    assert_eq!(table.aliases_for("ppbv").unwrap(), &["ppb"]);
  }

  #[test]
  fn test_merge_into_default_table() {
    let overwrites = merge_default_aliases("furlongsymbol: furlong, furlongs").unwrap();
    assert!(overwrites.is_empty());
    assert_eq!(default_aliases().aliases_for("furlongsymbol").unwrap(), &["furlong", "furlongs"]);
    merge_default_aliases("broken line").unwrap_err();
  }
}
