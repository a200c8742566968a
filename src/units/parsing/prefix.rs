use super::base::{UnitParser, UnitParserError};
use crate::units::prefix::MetricPrefix;
use crate::units::unit::Unit;

use std::collections::HashMap;

/// A [`UnitParser`] which accepts everything its inner parser
/// accepts, as well as any of those names preceded by exactly one
/// metric prefix.
#[derive(Debug, Clone)]
pub struct PrefixParser<P> {
  inner: P,
  prefixes: HashMap<String, MetricPrefix>,
  longest_prefix_len: usize,
}

impl<P> PrefixParser<P> {
  pub fn new(inner: P, prefixes: impl IntoIterator<Item = MetricPrefix>) -> Self {
    let prefixes: HashMap<_, _> = prefixes.into_iter().map(|p| (p.prefix_name.clone(), p)).collect();
    let longest_prefix_len = prefixes.keys().map(|s| s.len()).max().unwrap_or(0);
    Self { inner, prefixes, longest_prefix_len }
  }

  /// A `PrefixParser` based on the given inner parser, which accepts
  /// standard SI prefixes, as per [`MetricPrefix::si_prefixes`].
  pub fn new_si(inner: P) -> Self {
    Self::new(inner, MetricPrefix::si_prefixes())
  }
}

impl<P: UnitParser> UnitParser for PrefixParser<P> {
  fn parse_unit(&self, input: &str) -> Result<Unit, UnitParserError> {
    self.inner.parse_unit(input).or_else(|err| {
      for i in 1..=self.longest_prefix_len.min(input.len()) {
        if !input.is_char_boundary(i) {
          continue;
        }
        let (prefix, rest) = input.split_at(i);
        if let Some(prefix) = self.prefixes.get(prefix) {
          if let Ok(unit) = self.inner.parse_unit(rest) {
            return Ok(prefix.apply(unit));
          }
        }
      }
      Err(err)
    })
  }

  fn prefix_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.prefixes.keys().cloned().collect();
    names.sort();
    names
  }
}
