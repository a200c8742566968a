use super::base::{UnitParser, UnitParserError};
use crate::units::unit::Unit;

use std::collections::HashMap;

/// A [`UnitParser`] which looks up the given name in a pre-determined
/// hash table.
#[derive(Debug, Clone, Default)]
pub struct TableBasedParser {
  pub table: HashMap<String, Unit>,
}

impl TableBasedParser {
  pub fn insert(&mut self, unit: Unit) {
    self.table.insert(unit.name().to_owned(), unit);
  }
}

impl UnitParser for TableBasedParser {
  fn parse_unit(&self, input: &str) -> Result<Unit, UnitParserError> {
    self.table.get(input)
      .cloned()
      .ok_or_else(|| UnitParserError::new(input))
  }
}

impl FromIterator<Unit> for TableBasedParser {
  fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
    let table = iter.into_iter()
      .map(|unit| (unit.name().to_owned(), unit))
      .collect();
    TableBasedParser { table }
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;
  use crate::units::dimension::BaseDimension;

  pub fn sample_table() -> TableBasedParser {
    [
      Unit::new("m", BaseDimension::Length, 1.0),
      Unit::new("s", BaseDimension::Time, 1.0),
      Unit::new("min", BaseDimension::Time, 60.0),
      Unit::new("g", BaseDimension::Mass, 1.0),
    ].into_iter().collect()
  }
}
