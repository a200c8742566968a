//! A small quantities layer: dimensions, named and composite units,
//! metric prefixes, unit lookup, and unit-tagged values.

pub mod composite;
pub mod dimension;
pub mod parsing;
pub mod prefix;
pub mod quantity;
pub mod unit;
pub mod unit_with_power;

pub use composite::{CompositeUnit, IncompatibleUnitsError};
pub use dimension::{BaseDimension, Dimension};
pub use prefix::{MetricPrefix, MICRO_SIGN};
pub use quantity::{Quantity, Rescale, strip_units};
pub use unit::Unit;
pub use unit_with_power::UnitWithPower;

#[cfg(test)]
pub(crate) mod test_utils {
  use super::unit::Unit;
  use super::dimension::BaseDimension;

  use num::pow::Pow;

  pub fn meters() -> Unit {
    Unit::new("m", BaseDimension::Length, 1.0)
  }

  pub fn kilometers() -> Unit {
    Unit::new("km", BaseDimension::Length, 1000.0)
  }

  pub fn seconds() -> Unit {
    Unit::new("s", BaseDimension::Time, 1.0)
  }

  pub fn minutes() -> Unit {
    Unit::new("min", BaseDimension::Time, 60.0)
  }

  pub fn liters() -> Unit {
    Unit::new("L", BaseDimension::Length.pow(3), 1e-3)
  }
}
