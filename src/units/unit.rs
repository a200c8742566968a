use super::dimension::Dimension;

use approx::{AbsDiffEq, RelativeEq};

use std::fmt::{self, Formatter, Display};

/// A unit is a named quantity in some [`Dimension`] which can be
/// converted to the "base" unit of that dimension.
///
/// Base units are the SI base units, except that mass is measured in
/// grams rather than kilograms. This keeps "kg", "mg" and "µg" on an
/// equal footing as prefixed forms of "g".
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
  name: String,
  dimension: Dimension,
  /// The amount of the base unit that is equal to one of this unit.
  amount_of_base: f64,
}

impl Unit {
  /// Constructs a new unit, given the unit's name, dimension, and
  /// conversion factor to get to the base unit for the dimension.
  pub fn new(name: impl Into<String>, dimension: impl Into<Dimension>, amount_of_base: f64) -> Self {
    Self {
      name: name.into(),
      dimension: dimension.into(),
      amount_of_base,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn dimension(&self) -> &Dimension {
    &self.dimension
  }

  pub fn amount_of_base(&self) -> f64 {
    self.amount_of_base
  }

  /// Produces a new unit with the name and conversion factor mapped
  /// by the given functions. The dimension is unchanged.
  pub fn augment<F, G>(self, name_fn: F, amount_fn: G) -> Self
  where F: FnOnce(String) -> String,
        G: FnOnce(f64) -> f64 {
    Self {
      name: name_fn(self.name),
      dimension: self.dimension,
      amount_of_base: amount_fn(self.amount_of_base),
    }
  }

  /// Converts a scalar quantity from this unit to the base unit
  /// corresponding to this dimension.
  pub fn to_base(&self, amount: f64) -> f64 {
    amount * self.amount_of_base
  }

  /// Converts a scalar quantity from the base unit of this dimension
  /// into this unit.
  pub fn from_base(&self, amount: f64) -> f64 {
    amount / self.amount_of_base
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

impl AbsDiffEq for Unit {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    f64::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.name == other.name &&
      self.dimension == other.dimension &&
      self.amount_of_base.abs_diff_eq(&other.amount_of_base, epsilon)
  }
}

impl RelativeEq for Unit {
  fn default_max_relative() -> f64 {
    f64::default_max_relative()
  }

  fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
    self.name == other.name &&
      self.dimension == other.dimension &&
      self.amount_of_base.relative_eq(&other.amount_of_base, epsilon, max_relative)
  }
}
