use super::composite::{CompositeUnit, IncompatibleUnitsError};

use ndarray::{Array, Dimension as NdDimension};

use std::fmt::{self, Formatter, Display};

/// A value (a scalar, or a collection of scalars) tagged with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<S> {
  pub value: S,
  pub unit: CompositeUnit,
}

/// Values which can be multiplied through by a conversion factor.
pub trait Rescale {
  fn rescale(self, factor: f64) -> Self;
}

impl Rescale for f64 {
  fn rescale(self, factor: f64) -> Self {
    self * factor
  }
}

impl Rescale for Vec<f64> {
  fn rescale(mut self, factor: f64) -> Self {
    self.iter_mut().for_each(|x| *x *= factor);
    self
  }
}

impl<D: NdDimension> Rescale for Array<f64, D> {
  fn rescale(mut self, factor: f64) -> Self {
    self.mapv_inplace(|x| x * factor);
    self
  }
}

impl<S> Quantity<S> {
  pub fn new(value: S, unit: impl Into<CompositeUnit>) -> Self {
    Self { value, unit: unit.into() }
  }

  pub fn unitless(value: S) -> Self {
    Self::new(value, CompositeUnit::unitless())
  }

  /// Converts this quantity into the given unit, which must have the
  /// same dimension as the current one.
  pub fn try_convert(self, target_unit: CompositeUnit) -> Result<Quantity<S>, IncompatibleUnitsError>
  where S: Rescale {
    let factor = self.unit.conversion_factor(&target_unit)?;
    Ok(Quantity { value: self.value.rescale(factor), unit: target_unit })
  }
}

/// Strips the unit off a quantity, returning the bare value. If a
/// target unit is given, the value is first converted into that unit.
pub fn strip_units<S: Rescale>(
  quantity: Quantity<S>,
  target_unit: Option<&CompositeUnit>,
) -> Result<S, IncompatibleUnitsError> {
  match target_unit {
    None => Ok(quantity.value),
    Some(target_unit) => Ok(quantity.try_convert(target_unit.clone())?.value),
  }
}

impl<S: Display> Display for Quantity<S> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.unit.is_unitless() {
      write!(f, "{}", self.value)
    } else {
      write!(f, "{} {}", self.value, self.unit)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::test_utils::{kilometers, meters, minutes, seconds};

  use approx::{assert_relative_eq, assert_abs_diff_eq};
  use ndarray::array;

  #[test]
  fn test_strip_without_target() {
    let quantity = Quantity::new(12.5, kilometers());
    assert_eq!(strip_units(quantity, None).unwrap(), 12.5);
  }

  #[test]
  fn test_strip_matches_conversion() {
    let km_per_min = CompositeUnit::from(kilometers()) / minutes();
    let m_per_s = CompositeUnit::from(meters()) / seconds();
    for value in [0.0, 1.0, 18.0, -3.25, 1e6] {
      let expected = km_per_min.convert(value, &m_per_s).unwrap();
      let stripped = strip_units(Quantity::new(value, km_per_min.clone()), Some(&m_per_s)).unwrap();
      assert_eq!(stripped, expected);
    }
  }

  #[test]
  fn test_strip_array() {
    let quantity = Quantity::new(array![[1.0, 2.0], [3.0, 4.0]], kilometers());
    let stripped = strip_units(quantity, Some(&meters().into())).unwrap();
    assert_abs_diff_eq!(stripped, array![[1000.0, 2000.0], [3000.0, 4000.0]], epsilon = 1e-9);
  }

  #[test]
  fn test_strip_vec() {
    let quantity = Quantity::new(vec![60.0, 90.0], seconds());
    let stripped = strip_units(quantity, Some(&minutes().into())).unwrap();
    assert_relative_eq!(stripped[0], 1.0);
    assert_relative_eq!(stripped[1], 1.5);
  }

  #[test]
  fn test_strip_incompatible() {
    let quantity = Quantity::new(1.0, seconds());
    let err = strip_units(quantity, Some(&meters().into())).unwrap_err();
    assert_eq!(err.source_unit, "s");
    assert_eq!(err.target_unit, "m");
  }

  #[test]
  fn test_display() {
    assert_eq!(Quantity::new(3.0, meters()).to_string(), "3 m");
    assert_eq!(Quantity::unitless(3.0).to_string(), "3");
  }
}
