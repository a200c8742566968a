use super::dimension::Dimension;
use super::unit::Unit;
use super::unit_with_power::UnitWithPower;

use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;
use num::One;
use num::pow::Pow;
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A composite unit is a formal product and quotient of named units.
/// This is the value produced by evaluating a unit string.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeUnit {
  // Sorted by unit name. A given unit name appears at most once, and
  // every exponent is nonzero.
  elements: Vec<UnitWithPower>,
}

/// Error produced when converting between two units of different
/// dimension.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Cannot convert from '{source_unit}' ({source_dimension}) to '{target_unit}' ({target_dimension})")]
pub struct IncompatibleUnitsError {
  pub source_unit: String,
  pub source_dimension: Dimension,
  pub target_unit: String,
  pub target_dimension: Dimension,
}

impl CompositeUnit {
  /// Constructs a new composite unit as the product of all of the
  /// inputs. Repeated units (by name) have their exponents summed,
  /// saturating at the bounds of `i64`.
  pub fn new(inputs: impl IntoIterator<Item = UnitWithPower>) -> Self {
    let mut elements: Vec<UnitWithPower> = Vec::new();
    for input in inputs {
      match elements.iter_mut().find(|u| u.unit.name() == input.unit.name()) {
        Some(existing) => existing.exponent = existing.exponent.saturating_add(input.exponent),
        None => elements.push(input),
      }
    }
    Self::from_merged(elements)
  }

  /// As [`CompositeUnit::new`], but `None` if a summed exponent
  /// overflows.
  pub fn checked_new(inputs: impl IntoIterator<Item = UnitWithPower>) -> Option<Self> {
    let mut elements: Vec<UnitWithPower> = Vec::new();
    for input in inputs {
      match elements.iter_mut().find(|u| u.unit.name() == input.unit.name()) {
        Some(existing) => existing.exponent = existing.exponent.checked_add(input.exponent)?,
        None => elements.push(input),
      }
    }
    Some(Self::from_merged(elements))
  }

  fn from_merged(mut elements: Vec<UnitWithPower>) -> Self {
    elements.retain(|u| u.exponent != 0);
    elements.sort_by(|a, b| a.unit.name().cmp(b.unit.name()));
    Self { elements }
  }

  /// The unitless composite unit. This serves as the "one" value for
  /// multiplication and division of composite units.
  pub fn unitless() -> Self {
    Self { elements: Vec::new() }
  }

  pub fn is_unitless(&self) -> bool {
    self.elements.is_empty()
  }

  /// The distinct units in this composite unit, sorted by name.
  pub fn units(&self) -> &[UnitWithPower] {
    &self.elements
  }

  /// The reciprocal of `self`. An exponent of `i64::MIN` saturates.
  pub fn recip(mut self) -> Self {
    for elem in &mut self.elements {
      elem.exponent = elem.exponent.saturating_neg();
    }
    self
  }

  pub fn checked_recip(mut self) -> Option<Self> {
    for elem in &mut self.elements {
      elem.exponent = elem.exponent.checked_neg()?;
    }
    Some(self)
  }

  /// As `*`, but `None` if an exponent overflows.
  pub fn checked_mul(self, rhs: impl Into<CompositeUnit>) -> Option<Self> {
    let mut elements = self.elements;
    elements.extend(rhs.into().elements);
    Self::checked_new(elements)
  }

  /// As `/`, but `None` if an exponent overflows.
  pub fn checked_div(self, rhs: impl Into<CompositeUnit>) -> Option<Self> {
    self.checked_mul(rhs.into().checked_recip()?)
  }

  /// As [`Pow::pow`], but `None` if an exponent overflows.
  pub fn checked_pow(self, rhs: i64) -> Option<Self> {
    let elements = self.elements.into_iter()
      .map(|u| u.checked_pow(rhs))
      .collect::<Option<Vec<_>>>()?;
    Self::checked_new(elements)
  }

  /// The dimension of the composite unit. Powers outside the `i64`
  /// range saturate; see [`CompositeUnit::checked_dimension`].
  pub fn dimension(&self) -> Dimension {
    self.elements.iter()
      .map(UnitWithPower::dimension)
      .fold(Dimension::one(), |acc, dim| acc * dim)
  }

  /// The dimension of the composite unit, or `None` if some power
  /// does not fit in an `i64`.
  pub fn checked_dimension(&self) -> Option<Dimension> {
    self.elements.iter()
      .try_fold(Dimension::one(), |acc, u| acc.checked_mul(&u.checked_dimension()?))
  }

  /// The amount of the base unit (of [`CompositeUnit::dimension`])
  /// equal to one of this unit.
  pub fn amount_of_base(&self) -> f64 {
    self.elements.iter()
      .map(UnitWithPower::amount_of_base)
      .product()
  }

  pub fn to_base(&self, amount: f64) -> f64 {
    amount * self.amount_of_base()
  }

  pub fn from_base(&self, amount: f64) -> f64 {
    amount / self.amount_of_base()
  }

  /// The factor which converts a value in `self` into a value in
  /// `target`. Fails if the two units have different dimensions.
  pub fn conversion_factor(&self, target: &CompositeUnit) -> Result<f64, IncompatibleUnitsError> {
    let source_dimension = self.dimension();
    let target_dimension = target.dimension();
    if source_dimension != target_dimension {
      return Err(IncompatibleUnitsError {
        source_unit: self.to_string(),
        source_dimension,
        target_unit: target.to_string(),
        target_dimension,
      });
    }
    Ok(self.amount_of_base() / target.amount_of_base())
  }

  /// Converts `amount`, measured in `self`, into `target`.
  pub fn convert(&self, amount: f64, target: &CompositeUnit) -> Result<f64, IncompatibleUnitsError> {
    Ok(amount * self.conversion_factor(target)?)
  }
}

impl From<Unit> for CompositeUnit {
  fn from(unit: Unit) -> Self {
    CompositeUnit::new([UnitWithPower { unit, exponent: 1 }])
  }
}

impl From<UnitWithPower> for CompositeUnit {
  fn from(unit: UnitWithPower) -> Self {
    CompositeUnit::new([unit])
  }
}

impl Display for CompositeUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.elements.is_empty() {
      write!(f, "1")
    } else {
      write!(f, "{}", self.elements.iter().join(" "))
    }
  }
}

impl<S> Mul<S> for CompositeUnit
where S: Into<CompositeUnit> {
  type Output = CompositeUnit;

  fn mul(self, rhs: S) -> Self::Output {
    let mut elements = self.elements;
    elements.extend(rhs.into().elements);
    Self::new(elements)
  }
}

impl<S> Div<S> for CompositeUnit
where S: Into<CompositeUnit> {
  type Output = CompositeUnit;

  #[allow(clippy::suspicious_arithmetic_impl)] // Multiply by reciprocal is correct
  fn div(self, rhs: S) -> Self::Output {
    self * rhs.into().recip()
  }
}

impl Pow<i64> for CompositeUnit {
  type Output = CompositeUnit;

  fn pow(self, rhs: i64) -> Self::Output {
    Self::new(self.elements.into_iter().map(|u| u.pow(rhs)))
  }
}

impl One for CompositeUnit {
  fn one() -> Self {
    CompositeUnit::unitless()
  }

  fn is_one(&self) -> bool {
    self.elements.is_empty()
  }
}

impl AbsDiffEq for CompositeUnit {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    f64::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.elements.len() == other.elements.len() &&
      self.elements.iter().zip(&other.elements).all(|(a, b)| {
        a.exponent == b.exponent && a.unit.abs_diff_eq(&b.unit, epsilon)
      })
  }
}

impl RelativeEq for CompositeUnit {
  fn default_max_relative() -> f64 {
    f64::default_max_relative()
  }

  fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
    self.elements.len() == other.elements.len() &&
      self.elements.iter().zip(&other.elements).all(|(a, b)| {
        a.exponent == b.exponent && a.unit.relative_eq(&b.unit, epsilon, max_relative)
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::test_utils::{kilometers, liters, seconds, minutes, meters};
  use crate::units::dimension::BaseDimension;

  use approx::assert_relative_eq;

  #[test]
  fn test_new_composite_unit_sorts_by_name() {
    let unit = CompositeUnit::new([
      UnitWithPower::new(seconds(), -1),
      UnitWithPower::new(kilometers(), 3),
    ]);
    assert_eq!(unit.units(), &[
      UnitWithPower::new(kilometers(), 3),
      UnitWithPower::new(seconds(), -1),
    ]);
  }

  #[test]
  fn test_new_composite_unit_with_repeated_values() {
    let unit = CompositeUnit::new([
      UnitWithPower::new(kilometers(), 2),
      UnitWithPower::new(seconds(), -1),
      UnitWithPower::new(kilometers(), 1),
      UnitWithPower::new(seconds(), 1),
    ]);
    assert_eq!(unit.units(), &[UnitWithPower::new(kilometers(), 3)]);
  }

  #[test]
  fn test_dimension_of_composite_unit() {
    let unit = CompositeUnit::from(kilometers()).pow(3) / seconds();
    assert_eq!(unit.dimension(), BaseDimension::Length.pow(3) / BaseDimension::Time);
    assert_eq!(CompositeUnit::unitless().dimension(), Dimension::one());
  }

  #[test]
  fn test_display() {
    let unit = CompositeUnit::from(meters()) / CompositeUnit::from(seconds()).pow(2);
    assert_eq!(unit.to_string(), "m s^-2");
    assert_eq!(CompositeUnit::unitless().to_string(), "1");
  }

  #[test]
  fn test_conversion_factor() {
    let km_per_min = CompositeUnit::from(kilometers()) / minutes();
    let m_per_s = CompositeUnit::from(meters()) / seconds();
    assert_relative_eq!(km_per_min.conversion_factor(&m_per_s).unwrap(), 1000.0 / 60.0);
    assert_relative_eq!(km_per_min.convert(18.0, &m_per_s).unwrap(), 300.0);
  }

  #[test]
  fn test_conversion_factor_incompatible() {
    let err = CompositeUnit::from(meters()).conversion_factor(&CompositeUnit::from(seconds())).unwrap_err();
    assert_eq!(err.source_unit, "m");
    assert_eq!(err.target_dimension, Dimension::singleton(BaseDimension::Time));
  }

  #[test]
  fn test_checked_operations() {
    let speed = CompositeUnit::from(meters()) / seconds();
    let squared = speed.clone().checked_mul(speed.clone()).unwrap();
    assert_eq!(squared, speed.clone().pow(2));
    assert_eq!(squared.clone().checked_div(speed.clone()), Some(speed.clone()));
    assert_eq!(speed.clone().checked_pow(-3), Some(speed.clone().pow(-3)));

    let huge = CompositeUnit::from(meters()).pow(i64::MAX);
    assert_eq!(huge.clone().checked_mul(meters()), None);
    assert_eq!(huge.clone().checked_pow(2), None);
    assert_eq!(huge.clone().checked_div(meters()).unwrap().units()[0].exponent, i64::MAX - 1);
    let tiny = CompositeUnit::from(UnitWithPower::new(meters(), i64::MIN));
    assert_eq!(tiny.checked_recip(), None);
  }

  #[test]
  fn test_saturating_operators() {
    let huge = CompositeUnit::from(meters()).pow(i64::MAX);
    assert_eq!((huge.clone() * meters()).units()[0].exponent, i64::MAX);
    assert_eq!(huge.pow(-2).units()[0].exponent, i64::MIN);
  }

  #[test]
  fn test_checked_dimension() {
    let volume = CompositeUnit::from(liters()) / seconds();
    assert_eq!(volume.checked_dimension(), Some(volume.dimension()));
    let huge = CompositeUnit::from(liters()).pow(i64::MAX / 2);
    assert_eq!(huge.checked_dimension(), None);
    let mixed = CompositeUnit::from(meters()).pow(i64::MAX) * kilometers();
    assert_eq!(mixed.units().len(), 2);
    assert_eq!(mixed.checked_dimension(), None);
  }

  #[test]
  fn test_recip_and_one() {
    let unit = CompositeUnit::from(meters()) / seconds();
    let product = unit.clone() * unit.recip();
    assert!(product.is_one());
  }
}
