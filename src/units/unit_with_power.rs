use super::unit::Unit;
use super::composite::CompositeUnit;
use super::dimension::Dimension;

use num::pow::Pow;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A named unit raised to an integer power.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitWithPower {
  pub unit: Unit,
  pub exponent: i64,
}

impl UnitWithPower {
  pub fn new(unit: Unit, exponent: i64) -> Self {
    Self { unit, exponent }
  }

  pub fn dimension(&self) -> Dimension {
    self.unit.dimension().pow(self.exponent)
  }

  /// As [`UnitWithPower::dimension`], but `None` if the result does
  /// not fit.
  pub fn checked_dimension(&self) -> Option<Dimension> {
    self.unit.dimension().checked_pow(self.exponent)
  }

  /// As [`Pow::pow`], but `None` if the exponent overflows.
  pub fn checked_pow(self, rhs: i64) -> Option<Self> {
    let exponent = self.exponent.checked_mul(rhs)?;
    Some(UnitWithPower { unit: self.unit, exponent })
  }

  /// The amount of the base unit equal to one of this unit.
  pub fn amount_of_base(&self) -> f64 {
    // Saturate exponents outside the i32 range.
    let exponent = i32::try_from(self.exponent)
      .unwrap_or(if self.exponent < 0 { i32::MIN } else { i32::MAX });
    self.unit.amount_of_base().powi(exponent)
  }

  pub fn to_base(&self, amount: f64) -> f64 {
    amount * self.amount_of_base()
  }

  pub fn from_base(&self, amount: f64) -> f64 {
    amount / self.amount_of_base()
  }
}

impl Display for UnitWithPower {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.exponent == 1 {
      write!(f, "{}", self.unit)
    } else {
      write!(f, "{}^{}", self.unit, self.exponent)
    }
  }
}

impl<S> Mul<S> for UnitWithPower
where S: Into<CompositeUnit> {
  type Output = CompositeUnit;

  fn mul(self, rhs: S) -> Self::Output {
    CompositeUnit::from(self) * rhs
  }
}

impl<S> Div<S> for UnitWithPower
where S: Into<CompositeUnit> {
  type Output = CompositeUnit;

  fn div(self, rhs: S) -> Self::Output {
    CompositeUnit::from(self) / rhs
  }
}

impl Pow<i64> for UnitWithPower {
  type Output = UnitWithPower;

  /// Saturates at the bounds of `i64`.
  fn pow(self, rhs: i64) -> Self::Output {
    UnitWithPower { unit: self.unit, exponent: self.exponent.saturating_mul(rhs) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::BaseDimension;
  use crate::units::test_utils::{kilometers, liters, seconds};

  use approx::assert_relative_eq;
  use num::One;

  #[test]
  fn test_unit_with_power_dimension() {
    let unit = UnitWithPower::new(kilometers(), 3);
    assert_eq!(unit.dimension(), BaseDimension::Length.pow(3));
    let unit = UnitWithPower::new(seconds(), -2);
    assert_eq!(unit.dimension(), BaseDimension::Time.pow(-2));
    let unit = UnitWithPower::new(kilometers(), 0);
    assert_eq!(unit.dimension(), Dimension::one());
  }

  #[test]
  fn test_unit_with_power_overflow() {
    let unit = UnitWithPower::new(kilometers(), 1 << 40);
    assert_eq!(unit.clone().checked_pow(-4), Some(UnitWithPower::new(kilometers(), -(1 << 42))));
    assert_eq!(unit.clone().checked_pow(1 << 40), None);
    assert_eq!(unit.pow(1 << 40).exponent, i64::MAX);

    let unit = UnitWithPower::new(kilometers(), i64::MAX);
    assert_eq!(unit.checked_dimension(), Some(BaseDimension::Length.pow(i64::MAX)));
    let unit = UnitWithPower::new(liters(), i64::MAX);
    assert_eq!(unit.checked_dimension(), None);
  }

  #[test]
  fn test_unit_with_power_to_base() {
    let unit = UnitWithPower::new(kilometers(), 3);
    assert_relative_eq!(unit.to_base(2.0), 2_000_000_000.0);
    let unit = UnitWithPower::new(kilometers(), -1);
    assert_relative_eq!(unit.to_base(2_000.0), 2.0);
    let unit = UnitWithPower::new(kilometers(), 0);
    assert_eq!(unit.to_base(199.0), 199.0);
  }

  #[test]
  fn test_unit_with_power_from_base() {
    let unit = UnitWithPower::new(kilometers(), 2);
    assert_relative_eq!(unit.from_base(3_000_000.0), 3.0);
  }
}
