use crate::util::zip_with;

use num::One;
use num::pow::Pow;

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display};

/// A dimension is a formal product and quotient of zero or more
/// [`BaseDimension`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
  dims: [i64; NDIMS],
}

/// The seven SI base dimensions. Every unit represents a formal
/// product or quotient of zero or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
  Length,
  Time,
  Mass,
  Temperature,
  Current,
  LuminousIntensity,
  AmountOfSubstance,
}

pub const NDIMS: usize = 7;

impl Dimension {
  pub fn singleton(base: BaseDimension) -> Self {
    let mut dims = [0; NDIMS];
    dims[base.dimension_index()] = 1;
    Self { dims }
  }

  pub fn get(&self, base: BaseDimension) -> i64 {
    self.dims[base.dimension_index()]
  }

  /// True if every base dimension appears with power zero. Ratios
  /// such as "ppm" or angles such as "rad" are dimensionless.
  pub fn is_dimensionless(&self) -> bool {
    self.is_one()
  }

  /// The base dimensions with nonzero power, in the canonical order
  /// of [`BaseDimension::ALL`].
  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i64)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.dims.iter().copied())
      .filter(|(_, x)| *x != 0)
  }

  /// As [`Pow::pow`], but `None` if any power leaves the `i64` range.
  pub fn checked_pow(&self, power: i64) -> Option<Dimension> {
    let mut dims = self.dims;
    for x in &mut dims {
      *x = x.checked_mul(power)?;
    }
    Some(Dimension { dims })
  }

  /// As `*`, but `None` if any power leaves the `i64` range.
  pub fn checked_mul(&self, rhs: &Dimension) -> Option<Dimension> {
    let mut dims = self.dims;
    for (x, y) in dims.iter_mut().zip(rhs.dims) {
      *x = x.checked_add(y)?;
    }
    Some(Dimension { dims })
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Mass,
    BaseDimension::Temperature,
    BaseDimension::Current,
    BaseDimension::LuminousIntensity,
    BaseDimension::AmountOfSubstance,
  ];

  fn dimension_index(self) -> usize {
    match self {
      BaseDimension::Length => 0,
      BaseDimension::Time => 1,
      BaseDimension::Mass => 2,
      BaseDimension::Temperature => 3,
      BaseDimension::Current => 4,
      BaseDimension::LuminousIntensity => 5,
      BaseDimension::AmountOfSubstance => 6,
    }
  }
}

impl From<BaseDimension> for Dimension {
  fn from(base: BaseDimension) -> Self {
    Dimension::singleton(base)
  }
}

impl Pow<i64> for &Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension {
      dims: self.dims.map(|x| x.saturating_mul(power)),
    }
  }
}

impl Pow<i64> for Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    (&self).pow(power)
  }
}

impl Pow<i64> for BaseDimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension::singleton(self).pow(power)
  }
}

impl<D: Into<Dimension>> Mul<D> for Dimension {
  type Output = Self;

  fn mul(self, rhs: D) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.into().dims, i64::saturating_add),
    }
  }
}

impl<D: Into<Dimension>> Div<D> for Dimension {
  type Output = Self;

  fn div(self, rhs: D) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.into().dims, i64::saturating_sub),
    }
  }
}

impl<D: Into<Dimension>> Mul<D> for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: D) -> Dimension {
    Dimension::singleton(self) * rhs
  }
}

impl<D: Into<Dimension>> Div<D> for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: D) -> Dimension {
    Dimension::singleton(self) / rhs
  }
}

impl One for Dimension {
  fn one() -> Self {
    Self { dims: [0; NDIMS] }
  }

  fn is_one(&self) -> bool {
    self.dims.iter().all(|x| *x == 0)
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::Current => write!(f, "current"),
      BaseDimension::LuminousIntensity => write!(f, "intensity"),
      BaseDimension::AmountOfSubstance => write!(f, "amount"),
    }
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let (numerator, denominator): (Vec<_>, Vec<_>) = self.components()
      .partition(|(_, power)| *power > 0);
    let render = |(dim, power): (BaseDimension, i64)| {
      let power = power.abs();
      if power == 1 { dim.to_string() } else { format!("{dim}^{power}") }
    };
    let numerator: Vec<String> = numerator.into_iter().map(render).collect();
    let denominator: Vec<String> = denominator.into_iter().map(render).collect();
    if numerator.is_empty() {
      write!(f, "1")?;
    } else {
      write!(f, "{}", numerator.join(" "))?;
    }
    if !denominator.is_empty() {
      write!(f, " / {}", denominator.join(" "))?;
    }
    Ok(())
  }
}
