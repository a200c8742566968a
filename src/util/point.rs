//! Points in 2D space, as handed to a plot renderer.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::ops::Range;

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point2D {
  pub x: f64,
  pub y: f64,
}

impl Point2D {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// True if neither coordinate is NaN or infinite.
  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }
}

/// The smallest range containing every finite value in `values`, or
/// `None` if there are no finite values.
pub fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
  values.into_iter()
    .filter(|v| v.is_finite())
    .fold(None, |acc: Option<Range<f64>>, v| match acc {
      None => Some(v..v),
      Some(r) => Some(r.start.min(v)..r.end.max(v)),
    })
}

impl From<(f64, f64)> for Point2D {
  fn from((x, y): (f64, f64)) -> Self {
    Self::new(x, y)
  }
}

impl Display for Point2D {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_finite_bounds() {
    assert_eq!(finite_bounds([3.0, f64::NAN, -1.0, 2.0]), Some(-1.0..3.0));
    assert_eq!(finite_bounds([f64::NAN, f64::INFINITY]), None);
    assert_eq!(finite_bounds(Vec::new()), None);
  }

  #[test]
  fn test_is_finite() {
    assert!(Point2D::new(1.0, 2.0).is_finite());
    assert!(!Point2D::from((1.0, f64::NAN)).is_finite());
  }
}
