use thiserror::Error;

/// Invalid arguments to one of the array helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
  #[error("Axis {axis} is out of range for an array with {ndim} dimension(s)")]
  AxisOutOfRange { axis: usize, ndim: usize },
  #[error("Expected {expected} dimension names, got {actual}")]
  DimensionMismatch { expected: usize, actual: usize },
  #[error("Unknown dimension '{0}'")]
  UnknownDimension(String),
  #[error("Dimension '{0}' appears more than once")]
  DuplicateDimension(String),
  #[error("Invalid range ({low}, {high}): the lower bound must be below the upper bound")]
  InvalidRange { low: f64, high: f64 },
}
