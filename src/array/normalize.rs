use super::error::InputError;

use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

/// The range used when a caller has no preference.
pub const UNIT_RANGE: (f64, f64) = (0.0, 1.0);

/// Linearly maps the non-NaN values of `array` so that its minimum
/// lands on `range.0` and its maximum on `range.1`, returning a new
/// array. NaNs stay NaN.
pub fn normalize_to<S, D>(array: &ArrayBase<S, D>, range: (f64, f64)) -> Result<Array<f64, D>, InputError>
where S: Data<Elem = f64>,
      D: Dimension {
  let mut output = array.to_owned();
  normalize_to_in_place(&mut output, range)?;
  Ok(output)
}

/// As [`normalize_to`], but modifies `array`.
///
/// An array whose non-NaN values are all equal has no scale to map,
/// and becomes all NaN.
pub fn normalize_to_in_place<S, D>(array: &mut ArrayBase<S, D>, range: (f64, f64)) -> Result<(), InputError>
where S: DataMut<Elem = f64>,
      D: Dimension {
  let (low, high) = range;
  if low.is_nan() || high.is_nan() || low >= high {
    return Err(InputError::InvalidRange { low, high });
  }
  let Some((min, max)) = nan_min_max(array.iter().copied()) else {
    // Empty or all NaN.
    return Ok(());
  };
  let scale = (high - low) / (max - min);
  array.mapv_inplace(|v| low + (v - min) * scale);
  Ok(())
}

fn nan_min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
  values
    .filter(|v| !v.is_nan())
    .fold(None, |acc, v| match acc {
      None => Some((v, v)),
      Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
    })
}
