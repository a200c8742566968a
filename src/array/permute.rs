use super::error::InputError;

use itertools::Itertools;
use ndarray::{ArrayBase, ArrayD, Data, Dimension};

/// Reorders the axes of `array`, whose axes are named (in order) by
/// `current`, so that they follow the order given by `target`. The
/// result is a fresh array in standard layout.
pub fn permute_dims<A, S, D>(
  array: &ArrayBase<S, D>,
  current: &[&str],
  target: &[&str],
) -> Result<ArrayD<A>, InputError>
where A: Clone,
      S: Data<Elem = A>,
      D: Dimension {
  if current.len() != array.ndim() {
    return Err(InputError::DimensionMismatch { expected: array.ndim(), actual: current.len() });
  }
  if target.len() != current.len() {
    return Err(InputError::DimensionMismatch { expected: current.len(), actual: target.len() });
  }
  if let Some(name) = current.iter().duplicates().chain(target.iter().duplicates()).next() {
    return Err(InputError::DuplicateDimension(name.to_string()));
  }
  let axes = target.iter()
    .map(|name| {
      current.iter()
        .position(|c| c == name)
        .ok_or_else(|| InputError::UnknownDimension(name.to_string()))
    })
    .collect::<Result<Vec<_>, _>>()?;
  let permuted = array.view().into_dyn().permuted_axes(axes);
  Ok(permuted.as_standard_layout().into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  use ndarray::{Array, Axis};

  #[test]
  fn test_permute_three_dims() {
    let data = Array::from_shape_fn((2, 3, 4), |(t, y, x)| 100 * t + 10 * y + x);
    let permuted = permute_dims(&data, &["time", "lat", "lon"], &["lon", "time", "lat"]).unwrap();
    assert_eq!(permuted.shape(), &[4, 2, 3]);
    assert_eq!(permuted[[3, 1, 2]], 123);
    assert!(permuted.is_standard_layout());
  }

  #[test]
  fn test_identity_permutation() {
    let data = Array::from_shape_fn((2, 2), |(i, j)| (i * 2 + j) as f64);
    let permuted = permute_dims(&data, &["y", "x"], &["y", "x"]).unwrap();
    assert_eq!(permuted, data.into_dyn());
  }

  #[test]
  fn test_permute_errors() {
    let data = Array::<f64, _>::zeros((2, 3));
    assert_eq!(
      permute_dims(&data, &["x"], &["x"]).unwrap_err(),
      InputError::DimensionMismatch { expected: 2, actual: 1 },
    );
    assert_eq!(
      permute_dims(&data, &["x", "y"], &["y"]).unwrap_err(),
      InputError::DimensionMismatch { expected: 2, actual: 1 },
    );
    assert_eq!(
      permute_dims(&data, &["x", "y"], &["y", "z"]).unwrap_err(),
      InputError::UnknownDimension(String::from("z")),
    );
    assert_eq!(
      permute_dims(&data, &["x", "y"], &["y", "y"]).unwrap_err(),
      InputError::DuplicateDimension(String::from("y")),
    );
    assert_eq!(
      permute_dims(&data, &["x", "x"], &["x", "y"]).unwrap_err(),
      InputError::DuplicateDimension(String::from("x")),
    );
  }

  #[test]
  fn test_permute_view() {
    let data = Array::from_shape_fn((3, 2), |(i, j)| i * 10 + j);
    let column_first = permute_dims(&data.view(), &["row", "col"], &["col", "row"]).unwrap();
    assert_eq!(column_first.index_axis(Axis(0), 1).iter().copied().collect::<Vec<_>>(), vec![1, 11, 21]);
  }
}
