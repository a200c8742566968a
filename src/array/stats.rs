//! NaN-aware reductions.

use super::error::InputError;

use ndarray::{arr0, ArrayBase, ArrayD, Axis, Data, Dimension};

/// Result of [`nanmean`]. With no axis, both arrays are
/// zero-dimensional.
#[derive(Debug, Clone, PartialEq)]
pub struct NanMean {
  pub mean: ArrayD<f64>,
  /// Number of non-NaN values behind each mean. Only present if
  /// requested.
  pub counts: Option<ArrayD<usize>>,
}

impl NanMean {
  /// The mean as a scalar, if this is a reduction over all elements.
  pub fn scalar(&self) -> Option<f64> {
    (self.mean.ndim() == 0).then(|| self.mean.iter().next().copied()).flatten()
  }
}

/// Mean of the non-NaN values of `array`, either over one axis or
/// (if `axis` is `None`) over every element. A slice containing only
/// NaNs has a mean of NaN.
pub fn nanmean<S, D>(
  array: &ArrayBase<S, D>,
  axis: Option<usize>,
  count_nans: bool,
) -> Result<NanMean, InputError>
where S: Data<Elem = f64>,
      D: Dimension {
  let view = array.view().into_dyn();
  let (mean, counts) = match axis {
    None => {
      let (sum, count) = nan_sum_count(view.iter().copied());
      (arr0(sum / count as f64).into_dyn(), arr0(count).into_dyn())
    }
    Some(axis) => {
      if axis >= view.ndim() {
        return Err(InputError::AxisOutOfRange { axis, ndim: view.ndim() });
      }
      let sums = view.map_axis(Axis(axis), |lane| nan_sum_count(lane.iter().copied()));
      let mean = sums.mapv(|(sum, count)| sum / count as f64);
      let counts = sums.mapv(|(_, count)| count);
      (mean, counts)
    }
  };
  Ok(NanMean { mean, counts: count_nans.then_some(counts) })
}

fn nan_sum_count(values: impl Iterator<Item = f64>) -> (f64, usize) {
  values
    .filter(|v| !v.is_nan())
    .fold((0.0, 0), |(sum, count), v| (sum + v, count + 1))
}
