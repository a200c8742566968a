//! Two-dimensional line plots of unit-tagged data.

use crate::units::composite::{CompositeUnit, IncompatibleUnitsError};
use crate::units::quantity::Quantity;
use crate::util::point::{Point2D, finite_bounds};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::ops::Range;

/// Target units and labels for [`plot_as`]. `unit` is used for the y
/// axis when `y_unit` is not given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotOptions {
  pub unit: Option<CompositeUnit>,
  pub x_unit: Option<CompositeUnit>,
  pub y_unit: Option<CompositeUnit>,
  pub x_label: String,
  pub y_label: String,
}

/// A plot ready to hand to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotDirective {
  pub x_label: String,
  pub y_label: String,
  pub x_bounds: Option<Range<f64>>,
  pub y_bounds: Option<Range<f64>>,
  pub points: Vec<Point2D>,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlotError {
  #[error("Cannot plot x axis: {0}")]
  XUnits(#[source] IncompatibleUnitsError),
  #[error("Cannot plot y axis: {0}")]
  YUnits(#[source] IncompatibleUnitsError),
  #[error("Data set length mismatch (x has {x_len} values, y has {y_len})")]
  LengthMismatch { x_len: usize, y_len: usize },
}

impl PlotOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_unit(mut self, unit: impl Into<CompositeUnit>) -> Self {
    self.unit = Some(unit.into());
    self
  }

  pub fn with_x_unit(mut self, unit: impl Into<CompositeUnit>) -> Self {
    self.x_unit = Some(unit.into());
    self
  }

  pub fn with_y_unit(mut self, unit: impl Into<CompositeUnit>) -> Self {
    self.y_unit = Some(unit.into());
    self
  }

  pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
    self.x_label = label.into();
    self
  }

  pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
    self.y_label = label.into();
    self
  }

  fn y_target(&self) -> Option<&CompositeUnit> {
    self.y_unit.as_ref().or(self.unit.as_ref())
  }
}

impl PlotDirective {
  pub fn from_points(x_label: String, y_label: String, points: Vec<Point2D>) -> PlotDirective {
    let x_bounds = finite_bounds(points.iter().map(|p| p.x));
    let y_bounds = finite_bounds(points.iter().map(|p| p.y));
    PlotDirective { x_label, y_label, x_bounds, y_bounds, points }
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}

/// Converts both data sets into their target units and pairs them up
/// as points. Each axis label reads `"<label> [<unit>]"`.
pub fn plot_as(
  x: Quantity<Vec<f64>>,
  y: Quantity<Vec<f64>>,
  options: &PlotOptions,
) -> Result<PlotDirective, PlotError> {
  if x.value.len() != y.value.len() {
    return Err(PlotError::LengthMismatch { x_len: x.value.len(), y_len: y.value.len() });
  }
  let x = convert_axis(x, options.x_unit.as_ref()).map_err(PlotError::XUnits)?;
  let y = convert_axis(y, options.y_target()).map_err(PlotError::YUnits)?;

  let x_label = axis_label(&options.x_label, &x.unit);
  let y_label = axis_label(&options.y_label, &y.unit);
  let points = x.value.into_iter().zip(y.value).map(Point2D::from).collect();
  Ok(PlotDirective::from_points(x_label, y_label, points))
}

fn convert_axis(
  data: Quantity<Vec<f64>>,
  target: Option<&CompositeUnit>,
) -> Result<Quantity<Vec<f64>>, IncompatibleUnitsError> {
  match target {
    None => Ok(data),
    Some(target) => data.try_convert(target.clone()),
  }
}

fn axis_label(label: &str, unit: &CompositeUnit) -> String {
  if unit.is_unitless() {
    label.to_owned()
  } else if label.is_empty() {
    format!("[{unit}]")
  } else {
    format!("{label} [{unit}]")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::test_utils::{kilometers, meters, minutes, seconds};

  use approx::assert_relative_eq;

  #[test]
  fn test_plot_with_conversion() {
    let x = Quantity::new(vec![60.0, 120.0, 180.0], seconds());
    let y = Quantity::new(vec![1.0, 2.5, 4.0], kilometers());
    let options = PlotOptions::new()
      .with_x_unit(minutes())
      .with_y_unit(meters())
      .with_x_label("Time")
      .with_y_label("Distance");
    let plot = plot_as(x, y, &options).unwrap();
    assert_eq!(plot.x_label, "Time [min]");
    assert_eq!(plot.y_label, "Distance [m]");
    assert_relative_eq!(plot.points[1].x, 2.0);
    assert_relative_eq!(plot.points[1].y, 2500.0);
    let x_bounds = plot.x_bounds.unwrap();
    assert_relative_eq!(x_bounds.start, 1.0);
    assert_relative_eq!(x_bounds.end, 3.0);
  }

  #[test]
  fn test_unit_is_y_fallback() {
    let x = Quantity::new(vec![1.0], seconds());
    let y = Quantity::new(vec![2.0], kilometers());
    let options = PlotOptions::new().with_unit(meters());
    let plot = plot_as(x, y, &options).unwrap();
    assert_eq!(plot.x_label, "[s]");
    assert_eq!(plot.y_label, "[m]");
    assert_relative_eq!(plot.points[0].y, 2000.0);

    // An explicit y unit wins.
    let x = Quantity::new(vec![1.0], seconds());
    let y = Quantity::new(vec![2.0], meters());
    let options = PlotOptions::new().with_unit(meters()).with_y_unit(kilometers());
    let plot = plot_as(x, y, &options).unwrap();
    assert_relative_eq!(plot.points[0].y, 0.002);
  }

  #[test]
  fn test_unitless_axis_label() {
    let x = Quantity::unitless(vec![0.0, 1.0]);
    let y = Quantity::unitless(vec![f64::NAN, 1.0]);
    let options = PlotOptions::new().with_x_label("index");
    let plot = plot_as(x, y, &options).unwrap();
    assert_eq!(plot.x_label, "index");
    assert_eq!(plot.y_label, "");
    assert_eq!(plot.y_bounds, Some(1.0..1.0));
  }

  #[test]
  fn test_plot_errors() {
    let x = Quantity::new(vec![1.0, 2.0], seconds());
    let y = Quantity::new(vec![1.0], meters());
    assert_eq!(
      plot_as(x, y, &PlotOptions::new()).unwrap_err(),
      PlotError::LengthMismatch { x_len: 2, y_len: 1 },
    );

    let x = Quantity::new(vec![1.0], seconds());
    let y = Quantity::new(vec![1.0], meters());
    let err = plot_as(x, y, &PlotOptions::new().with_unit(seconds())).unwrap_err();
    assert!(matches!(err, PlotError::YUnits(_)));
  }

  #[test]
  fn test_to_json() {
    let plot = PlotDirective::from_points(
      String::from("x"),
      String::from("y [m]"),
      vec![Point2D::new(1.0, 2.0)],
    );
    let json: serde_json::Value = serde_json::from_str(&plot.to_json().unwrap()).unwrap();
    assert_eq!(json["yLabel"], "y [m]");
    assert_eq!(json["points"][0]["y"], 2.0);
    assert_eq!(json["xBounds"]["start"], 1.0);
  }
}
