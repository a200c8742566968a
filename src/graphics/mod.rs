//! Support for plotting unit-tagged data.
//!
//! Nothing here draws anything. [`plot_as`] produces a
//! [`PlotDirective`] which serializes to JSON for an external
//! renderer.

pub mod plot;

pub use plot::{PlotDirective, PlotError, PlotOptions, plot_as};
