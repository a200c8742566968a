//! Parsing of free-form physical unit strings, as found in the
//! headers of scientific data files, together with a few small
//! helpers for unit-tagged and gridded data.
//!
//! The main entry point is [`parse_unit_string`], which rewrites its
//! input against an [`AliasTable`] and evaluates the result to a
//! [`CompositeUnit`].

pub mod aliases;
pub mod array;
pub mod error;
pub mod graphics;
pub mod parsing;
pub mod sanitize;
pub mod unit_string;
pub mod units;
pub mod util;

pub use aliases::{
  AliasTable, ConfigFormatError, LoadAliasesError, default_aliases, merge_default_aliases,
  merge_default_aliases_from_path,
};
pub use array::{InputError, NanMean, nanmean, normalize_to, normalize_to_in_place, permute_dims};
pub use error::Error;
pub use graphics::{PlotDirective, PlotError, PlotOptions, plot_as};
pub use parsing::EvalError;
pub use unit_string::{
  MAX_MICRO_RETRIES, UnitParsingError, UnitStringParser, parse_unit_string, sanitize_raw_unit_strings,
};
pub use units::{CompositeUnit, IncompatibleUnitsError, Quantity, strip_units};
