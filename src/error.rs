use crate::aliases::{ConfigFormatError, LoadAliasesError};
use crate::array::InputError;
use crate::graphics::PlotError;
use crate::parsing::EvalError;
use crate::unit_string::UnitParsingError;
use crate::units::IncompatibleUnitsError;

use thiserror::Error;

/// Any error produced by this crate, for callers which do not care
/// which operation failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error(transparent)]
  ConfigFormat(#[from] ConfigFormatError),
  #[error(transparent)]
  LoadAliases(#[from] LoadAliasesError),
  #[error(transparent)]
  UnitParsing(#[from] UnitParsingError),
  #[error(transparent)]
  IncompatibleUnits(#[from] IncompatibleUnitsError),
  #[error(transparent)]
  Input(#[from] InputError),
  #[error(transparent)]
  Plot(#[from] PlotError),
}

/// Evaluator errors reach callers of [`crate::parse_unit_string`]
/// through [`UnitParsingError::Evaluator`], so convert the same way.
impl From<EvalError> for Error {
  fn from(err: EvalError) -> Self {
    Self::UnitParsing(err.into())
  }
}
