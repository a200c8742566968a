//! Small numeric helpers for gridded data: NaN-aware means, range
//! normalization, and reordering axes by name.

mod error;
mod normalize;
mod permute;
mod stats;

pub use error::InputError;
pub use normalize::{UNIT_RANGE, normalize_to, normalize_to_in_place};
pub use permute::permute_dims;
pub use stats::{NanMean, nanmean};
