//! Facilities for resolving unit symbols to units.

mod base;
mod default_parser;
mod prefix;
pub(crate) mod table;

pub use base::{UnitParser, UnitParserError};
pub use default_parser::{AVOGADRO, default_parser, default_units_table, shared_default_parser};
pub use prefix::PrefixParser;
pub use table::TableBasedParser;
