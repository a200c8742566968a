use super::table::TableBasedParser;
use super::prefix::PrefixParser;
use crate::units::dimension::{Dimension, BaseDimension};
use crate::units::unit::Unit;

use num::One;
use num::pow::Pow;
use once_cell::sync::Lazy;

use std::f64::consts::PI;

/// Molecules per mole.
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Molecules per square meter in one Dobson unit.
const DOBSON_MOLECULES_PER_M2: f64 = 2.686_7e20;

static DEFAULT_PARSER: Lazy<PrefixParser<TableBasedParser>> = Lazy::new(default_parser);

/// The process-wide default unit parser, built on first use.
pub fn shared_default_parser() -> &'static PrefixParser<TableBasedParser> {
  &DEFAULT_PARSER
}

pub fn default_parser() -> PrefixParser<TableBasedParser> {
  PrefixParser::new_si(default_units_table())
}

pub fn default_units_table() -> TableBasedParser {
  use BaseDimension::*;
  // The base unit of mass is the gram, so SI-derived units that
  // involve the kilogram carry an extra factor of 1000.
  let newton = 1_000.0;
  let pascal = 1_000.0;
  let units = vec![
    // Length units
    Unit::new("m", Length, 1.0),
    Unit::new("in", Length, 0.0254),
    Unit::new("ft", Length, 0.3048),
    Unit::new("yd", Length, 0.9144),
    Unit::new("mi", Length, 1_609.344),
    Unit::new("nmi", Length, 1_852.0), // Nautical mile
    Unit::new("au", Length, 149_597_870_700.0),
    Unit::new("Ang", Length, 1e-10), // Angstrom
    Unit::new("\u{C5}", Length, 1e-10), // Angstrom (symbol)
    // Time units
    Unit::new("s", Time, 1.0),
    Unit::new("min", Time, 60.0),
    Unit::new("h", Time, 3_600.0),
    Unit::new("hr", Time, 3_600.0),
    Unit::new("day", Time, 86_400.0),
    Unit::new("wk", Time, 604_800.0),
    Unit::new("yr", Time, 31_557_600.0), // Julian year
    // Mass units
    Unit::new("g", Mass, 1.0),
    Unit::new("t", Mass, 1_000_000.0), // Metric ton (eqv. megagram)
    Unit::new("lb", Mass, 453.592_37),
    Unit::new("Da", Mass, 1.660_539_066_60e-24), // Dalton
    // Temperature units (intervals only; no offsets)
    Unit::new("K", Temperature, 1.0),
    Unit::new("degC", Temperature, 1.0),
    Unit::new("degF", Temperature, 5.0 / 9.0),
    // Electrical current units
    Unit::new("A", Current, 1.0),
    // Luminous intensity units
    Unit::new("cd", LuminousIntensity, 1.0),
    // Amount of substance units
    Unit::new("mol", AmountOfSubstance, 1.0),
    Unit::new("molec", AmountOfSubstance, 1.0 / AVOGADRO),
    // Dimensionless units
    Unit::new("rad", Dimension::one(), 1.0),
    Unit::new("deg", Dimension::one(), PI / 180.0),
    Unit::new("sr", Dimension::one(), 1.0),
    Unit::new("percent", Dimension::one(), 1e-2),
    Unit::new("ppm", Dimension::one(), 1e-6),
    Unit::new("ppb", Dimension::one(), 1e-9),
    Unit::new("ppt", Dimension::one(), 1e-12),
    Unit::new("ppmv", Dimension::one(), 1e-6),
    Unit::new("ppbv", Dimension::one(), 1e-9),
    Unit::new("pptv", Dimension::one(), 1e-12),
    // Units with nontrivial dimension
    Unit::new("L", Length.pow(3), 1e-3), // Liter
    Unit::new("l", Length.pow(3), 1e-3), // Liter (synonym)
    Unit::new("Hz", Time.pow(-1), 1.0),
    Unit::new("N", Mass * Length / Time.pow(2), newton),
    Unit::new("Pa", Mass / (Length * Time.pow(2)), pascal),
    Unit::new("bar", Mass / (Length * Time.pow(2)), 1e5 * pascal),
    Unit::new("atm", Mass / (Length * Time.pow(2)), 101_325.0 * pascal),
    Unit::new("Torr", Mass / (Length * Time.pow(2)), 101_325.0 / 760.0 * pascal),
    Unit::new("J", Mass * Length.pow(2) / Time.pow(2), newton),
    Unit::new("cal", Mass * Length.pow(2) / Time.pow(2), 4.184 * newton), // Thermochemical calorie
    Unit::new("eV", Mass * Length.pow(2) / Time.pow(2), 1.602_176_634e-19 * newton),
    Unit::new("W", Mass * Length.pow(2) / Time.pow(3), newton),
    Unit::new("V", Mass * Length.pow(2) / (Time.pow(3) * Current), newton),
    Unit::new("C", Current * Time, 1.0), // Coulomb
    Unit::new("DU", AmountOfSubstance / Length.pow(2), DOBSON_MOLECULES_PER_M2 / AVOGADRO), // Dobson unit
  ];
  units.into_iter().collect()
}
