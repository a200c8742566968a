use super::unit::Unit;

/// The micro sign (U+00B5), the spelling of the micro prefix produced
/// when an ASCII `u` is corrected.
pub const MICRO_SIGN: char = '\u{B5}';

/// The Greek small letter mu (U+03BC), which some sources use in place
/// of [`MICRO_SIGN`].
pub const GREEK_MU: char = '\u{3BC}';

/// A magnitude prefix (such as "k" for 10^3) which can be attached to
/// the front of a unit name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricPrefix {
  pub prefix_name: String,
  pub exponent: i32,
}

impl MetricPrefix {
  pub fn new(prefix_name: impl Into<String>, exponent: i32) -> MetricPrefix {
    MetricPrefix {
      prefix_name: prefix_name.into(),
      exponent,
    }
  }

  pub fn apply(&self, unit: Unit) -> Unit {
    unit.augment(
      |name| format!("{}{}", self.prefix_name, name),
      |amount| amount * 10f64.powi(self.exponent),
    )
  }

  /// The SI prefixes. Micro is accepted as either the micro sign or
  /// the Greek mu, but NOT as the ASCII "u"; correcting "u" is the job
  /// of the unit-string parser's retry policy.
  pub fn si_prefixes() -> Vec<MetricPrefix> {
    vec![
      MetricPrefix::new("Q", 30),
      MetricPrefix::new("R", 27),
      MetricPrefix::new("Y", 24),
      MetricPrefix::new("Z", 21),
      MetricPrefix::new("E", 18),
      MetricPrefix::new("P", 15),
      MetricPrefix::new("T", 12),
      MetricPrefix::new("G", 9),
      MetricPrefix::new("M", 6),
      MetricPrefix::new("k", 3),
      MetricPrefix::new("h", 2),
      MetricPrefix::new("da", 1),
      MetricPrefix::new("d", -1),
      MetricPrefix::new("c", -2),
      MetricPrefix::new("m", -3),
      MetricPrefix::new(MICRO_SIGN, -6),
      MetricPrefix::new(GREEK_MU, -6),
      MetricPrefix::new("n", -9),
      MetricPrefix::new("p", -12),
      MetricPrefix::new("f", -15),
      MetricPrefix::new("a", -18),
      MetricPrefix::new("z", -21),
      MetricPrefix::new("y", -24),
      MetricPrefix::new("r", -27),
      MetricPrefix::new("q", -30),
    ]
  }
}
