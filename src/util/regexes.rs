//! Module containing generally useful regular expressions.

use regex::Regex;
use once_cell::sync::Lazy;

pub static WHITESPACE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A unit symbol directly followed by an (optionally signed) integer
/// power, such as `m2` or `s-1`.
pub static TRAILING_EXPONENT_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\p{Alphabetic})([+-]?[0-9]+)").unwrap());

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_trailing_exponent_captures() {
    let caps = TRAILING_EXPONENT_RE.captures("cm-3").unwrap();
    assert_eq!(&caps[1], "m");
    assert_eq!(&caps[2], "-3");
    assert!(TRAILING_EXPONENT_RE.find("m^2").is_none());
    assert!(TRAILING_EXPONENT_RE.find("m 2").is_none());
  }
}
