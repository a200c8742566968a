//! Rewriting raw unit strings into canonical unit-expression syntax.
//!
//! Sanitization runs three passes in a fixed order:
//!
//! 1. Alias substitution, one pass per [`AliasTable`] entry.
//! 2. Implicit multiplication: `m s-1` becomes `m * s-1`.
//! 3. Explicit exponents: `m * s-1` becomes `m * s^-1`.
//!
//! The result is meant to be parseable by [`crate::parsing`], but no
//! check is made here that every symbol is a known unit.

use crate::aliases::{AliasEntry, AliasTable};
use crate::util::{char_at, char_before, longest_first};
use crate::util::regexes::{WHITESPACE_RE, TRAILING_EXPONENT_RE};

/// Runs all three sanitization passes. `prefixes` is the metric
/// prefix set permitted in front of an alias.
pub fn sanitize<S: AsRef<str>>(raw: &str, aliases: &AliasTable, prefixes: &[S]) -> String {
  let mut output = raw.to_owned();
  for entry in aliases.entries() {
    output = substitute_aliases(&output, entry, prefixes);
  }
  let output = insert_multiplication(&output);
  insert_exponents(&output)
}

/// Replaces every whole-token occurrence of one of the entry's
/// aliases with its canonical symbol. Longer aliases are tried first
/// at each position.
pub fn substitute_aliases<S: AsRef<str>>(input: &str, entry: &AliasEntry, prefixes: &[S]) -> String {
  let aliases = longest_first(&entry.aliases);
  let mut output = String::with_capacity(input.len());
  let mut index = 0;
  while let Some(ch) = char_at(input, index) {
    if is_token_start(input, index, prefixes) {
      let matched = aliases.iter().find(|alias| {
        !alias.is_empty() && input[index..].starts_with(**alias) && is_token_end(input, index + alias.len())
      });
      if let Some(alias) = matched {
        output.push_str(&entry.canonical);
        index += alias.len();
        continue;
      }
    }
    output.push(ch);
    index += ch.len_utf8();
  }
  output
}

/// True if a token may start at `index`: at the start of the input,
/// after whitespace, or after a metric prefix which is itself at the
/// start of the input or after whitespace.
fn is_token_start<S: AsRef<str>>(input: &str, index: usize, prefixes: &[S]) -> bool {
  if is_boundary_before(input, index) {
    return true;
  }
  let before = &input[..index];
  prefixes.iter()
    .map(AsRef::as_ref)
    .filter(|prefix| !prefix.is_empty())
    .any(|prefix| before.ends_with(prefix) && is_boundary_before(input, index - prefix.len()))
}

fn is_boundary_before(input: &str, index: usize) -> bool {
  char_before(input, index).map_or(true, char::is_whitespace)
}

fn is_token_end(input: &str, index: usize) -> bool {
  char_at(input, index).map_or(true, |ch| !ch.is_alphabetic())
}

/// Replaces each run of whitespace between an alphanumeric character
/// and a letter with ` * `.
pub fn insert_multiplication(input: &str) -> String {
  let mut output = String::with_capacity(input.len());
  let mut last_end = 0;
  for m in WHITESPACE_RE.find_iter(input) {
    let after_operand = char_before(input, m.start()).is_some_and(char::is_alphanumeric);
    let before_letter = char_at(input, m.end()).is_some_and(char::is_alphabetic);
    if after_operand && before_letter {
      output.push_str(&input[last_end..m.start()]);
      output.push_str(" * ");
      last_end = m.end();
    }
  }
  output.push_str(&input[last_end..]);
  output
}

/// Inserts `^` between a letter and an immediately following
/// (optionally signed) integer.
pub fn insert_exponents(input: &str) -> String {
  TRAILING_EXPONENT_RE.replace_all(input, "${1}^${2}").into_owned()
}
