/// The binding power of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

impl Precedence {
  pub const MIN: Precedence = Precedence(0);

  /// Internally, we store an operator's precedence as ten times the
  /// input value, so that we can increment to represent
  /// associativity.
  ///
  /// For example, if `*` is a left-associative operator with
  /// (internal) precedence value `p`, then its left-hand side binds at
  /// `p` while its right-hand side binds at `p + 1`, so a following
  /// `*` closes the current operand instead of nesting inside it.
  pub const fn new(n: u64) -> Precedence {
    Precedence(n * 10)
  }

  pub const fn incremented(self) -> Precedence {
    Precedence(self.0 + 1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ordering() {
    assert!(Precedence::new(1) < Precedence::new(1).incremented());
    assert!(Precedence::new(1).incremented() < Precedence::new(2));
    assert!(Precedence::MIN < Precedence::new(1));
  }
}
