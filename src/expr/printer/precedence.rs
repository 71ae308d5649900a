
/// The precedence of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

/// The associativity of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Associativity {
  left_assoc: bool,
  right_assoc: bool,
}

impl Precedence {
  pub const MIN: Precedence = Precedence(0);
  pub const MAX: Precedence = Precedence(u64::MAX);

  /// Internally, we store an operator's precedence as ten times the
  /// input value, so that we can increment to represent
  /// associativity.
  ///
  /// For example, if `#` is a left-associative operator with
  /// (internal) precedence value `p`, then its left-hand side is also
  /// at precedence value `p`, while its right-hand side is at
  /// precedence value `p + 1`, indicating parentheses will be
  /// required if `#` is encountered again.
  pub const fn new(n: u64) -> Precedence {
    Precedence(n * 10)
  }

  pub const fn incremented(self) -> Precedence {
    Precedence(self.0 + 1)
  }
}

impl Associativity {
  /// Indicates an operator which associates to the left.
  pub const LEFT: Associativity = Associativity {
    left_assoc: true,
    right_assoc: false,
  };
  /// Indicates an operator which associates to the right.
  pub const RIGHT: Associativity = Associativity {
    left_assoc: false,
    right_assoc: true,
  };
  /// Indicates a non-associative operator, which always requires
  /// parentheses for nested applications of itself.
  pub const NONE: Associativity = Associativity {
    left_assoc: false,
    right_assoc: false,
  };

  /// The precedence required of the left operand of an operator at
  /// precedence `prec`.
  pub fn left_operand(self, prec: Precedence) -> Precedence {
    if self.left_assoc { prec } else { prec.incremented() }
  }

  /// The precedence required of the right operand of an operator at
  /// precedence `prec`.
  pub fn right_operand(self, prec: Precedence) -> Precedence {
    if self.right_assoc { prec } else { prec.incremented() }
  }
}
