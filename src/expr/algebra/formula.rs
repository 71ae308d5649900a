//! Equations between two expressions.

use crate::expr::Expr;
use crate::expr::evaluator::{EvalError, evaluate_scalar};
use crate::expr::printer::equation_to_infix;
use crate::expr::substitution::Substitution;
use crate::expr::var::Var;
use crate::quantity::Quantity;

use serde::{Serialize, Deserialize};

use std::collections::BTreeSet;
use std::fmt::{self, Formatter, Display};

/// The relation `lhs = rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
  lhs: Expr,
  rhs: Expr,
}

impl Equation {
  pub fn new(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Equation {
    Equation { lhs: lhs.into(), rhs: rhs.into() }
  }

  pub fn lhs(&self) -> &Expr {
    &self.lhs
  }

  pub fn rhs(&self) -> &Expr {
    &self.rhs
  }

  /// Every variable mentioned on either side.
  pub fn free_vars(&self) -> BTreeSet<Var> {
    let mut vars = self.lhs.free_vars();
    vars.extend(self.rhs.free_vars());
    vars
  }

  /// Evaluates `lhs - rhs` under the given bindings. An equation which
  /// holds for these values has a residual of zero.
  pub fn residual(&self, subst: &Substitution) -> Result<Quantity, EvalError> {
    let lhs = evaluate_scalar(&self.lhs, subst)?;
    let rhs = evaluate_scalar(&self.rhs, subst)?;
    lhs.checked_sub(rhs).map_err(|mismatch| EvalError::IncompatibleDimensions {
      function: String::from("="),
      mismatch,
    })
  }
}

impl Display for Equation {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&equation_to_infix(&self.lhs, &self.rhs))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::function::sin;
  use crate::quantity::DimensionMismatch;
  use crate::units::dimension::named;

  use approx::assert_abs_diff_eq;

  fn var(s: &str) -> Expr {
    Expr::var(s).unwrap()
  }

  fn v(s: &str) -> Var {
    Var::new(s).unwrap()
  }

  #[test]
  fn test_display() {
    let eq = Equation::new(var("impulse"), var("mass") * var("velocity"));
    assert_eq!(eq.to_string(), "impulse = mass * velocity");
    let eq = Equation::new(var("n1") * sin(var("a")), var("n2") * sin(var("b")));
    assert_eq!(eq.to_string(), "n1 * sin(a) = n2 * sin(b)");
  }

  #[test]
  fn test_free_vars() {
    let eq = Equation::new(var("y"), var("x") * var("a"));
    let vars: Vec<_> = eq.free_vars().into_iter().map(String::from).collect();
    assert_eq!(vars, vec!["a", "x", "y"]);
  }

  #[test]
  fn test_residual() {
    let eq = Equation::new(var("impulse"), var("mass") * var("velocity"));
    let subst = Substitution::new()
      .with(v("impulse"), Quantity::parse("20 kg m / s").unwrap())
      .with(v("mass"), Quantity::parse("2 kg").unwrap())
      .with(v("velocity"), Quantity::parse("10 m / s").unwrap());
    let residual = eq.residual(&subst).unwrap();
    assert_abs_diff_eq!(residual, Quantity::from_base(0.0, named::MOMENTUM));
  }

  #[test]
  fn test_residual_dimension_mismatch() {
    let eq = Equation::new(var("a"), var("b"));
    let subst = Substitution::new()
      .with(v("a"), Quantity::parse("1 m").unwrap())
      .with(v("b"), Quantity::parse("1 s").unwrap());
    assert_eq!(eq.residual(&subst), Err(EvalError::IncompatibleDimensions {
      function: String::from("="),
      mismatch: DimensionMismatch { left: named::LENGTH, right: named::TIME },
    }));
  }
}
