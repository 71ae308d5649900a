//! Helpers for manipulating expressions algebraically.

pub mod formula;
pub mod root_finding;

use crate::expr::Expr;
use crate::expr::evaluator::{EvalError, evaluate_scalar};
use crate::expr::substitution::Substitution;
use crate::expr::var::Var;
use crate::quantity::Quantity;

/// An expression, being treated as a real function of one
/// dimensionless argument. Every other variable takes its value from
/// a fixed substitution.
#[derive(Debug, Clone)]
pub struct ExprFunction {
  expr: Expr,
  var: Var,
  bindings: Substitution,
}

impl ExprFunction {
  pub fn new(expr: Expr, var: Var, bindings: Substitution) -> ExprFunction {
    ExprFunction { expr, var, bindings }
  }

  pub fn expr(&self) -> &Expr {
    &self.expr
  }

  fn eval_at_quantity(&self, value: Quantity) -> Result<Quantity, EvalError> {
    let bindings = self.bindings.clone().with(&self.var, value);
    evaluate_scalar(&self.expr, &bindings)
  }

  /// Evaluates the function at the given position, returning the
  /// value of the result in SI base units.
  pub fn eval_at_real(&self, value: f64) -> Result<f64, EvalError> {
    self.eval_at_quantity(Quantity::dimensionless(value)).map(|q| q.value())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::named;

  use num::pow::Pow;

  #[test]
  fn test_expr_function() {
    let expr = Expr::var("k").unwrap() * Expr::var("x").unwrap().pow(2_i64);
    let bindings = Substitution::new().with(Var::new("k").unwrap(), Quantity::parse("2 m").unwrap());
    let f = ExprFunction::new(expr, Var::new("x").unwrap(), bindings);
    assert_eq!(f.eval_at_real(3.0), Ok(18.0));
    assert_eq!(f.eval_at_quantity(Quantity::dimensionless(1.0)), Ok(Quantity::from_base(2.0, named::LENGTH)));
  }
}
