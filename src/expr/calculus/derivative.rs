
use crate::expr::Expr;
use crate::expr::atom::Atom;
use crate::expr::function::{sin, cos, sqrt, exp, ln};
use crate::expr::simplifier::simplify;
use crate::expr::var::Var;

use num::pow::Pow;
use thiserror::Error;

/// Differentiates expressions with respect to a single variable.
#[derive(Debug)]
pub struct DerivativeEngine {
  target_variable: Var,
  original_expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to differentiate {original_expr}: {error}")]
pub struct DifferentiationFailure {
  pub original_expr: Expr,
  pub error: DifferentiationError,
  _priv: (), // Prevent construction outside of this module
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifferentiationError {
  #[error("Derivative of function '{0}' is not known")]
  UnknownDerivative(String),
  #[error("Function '{function}' expects {expected} argument(s), got {actual}")]
  WrongArity { function: String, expected: usize, actual: usize },
}

impl DerivativeEngine {
  pub fn new(original_expr: Expr, target_variable: Var) -> Self {
    Self { target_variable, original_expr }
  }

  pub fn target_variable(&self) -> &Var {
    &self.target_variable
  }

  pub fn differentiate(&self, expr: Expr) -> Result<Expr, DifferentiationFailure> {
    match expr {
      Expr::Atom(Atom::Number(_)) => {
        Ok(Expr::zero())
      }
      Expr::Atom(Atom::Var(var)) => {
        if var == self.target_variable {
          Ok(Expr::one())
        } else {
          Ok(Expr::zero())
        }
      }
      Expr::Call(function, args) => {
        if !args.iter().any(|a| a.contains_var(&self.target_variable)) {
          return Ok(Expr::zero());
        }
        self.differentiate_call(function, args)
      }
    }
  }

  fn differentiate_call(&self, function: String, args: Vec<Expr>) -> Result<Expr, DifferentiationFailure> {
    match function.as_str() {
      "+" => {
        let terms = args.into_iter().map(|a| self.differentiate(a)).collect::<Result<Vec<_>, _>>()?;
        Ok(Expr::call("+", terms))
      }
      "-" => {
        let [a, b] = self.two_args(&function, args)?;
        Ok(self.differentiate(a)? - self.differentiate(b)?)
      }
      "negate" => {
        let [a] = self.one_arg(&function, args)?;
        Ok(- self.differentiate(a)?)
      }
      "*" => {
        // Product rule. Factors which do not mention the variable are
        // constants and contribute no term of their own.
        let mut terms = Vec::new();
        for i in 0..args.len() {
          if !args[i].contains_var(&self.target_variable) {
            continue;
          }
          let mut factors = args.clone();
          factors[i] = self.differentiate(args[i].clone())?;
          terms.push(Expr::call("*", factors));
        }
        Ok(Expr::call("+", terms))
      }
      "/" => {
        let [a, b] = self.two_args(&function, args)?;
        if b.contains_var(&self.target_variable) {
          let da = self.differentiate(a.clone())?;
          let db = self.differentiate(b.clone())?;
          Ok((da * b.clone() - a * db) / b.pow(2_i64))
        } else {
          Ok(self.differentiate(a)? / b)
        }
      }
      "^" => {
        let [a, b] = self.two_args(&function, args)?;
        if !b.contains_var(&self.target_variable) {
          // Power rule
          let da = self.differentiate(a.clone())?;
          Ok(b.clone() * a.pow(b - 1_i64) * da)
        } else if !a.contains_var(&self.target_variable) {
          let db = self.differentiate(b.clone())?;
          Ok(a.clone().pow(b) * ln(a) * db)
        } else {
          let da = self.differentiate(a.clone())?;
          let db = self.differentiate(b.clone())?;
          Ok(a.clone().pow(b.clone()) * (db * ln(a.clone()) + b * da / a))
        }
      }
      "sin" => self.chain_rule(&function, args, |a| cos(a)),
      "cos" => self.chain_rule(&function, args, |a| - sin(a)),
      "tan" => self.chain_rule(&function, args, |a| Expr::one() / cos(a).pow(2_i64)),
      "asin" => self.chain_rule(&function, args, |a| Expr::one() / sqrt(1_i64 - a.pow(2_i64))),
      "acos" => self.chain_rule(&function, args, |a| - (Expr::one() / sqrt(1_i64 - a.pow(2_i64)))),
      "atan" => self.chain_rule(&function, args, |a| Expr::one() / (1_i64 + a.pow(2_i64))),
      "sqrt" => self.chain_rule(&function, args, |a| Expr::one() / (2_i64 * sqrt(a))),
      "exp" => self.chain_rule(&function, args, |a| exp(a)),
      "ln" => self.chain_rule(&function, args, |a| Expr::one() / a),
      "vector" => {
        let [x, y] = self.two_args(&function, args)?;
        Ok(Expr::call("vector", vec![self.differentiate(x)?, self.differentiate(y)?]))
      }
      "diff" => {
        let [inner, var] = self.two_args(&function, args)?;
        let Some(inner_var) = var.as_var() else {
          return Err(self.error(DifferentiationError::UnknownDerivative(function)));
        };
        let inner_engine = DerivativeEngine::new(inner.clone(), inner_var.clone());
        let inner_derivative = inner_engine.differentiate(inner)?;
        self.differentiate(inner_derivative)
      }
      _ => {
        Err(self.error(DifferentiationError::UnknownDerivative(function)))
      }
    }
  }

  /// Differentiates `f(a)` as `f'(a) * a'`, where `outer` computes
  /// `f'(a)`.
  fn chain_rule<F>(&self, function: &str, args: Vec<Expr>, outer: F) -> Result<Expr, DifferentiationFailure>
  where F: FnOnce(Expr) -> Expr {
    let [a] = self.one_arg(function, args)?;
    let da = self.differentiate(a.clone())?;
    Ok(outer(a) * da)
  }

  fn one_arg(&self, function: &str, args: Vec<Expr>) -> Result<[Expr; 1], DifferentiationFailure> {
    let actual = args.len();
    <[Expr; 1]>::try_from(args).map_err(|_| self.arity_error(function, 1, actual))
  }

  fn two_args(&self, function: &str, args: Vec<Expr>) -> Result<[Expr; 2], DifferentiationFailure> {
    let actual = args.len();
    <[Expr; 2]>::try_from(args).map_err(|_| self.arity_error(function, 2, actual))
  }

  fn arity_error(&self, function: &str, expected: usize, actual: usize) -> DifferentiationFailure {
    self.error(DifferentiationError::WrongArity { function: function.to_owned(), expected, actual })
  }

  pub fn error(&self, reason: DifferentiationError) -> DifferentiationFailure {
    DifferentiationFailure {
      original_expr: self.original_expr.clone(),
      error: reason,
      _priv: (),
    }
  }
}

/// Differentiates `expr` with respect to `var`, then simplifies the
/// result.
pub fn differentiate(expr: Expr, var: Var) -> Result<Expr, DifferentiationFailure> {
  let engine = DerivativeEngine::new(expr.clone(), var);
  engine.differentiate(expr).map(simplify)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::evaluator::evaluate_scalar;
  use crate::expr::function::{tan, atan, diff};
  use crate::expr::substitution::Substitution;

  use approx::assert_relative_eq;

  fn var(s: &str) -> Expr {
    Expr::var(s).unwrap()
  }

  fn v(s: &str) -> Var {
    Var::new(s).unwrap()
  }

  /// Evaluates the derivative of `expr` with respect to `x` at `x = at`.
  fn slope(expr: Expr, at: f64) -> f64 {
    let derivative = differentiate(expr, v("x")).unwrap();
    let subst = Substitution::new().with(v("x"), at);
    evaluate_scalar(&derivative, &subst).unwrap().value()
  }

  #[test]
  fn test_constants_and_variables() {
    assert_eq!(differentiate(Expr::from(3), v("x")).unwrap(), Expr::zero());
    assert_eq!(differentiate(var("x"), v("x")).unwrap(), Expr::one());
    assert_eq!(differentiate(var("y"), v("x")).unwrap(), Expr::zero());
    assert_eq!(differentiate(sin(var("y")), v("x")).unwrap(), Expr::zero());
  }

  #[test]
  fn test_linear_function() {
    let expr = var("x") * (var("b") - var("a")) / var("dt");
    let derivative = differentiate(expr, v("x")).unwrap();
    assert!(!derivative.contains_var(&v("x")));
    assert_eq!(derivative.to_string(), "(b - a) / dt");
  }

  #[test]
  fn test_polynomial() {
    let expr = 3_i64 * var("x").pow(2_i64) + 2_i64 * var("x") + 1_i64;
    assert_relative_eq!(slope(expr.clone(), 0.0), 2.0);
    assert_relative_eq!(slope(expr, 2.0), 14.0);
  }

  #[test]
  fn test_trigonometry() {
    assert_relative_eq!(slope(sin(var("x")), 0.0), 1.0);
    assert_relative_eq!(slope(cos(var("x")), std::f64::consts::FRAC_PI_2), -1.0);
    assert_relative_eq!(slope(tan(var("x")), 0.0), 1.0);
    assert_relative_eq!(slope(atan(var("x")), 1.0), 0.5);
    assert_relative_eq!(slope(sin(2_i64 * var("x")), 0.0), 2.0);
  }

  #[test]
  fn test_quotient_and_exponential() {
    assert_relative_eq!(slope(Expr::one() / var("x"), 2.0), -0.25);
    assert_relative_eq!(slope(exp(var("x")), 0.0), 1.0);
    assert_relative_eq!(slope(ln(var("x")), 4.0), 0.25);
    assert_relative_eq!(slope(sqrt(var("x")), 4.0), 0.25);
    assert_relative_eq!(slope(Expr::from(2).pow(var("x")), 0.0), std::f64::consts::LN_2);
    assert_relative_eq!(slope(var("x").pow(var("x")), 1.0), 1.0);
  }

  #[test]
  fn test_nested_diff() {
    let expr = diff(var("x").pow(3_i64), &v("x"));
    assert_relative_eq!(slope(expr, 2.0), 12.0);
  }

  #[test]
  fn test_unknown_function() {
    let expr = Expr::call("energy", vec![var("x")]);
    let err = differentiate(expr.clone(), v("x")).unwrap_err();
    assert_eq!(err.error, DifferentiationError::UnknownDerivative(String::from("energy")));
    assert_eq!(err.original_expr, expr);
    // Unknown functions of other variables are constants.
    let expr = Expr::call("energy", vec![var("y")]);
    assert_eq!(differentiate(expr, v("x")).unwrap(), Expr::zero());
  }
}
