
//! Numerical evaluation of expressions, with dimensional analysis.

use super::Expr;
use super::atom::Atom;
use super::calculus::{differentiate, DifferentiationFailure};
use super::function::{FunctionFlags, lookup_builtin};
use super::substitution::{Substitution, Value};
use super::var::Var;
use super::var::constants::lookup_constant;
use crate::quantity::{Quantity, DimensionMismatch};
use crate::units::Dimension;
use crate::util::point::Vector2D;

use thiserror::Error;

/// Errors which can occur while evaluating an expression. Every
/// variant indicates an expression which is not meaningful for the
/// given bindings.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Variable '{0}' is not bound")]
  UnboundVariable(Var),
  #[error("Unknown function '{0}'")]
  UnknownFunction(String),
  #[error("Function '{function}' expects {expected} argument(s), got {actual}")]
  WrongArity { function: String, expected: usize, actual: usize },
  #[error("In '{function}': {mismatch}")]
  IncompatibleDimensions { function: String, mismatch: DimensionMismatch },
  #[error("Function '{function}' requires a dimensionless argument, got {dimension}")]
  DimensionedArgument { function: String, dimension: Dimension },
  #[error("Cannot raise a quantity of dimension {dimension} to the non-integer power {exponent}")]
  NonIntegralExponent { dimension: Dimension, exponent: f64 },
  #[error("Cannot take the square root of dimension {0}")]
  NoSquareRoot(Dimension),
  #[error("Function '{0}' expects scalar arguments")]
  ExpectedScalar(String),
  #[error("Function '{0}' expects vector arguments")]
  ExpectedVector(String),
  #[error("The second argument to 'diff' must be a variable")]
  InvalidDiffVariable,
  #[error("{0}")]
  DifferentiationError(#[from] DifferentiationFailure),
}

/// Evaluates `expr` under the given bindings. Variables that are not
/// bound resolve through the table of well-known constants.
pub fn evaluate(expr: &Expr, subst: &Substitution) -> Result<Value, EvalError> {
  match expr {
    Expr::Atom(Atom::Number(n)) => Ok(Value::from(*n)),
    Expr::Atom(Atom::Var(v)) => {
      if let Some(value) = subst.get(v) {
        Ok(*value)
      } else {
        lookup_constant(v).map(Value::Scalar).ok_or_else(|| EvalError::UnboundVariable(v.clone()))
      }
    }
    Expr::Call(f, args) if f == "diff" => {
      check_arity(f, args, 2)?;
      let var = args[1].as_var().ok_or(EvalError::InvalidDiffVariable)?;
      let derivative = differentiate(args[0].clone(), var.clone())?;
      evaluate(&derivative, subst)
    }
    Expr::Call(f, args) => {
      let args = args.iter().map(|a| evaluate(a, subst)).collect::<Result<Vec<_>, _>>()?;
      apply_function(f, args)
    }
  }
}

/// Evaluates `expr`, requiring the result to be a scalar.
pub fn evaluate_scalar(expr: &Expr, subst: &Substitution) -> Result<Quantity, EvalError> {
  evaluate(expr, subst)?.as_scalar().ok_or_else(|| EvalError::ExpectedScalar(String::from("evaluate_scalar")))
}

fn check_arity<T>(function: &str, args: &[T], expected: usize) -> Result<(), EvalError> {
  if args.len() == expected {
    Ok(())
  } else {
    Err(EvalError::WrongArity { function: function.to_owned(), expected, actual: args.len() })
  }
}

fn scalars(function: &str, args: Vec<Value>) -> Result<Vec<Quantity>, EvalError> {
  args.into_iter()
    .map(|a| a.as_scalar().ok_or_else(|| EvalError::ExpectedScalar(function.to_owned())))
    .collect()
}

fn mismatch(function: &str) -> impl Fn(DimensionMismatch) -> EvalError + '_ {
  move |mismatch| EvalError::IncompatibleDimensions { function: function.to_owned(), mismatch }
}

fn apply_function(f: &str, args: Vec<Value>) -> Result<Value, EvalError> {
  let builtin = lookup_builtin(f).ok_or_else(|| EvalError::UnknownFunction(f.to_owned()))?;
  if let Some(arity) = builtin.arity {
    check_arity(f, &args, arity)?;
  }
  if builtin.flags.contains(FunctionFlags::TRANSCENDENTAL) {
    let [x] = <[Quantity; 1]>::try_from(scalars(f, args)?)
      .map_err(|_| EvalError::ExpectedScalar(f.to_owned()))?;
    return apply_transcendental(f, x).map(Value::Scalar);
  }
  match f {
    "+" => fold_values(f, args, add_values),
    "*" => fold_values(f, args, mul_values),
    "-" => {
      let [a, b] = two_args(f, args)?;
      add_values(f, a, negate(b))
    }
    "/" => {
      let [a, b] = two_args(f, args)?;
      match (a, b) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a / b)),
        (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|c| c / b))),
        _ => Err(EvalError::ExpectedScalar(f.to_owned())),
      }
    }
    "^" => {
      let [base, exponent] = <[Quantity; 2]>::try_from(scalars(f, args)?)
        .map_err(|_| EvalError::ExpectedScalar(f.to_owned()))?;
      power(base, exponent).map(Value::Scalar)
    }
    "negate" => {
      let [a] = <[Value; 1]>::try_from(args).map_err(|_| EvalError::ExpectedScalar(f.to_owned()))?;
      Ok(negate(a))
    }
    "sqrt" => {
      let [x] = <[Quantity; 1]>::try_from(scalars(f, args)?)
        .map_err(|_| EvalError::ExpectedScalar(f.to_owned()))?;
      x.checked_sqrt().map(Value::Scalar).ok_or(EvalError::NoSquareRoot(*x.dimension()))
    }
    "vector" => {
      let [x, y] = <[Quantity; 2]>::try_from(scalars(f, args)?)
        .map_err(|_| EvalError::ExpectedScalar(f.to_owned()))?;
      if x.dimension() != y.dimension() {
        return Err(mismatch(f)(DimensionMismatch { left: *x.dimension(), right: *y.dimension() }));
      }
      Ok(Value::Vector(Vector2D::new(x, y)))
    }
    "dot" => {
      let [a, b] = two_args(f, args)?;
      match (a, b) {
        (Value::Vector(a), Value::Vector(b)) => {
          let sum = (a.x * b.x).checked_add(a.y * b.y).map_err(mismatch(f))?;
          Ok(Value::Scalar(sum))
        }
        _ => Err(EvalError::ExpectedVector(f.to_owned())),
      }
    }
    _ => Err(EvalError::UnknownFunction(f.to_owned())),
  }
}

fn two_args(f: &str, args: Vec<Value>) -> Result<[Value; 2], EvalError> {
  let actual = args.len();
  <[Value; 2]>::try_from(args)
    .map_err(|_| EvalError::WrongArity { function: f.to_owned(), expected: 2, actual })
}

fn fold_values<F>(f: &str, args: Vec<Value>, op: F) -> Result<Value, EvalError>
where F: Fn(&str, Value, Value) -> Result<Value, EvalError> {
  let mut args = args.into_iter();
  let Some(first) = args.next() else {
    return Err(EvalError::WrongArity { function: f.to_owned(), expected: 1, actual: 0 });
  };
  args.try_fold(first, |acc, x| op(f, acc, x))
}

fn add_values(f: &str, a: Value, b: Value) -> Result<Value, EvalError> {
  match (a, b) {
    (Value::Scalar(a), Value::Scalar(b)) => a.checked_add(b).map(Value::Scalar).map_err(mismatch(f)),
    (Value::Vector(a), Value::Vector(b)) => {
      let x = a.x.checked_add(b.x).map_err(mismatch(f))?;
      let y = a.y.checked_add(b.y).map_err(mismatch(f))?;
      Ok(Value::Vector(Vector2D::new(x, y)))
    }
    _ => Err(EvalError::ExpectedScalar(f.to_owned())),
  }
}

fn mul_values(f: &str, a: Value, b: Value) -> Result<Value, EvalError> {
  match (a, b) {
    (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a * b)),
    (Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(b.map(|c| a * c))),
    (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|c| c * b))),
    (Value::Vector(_), Value::Vector(_)) => Err(EvalError::ExpectedScalar(f.to_owned())),
  }
}

fn negate(a: Value) -> Value {
  match a {
    Value::Scalar(a) => Value::Scalar(- a),
    Value::Vector(a) => Value::Vector(a.map(|c| - c)),
  }
}

fn power(base: Quantity, exponent: Quantity) -> Result<Quantity, EvalError> {
  if !exponent.is_dimensionless() {
    return Err(EvalError::DimensionedArgument { function: String::from("^"), dimension: *exponent.dimension() });
  }
  let exponent = exponent.value();
  if base.is_dimensionless() {
    return Ok(Quantity::dimensionless(base.value().powf(exponent)));
  }
  if exponent.fract() == 0.0 && exponent.abs() <= i64::MAX as f64 {
    Ok(base.powi(exponent as i64))
  } else if exponent == 0.5 {
    base.checked_sqrt().ok_or(EvalError::NoSquareRoot(*base.dimension()))
  } else {
    Err(EvalError::NonIntegralExponent { dimension: *base.dimension(), exponent })
  }
}

fn apply_transcendental(f: &str, x: Quantity) -> Result<Quantity, EvalError> {
  let func: fn(f64) -> f64 = match f {
    "sin" => f64::sin,
    "cos" => f64::cos,
    "tan" => f64::tan,
    "asin" => f64::asin,
    "acos" => f64::acos,
    "atan" => f64::atan,
    "exp" => f64::exp,
    "ln" => f64::ln,
    _ => return Err(EvalError::UnknownFunction(f.to_owned())),
  };
  x.map_dimensionless(func)
    .ok_or_else(|| EvalError::DimensionedArgument { function: f.to_owned(), dimension: *x.dimension() })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::function::{sin, sqrt, dot, vector, diff};
  use crate::units::dimension::named;

  use approx::assert_relative_eq;
  use num::pow::Pow;

  fn var(s: &str) -> Expr {
    Expr::var(s).unwrap()
  }

  fn v(s: &str) -> Var {
    Var::new(s).unwrap()
  }

  fn q(s: &str) -> Quantity {
    Quantity::parse(s).unwrap()
  }

  #[test]
  fn test_evaluate_product() {
    let expr = var("mass") * var("velocity");
    let subst = Substitution::new().with(v("mass"), q("2000 kg")).with(v("velocity"), q("10 m / s"));
    let result = evaluate_scalar(&expr, &subst).unwrap();
    assert_eq!(result.dimension(), &named::MOMENTUM);
    assert_relative_eq!(result.value(), 20000.0);
  }

  #[test]
  fn test_evaluate_constants() {
    let expr = var("speed_of_light") / var("n");
    let subst = Substitution::new().with(v("n"), 2.0);
    let result = evaluate_scalar(&expr, &subst).unwrap();
    assert_eq!(result.dimension(), &named::VELOCITY);
    assert_relative_eq!(result.value(), 149_896_229.0);
  }

  #[test]
  fn test_bound_variable_shadows_constant() {
    let subst = Substitution::new().with(v("e"), 3.0);
    assert_eq!(evaluate_scalar(&var("e"), &subst).unwrap(), Quantity::dimensionless(3.0));
  }

  #[test]
  fn test_unbound_variable() {
    let err = evaluate(&var("mass"), &Substitution::new()).unwrap_err();
    assert_eq!(err, EvalError::UnboundVariable(v("mass")));
  }

  #[test]
  fn test_sum_requires_compatible_dimensions() {
    let subst = Substitution::new().with(v("a"), q("1 m")).with(v("b"), q("1 s"));
    let err = evaluate(&(var("a") + var("b")), &subst).unwrap_err();
    assert_eq!(err, EvalError::IncompatibleDimensions {
      function: String::from("+"),
      mismatch: DimensionMismatch { left: named::LENGTH, right: named::TIME },
    });
  }

  #[test]
  fn test_transcendental_requires_dimensionless() {
    let subst = Substitution::new().with(v("a"), q("1 m"));
    let err = evaluate(&sin(var("a")), &subst).unwrap_err();
    assert_eq!(err, EvalError::DimensionedArgument { function: String::from("sin"), dimension: named::LENGTH });
    let subst = Substitution::new().with(v("a"), q("90 deg"));
    assert_relative_eq!(evaluate_scalar(&sin(var("a")), &subst).unwrap().value(), 1.0);
  }

  #[test]
  fn test_powers() {
    let subst = Substitution::new().with(v("x"), q("3 m"));
    let squared = evaluate_scalar(&var("x").pow(2_i64), &subst).unwrap();
    assert_eq!(squared.dimension(), &named::AREA);
    assert_relative_eq!(squared.value(), 9.0);
    let err = evaluate(&var("x").pow(1.5), &subst).unwrap_err();
    assert_eq!(err, EvalError::NonIntegralExponent { dimension: named::LENGTH, exponent: 1.5 });
    let subst = Substitution::new().with(v("x"), 4.0);
    assert_relative_eq!(evaluate_scalar(&var("x").pow(1.5), &subst).unwrap().value(), 8.0);
  }

  #[test]
  fn test_sqrt() {
    let subst = Substitution::new().with(v("x"), q("16 m^2"));
    let root = evaluate_scalar(&sqrt(var("x")), &subst).unwrap();
    assert_eq!(root, q("4 m"));
    let subst = Substitution::new().with(v("x"), q("16 m"));
    assert_eq!(evaluate(&sqrt(var("x")), &subst).unwrap_err(), EvalError::NoSquareRoot(named::LENGTH));
  }

  #[test]
  fn test_dot_product() {
    let force = Vector2D::new(q("3 N"), q("4 N"));
    let distance = Vector2D::new(q("2 m"), q("0 m"));
    let subst = Substitution::new().with(v("force"), force).with(v("distance"), distance);
    let work = evaluate_scalar(&dot(var("force"), var("distance")), &subst).unwrap();
    assert_eq!(work.dimension(), &named::ENERGY);
    assert_relative_eq!(work.value(), 6.0);
  }

  #[test]
  fn test_dot_product_requires_vectors() {
    let subst = Substitution::new().with(v("a"), 1.0).with(v("b"), 1.0);
    assert_eq!(
      evaluate(&dot(var("a"), var("b")), &subst).unwrap_err(),
      EvalError::ExpectedVector(String::from("dot")),
    );
  }

  #[test]
  fn test_vector_construction_and_scaling() {
    let subst = Substitution::new().with(v("x"), q("1 m")).with(v("y"), q("2 m")).with(v("k"), 3.0);
    let result = evaluate(&(var("k") * vector(var("x"), var("y"))), &subst).unwrap();
    let vec = result.as_vector().unwrap();
    assert_relative_eq!(vec.x.value(), 3.0);
    assert_relative_eq!(vec.y.value(), 6.0);
  }

  #[test]
  fn test_diff_is_differentiated_before_evaluation() {
    let t = v("t");
    let expr = diff(var("t") * var("k"), &t);
    let subst = Substitution::new().with(v("k"), q("5 J / s"));
    let result = evaluate_scalar(&expr, &subst).unwrap();
    assert_eq!(result, q("5 W"));
  }

  #[test]
  fn test_unknown_function() {
    let expr = Expr::call("energy", vec![var("t")]);
    let subst = Substitution::new().with(v("t"), 1.0);
    assert_eq!(evaluate(&expr, &subst).unwrap_err(), EvalError::UnknownFunction(String::from("energy")));
  }

  #[test]
  fn test_wrong_arity() {
    let expr = Expr::call("sin", vec![Expr::from(1), Expr::from(2)]);
    assert_eq!(
      evaluate(&expr, &Substitution::new()).unwrap_err(),
      EvalError::WrongArity { function: String::from("sin"), expected: 1, actual: 2 },
    );
  }
}
