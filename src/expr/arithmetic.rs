
use super::Expr;

use num::{Zero, One};
use num::pow::Pow;

use std::ops::{Add, Sub, Mul, Div, Neg};

/// This struct forms a thin wrapper around [`Expr`] and can be used
/// in arithmetic expressions, such as `+` and `*`.
///
/// Arithmetic on two numeric literals is folded immediately, while
/// anything else applies the corresponding operator at the expression
/// level. Division by a literal zero is never folded, so that the
/// evaluator can report it in context.
///
/// The same operators are implemented directly on [`Expr`], by way of
/// this type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArithExpr {
  inner: Expr,
}

impl ArithExpr {
  /// Sums a vector of expressions. If all of the values are real
  /// numbers, then the result will be a single number. Otherwise, the
  /// result will be an addition expression consisting of the
  /// arguments.
  ///
  /// A vector of one value will always result in that value, not an
  /// addition expression containing it.
  pub fn sum(exprs: Vec<impl Into<Expr>>) -> Self {
    Self::fold_variadic(exprs, "+", 0.0, |a, b| a + b)
  }

  /// Returns the product of a vector of expressions, folding real
  /// numbers as [`ArithExpr::sum`] does.
  pub fn product(exprs: Vec<impl Into<Expr>>) -> Self {
    Self::fold_variadic(exprs, "*", 1.0, |a, b| a * b)
  }

  pub fn is_real(&self) -> bool {
    self.inner.is_real()
  }

  fn fold_variadic<F>(exprs: Vec<impl Into<Expr>>, op_name: &str, identity: f64, op: F) -> Self
  where F: Fn(f64, f64) -> f64 {
    let mut exprs: Vec<Expr> = exprs.into_iter().map(|e| e.into()).collect();
    if let Some(reals) = exprs.iter().map(Expr::as_real).collect::<Option<Vec<_>>>() {
      ArithExpr::from(reals.into_iter().fold(identity, op))
    } else if exprs.len() == 1 {
      // unwrap: Just checked the vec length.
      ArithExpr::from(exprs.pop().unwrap())
    } else {
      ArithExpr::from(Expr::call(op_name, exprs))
    }
  }

  fn binary_op<F>(self, rhs: Self, op_name: &str, op: F) -> Self
  where F: FnOnce(f64, f64) -> f64 {
    match (self.inner.as_real(), rhs.inner.as_real()) {
      (Some(a), Some(b)) => ArithExpr::from(op(a, b)),
      _ => ArithExpr::from(Expr::call(op_name, vec![self.into(), rhs.into()])),
    }
  }
}

impl From<Expr> for ArithExpr {
  fn from(inner: Expr) -> Self {
    Self { inner }
  }
}

impl From<i64> for ArithExpr {
  fn from(n: i64) -> Self {
    ArithExpr::from(Expr::from(n))
  }
}

impl From<f64> for ArithExpr {
  fn from(n: f64) -> Self {
    ArithExpr::from(Expr::from(n))
  }
}

impl From<ArithExpr> for Expr {
  fn from(arith_expr: ArithExpr) -> Self {
    arith_expr.inner
  }
}

impl AsRef<Expr> for ArithExpr {
  fn as_ref(&self) -> &Expr {
    &self.inner
  }
}

impl Zero for ArithExpr {
  fn zero() -> Self {
    ArithExpr::from(Expr::zero())
  }

  fn is_zero(&self) -> bool {
    self.as_ref().is_zero()
  }
}

impl One for ArithExpr {
  fn one() -> Self {
    ArithExpr::from(Expr::one())
  }

  fn is_one(&self) -> bool {
    self.as_ref().is_one()
  }
}

impl Add for ArithExpr {
  type Output = ArithExpr;

  fn add(self, rhs: Self) -> Self::Output {
    ArithExpr::binary_op(self, rhs, "+", f64::add)
  }
}

impl Sub for ArithExpr {
  type Output = ArithExpr;

  fn sub(self, rhs: Self) -> Self::Output {
    ArithExpr::binary_op(self, rhs, "-", f64::sub)
  }
}

impl Mul for ArithExpr {
  type Output = ArithExpr;

  fn mul(self, rhs: Self) -> Self::Output {
    ArithExpr::binary_op(self, rhs, "*", f64::mul)
  }
}

impl Div for ArithExpr {
  type Output = ArithExpr;

  fn div(self, rhs: Self) -> Self::Output {
    if rhs.is_zero() {
      ArithExpr::from(Expr::call("/", vec![self.into(), rhs.into()]))
    } else {
      ArithExpr::binary_op(self, rhs, "/", f64::div)
    }
  }
}

impl Neg for ArithExpr {
  type Output = ArithExpr;

  fn neg(self) -> Self::Output {
    match self.inner {
      Expr::Call(f, mut args) if f == "negate" && args.len() == 1 => {
        // unwrap: Just checked the vec length.
        ArithExpr::from(args.pop().unwrap())
      }
      inner => match inner.as_real() {
        Some(n) => ArithExpr::from(- n),
        None => ArithExpr::from(Expr::call("negate", vec![inner])),
      }
    }
  }
}

impl Pow<ArithExpr> for ArithExpr {
  type Output = ArithExpr;

  fn pow(self, rhs: Self) -> Self::Output {
    // Only exponents of 0 and 1 are eliminated here. Folding real
    // powers is left to the simplifier, which knows which results are
    // real.
    if rhs.is_zero() {
      ArithExpr::one()
    } else if rhs.is_one() {
      self
    } else {
      ArithExpr::from(Expr::call("^", vec![self.into(), rhs.into()]))
    }
  }
}

macro_rules! impl_expr_arith {
  (impl $trait: ident for Expr { fn $method: ident };) => {
    impl $trait<Expr> for Expr {
      type Output = Expr;

      fn $method(self, rhs: Expr) -> Expr {
        ArithExpr::$method(ArithExpr::from(self), ArithExpr::from(rhs)).into()
      }
    }

    impl $trait<f64> for Expr {
      type Output = Expr;

      fn $method(self, rhs: f64) -> Expr {
        ArithExpr::$method(ArithExpr::from(self), ArithExpr::from(rhs)).into()
      }
    }

    impl $trait<i64> for Expr {
      type Output = Expr;

      fn $method(self, rhs: i64) -> Expr {
        ArithExpr::$method(ArithExpr::from(self), ArithExpr::from(rhs)).into()
      }
    }

    impl $trait<Expr> for f64 {
      type Output = Expr;

      fn $method(self, rhs: Expr) -> Expr {
        ArithExpr::$method(ArithExpr::from(self), ArithExpr::from(rhs)).into()
      }
    }

    impl $trait<Expr> for i64 {
      type Output = Expr;

      fn $method(self, rhs: Expr) -> Expr {
        ArithExpr::$method(ArithExpr::from(self), ArithExpr::from(rhs)).into()
      }
    }
  }
}

impl_expr_arith! { impl Add for Expr { fn add }; }
impl_expr_arith! { impl Sub for Expr { fn sub }; }
impl_expr_arith! { impl Mul for Expr { fn mul }; }
impl_expr_arith! { impl Div for Expr { fn div }; }
impl_expr_arith! { impl Pow for Expr { fn pow }; }

impl Neg for Expr {
  type Output = Expr;

  fn neg(self) -> Expr {
    (- ArithExpr::from(self)).into()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn var(s: &str) -> Expr {
    Expr::var(s).unwrap()
  }

  fn avar(s: &str) -> ArithExpr {
    ArithExpr::from(var(s))
  }

  #[test]
  fn test_sum_on_reals() {
    let input = Vec::<Expr>::new();
    assert_eq!(ArithExpr::sum(input), ArithExpr::zero());
    let input = vec![Expr::from(9)];
    assert_eq!(ArithExpr::sum(input), ArithExpr::from(9));
    let input = vec![Expr::from(9), Expr::from(1), Expr::from(2)];
    assert_eq!(ArithExpr::sum(input), ArithExpr::from(12));
  }

  #[test]
  fn test_sum_on_vars() {
    let input = vec![var("x"), var("y")];
    assert_eq!(ArithExpr::sum(input), ArithExpr::from(Expr::call("+", vec![var("x"), var("y")])));
    let input = vec![var("x")];
    assert_eq!(ArithExpr::sum(input), avar("x"));
  }

  #[test]
  fn test_product_on_reals_and_vars() {
    let input = vec![Expr::from(9), Expr::from(3), Expr::from(2)];
    assert_eq!(ArithExpr::product(input), ArithExpr::from(54));
    let input = vec![var("x"), Expr::from(0), Expr::from(20)];
    assert_eq!(
      ArithExpr::product(input),
      ArithExpr::from(Expr::call("*", vec![var("x"), Expr::from(0), Expr::from(20)])),
    );
  }

  #[test]
  fn test_arithmetic_ops_on_vars() {
    assert_eq!(var("x") + var("y"), Expr::call("+", vec![var("x"), var("y")]));
    assert_eq!(var("x") * var("y"), Expr::call("*", vec![var("x"), var("y")]));
    assert_eq!(var("x") - 10_i64, Expr::call("-", vec![var("x"), Expr::from(10)]));
    assert_eq!(10_i64 - var("x"), Expr::call("-", vec![Expr::from(10), var("x")]));
    assert_eq!(var("x") / 2.0, Expr::call("/", vec![var("x"), Expr::from(2)]));
  }

  #[test]
  fn test_arithmetic_ops_on_reals() {
    assert_eq!(Expr::from(10) + Expr::from(20), Expr::from(30));
    assert_eq!(Expr::from(10) * Expr::from(20), Expr::from(200));
    assert_eq!(Expr::from(10) - Expr::from(20), Expr::from(-10));
    assert_eq!(Expr::from(2) / Expr::from(4), Expr::from(0.5));
  }

  #[test]
  fn test_division_by_zero_is_not_folded() {
    assert_eq!(Expr::from(0) / Expr::from(1), Expr::from(0));
    assert_eq!(Expr::from(1) / Expr::from(0), Expr::call("/", vec![Expr::from(1), Expr::from(0)]));
  }

  #[test]
  fn test_pow() {
    assert_eq!(var("x").pow(Expr::from(1)), var("x"));
    assert_eq!(var("x").pow(0_i64), Expr::from(1));
    assert_eq!(var("x").pow(2_i64), Expr::call("^", vec![var("x"), Expr::from(2)]));
  }

  #[test]
  fn test_negation() {
    assert_eq!(- Expr::from(3), Expr::from(-3));
    assert_eq!(- var("x"), Expr::call("negate", vec![var("x")]));
    assert_eq!(-(-var("x")), var("x"));
  }
}
