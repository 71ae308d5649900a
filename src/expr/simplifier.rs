//! A light algebraic simplifier: constant folding and the identities
//! that symbolic differentiation tends to leave behind.

use super::Expr;
use super::walker::postorder_walk_ok;

pub trait Simplifier {
  /// Simplifies a single node, whose arguments have already been
  /// simplified.
  fn simplify_expr_part(&self, expr: Expr) -> Expr;

  fn simplify_expr(&self, expr: Expr) -> Expr {
    postorder_walk_ok(expr, |e| self.simplify_expr_part(e))
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSimplifier;

/// Simplifies `expr` with the [`DefaultSimplifier`].
pub fn simplify(expr: Expr) -> Expr {
  DefaultSimplifier.simplify_expr(expr)
}

impl Simplifier for DefaultSimplifier {
  fn simplify_expr_part(&self, expr: Expr) -> Expr {
    let Expr::Call(function, args) = expr else {
      return expr;
    };
    match function.as_str() {
      "+" => simplify_sum(args),
      "*" => simplify_product(args),
      "-" if args.len() == 2 => simplify_difference(args),
      "/" if args.len() == 2 => simplify_quotient(args),
      "^" if args.len() == 2 => simplify_power(args),
      "negate" if args.len() == 1 => simplify_negation(args),
      "sin" | "cos" | "tan" | "asin" | "acos" | "atan" | "exp" | "ln" | "sqrt" if args.len() == 1 => {
        fold_unary(function, args)
      }
      _ => Expr::Call(function, args),
    }
  }
}

/// Splices nested applications of `function` into a single argument
/// list.
fn flatten(function: &str, args: Vec<Expr>) -> Vec<Expr> {
  let mut result = Vec::with_capacity(args.len());
  for arg in args {
    match arg {
      Expr::Call(f, inner) if f == function => result.extend(inner),
      arg => result.push(arg),
    }
  }
  result
}

fn collapse(function: &str, mut args: Vec<Expr>, identity: f64) -> Expr {
  match args.len() {
    0 => Expr::from(identity),
    // unwrap: Just checked the vec length.
    1 => args.pop().unwrap(),
    _ => Expr::call(function, args),
  }
}

fn simplify_sum(args: Vec<Expr>) -> Expr {
  let (reals, mut terms): (Vec<_>, Vec<_>) = flatten("+", args).into_iter().partition(Expr::is_real);
  let constant: f64 = reals.iter().filter_map(Expr::as_real).sum();
  if constant != 0.0 {
    terms.push(Expr::from(constant));
  }
  collapse("+", terms, 0.0)
}

fn simplify_product(args: Vec<Expr>) -> Expr {
  let (reals, terms): (Vec<_>, Vec<_>) = flatten("*", args).into_iter().partition(Expr::is_real);
  let constant: f64 = reals.iter().filter_map(Expr::as_real).product();
  if constant == 0.0 {
    return Expr::zero();
  }
  let mut factors = Vec::with_capacity(terms.len() + 1);
  if constant != 1.0 {
    factors.push(Expr::from(constant));
  }
  factors.extend(terms);
  collapse("*", factors, 1.0)
}

fn simplify_difference(args: Vec<Expr>) -> Expr {
  let [a, b] = two(args);
  if b.is_zero() {
    a
  } else if a.is_zero() {
    simplify_negation(vec![b])
  } else if a == b {
    Expr::zero()
  } else {
    a - b
  }
}

fn simplify_quotient(args: Vec<Expr>) -> Expr {
  let [a, b] = two(args);
  if b.is_one() {
    a
  } else if a.is_zero() && !b.is_zero() {
    Expr::zero()
  } else {
    a / b
  }
}

fn simplify_power(args: Vec<Expr>) -> Expr {
  let [a, b] = two(args);
  match (a.as_real(), b.as_real()) {
    (Some(x), Some(y)) if x.powf(y).is_finite() => Expr::from(x.powf(y)),
    (Some(x), _) if x == 1.0 => Expr::one(),
    _ => num::pow::Pow::pow(a, b),
  }
}

fn simplify_negation(mut args: Vec<Expr>) -> Expr {
  // unwrap: Callers pass exactly one argument.
  let a = args.pop().unwrap();
  - a
}

fn fold_unary(function: String, args: Vec<Expr>) -> Expr {
  let Some(x) = args[0].as_real() else {
    return Expr::Call(function, args);
  };
  let value = match function.as_str() {
    "sin" => x.sin(),
    "cos" => x.cos(),
    "tan" => x.tan(),
    "asin" => x.asin(),
    "acos" => x.acos(),
    "atan" => x.atan(),
    "exp" => x.exp(),
    "ln" => x.ln(),
    "sqrt" => x.sqrt(),
    _ => f64::NAN,
  };
  if value.is_finite() {
    Expr::from(value)
  } else {
    Expr::Call(function, args)
  }
}

fn two(args: Vec<Expr>) -> [Expr; 2] {
  // unwrap: Callers check the argument count.
  args.try_into().unwrap()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::function::{sin, ln};

  use num::pow::Pow;

  fn var(s: &str) -> Expr {
    Expr::var(s).unwrap()
  }

  #[test]
  fn test_multiplicative_identities() {
    assert_eq!(simplify(Expr::call("*", vec![Expr::zero(), var("x")])), Expr::zero());
    assert_eq!(simplify(Expr::call("*", vec![Expr::one(), var("x")])), var("x"));
    assert_eq!(
      simplify(Expr::call("*", vec![Expr::from(2), var("x"), Expr::from(3)])),
      Expr::call("*", vec![Expr::from(6), var("x")]),
    );
  }

  #[test]
  fn test_additive_identities() {
    assert_eq!(simplify(Expr::call("+", vec![var("x"), Expr::zero()])), var("x"));
    assert_eq!(simplify(Expr::call("+", vec![])), Expr::zero());
    assert_eq!(simplify(Expr::call("-", vec![var("x"), Expr::zero()])), var("x"));
    assert_eq!(simplify(Expr::call("-", vec![Expr::zero(), var("x")])), - var("x"));
    assert_eq!(simplify(Expr::call("-", vec![var("x"), var("x")])), Expr::zero());
  }

  #[test]
  fn test_nested_sums_flatten() {
    let expr = Expr::call("+", vec![var("a"), Expr::call("+", vec![Expr::from(1), var("b")]), Expr::from(2)]);
    assert_eq!(simplify(expr), Expr::call("+", vec![var("a"), var("b"), Expr::from(3)]));
  }

  #[test]
  fn test_powers() {
    assert_eq!(simplify(Expr::call("^", vec![var("x"), Expr::one()])), var("x"));
    assert_eq!(simplify(Expr::call("^", vec![var("x"), Expr::zero()])), Expr::one());
    assert_eq!(simplify(Expr::call("^", vec![Expr::from(2), Expr::from(3)])), Expr::from(8));
    assert_eq!(simplify(Expr::call("^", vec![Expr::one(), var("x")])), Expr::one());
    assert_eq!(simplify(var("x").pow(var("y"))), var("x").pow(var("y")));
  }

  #[test]
  fn test_double_negation() {
    let expr = Expr::call("negate", vec![Expr::call("negate", vec![var("x")])]);
    assert_eq!(simplify(expr), var("x"));
    assert_eq!(simplify(Expr::call("negate", vec![Expr::from(2)])), Expr::from(-2));
  }

  #[test]
  fn test_quotients() {
    assert_eq!(simplify(Expr::call("/", vec![var("x"), Expr::one()])), var("x"));
    assert_eq!(simplify(Expr::call("/", vec![Expr::zero(), var("x")])), Expr::zero());
    let by_zero = Expr::call("/", vec![Expr::one(), Expr::zero()]);
    assert_eq!(simplify(by_zero.clone()), by_zero);
  }

  #[test]
  fn test_fold_functions() {
    assert_eq!(simplify(sin(Expr::zero())), Expr::zero());
    assert_eq!(simplify(ln(Expr::zero())), ln(Expr::zero()));
    assert_eq!(simplify(sin(var("x"))), sin(var("x")));
  }

  #[test]
  fn test_simplifies_bottom_up() {
    // (0 * t + 1 * k) * 1 => k
    let expr = Expr::call("*", vec![
      Expr::call("+", vec![
        Expr::call("*", vec![Expr::zero(), var("t")]),
        Expr::call("*", vec![Expr::one(), var("k")]),
      ]),
      Expr::one(),
    ]);
    assert_eq!(simplify(expr), var("k"));
  }
}
