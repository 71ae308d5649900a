//! Symbolic expressions over named physical quantities.

pub mod algebra;
pub mod arithmetic;
pub mod atom;
pub mod calculus;
pub mod evaluator;
pub mod function;
pub mod printer;
pub mod simplifier;
pub mod substitution;
pub mod var;
pub mod walker;

use atom::Atom;
use var::Var;

use serde::{Serialize, Deserialize};

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// An expression tree. Leaves are numbers and variables, and every
/// interior node is a call to a named function. Operators are
/// functions too, named `+`, `-`, `*`, `/`, `^`, and `negate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
  Atom(Atom),
  Call(String, Vec<Expr>),
}

impl Expr {
  /// Convenience constructor for [`Expr::Call`].
  pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Call(name.to_string(), args)
  }

  /// An expression consisting of a single variable, or `None` if the
  /// name is not a valid variable name.
  pub fn var(name: &str) -> Option<Expr> {
    Var::new(name).map(Expr::from)
  }

  pub fn zero() -> Expr {
    Expr::from(0.0)
  }

  pub fn one() -> Expr {
    Expr::from(1.0)
  }

  pub fn as_real(&self) -> Option<f64> {
    match self {
      Expr::Atom(Atom::Number(n)) => Some(*n),
      _ => None,
    }
  }

  pub fn is_real(&self) -> bool {
    self.as_real().is_some()
  }

  pub fn is_zero(&self) -> bool {
    self.as_real() == Some(0.0)
  }

  pub fn is_one(&self) -> bool {
    self.as_real() == Some(1.0)
  }

  pub fn as_var(&self) -> Option<&Var> {
    match self {
      Expr::Atom(Atom::Var(v)) => Some(v),
      _ => None,
    }
  }

  /// Whether `var` occurs anywhere inside this expression.
  pub fn contains_var(&self, var: &Var) -> bool {
    walker::any(self, |e| e.as_var() == Some(var))
  }

  /// All variables which occur in this expression, in sorted order.
  pub fn free_vars(&self) -> BTreeSet<Var> {
    let mut vars = BTreeSet::new();
    walker::postorder_walk_borrowed(self, |e| {
      if let Some(v) = e.as_var() {
        vars.insert(v.clone());
      }
    });
    vars
  }

  /// Replaces every occurrence of `var` with `value`.
  pub fn substitute(self, var: &Var, value: &Expr) -> Expr {
    walker::postorder_walk_ok(self, |e| {
      if e.as_var() == Some(var) {
        value.clone()
      } else {
        e
      }
    })
  }

  /// Replaces every unary call `name(arg)` with `body`, where `param`
  /// in `body` is replaced by `arg`.
  ///
  /// For instance, substituting `energy(t) := t * k` into
  /// `diff(energy(time), time)` produces `diff(time * k, time)`.
  pub fn substitute_function(self, name: &str, param: &Var, body: &Expr) -> Expr {
    walker::postorder_walk_ok(self, |e| match e {
      Expr::Call(f, mut args) if f == name && args.len() == 1 => {
        // unwrap: Just checked the vec length.
        let arg = args.pop().unwrap();
        body.clone().substitute(param, &arg)
      }
      e => e,
    })
  }
}

impl From<Atom> for Expr {
  fn from(a: Atom) -> Expr {
    Expr::Atom(a)
  }
}

impl From<Var> for Expr {
  fn from(v: Var) -> Expr {
    Expr::Atom(Atom::Var(v))
  }
}

impl From<&Var> for Expr {
  fn from(v: &Var) -> Expr {
    Expr::from(v.clone())
  }
}

impl From<f64> for Expr {
  fn from(n: f64) -> Expr {
    Expr::Atom(Atom::Number(n))
  }
}

impl From<i64> for Expr {
  fn from(n: i64) -> Expr {
    Expr::Atom(Atom::from(n))
  }
}

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&printer::to_infix(self))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn var(s: &str) -> Expr {
    Expr::var(s).unwrap()
  }

  #[test]
  fn test_contains_var() {
    let expr = Expr::call("*", vec![var("mass"), var("velocity")]);
    assert!(expr.contains_var(&Var::new("mass").unwrap()));
    assert!(!expr.contains_var(&Var::new("time").unwrap()));
  }

  #[test]
  fn test_free_vars() {
    let expr = Expr::call("+", vec![var("b"), Expr::call("sin", vec![var("a")]), var("b")]);
    let vars: Vec<_> = expr.free_vars().into_iter().map(String::from).collect();
    assert_eq!(vars, vec!["a", "b"]);
  }

  #[test]
  fn test_substitute() {
    let expr = Expr::call("*", vec![var("x"), var("y")]);
    let x = Var::new("x").unwrap();
    assert_eq!(
      expr.substitute(&x, &Expr::from(2)),
      Expr::call("*", vec![Expr::from(2), var("y")]),
    );
  }

  #[test]
  fn test_substitute_function() {
    let expr = Expr::call("diff", vec![Expr::call("energy", vec![var("time")]), var("time")]);
    let t = Var::new("t").unwrap();
    let body = Expr::call("*", vec![var("t"), var("k")]);
    assert_eq!(
      expr.substitute_function("energy", &t, &body),
      Expr::call("diff", vec![Expr::call("*", vec![var("time"), var("k")]), var("time")]),
    );
  }

  #[test]
  fn test_substitute_function_ignores_other_arity() {
    let expr = Expr::call("energy", vec![var("a"), var("b")]);
    let t = Var::new("t").unwrap();
    assert_eq!(expr.clone().substitute_function("energy", &t, &Expr::zero()), expr);
  }
}
