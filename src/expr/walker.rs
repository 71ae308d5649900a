//! Utility functions for walking an expression tree.

use super::Expr;
use crate::util::unwrap_infallible;

/// Rebuilds `expr` bottom-up, applying `f` to each node after its
/// arguments have been rebuilt.
pub fn postorder_walk<E, F>(expr: Expr, mut f: F) -> Result<Expr, E>
where F: FnMut(Expr) -> Result<Expr, E> {
  postorder_walk_impl(expr, &mut f)
}

pub fn postorder_walk_ok<F>(expr: Expr, mut f: F) -> Expr
where F: FnMut(Expr) -> Expr {
  let f_err = |expr| Ok(f(expr));
  unwrap_infallible(
    postorder_walk(expr, f_err)
  )
}

fn postorder_walk_impl<E, F>(expr: Expr, f: &mut F) -> Result<Expr, E>
where F: FnMut(Expr) -> Result<Expr, E> {
  let expr = match expr {
    Expr::Atom(atom) => {
      Expr::Atom(atom)
    }
    Expr::Call(function_name, args) => {
      let args = args.into_iter().map(|x| postorder_walk_impl(x, f)).collect::<Result<Vec<_>, _>>()?;
      Expr::Call(function_name, args)
    }
  };
  f(expr)
}

pub fn postorder_walk_borrowed<F>(expr: &Expr, mut f: F)
where F: FnMut(&Expr) {
  postorder_walk_borrowed_impl(expr, &mut f);
}

fn postorder_walk_borrowed_impl<F>(expr: &Expr, f: &mut F)
where F: FnMut(&Expr) {
  if let Expr::Call(_, args) = expr {
    for arg in args {
      postorder_walk_borrowed_impl(arg, f);
    }
  }
  f(expr);
}

/// Returns true if any of the sub-expressions of `expr` (including
/// `expr` itself) satisfies the predicate. Stops at the first match.
pub fn any<F>(expr: &Expr, f: F) -> bool
where F: Fn(&Expr) -> bool {
  fn go<F: Fn(&Expr) -> bool>(expr: &Expr, f: &F) -> bool {
    f(expr) || matches!(expr, Expr::Call(_, args) if args.iter().any(|a| go(a, f)))
  }
  go(expr, &f)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn var(s: &str) -> Expr {
    Expr::var(s).unwrap()
  }

  #[test]
  fn test_postorder_walk_visits_children_first() {
    let expr = Expr::call("+", vec![var("a"), Expr::call("*", vec![var("b"), var("c")])]);
    let mut order = Vec::new();
    postorder_walk_borrowed(&expr, |e| order.push(e.to_string()));
    assert_eq!(order, vec!["a", "b", "c", "b * c", "a + b * c"]);
  }

  #[test]
  fn test_postorder_walk_error_short_circuits() {
    let expr = Expr::call("f", vec![var("a"), var("b")]);
    let result: Result<Expr, String> = postorder_walk(expr, |e| {
      if e.as_var().map(|v| v.as_str()) == Some("b") { Err(String::from("b")) } else { Ok(e) }
    });
    assert_eq!(result, Err(String::from("b")));
  }

  #[test]
  fn test_any() {
    let expr = Expr::call("sin", vec![Expr::call("*", vec![Expr::from(2), var("x")])]);
    assert!(any(&expr, Expr::is_real));
    assert!(!any(&expr, |e| matches!(e, Expr::Call(f, _) if f == "cos")));
  }
}
