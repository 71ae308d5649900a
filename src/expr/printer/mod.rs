//! Infix rendering of expressions.
//!
//! The printer inserts parentheses only where the tree structure
//! would otherwise be misread, so `a * (b + c)` and `a * b + c` both
//! print as written.

mod precedence;

pub use precedence::{Precedence, Associativity};

use super::Expr;
use super::atom::Atom;

/// An infix operator known to the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixOp {
  pub function_name: &'static str,
  pub symbol: &'static str,
  pub precedence: Precedence,
  pub associativity: Associativity,
}

pub const EQUALS: InfixOp = InfixOp {
  function_name: "=",
  symbol: " = ",
  precedence: Precedence::new(1),
  associativity: Associativity::NONE,
};

const INFIX_OPS: [InfixOp; 6] = [
  EQUALS,
  InfixOp { function_name: "+", symbol: " + ", precedence: Precedence::new(10), associativity: Associativity::LEFT },
  InfixOp { function_name: "-", symbol: " - ", precedence: Precedence::new(10), associativity: Associativity::LEFT },
  InfixOp { function_name: "*", symbol: " * ", precedence: Precedence::new(20), associativity: Associativity::LEFT },
  InfixOp { function_name: "/", symbol: " / ", precedence: Precedence::new(20), associativity: Associativity::LEFT },
  InfixOp { function_name: "^", symbol: "^", precedence: Precedence::new(40), associativity: Associativity::RIGHT },
];

/// Precedence of unary negation. Binds tighter than multiplication
/// but looser than exponentiation, so `-x^2` is `-(x^2)`.
const NEGATE_PRECEDENCE: Precedence = Precedence::new(30);

fn infix_op(function_name: &str) -> Option<&'static InfixOp> {
  INFIX_OPS.iter().find(|op| op.function_name == function_name)
}

/// Renders `expr` as an infix string.
pub fn to_infix(expr: &Expr) -> String {
  let mut out = String::new();
  write_expr(&mut out, expr, Precedence::MIN);
  out
}

/// Renders `lhs = rhs`.
pub fn equation_to_infix(lhs: &Expr, rhs: &Expr) -> String {
  let mut out = String::new();
  write_infix(&mut out, &EQUALS, &[lhs, rhs]);
  out
}

fn precedence_of(expr: &Expr) -> Precedence {
  match expr {
    Expr::Atom(Atom::Number(n)) if *n < 0.0 => NEGATE_PRECEDENCE,
    Expr::Atom(_) => Precedence::MAX,
    Expr::Call(f, args) => {
      if f == "negate" && args.len() == 1 {
        NEGATE_PRECEDENCE
      } else {
        match infix_op(f) {
          Some(op) if args.len() >= 2 => op.precedence,
          _ => Precedence::MAX,
        }
      }
    }
  }
}

fn write_expr(out: &mut String, expr: &Expr, required: Precedence) {
  let parenthesize = precedence_of(expr) < required;
  if parenthesize {
    out.push('(');
  }
  match expr {
    Expr::Atom(atom) => {
      out.push_str(&atom.to_string());
    }
    Expr::Call(f, args) if f == "negate" && args.len() == 1 => {
      out.push('-');
      write_expr(out, &args[0], NEGATE_PRECEDENCE);
    }
    Expr::Call(f, args) => {
      match infix_op(f) {
        Some(op) if args.len() >= 2 => {
          let args: Vec<_> = args.iter().collect();
          write_infix(out, op, &args);
        }
        _ => {
          write_function_call(out, f, args);
        }
      }
    }
  }
  if parenthesize {
    out.push(')');
  }
}

fn write_infix(out: &mut String, op: &InfixOp, args: &[&Expr]) {
  for (i, arg) in args.iter().enumerate() {
    if i == 0 {
      write_expr(out, arg, op.associativity.left_operand(op.precedence));
    } else {
      out.push_str(op.symbol);
      // A leading minus sign is always parenthesized after an operator.
      let required = if starts_with_minus(arg) && op.function_name != "=" {
        Precedence::MAX
      } else {
        op.associativity.right_operand(op.precedence)
      };
      write_expr(out, arg, required);
    }
  }
}

fn starts_with_minus(expr: &Expr) -> bool {
  precedence_of(expr) == NEGATE_PRECEDENCE
}

fn write_function_call(out: &mut String, f: &str, args: &[Expr]) {
  out.push_str(f);
  out.push('(');
  for (i, arg) in args.iter().enumerate() {
    if i > 0 {
      out.push_str(", ");
    }
    write_expr(out, arg, Precedence::MIN);
  }
  out.push(')');
}
