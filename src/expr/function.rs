//! Constructors for calls to the built-in functions, and the table of
//! names the evaluator understands.

use super::Expr;
use super::var::Var;

use bitflags::bitflags;

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
  pub struct FunctionFlags: u32 {
    /// Functions with this flag require a dimensionless argument and
    /// produce a dimensionless result.
    const TRANSCENDENTAL = 0b0001;
    /// Functions with this flag are written infix by the printer.
    const INFIX = 0b0010;
    /// Functions with this flag act on vectors.
    const VECTOR = 0b0100;
  }
}

/// A function name known to the evaluator, with its arity (`None` for
/// variadic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFunction {
  pub name: &'static str,
  pub arity: Option<usize>,
  pub flags: FunctionFlags,
}

pub const BUILTINS: &[BuiltinFunction] = &[
  BuiltinFunction { name: "+", arity: None, flags: FunctionFlags::INFIX },
  BuiltinFunction { name: "-", arity: Some(2), flags: FunctionFlags::INFIX },
  BuiltinFunction { name: "*", arity: None, flags: FunctionFlags::INFIX },
  BuiltinFunction { name: "/", arity: Some(2), flags: FunctionFlags::INFIX },
  BuiltinFunction { name: "^", arity: Some(2), flags: FunctionFlags::INFIX },
  BuiltinFunction { name: "negate", arity: Some(1), flags: FunctionFlags::empty() },
  BuiltinFunction { name: "sin", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "cos", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "tan", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "asin", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "acos", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "atan", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "exp", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "ln", arity: Some(1), flags: FunctionFlags::TRANSCENDENTAL },
  BuiltinFunction { name: "sqrt", arity: Some(1), flags: FunctionFlags::empty() },
  BuiltinFunction { name: "vector", arity: Some(2), flags: FunctionFlags::VECTOR },
  BuiltinFunction { name: "dot", arity: Some(2), flags: FunctionFlags::VECTOR },
  BuiltinFunction { name: "diff", arity: Some(2), flags: FunctionFlags::empty() },
];

pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinFunction> {
  BUILTINS.iter().find(|f| f.name == name)
}

pub fn sin(x: impl Into<Expr>) -> Expr {
  Expr::call("sin", vec![x.into()])
}

pub fn cos(x: impl Into<Expr>) -> Expr {
  Expr::call("cos", vec![x.into()])
}

pub fn tan(x: impl Into<Expr>) -> Expr {
  Expr::call("tan", vec![x.into()])
}

pub fn asin(x: impl Into<Expr>) -> Expr {
  Expr::call("asin", vec![x.into()])
}

pub fn acos(x: impl Into<Expr>) -> Expr {
  Expr::call("acos", vec![x.into()])
}

pub fn atan(x: impl Into<Expr>) -> Expr {
  Expr::call("atan", vec![x.into()])
}

pub fn exp(x: impl Into<Expr>) -> Expr {
  Expr::call("exp", vec![x.into()])
}

pub fn ln(x: impl Into<Expr>) -> Expr {
  Expr::call("ln", vec![x.into()])
}

pub fn sqrt(x: impl Into<Expr>) -> Expr {
  Expr::call("sqrt", vec![x.into()])
}

/// A two-dimensional vector with the given Cartesian components.
pub fn vector(x: impl Into<Expr>, y: impl Into<Expr>) -> Expr {
  Expr::call("vector", vec![x.into(), y.into()])
}

/// The scalar product of two vectors.
pub fn dot(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
  Expr::call("dot", vec![a.into(), b.into()])
}

/// The (unevaluated) derivative of `expr` with respect to `var`.
pub fn diff(expr: impl Into<Expr>, var: &Var) -> Expr {
  Expr::call("diff", vec![expr.into(), Expr::from(var)])
}
