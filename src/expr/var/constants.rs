//! Well-known constants that the evaluator binds when a variable is
//! not otherwise assigned a value.

use super::Var;
use crate::expr::Expr;
use crate::quantity::Quantity;
use crate::units::dimension::named;

use once_cell::sync::Lazy;

use std::collections::HashMap;
use std::f64::consts::{PI, E};

/// The speed of light in vacuum, in meters per second.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Names which resolve to a constant value.
pub static CONSTANTS: Lazy<HashMap<Var, Quantity>> = Lazy::new(|| {
  [
    ("pi", Quantity::dimensionless(PI)),
    ("e", Quantity::dimensionless(E)),
    ("speed_of_light", Quantity::from_base(SPEED_OF_LIGHT, named::VELOCITY)),
  ].into_iter()
    // unwrap: All of the above are valid variable names.
    .map(|(name, value)| (Var::new(name).unwrap(), value))
    .collect()
});

pub fn lookup_constant(var: &Var) -> Option<Quantity> {
  CONSTANTS.get(var).copied()
}

pub fn is_constant(var: &Var) -> bool {
  CONSTANTS.contains_key(var)
}

/// The constant `pi`, as an expression.
pub fn pi() -> Expr {
  constant_expr("pi")
}

/// The constant `speed_of_light`, as an expression.
pub fn speed_of_light() -> Expr {
  constant_expr("speed_of_light")
}

fn constant_expr(name: &str) -> Expr {
  // unwrap: Only called with names from the table above.
  Expr::var(name).unwrap()
}
