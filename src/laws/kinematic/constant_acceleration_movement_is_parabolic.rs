//! Distance covered by a body moving with constant acceleration.
//!
//! Law: `distance = initial_velocity * movement_time + constant_acceleration * movement_time^2 / 2`.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::substitution::Substitution;
use crate::law::{self, Law, law_name};
use crate::quantity::Quantity;
use crate::symbol::Symbol;
use crate::units::dimension::named;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;
use num::pow::Pow;

pub struct ConstantAccelerationMovementIsParabolic {
  pub distance: Symbol,
  pub initial_velocity: Symbol,
  pub constant_acceleration: Symbol,
  pub movement_time: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<ConstantAccelerationMovementIsParabolic> = Lazy::new(|| {
  let distance = Symbol::dimensioned("distance", named::LENGTH);
  let initial_velocity = Symbol::dimensioned("initial_velocity", named::VELOCITY);
  let constant_acceleration = Symbol::dimensioned("constant_acceleration", named::ACCELERATION);
  let movement_time = Symbol::dimensioned("movement_time", named::TIME);
  let rhs = initial_velocity.expr() * movement_time.expr()
    + constant_acceleration.expr() * movement_time.expr().pow(2_i64) / 2_i64;
  let law = Equation::new(&distance, rhs);
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols(
    [&initial_velocity, &constant_acceleration, &movement_time],
    &distance,
  );
  ConstantAccelerationMovementIsParabolic {
    distance,
    initial_velocity,
    constant_acceleration,
    movement_time,
    law,
    solution,
    validator,
  }
});

impl Law for ConstantAccelerationMovementIsParabolic {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Under constant acceleration, distance grows quadratically with time."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.distance
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.initial_velocity, &self.constant_acceleration, &self.movement_time]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.initial_velocity, Quantity::from_base(1.0, named::VELOCITY))
      .with(&self.constant_acceleration, Quantity::from_base(9.8, named::ACCELERATION))
      .with(&self.movement_time, Quantity::from_base(3.0, named::TIME))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_distance(
  initial_velocity: impl Into<Arg>,
  constant_acceleration: impl Into<Arg>,
  movement_time: impl Into<Arg>,
) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[initial_velocity.into(), constant_acceleration.into(), movement_time.into()])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{UnitsError, ArgumentTypeError};
  use crate::law::test_utils::assert_balances;

  use approx::assert_relative_eq;

  fn q(s: &str) -> Quantity {
    Quantity::parse(s).unwrap()
  }

  #[test]
  fn test_print_law() {
    assert_eq!(
      print_law(),
      "distance = initial_velocity * movement_time + constant_acceleration * movement_time^2 / 2",
    );
  }

  #[test]
  fn test_basic_distance() {
    let result = calculate_distance(q("1 m / s"), q("2 m / s^2"), q("3 s")).unwrap();
    assert!(result.is_compatible_with(&named::LENGTH));
    assert_relative_eq!(result.value(), 12.0, max_relative = 1e-9);
  }

  #[test]
  fn test_free_fall_from_rest() {
    let result = calculate_distance(q("0 m / s"), q("9.8 m / s^2"), q("2 s")).unwrap();
    assert_relative_eq!(result.value(), 19.6, max_relative = 1e-9);
  }

  #[test]
  fn test_bad_arguments() {
    let err = calculate_distance(q("1 m"), q("2 m / s^2"), q("3 s")).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "initial_velocity"));
    let err = calculate_distance(q("1 m / s"), q("2 m / s"), q("3 s")).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "constant_acceleration"));
    let err = calculate_distance(q("1 m / s"), q("2 m / s^2"), 3.0).unwrap_err();
    assert!(matches!(err, Error::Type(ArgumentTypeError { ref parameter, .. }) if parameter == "movement_time"));
  }

  #[test]
  fn test_equation_balances() {
    assert_balances(&*LAW);
  }
}
