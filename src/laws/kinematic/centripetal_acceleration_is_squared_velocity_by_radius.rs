//! Centripetal acceleration of a body moving along a circular path
//! is the square of its linear velocity divided by the radius of the
//! path.
//!
//! Law: `acceleration = linear_velocity^2 / curve_radius`.

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

pub struct CentripetalAccelerationIsSquaredVelocityByRadius {
  pub acceleration: Symbol,
  pub linear_velocity: Symbol,
  pub curve_radius: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<CentripetalAccelerationIsSquaredVelocityByRadius> = Lazy::new(|| {
  let acceleration = Symbol::dimensioned("acceleration", named::ACCELERATION);
  let linear_velocity = Symbol::dimensioned("linear_velocity", named::VELOCITY);
  let curve_radius = Symbol::dimensioned("curve_radius", named::LENGTH);
  let law = Equation::new(&acceleration, linear_velocity.expr().pow(2_i64) / curve_radius.expr());
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&linear_velocity, &curve_radius], &acceleration);
  CentripetalAccelerationIsSquaredVelocityByRadius {
    acceleration,
    linear_velocity,
    curve_radius,
    law,
    solution,
    validator,
  }
});

impl Law for CentripetalAccelerationIsSquaredVelocityByRadius {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Centripetal acceleration is the squared linear velocity divided by the curve radius."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.acceleration
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.linear_velocity, &self.curve_radius]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.linear_velocity, Quantity::from_base(10.0, named::VELOCITY))
      .with(&self.curve_radius, Quantity::from_base(0.5, named::LENGTH))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_acceleration(linear_velocity: impl Into<Arg>, curve_radius: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[linear_velocity.into(), curve_radius.into()])
}
