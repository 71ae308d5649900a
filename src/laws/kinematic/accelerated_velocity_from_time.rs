//! Velocity of a body after accelerating uniformly for some time.
//!
//! Law: `velocity = initial_velocity + acceleration * time`.

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

pub struct AcceleratedVelocityFromTime {
  pub velocity: Symbol,
  pub initial_velocity: Symbol,
  pub acceleration: Symbol,
  pub time: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<AcceleratedVelocityFromTime> = Lazy::new(|| {
  let velocity = Symbol::dimensioned("velocity", named::VELOCITY);
  let initial_velocity = Symbol::dimensioned("initial_velocity", named::VELOCITY);
  let acceleration = Symbol::dimensioned("acceleration", named::ACCELERATION);
  let time = Symbol::dimensioned("time", named::TIME);
  let law = Equation::new(&velocity, initial_velocity.expr() + acceleration.expr() * time.expr());
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&initial_velocity, &acceleration, &time], &velocity);
  AcceleratedVelocityFromTime { velocity, initial_velocity, acceleration, time, law, solution, validator }
});

impl Law for AcceleratedVelocityFromTime {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Velocity under constant acceleration grows linearly with time."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.velocity
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.initial_velocity, &self.acceleration, &self.time]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.initial_velocity, Quantity::from_base(5.0, named::VELOCITY))
      .with(&self.acceleration, Quantity::from_base(-2.0, named::ACCELERATION))
      .with(&self.time, Quantity::from_base(1.5, named::TIME))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_velocity(
  initial_velocity: impl Into<Arg>,
  acceleration: impl Into<Arg>,
  time: impl Into<Arg>,
) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[initial_velocity.into(), acceleration.into(), time.into()])
}
