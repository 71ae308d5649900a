//! Impulse (momentum) of a body is the product of its mass and its
//! velocity.
//!
//! Law: `impulse = mass * velocity`.

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

pub struct ImpulseFromMassAndSpeed {
  pub impulse: Symbol,
  pub mass: Symbol,
  pub velocity: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<ImpulseFromMassAndSpeed> = Lazy::new(|| {
  let impulse = Symbol::dimensioned("impulse", named::MOMENTUM);
  let mass = Symbol::dimensioned("mass", named::MASS);
  let velocity = Symbol::dimensioned("velocity", named::VELOCITY);
  let law = Equation::new(&impulse, mass.expr() * velocity.expr());
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&velocity, &mass], &impulse);
  ImpulseFromMassAndSpeed { impulse, mass, velocity, law, solution, validator }
});

impl Law for ImpulseFromMassAndSpeed {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Impulse of a body is the product of its mass and velocity."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.impulse
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.velocity, &self.mass]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.mass, Quantity::from_base(2000.0, named::MASS))
      .with(&self.velocity, Quantity::from_base(10.0, named::VELOCITY))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_impulse(velocity: impl Into<Arg>, mass: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[velocity.into(), mass.into()])
}
