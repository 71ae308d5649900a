//! Newton's second law: the acceleration of a body is proportional
//! to the net force acting on it, and inversely proportional to its
//! mass.

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

pub struct AccelerationFromForce {
  pub acceleration: Symbol,
  pub force: Symbol,
  pub mass: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<AccelerationFromForce> = Lazy::new(|| {
  let acceleration = Symbol::dimensioned("acceleration", named::ACCELERATION);
  let force = Symbol::dimensioned("force", named::FORCE);
  let mass = Symbol::dimensioned("mass", named::MASS);
  let law = Equation::new(&acceleration, force.expr() / mass.expr());
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&force, &mass], &acceleration);
  AccelerationFromForce { acceleration, force, mass, law, solution, validator }
});

impl Law for AccelerationFromForce {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Acceleration of a body is the net force acting on it divided by its mass."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.acceleration
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.force, &self.mass]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.force, Quantity::from_base(10.0, named::FORCE))
      .with(&self.mass, Quantity::from_base(2.0, named::MASS))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_acceleration(force: impl Into<Arg>, mass: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[force.into(), mass.into()])
}
