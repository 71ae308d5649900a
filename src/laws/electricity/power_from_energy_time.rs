//! Average power is the energy transferred divided by the time it took.
//!
//! Law: `power = energy / time`.

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

pub struct PowerFromEnergyTime {
  pub power: Symbol,
  pub energy: Symbol,
  pub time: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<PowerFromEnergyTime> = Lazy::new(|| {
  let power = Symbol::dimensioned("power", named::POWER);
  let energy = Symbol::dimensioned("energy", named::ENERGY);
  let time = Symbol::dimensioned("time", named::TIME);
  let law = Equation::new(&power, energy.expr() / time.expr());
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&energy, &time], &power);
  PowerFromEnergyTime { power, energy, time, law, solution, validator }
});

impl Law for PowerFromEnergyTime {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Average power is energy divided by the time over which it is transferred."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.power
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.energy, &self.time]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.energy, Quantity::from_base(20000.0, named::ENERGY))
      .with(&self.time, Quantity::from_base(35.0, named::TIME))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

/// Average power over `time`. The division follows IEEE 754, so a zero
/// `time` yields an infinite power (or `NaN` when the energy is zero
/// too) rather than an error.
pub fn calculate_power(energy: impl Into<Arg>, time: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[energy.into(), time.into()])
}
