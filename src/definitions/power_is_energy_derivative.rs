//! Power is the rate at which energy changes.
//!
//! Definition: `power(time) = diff(energy(time), time)`.
//!
//! The calculation assumes energy changes linearly over the elapsed
//! time, from `energy_start` to `energy_end`.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::evaluator::{EvalError, evaluate_scalar};
use crate::expr::function::diff;
use crate::expr::substitution::Substitution;
use crate::law::{self, Law, LawTraits, law_name};
use crate::quantity::Quantity;
use crate::symbol::{Symbol, FunctionSymbol};
use crate::units::dimension::named;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;

pub struct PowerIsEnergyDerivative {
  pub time: Symbol,
  pub power: FunctionSymbol,
  pub energy: FunctionSymbol,
  pub energy_start: Symbol,
  pub energy_end: Symbol,
  power_value: Symbol,
  // Duration over which the energy changes. Kept apart from `time`,
  // which is the variable of differentiation.
  elapsed_time: Symbol,
  definition: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<PowerIsEnergyDerivative> = Lazy::new(|| {
  let time = Symbol::dimensioned("time", named::TIME);
  let power = FunctionSymbol::new("power", time.clone(), named::POWER);
  let energy = FunctionSymbol::new("energy", time.clone(), named::ENERGY);
  let energy_start = Symbol::dimensioned("energy_start", named::ENERGY);
  let energy_end = Symbol::dimensioned("energy_end", named::ENERGY);
  let elapsed_time = Symbol::dimensioned("elapsed_time", named::TIME);
  let power_value = power.as_symbol();

  let definition = Equation::new(power.applied(), diff(energy.applied(), time.var()));
  let energy_function = time.expr() * (energy_end.expr() - energy_start.expr()) / elapsed_time.expr();
  let solution = definition.rhs().clone().substitute_function(energy.name(), time.var(), &energy_function);
  let validator = Validator::for_symbols([&energy_start, &energy_end, &time], &power_value);
  PowerIsEnergyDerivative {
    time,
    power,
    energy,
    energy_start,
    energy_end,
    power_value,
    elapsed_time,
    definition,
    solution,
    validator,
  }
});

impl PowerIsEnergyDerivative {
  fn bind_elapsed_time(&self, bindings: &Substitution) -> Substitution {
    let mut bindings = bindings.clone();
    if let Some(time) = bindings.get(self.time.var()).copied() {
      bindings.insert(&self.elapsed_time, time);
    }
    bindings
  }
}

impl Law for PowerIsEnergyDerivative {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Power is the derivative of energy with respect to time."
  }

  fn equation(&self) -> &Equation {
    &self.definition
  }

  fn target(&self) -> &Symbol {
    &self.power_value
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.energy_start, &self.energy_end, &self.time]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn traits(&self) -> LawTraits {
    LawTraits::DEFINITION
  }

  fn solve(&self, inputs: &Substitution) -> Result<Quantity, EvalError> {
    evaluate_scalar(&self.solution, &self.bind_elapsed_time(inputs))
  }

  /// Evaluates the definition with the linear energy function
  /// substituted in, and `power(time)` read from the `power` binding.
  fn residual(&self, bindings: &Substitution) -> Result<Quantity, EvalError> {
    let equation = Equation::new(&self.power_value, self.solution.clone());
    equation.residual(&self.bind_elapsed_time(bindings))
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.energy_start, Quantity::from_base(100.0, named::ENERGY))
      .with(&self.energy_end, Quantity::from_base(400.0, named::ENERGY))
      .with(&self.time, Quantity::from_base(60.0, named::TIME))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

/// Average power over `time`, for energy changing from `energy_start`
/// to `energy_end`.
pub fn calculate_power(
  energy_start: impl Into<Arg>,
  energy_end: impl Into<Arg>,
  time: impl Into<Arg>,
) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[energy_start.into(), energy_end.into(), time.into()])
}
