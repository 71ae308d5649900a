//! Ohm's law: the current through a conductor is proportional to the
//! voltage across it.

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

pub struct CurrentIsProportionalToVoltage {
  pub current: Symbol,
  pub voltage: Symbol,
  pub resistance: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<CurrentIsProportionalToVoltage> = Lazy::new(|| {
  let current = Symbol::dimensioned("current", named::CURRENT);
  let voltage = Symbol::dimensioned("voltage", named::VOLTAGE);
  let resistance = Symbol::dimensioned("resistance", named::IMPEDANCE);
  let law = Equation::new(&current, voltage.expr() / resistance.expr());
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&voltage, &resistance], &current);
  CurrentIsProportionalToVoltage { current, voltage, resistance, law, solution, validator }
});

impl Law for CurrentIsProportionalToVoltage {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Current through a conductor is the voltage across it divided by its resistance."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.current
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.voltage, &self.resistance]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.voltage, Quantity::from_base(12.0, named::VOLTAGE))
      .with(&self.resistance, Quantity::from_base(4.0, named::IMPEDANCE))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_current(voltage: impl Into<Arg>, resistance: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[voltage.into(), resistance.into()])
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
    assert_eq!(print_law(), "current = voltage / resistance");
  }

  #[test]
  fn test_basic_current() {
    let result = calculate_current(q("12 V"), q("4 ohm")).unwrap();
    assert!(result.is_compatible_with(&named::CURRENT));
    assert_relative_eq!(result.convert_to_str("A").unwrap().value, 3.0, max_relative = 0.001);
    let result = calculate_current(q("5 V"), q("2 kohm")).unwrap();
    assert_relative_eq!(result.convert_to_str("mA").unwrap().value, 2.5, max_relative = 0.001);
  }

  #[test]
  fn test_bad_voltage() {
    let err = calculate_current(q("12 A"), q("4 ohm")).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "voltage"));
    let err = calculate_current(12.0, q("4 ohm")).unwrap_err();
    assert!(matches!(err, Error::Type(ArgumentTypeError { ref parameter, .. }) if parameter == "voltage"));
  }

  #[test]
  fn test_bad_resistance() {
    let err = calculate_current(q("12 V"), q("4 V")).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "resistance"));
  }

  #[test]
  fn test_equation_balances() {
    assert_balances(&*LAW);
  }
}
