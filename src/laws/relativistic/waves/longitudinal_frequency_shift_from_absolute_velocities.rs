//! Relativistic Doppler effect for a source and an observer moving
//! along the line between them.
//!
//! This is the classical Doppler law scaled by a relativistic factor.
//! Velocities are measured relative to the medium: positive when the
//! source or observer moves away from the other, negative when it
//! moves towards it. Both must not exceed the wave velocity.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::function::sqrt;
use crate::expr::substitution::Substitution;
use crate::expr::var::constants::speed_of_light;
use crate::law::{self, Law, LawTraits, law_name};
use crate::quantity::Quantity;
use crate::symbol::Symbol;
use crate::units::dimension::named;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;
use num::pow::Pow;

pub struct LongitudinalFrequencyShiftFromAbsoluteVelocities {
  pub observed_frequency: Symbol,
  pub real_frequency: Symbol,
  pub wave_velocity: Symbol,
  pub source_velocity: Symbol,
  pub observer_velocity: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<LongitudinalFrequencyShiftFromAbsoluteVelocities> = Lazy::new(|| {
  let observed_frequency = Symbol::dimensioned("observed_frequency", named::FREQUENCY);
  let real_frequency = Symbol::dimensioned("real_frequency", named::FREQUENCY);
  let wave_velocity = Symbol::dimensioned("wave_velocity", named::VELOCITY);
  let source_velocity = Symbol::dimensioned("source_velocity", named::VELOCITY);
  let observer_velocity = Symbol::dimensioned("observer_velocity", named::VELOCITY);

  let (v, vs, vo) = (wave_velocity.expr(), source_velocity.expr(), observer_velocity.expr());
  let classical = real_frequency.expr() * (1_i64 - vo.clone() / v.clone()) / (1_i64 + vs.clone() / v);
  let lorentz = sqrt(
    (1_i64 - (vs / speed_of_light()).pow(2_i64)) / (1_i64 - (vo / speed_of_light()).pow(2_i64)),
  );
  let law = Equation::new(&observed_frequency, classical * lorentz);
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols(
    [&real_frequency, &wave_velocity, &source_velocity, &observer_velocity],
    &observed_frequency,
  );
  LongitudinalFrequencyShiftFromAbsoluteVelocities {
    observed_frequency,
    real_frequency,
    wave_velocity,
    source_velocity,
    observer_velocity,
    law,
    solution,
    validator,
  }
});

impl Law for LongitudinalFrequencyShiftFromAbsoluteVelocities {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Frequency observed from a moving source by a moving observer, with relativistic correction."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.observed_frequency
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.real_frequency, &self.wave_velocity, &self.source_velocity, &self.observer_velocity]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn traits(&self) -> LawTraits {
    LawTraits::USES_CONSTANT
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.real_frequency, Quantity::from_base(1000.0, named::FREQUENCY))
      .with(&self.wave_velocity, Quantity::from_base(340.0, named::VELOCITY))
      .with(&self.source_velocity, Quantity::from_base(20.0, named::VELOCITY))
      .with(&self.observer_velocity, Quantity::from_base(-10.0, named::VELOCITY))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_observed_frequency(
  real_frequency: impl Into<Arg>,
  wave_velocity: impl Into<Arg>,
  source_velocity: impl Into<Arg>,
  observer_velocity: impl Into<Arg>,
) -> Result<Quantity, Error> {
  law::calculate(
    &*LAW,
    &[real_frequency.into(), wave_velocity.into(), source_velocity.into(), observer_velocity.into()],
  )
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
      "observed_frequency = real_frequency * (1 - observer_velocity / wave_velocity) / \
       (1 + source_velocity / wave_velocity) * \
       sqrt((1 - (source_velocity / speed_of_light)^2) / (1 - (observer_velocity / speed_of_light)^2))",
    );
  }

  #[test]
  fn test_stationary() {
    let result = calculate_observed_frequency(q("1000 Hz"), q("340 m / s"), q("0 m / s"), q("0 m / s")).unwrap();
    assert!(result.is_compatible_with(&named::FREQUENCY));
    assert_relative_eq!(result.value(), 1000.0, max_relative = 1e-9);
  }

  #[test]
  fn test_acoustic_source_moving_away() {
    let result = calculate_observed_frequency(q("1000 Hz"), q("340 m / s"), q("10 m / s"), q("0 m / s")).unwrap();
    assert_relative_eq!(result.convert_to_str("Hz").unwrap().value, 971.43, max_relative = 0.001);
  }

  #[test]
  fn test_acoustic_observer_approaching() {
    let result = calculate_observed_frequency(q("1000 Hz"), q("340 m / s"), q("0 m / s"), q("-34 m / s")).unwrap();
    assert_relative_eq!(result.value(), 1100.0, max_relative = 0.001);
  }

  #[test]
  fn test_light_source_receding() {
    let result = calculate_observed_frequency(q("100 MHz"), q("1 c"), q("0.6 c"), q("0 m / s")).unwrap();
    assert_relative_eq!(result.convert_to_str("MHz").unwrap().value, 50.0, max_relative = 1e-9);
  }

  #[test]
  fn test_bad_arguments() {
    let err = calculate_observed_frequency(q("1000 s"), q("340 m / s"), q("0 m / s"), q("0 m / s")).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "real_frequency"));
    let err = calculate_observed_frequency(q("1000 Hz"), 340.0, q("0 m / s"), q("0 m / s")).unwrap_err();
    assert!(matches!(err, Error::Type(ArgumentTypeError { ref parameter, .. }) if parameter == "wave_velocity"));
    let err = calculate_observed_frequency(q("1000 Hz"), q("340 m / s"), q("0 m"), q("0 m / s")).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "source_velocity"));
    let err = calculate_observed_frequency(q("1000 Hz"), q("340 m / s"), q("0 m / s"), q("0 s")).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "observer_velocity"));
  }

  #[test]
  fn test_equation_balances() {
    assert_balances(&*LAW);
  }
}
