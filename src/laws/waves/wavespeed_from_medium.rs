//! Speed of an electromagnetic wave in a medium, given the medium's
//! refractive index.
//!
//! Law: `wave_speed_in_medium = speed_of_light / refraction_factor`.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::substitution::Substitution;
use crate::expr::var::constants::speed_of_light;
use crate::law::{self, Law, LawTraits, law_name};
use crate::quantity::Quantity;
use crate::symbol::Symbol;
use crate::units::dimension::named;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;

pub struct WavespeedFromMedium {
  pub wave_speed_in_medium: Symbol,
  pub refraction_factor: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<WavespeedFromMedium> = Lazy::new(|| {
  let wave_speed_in_medium = Symbol::dimensioned("wave_speed_in_medium", named::VELOCITY);
  let refraction_factor = Symbol::dimensionless("refraction_factor");
  let law = Equation::new(&wave_speed_in_medium, speed_of_light() / refraction_factor.expr());
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&refraction_factor], &wave_speed_in_medium);
  WavespeedFromMedium { wave_speed_in_medium, refraction_factor, law, solution, validator }
});

impl Law for WavespeedFromMedium {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Light travels through a medium at the speed of light divided by the medium's refractive index."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.wave_speed_in_medium
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.refraction_factor]
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
    Substitution::new().with(&self.refraction_factor, 1.33)
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_wavespeed(refraction_factor: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[refraction_factor.into()])
}
