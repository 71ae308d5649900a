//! The projection of a vector onto an axis is its length times the
//! cosine of the angle between the vector and the axis.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::function::cos;
use crate::expr::substitution::Substitution;
use crate::law::{self, Law, law_name};
use crate::quantity::Quantity;
use crate::symbol::Symbol;
use crate::units::dimension::named;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;

pub struct PlanarProjectionIsCosine {
  pub projection: Symbol,
  pub vector_length: Symbol,
  pub vector_angle: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<PlanarProjectionIsCosine> = Lazy::new(|| {
  let projection = Symbol::dimensioned("projection", named::LENGTH);
  let vector_length = Symbol::dimensioned("vector_length", named::LENGTH);
  let vector_angle = Symbol::angle("vector_angle");
  let law = Equation::new(&projection, vector_length.expr() * cos(&vector_angle));
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&vector_length, &vector_angle], &projection);
  PlanarProjectionIsCosine { projection, vector_length, vector_angle, law, solution, validator }
});

impl Law for PlanarProjectionIsCosine {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Projection of a vector onto an axis is its length times the cosine of its angle to the axis."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.projection
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.vector_length, &self.vector_angle]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.vector_length, Quantity::from_base(4.0, named::LENGTH))
      .with(&self.vector_angle, 0.6)
  }
}

pub fn print_law() -> String {
  LAW.print()
}

/// `vector_angle` is in radians when given as a bare number.
pub fn calculate_projection(vector_length: impl Into<Arg>, vector_angle: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[vector_length.into(), vector_angle.into()])
}
