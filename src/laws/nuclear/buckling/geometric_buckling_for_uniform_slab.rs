//! Geometric buckling of a bare slab reactor of uniform composition.
//!
//! Law: `geometric_buckling_squared = (pi / slab_width)^2`.
//!
//! The slab is infinite in two directions and `slab_width` thick in
//! the third; the extrapolation distance is neglected.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::substitution::Substitution;
use crate::expr::var::constants::pi;
use crate::law::{self, Law, law_name};
use crate::quantity::Quantity;
use crate::symbol::Symbol;
use crate::units::dimension::named;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;
use num::pow::Pow;

pub struct GeometricBucklingForUniformSlab {
  pub geometric_buckling_squared: Symbol,
  pub slab_width: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<GeometricBucklingForUniformSlab> = Lazy::new(|| {
  let geometric_buckling_squared = Symbol::dimensioned("geometric_buckling_squared", named::AREA.recip());
  let slab_width = Symbol::dimensioned("slab_width", named::LENGTH);
  let law = Equation::new(&geometric_buckling_squared, (pi() / slab_width.expr()).pow(2_i64));
  let solution = law.rhs().clone();
  let validator = Validator::for_symbols([&slab_width], &geometric_buckling_squared);
  GeometricBucklingForUniformSlab { geometric_buckling_squared, slab_width, law, solution, validator }
});

impl Law for GeometricBucklingForUniformSlab {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Squared geometric buckling of a uniform slab reactor of the given width."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.geometric_buckling_squared
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.slab_width]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn example(&self) -> Substitution {
    Substitution::new().with(&self.slab_width, Quantity::from_base(2.0, named::LENGTH))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

pub fn calculate_geometric_buckling_squared(slab_width: impl Into<Arg>) -> Result<Quantity, Error> {
  law::calculate(&*LAW, &[slab_width.into()])
}
