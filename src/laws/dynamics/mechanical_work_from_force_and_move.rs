//! Mechanical work is the scalar product of the force applied to a
//! body and the displacement it causes.
//!
//! Law: `work = dot(force, distance)`.
//!
//! Both vectors lie in a plane and are supplied in polar form, as a
//! magnitude and the angle the vector makes with a shared axis. They
//! are rebased to Cartesian coordinates before the product is taken.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::function::dot;
use crate::expr::substitution::Substitution;
use crate::law::{self, Law, LawTraits, law_name};
use crate::quantity::Quantity;
use crate::symbol::{Symbol, SymbolKind};
use crate::units::dimension::named;
use crate::util::angles::Radians;
use crate::util::point::Vector2D;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;

pub struct MechanicalWorkFromForceAndMove {
  pub work: Symbol,
  pub force: Symbol,
  pub distance: Symbol,
  law: Equation,
  solution: Expr,
  validator: Validator,
}

pub static LAW: Lazy<MechanicalWorkFromForceAndMove> = Lazy::new(|| {
  let work = Symbol::dimensioned("work", named::ENERGY);
  let force = Symbol::dimensioned("force", named::FORCE);
  let distance = Symbol::dimensioned("distance", named::LENGTH);
  let law = Equation::new(&work, dot(&force, &distance));
  let solution = law.rhs().clone();
  let validator = Validator::new(
    vec![
      (force.name().to_owned(), force.kind()),
      (distance.name().to_owned(), distance.kind()),
      (String::from("force_angle"), SymbolKind::Angle),
      (String::from("distance_angle"), SymbolKind::Angle),
    ],
    (work.name().to_owned(), work.kind()),
  );
  MechanicalWorkFromForceAndMove { work, force, distance, law, solution, validator }
});

impl Law for MechanicalWorkFromForceAndMove {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Mechanical work is the scalar product of force and displacement."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.work
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.force, &self.distance]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solution
  }

  fn traits(&self) -> LawTraits {
    LawTraits::VECTOR_INPUTS
  }

  /// Takes the magnitudes followed by the angles, and binds each
  /// vector in Cartesian form.
  fn bind_inputs(&self, values: &[Quantity]) -> Substitution {
    let [force, distance, force_angle, distance_angle] = values else {
      panic!("Expected 4 values for {}, got {}", self.name(), values.len());
    };
    Substitution::new()
      .with(&self.force, Vector2D::from_polar(*force, Radians(force_angle.value())))
      .with(&self.distance, Vector2D::from_polar(*distance, Radians(distance_angle.value())))
  }

  fn example(&self) -> Substitution {
    let force = Quantity::from_base(10.0, named::FORCE);
    let distance = Quantity::from_base(3.0, named::LENGTH);
    Substitution::new()
      .with(&self.force, Vector2D::from_polar(force, Radians(0.3)))
      .with(&self.distance, Vector2D::from_polar(distance, Radians(1.2)))
  }
}

pub fn print_law() -> String {
  LAW.print()
}

/// Work done by a force of magnitude `force` at angle `force_angle`,
/// moving a body by `distance` at angle `distance_angle`. Angles may
/// be bare numbers (radians) or dimensionless quantities such as
/// `30 deg`.
pub fn calculate_work(
  force: impl Into<Arg>,
  distance: impl Into<Arg>,
  force_angle: impl Into<Arg>,
  distance_angle: impl Into<Arg>,
) -> Result<Quantity, Error> {
  law::calculate(
    &*LAW,
    &[force.into(), distance.into(), force_angle.into(), distance_angle.into()],
  )
}
