//! Snell's law: a ray of light passing from one medium into another
//! is refracted, with the incoming ray, the refracted ray and the
//! normal to the boundary lying in one plane.
//!
//! Law: `incedence_refractive_index * sin(incedence_angle) = resulting_refractive_index * sin(refraction_angle)`.
//!
//! Both angles are measured from the normal to the boundary, and must
//! lie within `[-pi/2, pi/2]`: the incoming ray comes from the outer
//! medium and the refracted ray stays in the refracting one. The
//! light is monochromatic and each medium is uniform.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::evaluator::{EvalError, evaluate_scalar};
use crate::expr::function::{asin, sin};
use crate::expr::substitution::{Substitution, Value};
use crate::expr::var::constants::pi;
use crate::law::{self, Law, LawTraits, law_name};
use crate::quantity::Quantity;
use crate::symbol::Symbol;
use crate::util::angles::Radians;
use crate::validation::{Arg, Validator};

use once_cell::sync::Lazy;
use tracing::trace;

/// Slack allowed at either end of `[-pi/2, pi/2]` when checking
/// angles.
pub const ANGLE_TOLERANCE: f64 = 1e-12;

pub struct RefractionAngleFromEnvironments {
  pub incedence_refractive_index: Symbol,
  pub resulting_refractive_index: Symbol,
  pub incedence_angle: Symbol,
  pub refraction_angle: Symbol,
  law: Equation,
  solutions: [Expr; 2],
  validator: Validator,
}

pub static LAW: Lazy<RefractionAngleFromEnvironments> = Lazy::new(|| {
  let incedence_refractive_index = Symbol::dimensionless("incedence_refractive_index");
  let resulting_refractive_index = Symbol::dimensionless("resulting_refractive_index");
  let incedence_angle = Symbol::angle("incedence_angle");
  let refraction_angle = Symbol::angle("refraction_angle");
  let law = Equation::new(
    incedence_refractive_index.expr() * sin(&incedence_angle),
    resulting_refractive_index.expr() * sin(&refraction_angle),
  );
  let ratio = asin(incedence_refractive_index.expr() * sin(&incedence_angle) / resulting_refractive_index.expr());
  let solutions = [pi() - ratio.clone(), ratio];
  let validator = Validator::for_symbols(
    [&incedence_angle, &incedence_refractive_index, &resulting_refractive_index],
    &refraction_angle,
  );
  RefractionAngleFromEnvironments {
    incedence_refractive_index,
    resulting_refractive_index,
    incedence_angle,
    refraction_angle,
    law,
    solutions,
    validator,
  }
});

impl RefractionAngleFromEnvironments {
  /// Every closed-form solution for the refraction angle, in the
  /// order they are tried.
  pub fn solutions(&self) -> &[Expr] {
    &self.solutions
  }
}

impl Law for RefractionAngleFromEnvironments {
  fn name(&self) -> &'static str {
    law_name(module_path!())
  }

  fn description(&self) -> &'static str {
    "Refraction angle of a ray of light crossing the boundary between two media."
  }

  fn equation(&self) -> &Equation {
    &self.law
  }

  fn target(&self) -> &Symbol {
    &self.refraction_angle
  }

  fn inputs(&self) -> Vec<&Symbol> {
    vec![&self.incedence_angle, &self.incedence_refractive_index, &self.resulting_refractive_index]
  }

  fn validator(&self) -> &Validator {
    &self.validator
  }

  fn solution(&self) -> &Expr {
    &self.solutions[0]
  }

  fn traits(&self) -> LawTraits {
    LawTraits::MULTI_BRANCH
  }

  /// Tries each solution in turn, returning the first which lies
  /// within `[-pi/2, pi/2]`.
  ///
  /// # Panics
  ///
  /// Panics if the incidence angle lies outside `[-pi/2, pi/2]`, if
  /// either refractive index is not positive, or if no solution lies
  /// within `[-pi/2, pi/2]` (total internal reflection).
  fn solve(&self, inputs: &Substitution) -> Result<Quantity, EvalError> {
    if let Some(angle) = inputs.get(self.incedence_angle.var()).and_then(Value::as_scalar) {
      assert!(
        Radians(angle.value()).is_within_right_angle(ANGLE_TOLERANCE),
        "Incidence angle {} is outside of [-pi/2, pi/2]",
        angle.value(),
      );
    }
    for index in [&self.incedence_refractive_index, &self.resulting_refractive_index] {
      if let Some(n) = inputs.get(index.var()).and_then(Value::as_scalar) {
        assert!(n.value() > 0.0, "Refractive index {} must be positive, got {}", index.name(), n.value());
      }
    }
    for (branch, solution) in self.solutions.iter().enumerate() {
      let angle = evaluate_scalar(solution, inputs)?;
      if Radians(angle.value()).is_within_right_angle(ANGLE_TOLERANCE) {
        trace!(branch, angle = angle.value(), "selected refraction branch");
        return Ok(angle);
      }
      trace!(branch, angle = angle.value(), "rejected refraction branch");
    }
    panic!("No refraction angle within [-pi/2, pi/2] (total internal reflection)");
  }

  fn example(&self) -> Substitution {
    Substitution::new()
      .with(&self.incedence_angle, 0.5)
      .with(&self.incedence_refractive_index, 1.0)
      .with(&self.resulting_refractive_index, 1.33)
  }
}

pub fn print_law() -> String {
  LAW.print()
}

/// Refraction angle, in radians, for light arriving at
/// `incedence_angle` from a medium of index
/// `incedence_refractive_index` into one of index
/// `resulting_refractive_index`.
///
/// # Panics
///
/// See [`RefractionAngleFromEnvironments::solve`].
pub fn calculate_refraction_angle(
  incedence_angle: impl Into<Arg>,
  incedence_refractive_index: impl Into<Arg>,
  resulting_refractive_index: impl Into<Arg>,
) -> Result<Quantity, Error> {
  law::calculate(
    &*LAW,
    &[incedence_angle.into(), incedence_refractive_index.into(), resulting_refractive_index.into()],
  )
}
