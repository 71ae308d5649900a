
//! The common shape of every law and definition in the catalog.

use crate::error::Error;
use crate::expr::Expr;
use crate::expr::algebra::formula::Equation;
use crate::expr::evaluator::{EvalError, evaluate_scalar};
use crate::expr::substitution::Substitution;
use crate::expr::var::constants::is_constant;
use crate::quantity::Quantity;
use crate::symbol::{Symbol, SymbolKind};
use crate::validation::{Arg, Validator};

use bitflags::bitflags;
use serde::{Serialize, Deserialize};
use tracing::debug;

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct LawTraits: u32 {
    /// Some parameters are vectors, supplied as a magnitude and an
    /// angle.
    const VECTOR_INPUTS = 0b0001;
    /// The equation has several closed-form solutions, chosen between
    /// by a domain constraint.
    const MULTI_BRANCH = 0b0010;
    /// The solution refers to a physical constant, which is not a
    /// parameter.
    const USES_CONSTANT = 0b0100;
    /// The equation defines a quantity in terms of a derivative.
    const DEFINITION = 0b1000;
  }
}

/// A physical law: a set of symbols related by one equation, solved
/// in closed form for one of them.
pub trait Law: Send + Sync {
  /// The module path of the law, such as
  /// `laws::dynamics::impulse_from_mass_and_speed`.
  fn name(&self) -> &'static str;

  fn description(&self) -> &'static str;

  fn equation(&self) -> &Equation;

  /// The symbol the law is solved for.
  fn target(&self) -> &Symbol;

  /// The symbols whose values are supplied to the calculation, in the
  /// order the calculation accepts them.
  fn inputs(&self) -> Vec<&Symbol>;

  fn validator(&self) -> &Validator;

  /// The canonical closed-form solution of the equation for the
  /// target.
  fn solution(&self) -> &Expr;

  /// Representative values for every input, used for worked examples.
  fn example(&self) -> Substitution;

  fn traits(&self) -> LawTraits {
    LawTraits::empty()
  }

  /// Binds checked argument values, in the validator's order, to the
  /// symbols of the solution.
  fn bind_inputs(&self, values: &[Quantity]) -> Substitution {
    self.inputs().into_iter().zip(values.iter().copied()).collect()
  }

  /// Evaluates the solution for the given input values.
  fn solve(&self, inputs: &Substitution) -> Result<Quantity, EvalError> {
    evaluate_scalar(self.solution(), inputs)
  }

  /// Evaluates `lhs - rhs` of the equation for values of every
  /// symbol, target included.
  fn residual(&self, bindings: &Substitution) -> Result<Quantity, EvalError> {
    self.equation().residual(bindings)
  }

  /// Every symbol of the law, target first.
  fn symbols(&self) -> Vec<&Symbol> {
    let mut symbols = vec![self.target()];
    symbols.extend(self.inputs());
    symbols
  }

  /// The last segment of [`Law::name`].
  fn short_name(&self) -> &'static str {
    let name = self.name();
    name.rsplit("::").next().unwrap_or(name)
  }

  /// A human-readable rendering of the equation.
  fn print(&self) -> String {
    self.equation().to_string()
  }

  fn summary(&self) -> LawSummary {
    LawSummary {
      name: self.name().to_owned(),
      description: self.description().to_owned(),
      equation: self.print(),
      target: self.target().name().to_owned(),
      solution: self.solution().to_string(),
      symbols: self.symbols().into_iter().map(SymbolSummary::from).collect(),
      traits: self.traits().iter_names().map(|(name, _)| name.to_owned()).collect(),
      constants: self.equation().free_vars().into_iter()
        .filter(is_constant)
        .map(String::from)
        .collect(),
    }
  }
}

/// A serializable description of a law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawSummary {
  pub name: String,
  pub description: String,
  pub equation: String,
  pub target: String,
  pub solution: String,
  pub symbols: Vec<SymbolSummary>,
  pub traits: Vec<String>,
  /// Named constants the equation refers to, such as `pi`.
  pub constants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSummary {
  pub name: String,
  pub kind: SymbolKind,
  pub dimension: String,
}

impl From<&Symbol> for SymbolSummary {
  fn from(symbol: &Symbol) -> Self {
    SymbolSummary {
      name: symbol.name().to_owned(),
      kind: symbol.kind(),
      dimension: symbol.kind().to_string(),
    }
  }
}

/// Strips the crate name from a module path.
pub(crate) fn law_name(module_path: &'static str) -> &'static str {
  module_path.split_once("::").map_or(module_path, |(_, rest)| rest)
}

/// Validates `args` against the law's inputs, solves, and validates
/// the result. This is the body of every `calculate_*` function.
pub fn calculate<L>(law: &L, args: &[Arg]) -> Result<Quantity, Error>
where L: Law + ?Sized {
  let values = law.validator().check_inputs(args)?;
  let bindings = law.bind_inputs(&values);
  let result = law.solve(&bindings)?;
  let result = law.validator().check_output(result)?;
  debug!(law = law.name(), %result, "calculated {}", law.target().name());
  Ok(result)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_law_name() {
    assert_eq!(law_name("physlaw::laws::waves::wavespeed_from_medium"), "laws::waves::wavespeed_from_medium");
    assert_eq!(law_name("physlaw"), "physlaw");
  }

  #[test]
  fn test_law_traits_names() {
    let traits = LawTraits::VECTOR_INPUTS | LawTraits::DEFINITION;
    let names: Vec<_> = traits.iter_names().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["VECTOR_INPUTS", "DEFINITION"]);
  }
}
