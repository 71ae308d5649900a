
use crate::expr::evaluator::EvalError;
use crate::symbol::SymbolKind;
use crate::units::Dimension;

use thiserror::Error;

/// Errors returned by the `calculate_*` functions of every law.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  Units(#[from] UnitsError),
  #[error("{0}")]
  Type(#[from] ArgumentTypeError),
  #[error("{0}")]
  Arity(#[from] ArityError),
  #[error("{0}")]
  Eval(#[from] EvalError),
}

/// A quantity's dimension did not match the symbol it was given for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parameter '{parameter}' expects {expected}, got a quantity of dimension {actual}")]
pub struct UnitsError {
  pub parameter: String,
  pub expected: SymbolKind,
  pub actual: Dimension,
}

/// A bare number was given for a parameter that requires a
/// dimensioned quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parameter '{parameter}' expects a quantity of dimension {expected}, got a bare number")]
pub struct ArgumentTypeError {
  pub parameter: String,
  pub expected: Dimension,
}

/// A calculation was given the wrong number of arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected {expected} arguments, got {actual}")]
pub struct ArityError {
  pub expected: usize,
  pub actual: usize,
}
