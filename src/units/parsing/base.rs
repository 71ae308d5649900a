
use crate::units::{Unit, UnitWithPower, CompositeUnit};
use crate::units::dimension::{BaseDimension, Dimension};

use thiserror::Error;

/// Resolves a single unit name, such as `km` or `ohm`, into a unit.
/// Products and powers of units are handled one level up, by
/// [`parse_composite_unit`](super::parse_composite_unit).
pub trait UnitParser<T> {
  fn parse_unit(&self, input: &str) -> Result<Unit<T>, UnitParserError>;

  /// The coherent SI unit of a base dimension. Every conversion goes
  /// through these.
  fn base_unit(&self, dimension: BaseDimension) -> Unit<T>;

  /// The coherent SI unit of an arbitrary dimension, such as `kg m / s`
  /// for momentum.
  fn base_composite_unit(&self, dimension: &Dimension) -> CompositeUnit<T> {
    CompositeUnit::new(
      dimension.components()
        .map(|(base, exponent)| UnitWithPower { unit: self.base_unit(base), exponent }),
    )
  }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit '{input}'")]
pub struct UnitParserError {
  pub input: String,
}

impl UnitParserError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}

impl<'a, P, T> UnitParser<T> for &'a P
where P: UnitParser<T> + ?Sized {
  fn parse_unit(&self, input: &str) -> Result<Unit<T>, UnitParserError> {
    (**self).parse_unit(input)
  }

  fn base_unit(&self, dimension: BaseDimension) -> Unit<T> {
    (**self).base_unit(dimension)
  }
}
