
//! Dimensioned numerical values.

use crate::units::{CompositeUnit, Dimension};
use crate::units::parsing::{DEFAULT_PARSER, UnitParser, UnitParserError, parse_composite_unit};
use crate::units::tagged::Tagged;

use approx::{AbsDiffEq, RelativeEq};
use num::One;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::ops::{Mul, Div, Neg};
use std::str::FromStr;

static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(.*)$").unwrap()
});

/// A numerical value, stored in SI base units and tagged with its
/// physical dimension.
///
/// Quantities are never mutated. Every arithmetic operation and every
/// conversion produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
  value: f64,
  dimension: Dimension,
}

/// Two quantities were combined in a way that requires their
/// dimensions to agree, but they did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Incompatible dimensions: {left} and {right}")]
pub struct DimensionMismatch {
  pub left: Dimension,
  pub right: Dimension,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuantityError {
  #[error("Failed to parse '{0}' as a number")]
  InvalidNumber(String),
  #[error("{0}")]
  InvalidUnit(#[from] UnitParserError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
  #[error("{0}")]
  InvalidUnit(#[from] UnitParserError),
  #[error("Cannot convert a quantity of dimension {actual} to {target}")]
  Incompatible { actual: Dimension, target: Dimension },
}

impl Quantity {
  /// A quantity of `value` units of `unit`.
  pub fn new(value: f64, unit: &CompositeUnit<f64>) -> Self {
    Self::from_base(unit.to_base(value), unit.dimension())
  }

  /// A quantity whose value is already expressed in SI base units.
  pub fn from_base(value: f64, dimension: Dimension) -> Self {
    Self { value, dimension }
  }

  pub fn dimensionless(value: f64) -> Self {
    Self::from_base(value, Dimension::one())
  }

  /// Parses a decimal number followed by an optional composite unit,
  /// such as `"20000 J"`, `"2000kg"` or `"9.8 m/s^2"`, using the
  /// default unit table. See [`parse_composite_unit`] for the unit
  /// grammar.
  pub fn parse(input: &str) -> Result<Self, ParseQuantityError> {
    let input = input.trim();
    let invalid_number = || {
      let token = input.split_whitespace().next().unwrap_or(input);
      ParseQuantityError::InvalidNumber(token.to_owned())
    };
    let captures = QUANTITY_RE.captures(input).ok_or_else(invalid_number)?;
    let number = captures.get(1).map_or("", |m| m.as_str());
    let unit = captures.get(2).map_or("", |m| m.as_str());
    let value: f64 = number.parse().map_err(|_| invalid_number())?;
    let unit = parse_composite_unit(&*DEFAULT_PARSER, unit)?;
    Ok(Self::new(value, &unit))
  }

  /// The value, in SI base units.
  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn dimension(&self) -> &Dimension {
    &self.dimension
  }

  pub fn is_compatible_with(&self, dimension: &Dimension) -> bool {
    &self.dimension == dimension
  }

  pub fn is_dimensionless(&self) -> bool {
    self.dimension.is_one()
  }

  /// Expresses this quantity in terms of `unit`, failing if the
  /// dimensions disagree.
  pub fn convert_to(&self, unit: &CompositeUnit<f64>) -> Result<Tagged<f64, f64>, ConversionError> {
    let target = unit.dimension();
    if target != self.dimension {
      return Err(ConversionError::Incompatible { actual: self.dimension, target });
    }
    Ok(Tagged::from_base(unit.clone(), self.value))
  }

  /// As [`Quantity::convert_to`], but parses the target unit with the
  /// default unit table first.
  pub fn convert_to_str(&self, unit: &str) -> Result<Tagged<f64, f64>, ConversionError> {
    let unit = parse_composite_unit(&*DEFAULT_PARSER, unit)?;
    self.convert_to(&unit)
  }

  pub fn checked_add(self, other: Quantity) -> Result<Quantity, DimensionMismatch> {
    self.require_same_dimension(&other)?;
    Ok(Self::from_base(self.value + other.value, self.dimension))
  }

  pub fn checked_sub(self, other: Quantity) -> Result<Quantity, DimensionMismatch> {
    self.require_same_dimension(&other)?;
    Ok(Self::from_base(self.value - other.value, self.dimension))
  }

  pub fn powi(self, exponent: i64) -> Quantity {
    let value = i32::try_from(exponent)
      .map(|e| self.value.powi(e))
      .unwrap_or_else(|_| self.value.powf(exponent as f64));
    Self::from_base(value, num::pow::Pow::pow(&self.dimension, exponent))
  }

  /// The square root of `self`, provided every power in its dimension
  /// is even.
  pub fn checked_sqrt(self) -> Option<Quantity> {
    let dimension = self.dimension.checked_root(2)?;
    Some(Self::from_base(self.value.sqrt(), dimension))
  }

  /// Applies `f` to the value of a dimensionless quantity. Returns
  /// `None` if `self` has a nontrivial dimension.
  pub fn map_dimensionless<F>(self, f: F) -> Option<Quantity>
  where F: FnOnce(f64) -> f64 {
    if self.is_dimensionless() {
      Some(Self::dimensionless(f(self.value)))
    } else {
      None
    }
  }

  fn require_same_dimension(&self, other: &Quantity) -> Result<(), DimensionMismatch> {
    if self.dimension == other.dimension {
      Ok(())
    } else {
      Err(DimensionMismatch { left: self.dimension, right: other.dimension })
    }
  }
}

impl FromStr for Quantity {
  type Err = ParseQuantityError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Quantity::parse(s)
  }
}

impl From<f64> for Quantity {
  fn from(value: f64) -> Self {
    Quantity::dimensionless(value)
  }
}

impl From<Tagged<f64, f64>> for Quantity {
  fn from(tagged: Tagged<f64, f64>) -> Self {
    let dimension = tagged.unit.dimension();
    Quantity::from_base(tagged.into_base(), dimension)
  }
}

impl Mul for Quantity {
  type Output = Quantity;

  fn mul(self, rhs: Quantity) -> Quantity {
    Quantity::from_base(self.value * rhs.value, self.dimension * rhs.dimension)
  }
}

impl Mul<f64> for Quantity {
  type Output = Quantity;

  fn mul(self, rhs: f64) -> Quantity {
    Quantity::from_base(self.value * rhs, self.dimension)
  }
}

impl Div for Quantity {
  type Output = Quantity;

  fn div(self, rhs: Quantity) -> Quantity {
    Quantity::from_base(self.value / rhs.value, self.dimension / rhs.dimension)
  }
}

impl Div<f64> for Quantity {
  type Output = Quantity;

  fn div(self, rhs: f64) -> Quantity {
    Quantity::from_base(self.value / rhs, self.dimension)
  }
}

impl Neg for Quantity {
  type Output = Quantity;

  fn neg(self) -> Quantity {
    Quantity::from_base(- self.value, self.dimension)
  }
}

impl AbsDiffEq for Quantity {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    f64::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.dimension == other.dimension && self.value.abs_diff_eq(&other.value, epsilon)
  }
}

impl RelativeEq for Quantity {
  fn default_max_relative() -> f64 {
    f64::default_max_relative()
  }

  fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
    self.dimension == other.dimension && self.value.relative_eq(&other.value, epsilon, max_relative)
  }
}

/// Displays the value in the coherent SI unit of its dimension, such
/// as `20000 kg m / s`.
impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let unit = DEFAULT_PARSER.base_composite_unit(&self.dimension);
    write!(f, "{}", Tagged::new(self.value, unit))
  }
}
