
use super::dimension::Dimension;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A unit is a named quantity in some [`Dimension`] which can be
/// converted to the "base" unit of that dimension.
///
/// Units are always stored with reference to an underlying scalar
/// type, such as `f64`. The base unit of a dimension is the coherent
/// SI unit: metres, seconds, kilograms, kelvins, amperes, candelas,
/// and moles, and products and quotients thereof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<T> {
  name: String,
  dimension: Dimension,
  /// The amount of the base unit that is equal to one of this unit.
  amount_of_base: T,
}

impl<T> Unit<T> {
  /// Constructs a new unit, given the unit's name, dimension, and
  /// conversion factor to get to the base unit for the dimension.
  pub fn new(name: impl Into<String>, dimension: impl Into<Dimension>, amount_of_base: T) -> Self {
    Self {
      name: name.into(),
      dimension: dimension.into(),
      amount_of_base,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn dimension(&self) -> &Dimension {
    &self.dimension
  }

  pub fn amount_of_base(&self) -> &T {
    &self.amount_of_base
  }

  /// Produces a new unit of the same dimension, with the name and the
  /// conversion factor both transformed.
  pub fn augment<F, G>(self, name_fn: F, amount_fn: G) -> Self
  where F: FnOnce(String) -> String,
        G: FnOnce(T) -> T {
    Self {
      name: name_fn(self.name),
      dimension: self.dimension,
      amount_of_base: amount_fn(self.amount_of_base),
    }
  }

  /// Converts a scalar quantity from this unit to the base unit
  /// corresponding to this dimension.
  pub fn to_base<'a, U>(&'a self, amount: U) -> <U as Mul<&'a T>>::Output
  where U: Mul<&'a T> {
    amount * &self.amount_of_base
  }

  /// Converts a scalar quantity from the base unit of this dimension
  /// into this unit.
  pub fn from_base<'a, U>(&'a self, amount: U) -> <U as Div<&'a T>>::Output
  where U: Div<&'a T> {
    amount / &self.amount_of_base
  }
}

impl<T> Display for Unit<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::BaseDimension;
  use crate::units::test_utils::{centimeters, minutes};

  #[test]
  fn test_to_base() {
    assert_eq!(centimeters().to_base(250.0), 2.5);
    assert_eq!(minutes().to_base(2.0), 120.0);
  }

  #[test]
  fn test_from_base() {
    assert_eq!(centimeters().from_base(2.5), 250.0);
    assert_eq!(minutes().from_base(120.0), 2.0);
  }

  #[test]
  fn test_augment() {
    let unit = Unit::new("s", BaseDimension::Time, 1.0)
      .augment(|name| format!("k{}", name), |amount| amount * 1000.0);
    assert_eq!(unit.name(), "ks");
    assert_eq!(unit.amount_of_base(), &1000.0);
    assert_eq!(unit.dimension(), &Dimension::singleton(BaseDimension::Time));
  }

  #[test]
  fn test_display() {
    assert_eq!(centimeters().to_string(), "cm");
  }
}
