
use super::dimension::Dimension;
use super::unit::Unit;
use super::unit_with_power::UnitWithPower;

use itertools::Itertools;
use num::One;
use num::pow::Pow;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A composite unit is a formal product and quotient of named units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeUnit<T> {
  // Sorted by unit name. Each name appears once, with a nonzero
  // exponent.
  elements: Vec<UnitWithPower<T>>,
}

impl<T> CompositeUnit<T> {
  /// The product of all of the inputs. Repeated units are merged and
  /// units whose powers cancel out are dropped.
  pub fn new(inputs: impl IntoIterator<Item = UnitWithPower<T>>) -> Self {
    let mut elements: Vec<_> = inputs.into_iter().collect();
    elements.sort_by(|a, b| a.unit.name().cmp(b.unit.name()));
    let elements = elements.into_iter()
      .coalesce(|a, b| {
        if a.unit.name() == b.unit.name() {
          Ok(UnitWithPower { unit: a.unit, exponent: a.exponent + b.exponent })
        } else {
          Err((a, b))
        }
      })
      .filter(|u| u.exponent != 0)
      .collect();
    Self { elements }
  }

  /// The empty product, written `1`.
  pub fn unitless() -> Self {
    Self::new([])
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// The reciprocal of `self`.
  pub fn recip(mut self) -> Self {
    for elem in &mut self.elements {
      elem.exponent = - elem.exponent;
    }
    self
  }

  pub fn to_base<'a, U>(&'a self, mut amount: U) -> U
  where U: Mul<&'a T, Output = U>,
        U: Div<&'a T, Output = U> {
    for elem in &self.elements {
      amount = elem.to_base(amount);
    }
    amount
  }

  pub fn from_base<'a, U>(&'a self, mut amount: U) -> U
  where U: Mul<&'a T, Output = U>,
        U: Div<&'a T, Output = U> {
    for elem in &self.elements {
      amount = elem.from_base(amount);
    }
    amount
  }

  /// The dimension of the composite unit.
  pub fn dimension(&self) -> Dimension {
    self.elements.iter()
      .map(UnitWithPower::dimension)
      .fold(Dimension::one(), |acc, dim| acc * dim)
  }
}

impl<T> From<Unit<T>> for CompositeUnit<T> {
  fn from(unit: Unit<T>) -> Self {
    CompositeUnit::new([UnitWithPower { unit, exponent: 1 }])
  }
}

impl<T> From<UnitWithPower<T>> for CompositeUnit<T> {
  fn from(unit: UnitWithPower<T>) -> Self {
    CompositeUnit::new([unit])
  }
}

impl<T> Display for CompositeUnit<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let (numerator, denominator): (Vec<_>, Vec<_>) =
      self.elements.iter().partition(|u| u.exponent > 0);
    if numerator.is_empty() {
      write!(f, "1")?;
    } else {
      write!(f, "{}", numerator.iter().join(" "))?;
    }
    if !denominator.is_empty() {
      let denominator = denominator.into_iter()
        .map(|u| if u.exponent == -1 { u.unit.to_string() } else { format!("{}^{}", u.unit, -u.exponent) })
        .join(" ");
      write!(f, " / {}", denominator)?;
    }
    Ok(())
  }
}

impl<T, S> Mul<S> for CompositeUnit<T>
where S: Into<CompositeUnit<T>> {
  type Output = CompositeUnit<T>;

  fn mul(self, rhs: S) -> Self::Output {
    let mut elements = self.elements;
    elements.extend(rhs.into().elements);
    Self::new(elements)
  }
}

impl<T, S> Div<S> for CompositeUnit<T>
where S: Into<CompositeUnit<T>> {
  type Output = CompositeUnit<T>;

  #[allow(clippy::suspicious_arithmetic_impl)] // Multiply by reciprocal is correct
  fn div(self, rhs: S) -> Self::Output {
    self * rhs.into().recip()
  }
}

impl<T> Pow<i64> for CompositeUnit<T> {
  type Output = CompositeUnit<T>;

  fn pow(self, rhs: i64) -> Self::Output {
    Self::new(self.elements.into_iter().map(|u| u.pow(rhs)))
  }
}

impl<T> One for CompositeUnit<T> {
  fn one() -> Self {
    CompositeUnit::unitless()
  }

  fn is_one(&self) -> bool {
    self.elements.is_empty()
  }
}
