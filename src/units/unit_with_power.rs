
use super::unit::Unit;
use super::composite::CompositeUnit;
use super::dimension::Dimension;

use num::pow::Pow;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A named unit raised to an integer power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitWithPower<T> {
  pub unit: Unit<T>,
  pub exponent: i64,
}

impl<T> UnitWithPower<T> {
  pub fn dimension(&self) -> Dimension {
    self.unit.dimension().pow(self.exponent)
  }

  /// Converts an amount in this unit to the base unit of its
  /// dimension. A negative exponent converts in the opposite
  /// direction, once per power.
  pub fn to_base<'a, U>(&'a self, amount: U) -> U
  where U: Mul<&'a T, Output = U>,
        U: Div<&'a T, Output = U> {
    self.repeat(amount, self.exponent)
  }

  pub fn from_base<'a, U>(&'a self, amount: U) -> U
  where U: Mul<&'a T, Output = U>,
        U: Div<&'a T, Output = U> {
    self.repeat(amount, - self.exponent)
  }

  fn repeat<'a, U>(&'a self, amount: U, times: i64) -> U
  where U: Mul<&'a T, Output = U>,
        U: Div<&'a T, Output = U> {
    (0..times.unsigned_abs()).fold(amount, |acc, _| {
      if times > 0 { self.unit.to_base(acc) } else { self.unit.from_base(acc) }
    })
  }
}

impl<T> From<Unit<T>> for UnitWithPower<T> {
  fn from(unit: Unit<T>) -> Self {
    UnitWithPower { unit, exponent: 1 }
  }
}

impl<T> Display for UnitWithPower<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.exponent == 1 {
      write!(f, "{}", self.unit)
    } else {
      write!(f, "{}^{}", self.unit, self.exponent)
    }
  }
}

impl<T, S> Mul<S> for UnitWithPower<T>
where S: Into<CompositeUnit<T>> {
  type Output = CompositeUnit<T>;

  fn mul(self, rhs: S) -> Self::Output {
    CompositeUnit::from(self) * rhs
  }
}

impl<T, S> Div<S> for UnitWithPower<T>
where S: Into<CompositeUnit<T>> {
  type Output = CompositeUnit<T>;

  fn div(self, rhs: S) -> Self::Output {
    CompositeUnit::from(self) / rhs
  }
}

impl<T> Pow<i64> for UnitWithPower<T> {
  type Output = UnitWithPower<T>;

  fn pow(self, rhs: i64) -> Self::Output {
    UnitWithPower { unit: self.unit, exponent: self.exponent * rhs }
  }
}
