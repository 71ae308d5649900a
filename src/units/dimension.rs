
use crate::util::zip_with;

use num::One;
use num::pow::Pow;
use serde::{Serialize, Deserialize};

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display};

/// A dimension is a formal product and quotient of zero or more
/// [`BaseDimension`] values.
///
/// Two quantities are compatible precisely when their dimensions are
/// equal, that is, when every base dimension appears to the same
/// power in both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension {
  dims: [i64; NDIMS],
}

/// Dimensions available for units to represent. Every unit represents
/// a formal product or quotient of zero or more dimensions.
///
/// These are simply the seven base SI units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
  Length,
  Time,
  Mass,
  Temperature,
  Current,
  LuminousIntensity,
  AmountOfSubstance,
}

pub const NDIMS: usize = 7;

impl Dimension {
  /// Constructs a dimension from its powers, in the order of
  /// [`BaseDimension::ALL`].
  pub const fn from_powers(dims: [i64; NDIMS]) -> Self {
    Self { dims }
  }

  pub fn singleton(base: BaseDimension) -> Self {
    let mut dims = [0; NDIMS];
    dims[base.dimension_index()] = 1;
    Self { dims }
  }

  pub fn get(&self, base: BaseDimension) -> i64 {
    self.dims[base.dimension_index()]
  }

  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i64)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.dims.iter().copied())
      .filter(|(_, x)| *x != 0)
  }

  /// Whether a quantity of this dimension is a plain number (or an
  /// angle, which is also dimensionless).
  pub fn is_dimensionless(&self) -> bool {
    self.is_one()
  }

  pub fn recip(&self) -> Self {
    Dimension { dims: self.dims.map(|x| - x) }
  }

  /// Returns the `n`th root of `self`, provided every power is
  /// divisible by `n`. Otherwise, returns `None`.
  ///
  /// The zeroth root of any dimension is `None`.
  pub fn checked_root(&self, n: i64) -> Option<Self> {
    if n == 0 || self.dims.iter().any(|x| x % n != 0) {
      return None;
    }
    Some(Dimension { dims: self.dims.map(|x| x / n) })
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Mass,
    BaseDimension::Temperature,
    BaseDimension::Current,
    BaseDimension::LuminousIntensity,
    BaseDimension::AmountOfSubstance,
  ];

  fn dimension_index(self) -> usize {
    match self {
      BaseDimension::Length => 0,
      BaseDimension::Time => 1,
      BaseDimension::Mass => 2,
      BaseDimension::Temperature => 3,
      BaseDimension::Current => 4,
      BaseDimension::LuminousIntensity => 5,
      BaseDimension::AmountOfSubstance => 6,
    }
  }
}

/// Named dimension categories used when declaring physical symbols.
pub mod named {
  use super::Dimension;

  pub const DIMENSIONLESS: Dimension = Dimension::from_powers([0, 0, 0, 0, 0, 0, 0]);
  pub const LENGTH: Dimension = Dimension::from_powers([1, 0, 0, 0, 0, 0, 0]);
  pub const TIME: Dimension = Dimension::from_powers([0, 1, 0, 0, 0, 0, 0]);
  pub const MASS: Dimension = Dimension::from_powers([0, 0, 1, 0, 0, 0, 0]);
  pub const TEMPERATURE: Dimension = Dimension::from_powers([0, 0, 0, 1, 0, 0, 0]);
  pub const CURRENT: Dimension = Dimension::from_powers([0, 0, 0, 0, 1, 0, 0]);
  pub const AREA: Dimension = Dimension::from_powers([2, 0, 0, 0, 0, 0, 0]);
  pub const VELOCITY: Dimension = Dimension::from_powers([1, -1, 0, 0, 0, 0, 0]);
  pub const ACCELERATION: Dimension = Dimension::from_powers([1, -2, 0, 0, 0, 0, 0]);
  pub const FREQUENCY: Dimension = Dimension::from_powers([0, -1, 0, 0, 0, 0, 0]);
  pub const MOMENTUM: Dimension = Dimension::from_powers([1, -1, 1, 0, 0, 0, 0]);
  pub const FORCE: Dimension = Dimension::from_powers([1, -2, 1, 0, 0, 0, 0]);
  pub const ENERGY: Dimension = Dimension::from_powers([2, -2, 1, 0, 0, 0, 0]);
  pub const POWER: Dimension = Dimension::from_powers([2, -3, 1, 0, 0, 0, 0]);
  pub const CHARGE: Dimension = Dimension::from_powers([0, 1, 0, 0, 1, 0, 0]);
  pub const VOLTAGE: Dimension = Dimension::from_powers([2, -3, 1, 0, -1, 0, 0]);
  pub const IMPEDANCE: Dimension = Dimension::from_powers([2, -3, 1, 0, -2, 0, 0]);
}

impl From<BaseDimension> for Dimension {
  fn from(base: BaseDimension) -> Self {
    Dimension::singleton(base)
  }
}

impl Pow<i64> for &Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension {
      dims: self.dims.map(|x| x * power),
    }
  }
}

impl Pow<i64> for Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    (&self).pow(power)
  }
}

impl Pow<i64> for BaseDimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension::singleton(self).pow(power)
  }
}

impl Mul for Dimension {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a + b),
    }
  }
}

impl Mul<BaseDimension> for Dimension {
  type Output = Self;

  fn mul(self, rhs: BaseDimension) -> Self {
    self * Dimension::singleton(rhs)
  }
}

impl Div for Dimension {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a - b),
    }
  }
}

impl Div<BaseDimension> for Dimension {
  type Output = Self;

  fn div(self, rhs: BaseDimension) -> Self {
    self / Dimension::singleton(rhs)
  }
}

impl Mul for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) * Dimension::singleton(rhs)
  }
}

impl Mul<Dimension> for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Dimension) -> Dimension {
    Dimension::singleton(self) * rhs
  }
}

impl Div for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) / Dimension::singleton(rhs)
  }
}

impl Div<Dimension> for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Dimension) -> Dimension {
    Dimension::singleton(self) / rhs
  }
}

impl One for Dimension {
  fn one() -> Self {
    Self { dims: [0; NDIMS] }
  }

  fn is_one(&self) -> bool {
    self.dims.iter().all(|x| *x == 0)
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::Current => write!(f, "current"),
      BaseDimension::LuminousIntensity => write!(f, "intensity"),
      BaseDimension::AmountOfSubstance => write!(f, "amount"),
    }
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut numerator: Vec<String> = Vec::new();
    let mut denominator: Vec<String> = Vec::new();
    for (dim, power) in self.components() {
      match power {
        1 => numerator.push(dim.to_string()),
        -1 => denominator.push(dim.to_string()),
        power if power > 0 => numerator.push(format!("{}^{}", dim, power)),
        power => denominator.push(format!("{}^{}", dim, -power)),
      }
    }
    if numerator.is_empty() {
      write!(f, "1")?;
    } else {
      write!(f, "{}", numerator.join(" "))?;
    }
    if !denominator.is_empty() {
      write!(f, " / {}", denominator.join(" "))?;
    }
    Ok(())
  }
}
