
//! Angle newtypes. Every calculation in this crate works in radians;
//! degrees only appear at the edges, when a caller prefers them.

use num::{Float, FromPrimitive};
use num::traits::FloatConst;

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub, Mul, Div, Neg};

/// A number representing degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<T>(pub T);

/// A number representing radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<T>(pub T);

impl<T> Degrees<T> {
  pub fn into_radians(self) -> Radians<T>
  where T: FloatConst + Mul<Output=T> + Div<Output=T> + FromPrimitive {
    // unwrap: 180 is representable in every float type.
    Radians(self.0 * T::PI() / T::from_i32(180).unwrap())
  }
}

impl<T> Radians<T> {
  pub fn into_degrees(self) -> Degrees<T>
  where T: FloatConst + Mul<Output=T> + Div<Output=T> + FromPrimitive {
    // unwrap: 180 is representable in every float type.
    Degrees(self.0 * T::from_i32(180).unwrap() / T::PI())
  }
}

impl<T: Float + FloatConst> Radians<T> {
  pub fn cos(self) -> T {
    self.0.cos()
  }

  pub fn sin(self) -> T {
    self.0.sin()
  }

  /// Whether the angle lies in the closed interval `[-pi/2, pi/2]`,
  /// allowing for `tolerance` of slack at either end. `NaN` is never
  /// within the interval.
  pub fn is_within_right_angle(self, tolerance: T) -> bool {
    let bound = T::FRAC_PI_2() + tolerance;
    self.0 >= -bound && self.0 <= bound
  }
}

impl<T: Add<Output = T>> Add for Radians<T> {
  type Output = Radians<T>;

  fn add(self, rhs: Self) -> Self::Output {
    Radians(self.0 + rhs.0)
  }
}

impl<T: Sub<Output = T>> Sub for Radians<T> {
  type Output = Radians<T>;

  fn sub(self, rhs: Self) -> Self::Output {
    Radians(self.0 - rhs.0)
  }
}

impl<T: Neg<Output = T>> Neg for Radians<T> {
  type Output = Radians<T>;

  fn neg(self) -> Self::Output {
    Radians(-self.0)
  }
}

impl<T: Display> Display for Radians<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} rad", self.0)
  }
}

impl<T: Display> Display for Degrees<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} deg", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  use std::f64::consts::{PI, FRAC_PI_2, FRAC_PI_4};

  #[test]
  fn test_degrees_to_radians() {
    assert_abs_diff_eq!(Degrees(180.0).into_radians().0, PI);
    assert_abs_diff_eq!(Degrees(45.0).into_radians().0, FRAC_PI_4);
    assert_abs_diff_eq!(Degrees(-90.0).into_radians().0, -FRAC_PI_2);
  }

  #[test]
  fn test_radians_to_degrees() {
    assert_abs_diff_eq!(Radians(PI).into_degrees().0, 180.0);
    assert_abs_diff_eq!(Radians(FRAC_PI_4).into_degrees().0, 45.0, epsilon = 1e-12);
  }

  #[test]
  fn test_within_right_angle() {
    assert!(Radians(0.0).is_within_right_angle(0.0));
    assert!(Radians(FRAC_PI_2).is_within_right_angle(0.0));
    assert!(Radians(-FRAC_PI_2).is_within_right_angle(0.0));
    assert!(!Radians(PI).is_within_right_angle(1e-12));
    assert!(!Radians(FRAC_PI_2 + 1e-6).is_within_right_angle(1e-12));
    assert!(Radians(FRAC_PI_2 + 1e-13).is_within_right_angle(1e-12));
    assert!(!Radians(f64::NAN).is_within_right_angle(1e-12));
  }

  #[test]
  fn test_radians_arithmetic() {
    assert_eq!(Radians(1.0) + Radians(2.0), Radians(3.0));
    assert_eq!(Radians(1.0) - Radians(2.0), Radians(-1.0));
    assert_eq!(-Radians(1.5), Radians(-1.5));
  }
}
