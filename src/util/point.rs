
//! Two-dimensional vectors, used where a law relates vector
//! quantities (such as force and displacement).

use super::angles::Radians;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::ops::Mul;

/// A vector in the plane, stored in Cartesian coordinates.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vector2D<T> {
  pub x: T,
  pub y: T,
}

impl<T> Vector2D<T> {
  pub fn new(x: T, y: T) -> Self {
    Self { x, y }
  }

  /// Rebases a vector given in polar coordinates (a magnitude and the
  /// angle it makes with the positive X axis) into Cartesian
  /// coordinates.
  pub fn from_polar(magnitude: T, angle: Radians<f64>) -> Self
  where T: Clone + Mul<f64, Output = T> {
    Self {
      x: magnitude.clone() * angle.cos(),
      y: magnitude * angle.sin(),
    }
  }

  pub fn map<U, F>(self, mut f: F) -> Vector2D<U>
  where F: FnMut(T) -> U {
    Vector2D { x: f(self.x), y: f(self.y) }
  }
}

impl<T: Display> Display for Vector2D<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
