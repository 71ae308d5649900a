
//! Sample units shared by the unit tests in this module tree.

use super::dimension::BaseDimension;
use super::unit::Unit;

pub fn meters() -> Unit<f64> {
  Unit::new("m", BaseDimension::Length, 1.0)
}

pub fn centimeters() -> Unit<f64> {
  Unit::new("cm", BaseDimension::Length, 0.01)
}

pub fn kilometers() -> Unit<f64> {
  Unit::new("km", BaseDimension::Length, 1000.0)
}

pub fn seconds() -> Unit<f64> {
  Unit::new("s", BaseDimension::Time, 1.0)
}

pub fn minutes() -> Unit<f64> {
  Unit::new("min", BaseDimension::Time, 60.0)
}

pub fn kilograms() -> Unit<f64> {
  Unit::new("kg", BaseDimension::Mass, 1.0)
}
