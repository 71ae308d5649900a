//! Physical dimensions, named units, and conversions between them.

pub mod composite;
pub mod dimension;
pub mod parsing;
pub mod prefix;
pub mod tagged;
pub mod unit;
pub mod unit_with_power;

#[cfg(test)]
mod test_utils;

pub use composite::CompositeUnit;
pub use dimension::{Dimension, BaseDimension};
pub use unit::Unit;
pub use unit_with_power::UnitWithPower;
