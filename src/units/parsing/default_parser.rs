
use super::base::UnitParser;
use super::table::TableBasedParser;
use super::prefix::PrefixParser;
use crate::units::dimension::{BaseDimension, named};
use crate::units::unit::Unit;

use num::pow::Pow;
use once_cell::sync::Lazy;

use std::f64::consts::PI;

/// The parser used when constructing quantities from unit names,
/// such as in [`Quantity::parse`](crate::quantity::Quantity::parse).
pub static DEFAULT_PARSER: Lazy<PrefixParser<TableBasedParser<f64>>> = Lazy::new(default_parser);

fn fraction(n: i64, d: i64) -> f64 {
  n as f64 / d as f64
}

pub fn default_parser() -> PrefixParser<TableBasedParser<f64>> {
  PrefixParser::new_si(default_units_table())
}

/// Every named unit known to this crate, measured against the
/// coherent SI unit of its dimension.
pub fn default_units_table() -> TableBasedParser<f64> {
  use BaseDimension::*;
  let units = vec![
    // Length units
    Unit::new("m", Length, fraction(1, 1)),
    Unit::new("in", Length, fraction(254, 10_000)),
    Unit::new("ft", Length, fraction(3_048, 10_000)),
    Unit::new("yd", Length, fraction(9_144, 10_000)),
    Unit::new("mi", Length, fraction(1_609_344, 1_000)),
    Unit::new("au", Length, fraction(149_597_870_700, 1)),
    Unit::new("lyr", Length, fraction(9_460_730_472_580_800, 1)),
    Unit::new("pc", Length, fraction(30_856_804_799_935_500, 1)), // Parsec
    Unit::new("nmi", Length, fraction(1_852, 1)), // Nautical mile
    Unit::new("Ang", Length, fraction(1, 10_000_000_000)), // Angstrom
    // Time units
    Unit::new("s", Time, fraction(1, 1)),
    Unit::new("min", Time, fraction(60, 1)),
    Unit::new("hr", Time, fraction(3600, 1)),
    Unit::new("day", Time, fraction(86400, 1)),
    Unit::new("yr", Time, fraction(31557600, 1)),
    // Mass units. The kilogram is listed by name (as well as being
    // reachable through the "k" prefix) since it is the base unit.
    Unit::new("kg", Mass, fraction(1, 1)),
    Unit::new("g", Mass, fraction(1, 1_000)),
    Unit::new("lb", Mass, fraction(45_359_237, 100_000_000)),
    Unit::new("t", Mass, fraction(1_000, 1)), // Metric ton
    // Temperature units (relative)
    Unit::new("K", Temperature, fraction(1, 1)),
    // Electrical current units
    Unit::new("A", Current, fraction(1, 1)),
    // Luminous intensity units
    Unit::new("cd", LuminousIntensity, fraction(1, 1)),
    // Amount of substance units
    Unit::new("mol", AmountOfSubstance, fraction(1, 1)),
    // Angular units
    Unit::new("rad", named::DIMENSIONLESS, fraction(1, 1)),
    Unit::new("deg", named::DIMENSIONLESS, PI / 180.0),
    // Units with nontrivial dimension
    Unit::new("hect", Length.pow(2), fraction(10_000, 1)), // Hectare
    Unit::new("L", Length.pow(3), fraction(1, 1_000)), // Liter
    Unit::new("Hz", named::FREQUENCY, fraction(1, 1)),
    Unit::new("mph", named::VELOCITY, fraction(1397, 3125)), // Miles per hour
    Unit::new("kph", named::VELOCITY, fraction(5, 18)), // Kilometers per hour
    Unit::new("knot", named::VELOCITY, fraction(463, 900)),
    Unit::new("c", named::VELOCITY, fraction(299_792_458, 1)), // Speed of light
    Unit::new("ga", named::ACCELERATION, fraction(980_665, 100_000)), // "g" acceleration
    Unit::new("N", named::FORCE, fraction(1, 1)), // Newton
    Unit::new("dyn", named::FORCE, fraction(1, 100_000)), // Dyne
    Unit::new("J", named::ENERGY, fraction(1, 1)), // Joule
    Unit::new("eV", named::ENERGY, 1.602_176_634e-19), // Electronvolt
    Unit::new("cal", named::ENERGY, fraction(41_868, 10_000)), // Calorie
    Unit::new("W", named::POWER, fraction(1, 1)), // Watt
    Unit::new("hp", named::POWER, 745.699_871_582_270_2), // Mechanical horsepower
    Unit::new("Pa", named::FORCE / Length.pow(2), fraction(1, 1)), // Pascal
    Unit::new("C", named::CHARGE, fraction(1, 1)), // Coulomb
    Unit::new("V", named::VOLTAGE, fraction(1, 1)), // Volt
    Unit::new("ohm", named::IMPEDANCE, fraction(1, 1)),
    Unit::new("Ω", named::IMPEDANCE, fraction(1, 1)),
  ];
  TableBasedParser::new(units, ["m", "s", "kg", "K", "A", "cd", "mol"])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::Dimension;
  use crate::units::dimension::BaseDimension::*;

  use approx::assert_relative_eq;
  use num::One;

  #[test]
  fn test_default_parser_prefixed_units() {
    let parser = default_parser();
    let unit = parser.parse_unit("cm").unwrap();
    assert_eq!(unit.dimension(), &Dimension::from(Length));
    assert_relative_eq!(*unit.amount_of_base(), 0.01);
    let unit = parser.parse_unit("kJ").unwrap();
    assert_eq!(unit.dimension(), &named::ENERGY);
    assert_relative_eq!(*unit.amount_of_base(), 1000.0);
    let unit = parser.parse_unit("mg").unwrap();
    assert_relative_eq!(*unit.amount_of_base(), 1e-6);
  }

  #[test]
  fn test_default_parser_kilogram_is_base() {
    let parser = default_parser();
    let unit = parser.parse_unit("kg").unwrap();
    assert_eq!(unit.amount_of_base(), &1.0);
    assert_eq!(parser.base_unit(Mass), unit);
  }

  #[test]
  fn test_base_composite_unit() {
    let parser = default_parser();
    assert_eq!(parser.base_composite_unit(&named::MOMENTUM).to_string(), "kg m / s");
    assert_eq!(parser.base_composite_unit(&named::ACCELERATION).to_string(), "m / s^2");
  }

  #[test]
  fn test_angles_are_dimensionless() {
    let parser = default_parser();
    assert!(parser.parse_unit("rad").unwrap().dimension().is_one());
    assert!(parser.parse_unit("deg").unwrap().dimension().is_one());
    assert!(!parser.parse_unit("m").unwrap().dimension().is_one());
  }

  #[test]
  fn test_degree_amount() {
    let unit = default_parser().parse_unit("deg").unwrap();
    assert_relative_eq!(unit.to_base(180.0), PI);
  }
}
