
//! SI metric prefixes.

use super::unit::Unit;

/// A metric prefix, such as `k` (kilo, `10^3`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricPrefix {
  symbol: &'static str,
  exponent: i32,
}

/// Every SI prefix, largest first. Micro is accepted as both `u` and
/// `μ`.
pub const SI_PREFIXES: [MetricPrefix; 25] = [
  MetricPrefix::new("Q", 30),
  MetricPrefix::new("R", 27),
  MetricPrefix::new("Y", 24),
  MetricPrefix::new("Z", 21),
  MetricPrefix::new("E", 18),
  MetricPrefix::new("P", 15),
  MetricPrefix::new("T", 12),
  MetricPrefix::new("G", 9),
  MetricPrefix::new("M", 6),
  MetricPrefix::new("k", 3),
  MetricPrefix::new("h", 2),
  MetricPrefix::new("da", 1),
  MetricPrefix::new("d", -1),
  MetricPrefix::new("c", -2),
  MetricPrefix::new("m", -3),
  MetricPrefix::new("u", -6),
  MetricPrefix::new("μ", -6),
  MetricPrefix::new("n", -9),
  MetricPrefix::new("p", -12),
  MetricPrefix::new("f", -15),
  MetricPrefix::new("a", -18),
  MetricPrefix::new("z", -21),
  MetricPrefix::new("y", -24),
  MetricPrefix::new("r", -27),
  MetricPrefix::new("q", -30),
];

impl MetricPrefix {
  pub const fn new(symbol: &'static str, exponent: i32) -> MetricPrefix {
    MetricPrefix { symbol, exponent }
  }

  /// The SI prefix with the given symbol, if any.
  pub fn find(symbol: &str) -> Option<MetricPrefix> {
    SI_PREFIXES.iter().copied().find(|p| p.symbol == symbol)
  }

  pub fn symbol(&self) -> &'static str {
    self.symbol
  }

  pub fn exponent(&self) -> i32 {
    self.exponent
  }

  /// The multiplier this prefix stands for.
  pub fn factor(&self) -> f64 {
    10f64.powi(self.exponent)
  }

  /// Scales the unit by this prefix, so that (for instance) `m`
  /// becomes `km`.
  pub fn apply(&self, unit: Unit<f64>) -> Unit<f64> {
    let factor = self.factor();
    unit.augment(
      |name| format!("{}{}", self.symbol, name),
      |amount| amount * factor,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::{Dimension, BaseDimension};

  use approx::assert_relative_eq;

  #[test]
  fn test_find_prefix() {
    assert_eq!(MetricPrefix::find("k"), Some(MetricPrefix::new("k", 3)));
    assert_eq!(MetricPrefix::find("da").map(|p| p.exponent()), Some(1));
    assert_eq!(MetricPrefix::find("u"), MetricPrefix::find("μ").map(|p| MetricPrefix::new("u", p.exponent())));
    assert_eq!(MetricPrefix::find("K"), None);
  }

  #[test]
  fn test_apply_to_meters() {
    let meters = Unit::<f64>::new("m", BaseDimension::Length, 1.0);
    let kilometers = MetricPrefix::new("k", 3).apply(meters);
    assert_eq!(kilometers.name(), "km");
    assert_eq!(kilometers.dimension(), &Dimension::singleton(BaseDimension::Length));
    assert_eq!(kilometers.amount_of_base(), &1000.0);
  }

  #[test]
  fn test_apply_to_grams() {
    let grams = Unit::<f64>::new("g", BaseDimension::Mass, 0.001);
    let milligrams = MetricPrefix::new("m", -3).apply(grams);
    assert_eq!(milligrams.name(), "mg");
    assert_relative_eq!(*milligrams.amount_of_base(), 1e-6);
  }

  #[test]
  fn test_prefixes_are_ordered() {
    assert!(SI_PREFIXES.windows(2).all(|w| w[0].exponent() >= w[1].exponent()));
  }
}
