
use super::base::{UnitParser, UnitParserError};
use crate::units::dimension::BaseDimension;
use crate::units::prefix::{MetricPrefix, SI_PREFIXES};
use crate::units::unit::Unit;

/// A [`UnitParser`] that accepts the units of an inner parser,
/// optionally preceded by a single metric prefix. A name the inner
/// parser knows outright always wins over a prefixed reading of it,
/// so `min` is minutes rather than milli-inches.
#[derive(Debug, Clone)]
pub struct PrefixParser<P> {
  inner: P,
  prefixes: Vec<MetricPrefix>,
}

impl<P> PrefixParser<P> {
  pub fn new(inner: P, prefixes: impl IntoIterator<Item = MetricPrefix>) -> Self {
    Self { inner, prefixes: prefixes.into_iter().collect() }
  }

  /// A parser accepting every prefix in [`SI_PREFIXES`].
  pub fn new_si(inner: P) -> Self {
    Self::new(inner, SI_PREFIXES)
  }

  pub fn inner(&self) -> &P {
    &self.inner
  }
}

impl<P> UnitParser<f64> for PrefixParser<P>
where P: UnitParser<f64> {
  fn parse_unit(&self, input: &str) -> Result<Unit<f64>, UnitParserError> {
    self.inner.parse_unit(input).or_else(|err| {
      self.prefixes.iter()
        .filter_map(|prefix| {
          let rest = input.strip_prefix(prefix.symbol())?;
          self.inner.parse_unit(rest).ok().map(|unit| prefix.apply(unit))
        })
        .next()
        .ok_or(err)
    })
  }

  fn base_unit(&self, dimension: BaseDimension) -> Unit<f64> {
    self.inner.base_unit(dimension)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::parsing::table::test_utils::sample_table;

  use approx::assert_relative_eq;

  #[test]
  fn test_unprefixed_units() {
    let parser = PrefixParser::new_si(sample_table());
    assert_eq!(parser.parse_unit("m"), Ok(Unit::new("m", BaseDimension::Length, 1.0)));
    assert_eq!(parser.parse_unit("min"), Ok(Unit::new("min", BaseDimension::Time, 60.0)));
  }

  #[test]
  fn test_prefixed_units() {
    let parser = PrefixParser::new_si(sample_table());
    assert_eq!(parser.parse_unit("km"), Ok(Unit::new("km", BaseDimension::Length, 1000.0)));
    assert_eq!(parser.parse_unit("dam"), Ok(Unit::new("dam", BaseDimension::Length, 10.0)));
    let micros = parser.parse_unit("μs").unwrap();
    assert_eq!(micros.name(), "μs");
    assert_relative_eq!(*micros.amount_of_base(), 1e-6);
  }

  #[test]
  fn test_rejected_units() {
    let parser = PrefixParser::new_si(sample_table());
    for input in ["", "Km", "kkm", "mse", "🙂m"] {
      assert_eq!(parser.parse_unit(input), Err(UnitParserError::new(input)), "{input}");
    }
  }

  #[test]
  fn test_restricted_prefixes() {
    let parser = PrefixParser::new(sample_table(), [MetricPrefix::new("k", 3)]);
    assert!(parser.parse_unit("km").is_ok());
    assert!(parser.parse_unit("cm").is_err());
  }

  #[test]
  fn test_base_unit_delegates() {
    let parser = PrefixParser::new_si(sample_table());
    assert_eq!(parser.base_unit(BaseDimension::Mass).name(), "kg");
  }
}
