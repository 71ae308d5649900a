
use super::base::{UnitParser, UnitParserError};
use crate::units::dimension::BaseDimension;
use crate::units::unit::Unit;

use std::collections::HashMap;

/// A [`UnitParser`] which looks up the given name in a pre-determined
/// hash table.
#[derive(Debug, Clone)]
pub struct TableBasedParser<T> {
  pub table: HashMap<String, Unit<T>>,
  /// Names of the base units, indexed in the order of
  /// [`BaseDimension::ALL`].
  pub base_names: [&'static str; 7],
}

impl<T> TableBasedParser<T> {
  pub fn new(units: impl IntoIterator<Item = Unit<T>>, base_names: [&'static str; 7]) -> Self {
    let table = units.into_iter()
      .map(|unit| (unit.name().to_owned(), unit))
      .collect();
    Self { table, base_names }
  }
}

impl<T: Clone> UnitParser<T> for TableBasedParser<T> {
  fn parse_unit(&self, input: &str) -> Result<Unit<T>, UnitParserError> {
    self.table.get(input)
      .cloned()
      .ok_or_else(|| UnitParserError::new(input))
  }

  fn base_unit(&self, dimension: BaseDimension) -> Unit<T> {
    let index = BaseDimension::ALL.iter()
      .position(|d| *d == dimension)
      .unwrap_or_default();
    // Base units are always present in a table built by
    // `default_units_table`. A custom table missing one is a
    // construction bug.
    self.parse_unit(self.base_names[index])
      .unwrap_or_else(|err| panic!("Base unit missing from table: {}", err))
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use super::test_utils::sample_table;

  #[test]
  fn test_parse_from_table() {
    let table = sample_table();
    assert_eq!(table.parse_unit("min"), Ok(Unit::new("min", BaseDimension::Time, 60.0)));
    assert_eq!(table.parse_unit("km"), Err(UnitParserError::new("km")));
  }

  #[test]
  fn test_base_unit() {
    let table = sample_table();
    assert_eq!(table.base_unit(BaseDimension::Time).name(), "s");
    assert_eq!(table.base_unit(BaseDimension::AmountOfSubstance).name(), "mol");
  }
}
