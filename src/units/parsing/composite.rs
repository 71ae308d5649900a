
use super::base::{UnitParser, UnitParserError};
use crate::units::composite::CompositeUnit;
use crate::units::unit_with_power::UnitWithPower;

use once_cell::sync::Lazy;
use regex::Regex;

static UNIT_TERM_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([A-Za-zμΩ]+)(?:\^(-?\d+))?$").unwrap());

/// Parses a whitespace-separated product of named units, such as
/// `"kg m / s^2"`. Every term after a `/` belongs to the denominator,
/// and the `/` needs no surrounding spaces (`"m/s"`). A literal `1`
/// may stand in for an empty numerator, as in `"1 / s"`.
pub fn parse_composite_unit<P, T>(unit_parser: &P, input: &str) -> Result<CompositeUnit<T>, UnitParserError>
where P: UnitParser<T> + ?Sized {
  let mut terms = Vec::new();
  let mut in_denominator = false;
  let input = input.replace('/', " / ");
  for token in input.split_whitespace() {
    match token {
      "/" if !in_denominator => {
        in_denominator = true;
      }
      "1" => {}
      _ => {
        let (name, exponent) = parse_term(token)?;
        let unit = unit_parser.parse_unit(name)?;
        let exponent = if in_denominator { - exponent } else { exponent };
        terms.push(UnitWithPower { unit, exponent });
      }
    }
  }
  Ok(CompositeUnit::new(terms))
}

fn parse_term(token: &str) -> Result<(&str, i64), UnitParserError> {
  let captures = UNIT_TERM_RE.captures(token).ok_or_else(|| UnitParserError::new(token))?;
  // unwrap: Group 1 is not optional.
  let name = captures.get(1).unwrap().as_str();
  let exponent = match captures.get(2) {
    None => 1,
    Some(m) => m.as_str().parse().map_err(|_| UnitParserError::new(token))?,
  };
  Ok((name, exponent))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::named;
  use crate::units::parsing::table::test_utils::sample_table;
  use crate::units::parsing::prefix::PrefixParser;

  use approx::assert_relative_eq;

  #[test]
  fn test_parse_single_unit() {
    let unit = parse_composite_unit(&sample_table(), "m").unwrap();
    assert_eq!(unit.dimension(), named::LENGTH);
    assert_eq!(unit.to_string(), "m");
  }

  #[test]
  fn test_parse_quotient() {
    let unit = parse_composite_unit(&sample_table(), "kg m / s^2").unwrap();
    assert_eq!(unit.dimension(), named::FORCE);
    assert_eq!(unit.to_string(), "kg m / s^2");
  }

  #[test]
  fn test_parse_negative_exponent() {
    let parser = PrefixParser::new_si(sample_table());
    let unit = parse_composite_unit(&parser, "cm^-2").unwrap();
    assert_eq!(unit.dimension(), named::AREA.recip());
    assert_relative_eq!(unit.to_base(1.0), 10_000.0);
  }

  #[test]
  fn test_parse_reciprocal() {
    let unit = parse_composite_unit(&sample_table(), "1 / s").unwrap();
    assert_eq!(unit.dimension(), named::FREQUENCY);
  }

  #[test]
  fn test_parse_unspaced_quotient() {
    let unit = parse_composite_unit(&sample_table(), "kg m/s^2").unwrap();
    assert_eq!(unit.dimension(), named::FORCE);
    assert_eq!(unit.to_string(), "kg m / s^2");
    assert_eq!(parse_composite_unit(&sample_table(), "m/s/s"), Err(UnitParserError::new("/")));
  }

  #[test]
  fn test_parse_empty() {
    let unit = parse_composite_unit(&sample_table(), "").unwrap();
    assert!(unit.is_empty());
  }

  #[test]
  fn test_parse_failure() {
    assert_eq!(
      parse_composite_unit(&sample_table(), "m / foo"),
      Err(UnitParserError::new("foo")),
    );
    assert_eq!(
      parse_composite_unit(&sample_table(), "m^x"),
      Err(UnitParserError::new("m^x")),
    );
    assert_eq!(
      parse_composite_unit(&sample_table(), "m / s / s"),
      Err(UnitParserError::new("/")),
    );
  }
}
