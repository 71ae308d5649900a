//! Explicit checks of calculation arguments and results against the
//! symbols they stand for.

use crate::error::{Error, UnitsError, ArgumentTypeError, ArityError};
use crate::quantity::Quantity;
use crate::symbol::{Symbol, SymbolKind};

/// A calculation argument: either a quantity, or a bare number for
/// parameters which are dimensionless or angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg {
  Quantity(Quantity),
  Number(f64),
}

/// The declared parameters and result of a calculation.
#[derive(Debug, Clone)]
pub struct Validator {
  inputs: Vec<(String, SymbolKind)>,
  output: (String, SymbolKind),
}

impl From<Quantity> for Arg {
  fn from(q: Quantity) -> Self {
    Arg::Quantity(q)
  }
}

impl From<f64> for Arg {
  fn from(x: f64) -> Self {
    Arg::Number(x)
  }
}

impl Validator {
  pub fn new(inputs: Vec<(String, SymbolKind)>, output: (String, SymbolKind)) -> Self {
    Self { inputs, output }
  }

  /// A validator whose parameters are named after the symbols they
  /// stand for.
  pub fn for_symbols<'a>(inputs: impl IntoIterator<Item = &'a Symbol>, output: &Symbol) -> Self {
    let inputs = inputs.into_iter().map(|s| (s.name().to_owned(), s.kind())).collect();
    Self::new(inputs, (output.name().to_owned(), output.kind()))
  }

  /// Names and kinds of the declared parameters, in order.
  pub fn inputs(&self) -> impl Iterator<Item = (&str, SymbolKind)> + '_ {
    self.inputs.iter().map(|(name, kind)| (name.as_str(), *kind))
  }

  /// Checks each argument against the corresponding declared
  /// parameter, in order. Every argument is checked before any value
  /// is returned.
  pub fn check_inputs(&self, args: &[Arg]) -> Result<Vec<Quantity>, Error> {
    if args.len() != self.inputs.len() {
      return Err(Error::from(ArityError { expected: self.inputs.len(), actual: args.len() }));
    }
    args.iter()
      .zip(&self.inputs)
      .map(|(arg, (name, kind))| check_arg(name, *kind, *arg))
      .collect()
  }

  /// Checks a calculation result against the declared output symbol.
  pub fn check_output(&self, result: Quantity) -> Result<Quantity, Error> {
    let (name, kind) = &self.output;
    check_quantity(name, *kind, result)
  }
}

fn check_arg(name: &str, kind: SymbolKind, arg: Arg) -> Result<Quantity, Error> {
  match arg {
    Arg::Quantity(q) => check_quantity(name, kind, q),
    Arg::Number(x) => {
      if kind.accepts_bare_number() {
        Ok(Quantity::dimensionless(x))
      } else {
        Err(Error::from(ArgumentTypeError { parameter: name.to_owned(), expected: kind.dimension() }))
      }
    }
  }
}

fn check_quantity(name: &str, kind: SymbolKind, q: Quantity) -> Result<Quantity, Error> {
  if q.is_compatible_with(&kind.dimension()) {
    Ok(q)
  } else {
    Err(Error::from(UnitsError { parameter: name.to_owned(), expected: kind, actual: *q.dimension() }))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::named;

  fn validator() -> Validator {
    let velocity = Symbol::dimensioned("velocity", named::VELOCITY);
    let angle = Symbol::angle("angle");
    let result = Symbol::dimensioned("result", named::VELOCITY);
    Validator::for_symbols([&velocity, &angle], &result)
  }

  #[test]
  fn test_check_inputs_success() {
    let v = Quantity::parse("3 m / s").unwrap();
    let values = validator().check_inputs(&[Arg::from(v), Arg::from(0.5)]).unwrap();
    assert_eq!(values, vec![v, Quantity::dimensionless(0.5)]);
  }

  #[test]
  fn test_angles_accept_degrees() {
    let v = Quantity::parse("3 m / s").unwrap();
    let angle = Quantity::parse("30 deg").unwrap();
    let values = validator().check_inputs(&[Arg::from(v), Arg::from(angle)]).unwrap();
    assert!((values[1].value() - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
  }

  #[test]
  fn test_check_inputs_units_error() {
    let t = Quantity::parse("3 s").unwrap();
    let err = validator().check_inputs(&[Arg::from(t), Arg::from(0.5)]).unwrap_err();
    assert_eq!(err, Error::Units(UnitsError {
      parameter: String::from("velocity"),
      expected: SymbolKind::Dimensioned(named::VELOCITY),
      actual: named::TIME,
    }));
  }

  #[test]
  fn test_check_inputs_type_error() {
    let err = validator().check_inputs(&[Arg::from(3.0), Arg::from(0.5)]).unwrap_err();
    assert_eq!(err, Error::Type(ArgumentTypeError {
      parameter: String::from("velocity"),
      expected: named::VELOCITY,
    }));
  }

  #[test]
  fn test_dimensioned_angle_is_rejected() {
    let v = Quantity::parse("3 m / s").unwrap();
    let bad_angle = Quantity::parse("1 m").unwrap();
    let err = validator().check_inputs(&[Arg::from(v), Arg::from(bad_angle)]).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "angle"));
  }

  #[test]
  fn test_check_output() {
    let v = Quantity::parse("3 m / s").unwrap();
    assert_eq!(validator().check_output(v), Ok(v));
    let err = validator().check_output(Quantity::dimensionless(1.0)).unwrap_err();
    assert!(matches!(err, Error::Units(UnitsError { ref parameter, .. }) if parameter == "result"));
  }

  #[test]
  #[should_panic(expected = "Wrong number of arguments")]
  fn test_wrong_argument_count() {
    validator().check_inputs(&[Arg::from(1.0)]).unwrap();
  }
}
