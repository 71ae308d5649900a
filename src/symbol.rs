
//! Named physical symbols, as they appear in a law.

use crate::expr::Expr;
use crate::expr::var::{Var, TryFromStringError};
use crate::units::Dimension;

use num::One;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// What a symbol measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "dimension", rename_all = "snake_case")]
pub enum SymbolKind {
  /// A physical quantity of the given dimension.
  Dimensioned(Dimension),
  /// A plain number, such as a refractive index.
  Dimensionless,
  /// An angle, in radians. Angles are dimensionless, but are kept
  /// apart so that they can be displayed as such.
  Angle,
}

/// A named placeholder for a physical quantity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
  var: Var,
  kind: SymbolKind,
}

/// A named function of one symbol, such as `energy(time)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSymbol {
  name: Var,
  argument: Symbol,
  kind: SymbolKind,
}

impl SymbolKind {
  /// The dimension of every quantity this kind accepts.
  pub fn dimension(&self) -> Dimension {
    match self {
      SymbolKind::Dimensioned(d) => *d,
      SymbolKind::Dimensionless | SymbolKind::Angle => Dimension::one(),
    }
  }

  /// Whether a bare number is acceptable for this kind.
  pub fn accepts_bare_number(&self) -> bool {
    match self {
      SymbolKind::Dimensioned(d) => d.is_one(),
      SymbolKind::Dimensionless | SymbolKind::Angle => true,
    }
  }
}

impl From<Dimension> for SymbolKind {
  fn from(d: Dimension) -> Self {
    SymbolKind::Dimensioned(d)
  }
}

impl Symbol {
  pub fn try_new(name: &str, kind: impl Into<SymbolKind>) -> Result<Self, TryFromStringError> {
    let var = Var::try_from(name)?;
    Ok(Self { var, kind: kind.into() })
  }

  /// # Panics
  ///
  /// Panics if `name` is not a valid variable name. Symbols are
  /// declared statically, so this is a defect at the declaration
  /// site.
  pub fn new(name: &str, kind: impl Into<SymbolKind>) -> Self {
    Self::try_new(name, kind).unwrap_or_else(|err| panic!("{err}"))
  }

  pub fn dimensioned(name: &str, dimension: Dimension) -> Self {
    Self::new(name, SymbolKind::Dimensioned(dimension))
  }

  pub fn dimensionless(name: &str) -> Self {
    Self::new(name, SymbolKind::Dimensionless)
  }

  pub fn angle(name: &str) -> Self {
    Self::new(name, SymbolKind::Angle)
  }

  pub fn name(&self) -> &str {
    self.var.as_str()
  }

  pub fn var(&self) -> &Var {
    &self.var
  }

  pub fn kind(&self) -> SymbolKind {
    self.kind
  }

  pub fn dimension(&self) -> Dimension {
    self.kind.dimension()
  }

  /// This symbol, as an expression.
  pub fn expr(&self) -> Expr {
    Expr::from(&self.var)
  }
}

impl FunctionSymbol {
  /// # Panics
  ///
  /// Panics if `name` is not a valid variable name.
  pub fn new(name: &str, argument: Symbol, kind: impl Into<SymbolKind>) -> Self {
    let name = Var::try_from(name).unwrap_or_else(|err| panic!("{err}"));
    Self { name, argument, kind: kind.into() }
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  pub fn argument(&self) -> &Symbol {
    &self.argument
  }

  pub fn kind(&self) -> SymbolKind {
    self.kind
  }

  /// The function applied to an arbitrary expression.
  pub fn call(&self, arg: impl Into<Expr>) -> Expr {
    Expr::call(self.name.as_str(), vec![arg.into()])
  }

  /// The function applied to its declared argument, as in
  /// `energy(time)`.
  pub fn applied(&self) -> Expr {
    self.call(self.argument.expr())
  }

  /// A symbol with the same name and kind as this function, for use
  /// when the function's value is a calculation parameter.
  pub fn as_symbol(&self) -> Symbol {
    Symbol { var: self.name.clone(), kind: self.kind }
  }
}

impl AsRef<Var> for Symbol {
  fn as_ref(&self) -> &Var {
    &self.var
  }
}

impl From<&Symbol> for Expr {
  fn from(s: &Symbol) -> Expr {
    s.expr()
  }
}

impl From<Symbol> for Expr {
  fn from(s: Symbol) -> Expr {
    Expr::from(s.var)
  }
}

impl Display for SymbolKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      SymbolKind::Dimensioned(d) => write!(f, "{d}"),
      SymbolKind::Dimensionless => write!(f, "dimensionless"),
      SymbolKind::Angle => write!(f, "angle"),
    }
  }
}

impl Display for Symbol {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} ({})", self.var, self.kind)
  }
}

impl Display for FunctionSymbol {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}({}) ({})", self.name, self.argument.name(), self.kind)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::named;

  #[test]
  fn test_symbol_kinds() {
    let mass = Symbol::dimensioned("mass", named::MASS);
    assert_eq!(mass.name(), "mass");
    assert_eq!(mass.dimension(), named::MASS);
    assert!(!mass.kind().accepts_bare_number());
    let angle = Symbol::angle("incedence_angle");
    assert_eq!(angle.dimension(), Dimension::one());
    assert!(angle.kind().accepts_bare_number());
    assert!(Symbol::dimensionless("n").kind().accepts_bare_number());
  }

  #[test]
  fn test_invalid_symbol_name() {
    assert!(Symbol::try_new("not valid", SymbolKind::Dimensionless).is_err());
  }

  #[test]
  #[should_panic(expected = "Invalid variable name")]
  fn test_invalid_symbol_name_panics() {
    Symbol::new("9lives", SymbolKind::Dimensionless);
  }

  #[test]
  fn test_symbol_display() {
    assert_eq!(Symbol::dimensioned("velocity", named::VELOCITY).to_string(), "velocity (length / time)");
    assert_eq!(Symbol::angle("a").to_string(), "a (angle)");
  }

  #[test]
  fn test_function_symbol() {
    let time = Symbol::dimensioned("time", named::TIME);
    let energy = FunctionSymbol::new("energy", time, named::ENERGY);
    assert_eq!(energy.applied().to_string(), "energy(time)");
    assert_eq!(energy.call(Expr::from(2)).to_string(), "energy(2)");
    assert_eq!(energy.as_symbol().dimension(), named::ENERGY);
    assert_eq!(energy.to_string(), "energy(time) (length^2 mass / time^2)");
  }

  #[test]
  fn test_symbol_kind_serialization() {
    let json = serde_json::to_string(&SymbolKind::Angle).unwrap();
    assert_eq!(json, r#"{"kind":"angle"}"#);
    let json = serde_json::to_string(&SymbolKind::Dimensioned(named::LENGTH)).unwrap();
    assert_eq!(json, r#"{"kind":"dimensioned","dimension":[1,0,0,0,0,0,0]}"#);
  }
}
