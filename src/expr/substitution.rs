//! Assignments of values to variables.

use super::var::Var;
use crate::quantity::Quantity;
use crate::util::point::Vector2D;

use serde::{Serialize, Deserialize};

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// The result of evaluating an expression: either a scalar quantity
/// or a planar vector of quantities sharing one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
  Scalar(Quantity),
  Vector(Vector2D<Quantity>),
}

/// A set of variable bindings used to evaluate an expression.
#[derive(Debug, Clone, Default)]
pub struct Substitution {
  bindings: HashMap<Var, Value>,
}

impl Value {
  pub fn as_scalar(&self) -> Option<Quantity> {
    match self {
      Value::Scalar(q) => Some(*q),
      Value::Vector(_) => None,
    }
  }

  pub fn as_vector(&self) -> Option<Vector2D<Quantity>> {
    match self {
      Value::Scalar(_) => None,
      Value::Vector(v) => Some(*v),
    }
  }
}

impl Substitution {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style variant of [`Substitution::insert`].
  pub fn with(mut self, var: impl AsRef<Var>, value: impl Into<Value>) -> Self {
    self.insert(var, value);
    self
  }

  pub fn insert(&mut self, var: impl AsRef<Var>, value: impl Into<Value>) -> Option<Value> {
    self.bindings.insert(var.as_ref().clone(), value.into())
  }

  pub fn get(&self, var: &Var) -> Option<&Value> {
    self.bindings.get(var)
  }

  pub fn contains(&self, var: &Var) -> bool {
    self.bindings.contains_key(var)
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }
}

impl From<Quantity> for Value {
  fn from(q: Quantity) -> Self {
    Value::Scalar(q)
  }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self {
    Value::Scalar(Quantity::dimensionless(x))
  }
}

impl From<Vector2D<Quantity>> for Value {
  fn from(v: Vector2D<Quantity>) -> Self {
    Value::Vector(v)
  }
}

impl<V: AsRef<Var>, T: Into<Value>> FromIterator<(V, T)> for Substitution {
  fn from_iter<I: IntoIterator<Item = (V, T)>>(iter: I) -> Self {
    let mut subst = Substitution::new();
    for (var, value) in iter {
      subst.insert(var, value);
    }
    subst
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Value::Scalar(q) => write!(f, "{q}"),
      Value::Vector(v) => write!(f, "{v}"),
    }
  }
}
