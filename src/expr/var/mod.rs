
pub mod constants;

use regex::Regex;
use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A variable in an equation, left intentionally un-evaluated.
///
/// Variables are identified by strings. A variable's name must begin
/// with a letter, followed by zero or more letters, digits,
/// underscores, or apostrophes. This structure enforces these
/// constraints.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Var(String);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid variable name '{original_string}'")]
pub struct TryFromStringError {
  pub original_string: String,
}

pub static VALID_NAME_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[a-zA-Z][a-zA-Z0-9_']*$").unwrap()
});

impl Var {
  pub fn new(name: impl Into<String>) -> Option<Self> {
    Self::try_from(name.into()).ok()
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<String> for Var {
  type Error = TryFromStringError;

  fn try_from(name: String) -> Result<Self, Self::Error> {
    if VALID_NAME_RE.is_match(&name) {
      Ok(Self(name))
    } else {
      Err(TryFromStringError { original_string: name })
    }
  }
}

impl TryFrom<&str> for Var {
  type Error = TryFromStringError;

  fn try_from(name: &str) -> Result<Self, Self::Error> {
    Self::try_from(name.to_owned())
  }
}

impl From<Var> for String {
  fn from(v: Var) -> Self {
    v.0
  }
}

impl AsRef<Var> for Var {
  fn as_ref(&self) -> &Var {
    self
  }
}

impl Display for Var {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", &self.0)
  }
}
