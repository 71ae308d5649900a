
//! A catalog of physical laws. Each law relates named, dimensioned
//! symbols through a symbolic equation, prints that equation, and
//! solves it for one symbol given values of the others, checking the
//! dimension of every argument and of the result.

// Some error types carry a private unit field, so that only their own
// module may construct them. #[non_exhaustive] only restricts other
// crates.
#![allow(clippy::manual_non_exhaustive)]

pub mod catalog;
pub mod definitions;
pub mod error;
pub mod expr;
pub mod law;
pub mod laws;
pub mod quantity;
pub mod symbol;
pub mod units;
pub mod util;
pub mod validation;

pub use error::Error;
pub use quantity::Quantity;
pub use validation::Arg;
