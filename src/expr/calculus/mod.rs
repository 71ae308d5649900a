//! Symbolic differentiation.

mod derivative;

pub use derivative::{DerivativeEngine, DifferentiationFailure, DifferentiationError, differentiate};
