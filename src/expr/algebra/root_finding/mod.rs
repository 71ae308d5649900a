//! Numerical root finding for real functions of one variable.

pub mod bisection;

/// A root found using one of our supported root finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoundRoot<T> {
  pub value: T,
  pub final_epsilon: f64,
}
