//! Implementation of the bisection method of root finding for
//! real-valued functions.
//!
//! See <https://en.wikipedia.org/wiki/Bisection_method>.

use super::FoundRoot;

use crate::expr::algebra::ExprFunction;
use crate::expr::evaluator::EvalError;

use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct BisectionMethod {
  epsilon: f64,
  max_iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BisectionError<E> {
  #[error("{0}")]
  FunctionEvalError(E),
  #[error("Failed to converge after {iterations} iterations")]
  FailedToConverge { iterations: usize },
  #[error("No root is contained between the two values {0} and {1}")]
  FailedToBisect(f64, f64),
  #[error("Bisection method requires two distinct inputs")]
  InputsAreIdentical,
}

impl BisectionMethod {
  pub const DEFAULT_EPSILON: f64 = 1e-9;
  pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

  pub fn new(epsilon: f64, max_iterations: usize) -> Self {
    Self { epsilon, max_iterations }
  }

  /// Finds a root of `function` between the two bounds, which must
  /// bracket a sign change. Terminates when either the function value
  /// or the width of the bracket falls below epsilon.
  pub fn find_root<F, E>(
    &self,
    mut function: F,
    mut left_bound: f64,
    mut right_bound: f64,
  ) -> Result<FoundRoot<f64>, BisectionError<E>>
  where F: FnMut(f64) -> Result<f64, E> {
    if left_bound == right_bound {
      return Err(BisectionError::InputsAreIdentical);
    }
    if left_bound > right_bound {
      std::mem::swap(&mut left_bound, &mut right_bound);
    }

    // Verify that there is in fact a root contained between the two
    // values.
    let mut f_left = function(left_bound).map_err(BisectionError::FunctionEvalError)?;
    if f_left == 0.0 {
      return Ok(FoundRoot { value: left_bound, final_epsilon: 0.0 });
    }
    let f_right = function(right_bound).map_err(BisectionError::FunctionEvalError)?;
    if f_right == 0.0 {
      return Ok(FoundRoot { value: right_bound, final_epsilon: 0.0 });
    }
    if f_left.signum() == f_right.signum() {
      return Err(BisectionError::FailedToBisect(left_bound, right_bound));
    }

    for _ in 0..self.max_iterations {
      let pivot = (left_bound + right_bound) / 2.0;
      let f_pivot = function(pivot).map_err(BisectionError::FunctionEvalError)?;
      let curr_epsilon = f_pivot.abs();
      if curr_epsilon < self.epsilon || (right_bound - left_bound) / 2.0 < self.epsilon {
        return Ok(FoundRoot { value: pivot, final_epsilon: curr_epsilon });
      }
      if f_pivot.signum() == f_left.signum() {
        left_bound = pivot;
        f_left = f_pivot;
      } else {
        right_bound = pivot;
      }
    }
    Err(BisectionError::FailedToConverge { iterations: self.max_iterations })
  }

  /// Finds a root of an expression-defined function.
  pub fn find_expr_root(
    &self,
    function: &ExprFunction,
    left_bound: f64,
    right_bound: f64,
  ) -> Result<FoundRoot<f64>, BisectionError<EvalError>> {
    self.find_root(|x| function.eval_at_real(x), left_bound, right_bound)
  }
}

impl Default for BisectionMethod {
  fn default() -> Self {
    Self::new(
      Self::DEFAULT_EPSILON,
      Self::DEFAULT_MAX_ITERATIONS,
    )
  }
}
