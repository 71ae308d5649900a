
//! Various utility functions.

pub mod angles;
pub mod point;

use std::convert::Infallible;

pub fn unwrap_infallible<T>(res: Result<T, Infallible>) -> T {
  match res {
    Ok(res) => res,
    Err(_) => unreachable!(),
  }
}

/// Applies `f` pointwise to two arrays of the same length.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where F: FnMut(T, S) -> U {
  let mut right = right.into_iter();
  left.map(|x| {
    // unwrap: Both arrays have length C.
    let y = right.next().unwrap();
    f(x, y)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unwrap_infallible_unwraps() {
    let res = Ok(1);
    assert_eq!(unwrap_infallible(res), 1);
  }

  #[test]
  fn zip_with_pointwise() {
    let result = zip_with([1, 2, 3], [10, 20, 30], |a, b| a + b);
    assert_eq!(result, [11, 22, 33]);
    let result = zip_with([1, 2, 3], [10, 20, 30], |a, b| b - a);
    assert_eq!(result, [9, 18, 27]);
  }
}
