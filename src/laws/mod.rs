//! Physical laws, grouped by the branch of physics they belong to.
//!
//! Each law lives in its own module, which exposes the law itself as
//! `LAW`, a `print_law` function, and one `calculate_*` function
//! solving the law for its target symbol.

pub mod dynamics;
pub mod electricity;
pub mod kinematic;
pub mod nuclear;
pub mod optics;
pub mod relativistic;
pub mod waves;
