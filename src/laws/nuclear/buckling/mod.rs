//! Buckling: the curvature of the neutron flux in a reactor core.

pub mod geometric_buckling_for_uniform_slab;
