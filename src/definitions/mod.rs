//! Definitions of physical quantities in terms of others.

pub mod power_is_energy_derivative;
