//! The full list of laws and definitions, with lookup by name.

use crate::definitions::power_is_energy_derivative;
use crate::law::Law;
use crate::laws::{dynamics, electricity, kinematic, nuclear, optics, relativistic, waves};

/// Every law and definition, in module order.
pub fn laws() -> Vec<&'static dyn Law> {
  vec![
    &*power_is_energy_derivative::LAW,
    &*dynamics::acceleration_from_force::LAW,
    &*dynamics::impulse_from_mass_and_speed::LAW,
    &*dynamics::mechanical_work_from_force_and_move::LAW,
    &*electricity::current_is_proportional_to_voltage::LAW,
    &*electricity::power_from_energy_time::LAW,
    &*kinematic::accelerated_velocity_from_time::LAW,
    &*kinematic::centripetal_acceleration_is_squared_velocity_by_radius::LAW,
    &*kinematic::constant_acceleration_movement_is_parabolic::LAW,
    &*kinematic::planar_projection_is_cosine::LAW,
    &*nuclear::buckling::geometric_buckling_for_uniform_slab::LAW,
    &*optics::refraction_angle_from_environments::LAW,
    &*relativistic::waves::longitudinal_frequency_shift_from_absolute_velocities::LAW,
    &*waves::wavespeed_from_medium::LAW,
  ]
}

/// Looks up a law by its full module path (such as
/// `laws::waves::wavespeed_from_medium`) or by the last segment of
/// the path alone.
pub fn find(name: &str) -> Option<&'static dyn Law> {
  let name = name.trim();
  laws().into_iter()
    .find(|law| law.name() == name)
    .or_else(|| laws().into_iter().find(|law| law.short_name() == name))
}
