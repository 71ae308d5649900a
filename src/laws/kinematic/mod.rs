//! Laws describing motion without regard to its causes.

pub mod accelerated_velocity_from_time;
pub mod centripetal_acceleration_is_squared_velocity_by_radius;
pub mod constant_acceleration_movement_is_parabolic;
pub mod planar_projection_is_cosine;
