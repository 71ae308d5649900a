//! Laws relating forces to the motion they cause.

pub mod acceleration_from_force;
pub mod impulse_from_mass_and_speed;
pub mod mechanical_work_from_force_and_move;
