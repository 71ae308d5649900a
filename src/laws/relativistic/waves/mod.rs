pub mod longitudinal_frequency_shift_from_absolute_velocities;
