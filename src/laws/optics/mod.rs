pub mod refraction_angle_from_environments;
