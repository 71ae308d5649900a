pub mod current_is_proportional_to_voltage;
pub mod power_from_energy_time;
