pub mod wavespeed_from_medium;
