//! Laws which account for effects of special relativity.

pub mod waves;
