//! Theme for the staircase diagram

pub mod palette;
