pub mod config;
pub mod driver;
pub mod events;
pub mod grid;
pub mod menu;
pub mod pattern;
pub mod render;
pub mod rule_set;
pub mod simulator;

mod io;

/// Index of a generation, counted from `0`
pub type Generation = u64;
