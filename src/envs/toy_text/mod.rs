pub mod windy_gridworld;

pub use windy_gridworld::{Action, Cell, GridConfig, Transition, WindyGridworldEnv};
