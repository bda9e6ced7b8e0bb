pub mod toy_text;

pub use toy_text::{Action, Cell, GridConfig, Transition, WindyGridworldEnv};
