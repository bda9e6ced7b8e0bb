pub mod rng;
pub mod render;
pub mod render2d;

pub use rng::{RngStream, rng_from_seed, streams_for};
pub use render::{encode_png, save_png};
pub use render2d::{Canvas, Color};
