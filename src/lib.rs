pub mod core;
pub mod spaces;
pub mod utils;
pub mod envs;
pub mod render;
pub mod wrappers;
pub mod vector;

pub use crate::core::{Env, EnvError, Info, InfoValue, RenderFrame, Result, Step};
pub use crate::spaces::{Discrete, MultiDiscrete, Space};
pub use crate::envs::{Action, Cell, GridConfig, Transition, WindyGridworldEnv};
pub use crate::envs::toy_text::windy_gridworld::{COLS, GOAL_REWARD, ROWS, STEP_REWARD, WIND};
pub use crate::render::{GridRenderer, GridSnapshot, PixelRenderer, RenderMode, TextRenderer};
pub use crate::wrappers::{RecordEpisodeStatistics, TimeLimit};
pub use crate::utils::{encode_png, save_png};
pub use crate::vector::SyncVectorEnv;
