//! Grid renderers.
//!
//! Rendering only ever sees a [`GridSnapshot`], so the simulation has no
//! dependency on how (or whether) it is drawn. Renderers are infallible: a
//! frame is always produced and agent state is never touched.

pub mod pixels;
pub mod text;

use crate::core::RenderFrame;
use crate::envs::{Cell, GridConfig};

pub use pixels::PixelRenderer;
pub use text::TextRenderer;

/// Which renderer `Env::render` dispatches to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// ASCII grid as `RenderFrame::Text`.
    #[default]
    Ansi,
    /// RGBA raster as `RenderFrame::Pixels`.
    RgbArray,
}

/// Immutable view of everything a renderer needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    pub config: &'static GridConfig,
    pub agent: Cell,
}

impl GridSnapshot {
    /// Before the first reset there is no agent yet; draw it on the start cell.
    pub fn new(config: &'static GridConfig, agent: Option<Cell>) -> Self {
        Self { config, agent: agent.unwrap_or(config.start()) }
    }
}

/// What occupies a cell, from the renderer's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Start,
    Goal,
    Agent,
}

impl GridSnapshot {
    /// The agent is drawn over start and goal.
    pub fn tile(&self, cell: Cell) -> Tile {
        if cell == self.agent {
            Tile::Agent
        } else if cell == self.config.start() {
            Tile::Start
        } else if cell == self.config.goal() {
            Tile::Goal
        } else {
            Tile::Empty
        }
    }
}

pub trait GridRenderer {
    fn render(&self, snapshot: &GridSnapshot) -> RenderFrame;
}
