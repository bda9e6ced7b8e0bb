use std::fmt;

use tracing::{debug, trace, warn};

use crate::core::{Env, EnvError, Info, RenderFrame, Result, Step};
use crate::render::{GridRenderer, GridSnapshot, PixelRenderer, RenderMode, TextRenderer};
use crate::spaces::{Discrete, MultiDiscrete};

/// Number of grid rows.
pub const ROWS: usize = 7;
/// Number of grid columns.
pub const COLS: usize = 10;
/// Upward push applied in each column (Sutton & Barto, Example 6.5).
pub const WIND: [usize; COLS] = [0, 0, 0, 1, 1, 1, 2, 2, 1, 0];

/// Reward for every step that does not land on the goal.
pub const STEP_REWARD: i32 = -1;
/// Reward for the step that lands on the goal.
pub const GOAL_REWARD: i32 = 0;

/// A grid coordinate, row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    /// `[row, col]` as an element of the observation space.
    pub fn to_indices(&self) -> Vec<u32> { vec![self.row as u32, self.col as u32] }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self { Self { row, col } }
}

impl From<Cell> for (usize, usize) {
    fn from(c: Cell) -> Self { (c.row, c.col) }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four moves, index-addressed in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    pub const fn index(self) -> usize { self as usize }

    /// `(d_row, d_col)` displacement.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = EnvError;

    fn try_from(index: i64) -> Result<Self> {
        match index {
            0 => Ok(Action::Up),
            1 => Ok(Action::Right),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

/// Outcome of one move: where the agent ends up, the reward, and whether that is the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub state: Cell,
    pub reward: i32,
    pub done: bool,
}

impl From<Transition> for Step<Cell> {
    fn from(t: Transition) -> Self {
        Step::new(t.state, t.reward, t.done, false, Info::new())
    }
}

/// Fixed geometry, wind profile and endpoints. There is exactly one instance,
/// [`GridConfig::TEXTBOOK`], shared by every environment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridConfig {
    rows: usize,
    cols: usize,
    wind: [usize; COLS],
    start: Cell,
    goal: Cell,
}

impl GridConfig {
    pub const TEXTBOOK: GridConfig = GridConfig {
        rows: ROWS,
        cols: COLS,
        wind: WIND,
        start: Cell::new(3, 0),
        goal: Cell::new(3, 7),
    };

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn wind(&self) -> &[usize; COLS] { &self.wind }
    pub fn start(&self) -> Cell { self.start }
    pub fn goal(&self) -> Cell { self.goal }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Pure transition function. Wind is taken from the column the agent is in
    /// before moving, then the action is added, then both coordinates are
    /// clamped into the grid.
    pub fn transition(&self, state: Cell, action: Action) -> Result<Transition> {
        if !self.contains(state) {
            return Err(EnvError::InvalidState(format!("{state} is outside the {}x{} grid", self.rows, self.cols)));
        }
        let (d_row, d_col) = action.delta();
        let row = state.row as i64 - self.wind[state.col] as i64 + d_row;
        let col = state.col as i64 + d_col;
        let next = Cell::new(
            row.clamp(0, self.rows as i64 - 1) as usize,
            col.clamp(0, self.cols as i64 - 1) as usize,
        );
        let done = next == self.goal;
        let reward = if done { GOAL_REWARD } else { STEP_REWARD };
        Ok(Transition { state: next, reward, done })
    }
}

/// Windy Gridworld.
/// Observation: agent [`Cell`]
/// Action space: Discrete(4) {0: up, 1: right, 2: down, 3: left}
/// Reward: -1 per step, 0 on the step that reaches the goal (which terminates).
/// The environment never truncates; wrap it in `TimeLimit` to cap episodes.
#[derive(Clone, Debug)]
pub struct WindyGridworldEnv {
    config: &'static GridConfig,
    state: Option<Cell>,
    render_mode: RenderMode,
}

impl Default for WindyGridworldEnv {
    fn default() -> Self { Self::new() }
}

impl WindyGridworldEnv {
    pub fn new() -> Self {
        Self { config: &GridConfig::TEXTBOOK, state: None, render_mode: RenderMode::Ansi }
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn config(&self) -> &'static GridConfig { self.config }
    pub fn render_mode(&self) -> RenderMode { self.render_mode }

    /// Current agent cell, `None` until the first reset.
    pub fn state(&self) -> Option<Cell> { self.state }

    /// Place the agent at an arbitrary cell, e.g. to evaluate a state directly.
    pub fn set_state(&mut self, cell: Cell) -> Result<()> {
        if !self.config.contains(cell) {
            warn!(%cell, "rejected out-of-grid state");
            return Err(EnvError::InvalidState(format!("{cell} is outside the {}x{} grid", self.config.rows, self.config.cols)));
        }
        self.state = Some(cell);
        Ok(())
    }

    pub fn action_space(&self) -> Discrete { Discrete::new(Action::ALL.len() as u32) }

    pub fn observation_space(&self) -> MultiDiscrete {
        MultiDiscrete::new(vec![self.config.rows as u32, self.config.cols as u32])
    }

    /// Evaluate a move from `state` without touching the environment.
    pub fn simulate_step(&self, state: Cell, action: i64) -> Result<Transition> {
        let action = Action::try_from(action).inspect_err(|_| warn!(action, "rejected action index"))?;
        self.config.transition(state, action)
    }

    /// What the renderers see; pre-reset the agent is drawn on the start cell.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.config, self.state)
    }

    pub fn render_text(&self) -> String {
        TextRenderer.draw(&self.snapshot())
    }

    pub fn render_pixels(&self, cell_size: u32) -> RenderFrame {
        PixelRenderer::new(cell_size).render(&self.snapshot())
    }
}

impl Env for WindyGridworldEnv {
    type Obs = Cell;
    type Act = i64;

    fn reset(&mut self, _seed: Option<u64>) -> (Self::Obs, Info) {
        let start = self.config.start;
        self.state = Some(start);
        debug!(%start, "reset");
        (start, Info::new())
    }

    fn step(&mut self, action: Self::Act) -> Result<Step<Self::Obs>> {
        let from = self.state.ok_or(EnvError::NotInitialized)?;
        let t = self.simulate_step(from, action)?;
        self.state = Some(t.state);
        trace!(%from, to = %t.state, action, reward = t.reward, "step");
        if t.done {
            debug!(goal = %t.state, "goal reached");
        }
        Ok(t.into())
    }

    fn render(&self) -> Option<RenderFrame> {
        let snapshot = self.snapshot();
        Some(match self.render_mode {
            RenderMode::Ansi => TextRenderer.render(&snapshot),
            RenderMode::RgbArray => PixelRenderer::default().render(&snapshot),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_at(row: usize, col: usize) -> WindyGridworldEnv {
        let mut env = WindyGridworldEnv::new();
        env.set_state(Cell::new(row, col)).expect("in-bounds cell");
        env
    }

    #[test]
    fn textbook_constants() {
        let c = &GridConfig::TEXTBOOK;
        assert_eq!((c.rows(), c.cols()), (7, 10));
        assert_eq!(c.wind(), &[0, 0, 0, 1, 1, 1, 2, 2, 1, 0]);
        assert_eq!(c.start(), Cell::new(3, 0));
        assert_eq!(c.goal(), Cell::new(3, 7));
    }

    #[test]
    fn action_indices_map_to_deltas() {
        assert_eq!(Action::try_from(0i64).unwrap().delta(), (-1, 0));
        assert_eq!(Action::try_from(1i64).unwrap().delta(), (0, 1));
        assert_eq!(Action::try_from(2i64).unwrap().delta(), (1, 0));
        assert_eq!(Action::try_from(3i64).unwrap().delta(), (0, -1));
        for a in Action::ALL {
            assert_eq!(Action::try_from(a.index() as i64).unwrap(), a);
        }
        assert_eq!(Action::try_from(4i64), Err(EnvError::InvalidAction(4)));
    }

    #[test]
    fn reset_returns_start() {
        let mut env = WindyGridworldEnv::new();
        assert_eq!(env.state(), None);
        let (obs, info) = env.reset(None);
        assert_eq!(obs, Cell::new(3, 0));
        assert!(info.is_empty());
        assert_eq!(env.state(), Some(Cell::new(3, 0)));
    }

    #[test]
    fn step_before_reset_fails() {
        let mut env = WindyGridworldEnv::new();
        assert_eq!(env.step(1), Err(EnvError::NotInitialized));
        assert_eq!(env.state(), None);
    }

    #[test]
    fn calm_column_moves_without_wind() {
        let mut env = WindyGridworldEnv::new();
        env.reset(None);
        let s = env.step(1).unwrap();
        assert_eq!(s.observation, Cell::new(3, 1));
        assert_eq!(s.reward, -1);
        assert!(!s.terminated && !s.truncated);
    }

    #[test]
    fn wind_uses_column_before_move() {
        // column 2 has no wind; moving right into column 3 must not be pushed
        let mut env = env_at(3, 2);
        assert_eq!(env.step(1).unwrap().observation, Cell::new(3, 3));
        // column 3 has wind 1; moving left out of it is pushed
        let mut env = env_at(3, 3);
        assert_eq!(env.step(3).unwrap().observation, Cell::new(2, 2));
    }

    #[test]
    fn clamps_at_edges() {
        assert_eq!(env_at(3, 0).step(3).unwrap().observation, Cell::new(3, 0));
        assert_eq!(env_at(6, 0).step(2).unwrap().observation, Cell::new(6, 0));
        assert_eq!(env_at(0, 9).step(1).unwrap().observation, Cell::new(0, 9));
        assert_eq!(env_at(1, 7).step(3).unwrap().observation, Cell::new(0, 6));
    }

    #[test]
    fn goal_terminates_with_zero_reward() {
        let mut env = env_at(4, 8);
        let s = env.step(3).unwrap();
        assert_eq!(s.observation, Cell::new(3, 7));
        assert_eq!(s.reward, 0);
        assert!(s.terminated);
    }

    #[test]
    fn simulate_step_is_pure() {
        let env = env_at(3, 6);
        let t = env.simulate_step(Cell::new(3, 6), 1).unwrap();
        assert_eq!(t, Transition { state: Cell::new(1, 7), reward: -1, done: false });
        assert_eq!(env.state(), Some(Cell::new(3, 6)));
    }

    #[test]
    fn out_of_grid_cells_are_rejected() {
        let mut env = WindyGridworldEnv::new();
        assert!(matches!(env.set_state(Cell::new(7, 0)), Err(EnvError::InvalidState(_))));
        assert!(matches!(env.set_state(Cell::new(0, 10)), Err(EnvError::InvalidState(_))));
        assert!(matches!(env.simulate_step(Cell::new(0, 10), 0), Err(EnvError::InvalidState(_))));
        assert_eq!(env.state(), None);
    }

    #[test]
    fn spaces_match_grid() {
        let env = WindyGridworldEnv::new();
        assert_eq!(env.action_space().n(), 4);
        assert_eq!(env.observation_space().nvec(), &[7, 10]);
    }

    #[test]
    fn render_follows_mode() {
        let env = WindyGridworldEnv::new();
        assert!(matches!(env.render(), Some(RenderFrame::Text(_))));
        let env = env.with_render_mode(RenderMode::RgbArray);
        assert!(matches!(env.render(), Some(RenderFrame::Pixels { .. })));
    }
}
