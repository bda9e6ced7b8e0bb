use super::{GridRenderer, GridSnapshot, Tile};
use crate::core::RenderFrame;
use crate::envs::Cell;
use crate::utils::render2d::{Canvas, Color, AGENT_BLUE, DARK_GRAY, GOAL_SALMON, GRAY, START_GREEN, WHITE};

/// RGBA raster of the grid. A strip one cell tall sits above the grid with one
/// square marker per unit of wind in each column.
#[derive(Clone, Copy, Debug)]
pub struct PixelRenderer {
    cell_size: u32,
}

impl Default for PixelRenderer {
    fn default() -> Self { Self::new(32) }
}

impl PixelRenderer {
    pub const MIN_CELL_SIZE: u32 = 8;
    pub const MAX_CELL_SIZE: u32 = 256;

    /// `cell_size` is clamped into `MIN_CELL_SIZE..=MAX_CELL_SIZE` so frame
    /// dimensions stay well inside `u32`/`i32` for the fixed grid.
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size: cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE) }
    }

    pub fn cell_size(&self) -> u32 { self.cell_size }

    /// Frame size for a `rows x cols` grid.
    pub fn frame_size(&self, rows: usize, cols: usize) -> (u32, u32) {
        let cs = self.cell_size;
        (cols as u32 * cs + 1, (rows as u32 + 1) * cs + 1)
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, cell: Cell) -> (i32, i32) {
        let cs = self.cell_size as i32;
        (cell.col as i32 * cs, cs + cell.row as i32 * cs)
    }

    fn tile_color(tile: Tile) -> Color {
        match tile {
            Tile::Empty => WHITE,
            Tile::Start => START_GREEN,
            Tile::Goal => GOAL_SALMON,
            Tile::Agent => AGENT_BLUE,
        }
    }

    pub fn draw(&self, snapshot: &GridSnapshot) -> Canvas {
        let config = snapshot.config;
        let (width, height) = self.frame_size(config.rows(), config.cols());
        let mut canvas = Canvas::new(width, height);
        let cs = self.cell_size as i32;

        // Wind strip
        let marker = (cs / 4).max(2);
        let gap = 2;
        for (col, &w) in config.wind().iter().enumerate() {
            let x = col as i32 * cs + (cs - marker) / 2;
            for k in 0..w as i32 {
                let y = cs - (k + 1) * (marker + gap);
                if y < 0 { break; }
                canvas.fill_rect(x, y, marker, marker, DARK_GRAY);
            }
        }

        for row in 0..config.rows() {
            for col in 0..config.cols() {
                let cell = Cell::new(row, col);
                let (x, y) = self.cell_origin(cell);
                canvas.fill_rect(x, y, cs, cs, Self::tile_color(snapshot.tile(cell)));
                canvas.stroke_rect(x, y, cs + 1, cs + 1, GRAY);
            }
        }
        canvas
    }
}

impl GridRenderer for PixelRenderer {
    fn render(&self, snapshot: &GridSnapshot) -> RenderFrame {
        self.draw(snapshot).into_render_frame()
    }
}
