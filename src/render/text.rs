use std::fmt::Write;

use super::{GridRenderer, GridSnapshot, Tile};
use crate::core::RenderFrame;
use crate::envs::Cell;

/// ASCII rendering: one line per row, `S` start, `G` goal, `A` agent, `.` empty,
/// followed by a line with the wind strength under each column.
///
/// ```text
/// . . . . . . . . . .
/// . . . . . . . . . .
/// . . . . . . . . . .
/// A . . . . . . G . .
/// . . . . . . . . . .
/// . . . . . . . . . .
/// . . . . . . . . . .
/// 0 0 0 1 1 1 2 2 1 0
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn draw(&self, snapshot: &GridSnapshot) -> String {
        let config = snapshot.config;
        let mut out = String::with_capacity((config.rows() + 1) * config.cols() * 2);
        for row in 0..config.rows() {
            let line: Vec<&str> = (0..config.cols())
                .map(|col| match snapshot.tile(Cell::new(row, col)) {
                    Tile::Empty => ".",
                    Tile::Start => "S",
                    Tile::Goal => "G",
                    Tile::Agent => "A",
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        for (col, w) in config.wind().iter().enumerate() {
            if col > 0 { out.push(' '); }
            // writing into a String cannot fail
            let _ = write!(out, "{w}");
        }
        out.push('\n');
        out
    }
}

impl GridRenderer for TextRenderer {
    fn render(&self, snapshot: &GridSnapshot) -> RenderFrame {
        RenderFrame::Text(self.draw(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envs::GridConfig;

    #[test]
    fn initial_grid() {
        let snap = GridSnapshot::new(&GridConfig::TEXTBOOK, None);
        let text = TextRenderer.draw(&snap);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], ". . . . . . . . . .");
        assert_eq!(lines[3], "A . . . . . . G . .");
        assert_eq!(lines[7], "0 0 0 1 1 1 2 2 1 0");
    }

    #[test]
    fn start_shows_once_agent_leaves() {
        let snap = GridSnapshot::new(&GridConfig::TEXTBOOK, Some(Cell::new(1, 7)));
        let text = TextRenderer.draw(&snap);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], ". . . . . . . A . .");
        assert_eq!(lines[3], "S . . . . . . G . .");
    }

    #[test]
    fn agent_hides_goal() {
        let snap = GridSnapshot::new(&GridConfig::TEXTBOOK, Some(Cell::new(3, 7)));
        let frame = TextRenderer.render(&snap);
        match frame {
            RenderFrame::Text(s) => assert!(!s.contains('G')),
            other => panic!("expected text frame, got {:?}", other),
        }
    }
}
