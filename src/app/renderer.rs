use std::collections::HashSet;
use std::io::Write;

use crossterm::{queue, style};

use crate::maze::{Grid, GridCell, Position};

/// Draws grids to a terminal-like writer, one styled character per cell.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Queues the whole grid with `path` overlaid on floor cells, then flushes once.
    pub fn render(&mut self, grid: &Grid, path: Option<&[Position]>) -> std::io::Result<()> {
        let route = path
            .unwrap_or_default()
            .iter()
            .copied()
            .collect::<HashSet<_>>();

        for (y, row) in grid.rows().enumerate() {
            for (x, &symbol) in row.iter().enumerate() {
                let cell = match GridCell::from_symbol(symbol) {
                    GridCell::Floor if route.contains(&(x, y)) => GridCell::Route,
                    cell => cell,
                };
                queue!(self.out, style::Print(cell))?;
            }
            queue!(self.out, style::Print("\n"))?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_overlays_path() {
        let grid = Grid::from_lines(&["#####", "#S E#", "#####"]).unwrap();
        let mut out = Vec::new();
        Renderer::new(&mut out)
            .render(&grid, Some(&[(1, 1), (2, 1), (3, 1)]))
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('*').count(), 1);
        assert_eq!(text.matches('#').count(), 12);
        assert_eq!(text.matches('\n').count(), 3);
    }

    #[test]
    fn test_render_without_path() {
        let grid = Grid::from_lines(&["S E"]).unwrap();
        let mut out = Vec::new();
        Renderer::new(&mut out).render(&grid, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('*'));
        assert!(text.contains('S') && text.contains('E'));
    }
}
