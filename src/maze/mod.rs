pub mod cell;
pub mod grid;

pub use cell::GridCell;
pub use grid::Grid;

use crate::error::{MazeError, Result};

/// Grid coordinate as (column, row).
pub type Position = (usize, usize);

/// Positions from start to end inclusive, in traversal order.
pub type Path = Vec<Position>;

/// Read-only view over a [`Grid`] that knows where the start and end markers are.
#[derive(Debug, Clone, Copy)]
pub struct Maze<'g> {
    grid: &'g Grid,
    start: Option<Position>,
    end: Option<Position>,
}

impl<'g> Maze<'g> {
    /// Wraps `grid`, locating the first `S` and `E` in row-major order.
    pub fn new(grid: &'g Grid) -> Self {
        Maze {
            grid,
            start: grid.find(GridCell::START),
            end: grid.find(GridCell::END),
        }
    }

    /// Wraps `grid` with explicit endpoints, ignoring any markers in it.
    pub fn with_endpoints(grid: &'g Grid, start: Position, end: Position) -> Self {
        Maze {
            grid,
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    /// Both endpoints, or `MalformedGrid` naming the missing marker.
    pub fn endpoints(&self) -> Result<(Position, Position)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            (None, _) => Err(MazeError::MalformedGrid(
                "no start marker 'S' found".to_string(),
            )),
            (_, None) => Err(MazeError::MalformedGrid(
                "no end marker 'E' found".to_string(),
            )),
        }
    }

    /// True iff `(x, y)` is inside the grid and not a wall.
    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        self.grid
            .get((x, y))
            .is_some_and(|c| GridCell::from_symbol(c).is_passable())
    }

    /// Passable cells one orthogonal step away, in east, south, west, north order.
    pub fn neighbors(&self, coord: Position) -> impl Iterator<Item = Position> + 'g {
        let (x, y) = coord;
        let maze = *self;
        // x - 1 and y - 1 wrap to usize::MAX at the edge and fail the bounds check.
        [
            (x.saturating_add(1), y),
            (x, y.saturating_add(1)),
            (x.wrapping_sub(1), y),
            (x, y.wrapping_sub(1)),
        ]
        .into_iter()
        .filter(move |&(nx, ny)| maze.is_passable(nx, ny))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_lines(lines).unwrap()
    }

    #[test]
    fn test_markers() {
        let g = grid(&["#####", "#S E#", "#####"]);
        let maze = Maze::new(&g);
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.start(), Some((1, 1)));
        assert_eq!(maze.end(), Some((3, 1)));
        assert_eq!(maze.endpoints().unwrap(), ((1, 1), (3, 1)));
    }

    #[test]
    fn test_missing_markers() {
        let g = grid(&["###", "#S#", "###"]);
        let maze = Maze::new(&g);
        assert_eq!(maze.end(), None);
        assert!(matches!(maze.endpoints(), Err(MazeError::MalformedGrid(_))));
    }

    #[test]
    fn test_duplicate_markers_take_first() {
        let g = grid(&["E S", "S E"]);
        let maze = Maze::new(&g);
        assert_eq!(maze.start(), Some((2, 0)));
        assert_eq!(maze.end(), Some((0, 0)));
    }

    #[test]
    fn test_is_passable() {
        let g = grid(&["#S", "E "]);
        let maze = Maze::new(&g);
        assert!(!maze.is_passable(0, 0));
        assert!(maze.is_passable(1, 0));
        assert!(maze.is_passable(0, 1));
        assert!(maze.is_passable(1, 1));
        assert!(!maze.is_passable(2, 0));
        assert!(!maze.is_passable(0, 2));
        assert!(!maze.is_passable(usize::MAX, 0));
    }

    #[test]
    fn test_neighbor_order() {
        let g = grid(&["   ", "   ", "   "]);
        let maze = Maze::new(&g);
        let neighbors = maze.neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(2, 1), (1, 2), (0, 1), (1, 0)]);

        // Corners drop out-of-bounds candidates without reordering the rest
        let neighbors = maze.neighbors((0, 0)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 0), (0, 1)]);
        let neighbors = maze.neighbors((2, 2)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_neighbors_skip_walls() {
        let g = grid(&["# #", "S E", "###"]);
        let maze = Maze::new(&g);
        let neighbors = maze.neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(2, 1), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_neighbors_agree_with_is_passable() {
        let g = grid(&["#S*#", "E# x", "  ##"]);
        let maze = Maze::new(&g);
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                for (nx, ny) in maze.neighbors((x, y)) {
                    assert!(maze.is_passable(nx, ny));
                    assert_eq!(nx.abs_diff(x) + ny.abs_diff(y), 1);
                }
                let expected = [(x + 1, y), (x, y + 1), (x.wrapping_sub(1), y), (x, y.wrapping_sub(1))]
                    .into_iter()
                    .filter(|&(nx, ny)| maze.is_passable(nx, ny))
                    .count();
                assert_eq!(maze.neighbors((x, y)).count(), expected);
            }
        }
    }
}
