use crate::maze::{Grid, GridCell};

/// A logical cell as (column, row) in cell space.
pub type CellCoord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Character grid addressed by logical cells.
///
/// `width` x `height` cells map onto a `(2 * width + 1)` x `(2 * height + 1)`
/// character grid: cell `(x, y)` sits at `(2x + 1, 2y + 1)` and the walls
/// between cells sit on the even rows and columns.
pub struct Canvas {
    grid: Grid,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Creates a fully walled canvas.
    pub fn new(width: usize, height: usize) -> Self {
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        Canvas {
            grid: Grid::new(width * 2 + 1, height * 2 + 1, GridCell::Wall),
            width,
            height,
        }
    }

    /// Width of the maze in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the maze in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_in_bounds(&self, coord: CellCoord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Index of a cell in row-major order, for per-cell bookkeeping.
    pub fn index(&self, coord: CellCoord) -> usize {
        coord.1 * self.width + coord.0
    }

    fn to_grid_coord(coord: CellCoord) -> (usize, usize) {
        (coord.0 * 2 + 1, coord.1 * 2 + 1)
    }

    pub fn set(&mut self, coord: CellCoord, cell: GridCell) {
        self.grid.set(Canvas::to_grid_coord(coord), cell);
    }

    /// Opens the center of a cell.
    pub fn carve(&mut self, coord: CellCoord) {
        self.set(coord, GridCell::Floor);
    }

    /// Removes the wall after `from`: to its right for `Vertical`, below it for `Horizontal`.
    ///
    /// # Panics
    /// * If `from` is out of bounds
    /// * If `from` is in the rightmost column and `orientation` is `Vertical`
    /// * If `from` is in the bottommost row and `orientation` is `Horizontal`
    pub fn remove_wall_cell_after(&mut self, from: CellCoord, orientation: Orientation) {
        if !self.is_in_bounds(from) {
            panic!("The given coordinate is out of bounds");
        }
        let (gx, gy) = Canvas::to_grid_coord(from);
        let wall_coord = match orientation {
            Orientation::Horizontal => {
                if from.1 + 1 >= self.height {
                    panic!("Cannot remove wall after the bottommost cell");
                }
                (gx, gy + 1)
            }
            Orientation::Vertical => {
                if from.0 + 1 >= self.width {
                    panic!("Cannot remove wall after the rightmost cell");
                }
                (gx + 1, gy)
            }
        };
        self.grid.set(wall_coord, GridCell::Floor);
    }

    /// Removes the wall between two orthogonally adjacent cells.
    pub fn remove_wall_between(&mut self, a: CellCoord, b: CellCoord) {
        let (from, orientation) = if a.0 == b.0 {
            // Same column, so the wall is horizontal
            (std::cmp::min_by_key(a, b, |c| c.1), Orientation::Horizontal)
        } else {
            // Same row, so the wall is vertical
            (std::cmp::min_by_key(a, b, |c| c.0), Orientation::Vertical)
        };
        self.remove_wall_cell_after(from, orientation);
    }

    /// Places the start marker on the first cell and the end marker on the last one.
    pub fn into_grid(mut self) -> Grid {
        self.set((0, 0), GridCell::Start);
        self.set((self.width - 1, self.height - 1), GridCell::End);
        self.grid
    }
}

/// Get neighbors of a cell.
/// A neighbor is considered a cell that is one step away in the cardinal directions (right, down, left, up).
pub fn get_neighbors(coord: CellCoord, canvas: &Canvas) -> impl Iterator<Item = CellCoord> + '_ {
    let (x, y) = coord;
    // NOTE: x - 1 or y - 1 wraps to usize::MAX at the edge, which the bounds check filters out.
    [
        (x.saturating_add(1), y),
        (x, y.saturating_add(1)),
        (x.wrapping_sub(1), y),
        (x, y.wrapping_sub(1)),
    ]
    .into_iter()
    .filter(move |&c| canvas.is_in_bounds(c))
}
