use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cell::GridCell;
use crate::error::{MazeError, Result};

/// Rectangular character grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[char]>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a `width` x `height` grid filled with `cell`.
    pub(crate) fn new(width: usize, height: usize, cell: GridCell) -> Self {
        let data = vec![cell.symbol(); width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Builds a grid from rows of characters. Rows must be non-empty and of equal length.
    pub fn from_rows<R, I>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = char>,
    {
        let mut data = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let before = data.len();
            data.extend(row);
            let row_len = data.len() - before;
            match width {
                None => width = Some(row_len),
                Some(w) if w != row_len => {
                    return Err(MazeError::MalformedGrid(format!(
                        "row {} has length {}, expected {}",
                        y, row_len, w
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Grid {
                data: data.into_boxed_slice(),
                width,
                height,
            }),
            _ => Err(MazeError::MalformedGrid("grid is empty".to_string())),
        }
    }

    /// Builds a grid from one string per row.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        Grid::from_rows(lines.iter().map(|line| line.as_ref().chars()))
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_in_bounds(&self, coord: (usize, usize)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Character at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: (usize, usize)) -> Option<char> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord.0, coord.1)])
    }

    pub(crate) fn set(&mut self, coord: (usize, usize), cell: GridCell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell.symbol();
    }

    /// Iterates over the rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.data.chunks(self.width)
    }

    /// Renders every row as an owned string.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }

    /// First position holding `symbol`, scanning row by row.
    pub fn find(&self, symbol: char) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|&c| c == symbol)
            .map(|idx| (idx % self.width, idx / self.width))
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: char) -> usize {
        self.data.iter().filter(|&&c| c == symbol).count()
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for c in row {
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_lines().serialize(serializer)
    }
}

/// Rows arrive either as strings or as arrays of one-character strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Line(String),
    Chars(Vec<char>),
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<RawRow>::deserialize(deserializer)?;
        let rows = rows.into_iter().map(|row| match row {
            RawRow::Line(line) => line.chars().collect::<Vec<_>>(),
            RawRow::Chars(chars) => chars,
        });
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
