use std::str::FromStr;

use rand::{SeedableRng, rngs::StdRng};

mod canvas;
mod prim;
mod recur_backtrack;

use canvas::Canvas;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;

use crate::error::{AlgorithmKind, MazeError, Result};
use crate::maze::Grid;

/// Largest accepted maze side, in cells.
pub const MAX_CELLS_PER_SIDE: usize = 2048;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
    Prim,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::RecurBacktrack, Generator::Prim];

    /// Name used to select the generator in requests.
    pub fn name(self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "dfs",
            Generator::Prim => "prim",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker (DFS)"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == s)
            .ok_or_else(|| MazeError::InvalidAlgorithm {
                kind: AlgorithmKind::Generator,
                name: s.to_string(),
            })
    }
}

/// Generates a `rows` x `cols` cell maze as a `(2 * rows + 1)` x `(2 * cols + 1)`
/// character grid, with `S` on the top-left cell and `E` on the bottom-right one.
///
/// Every cell is connected to every other one through exactly one path.
/// Both sides must lie in `1..=MAX_CELLS_PER_SIDE`.
pub fn generate_maze(
    generator: Generator,
    rows: usize,
    cols: usize,
    seed: Option<u64>,
) -> Result<Grid> {
    let sides = 1..=MAX_CELLS_PER_SIDE;
    if !sides.contains(&rows) || !sides.contains(&cols) {
        return Err(MazeError::InvalidDimensions {
            rows: i64::try_from(rows).unwrap_or(i64::MAX),
            cols: i64::try_from(cols).unwrap_or(i64::MAX),
        });
    }

    let mut canvas = Canvas::new(cols, rows);
    let mut rng = get_rng(seed);
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(&mut canvas, &mut rng),
        Generator::Prim => randomized_prim(&mut canvas, &mut rng),
    }
    Ok(canvas.into_grid())
}
