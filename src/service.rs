//! Request/response contract consumed by a transport layer (HTTP handler, CLI).
//!
//! Everything here works on owned, per-call data: a request is parsed, the
//! selected algorithm runs to completion, and a response or a [`MazeError`]
//! comes back. Nothing is shared between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{MazeError, Result};
use crate::generators::{Generator, generate_maze};
use crate::maze::{Grid, GridCell, Maze, Path};
use crate::solvers::{SearchStats, Solver};

pub const DEFAULT_SOLVER: &str = "bfs";
pub const DEFAULT_GENERATOR: &str = "dfs";
/// Overall grid size offered by the UI before halving into cells.
pub const DEFAULT_UI_SIZE: i64 = 31;

fn default_solver() -> String {
    DEFAULT_SOLVER.to_string()
}

fn default_generator() -> String {
    DEFAULT_GENERATOR.to_string()
}

fn default_ui_size() -> i64 {
    DEFAULT_UI_SIZE
}

/// Largest upload accepted, in characters (`rows * cols`).
pub const MAX_UPLOAD_CELLS: usize = 1 << 24;

/// Parses the upload format: a `"<rows> <cols>"` header followed by `rows` lines.
///
/// Short or blank lines are padded with floor and long lines are cut to
/// `cols`. Fewer than `rows` lines, or a header over [`MAX_UPLOAD_CELLS`],
/// is `MalformedGrid`.
pub fn parse_upload(text: &str) -> Result<Grid> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| MazeError::MalformedGrid("upload is empty".to_string()))?;

    let dims = header
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<std::result::Result<Vec<_>, _>>();
    let (rows, cols) = match dims.as_deref() {
        Ok(&[rows, cols]) if rows > 0 && cols > 0 => (rows, cols),
        _ => {
            return Err(MazeError::MalformedGrid(format!(
                "expected a '<rows> <cols>' header with positive sizes, got {:?}",
                header
            )));
        }
    };
    if rows.checked_mul(cols).is_none_or(|cells| cells > MAX_UPLOAD_CELLS) {
        return Err(MazeError::MalformedGrid(format!(
            "{}x{} upload exceeds the {} cell limit",
            rows, cols, MAX_UPLOAD_CELLS
        )));
    }
    debug!(rows, cols, "parsed upload header");

    let body = lines.take(rows).collect::<Vec<_>>();
    if body.len() < rows {
        return Err(MazeError::MalformedGrid(format!(
            "expected {} rows, got {}",
            rows,
            body.len()
        )));
    }

    Grid::from_rows(body.into_iter().map(|line| {
        line.chars()
            .chain(std::iter::repeat(GridCell::FLOOR))
            .take(cols)
    }))
}

/// Where the maze to solve comes from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MazeSource {
    /// Raw text in the upload format.
    Upload(String),
    /// An already structured grid, e.g. a previous generate response.
    Grid(Grid),
}

/// Stored maze document, shaped like a generate response.
#[derive(Deserialize)]
struct StoredMaze {
    grid: Grid,
}

impl MazeSource {
    /// Treats text starting with `{` or `[` as a stored JSON grid, anything else as an upload.
    pub fn detect(text: String) -> Result<Self> {
        match text.trim_start().chars().next() {
            Some('{') => Ok(MazeSource::Grid(
                serde_json::from_str::<StoredMaze>(&text)?.grid,
            )),
            Some('[') => Ok(MazeSource::Grid(serde_json::from_str(&text)?)),
            _ => Ok(MazeSource::Upload(text)),
        }
    }

    pub fn into_grid(self) -> Result<Grid> {
        match self {
            MazeSource::Upload(text) => parse_upload(&text),
            MazeSource::Grid(grid) => Ok(grid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolveRequest {
    #[serde(default = "default_solver")]
    pub algorithm: String,
    #[serde(flatten)]
    pub source: MazeSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsReport {
    pub nodes_explored: usize,
    pub time_ms: f64,
}

impl From<SearchStats> for StatsReport {
    fn from(stats: SearchStats) -> Self {
        StatsReport {
            nodes_explored: stats.nodes_explored,
            time_ms: stats.time_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResponse {
    pub grid: Grid,
    pub path: Path,
    pub stats: StatsReport,
}

/// Solves the requested maze. An unreachable end comes back as
/// [`MazeError::NoPathFound`].
pub fn solve(request: SolveRequest) -> Result<SolveResponse> {
    let algorithm = request.algorithm.clone();
    run_solve(request).inspect_err(|err| {
        if err.is_no_path() {
            info!(algorithm = %algorithm, "{}", err);
        } else {
            warn!(algorithm = %algorithm, "solve request rejected: {}", err);
        }
    })
}

fn run_solve(request: SolveRequest) -> Result<SolveResponse> {
    let solver = request.algorithm.parse::<Solver>()?;
    let grid = request.source.into_grid()?;
    let outcome = solver.solve(&Maze::new(&grid))?;
    let stats = outcome.stats;

    let path = outcome.path.ok_or(MazeError::NoPathFound {
        nodes_explored: stats.nodes_explored,
    })?;
    info!(
        algorithm = solver.name(),
        width = grid.width(),
        height = grid.height(),
        path_len = path.len(),
        nodes_explored = stats.nodes_explored,
        time_ms = stats.time_ms(),
        "solved maze"
    );

    Ok(SolveResponse {
        grid,
        path,
        stats: stats.into(),
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_generator")]
    pub algorithm: String,
    /// Overall grid rows as shown in the UI; halved into cell rows.
    #[serde(default = "default_ui_size")]
    pub rows: i64,
    /// Overall grid columns as shown in the UI; halved into cell columns.
    #[serde(default = "default_ui_size")]
    pub cols: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        GenerateRequest {
            algorithm: default_generator(),
            rows: DEFAULT_UI_SIZE,
            cols: DEFAULT_UI_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateResponse {
    pub grid: Grid,
}

/// Generates a maze. The UI sizes are halved with integer division, so a
/// 31x31 request yields a 15x15 cell maze drawn on a 31x31 grid.
pub fn generate(request: GenerateRequest) -> Result<GenerateResponse> {
    run_generate(&request).inspect_err(|err| {
        warn!(
            algorithm = %request.algorithm,
            rows = request.rows,
            cols = request.cols,
            "generate request rejected: {}",
            err
        );
    })
}

fn run_generate(request: &GenerateRequest) -> Result<GenerateResponse> {
    let generator = request.algorithm.parse::<Generator>()?;
    let (rows, cols) = (request.rows / 2, request.cols / 2);
    let (Ok(cell_rows @ 1..), Ok(cell_cols @ 1..)) = (usize::try_from(rows), usize::try_from(cols))
    else {
        return Err(MazeError::InvalidDimensions { rows, cols });
    };

    let grid = generate_maze(generator, cell_rows, cell_cols, request.seed)?;
    info!(
        algorithm = generator.name(),
        rows = cell_rows,
        cols = cell_cols,
        "generated maze"
    );
    Ok(GenerateResponse { grid })
}

/// Error body handed back to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&MazeError> for ErrorResponse {
    fn from(err: &MazeError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}
