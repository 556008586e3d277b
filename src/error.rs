use thiserror::Error;

/// Which kind of algorithm a name lookup was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Solver,
    Generator,
}

impl AlgorithmKind {
    fn prefix(&self) -> &'static str {
        match self {
            AlgorithmKind::Solver => "",
            AlgorithmKind::Generator => "generator ",
        }
    }
}

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Unknown {}algorithm: {}", .kind.prefix(), .name)]
    InvalidAlgorithm { kind: AlgorithmKind, name: String },
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),
    #[error("Invalid maze dimensions: {rows}x{cols} (both must be at least 1)")]
    InvalidDimensions { rows: i64, cols: i64 },
    #[error("No solution found ({nodes_explored} nodes explored)")]
    NoPathFound { nodes_explored: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MazeError {
    /// Whether this is the negative search result rather than an actual failure.
    pub fn is_no_path(&self) -> bool {
        matches!(self, MazeError::NoPathFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
