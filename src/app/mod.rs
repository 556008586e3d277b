pub mod logging;
mod renderer;

use std::io::Write;
use std::path::Path;

pub use renderer::Renderer;

use crate::error::Result;
use crate::service::{self, GenerateRequest, MazeSource, SolveRequest};

/// Output settings for the command line front end.
#[derive(Debug, Clone, Copy)]
pub struct App {
    /// Print the JSON responses instead of human-readable output
    pub json: bool,
    /// Draw the solved maze with its path before the stats
    pub render: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            json: false,
            render: true,
        }
    }
}

impl App {
    /// Generates a maze and prints it, one row per line.
    pub fn generate(&self, request: GenerateRequest, out: &mut impl Write) -> Result<()> {
        let response = service::generate(request)?;
        if self.json {
            serde_json::to_writer(&mut *out, &response)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", response.grid)?;
        }
        Ok(())
    }

    /// Solves the maze stored at `path`, either in the upload format or as JSON.
    pub fn solve_file(&self, algorithm: String, path: &Path, out: &mut impl Write) -> Result<()> {
        let source = MazeSource::detect(std::fs::read_to_string(path)?)?;
        self.solve(SolveRequest { algorithm, source }, out)
    }

    pub fn solve(&self, request: SolveRequest, out: &mut impl Write) -> Result<()> {
        let response = service::solve(request)?;
        if self.json {
            serde_json::to_writer(&mut *out, &response)?;
            writeln!(out)?;
            return Ok(());
        }

        if self.render {
            Renderer::new(&mut *out).render(&response.grid, Some(&response.path))?;
        }
        writeln!(out, "Path length: {} steps", response.path.len() - 1)?;
        writeln!(out, "Nodes explored: {}", response.stats.nodes_explored)?;
        writeln!(out, "Time: {:.3} ms", response.stats.time_ms)?;
        Ok(())
    }
}
