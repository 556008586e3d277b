pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod service;
pub mod solvers;

pub use error::{MazeError, Result};
