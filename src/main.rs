use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use maze_solver::{
    app::{App, logging},
    service::{DEFAULT_GENERATOR, DEFAULT_SOLVER, DEFAULT_UI_SIZE, ErrorResponse, GenerateRequest},
};

/// Generate grid mazes and solve them with BFS, DFS or A*
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Print JSON responses instead of human-readable output
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random maze
    Generate {
        /// Generator to use: dfs (recursive backtracker) or prim
        #[arg(short, long, default_value = DEFAULT_GENERATOR)]
        algorithm: String,

        /// Overall grid rows; halved into maze cells
        #[arg(long, default_value_t = DEFAULT_UI_SIZE, allow_negative_numbers = true)]
        rows: i64,

        /// Overall grid columns; halved into maze cells
        #[arg(long, default_value_t = DEFAULT_UI_SIZE, allow_negative_numbers = true)]
        cols: i64,

        /// Random seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve a maze file (upload text format or JSON grid)
    Solve {
        /// Solver to use: bfs, dfs or astar
        #[arg(short, long, default_value = DEFAULT_SOLVER)]
        algorithm: String,

        /// Only print the stats, not the maze
        #[arg(long)]
        no_render: bool,

        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init(cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to set up logging: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App {
        json: cli.json,
        ..App::default()
    };
    let mut stdout = std::io::stdout();
    let result = match cli.command {
        Command::Generate {
            algorithm,
            rows,
            cols,
            seed,
        } => app.generate(
            GenerateRequest {
                algorithm,
                rows,
                cols,
                seed,
            },
            &mut stdout,
        ),
        Command::Solve {
            algorithm,
            no_render,
            file,
        } => {
            app.render = !no_render;
            app.solve_file(algorithm, &file, &mut stdout)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!(ErrorResponse::from(&err))
                );
            } else {
                eprintln!("{}", err);
            }
            ExitCode::FAILURE
        }
    }
}
