use std::time::Duration;

use maze_solver::{
    Result,
    generators::{Generator, generate_maze},
    maze::Maze,
    solvers::Solver,
};

/// Cell rows and columns of every profiled maze
const MAZE_CELLS: usize = 127;

fn main() -> Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);

    let mut totals = [(0usize, Duration::ZERO); Solver::ALL.len()];
    for seed in 0..num_iters as u64 {
        let grid = generate_maze(Generator::Prim, MAZE_CELLS, MAZE_CELLS, Some(seed))?;
        let maze = Maze::new(&grid);
        for (solver, total) in Solver::ALL.into_iter().zip(totals.iter_mut()) {
            let stats = solver.solve(&maze)?.stats;
            total.0 += stats.nodes_explored;
            total.1 += stats.elapsed;
        }
    }

    println!(
        "{} iteration(s) on a {}x{} cell maze ({}):",
        num_iters,
        MAZE_CELLS,
        MAZE_CELLS,
        Generator::Prim
    );
    for (solver, (nodes, elapsed)) in Solver::ALL.into_iter().zip(totals) {
        println!(
            "  {:<28} avg nodes explored: {:>10.1}  avg time: {:>9.3} ms",
            solver.to_string(),
            nodes as f64 / num_iters as f64,
            elapsed.as_secs_f64() * 1000.0 / num_iters as f64
        );
    }
    Ok(())
}
