use rand::{Rng, rngs::StdRng};

use super::canvas::{Canvas, CellCoord, get_neighbors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellStatus {
    Unvisited,
    Frontier,
    InMaze,
}

/// A wall on the edge of the maze: `from` is already carved, `to` lies behind the wall.
#[derive(Debug, Clone, Copy)]
struct FrontierWall {
    from: CellCoord,
    to: CellCoord,
}

/// Queues the walls from `cell` to its unvisited neighbors and marks those neighbors as frontier.
fn push_walls(
    cell: CellCoord,
    canvas: &Canvas,
    status: &mut [CellStatus],
    frontier: &mut Vec<FrontierWall>,
) {
    for neighbor in get_neighbors(cell, canvas) {
        let idx = canvas.index(neighbor);
        if status[idx] == CellStatus::Unvisited {
            status[idx] = CellStatus::Frontier;
            frontier.push(FrontierWall {
                from: cell,
                to: neighbor,
            });
        }
    }
}

/// Randomized Prim's algorithm: grows the maze from one random cell by
/// repeatedly opening a random wall on its frontier.
pub fn randomized_prim(canvas: &mut Canvas, rng: &mut StdRng) {
    let mut status = vec![CellStatus::Unvisited; canvas.cell_count()];
    let mut frontier = Vec::new();

    // Initialize the starting point
    let start = (
        rng.random_range(0..canvas.width()),
        rng.random_range(0..canvas.height()),
    );
    status[canvas.index(start)] = CellStatus::InMaze;
    canvas.carve(start);
    push_walls(start, canvas, &mut status, &mut frontier);

    while !frontier.is_empty() {
        // Randomly select a wall from the frontier
        let idx = rng.random_range(0..frontier.len());
        let FrontierWall { from, to } = frontier.swap_remove(idx);

        // The cell behind the wall may have been absorbed through another wall already
        if status[canvas.index(to)] != CellStatus::Frontier {
            continue;
        }

        canvas.remove_wall_between(from, to);
        canvas.carve(to);
        status[canvas.index(to)] = CellStatus::InMaze;
        push_walls(to, canvas, &mut status, &mut frontier);
    }
}
