use rand::{Rng, rngs::StdRng};

use super::canvas::{Canvas, get_neighbors};

/// Randomized depth-first traversal over the cells, carving a passage every
/// time it steps into an unvisited cell.
pub fn recursive_backtrack(canvas: &mut Canvas, rng: &mut StdRng) {
    let mut visited = vec![false; canvas.cell_count()];

    // Initialize the starting point
    let start = (
        rng.random_range(0..canvas.width()),
        rng.random_range(0..canvas.height()),
    );
    visited[canvas.index(start)] = true;
    canvas.carve(start);

    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = get_neighbors(cell, canvas)
            .filter(|&c| !visited[canvas.index(c)])
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        canvas.remove_wall_between(cell, neighbor);
        canvas.carve(neighbor);
        visited[canvas.index(neighbor)] = true;
        // Carve the maze further in that neighbor's direction
        stack.push(neighbor);
    }
}
