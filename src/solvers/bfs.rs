use std::collections::{HashMap, VecDeque, hash_map::Entry};

use super::{Parents, reconstruct_path};
use crate::maze::{Maze, Path, Position};

/// Breadth-first search. Returns the path with the fewest steps, if any,
/// and the number of cells taken off the queue.
pub fn solve_bfs(maze: &Maze, start: Position, goal: Position) -> (Option<Path>, usize) {
    let mut queue = VecDeque::from([start]);
    let mut parents: Parents = HashMap::from([(start, None)]);
    let mut nodes_explored = 0;

    while let Some(current) = queue.pop_front() {
        nodes_explored += 1;

        if current == goal {
            return (Some(reconstruct_path(&parents, goal)), nodes_explored);
        }

        for next in maze.neighbors(current) {
            // Record the parent on discovery so each cell is queued once
            if let Entry::Vacant(entry) = parents.entry(next) {
                entry.insert(Some(current));
                queue.push_back(next);
            }
        }
    }

    (None, nodes_explored)
}
