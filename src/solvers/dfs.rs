use std::collections::{HashMap, hash_map::Entry};

use super::{Parents, reconstruct_path};
use crate::maze::{Maze, Path, Position};

/// Depth-first search. The path found is valid but not necessarily the shortest.
pub fn solve_dfs(maze: &Maze, start: Position, goal: Position) -> (Option<Path>, usize) {
    let mut stack = vec![start];
    let mut parents: Parents = HashMap::from([(start, None)]);
    let mut nodes_explored = 0;

    while let Some(current) = stack.pop() {
        nodes_explored += 1;

        if current == goal {
            return (Some(reconstruct_path(&parents, goal)), nodes_explored);
        }

        // Neighbors are pushed east first, so the north one is expanded first
        for next in maze.neighbors(current) {
            if let Entry::Vacant(entry) = parents.entry(next) {
                entry.insert(Some(current));
                stack.push(next);
            }
        }
    }

    (None, nodes_explored)
}
