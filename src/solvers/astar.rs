use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::{Parents, reconstruct_path};
use crate::maze::{Maze, Path, Position};

/// Frontier entry. Ordering is by `f` first, then by position (x, then y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ScoredCell {
    f: usize,
    coord: Position,
}

/// Manhattan distance, admissible and consistent on a 4-connected unit-cost grid.
fn heuristic(from: Position, to: Position) -> usize {
    from.0.abs_diff(to.0) + from.1.abs_diff(to.1)
}

/// A* search with unit step cost and the Manhattan heuristic.
///
/// Cells are re-queued whenever a cheaper route to them is found; the stale
/// entries left behind are still popped and counted as explored.
pub fn solve_astar(maze: &Maze, start: Position, goal: Position) -> (Option<Path>, usize) {
    // Using Reverse to turn the max-heap into a min-heap
    let mut frontier = BinaryHeap::from([Reverse(ScoredCell {
        f: heuristic(start, goal),
        coord: start,
    })]);
    let mut parents: Parents = HashMap::from([(start, None)]);
    let mut g_scores: HashMap<Position, usize> = HashMap::from([(start, 0)]);
    let mut nodes_explored = 0;

    while let Some(Reverse(ScoredCell { coord: current, .. })) = frontier.pop() {
        nodes_explored += 1;

        if current == goal {
            return (Some(reconstruct_path(&parents, goal)), nodes_explored);
        }

        let tentative_g = g_scores[&current] + 1;
        for next in maze.neighbors(current) {
            if g_scores.get(&next).is_none_or(|&g| tentative_g < g) {
                parents.insert(next, Some(current));
                g_scores.insert(next, tentative_g);
                frontier.push(Reverse(ScoredCell {
                    f: tentative_g + heuristic(next, goal),
                    coord: next,
                }));
            }
        }
    }

    (None, nodes_explored)
}
