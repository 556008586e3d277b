use std::collections::HashMap;
use std::str::FromStr;
use std::time::{Duration, Instant};

mod astar;
mod bfs;
mod dfs;

use crate::error::{AlgorithmKind, MazeError, Result};
use crate::maze::{Maze, Path, Position};
use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;

/// Maps every discovered cell to the cell it was reached from. The start maps to `None`.
type Parents = HashMap<Position, Option<Position>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Bfs, Solver::Dfs, Solver::AStar];

    /// Name used to select the solver in requests.
    pub fn name(self) -> &'static str {
        match self {
            Solver::Bfs => "bfs",
            Solver::Dfs => "dfs",
            Solver::AStar => "astar",
        }
    }

    /// Runs the search from the maze's start to its end.
    ///
    /// Fails with `MalformedGrid` when either marker is missing. Otherwise the
    /// outcome always carries stats, and `path` is `None` when the end cannot
    /// be reached.
    pub fn solve(self, maze: &Maze) -> Result<SearchOutcome> {
        let (start, goal) = maze.endpoints()?;
        let started = Instant::now();
        let (path, nodes_explored) = match self {
            Solver::Bfs => solve_bfs(maze, start, goal),
            Solver::Dfs => solve_dfs(maze, start, goal),
            Solver::AStar => solve_astar(maze, start, goal),
        };
        Ok(SearchOutcome {
            path,
            stats: SearchStats {
                nodes_explored,
                elapsed: started.elapsed(),
            },
        })
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.name() == s)
            .ok_or_else(|| MazeError::InvalidAlgorithm {
                kind: AlgorithmKind::Solver,
                name: s.to_string(),
            })
    }
}

/// Per-run counters of a completed search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Number of frontier pops, including stale re-pops.
    pub nodes_explored: usize,
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn time_ms(&self) -> f64 {
        self.elapsed_secs() * 1000.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Walks parent links back from `goal` and returns the path in start-to-goal order.
fn reconstruct_path(parents: &Parents, goal: Position) -> Path {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::maze::{Grid, GridCell};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    pub(crate) fn grid(lines: &[&str]) -> Grid {
        Grid::from_lines(lines).unwrap()
    }

    /// Start and end connected only through a loop whose short side is east of the start.
    pub(crate) const LOOP: [&str; 5] = ["#####", "#   #", "# # #", "#S E#", "#####"];

    /// The start's component has five cells and no cycles; the end is walled in.
    pub(crate) const DISCONNECTED: [&str; 4] = ["#######", "#S  #E#", "# # ###", "#######"];

    const ROOM: [&str; 6] = [
        "#######",
        "#S    #",
        "# ##  #",
        "#   # #",
        "#  #E #",
        "#######",
    ];

    const OPEN: [&str; 6] = ["######", "#S   #", "#    #", "#    #", "#   E#", "######"];

    const CORRIDOR: [&str; 3] = ["#########", "#S     E#", "#########"];

    /// Asserts `path` runs from start to end through distinct, adjacent, passable cells.
    pub(crate) fn assert_valid_path(maze: &Maze, path: &[Position]) {
        assert_eq!(path.first().copied(), maze.start());
        assert_eq!(path.last().copied(), maze.end());
        let distinct = path.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), path.len(), "path repeats a cell");
        for &(x, y) in path {
            assert!(maze.is_passable(x, y), "({}, {}) is not passable", x, y);
        }
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{:?} -> {:?}", a, b);
        }
    }

    /// Fewest edges from start to end, by trying every simple path.
    fn brute_force_shortest(maze: &Maze) -> Option<usize> {
        fn walk(
            maze: &Maze,
            current: Position,
            goal: Position,
            on_path: &mut HashSet<Position>,
            best: &mut Option<usize>,
        ) {
            let edges = on_path.len() - 1;
            if current == goal {
                *best = Some(best.map_or(edges, |b| b.min(edges)));
                return;
            }
            for next in maze.neighbors(current) {
                if on_path.insert(next) {
                    walk(maze, next, goal, on_path, best);
                    on_path.remove(&next);
                }
            }
        }

        let (start, goal) = maze.endpoints().unwrap();
        let mut on_path = HashSet::from([start]);
        let mut best = None;
        walk(maze, start, goal, &mut on_path, &mut best);
        best
    }

    #[test]
    fn test_bfs_matches_brute_force() {
        for lines in [&ROOM[..], &OPEN[..], &LOOP[..], &CORRIDOR[..]] {
            let g = grid(lines);
            let maze = Maze::new(&g);
            let outcome = Solver::Bfs.solve(&maze).unwrap();
            let path = outcome.path.unwrap();
            assert_valid_path(&maze, &path);
            assert_eq!(Some(path.len() - 1), brute_force_shortest(&maze));
        }
    }

    #[test]
    fn test_astar_matches_bfs_length() {
        for lines in [&ROOM[..], &OPEN[..], &LOOP[..], &CORRIDOR[..]] {
            let g = grid(lines);
            let maze = Maze::new(&g);
            let bfs = Solver::Bfs.solve(&maze).unwrap().path.unwrap();
            let astar = Solver::AStar.solve(&maze).unwrap().path.unwrap();
            assert_valid_path(&maze, &astar);
            assert_eq!(astar.len(), bfs.len());
        }
    }

    /// Open `width` x `height` grid with roughly a quarter of the cells walled,
    /// `S` in the top-left corner and `E` in the bottom-right one.
    fn random_open_grid(rng: &mut StdRng, width: usize, height: usize) -> Grid {
        let rows = (0..height).map(|y| {
            (0..width)
                .map(|x| match (x, y) {
                    (0, 0) => GridCell::START,
                    _ if (x, y) == (width - 1, height - 1) => GridCell::END,
                    _ if rng.random_bool(0.25) => GridCell::WALL,
                    _ => GridCell::FLOOR,
                })
                .collect::<Vec<_>>()
        });
        Grid::from_rows(rows.collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_shortest_on_random_grids_with_loops() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let width = rng.random_range(2..=5);
            let height = rng.random_range(2..=5);
            let g = random_open_grid(&mut rng, width, height);
            let maze = Maze::new(&g);
            let expected = brute_force_shortest(&maze);

            for solver in [Solver::Bfs, Solver::AStar] {
                let path = solver.solve(&maze).unwrap().path;
                if let Some(path) = &path {
                    assert_valid_path(&maze, path);
                }
                assert_eq!(path.map(|p| p.len() - 1), expected, "{}\n{}", solver, g);
            }
        }
    }

    #[test]
    fn test_dfs_paths_are_valid() {
        for lines in [&ROOM[..], &OPEN[..], &LOOP[..], &CORRIDOR[..]] {
            let g = grid(lines);
            let maze = Maze::new(&g);
            let path = Solver::Dfs.solve(&maze).unwrap().path.unwrap();
            assert_valid_path(&maze, &path);
        }
    }

    #[test]
    fn test_dfs_can_be_longer_than_bfs() {
        let g = grid(&LOOP);
        let maze = Maze::new(&g);
        let bfs = Solver::Bfs.solve(&maze).unwrap().path.unwrap();
        let dfs = Solver::Dfs.solve(&maze).unwrap().path.unwrap();
        assert!(dfs.len() > bfs.len());
    }

    #[test]
    fn test_start_equals_end() {
        let g = grid(&["###", "# #", "###"]);
        let maze = Maze::with_endpoints(&g, (1, 1), (1, 1));
        for solver in Solver::ALL {
            let outcome = solver.solve(&maze).unwrap();
            assert_eq!(outcome.path, Some(vec![(1, 1)]), "{}", solver);
            assert_eq!(outcome.stats.nodes_explored, 1, "{}", solver);
        }
    }

    #[test]
    fn test_unreachable_end_explores_component() {
        let g = grid(&DISCONNECTED);
        let maze = Maze::new(&g);
        for solver in Solver::ALL {
            let outcome = solver.solve(&maze).unwrap();
            assert_eq!(outcome.path, None, "{}", solver);
            assert_eq!(outcome.stats.nodes_explored, 5, "{}", solver);
        }
    }

    #[test]
    fn test_isolated_single_cell_start() {
        let g = grid(&["S#E"]);
        let maze = Maze::new(&g);
        for solver in Solver::ALL {
            let outcome = solver.solve(&maze).unwrap();
            assert_eq!(outcome.path, None);
            assert_eq!(outcome.stats.nodes_explored, 1);
        }
    }

    #[test]
    fn test_missing_marker_fails_fast() {
        let g = grid(&["S  "]);
        let maze = Maze::new(&g);
        for solver in Solver::ALL {
            assert!(matches!(
                solver.solve(&maze),
                Err(MazeError::MalformedGrid(_))
            ));
        }
    }

    #[test]
    fn test_solver_names() {
        for solver in Solver::ALL {
            assert_eq!(solver.name().parse::<Solver>().unwrap(), solver);
        }
        let err = "dijkstra".parse::<Solver>().unwrap_err();
        assert!(matches!(
            err,
            MazeError::InvalidAlgorithm {
                kind: AlgorithmKind::Solver,
                ..
            }
        ));
        assert!("BFS".parse::<Solver>().is_err());
    }

    #[test]
    fn test_stats_units() {
        let stats = SearchStats {
            nodes_explored: 4,
            elapsed: Duration::from_micros(2500),
        };
        assert!((stats.elapsed_secs() - 0.0025).abs() < 1e-12);
        assert!((stats.time_ms() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_reconstruct_path() {
        let parents: Parents = HashMap::from([
            ((0, 0), None),
            ((1, 0), Some((0, 0))),
            ((1, 1), Some((1, 0))),
        ]);
        assert_eq!(reconstruct_path(&parents, (1, 1)), vec![(0, 0), (1, 0), (1, 1)]);
        assert_eq!(reconstruct_path(&parents, (0, 0)), vec![(0, 0)]);
    }
}
