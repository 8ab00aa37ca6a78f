mod astar;

use std::time::Duration;

use thiserror::Error;

use crate::{dims::Dims, maze::Maze};

pub use astar::{solve, solve_observed};

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no path between {start:?} and {end:?}")]
    PathNotFound { start: Dims, end: Dims },
}

/// Outcome of a successful solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Shortest path from the maze start to its end, both included.
    pub path: Vec<Dims>,
    /// Wall-clock duration of the search.
    pub elapsed: Duration,
    /// Expansion attempts into cells the search had already finalized.
    pub redundant_visits: usize,
    /// Number of cells expanded from the frontier.
    pub expanded: usize,
}

impl SolveResult {
    /// Steps taken along the path.
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Hook invoked after every frontier expansion, so a frontend can draw the
/// search as it runs. `current` is the cell just popped from the frontier;
/// the grid and the start/end positions come with the maze itself.
pub trait SolveObserver {
    fn expanded(&mut self, maze: &Maze, current: Dims);
}

impl<F: FnMut(&Maze, Dims)> SolveObserver for F {
    fn expanded(&mut self, maze: &Maze, current: Dims) {
        self(maze, current)
    }
}
