use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

use hashbrown::{HashMap, HashSet};

use crate::{dims::Dims, maze::Maze};

use super::{SolveError, SolveObserver, SolveResult};

/// Frontier entry. The ordering is reversed so the binary heap pops the
/// lowest estimated total first, and it is total (estimate, then accumulated
/// cost, then row-major position), so repeated solves of one maze expand in
/// the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    estimate: i32,
    cost: i32,
    pos: Dims,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| (other.pos.1, other.pos.0).cmp(&(self.pos.1, self.pos.0)))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-solve search state, discarded once the path is reconstructed.
struct SearchState {
    frontier: BinaryHeap<Node>,
    costs: HashMap<Dims, i32>,
    predecessors: HashMap<Dims, Dims>,
    visited: HashSet<Dims>,
}

impl SearchState {
    fn new(start: Dims, end: Dims) -> Self {
        let mut state = Self {
            frontier: BinaryHeap::new(),
            costs: HashMap::new(),
            predecessors: HashMap::new(),
            visited: HashSet::new(),
        };

        state.costs.insert(start, 0);
        state.visited.insert(start);
        state.frontier.push(Node {
            estimate: start.manhattan_dist(end),
            cost: 0,
            pos: start,
        });

        state
    }

    /// Walks the predecessor links back from the end and reverses, yielding
    /// the start-to-end path.
    fn reconstruct(&self, end: Dims) -> Vec<Dims> {
        let mut path = vec![end];
        let mut current = end;

        while let Some(&prev) = self.predecessors.get(&current) {
            path.push(prev);
            current = prev;
        }

        path.reverse();
        path
    }
}

enum Outcome {
    Found,
    Exhausted,
}

/// Finds a shortest path through the maze with A* over the four-connected
/// grid, using Manhattan distance to the end as the heuristic. Step cost is
/// uniform, so the heuristic never overestimates and the returned path is
/// optimal.
pub fn solve(maze: &Maze) -> Result<SolveResult, SolveError> {
    solve_observed(maze, &mut |_: &Maze, _: Dims| {})
}

/// Same as [`solve`], with `observer` called after every expansion.
pub fn solve_observed<O>(maze: &Maze, observer: &mut O) -> Result<SolveResult, SolveError>
where
    O: SolveObserver + ?Sized,
{
    let (start, end) = (maze.start(), maze.end());
    let started = Instant::now();

    let mut state = SearchState::new(start, end);
    let mut redundant_visits = 0;
    let mut expanded = 0;

    let outcome = loop {
        let Some(Node { cost, pos, .. }) = state.frontier.pop() else {
            break Outcome::Exhausted;
        };

        expanded += 1;
        observer.expanded(maze, pos);

        if pos == end {
            break Outcome::Found;
        }

        for next in maze.open_neighbors(pos) {
            if state.visited.contains(&next) {
                redundant_visits += 1;
                continue;
            }

            let tentative = cost + 1;
            if tentative < state.costs.get(&next).copied().unwrap_or(i32::MAX) {
                state.predecessors.insert(next, pos);
                state.costs.insert(next, tentative);
                state.visited.insert(next);
                state.frontier.push(Node {
                    estimate: tentative + next.manhattan_dist(end),
                    cost: tentative,
                    pos: next,
                });
            }
        }
    };

    if let Outcome::Exhausted = outcome {
        log::debug!(
            "frontier exhausted after {} expansions, no path {:?} -> {:?}",
            expanded,
            start,
            end
        );
        return Err(SolveError::PathNotFound { start, end });
    }

    Ok(SolveResult {
        path: state.reconstruct(end),
        elapsed: started.elapsed(),
        redundant_visits,
        expanded,
    })
}
