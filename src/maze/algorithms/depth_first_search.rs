use rand::{seq::SliceRandom as _, Rng as _};

use crate::{
    array::Array2D,
    dims::Dims,
    maze::{Cell, Maze},
    progress::ProgressHandle,
};

use super::{GeneratorError, MazeGenerator, Random, MIN_SIZE};

/// Offsets to the four carve candidates, two cells away.
const CARVE_OFFSETS: [Dims; 4] = [Dims(0, 2), Dims(2, 0), Dims(0, -2), Dims(-2, 0)];

/// Randomized depth-first carving.
///
/// Starts from a grid of solid walls and a random interior cell on the
/// odd-coordinate lattice, then repeatedly opens an unvisited cell two steps
/// away together with the wall cell between. Backtracks on dead ends until
/// the stack empties, which leaves a spanning corridor tree over the lattice:
/// every carved cell is reachable from every other, with no cycles.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        progress: ProgressHandle,
    ) -> Result<Maze, GeneratorError> {
        let Dims(width, height) = size;
        if width < MIN_SIZE || height < MIN_SIZE {
            return Err(GeneratorError::InvalidDimensions(size));
        }

        let mut cells = Array2D::new(Cell::Wall, width as usize, height as usize);

        // Carving only ever visits odd-coordinate cells strictly inside the
        // border, so the border itself stays wall.
        let lattice = Dims((width - 1) / 2, (height - 1) / 2);
        progress.lock().from = lattice.product() as usize;

        let carve_start = Dims(
            rng.gen_range(0..lattice.0) * 2 + 1,
            rng.gen_range(0..lattice.1) * 2 + 1,
        );
        cells[carve_start] = Cell::Open;

        let mut stack = vec![carve_start];
        let mut carved = 1;
        progress.lock().done = carved;

        while let Some(&current) = stack.last() {
            let candidates = CARVE_OFFSETS
                .iter()
                .map(|&off| current + off)
                .filter(|&next| {
                    0 < next.0
                        && next.0 < width - 1
                        && 0 < next.1
                        && next.1 < height - 1
                        && cells[next].is_wall()
                })
                .collect::<Vec<_>>();

            match candidates.choose(rng) {
                Some(&next) => {
                    cells[(current + next) / 2] = Cell::Open;
                    cells[next] = Cell::Open;
                    stack.push(next);

                    carved += 1;
                    progress.lock().done = carved;
                }
                None => {
                    stack.pop();
                }
            }

            if progress.is_stopped() {
                return Err(GeneratorError::Stopped);
            }
        }

        let start = Dims(1, 1);
        let end = Dims(width - 2, height - 2);

        let mut maze = Maze::new(cells, start, end);
        maze.set_open(start);
        maze.set_open(end);
        // Even side lengths put the end off the carved lattice; open one more
        // cell so the exit reaches a corridor.
        if end.0 % 2 == 0 && end.1 % 2 == 0 {
            maze.set_open(Dims(end.0, end.1 - 1));
        }

        progress.lock().finish();
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    fn carve(width: i32, height: i32, seed: u64) -> Maze {
        let mut rng = Random::seed_from_u64(seed);
        DepthFirstSearch
            .generate(Dims(width, height), &mut rng, ProgressHandle::new())
            .unwrap()
    }

    /// Flood fill over open cells, for checking reachability independently
    /// of the solver.
    fn reachable(maze: &Maze, from: Dims) -> hashbrown::HashSet<Dims> {
        let mut seen = hashbrown::HashSet::new();
        let mut stack = vec![from];
        while let Some(pos) = stack.pop() {
            if !seen.insert(pos) {
                continue;
            }
            stack.extend(maze.open_neighbors(pos));
        }
        seen
    }

    #[test]
    fn too_small_sizes_are_rejected() {
        let mut rng = Random::seed_from_u64(0);
        for size in [Dims(2, 2), Dims(2, 10), Dims(10, 2), Dims(0, 0), Dims(-3, 5)] {
            let result = DepthFirstSearch.generate(size, &mut rng, ProgressHandle::new());
            assert!(
                matches!(result, Err(GeneratorError::InvalidDimensions(s)) if s == size),
                "size {:?} should be rejected",
                size
            );
        }
    }

    #[test]
    fn start_and_end_are_open() {
        for seed in 0..20 {
            let maze = carve(15, 11, seed);
            assert!(!maze.is_wall(maze.start()));
            assert!(!maze.is_wall(maze.end()));
        }
    }

    #[test]
    fn border_stays_wall() {
        for seed in 0..20 {
            let maze = carve(13, 13, seed);
            let Dims(w, h) = maze.size();

            for x in 0..w {
                assert!(maze.is_wall(Dims(x, 0)));
                assert!(maze.is_wall(Dims(x, h - 1)));
            }
            for y in 0..h {
                assert!(maze.is_wall(Dims(0, y)));
                assert!(maze.is_wall(Dims(w - 1, y)));
            }
        }
    }

    #[test]
    fn end_is_reachable_from_start() {
        // odd and even side lengths place the end on and off the carved
        // lattice respectively
        for (width, height) in [(15, 15), (30, 30), (14, 9), (9, 14), (3, 3), (4, 4)] {
            for seed in 0..10 {
                let maze = carve(width, height, seed);
                assert!(
                    reachable(&maze, maze.start()).contains(&maze.end()),
                    "{}x{} seed {} end unreachable",
                    width,
                    height,
                    seed
                );
            }
        }
    }

    #[test]
    fn carving_spans_the_whole_lattice() {
        let maze = carve(17, 17, 5);
        let seen = reachable(&maze, maze.start());

        for pos in Dims::iter_fill(Dims(1, 1), maze.size() - Dims(1, 1)) {
            if pos.0 % 2 == 1 && pos.1 % 2 == 1 {
                assert!(seen.contains(&pos), "lattice cell {:?} not carved", pos);
            }
        }
    }

    #[test]
    fn minimum_size_generates() {
        let maze = carve(3, 3, 0);
        assert_eq!(maze.size(), Dims(3, 3));
        // the only interior cell doubles as start and end
        assert_eq!(maze.start(), maze.end());
        assert!(!maze.is_wall(maze.start()));
    }

    #[test]
    fn start_and_end_differ_above_minimum() {
        for (width, height) in [(4, 4), (5, 5), (15, 9)] {
            let maze = carve(width, height, 1);
            assert_ne!(maze.start(), maze.end());
        }
    }
}
