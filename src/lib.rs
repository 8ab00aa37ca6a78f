pub mod array;
pub mod dims;
pub mod maze;
pub mod progress;
pub mod registry;
pub mod solver;

pub use dims::Dims;
pub use maze::{create_maze, create_maze_seeded, GeneratorError, Maze};
pub use solver::{solve, solve_observed, SolveError, SolveObserver, SolveResult};
