pub mod board;
pub use board::Maze;
pub mod cell;
pub use cell::Cell;
pub mod algorithms;
pub use algorithms::{create_maze, create_maze_seeded, GeneratorError};
