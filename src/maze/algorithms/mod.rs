mod depth_first_search;
mod static_pattern;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{dims::Dims, progress::ProgressHandle, registry::Registry};

use super::Maze;

pub use depth_first_search::DepthFirstSearch;
pub use static_pattern::StaticPattern;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Smallest accepted side length for carved mazes.
pub const MIN_SIZE: i32 = 3;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid maze dimensions {0:?}, both sides must be at least {MIN_SIZE}")]
    InvalidDimensions(Dims),
    #[error("malformed pattern: {0}")]
    MalformedPattern(String),
    #[error("unknown maze mode `{0}`")]
    UnknownMode(String),
    #[error("generation stopped")]
    Stopped,
}

pub trait MazeGenerator: fmt::Debug + Sync + Send {
    /// Produces a finalized maze. `size` is the requested size; generators
    /// that derive their dimensions elsewhere (see [`StaticPattern`]) ignore
    /// it.
    fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        progress: ProgressHandle,
    ) -> Result<Maze, GeneratorError>;

    fn guess_progress_complexity(&self, size: Dims) -> usize {
        size.product().max(0) as usize
    }
}

pub type GeneratorRegistry = Registry<Box<dyn MazeGenerator>>;

/// Registry with the built-in maze modes: `random` (depth-first carving,
/// also the default) and `static` (the fixed pattern).
pub fn default_registry() -> GeneratorRegistry {
    let mut registry: GeneratorRegistry = Registry::with_default(Box::new(DepthFirstSearch));
    registry.register("random".to_string(), Box::new(DepthFirstSearch));
    registry.register("static".to_string(), Box::<StaticPattern>::default());
    registry
}

/// Runs the generator registered under `mode`, seeding the rng from `seed`
/// when given so generation is reproducible.
pub fn generate(
    registry: &GeneratorRegistry,
    size: Dims,
    mode: &str,
    seed: Option<u64>,
    progress: ProgressHandle,
) -> Result<Maze, GeneratorError> {
    let generator = registry
        .get(mode)
        .ok_or_else(|| GeneratorError::UnknownMode(mode.to_string()))?;

    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));

    progress.lock().from = generator.guess_progress_complexity(size); // initial work estimate
    log::debug!("generating {:?} maze with `{}`", size, mode);

    generator.generate(size, &mut rng, progress)
}

/// Builds a fully generated, immutable maze of the given mode.
pub fn create_maze(width: i32, height: i32, mode: &str) -> Result<Maze, GeneratorError> {
    create_maze_seeded(width, height, mode, None)
}

/// Same as [`create_maze`], but with a fixed seed for reproducible layouts.
pub fn create_maze_seeded(
    width: i32,
    height: i32,
    mode: &str,
    seed: Option<u64>,
) -> Result<Maze, GeneratorError> {
    generate(
        &default_registry(),
        Dims(width, height),
        mode,
        seed,
        ProgressHandle::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_is_rejected() {
        let err = create_maze(15, 15, "spiral").unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownMode(mode) if mode == "spiral"));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = create_maze_seeded(21, 21, "random", Some(99)).unwrap();
        let b = create_maze_seeded(21, 21, "random", Some(99)).unwrap();

        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.start(), b.start());
        assert_eq!(a.end(), b.end());
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = create_maze_seeded(31, 31, "random", Some(1)).unwrap();
        let b = create_maze_seeded(31, 31, "random", Some(2)).unwrap();

        assert_ne!(a.cells(), b.cells());
    }

    #[test]
    fn stopped_progress_aborts_generation() {
        let progress = ProgressHandle::new();
        progress.stop();

        let result = generate(
            &default_registry(),
            Dims(21, 21),
            "random",
            Some(0),
            progress,
        );
        assert!(matches!(result, Err(GeneratorError::Stopped)));
    }

    #[test]
    fn progress_finishes_on_success() {
        let progress = ProgressHandle::new();
        generate(
            &default_registry(),
            Dims(15, 15),
            "random",
            Some(3),
            progress.clone(),
        )
        .unwrap();

        assert!(progress.progress().is_done);
    }
}
