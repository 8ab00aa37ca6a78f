use crate::{
    array::Array2D,
    dims::Dims,
    maze::{Cell, Maze},
    progress::ProgressHandle,
};

use super::{GeneratorError, MazeGenerator, Random};

/// The predefined maze layout, one marker row per grid row: `'1'` is a wall,
/// `'0'` is open. The entrance gap sits in the top border at x = 11 and the
/// exit gap in the bottom border at x = 13.
const STATIC_PATTERN: [&str; 48] = [
    "11111111111011111111111111111111111111111111111111111111111111",
    "10000000010000000000000001011001000000000001001000000000000101",
    "10010011111111110011111001011011111111001001001001001111111101",
    "10010000000000000010001000000001011001001000000001000000000001",
    "11110010011111111110011110001011001011111111001001001111111111",
    "10000010000010000000000001011000000000000001001001000000000101",
    "10111111110010010010011111111011111111001001001111001111100101",
    "10010000010010010010000000001000001000001001001000001000000001",
    "10010010011110011110011111111011111011111111001111111111111101",
    "10010010010010010000001000001011001011000001000001001000000001",
    "11110011110010010011111111011111001011001111001001001111111101",
    "10000000010000010010000001011001000000001000001000000000100001",
    "11110011110010011110011111001011111011111111111001111111101111",
    "10000000000010000000000000000000000001000001000000000000100001",
    "10111111111111110011111011111111111011111001111001111111111101",
    "10010000000010000000001011000000001000000001000000001000000001",
    "10010011111110011111111001011011111011111001001111111111111101",
    "10000000000010000000001011001000001011001001000000000000000101",
    "11110011111111110010011111111001011111001001111001111111111111",
    "10000010000000000010000001011001011000000000000001000000000101",
    "10111110011111110010001011001011011111001001111001111000101101",
    "10010010000000010010001000001011000001001001001000000000101101",
    "11110011110011111111111111111001011111001111001111001111111101",
    "10000010010000010000001011000001000000000000000001000000000101",
    "11110010011111111110001011111111111111001001111111001111100101",
    "10000000000000000000000000000001000000001001001000000000100001",
    "10111111111110011111111011111111001011111001001001111111101111",
    "10011111111110011111110011111111001011111001001001111111001111",
    "10000010000010010000000000001000001011000000001001001000000001",
    "11110011110010010011111011111111111011111001111001001001111101",
    "10010000010010010010000000000001000000001001001000001000000101",
    "10111110010011111110001011111001011111111001001001111111111101",
    "10000010000000010000001000001000001011000001000001000000101101",
    "10111110011111111111111111111111001011111111111001001111100101",
    "10010010000000010000000000000001000000001000000000001000000001",
    "10010010011110011111111011111001011011111111111001111111100101",
    "10000000000010010000001000001000001000001000001000001000101101",
    "11111110011111110011111111011111111001001111001111111000101111",
    "10000010000010010000000001000000001011001000000000000000101101",
    "10010010010010010011111111111001011111111111111001111001111101",
    "10010000010000000010000000000001000000001001001000001000000001",
    "11111111111111110011111011111011111111111001001001001111111101",
    "10010000000000010010000001000001000000001000000001000000101101",
    "10010011111111110010001011111111001011001001001111111111100101",
    "10010010010000010010001011000001011001001001000001000000101101",
    "10010010010011111111111001011011111011111001001001001000101101",
    "10000000000000000000000000001000000000000001001001001000000001",
    "11111111111110111111111111111111111111111111111111111111111111",
];

const PATTERN_START: Dims = Dims(11, 0);
const PATTERN_END: Dims = Dims(13, STATIC_PATTERN.len() as i32 - 1);

/// Decodes a fixed rectangular pattern of wall/open markers into a maze.
///
/// The requested generation size is deliberately ignored: width and height
/// derive from the pattern itself, so callers must not assume the maze they
/// asked for is the size they get.
#[derive(Debug)]
pub struct StaticPattern {
    rows: Vec<String>,
    start: Dims,
    end: Dims,
}

impl StaticPattern {
    /// A generator for a custom pattern. The rows are validated when the
    /// pattern is decoded, not here.
    pub fn new(rows: Vec<String>, start: Dims, end: Dims) -> Self {
        Self { rows, start, end }
    }

    fn decode(&self) -> Result<Maze, GeneratorError> {
        let height = self.rows.len();
        let width = self.rows.first().map_or(0, |row| row.chars().count());
        if height == 0 || width == 0 {
            return Err(GeneratorError::MalformedPattern(
                "pattern has no rows".to_string(),
            ));
        }

        let mut cells = Array2D::new(Cell::Wall, width, height);

        for (y, row) in self.rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GeneratorError::MalformedPattern(format!(
                    "row {} has {} markers, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }

            for (x, marker) in row.chars().enumerate() {
                cells[Dims(x as i32, y as i32)] =
                    Cell::from_marker(marker).ok_or_else(|| {
                        GeneratorError::MalformedPattern(format!(
                            "unexpected marker {:?} at ({}, {})",
                            marker, x, y
                        ))
                    })?;
            }
        }

        let mut maze = Maze::new(cells, self.start, self.end);
        if !maze.is_in_bounds(self.start) || !maze.is_in_bounds(self.end) {
            return Err(GeneratorError::MalformedPattern(format!(
                "start {:?} or end {:?} outside the {}x{} pattern",
                self.start, self.end, width, height
            )));
        }

        maze.set_open(self.start);
        maze.set_open(self.end);

        Ok(maze)
    }
}

impl Default for StaticPattern {
    fn default() -> Self {
        Self::new(
            STATIC_PATTERN.iter().map(|row| row.to_string()).collect(),
            PATTERN_START,
            PATTERN_END,
        )
    }
}

impl MazeGenerator for StaticPattern {
    fn generate(
        &self,
        _size: Dims,
        _rng: &mut Random,
        progress: ProgressHandle,
    ) -> Result<Maze, GeneratorError> {
        let maze = self.decode()?;
        progress.lock().finish();
        Ok(maze)
    }

    fn guess_progress_complexity(&self, _size: Dims) -> usize {
        self.rows.iter().map(|row| row.chars().count()).sum()
    }
}
