use crate::{array::Array2D, dims::Dims};

use super::cell::Cell;

/// Offsets of the four axis-aligned neighbors, in expansion order.
pub const NEIGHBOR_OFFSETS: [Dims; 4] = [Dims(0, 1), Dims(1, 0), Dims(0, -1), Dims(-1, 0)];

/// A generated maze: a rectangular grid of open/wall cells plus the start and
/// end positions. Immutable once a generator has produced it, so shared
/// read-only access from multiple solves is safe.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) start: Dims,
    pub(crate) end: Dims,
}

impl Maze {
    pub(crate) fn new(cells: Array2D<Cell>, start: Dims, end: Dims) -> Self {
        Maze { cells, start, end }
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> i32 {
        self.size().0
    }

    pub fn height(&self) -> i32 {
        self.size().1
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        pos.all_non_negative() && pos.0 < self.width() && pos.1 < self.height()
    }

    /// Whether the position blocks movement. Out-of-bounds positions count
    /// as walls.
    pub fn is_wall(&self, pos: Dims) -> bool {
        self.get_cell(pos).map_or(true, Cell::is_wall)
    }

    pub fn get_cell(&self, pos: Dims) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    /// In-bounds axis-aligned neighbors of a cell, walls included.
    pub fn neighbors(&self, cell: Dims) -> impl Iterator<Item = Dims> + '_ {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |off| cell + off)
            .filter(|&pos| self.is_in_bounds(pos))
    }

    /// Neighbors reachable in one step.
    pub fn open_neighbors(&self, cell: Dims) -> impl Iterator<Item = Dims> + '_ {
        self.neighbors(cell).filter(|&pos| !self.is_wall(pos))
    }

    pub(crate) fn set_open(&mut self, pos: Dims) {
        if let Some(cell) = self.cells.get_mut(pos) {
            *cell = Cell::Open;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2D, Cell, Dims, Maze};

    fn corridor() -> Maze {
        // 3x3, open middle row
        let mut cells = Array2D::new(Cell::Wall, 3, 3);
        for x in 0..3 {
            cells[Dims(x, 1)] = Cell::Open;
        }
        Maze::new(cells, Dims(0, 1), Dims(2, 1))
    }

    #[test]
    fn bounds_and_walls() {
        let maze = corridor();

        assert!(maze.is_in_bounds(Dims(0, 0)));
        assert!(!maze.is_in_bounds(Dims(3, 1)));
        assert!(!maze.is_in_bounds(Dims(-1, 0)));

        assert!(maze.is_wall(Dims(0, 0)));
        assert!(!maze.is_wall(Dims(1, 1)));
        // out of bounds reads as wall
        assert!(maze.is_wall(Dims(-1, -1)));
    }

    #[test]
    fn open_neighbors_follow_the_corridor() {
        let maze = corridor();

        let open: Vec<_> = maze.open_neighbors(Dims(1, 1)).collect();
        assert_eq!(open, [Dims(2, 1), Dims(0, 1)]);

        let corner: Vec<_> = maze.neighbors(Dims(0, 0)).collect();
        assert_eq!(corner, [Dims(0, 1), Dims(1, 0)]);
    }
}
