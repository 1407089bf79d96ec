use super::direction::Direction;
use crate::consts;
use serde::Deserialize;
use std::ops::Add;

/// A cell position on the grid.  Coordinates are signed so that a head that
/// has left the grid (e.g., `x == -1`) can still be represented and tested.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, d: Direction) -> Cell {
        let (dx, dy) = d.offset();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Dimensions of the playing field, in cells
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    /// Is `cell` inside the grid?
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.x)
            && (0..i32::from(self.height)).contains(&cell.y)
    }

    /// Total number of cells
    #[cfg(test)]
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// The cell at which a new snake's head is placed
    pub(crate) fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        consts::GRID_SIZE
    }
}
