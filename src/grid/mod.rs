mod rule;
mod step;

pub use self::rule::next_state;
use crate::{Pos, Preset};
use std::fmt;

/// Number of rows on the torus
pub const ROWS: usize = 64;
/// Number of columns on the torus
pub const COLS: usize = 256;

/// A fixed 64x256 field of cells whose edges wrap around
///
/// Every cell is either dead (`false`) or alive (`true`). A generation is
/// computed with [`Grid::step`], which always hands back a fresh grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[[bool; COLS]; ROWS]>,
}

impl Grid {
    /// An all-dead grid
    #[inline]
    pub fn new() -> Self {
        Self {
            cells: Box::new([[false; COLS]; ROWS]),
        }
    }

    pub fn from_alive<I: IntoIterator<Item = Pos>>(alive: I) -> Self {
        let mut grid = Self::new();
        for pos in alive {
            grid.set(pos, true);
        }
        grid
    }

    /// Creates an empty grid and populates it with the given preset
    pub fn from_preset<R: rand::Rng>(preset: Preset, rng: &mut R) -> Self {
        let mut grid = Self::new();
        preset.populate(&mut grid, rng);
        grid
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        self.cells[pos.row][pos.col]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, alive: bool) {
        self.cells[pos.row][pos.col] = alive;
    }

    /// Counts the live cells among the 8 toroidal neighbours of `pos`
    pub fn live_neighbours(&self, pos: Pos) -> u32 {
        pos.neighbours().filter(|&n| self.get(n)).count() as u32
    }

    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }

    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&cell| !cell))
    }

    /// Positions of every live cell, in row-major order
    pub fn alive(&self) -> impl Iterator<Item = Pos> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell)
                .map(move |(col, _)| Pos::new(row, col))
        })
    }

    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[bool; COLS]> {
        self.cells.iter()
    }

    /// Copy of this grid shifted by the given offset, wrapping at the edges
    pub fn translated(&self, d_row: isize, d_col: isize) -> Self {
        Self::from_alive(self.alive().map(|pos| pos.wrapping_offset(d_row, d_col)))
    }
}

impl Default for Grid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // a full dump is 16k cells, the live ones are what matter
        f.debug_struct("Grid")
            .field("alive", &self.alive().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_extinct() {
        let grid = Grid::new();

        assert!(grid.is_extinct());
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.rows().count(), ROWS);
    }

    #[test]
    fn alive_is_row_major() {
        let grid = Grid::from_alive([Pos::new(3, 1), Pos::new(0, 200), Pos::new(3, 0)]);

        let alive = grid.alive().collect::<Vec<_>>();
        assert_eq!(alive, vec![Pos::new(0, 200), Pos::new(3, 0), Pos::new(3, 1)]);
        assert_eq!(grid.alive_count(), 3);
    }

    #[test]
    fn neighbours_wrap_across_corner() {
        let grid = Grid::from_alive([Pos::new(ROWS - 1, COLS - 1)]);

        assert_eq!(grid.live_neighbours(Pos::new(0, 0)), 1);
        assert_eq!(grid.live_neighbours(Pos::new(0, COLS - 2)), 1);
        assert_eq!(grid.live_neighbours(Pos::new(ROWS - 2, 0)), 1);
        assert_eq!(grid.live_neighbours(Pos::new(1, 1)), 0);
    }

    #[test]
    fn cell_is_not_its_own_neighbour() {
        let grid = Grid::from_alive([Pos::new(10, 10)]);

        assert_eq!(grid.live_neighbours(Pos::new(10, 10)), 0);
        assert_eq!(grid.live_neighbours(Pos::new(11, 11)), 1);
    }

    #[test]
    fn translated_wraps() {
        let grid = Grid::from_alive([Pos::new(ROWS - 1, 0)]);

        let moved = grid.translated(1, -1);
        assert_eq!(moved.alive().collect::<Vec<_>>(), vec![Pos::new(0, COLS - 1)]);
    }
}
