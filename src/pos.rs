use crate::grid::{COLS, ROWS};

/// A `(row, col)` coordinate on the torus
///
/// Ordering is row-major: rows are compared first, then columns,
/// which matches the order cells are painted and stepped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offsets this position, wrapping around both grid edges
    ///
    /// ```rust
    /// use torus_life::{Pos, COLS, ROWS};
    ///
    /// let corner = Pos::new(0, 0).wrapping_offset(-1, -1);
    /// assert_eq!(corner, Pos::new(ROWS - 1, COLS - 1));
    /// ```
    #[inline]
    pub fn wrapping_offset(self, d_row: isize, d_col: isize) -> Self {
        Self {
            row: (self.row as isize + d_row).rem_euclid(ROWS as isize) as usize,
            col: (self.col as isize + d_col).rem_euclid(COLS as isize) as usize,
        }
    }

    /// The 8 toroidal neighbours of this position, top row first
    pub fn neighbours(self) -> impl Iterator<Item = Pos> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(move |&(d_row, d_col)| self.wrapping_offset(d_row, d_col))
    }
}

const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
