use super::{COLS, Grid, ROWS, rule};
use rayon::prelude::*;

impl Grid {
    /// Computes the next generation
    ///
    /// Neighbourhoods wrap around every edge, so the grid behaves as a torus.
    /// `self` is left untouched and the caller replaces it with the result.
    pub fn step(&self) -> Grid {
        let mut next = Grid::new();
        for (row, cells) in next.cells.iter_mut().enumerate() {
            self.step_row(row, cells);
        }
        next
    }

    /// Same as [`Grid::step`], but rows are computed on the rayon thread pool
    pub fn step_parallel(&self) -> Grid {
        let mut next = Grid::new();
        next.cells
            .par_iter_mut()
            .enumerate()
            .for_each(|(row, cells)| self.step_row(row, cells));
        next
    }

    fn step_row(&self, row: usize, out: &mut [bool; COLS]) {
        let table = rule::get_rule_table();
        let lines = [
            &self.cells[(row + ROWS - 1) % ROWS],
            &self.cells[row],
            &self.cells[(row + 1) % ROWS],
        ];

        for (col, next) in out.iter_mut().enumerate() {
            let west = (col + COLS - 1) % COLS;
            let east = (col + 1) % COLS;

            // pack the 3x3 neighbourhood into the 9-bit table index
            let mut block = 0;
            for (i, line) in lines.iter().enumerate() {
                let bits = usize::from(line[west])
                    | usize::from(line[col]) << 1
                    | usize::from(line[east]) << 2;
                block |= bits << (i * 3);
            }
            *next = table[block];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pos, Preset, grid::next_state};
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn preset(preset: Preset) -> Grid {
        Grid::from_preset(preset, &mut StdRng::seed_from_u64(7))
    }

    fn steps(grid: &Grid, n: usize) -> Grid {
        let mut grid = grid.clone();
        for _ in 0..n {
            grid = grid.step();
        }
        grid
    }

    #[test]
    fn extinction_is_absorbing() {
        let grid = Grid::new();

        assert!(steps(&grid, 10).is_extinct());
    }

    #[test]
    fn lone_cell_dies() {
        let grid = Grid::from_alive([Pos::new(30, 30)]);

        assert!(grid.step().is_extinct());
    }

    #[test]
    fn step_leaves_input_untouched() {
        let grid = preset(Preset::Glider);
        let before = grid.clone();

        let next = grid.step();
        assert_eq!(grid, before);
        assert_ne!(next, before);
    }

    #[test]
    fn beehive_is_still_life() {
        let beehive = preset(Preset::Beehive);

        assert_eq!(beehive.step(), beehive);
    }

    #[test]
    fn pulsar_has_period_three() {
        let pulsar = preset(Preset::Pulsar);

        assert_ne!(steps(&pulsar, 1), pulsar);
        assert_ne!(steps(&pulsar, 2), pulsar);
        assert_eq!(steps(&pulsar, 3), pulsar);
    }

    #[test]
    fn glider_moves_diagonally() {
        let glider = preset(Preset::Glider);

        assert_eq!(steps(&glider, 4), glider.translated(1, 1));
        assert_eq!(steps(&glider, 8), glider.translated(2, 2));
    }

    #[test]
    fn glider_circles_the_torus() {
        let glider = preset(Preset::Glider);

        // one diagonal cell every 4 generations, COLS is a multiple of ROWS
        assert_eq!(steps(&glider, 4 * COLS), glider);
    }

    #[test]
    fn births_wrap_around_corners() {
        // an L of three cells split over three corners fills in the fourth
        let grid = Grid::from_alive([
            Pos::new(0, 0),
            Pos::new(0, COLS - 1),
            Pos::new(ROWS - 1, COLS - 1),
        ]);

        let expected = Grid::from_alive([
            Pos::new(0, 0),
            Pos::new(0, COLS - 1),
            Pos::new(ROWS - 1, 0),
            Pos::new(ROWS - 1, COLS - 1),
        ]);
        assert_eq!(grid.step(), expected);
        // and the block that forms across the corners is stable
        assert_eq!(expected.step(), expected);
    }

    #[test]
    fn parallel_step_on_presets() {
        for p in Preset::ALL {
            let grid = preset(p);
            assert_eq!(grid.step_parallel(), grid.step(), "{p}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn every_cell_follows_the_rule(seed in any::<u64>()) {
            let grid = Grid::from_preset(Preset::Random, &mut StdRng::seed_from_u64(seed));
            let next = grid.step();

            for row in 0..ROWS {
                for col in 0..COLS {
                    let pos = Pos::new(row, col);
                    let expected = next_state(grid.get(pos), grid.live_neighbours(pos));
                    prop_assert_eq!(next.get(pos), expected, "cell {:?}", pos);
                }
            }
        }

        #[test]
        fn parallel_matches_serial(seed in any::<u64>()) {
            let grid = Grid::from_preset(Preset::Random, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(grid.step_parallel(), grid.step());
        }
    }
}
