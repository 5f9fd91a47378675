use std::sync::OnceLock;

/// The number of permutations for a 3x3 block of cells
const PERMUTATIONS: usize = 1 << 9;
/// Bit of the middle cell in a 3x3 block
const CENTER: usize = 0b000_010_000;
type RuleTable = [bool; PERMUTATIONS];

/// Conway's rule: a live cell survives with 2 or 3 live neighbours,
/// a dead cell is born with exactly 3
#[inline]
pub fn next_state(alive: bool, neighbours: u32) -> bool {
    matches!((alive, neighbours), (true, 2) | (_, 3))
}

/// Returns a singleton lookup table for the Game of Life rule
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
pub(super) fn get_rule_table() -> &'static RuleTable {
    static CELL: OnceLock<RuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the Game of Life rule
///
/// The table is indexed by a 9-bit number representing a cell and its neighbours,
/// three bits per row with the top row in the lowest bits.
/// The center cell is the middle-most bit, `1 << 4`.
///
/// Returns whether the center cell is alive in the next generation
fn generate_rule_table() -> RuleTable {
    let mut table = [false; PERMUTATIONS];
    for (block, next) in table.iter_mut().enumerate() {
        let neighbours = (block & !CENTER).count_ones();
        *next = next_state(block & CENTER != 0, neighbours);
    }
    table
}
