//! Conway's Game of Life on a fixed 64x256 torus.

pub mod grid;
pub mod pos;
pub mod preset;

pub use grid::{COLS, Grid, ROWS};
pub use pos::Pos;
pub use preset::{Preset, PresetError};
