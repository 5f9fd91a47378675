use crate::{Grid, Pos};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::debug;

/// The initial pattern a simulation starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    #[default]
    Random,
    Beehive,
    Glider,
    Pulsar,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("invalid preset number: {0}")]
    InvalidNumber(i64),

    #[error("invalid preset name: {0:?}")]
    InvalidName(String),
}

/// Hexagonal still life, rows 19-21
const BEEHIVE: [Pos; 6] = [
    Pos::new(19, 22),
    Pos::new(19, 23),
    Pos::new(20, 21),
    Pos::new(20, 24),
    Pos::new(21, 22),
    Pos::new(21, 23),
];

/// Travels one cell down and right every 4 generations
const GLIDER: [Pos; 5] = [
    Pos::new(4, 6),
    Pos::new(5, 4),
    Pos::new(5, 6),
    Pos::new(6, 5),
    Pos::new(6, 6),
];

impl Preset {
    /// All presets, in the order of their numeric index
    pub const ALL: [Preset; 4] = [Self::Random, Self::Beehive, Self::Glider, Self::Pulsar];

    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Beehive => "beehive",
            Self::Glider => "glider",
            Self::Pulsar => "pulsar",
        }
    }

    /// Populates a grid with this preset
    ///
    /// Fixed patterns only set their own cells, so `grid` is expected to be
    /// empty. [`Preset::Random`] overwrites every cell with a fair coin flip
    /// drawn from `rng`.
    pub fn populate<R: rand::Rng>(self, grid: &mut Grid, rng: &mut R) {
        debug!(preset = %self, "populating grid");
        match self {
            Self::Random => randomise(grid, rng),
            Self::Beehive => set_alive(grid, &BEEHIVE),
            Self::Glider => set_alive(grid, &GLIDER),
            Self::Pulsar => pulsar(grid),
        }
    }
}

fn randomise<R: rand::Rng>(grid: &mut Grid, rng: &mut R) {
    for row in 0..crate::ROWS {
        for col in 0..crate::COLS {
            grid.set(Pos::new(row, col), rng.random_bool(0.5));
        }
    }
}

fn set_alive(grid: &mut Grid, cells: &[Pos]) {
    for &pos in cells {
        grid.set(pos, true);
    }
}

/// Period 3 oscillator filling rows and columns 18-30
fn pulsar(grid: &mut Grid) {
    const ORIGIN: usize = 18;
    // the pattern is symmetric across its diagonal, so every bar is set twice:
    // once as a row segment and once as the mirrored column segment
    for band in [0, 5, 7, 12] {
        for offset in [2, 3, 4, 8, 9, 10] {
            grid.set(Pos::new(ORIGIN + band, ORIGIN + offset), true);
            grid.set(Pos::new(ORIGIN + offset, ORIGIN + band), true);
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    /// Accepts either the numeric index or the (case sensitive) name of a preset
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(number) = parse_int(s) {
            return usize::try_from(number)
                .ok()
                .and_then(|idx| Self::ALL.get(idx).copied())
                .ok_or(PresetError::InvalidNumber(number));
        }

        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| PresetError::InvalidName(s.to_owned()))
    }
}

/// Parses an integer with an optional sign and base prefix
///
/// `0x`, `0o` and `0b` select hex, octal and binary, and a bare leading zero
/// selects octal, so `"0x2"` and `"02"` both parse to 2.
fn parse_int(s: &str) -> Option<i64> {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let prefixed = |lower: &str, upper: &str| {
        unsigned
            .strip_prefix(lower)
            .or_else(|| unsigned.strip_prefix(upper))
    };
    let (radix, digits) = if let Some(digits) = prefixed("0x", "0X") {
        (16, digits)
    } else if let Some(digits) = prefixed("0o", "0O") {
        (8, digits)
    } else if let Some(digits) = prefixed("0b", "0B") {
        (2, digits)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix takes its own sign, which would allow "--1" or "0x-1"
    if digits.starts_with(['+', '-']) {
        return None;
    }
    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}
