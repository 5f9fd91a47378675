use std::{num::ParseIntError, time::Duration};

use thiserror::Error;
use torus_life::{Preset, PresetError};

const USAGE: &str = "usage: torus-life [options]";
const DEFAULT_SLEEP_MILLIS: u64 = 20;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),

    #[error("invalid value {value:?} for flag -preset: {source}")]
    Preset { value: String, source: PresetError },

    #[error("invalid value {value:?} for flag -{flag}: {source}")]
    Number {
        flag: &'static str,
        value: String,
        source: ParseIntError,
    },
}

#[derive(Debug)]
pub struct Args {
    preset: Preset,
    sleep: Duration,
    generations: usize,
    seed: Option<u64>,
    threads: bool,
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    // single-dash long options, `-preset glider`
    opts.long_only(true);
    opts.optflag("", "help", "print this help menu");
    opts.optopt(
        "",
        "preset",
        "choose life pattern: 0|random (default), 1|beehive, 2|glider, 3|pulsar",
        "PRESET",
    );
    opts.optopt(
        "",
        "sleep",
        "the amount of time to sleep between generations (default 20)",
        "MILLIS",
    );
    opts.optopt("", "gens", "max number of generations", "COUNT");
    opts.optopt("", "seed", "seed for the random preset", "SEED");
    opts.optflag("", "threads", "compute generations on a thread pool");
    opts
}

fn number<T>(matches: &getopts::Matches, flag: &'static str) -> Result<Option<T>, OptionsError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    matches
        .opt_str(flag)
        .map(|value| {
            value.parse().map_err(|source| OptionsError::Number {
                flag,
                value,
                source,
            })
        })
        .transpose()
}

impl Args {
    /// Parses and validates the arguments
    ///
    /// Returns `Ok(None)` when help was requested, after printing the usage.
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let opts = options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage(USAGE));
            return Ok(None);
        }

        let preset = match matches.opt_str("preset") {
            Some(value) => value
                .parse()
                .map_err(|source| OptionsError::Preset { value, source })?,
            None => Preset::default(),
        };

        Ok(Some(Self {
            preset,
            sleep: Duration::from_millis(
                number(&matches, "sleep")?.unwrap_or(DEFAULT_SLEEP_MILLIS),
            ),
            generations: number(&matches, "gens")?.unwrap_or(usize::MAX), // effectively forever
            seed: number(&matches, "seed")?,
            threads: matches.opt_present("threads"),
        }))
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn usage() -> String {
        options().usage(USAGE)
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }
    pub fn sleep(&self) -> Duration {
        self.sleep
    }
    pub fn generations(&self) -> usize {
        self.generations
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn threads(&self) -> bool {
        self.threads
    }
}
