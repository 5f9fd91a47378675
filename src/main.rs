use std::{process::ExitCode, thread};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

use torus_life::Grid;

fn init_logging() {
    // frames own stdout, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let args = match options::Args::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", options::Args::usage());
            return Ok(ExitCode::from(2));
        }
    };

    // one generator per run, logged so a random start can be replayed with -seed
    let seed = args.seed().unwrap_or_else(rand::random);
    info!(preset = %args.preset(), seed, "starting simulation");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::from_preset(args.preset(), &mut rng);

    let mut console = console::ConsoleRender::stdout();
    let sleep = args.sleep();
    let threads = args.threads();

    let mut stats = stats::GenerationStats::new(grid.alive_count());
    for _ in 0..args.generations() {
        console.render(&grid)?;

        grid = if threads {
            grid.step_parallel()
        } else {
            grid.step()
        };
        stats.record(grid.alive_count());
        if stats.has_report() {
            debug!("{}", stats.report());
        }
        thread::sleep(sleep);
    }

    info!(
        generations = stats.generations(),
        alive = stats.alive(),
        "simulation finished"
    );
    Ok(ExitCode::SUCCESS)
}
