use std::{path::PathBuf, process::exit, time::Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aoc25::{
    days::{self, Options, Part, PuzzleError},
    input::{InputError, Source},
};

#[derive(Parser)]
#[command(version, about = "Advent of Code 2025 solutions")]
struct Cli {
    /// Log solver progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve both parts of a day
    Run {
        /// Day to solve
        day: u8,

        /// Puzzle data on the command line, lines separated by ';'
        #[arg(short, long)]
        params: Option<String>,

        /// File holding the puzzle data
        #[arg(short, long, conflicts_with = "params")]
        file: Option<PathBuf>,

        #[arg(short, long)]
        /// Print out how long each part took
        timings: bool,

        /// Junction box pairs to connect for day 8, part 1
        #[arg(long, default_value_t = 1000)]
        connections: usize,
    },
    /// List the days that have solutions
    List,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "aoc25=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn time<T>(timings: bool, part: Part, f: impl FnOnce() -> T) -> T {
    let t0 = Instant::now();
    let result = f();
    if timings {
        eprintln!("{part} took {:?}", t0.elapsed());
    }
    result
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List => {
            for day in days::DAYS {
                println!("day {day}");
            }
        }
        Commands::Run {
            day,
            params,
            file,
            timings,
            connections,
        } => {
            let source = Source::select(params, file)?;
            let lines = source.read_lines()?;
            let lines = lines.iter().map(String::as_str).collect::<Vec<_>>();
            let options = Options { connections };

            info!(day, lines = lines.len(), "solving");

            let one = time(timings, Part::One, || days::run(day, Part::One, &lines, &options))
                .with_context(|| format!("day {day}, {}", Part::One))?;
            let two = time(timings, Part::Two, || days::run(day, Part::Two, &lines, &options))
                .with_context(|| format!("day {day}, {}", Part::Two))?;

            println!("Result - {}: {one}, {}: {two}", Part::One, Part::Two);
        }
    }

    Ok(())
}

/// 1 for bad parameters, 2 for unreadable files, 4 for bad data and 5 when
/// solving fails.
fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<InputError>() {
            return match err {
                InputError::Missing => 1,
                InputError::File { .. } | InputError::Stdin(_) => 2,
            };
        }

        if let Some(err) = cause.downcast_ref::<PuzzleError>() {
            return match err {
                PuzzleError::UnknownDay(_) => 1,
                PuzzleError::NoData | PuzzleError::Malformed { .. } => 4,
                _ => 5,
            };
        }
    }

    5
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        exit(exit_code(&err));
    }
}
