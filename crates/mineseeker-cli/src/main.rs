//! Command-line front-end: solves minefields read from text input and
//! generates random ones in the same format.
//!
//! The board description is whitespace-separated: width and height, the
//! number of mines, then one 0-based `x y` pair per mine. The solver's
//! success or failure shows in the rendered grid; the exit code only
//! reflects whether the input was usable.

mod watch;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mineseeker_core::{Generator, Minefield, SafeFieldOracle, Seeker};

#[derive(Parser)]
#[command(name = "mineseeker", about = "Minesweeper solver", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a minefield read from FILE, or from stdin when omitted.
    Solve {
        file: Option<PathBuf>,
        /// Re-render the board between solver steps.
        #[arg(long)]
        watch: bool,
    },
    /// Generate a random minefield description.
    Generate {
        #[arg(long, default_value_t = 30)]
        width: i32,
        #[arg(long, default_value_t = 16)]
        height: i32,
        #[arg(long, default_value_t = 99)]
        mines: usize,
        /// Seed for reproducible layouts.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { file, watch } => solve(file.as_deref(), watch),
        Command::Generate {
            width,
            height,
            mines,
            seed,
        } => generate(width, height, mines, seed),
    }
}

fn solve(file: Option<&Path>, watch: bool) -> Result<()> {
    let input = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };
    let minefield: Minefield = input.parse().context("parsing the minefield")?;

    let mut seeker = Seeker::new(&minefield);
    let mut hints = SafeFieldOracle;
    let solved = if watch {
        watch::solve_watched(&mut seeker, &mut hints)?
    } else {
        seeker.solve(&mut hints)
    };

    print!("{seeker}");
    if solved {
        eprintln!(
            "Solved with {} safe-field request(s).",
            seeker.safe_field_requests()
        );
    } else if seeker.is_dead() {
        eprintln!("Stepped on a mine.");
    } else {
        eprintln!("Gave up with hidden fields left.");
    }
    Ok(())
}

fn generate(width: i32, height: i32, mines: usize, seed: Option<u64>) -> Result<()> {
    if width <= 0 {
        bail!("invalid width: {width}");
    }
    if height <= 0 {
        bail!("invalid height: {height}");
    }
    if mines > width as usize * height as usize {
        bail!("too many mines: {mines}");
    }

    let mut generator = match seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };

    println!("{width} {height}");
    println!("{mines}");
    for point in generator.mine_points(width, height, mines) {
        println!("{} {}", point.x, point.y);
    }
    Ok(())
}
