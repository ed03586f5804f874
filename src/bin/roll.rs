use clap::Parser;
use dice_roll::{RollContext, RollError, Roller, UInt};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roll dice written in dice notation", long_about = None)]
struct Cli {
    /// Expression to evaluate, e.g. "(5d5-4)d(16/d4)+3"
    instruction: String,

    /// Number of times to evaluate the expression
    #[arg(default_value_t = 1)]
    times: usize,

    /// Seed the rng for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum dice rolled per evaluation (unlimited by default)
    #[arg(short, long)]
    max_rolls: Option<UInt>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Roll(#[from] RollError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn run<R: Roller>(cli: &Cli, mut ctx: RollContext<R>) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..cli.times {
        let total = ctx.evaluate(&cli.instruction)?;
        debug!(total, rolls = ctx.rolls(), "rolled");
        write!(out, "{}  ", total)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.seed {
        Some(seed) => run(&cli, RollContext::new(cli.max_rolls, StdRng::seed_from_u64(seed))),
        None => run(&cli, RollContext::new(cli.max_rolls, rand::thread_rng())),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
