use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use making_change::cs::dynamic::coin_change::DEFAULT_MAX_DEPTH;
use making_change::input::parse_problem_sets;
use making_change::report::write_problem_set;
use making_change::{solve_all, RecursionConfig, Strategy};

/// Solve minimum-coin change problems read from a problem-set file.
#[derive(Parser, Debug)]
#[command(name = "make_change", version, about, long_about = None)]
struct Cli {
    /// Problem-set file
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// bottom-up, bottom-up-exhaustive, memoized or naive
    #[arg(short, long, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Recursion limit for the recursive strategies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn run(cli: &Cli) -> making_change::Result<()> {
    let file = File::open(&cli.input)?;
    let sets = parse_problem_sets(BufReader::new(file))?;
    info!("{} problem sets from {}", sets.len(), cli.input.display());

    let solver = cli.strategy.solver(RecursionConfig {
        max_depth: cli.max_depth,
    });
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, set) in sets.iter().enumerate() {
        let results = solve_all(solver.as_ref(), &set.denominations, &set.amounts);
        write_problem_set(&mut out, index + 1, &set.amounts, &results)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}: {}", cli.input.display(), err);
            ExitCode::FAILURE
        }
    }
}
