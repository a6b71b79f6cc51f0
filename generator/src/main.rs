use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::LevelFilter;

use matchstick::generator::DEFAULT_PUZZLE_SIZE;
use matchstick::render::render;
use matchstick::Generator;

/// Generate a "move one matchstick" arithmetic puzzle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of digits in the puzzle (3 to 8)
    ///
    /// Solutions are drawn at random until one holds, and true equations get rarer with every digit,
    /// so sizes above 8 are refused rather than left to search indefinitely.
    #[arg(default_value_t = DEFAULT_PUZZLE_SIZE)]
    size: usize,

    /// Seed for the random generator; defaults to the current time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also print the solution, on a second line
    #[arg(long)]
    solution: bool,

    /// Draw the puzzle in matchsticks after the text
    #[arg(short, long)]
    render: bool,

    /// Log search progress
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // RUST_LOG wins over the flag when set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let seed = cli.seed.unwrap_or_else(|| SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs()));
    log::info!("generating a {}-digit puzzle with seed {seed}", cli.size);

    let mut generator = Generator::new(cli.size, seed)?;
    let found = generator.generate();

    println!("{}", found.puzzle);
    if cli.solution {
        println!("{}", found.solution);
    }

    if cli.render {
        println!();
        println!("Move a match puzzle!");
        println!("You can move a single match into a new position");
        println!();
        print!("{}", render(&found.puzzle.to_display()));
    }

    Ok(())
}
