use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

mod commands;
mod input;

use commands::CliError;

#[derive(Parser)]
#[command(name = "shiftforge")]
#[command(version)]
#[command(about = "Seed and score cyclic shift rosters", long_about = None)]
struct Cli {
    /// Roster configuration (TOML, or YAML by extension). Defaults to the
    /// reference roster.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the banner and log roster events.
    #[arg(long, global = true)]
    console: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate seed schedules, one flat sequence per line
    Seed {
        /// Random seed; overrides the configuration's random_seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of schedules to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Draw every cell uniformly instead of building feasible blocks
        #[arg(long)]
        uniform: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Score schedules, one flat sequence per line
    Evaluate {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Explain the score of the first schedule in the input
    Explain {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Validate the configuration and print the catalog
    Check,
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.console {
        shiftforge::console::init();
    }

    let problem = commands::load_problem(cli.config.as_deref())?;

    match cli.command {
        Commands::Seed {
            seed,
            count,
            uniform,
            out,
        } => commands::seed(&problem, seed, count, uniform, out.as_deref()),
        Commands::Evaluate { file } => commands::evaluate(&problem, file.as_deref()),
        Commands::Explain { file } => commands::explain(&problem, file.as_deref()),
        Commands::Check => commands::check(&problem),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
