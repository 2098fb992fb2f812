//! cubelut - .cube LUT inspection tool
//!
//! Parses .cube files, reports their header, and writes the normalized RGBA
//! buffer that color-cube filters consume.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cubelut")]
#[command(author, version, about = "Inspect, validate and flatten .cube LUT files")]
#[command(long_about = "
Parses Adobe/Resolve .cube lookup tables and converts them into the flat
RGBA float buffer used by color-cube image filters.

Examples:
  cubelut info look.cube                # Show title, size, domain
  cubelut info *.cube --json            # Machine-readable summary
  cubelut check a.cube b.cube           # Validate files
  cubelut flatten look.cube -o look.bin # Write normalized RGBA floats
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT header information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Validate LUT files
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Write the normalized RGBA buffer to a file
    #[command(visible_alias = "f")]
    Flatten(FlattenArgs),
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Input LUT file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the `check` command.
#[derive(Args)]
struct CheckArgs {
    /// Input LUT file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Arguments for the `flatten` command.
#[derive(Args)]
struct FlattenArgs {
    /// Input LUT file
    input: PathBuf,

    /// Output file for raw native-endian f32 RGBA samples
    #[arg(short, long)]
    output: PathBuf,

    /// Also flatten 1D tables (they cannot drive a color cube)
    #[arg(long = "allow-1d")]
    allow_1d: bool,
}

/// Installs the fmt subscriber. `RUST_LOG` wins over `-v` flags.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Flatten(args) => commands::flatten::run(args),
    }
}
