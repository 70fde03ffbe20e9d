#![warn(clippy::pedantic)]

/// fuzzdata command-line tool: replay saved fuzz inputs through a decode
/// plan and inspect their raw bytes.
///
/// # Command overview
///
/// ```text
/// fuzzdata <COMMAND> [OPTIONS]
///
/// Commands:
///   replay     Decode an input with a plan and print every value
///   inspect    Print the size and a hex dump of an input
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging (RUST_LOG overrides)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                     |
/// |------|---------------------------------------------|
/// | 0    | Success                                     |
/// | 1    | Error (I/O failure, bad plan, bad hex, ...) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_inspect;
mod cmd_replay;
mod config;
mod plan;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Replay and inspect fuzz inputs decoded with `fuzzdata`.
#[derive(Parser)]
#[command(name = "fuzzdata", version, about = "Fuzz input replay tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode an input with a plan and print every value.
    Replay(ReplayArgs),
    /// Print the size and a hex dump of an input.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `fuzzdata replay`.
///
/// ```text
/// ┌────────────┬────────────────────────────────────────────────────────┐
/// │ Flag       │ Effect                                                 │
/// ├────────────┼────────────────────────────────────────────────────────┤
/// │ --plan     │ comma-separated ops, e.g. `u32,i8:-5..5,rstring:16`    │
/// │ --format   │ text (default) | json                                  │
/// │ --hex      │ input file holds hex digits instead of raw bytes       │
/// │ --leftover │ dump unconsumed bytes after the last op (text only)    │
/// └────────────┴────────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Path to the fuzz input.
    pub file: PathBuf,

    /// Decode plan to run against the input.
    #[arg(short, long)]
    pub plan: String,

    /// Output format: `text` or `json`.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Treat the input file as hex text.
    #[arg(long)]
    pub hex: bool,

    /// Print the bytes left over after the plan ran.
    #[arg(long)]
    pub leftover: bool,
}

/// Arguments for `fuzzdata inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the fuzz input.
    pub file: PathBuf,

    /// Treat the input file as hex text.
    #[arg(long)]
    pub hex: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Replay(args) => cmd_replay::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        log::debug!("command failed: {e:?}");
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
