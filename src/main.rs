//! cinema-room CLI
//!
//! Sell seats in a cinema room from the console.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cinema_room::menu::run::{RunOptions, run};
use cinema_room::types::OutputFormat;

#[derive(Parser)]
#[command(name = "cinema-room")]
#[command(about = "Cinema seat booking: show seats, buy tickets, view statistics")]
#[command(version)]
struct Cli {
    /// Number of rows (prompted for when omitted or not positive)
    #[arg(long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Seats in each row (prompted for when omitted or not positive)
    #[arg(long, allow_negative_numbers = true)]
    seats: Option<i64>,

    /// Output format of the statistics action
    #[arg(long, value_enum, default_value = "human")]
    stats_format: OutputFormatArg,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = RunOptions {
        rows: cli.rows,
        seats: cli.seats,
        stats_format: cli.stats_format.into(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run(stdin.lock(), &mut stdout, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Logs go to stderr so stdout carries only the session transcript.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
