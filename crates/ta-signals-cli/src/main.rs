//! ta-signals command-line interface
//!
//! Computes EMA/RSI indicators and trading signals from CSV price files.
//! Logs go to stderr and are controlled by `RUST_LOG` or `-v`.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use ta_signals_cli::args::Args;
use ta_signals_cli::commands::run;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
