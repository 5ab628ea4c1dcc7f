//! CLI argument parsing module.
//!
//! This module defines the command-line interface for ta-signals using clap.
//! The CLI follows the pattern: `ta-signals <command> <input.csv> [params] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # 20-bar EMA of the close column
//! ta-signals ema prices.csv 20
//!
//! # RSI with default window (14), written to a file
//! ta-signals rsi prices.csv -o rsi.csv
//!
//! # EMA crossover with slow 26, fast 12
//! ta-signals crossover prices.csv 26,12
//!
//! # RSI threshold with window 14, long entry 25, short entry 75
//! ta-signals threshold prices.csv 14,25,75
//!
//! # Full strategy from a config file, one parameter overridden
//! ta-signals signals prices.csv --config strategy.toml --rsi-window 10 --strict
//! ```

use clap::{ArgAction, Parser, Subcommand};

use crate::error::{CliError, Result};

/// ta-signals: EMA crossover and RSI threshold trading signals
#[derive(Parser, Debug)]
#[command(name = "ta-signals")]
#[command(author, version, about = "EMA crossover and RSI threshold trading signals")]
#[command(long_about = "ta-signals computes EMA and RSI indicators over a closing-price \
    column and turns them into buy/hold/sell signals. Input is read from CSV files and \
    output can be written to files or stdout.")]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// The computation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Exponential Moving Average
    #[command(about = "Exponential Moving Average (EMA)")]
    Ema {
        /// Input CSV file
        input: String,

        /// Window for the moving average
        #[arg(default_value = "20")]
        window: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices (auto-detected if not specified)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Relative Strength Index
    #[command(about = "Relative Strength Index (RSI)")]
    Rsi {
        /// Input CSV file
        input: String,

        /// Window for RSI calculation
        #[arg(default_value = "14")]
        window: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// EMA crossover signal
    #[command(about = "EMA crossover signal with both EMAs")]
    Crossover {
        /// Input CSV file
        input: String,

        /// Parameters: slow_window,fast_window (e.g., 20,10)
        #[arg(default_value = "20,10")]
        params: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// RSI threshold signal
    #[command(about = "RSI threshold signal with the RSI series")]
    Threshold {
        /// Input CSV file
        input: String,

        /// Parameters: rsi_window,long_entry,short_entry (e.g., 14,30,70)
        #[arg(default_value = "14,30,70")]
        params: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Full strategy: crossover, threshold and final signal
    #[command(about = "Combined EMA crossover + RSI threshold signal")]
    Signals {
        /// Input CSV file
        input: String,

        /// TOML file with strategy parameters
        #[arg(long)]
        config: Option<String>,

        /// Slow EMA window
        #[arg(long)]
        slow: Option<usize>,

        /// Fast EMA window
        #[arg(long)]
        fast: Option<usize>,

        /// RSI window
        #[arg(long)]
        rsi_window: Option<usize>,

        /// RSI level below which to buy
        #[arg(long)]
        long_entry: Option<f64>,

        /// RSI level above which to sell
        #[arg(long)]
        short_entry: Option<f64>,

        /// Reject inconsistent parameters instead of producing neutral output
        #[arg(long)]
        strict: bool,

        /// Skip leading rows until every indicator is defined
        #[arg(long)]
        drop_warmup: bool,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices
        #[arg(short, long)]
        column: Option<String>,
    },
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the input file path from the command.
    #[must_use]
    pub fn input_path(&self) -> &str {
        match &self.command {
            Command::Ema { input, .. }
            | Command::Rsi { input, .. }
            | Command::Crossover { input, .. }
            | Command::Threshold { input, .. }
            | Command::Signals { input, .. } => input,
        }
    }

    /// Get the output file path from the command, if specified.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Ema { output, .. }
            | Command::Rsi { output, .. }
            | Command::Crossover { output, .. }
            | Command::Threshold { output, .. }
            | Command::Signals { output, .. } => output.as_deref(),
        }
    }

    /// Get the price column override from the command, if specified.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        match &self.command {
            Command::Ema { column, .. }
            | Command::Rsi { column, .. }
            | Command::Crossover { column, .. }
            | Command::Threshold { column, .. }
            | Command::Signals { column, .. } => column.as_deref(),
        }
    }
}

fn split_params<'a>(params: &'a str, expected: usize, format: &str) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = params.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: format!("expected {expected} values, got {}", parts.len()),
            suggestion: Some(format!("Use format: {format}")),
        });
    }
    Ok(parts)
}

fn parse_window(value: &str, argument: &str, example: usize) -> Result<usize> {
    value.parse::<usize>().map_err(|_| CliError::InvalidArgument {
        argument: argument.to_string(),
        reason: format!("cannot parse '{value}' as integer"),
        suggestion: Some(format!("Use a positive integer like {example}")),
    })
}

fn parse_level(value: &str, argument: &str, example: f64) -> Result<f64> {
    let level = value.parse::<f64>().map_err(|_| CliError::InvalidArgument {
        argument: argument.to_string(),
        reason: format!("cannot parse '{value}' as number"),
        suggestion: Some(format!("Use an RSI level like {example}")),
    })?;
    if !level.is_finite() {
        return Err(CliError::InvalidArgument {
            argument: argument.to_string(),
            reason: format!("'{value}' is not a finite number"),
            suggestion: Some(format!("Use an RSI level like {example}")),
        });
    }
    Ok(level)
}

/// Parse crossover parameters from string "slow,fast".
///
/// Window ordering is not checked here: a slow window that does not exceed
/// the fast one yields an empty signal column, as in the library.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if the string does not hold two integers.
pub fn parse_crossover_params(params: &str) -> Result<(usize, usize)> {
    let parts = split_params(params, 2, "slow,fast (e.g., 20,10)")?;
    let slow = parse_window(parts[0], "slow_window", 20)?;
    let fast = parse_window(parts[1], "fast_window", 10)?;
    Ok((slow, fast))
}

/// Parse threshold parameters from string "window,long,short".
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if the string does not hold an integer
/// followed by two finite numbers.
pub fn parse_threshold_params(params: &str) -> Result<(usize, f64, f64)> {
    let parts = split_params(params, 3, "window,long,short (e.g., 14,30,70)")?;
    let window = parse_window(parts[0], "rsi_window", 14)?;
    let long_entry = parse_level(parts[1], "long_entry", 30.0)?;
    let short_entry = parse_level(parts[2], "short_entry", 70.0)?;
    Ok((window, long_entry, short_entry))
}
