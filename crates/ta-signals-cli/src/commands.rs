//! Command execution: load prices, compute, write columns.

use ta_signals::indicators::{compute_ema, compute_rsi};
use ta_signals::signals::{generate_ema_crossover_signal, generate_rsi_threshold_signal};
use ta_signals::{generate_signals, SignalConfig};

use crate::args::{parse_crossover_params, parse_threshold_params, Args, Command};
use crate::config::{resolve_config, ConfigOverrides};
use crate::csv_parser::{read_prices, PriceSeries};
use crate::csv_writer::{warmup_rows, write_output, Column, ColumnData, OutputDest};
use crate::error::Result;

/// Runs the parsed command to completion.
///
/// # Errors
///
/// Returns the first I/O, parsing, configuration or signal error.
pub fn run(args: &Args) -> Result<()> {
    let prices = read_prices(args.input_path(), args.column())?;
    let dest = OutputDest::from_arg(args.output_path());
    let dates = prices.dates.as_deref();

    match &args.command {
        Command::Ema { window, .. } => {
            let ema = compute_ema(&prices.close, *window);
            let columns = with_close(
                &prices,
                vec![(format!("ema_{window}"), ColumnData::Indicator(&ema))],
            );
            write_output(&dest, &columns, dates, 0)?;
        }
        Command::Rsi { window, .. } => {
            let rsi = compute_rsi(&prices.close, *window);
            let columns = with_close(
                &prices,
                vec![(format!("rsi_{window}"), ColumnData::Indicator(&rsi))],
            );
            write_output(&dest, &columns, dates, 0)?;
        }
        Command::Crossover { params, .. } => {
            let (slow, fast) = parse_crossover_params(params)?;
            let out = generate_ema_crossover_signal(&prices.close, slow, fast);
            let columns = with_close(
                &prices,
                vec![
                    (format!("ema_{slow}"), ColumnData::Indicator(&out.slow_ema)),
                    (format!("ema_{fast}"), ColumnData::Indicator(&out.fast_ema)),
                    ("ema_signal".to_string(), ColumnData::Signal(&out.signal)),
                ],
            );
            write_output(&dest, &columns, dates, 0)?;
        }
        Command::Threshold { params, .. } => {
            let (window, long_entry, short_entry) = parse_threshold_params(params)?;
            let out = generate_rsi_threshold_signal(&prices.close, window, long_entry, short_entry);
            let columns = with_close(
                &prices,
                vec![
                    (format!("rsi_{window}"), ColumnData::Indicator(&out.rsi)),
                    ("rsi_signal".to_string(), ColumnData::FinalSignal(&out.signal)),
                ],
            );
            write_output(&dest, &columns, dates, 0)?;
        }
        Command::Signals {
            config,
            slow,
            fast,
            rsi_window,
            long_entry,
            short_entry,
            strict,
            drop_warmup,
            ..
        } => {
            let overrides = ConfigOverrides {
                slow_window: *slow,
                fast_window: *fast,
                rsi_window: *rsi_window,
                long_entry: *long_entry,
                short_entry: *short_entry,
            };
            let config = resolve_config(config.as_deref(), &overrides, *strict)?;
            run_signals(&prices, &config, *drop_warmup, &dest)?;
        }
    }

    Ok(())
}

fn run_signals(
    prices: &PriceSeries,
    config: &SignalConfig,
    drop_warmup: bool,
    dest: &OutputDest,
) -> Result<()> {
    let frame = generate_signals(&prices.close, config)?;

    let columns = with_close(
        prices,
        vec![
            ("slow_ema".to_string(), ColumnData::Indicator(&frame.slow_ema)),
            ("fast_ema".to_string(), ColumnData::Indicator(&frame.fast_ema)),
            ("ema_signal".to_string(), ColumnData::Signal(&frame.ema_signal)),
            ("rsi".to_string(), ColumnData::Indicator(&frame.rsi)),
            ("rsi_signal".to_string(), ColumnData::FinalSignal(&frame.rsi_signal)),
            ("signal".to_string(), ColumnData::FinalSignal(&frame.signal)),
        ],
    );
    let skip = if drop_warmup { warmup_rows(&columns) } else { 0 };

    tracing::info!(
        rows = frame.len(),
        skipped = skip,
        last_signal = ?frame.last_signal(),
        "signals computed"
    );
    write_output(dest, &columns, prices.dates.as_deref(), skip)?;
    Ok(())
}

/// Prefixes the computed columns with the input price column.
fn with_close<'a>(prices: &'a PriceSeries, computed: Vec<Column<'a>>) -> Vec<Column<'a>> {
    let mut columns = Vec::with_capacity(computed.len() + 1);
    columns.push(("close".to_string(), ColumnData::Price(&prices.close)));
    columns.extend(computed);
    columns
}
