//! EMA Crossover + RSI Threshold Strategy
//!
//! This example runs the full signal pipeline over a synthetic 50-bar price
//! series with the conventional parameters (slow 20, fast 10, RSI 14,
//! entries 30/70) and prints every intermediate column.
//!
//! Run with: `cargo run --example ema_rsi_strategy`

#![allow(clippy::cast_precision_loss)]

use ta_signals::prelude::*;

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

fn main() -> Result<()> {
    let prices: Vec<f64> = (0..50)
        .map(|i| {
            let x = f64::from(i);
            100.0 + (x * 0.35).sin() * 5.0 + x * 0.1
        })
        .collect();

    let config = SignalConfig::default();
    config.validate()?;

    let frame = generate_signals(&prices, &config)?;

    println!(
        "Parameters: slow={} fast={} rsi={} long={} short={}",
        config.slow_window,
        config.fast_window,
        config.rsi_window,
        config.long_entry,
        config.short_entry
    );
    println!();
    println!(
        "{:>5} {:>10} {:>10} {:>10} {:>5} {:>10} {:>5} {:>6}",
        "Index", "Price", "Slow EMA", "Fast EMA", "EMA", "RSI", "RSI", "Signal"
    );

    for i in 0..frame.len() {
        let ema_signal = frame.ema_signal[i].map_or_else(|| "-".to_string(), |s| s.to_string());
        println!(
            "{:>5} {:>10.4} {:>10} {:>10} {:>5} {:>10} {:>5} {:>6}",
            i,
            prices[i],
            cell(frame.slow_ema[i]),
            cell(frame.fast_ema[i]),
            ema_signal,
            cell(frame.rsi[i]),
            frame.rsi_signal[i],
            frame.signal[i]
        );
    }

    println!();
    match frame.last_signal() {
        Some(Signal::Buy) => println!("Last signal: BUY"),
        Some(Signal::Sell) => println!("Last signal: SELL"),
        Some(Signal::Hold) | None => println!("Last signal: HOLD"),
    }

    Ok(())
}
