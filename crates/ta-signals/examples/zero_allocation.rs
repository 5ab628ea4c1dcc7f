//! Zero-Allocation Example
//!
//! This example demonstrates how to use the `_into` variants to reuse
//! output buffers across batches of prices.
//!
//! Run with: `cargo run --example zero_allocation`

#![allow(clippy::cast_precision_loss)]

use ta_signals::signals::{
    aggregate_final_signal_into, generate_ema_crossover_signal_into,
    generate_rsi_threshold_signal_into, Signal,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_size = 1000;

    println!("=== Zero-Allocation Pattern ===");
    println!();
    println!("Processing {data_size} bars with pre-allocated buffers");
    println!();

    // Pre-allocate all buffers once
    let mut slow_ema = vec![None; data_size];
    let mut fast_ema = vec![None; data_size];
    let mut crossover = vec![None; data_size];
    let mut rsi = vec![None; data_size];
    let mut threshold = vec![Signal::Hold; data_size];
    let mut signal = vec![Signal::Hold; data_size];

    for batch in 0..3 {
        let prices: Vec<f64> = (0..data_size)
            .map(|i| 100.0 + (i as f64 * 0.05).sin() * 10.0 + f64::from(batch) * 5.0)
            .collect();

        generate_ema_crossover_signal_into(
            &prices,
            20,
            10,
            &mut crossover,
            &mut slow_ema,
            &mut fast_ema,
        )?;
        generate_rsi_threshold_signal_into(&prices, 14, 30.0, 70.0, &mut rsi, &mut threshold)?;
        aggregate_final_signal_into(&crossover, &threshold, &mut signal)?;

        let buys = signal.iter().filter(|s| **s == Signal::Buy).count();
        let sells = signal.iter().filter(|s| **s == Signal::Sell).count();
        println!(
            "Batch {}: {buys} buy bars, {sells} sell bars, last {}",
            batch + 1,
            signal[data_size - 1]
        );
    }

    Ok(())
}
