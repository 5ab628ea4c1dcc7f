//! Integration tests for the public API.
//!
//! These tests exercise typical end-to-end usage through the prelude: raw
//! indicators, the two signal generators, aggregation and the pipeline.

#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

mod common;

use common::{count_signal, verify_undefined_prefix, wave_prices};
use ta_signals::prelude::*;
use ta_signals::utils::to_nan_series;

// ==================== Basic Usage Tests ====================

#[test]
fn test_prelude_import_basic() {
    let prices = wave_prices(60);

    let ema = compute_ema(&prices, 10);
    let rsi = compute_rsi(&prices, 14);

    assert_eq!(ema.len(), 60);
    assert_eq!(rsi.len(), 60);
    assert!(verify_undefined_prefix(&ema, ema_lookback(10)));
    assert!(verify_undefined_prefix(&rsi, rsi_lookback(14)));
}

#[test]
fn test_min_len_gives_one_defined_value() {
    let prices = wave_prices(rsi_min_len(14));
    let rsi = compute_rsi(&prices, 14);
    assert_eq!(rsi.iter().flatten().count(), 1);

    let prices = wave_prices(ema_min_len(20));
    let ema = compute_ema(&prices, 20);
    assert_eq!(ema.iter().flatten().count(), 1);
}

// ==================== Strategy Scenarios ====================

#[test]
fn test_demo_parameters_on_short_series() {
    // The default 20/10/14 configuration over 50 bars
    let prices = wave_prices(50);
    let frame = generate_signals(&prices, &SignalConfig::default()).unwrap();

    assert_eq!(frame.len(), 50);
    assert!(verify_undefined_prefix(&frame.slow_ema, 19));
    assert!(verify_undefined_prefix(&frame.fast_ema, 9));
    assert!(verify_undefined_prefix(&frame.rsi, 15));
    assert!(frame.ema_signal.iter().all(Option::is_some));
    for value in frame.rsi.iter().flatten() {
        assert!((0.0..=100.0).contains(value));
    }
}

#[test]
fn test_trend_reversal_buys_once() {
    // Downtrend then uptrend: one crossover Buy, RSI flips from oversold to overbought
    let mut prices: Vec<f64> = (0..40).map(|i| 200.0 - 2.0 * f64::from(i)).collect();
    prices.extend((1..=40).map(|i| 122.0 + 2.5 * f64::from(i)));

    let crossover = generate_ema_crossover_signal(&prices, 12, 4);
    assert_eq!(count_signal(&crossover.signal, Signal::Buy), 1);
    assert_eq!(count_signal(&crossover.signal, Signal::Sell), 0);

    let threshold = generate_rsi_threshold_signal(&prices, 5, 30.0, 70.0);
    assert_eq!(threshold.signal[20], Signal::Buy);
    assert_eq!(threshold.signal[79], Signal::Sell);
}

#[test]
fn test_constant_series() {
    let prices = vec![42.0_f64; 40];
    let frame = generate_signals(&prices, &SignalConfig::default()).unwrap();

    for v in frame.slow_ema.iter().flatten().chain(frame.fast_ema.iter().flatten()) {
        assert!((v - 42.0).abs() < 1e-12);
    }
    for v in frame.rsi.iter().flatten() {
        assert_eq!(*v, 0.0);
    }
    // Flat averages never cross
    assert!(frame.ema_signal.iter().all(|s| *s == Some(Signal::Hold)));
    // RSI of 0 is oversold
    assert!(frame.signal[15..].iter().all(|s| *s == Signal::Buy));
}

#[test]
fn test_pipeline_equals_composition() {
    let prices = wave_prices(120);
    let config = SignalConfig::new().slow_window(26).fast_window(9).rsi_window(10);

    let frame = config.compute(&prices).unwrap();

    let crossover = generate_ema_crossover_signal(&prices, 26, 9);
    let threshold = generate_rsi_threshold_signal(&prices, 10, 30.0, 70.0);
    let signal = aggregate_final_signal(&crossover.signal, &threshold.signal).unwrap();

    assert_eq!(frame.slow_ema, crossover.slow_ema);
    assert_eq!(frame.fast_ema, crossover.fast_ema);
    assert_eq!(frame.ema_signal, crossover.signal);
    assert_eq!(frame.rsi, threshold.rsi);
    assert_eq!(frame.rsi_signal, threshold.signal);
    assert_eq!(frame.signal, signal);
    assert_eq!(frame.last_signal(), signal.last().copied());
}

// ==================== Zero-Allocation API ====================

#[test]
fn test_into_api_reuses_buffers() {
    let prices = wave_prices(100);
    let n = prices.len();

    let mut slow = vec![None; n];
    let mut fast = vec![None; n];
    let mut cross = vec![None; n];
    let mut rsi = vec![None; n];
    let mut threshold = vec![Signal::Hold; n];
    let mut signal = vec![Signal::Hold; n];

    for (slow_window, fast_window) in [(20, 10), (30, 5)] {
        generate_ema_crossover_signal_into(
            &prices,
            slow_window,
            fast_window,
            &mut cross,
            &mut slow,
            &mut fast,
        )
        .unwrap();
        generate_rsi_threshold_signal_into(&prices, 14, 30.0, 70.0, &mut rsi, &mut threshold)
            .unwrap();
        aggregate_final_signal_into(&cross, &threshold, &mut signal).unwrap();

        let expected = generate_ema_crossover_signal(&prices, slow_window, fast_window);
        assert_eq!(cross, expected.signal);
        assert_eq!(slow, expected.slow_ema);
        assert_eq!(fast, expected.fast_ema);
    }
}

// ==================== Export Helpers ====================

#[test]
fn test_nan_export() {
    let prices = wave_prices(30);
    let ema = compute_ema(&prices, 5);
    let plain = to_nan_series(&ema);

    assert_eq!(plain.iter().filter(|v| v.is_nan()).count(), 4);
    assert_eq!(plain[4], ema[4].unwrap());
}

#[test]
fn test_signal_numeric_columns() {
    let values: Vec<i8> = [Signal::Sell, Signal::Hold, Signal::Buy]
        .into_iter()
        .map(i8::from)
        .collect();
    assert_eq!(values, vec![-1, 0, 1]);
}

// ==================== Thread Safety ====================

#[test]
fn test_parallel_calls_are_independent() {
    let prices = wave_prices(200);
    let expected = generate_signals(&prices, &SignalConfig::default()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| generate_signals(&prices, &SignalConfig::default())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
