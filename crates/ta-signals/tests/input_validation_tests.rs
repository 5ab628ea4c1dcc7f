//! Input validation tests.
//!
//! Degenerate input never aborts a computation: it yields correctly sized
//! undefined output. Errors are reserved for mis-sized buffers, mismatched
//! series and strict configuration checks.
//! - Empty arrays
//! - Zero and oversized windows
//! - NaN and infinity in the price data
//! - Buffer and series length mismatches

#![allow(clippy::float_cmp)]

use ta_signals::error::Error;
use ta_signals::indicators::{compute_ema, compute_ema_into, compute_rsi, compute_rsi_into};
use ta_signals::pipeline::{generate_signals, SignalConfig};
use ta_signals::signals::{
    aggregate_final_signal, derive_crossover_signal, generate_ema_crossover_signal,
    generate_rsi_threshold_signal, Signal,
};

// ==================== Empty Array Tests ====================

#[test]
fn validation_empty_array_everywhere() {
    let empty: Vec<f64> = vec![];

    assert!(compute_ema(&empty, 5).is_empty());
    assert!(compute_rsi(&empty, 14).is_empty());
    assert!(generate_ema_crossover_signal(&empty, 20, 10).is_empty());
    assert!(generate_rsi_threshold_signal(&empty, 14, 30.0, 70.0).is_empty());
    assert!(aggregate_final_signal::<Signal, Signal>(&[], &[]).unwrap().is_empty());
    assert!(generate_signals(&empty, &SignalConfig::default()).unwrap().is_empty());
}

// ==================== Window Tests ====================

#[test]
fn validation_zero_window() {
    let prices = vec![1.0_f64, 2.0, 3.0, 4.0];

    assert!(compute_ema(&prices, 0).iter().all(Option::is_none));
    assert!(compute_rsi(&prices, 0).iter().all(Option::is_none));
}

#[test]
fn validation_window_exceeds_data() {
    let prices = vec![1.0_f64, 2.0, 3.0, 4.0];

    assert_eq!(compute_ema(&prices, 5), vec![None; 4]);
    // RSI needs one more price than its window to seed
    assert_eq!(compute_rsi(&prices, 4), vec![None; 4]);
}

#[test]
fn validation_extremely_large_window() {
    let prices = vec![1.0_f64; 10];

    assert!(compute_ema(&prices, usize::MAX).iter().all(Option::is_none));
    assert!(compute_rsi(&prices, usize::MAX).iter().all(Option::is_none));
    assert!(generate_ema_crossover_signal(&prices, usize::MAX, 1)
        .slow_ema
        .iter()
        .all(Option::is_none));
}

#[test]
fn validation_crossover_equal_windows() {
    let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let out = generate_ema_crossover_signal(&prices, 3, 3);

    assert_eq!(out.signal, vec![None; 5]);
}

// ==================== Non-Finite Data ====================

#[test]
fn validation_nan_in_data() {
    let prices = vec![1.0_f64, 2.0, 3.0, f64::NAN, 5.0, 6.0];

    let ema = compute_ema(&prices, 2);
    assert!(ema[1].is_some());
    assert!(ema[3..].iter().all(Option::is_none));

    // The gap counts as a flat bar, so RSI keeps going without losses
    let out = generate_rsi_threshold_signal(&prices, 2, 30.0, 70.0);
    assert!(out.rsi[..3].iter().all(Option::is_none));
    assert!(out.rsi[3..].iter().all(|v| v.is_some_and(|r| r > 99.0)));
    assert!(out.signal[..3].iter().all(|s| s.is_hold()));
    assert!(out.signal[3..].iter().all(|s| *s == Signal::Sell));
}

#[test]
fn validation_infinity_in_data() {
    let prices = vec![1.0_f64, f64::INFINITY, 3.0, 4.0];
    let ema = compute_ema(&prices, 2);

    assert!(ema.iter().all(|v| v.map_or(true, f64::is_finite)));
}

// ==================== Length Mismatch Tests ====================

#[test]
fn validation_buffer_too_small() {
    let prices = vec![1.0_f64; 10];
    let mut short = vec![None; 9];

    assert!(matches!(
        compute_ema_into(&prices, 3, &mut short),
        Err(Error::BufferLengthMismatch { expected: 10, actual: 9, .. })
    ));
    assert!(matches!(
        compute_rsi_into(&prices, 3, &mut short),
        Err(Error::BufferLengthMismatch { expected: 10, actual: 9, .. })
    ));
}

#[test]
fn validation_buffer_too_large() {
    let prices = vec![1.0_f64; 10];
    let mut long = vec![None; 11];

    assert!(compute_ema_into(&prices, 3, &mut long).is_err());
}

#[test]
fn validation_series_length_mismatch() {
    let a = vec![Signal::Buy; 4];
    let b = vec![Some(Signal::Sell); 5];
    assert!(matches!(
        aggregate_final_signal(&a, &b),
        Err(Error::LengthMismatch { expected: 4, actual: 5 })
    ));

    let slow = vec![Some(1.0_f64); 3];
    let fast = vec![Some(1.0_f64); 4];
    assert!(derive_crossover_signal(&slow, &fast).is_err());
}

// ==================== Error Messages ====================

#[test]
fn validation_error_messages_are_actionable() {
    let err = SignalConfig::new().slow_window(5).validate().unwrap_err();
    assert!(err.to_string().contains("slow window 5"));

    let err = SignalConfig::new().rsi_window(2).validate().unwrap_err();
    assert!(err.to_string().contains("rsi window must be greater than 2"));

    let err = SignalConfig::new().thresholds(70.0, 30.0).validate().unwrap_err();
    assert!(err.to_string().contains("long entry must be below short entry"));
}
