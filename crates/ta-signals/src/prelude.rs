//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ta_signals::prelude::*;
//!
//! let prices = vec![10.0_f64, 10.5, 10.2, 10.8, 11.0, 10.7, 11.3, 11.6, 11.2, 11.9];
//!
//! let ema = compute_ema(&prices, 3);
//! let rsi = compute_rsi(&prices, 3);
//! let frame = generate_signals(&prices, &SignalConfig::new().slow_window(4).fast_window(2).rsi_window(3)).unwrap();
//!
//! assert_eq!(ema.len(), rsi.len());
//! assert_eq!(frame.signal.len(), prices.len());
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Indicator engines
pub use crate::indicators::{
    compute_ema, compute_ema_into, compute_rsi, compute_rsi_into, IndicatorSeries,
};

// Lookback functions
pub use crate::indicators::{ema_lookback, ema_min_len, rsi_lookback, rsi_min_len};

// Signal generators
pub use crate::signals::{
    aggregate_final_signal, aggregate_final_signal_into, generate_ema_crossover_signal,
    generate_ema_crossover_signal_into, generate_rsi_threshold_signal,
    generate_rsi_threshold_signal_into, CrossoverOutput, Signal, SignalSeries, ThresholdOutput,
};

// Pipeline
pub use crate::pipeline::{generate_signals, SignalConfig, SignalFrame};
