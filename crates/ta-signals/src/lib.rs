//! ta-signals: EMA crossover and RSI threshold trading signals
//!
//! This crate computes two technical indicators over a closing-price series
//! and turns them into ternary trading signals:
//!
//! - an Exponential Moving Average (EMA), run with a slow and a fast window,
//!   drives a crossover signal that fires when the fast average moves across
//!   the slow one
//! - a Relative Strength Index (RSI) drives a threshold signal that buys when
//!   the market is oversold and sells when it is overbought
//! - the two signals are summed and reduced to their sign
//!
//! Every output is index-aligned with the input prices. Values that cannot be
//! computed yet (warm-up) or at all (invalid window) are `None`.
//!
//! # Quick Start
//!
//! ```
//! use ta_signals::prelude::*;
//!
//! let prices: Vec<f64> = (0..50).map(|i| 100.0 + (f64::from(i) * 0.2).sin() * 4.0).collect();
//!
//! let frame = generate_signals(&prices, &SignalConfig::default()).unwrap();
//!
//! // The 20-bar slow EMA is undefined for the first 19 bars
//! assert_eq!(frame.slow_ema.iter().take_while(|v| v.is_none()).count(), 19);
//! // The final signal is always defined
//! assert_eq!(frame.signal.len(), prices.len());
//! ```
//!
//! # Building Blocks
//!
//! ## Indicators
//! - [`indicators::compute_ema()`]: Exponential Moving Average
//! - [`indicators::compute_rsi()`]: Relative Strength Index
//!
//! ## Signals
//! - [`signals::generate_ema_crossover_signal()`]: EMA crossover
//! - [`signals::generate_rsi_threshold_signal()`]: RSI threshold
//! - [`signals::aggregate_final_signal()`]: sign of the sum
//!
//! # Error Handling
//!
//! Invalid windows are not errors: they produce undefined output of the right
//! length. Errors are reserved for misuse of the `_into` buffers, mismatched
//! series lengths and strict configuration checks:
//!
//! ```
//! use ta_signals::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0];
//! let mut too_short = vec![None; 2];
//! assert!(compute_ema_into(&prices, 2, &mut too_short).is_err());
//!
//! assert!(SignalConfig::new().slow_window(5).fast_window(10).validate().is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod pipeline;
pub mod prelude;
pub mod signals;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::IndicatorSeries;
pub use pipeline::{generate_signals, SignalConfig, SignalFrame};
pub use signals::{Signal, SignalSeries};
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_undefined, undefined_prefix_len, EPSILON, LOOSE_EPSILON};
