//! Indicator engines.
//!
//! Both engines take an ordered closing-price series and produce an
//! index-aligned [`IndicatorSeries`] of the same length. Positions inside the
//! warm-up window, or every position when the window cannot be computed over
//! the series, hold `None`.
//!
//! - [`ema`] - Exponential Moving Average, seeded with a simple mean
//! - [`rsi`] - Relative Strength Index with Wilder smoothing
//!
//! # Example
//!
//! ```
//! use ta_signals::indicators::{compute_ema, compute_rsi};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let ema = compute_ema(&prices, 5);
//! let rsi = compute_rsi(&prices, 5);
//!
//! assert_eq!(ema.len(), prices.len());
//! assert_eq!(rsi.iter().filter(|v| v.is_none()).count(), 6);
//! ```

pub mod ema;
pub mod rsi;

/// An index-aligned indicator output where `None` marks an undefined value.
pub type IndicatorSeries<T> = Vec<Option<T>>;

pub use ema::{compute_ema, compute_ema_into, ema_lookback, ema_min_len, ema_window_is_valid};
pub use rsi::{
    compute_rsi, compute_rsi_into, rsi_lookback, rsi_min_len, rsi_window_is_valid, RS_SATURATION,
};
