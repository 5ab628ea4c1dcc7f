//! RSI threshold signal generator.
//!
//! Classifies every RSI value against a pair of entry levels:
//!
//! ```text
//! RSI < long_entry   => Buy   (oversold)
//! RSI > short_entry  => Sell  (overbought)
//! otherwise          => Hold  (including undefined RSI)
//! ```
//!
//! A value exactly on a threshold is `Hold`. The long test is applied first,
//! so if the thresholds are inverted (`long_entry > short_entry`) values
//! below `long_entry` still buy. Strict validation of the thresholds lives in
//! [`SignalConfig::validate`](crate::pipeline::SignalConfig::validate).
//!
//! # Example
//!
//! ```
//! use ta_signals::signals::{derive_threshold_signal, Signal};
//!
//! let rsi = vec![None, Some(25.0_f64), Some(50.0), Some(75.0), Some(30.0)];
//! let signal = derive_threshold_signal(&rsi, 30.0, 70.0);
//!
//! assert_eq!(
//!     signal,
//!     vec![Signal::Hold, Signal::Buy, Signal::Hold, Signal::Sell, Signal::Hold]
//! );
//! ```

use crate::error::Result;
use crate::indicators::rsi::compute_rsi_into;
use crate::indicators::IndicatorSeries;
use crate::signals::Signal;
use crate::traits::{validate_output_len, SeriesElement};

/// Output of the threshold generator: the RSI and its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdOutput<T: SeriesElement> {
    /// The underlying RSI series.
    pub rsi: IndicatorSeries<T>,
    /// Fully defined threshold signal.
    pub signal: Vec<Signal>,
}

impl<T: SeriesElement> ThresholdOutput<T> {
    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    /// Returns true if the output series are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }
}

/// Generates the RSI threshold signal for `prices`.
#[must_use = "this returns the RSI and its signal, which should be used"]
pub fn generate_rsi_threshold_signal<T: SeriesElement>(
    prices: &[T],
    rsi_window: usize,
    long_entry: T,
    short_entry: T,
) -> ThresholdOutput<T> {
    let n = prices.len();
    let mut output = ThresholdOutput {
        rsi: vec![None; n],
        signal: vec![Signal::Hold; n],
    };

    if let Err(err) = generate_rsi_threshold_signal_into(
        prices,
        rsi_window,
        long_entry,
        short_entry,
        &mut output.rsi,
        &mut output.signal,
    ) {
        tracing::warn!(rsi_window, error = %err, "rsi threshold produced no result");
    }

    output
}

/// Generates the RSI threshold signal into caller-supplied buffers.
///
/// Both buffers must have exactly `prices.len()` elements. The signal buffer
/// is set to `Hold` before any computation, so it is fully defined even when
/// an error is returned.
///
/// # Errors
///
/// - `Error::BufferLengthMismatch` if a buffer length differs from `prices.len()`
/// - `Error::AllocationFailed` if the RSI scratch space cannot be reserved
/// - `Error::NumericConversion` if the window cannot be represented in `T`
pub fn generate_rsi_threshold_signal_into<T: SeriesElement>(
    prices: &[T],
    rsi_window: usize,
    long_entry: T,
    short_entry: T,
    rsi_out: &mut [Option<T>],
    signal_out: &mut [Signal],
) -> Result<()> {
    validate_output_len("threshold signal", prices.len(), signal_out.len())?;
    signal_out.fill(Signal::Hold);

    compute_rsi_into(prices, rsi_window, rsi_out)?;
    classify_into(rsi_out, long_entry, short_entry, signal_out);
    Ok(())
}

/// Classifies an existing RSI series against the entry thresholds.
#[must_use]
pub fn derive_threshold_signal<T: SeriesElement>(
    rsi: &[Option<T>],
    long_entry: T,
    short_entry: T,
) -> Vec<Signal> {
    let mut signal = vec![Signal::Hold; rsi.len()];
    classify_into(rsi, long_entry, short_entry, &mut signal);
    signal
}

fn classify_into<T: SeriesElement>(
    rsi: &[Option<T>],
    long_entry: T,
    short_entry: T,
    signal_out: &mut [Signal],
) {
    for (out, value) in signal_out.iter_mut().zip(rsi) {
        *out = classify(*value, long_entry, short_entry);
    }
}

#[inline]
fn classify<T: SeriesElement>(value: Option<T>, long_entry: T, short_entry: T) -> Signal {
    match value {
        Some(v) if v < long_entry => Signal::Buy,
        Some(v) if v > short_entry => Signal::Sell,
        _ => Signal::Hold,
    }
}
