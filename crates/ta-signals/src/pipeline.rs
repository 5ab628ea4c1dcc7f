//! End-to-end signal pipeline.
//!
//! [`SignalConfig`] bundles the five strategy parameters and [`generate_signals`]
//! runs the crossover generator, the threshold generator and the aggregator
//! over one price series, returning every intermediate series in a
//! [`SignalFrame`].
//!
//! The pipeline applies the same lenient semantics as the individual
//! functions: an invalid configuration produces undefined or neutral output
//! rather than an error. Call [`SignalConfig::validate`] first for strict
//! checking.
//!
//! # Example
//!
//! ```
//! use ta_signals::pipeline::{generate_signals, SignalConfig};
//!
//! let prices: Vec<f64> = (0..60).map(|i| 100.0 + (f64::from(i) * 0.3).sin() * 5.0).collect();
//! let config = SignalConfig::new().slow_window(12).fast_window(5).rsi_window(7);
//! config.validate().unwrap();
//!
//! let frame = generate_signals(&prices, &config).unwrap();
//! assert_eq!(frame.len(), prices.len());
//! assert!(frame.last_signal().is_some());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::IndicatorSeries;
use crate::signals::{
    aggregate_final_signal_into, generate_ema_crossover_signal_into,
    generate_rsi_threshold_signal_into, Signal, SignalSeries,
};
use crate::traits::SeriesElement;

/// Parameters of the EMA crossover / RSI threshold strategy.
///
/// The default is the conventional 20/10 crossover with a 14-period RSI and
/// 30/70 entry levels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SignalConfig {
    /// Slow EMA window. Must exceed `fast_window` for the crossover to be defined.
    pub slow_window: usize,
    /// Fast EMA window.
    pub fast_window: usize,
    /// RSI window.
    pub rsi_window: usize,
    /// RSI level below which the threshold generator buys.
    pub long_entry: f64,
    /// RSI level above which the threshold generator sells.
    pub short_entry: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            slow_window: 20,
            fast_window: 10,
            rsi_window: 14,
            long_entry: 30.0,
            short_entry: 70.0,
        }
    }
}

impl SignalConfig {
    /// Creates a configuration with the default parameters (20, 10, 14, 30, 70).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slow EMA window.
    ///
    /// Default: 20
    #[must_use]
    pub const fn slow_window(mut self, window: usize) -> Self {
        self.slow_window = window;
        self
    }

    /// Sets the fast EMA window.
    ///
    /// Default: 10
    #[must_use]
    pub const fn fast_window(mut self, window: usize) -> Self {
        self.fast_window = window;
        self
    }

    /// Sets the RSI window.
    ///
    /// Default: 14
    #[must_use]
    pub const fn rsi_window(mut self, window: usize) -> Self {
        self.rsi_window = window;
        self
    }

    /// Sets the long and short RSI entry levels.
    ///
    /// Default: 30.0 and 70.0
    #[must_use]
    pub const fn thresholds(mut self, long_entry: f64, short_entry: f64) -> Self {
        self.long_entry = long_entry;
        self.short_entry = short_entry;
        self
    }

    /// Checks the configuration against the strict parameter rules.
    ///
    /// - every window is at least 1
    /// - `slow_window > fast_window`
    /// - `rsi_window > 2`
    /// - both thresholds lie strictly inside (0, 100)
    /// - `long_entry < short_entry`
    ///
    /// # Errors
    ///
    /// Returns the first rule violated as `Error::InvalidWindow`,
    /// `Error::InvalidCrossoverWindows` or `Error::InvalidThresholds`.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_signals::pipeline::SignalConfig;
    ///
    /// assert!(SignalConfig::default().validate().is_ok());
    /// assert!(SignalConfig::new().slow_window(5).validate().is_err());
    /// assert!(SignalConfig::new().thresholds(80.0, 20.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::debug!(config = ?self, error = %err, "signal config rejected");
        }
        result
    }

    fn check(&self) -> Result<()> {
        for window in [self.slow_window, self.fast_window, self.rsi_window] {
            if window == 0 {
                return Err(Error::InvalidWindow {
                    window,
                    reason: "window must be at least 1",
                });
            }
        }

        if self.slow_window <= self.fast_window {
            return Err(Error::InvalidCrossoverWindows {
                slow: self.slow_window,
                fast: self.fast_window,
            });
        }

        if self.rsi_window <= 2 {
            return Err(Error::InvalidWindow {
                window: self.rsi_window,
                reason: "rsi window must be greater than 2",
            });
        }

        let in_range = |v: f64| v > 0.0 && v < 100.0;
        if !in_range(self.long_entry) || !in_range(self.short_entry) {
            return Err(Error::InvalidThresholds {
                long_entry: self.long_entry,
                short_entry: self.short_entry,
                reason: "thresholds must lie strictly between 0 and 100",
            });
        }

        if self.long_entry >= self.short_entry {
            return Err(Error::InvalidThresholds {
                long_entry: self.long_entry,
                short_entry: self.short_entry,
                reason: "long entry must be below short entry",
            });
        }

        Ok(())
    }

    /// Runs the pipeline over `prices` with this configuration.
    ///
    /// # Errors
    ///
    /// See [`generate_signals`].
    pub fn compute<T: SeriesElement>(&self, prices: &[T]) -> Result<SignalFrame<T>> {
        generate_signals(prices, self)
    }
}

/// Every series produced by one pipeline run, index-aligned with the prices.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalFrame<T: SeriesElement> {
    /// Slow EMA.
    pub slow_ema: IndicatorSeries<T>,
    /// Fast EMA.
    pub fast_ema: IndicatorSeries<T>,
    /// Crossover signal; entirely `None` when the crossover windows are invalid.
    pub ema_signal: SignalSeries,
    /// RSI.
    pub rsi: IndicatorSeries<T>,
    /// Threshold signal.
    pub rsi_signal: Vec<Signal>,
    /// Aggregated final signal.
    pub signal: Vec<Signal>,
}

impl<T: SeriesElement> SignalFrame<T> {
    fn with_len(n: usize) -> Self {
        Self {
            slow_ema: vec![None; n],
            fast_ema: vec![None; n],
            ema_signal: vec![None; n],
            rsi: vec![None; n],
            rsi_signal: vec![Signal::Hold; n],
            signal: vec![Signal::Hold; n],
        }
    }

    /// Returns the number of bars in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    /// Returns true if the frame holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Returns the final signal for the most recent bar.
    #[must_use]
    pub fn last_signal(&self) -> Option<Signal> {
        self.signal.last().copied()
    }

    /// Returns the number of leading bars on which some indicator is undefined.
    #[must_use]
    pub fn warmup_len(&self) -> usize {
        (0..self.len())
            .find(|&i| {
                self.slow_ema[i].is_some()
                    && self.fast_ema[i].is_some()
                    && self.ema_signal[i].is_some()
                    && self.rsi[i].is_some()
            })
            .unwrap_or(self.len())
    }
}

/// Runs crossover, threshold and aggregation over `prices`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a threshold or window cannot be
/// represented in `T`, or `Error::AllocationFailed` if the RSI scratch space
/// cannot be reserved.
pub fn generate_signals<T: SeriesElement>(
    prices: &[T],
    config: &SignalConfig,
) -> Result<SignalFrame<T>> {
    let long_entry = T::from_f64(config.long_entry)?;
    let short_entry = T::from_f64(config.short_entry)?;

    let mut frame = SignalFrame::with_len(prices.len());

    generate_ema_crossover_signal_into(
        prices,
        config.slow_window,
        config.fast_window,
        &mut frame.ema_signal,
        &mut frame.slow_ema,
        &mut frame.fast_ema,
    )?;

    generate_rsi_threshold_signal_into(
        prices,
        config.rsi_window,
        long_entry,
        short_entry,
        &mut frame.rsi,
        &mut frame.rsi_signal,
    )?;

    aggregate_final_signal_into(&frame.ema_signal, &frame.rsi_signal, &mut frame.signal)?;

    tracing::trace!(
        len = frame.len(),
        last = ?frame.last_signal(),
        "signal pipeline complete"
    );

    Ok(frame)
}
