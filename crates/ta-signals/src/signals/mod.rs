//! Ternary trading signals derived from indicator series.
//!
//! - [`crossover`] - EMA crossover: fires on a change of fast/slow ordering
//! - [`threshold`] - RSI threshold: oversold buys, overbought sells
//! - [`aggregate`] - combines two signal series into a final direction
//!
//! Indicator values that are still undefined become [`Signal::Hold`] at the
//! generator boundary, so the aggregated series is always fully defined. The
//! only undefined signals come from an invalid crossover configuration.

use std::fmt;

pub mod aggregate;
pub mod crossover;
pub mod threshold;

pub use aggregate::{aggregate_final_signal, aggregate_final_signal_into};
pub use crossover::{
    derive_crossover_signal, generate_ema_crossover_signal, generate_ema_crossover_signal_into,
    CrossoverOutput,
};
pub use threshold::{
    derive_threshold_signal, generate_rsi_threshold_signal, generate_rsi_threshold_signal_into,
    ThresholdOutput,
};

/// A ternary trading signal.
///
/// The discriminants match the numeric convention used by consumers of the
/// signal columns: `-1` sell, `0` hold, `+1` buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(i8)]
pub enum Signal {
    /// Sell / net bearish.
    Sell = -1,
    /// Hold / neutral.
    #[default]
    Hold = 0,
    /// Buy / net bullish.
    Buy = 1,
}

/// An index-aligned signal output where `None` marks an undefined value.
pub type SignalSeries = Vec<Option<Signal>>;

impl Signal {
    /// Returns the signal as `-1`, `0` or `1`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Returns the sign of `value` as a signal.
    ///
    /// ```
    /// use ta_signals::Signal;
    ///
    /// assert_eq!(Signal::from_sign(2), Signal::Buy);
    /// assert_eq!(Signal::from_sign(0), Signal::Hold);
    /// assert_eq!(Signal::from_sign(-1), Signal::Sell);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_sign(value: i32) -> Self {
        if value > 0 {
            Self::Buy
        } else if value < 0 {
            Self::Sell
        } else {
            Self::Hold
        }
    }

    /// Returns true for [`Signal::Hold`].
    #[inline]
    #[must_use]
    pub const fn is_hold(self) -> bool {
        matches!(self, Self::Hold)
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.value()
    }
}

impl From<Signal> for f64 {
    fn from(signal: Signal) -> Self {
        Self::from(signal.value())
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
