//! EMA crossover signal generator.
//!
//! Runs the EMA engine with a slow and a fast window and emits a signal only
//! when the ordering of the two averages changes:
//!
//! - **Pre-signal** per bar: `Buy` if fast > slow, `Sell` if slow > fast,
//!   `Hold` if they are equal
//! - **Emitted signal**: `Hold` on the first defined bar and on any bar that
//!   follows a `Hold` pre-signal; otherwise `Buy`/`Sell` on an upward/downward
//!   change of the pre-signal, `Hold` when it is unchanged
//!
//! Bars where either average is still undefined emit `Hold` and do not touch
//! the remembered pre-signal.
//!
//! # Invalid configuration
//!
//! When `slow_window <= fast_window` no EMA is computed and every output,
//! signal included, is undefined.
//!
//! # Example
//!
//! ```
//! use ta_signals::signals::{generate_ema_crossover_signal, Signal};
//!
//! let prices = vec![10.0_f64, 10.0, 10.0, 9.0, 8.0, 7.0, 9.0, 12.0, 15.0, 18.0];
//! let out = generate_ema_crossover_signal(&prices, 4, 2);
//!
//! assert_eq!(out.len(), prices.len());
//! assert!(out.signal.contains(&Some(Signal::Buy)));
//! ```

use crate::error::{Error, Result};
use crate::indicators::ema::compute_ema_into;
use crate::indicators::IndicatorSeries;
use crate::signals::{Signal, SignalSeries};
use crate::traits::{validate_output_len, SeriesElement};

/// Output of the crossover generator: the signal plus both underlying EMAs.
///
/// The EMA series are exposed for inspection and charting.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverOutput<T: SeriesElement> {
    /// The crossover signal. Entirely `None` for an invalid configuration.
    pub signal: SignalSeries,
    /// EMA over the slow window.
    pub slow_ema: IndicatorSeries<T>,
    /// EMA over the fast window.
    pub fast_ema: IndicatorSeries<T>,
}

impl<T: SeriesElement> CrossoverOutput<T> {
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

/// Returns true if the slow window is strictly greater than the fast window.
#[inline]
#[must_use]
pub const fn crossover_windows_are_valid(slow_window: usize, fast_window: usize) -> bool {
    slow_window > fast_window
}

/// Generates the EMA crossover signal for `prices`.
///
/// All three returned series have `prices.len()` entries.
#[must_use = "this returns the crossover signal and EMAs, which should be used"]
pub fn generate_ema_crossover_signal<T: SeriesElement>(
    prices: &[T],
    slow_window: usize,
    fast_window: usize,
) -> CrossoverOutput<T> {
    let n = prices.len();
    let mut output = CrossoverOutput {
        signal: vec![None; n],
        slow_ema: vec![None; n],
        fast_ema: vec![None; n],
    };

    if let Err(err) = generate_ema_crossover_signal_into(
        prices,
        slow_window,
        fast_window,
        &mut output.signal,
        &mut output.slow_ema,
        &mut output.fast_ema,
    ) {
        tracing::warn!(slow_window, fast_window, error = %err, "ema crossover produced no result");
        output.signal.fill(None);
    }

    output
}

/// Generates the EMA crossover signal into caller-supplied buffers.
///
/// Every buffer must have exactly `prices.len()` elements and is fully
/// written.
///
/// # Errors
///
/// - `Error::BufferLengthMismatch` if any buffer length differs from `prices.len()`
/// - `Error::NumericConversion` if a window cannot be represented in `T`
pub fn generate_ema_crossover_signal_into<T: SeriesElement>(
    prices: &[T],
    slow_window: usize,
    fast_window: usize,
    signal_out: &mut [Option<Signal>],
    slow_ema_out: &mut [Option<T>],
    fast_ema_out: &mut [Option<T>],
) -> Result<()> {
    validate_output_len("crossover signal", prices.len(), signal_out.len())?;
    validate_output_len("slow ema", prices.len(), slow_ema_out.len())?;
    validate_output_len("fast ema", prices.len(), fast_ema_out.len())?;

    if !crossover_windows_are_valid(slow_window, fast_window) {
        tracing::debug!(
            slow_window,
            fast_window,
            "slow window not above fast window, crossover signal undefined"
        );
        signal_out.fill(None);
        slow_ema_out.fill(None);
        fast_ema_out.fill(None);
        return Ok(());
    }

    compute_ema_into(prices, slow_window, slow_ema_out)?;
    compute_ema_into(prices, fast_window, fast_ema_out)?;
    derive_into(slow_ema_out, fast_ema_out, signal_out);
    Ok(())
}

/// Derives the crossover signal from an existing pair of EMA series.
///
/// Undefined positions in either series emit `Hold`; the result is therefore
/// fully defined.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the two series have different lengths.
///
/// # Example
///
/// ```
/// use ta_signals::signals::{derive_crossover_signal, Signal};
///
/// let slow = vec![None, Some(10.0_f64), Some(10.0), Some(10.0)];
/// let fast = vec![None, Some(9.0_f64), Some(11.0), Some(12.0)];
///
/// let signal = derive_crossover_signal(&slow, &fast).unwrap();
/// assert_eq!(signal[2], Some(Signal::Buy));
/// ```
pub fn derive_crossover_signal<T: SeriesElement>(
    slow_ema: &[Option<T>],
    fast_ema: &[Option<T>],
) -> Result<SignalSeries> {
    if slow_ema.len() != fast_ema.len() {
        return Err(Error::LengthMismatch {
            expected: slow_ema.len(),
            actual: fast_ema.len(),
        });
    }

    let mut signal = vec![None; slow_ema.len()];
    derive_into(slow_ema, fast_ema, &mut signal);
    Ok(signal)
}

/// Walks both EMAs, tracking the previous defined pre-signal.
fn derive_into<T: SeriesElement>(
    slow_ema: &[Option<T>],
    fast_ema: &[Option<T>],
    signal_out: &mut [Option<Signal>],
) {
    let mut prev: Option<Signal> = None;

    for ((out, slow), fast) in signal_out.iter_mut().zip(slow_ema).zip(fast_ema) {
        let (Some(slow), Some(fast)) = (*slow, *fast) else {
            *out = Some(Signal::Hold);
            continue;
        };

        let pre = pre_signal(slow, fast);
        *out = Some(transition(prev, pre));
        prev = Some(pre);
    }
}

/// Orders the fast EMA against the slow one.
#[inline]
fn pre_signal<T: SeriesElement>(slow: T, fast: T) -> Signal {
    if fast > slow {
        Signal::Buy
    } else if slow > fast {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Signal emitted when the pre-signal moves from `prev` to `current`.
#[inline]
fn transition(prev: Option<Signal>, current: Signal) -> Signal {
    match prev {
        None | Some(Signal::Hold) => Signal::Hold,
        Some(prev) if prev != current => {
            Signal::from_sign(i32::from(current.value()) - i32::from(prev.value()))
        }
        Some(_) => Signal::Hold,
    }
}
