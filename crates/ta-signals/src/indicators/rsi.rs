//! Relative Strength Index (RSI) engine.
//!
//! The RSI is a momentum oscillator bounded to [0, 100] that compares the
//! average size of up-moves with the average size of down-moves, smoothed
//! with Wilder's method.
//!
//! # Algorithm
//!
//! 1. Price changes `Change[i] = Price[i] - Price[i-1]` for `i >= 1`
//! 2. `Gain[i] = max(0, Change[i])`, `Loss[i] = max(0, -Change[i])`,
//!    with `Gain[0] = Loss[0] = 0`
//! 3. Seed averages: simple mean of `Gain`/`Loss` over `[1, W]`
//! 4. Wilder smoothing for `i > W`:
//!    `Avg = Avg × (1 - 1/W) + Value[i] / W`
//! 5. `RS = AvgGain / AvgLoss`, `RSI = 100 - 100 / (1 + RS)`
//!
//! # Boundary Conditions
//!
//! - `AvgLoss == 0` and `AvgGain > 0`: RS is saturated to [`RS_SATURATION`],
//!   giving an RSI just below 100 while staying finite
//! - `AvgLoss == 0` and `AvgGain == 0` (no movement): RS = 0, so RSI = 0.
//!   The 0/0 case resolves to 0 rather than the neutral 50 some libraries use.
//!
//! # Warm-up
//!
//! Indices `[0, W]` are undefined: the seed evaluated at index `W` is treated
//! as warm-up, and the first defined value sits at `W + 1`. Windows with
//! `W == 0` or `W >= N` leave the whole series undefined.
//!
//! # Example
//!
//! ```
//! use ta_signals::indicators::rsi::compute_rsi;
//!
//! let prices = vec![44.0_f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0, 43.5];
//! let rsi = compute_rsi(&prices, 3);
//!
//! assert!(rsi[..4].iter().all(Option::is_none));
//! let first = rsi[4].unwrap();
//! assert!((0.0..=100.0).contains(&first));
//! ```

use crate::error::{Error, Result};
use crate::indicators::IndicatorSeries;
use crate::traits::{finite, validate_output_len, SeriesElement};

/// Relative strength used when the average loss is zero but gains are not.
///
/// A large finite value rather than infinity keeps RSI numerically close to
/// 100 without ever producing a non-finite result. Downstream consumers that
/// compare against historical output rely on this exact value.
pub const RS_SATURATION: f64 = 1e10;

/// Returns the number of leading undefined RSI values for `window`.
///
/// # Example
///
/// ```
/// use ta_signals::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 15);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(window: usize) -> usize {
    window + 1
}

/// Returns the minimum input length that yields at least one defined RSI value.
#[inline]
#[must_use]
pub const fn rsi_min_len(window: usize) -> usize {
    window + 2
}

/// Returns true if `window` can be computed over a series of length `len`.
#[inline]
#[must_use]
pub const fn rsi_window_is_valid(window: usize, len: usize) -> bool {
    window >= 1 && window < len
}

/// Computes the Relative Strength Index of `prices` using Wilder's smoothing.
///
/// The output always has `prices.len()` entries; the first `window + 1` are
/// `None`. Degenerate windows, and a failure to reserve the temporary
/// gain/loss buffers, produce a fully undefined series.
#[must_use = "this returns the RSI series, which should be used"]
pub fn compute_rsi<T: SeriesElement>(prices: &[T], window: usize) -> IndicatorSeries<T> {
    let mut output = vec![None; prices.len()];
    if let Err(err) = compute_rsi_into(prices, window, &mut output) {
        tracing::warn!(window, len = prices.len(), error = %err, "rsi computation produced no result");
    }
    output
}

/// Computes the Relative Strength Index into a caller-supplied buffer.
///
/// The buffer must have exactly `prices.len()` elements and is always fully
/// written. On any error after the length check, the buffer holds only
/// undefined entries.
///
/// # Returns
///
/// The number of defined values written (`prices.len() - window - 1` for a
/// valid window, otherwise 0).
///
/// # Errors
///
/// - `Error::BufferLengthMismatch` if `output.len() != prices.len()`
/// - `Error::AllocationFailed` if the gain/loss scratch buffers cannot be reserved
/// - `Error::NumericConversion` if the window cannot be represented in `T`
pub fn compute_rsi_into<T: SeriesElement>(
    prices: &[T],
    window: usize,
    output: &mut [Option<T>],
) -> Result<usize> {
    validate_output_len("rsi", prices.len(), output.len())?;
    output.fill(None);

    if !rsi_window_is_valid(window, prices.len()) {
        tracing::debug!(window, len = prices.len(), "rsi window not computable, output undefined");
        return Ok(0);
    }

    let (gains, losses) = gains_and_losses(prices)?;
    compute_rsi_core(&gains, &losses, window, output)
}

/// Splits price changes into gain and loss series.
///
/// Index 0 has no prior price and holds zero in both series.
fn gains_and_losses<T: SeriesElement>(prices: &[T]) -> Result<(Vec<T>, Vec<T>)> {
    let mut gains = scratch_buffer(prices.len())?;
    let mut losses = scratch_buffer(prices.len())?;

    gains.push(T::zero());
    losses.push(T::zero());
    for pair in prices.windows(2) {
        // `max` drops NaN, so a gap contributes neither gain nor loss
        let change = pair[1] - pair[0];
        gains.push(T::zero().max(change));
        losses.push(T::zero().max(-change));
    }

    Ok((gains, losses))
}

fn scratch_buffer<T>(len: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed {
            indicator: "rsi",
            requested: len,
        })?;
    Ok(buffer)
}

/// Seeds and smooths the average gain/loss, writing RSI from `window + 1` on.
///
/// All fallible conversions happen before the first write.
fn compute_rsi_core<T: SeriesElement>(
    gains: &[T],
    losses: &[T],
    window: usize,
    output: &mut [Option<T>],
) -> Result<usize> {
    let window_t = T::from_usize(window)?;
    let hundred = T::hundred()?;
    let saturation = T::from_f64(RS_SATURATION)?;
    let alpha = T::one() / window_t;
    let one_minus_alpha = T::one() - alpha;

    let mut avg_gain = gains[1..=window].iter().fold(T::zero(), |acc, &g| acc + g) / window_t;
    let mut avg_loss = losses[1..=window].iter().fold(T::zero(), |acc, &l| acc + l) / window_t;

    // The seed RSI at index `window` stays undefined as part of the warm-up.
    let mut written = 0;
    let start = window + 1;
    for ((out, &gain), &loss) in output[start..]
        .iter_mut()
        .zip(&gains[start..])
        .zip(&losses[start..])
    {
        avg_gain = avg_gain * one_minus_alpha + gain * alpha;
        avg_loss = avg_loss * one_minus_alpha + loss * alpha;

        *out = finite(rsi_value(avg_gain, avg_loss, saturation, hundred));
        written += usize::from(out.is_some());
    }

    Ok(written)
}

/// Computes RSI from the smoothed averages.
#[inline]
fn rsi_value<T: SeriesElement>(avg_gain: T, avg_loss: T, saturation: T, hundred: T) -> T {
    let zero = T::zero();
    let rs = if avg_loss == zero {
        if avg_gain > zero {
            saturation
        } else {
            zero
        }
    } else {
        avg_gain / avg_loss
    };
    hundred - hundred / (T::one() + rs)
}
