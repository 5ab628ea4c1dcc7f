//! Exponential Moving Average (EMA) engine.
//!
//! The EMA is a trend-following average that weights recent prices more
//! heavily than older ones. It is the building block of the crossover signal
//! generator, which runs it twice with a slow and a fast window.
//!
//! # Formula
//!
//! ```text
//! EMA[0..W-2] = undefined (insufficient history)
//! EMA[W-1]    = SMA(prices[0..W])
//! EMA[i]      = α × Price[i] + (1 - α) × EMA[i-1],   α = 2 / (W + 1)
//! ```
//!
//! # Degenerate input
//!
//! An empty series, a zero window or a window longer than the series produce
//! no computation: the output is fully populated with undefined entries.
//!
//! # Example
//!
//! ```
//! use ta_signals::indicators::ema::compute_ema;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let ema = compute_ema(&prices, 3);
//!
//! assert_eq!(ema[0], None);
//! assert_eq!(ema[1], None);
//! // Seed is the simple mean of the first three prices
//! assert!((ema[2].unwrap() - 2.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::indicators::IndicatorSeries;
use crate::traits::{finite, validate_output_len, SeriesElement};

/// Returns the number of leading undefined EMA values for `window`.
///
/// # Example
///
/// ```
/// use ta_signals::indicators::ema::ema_lookback;
///
/// assert_eq!(ema_lookback(5), 4);
/// assert_eq!(ema_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn ema_lookback(window: usize) -> usize {
    window.saturating_sub(1)
}

/// Returns the minimum input length that yields at least one defined EMA value.
#[inline]
#[must_use]
pub const fn ema_min_len(window: usize) -> usize {
    window
}

/// Returns true if `window` can be computed over a series of length `len`.
#[inline]
#[must_use]
pub const fn ema_window_is_valid(window: usize, len: usize) -> bool {
    window >= 1 && window <= len
}

/// Computes the Exponential Moving Average of `prices`.
///
/// The output always has `prices.len()` entries. The first `window - 1`
/// are `None`; for degenerate input (`window == 0` or `window > prices.len()`)
/// every entry is `None`.
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the output vector
#[must_use = "this returns the EMA series, which should be used"]
pub fn compute_ema<T: SeriesElement>(prices: &[T], window: usize) -> IndicatorSeries<T> {
    let mut output = vec![None; prices.len()];
    if let Err(err) = compute_ema_into(prices, window, &mut output) {
        // Only a numeric conversion can fail here; the buffer is sized above.
        tracing::warn!(window, error = %err, "ema computation failed");
    }
    output
}

/// Computes the Exponential Moving Average into a caller-supplied buffer.
///
/// The buffer must have exactly `prices.len()` elements and is always fully
/// written: undefined positions are set to `None`, even when the window is
/// degenerate.
///
/// # Returns
///
/// The number of defined values written (`prices.len() - window + 1` for a
/// valid window, otherwise 0).
///
/// # Errors
///
/// - `Error::BufferLengthMismatch` if `output.len() != prices.len()`
/// - `Error::NumericConversion` if the window cannot be represented in `T`
///
/// # Example
///
/// ```
/// use ta_signals::indicators::ema::compute_ema_into;
///
/// let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![Some(0.0); 5];
/// let defined = compute_ema_into(&prices, 3, &mut output).unwrap();
///
/// assert_eq!(defined, 3);
/// assert_eq!(output[0], None);
/// ```
pub fn compute_ema_into<T: SeriesElement>(
    prices: &[T],
    window: usize,
    output: &mut [Option<T>],
) -> Result<usize> {
    validate_output_len("ema", prices.len(), output.len())?;
    output.fill(None);

    if !ema_window_is_valid(window, prices.len()) {
        tracing::debug!(window, len = prices.len(), "ema window not computable, output undefined");
        return Ok(0);
    }

    compute_ema_core(prices, window, output)
}

/// Core EMA recursion.
///
/// Assumes the window is valid and `output` is sized and cleared.
fn compute_ema_core<T: SeriesElement>(
    prices: &[T],
    window: usize,
    output: &mut [Option<T>],
) -> Result<usize> {
    let window_t = T::from_usize(window)?;
    let alpha = T::two() / (window_t + T::one());
    let one_minus_alpha = T::one() - alpha;

    // SMA seed over the first `window` prices
    let seed = prices[..window].iter().fold(T::zero(), |acc, &p| acc + p) / window_t;

    let mut prev = seed;
    output[window - 1] = finite(seed);

    for (out, &price) in output[window..].iter_mut().zip(&prices[window..]) {
        prev = price * alpha + prev * one_minus_alpha;
        *out = finite(prev);
    }

    Ok(output.iter().filter(|v| v.is_some()).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const EPSILON: f64 = 1e-10;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < EPSILON)
    }

    #[test]
    fn test_ema_basic() {
        let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = compute_ema(&prices, 3);

        assert_eq!(result.len(), 5);
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        // seed = (1 + 2 + 3) / 3 = 2, alpha = 0.5
        assert!(approx(result[2], 2.0));
        assert!(approx(result[3], 4.0 * 0.5 + 2.0 * 0.5));
        assert!(approx(result[4], 5.0 * 0.5 + 3.0 * 0.5));
    }

    #[test]
    fn test_ema_window_one_tracks_prices() {
        // alpha = 2 / 2 = 1, so the EMA equals the price
        let prices = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0];
        let result = compute_ema(&prices, 1);

        for (i, &p) in prices.iter().enumerate() {
            assert!(approx(result[i], p), "index {i}: {:?}", result[i]);
        }
    }

    #[test]
    fn test_ema_window_equals_length() {
        let prices = vec![2.0_f64, 4.0, 6.0];
        let result = compute_ema(&prices, 3);

        assert_eq!(result[..2], [None, None]);
        assert!(approx(result[2], 4.0));
    }

    #[test]
    fn test_ema_f32() {
        let prices = vec![10.0_f32, 11.0, 12.0, 13.0];
        let result = compute_ema(&prices, 2);

        assert_eq!(result[0], None);
        assert!((result[1].unwrap() - 10.5).abs() < 1e-5);
    }

    #[test]
    fn test_ema_known_values() {
        // alpha = 2 / 6 for window 5
        let prices = vec![22.27_f64, 22.19, 22.08, 22.17, 22.18, 22.13, 22.23];
        let result = compute_ema(&prices, 5);

        let seed = (22.27 + 22.19 + 22.08 + 22.17 + 22.18) / 5.0;
        let alpha = 2.0 / 6.0;
        let e5 = 22.13 * alpha + seed * (1.0 - alpha);
        let e6 = 22.23 * alpha + e5 * (1.0 - alpha);

        assert!(approx(result[4], seed));
        assert!(approx(result[5], e5));
        assert!(approx(result[6], e6));
    }

    #[test]
    fn test_ema_empty_input() {
        let prices: Vec<f64> = vec![];
        let result = compute_ema(&prices, 3);
        assert!(result.is_empty());
    }

    #[test]
    fn test_ema_zero_window_is_all_undefined() {
        let prices = vec![1.0_f64, 2.0, 3.0];
        let result = compute_ema(&prices, 0);
        assert_eq!(result, vec![None, None, None]);
    }

    #[test]
    fn test_ema_window_too_long_is_all_undefined() {
        let prices = vec![1.0_f64, 2.0, 3.0];
        let result = compute_ema(&prices, 4);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_ema_into_overwrites_stale_buffer() {
        let prices = vec![1.0_f64, 2.0, 3.0];
        let mut output = vec![Some(99.0); 3];

        let defined = compute_ema_into(&prices, 5, &mut output).unwrap();

        assert_eq!(defined, 0);
        assert!(output.iter().all(Option::is_none));
    }

    #[test]
    fn test_ema_into_defined_count() {
        let prices: Vec<f64> = (1..=10).map(f64::from).collect();
        let mut output = vec![None; 10];

        let defined = compute_ema_into(&prices, 4, &mut output).unwrap();

        assert_eq!(defined, 7);
        assert_eq!(output.iter().take_while(|v| v.is_none()).count(), ema_lookback(4));
    }

    #[test]
    fn test_ema_into_buffer_mismatch() {
        let prices = vec![1.0_f64, 2.0, 3.0];
        let mut output = vec![None; 2];

        let result = compute_ema_into(&prices, 2, &mut output);
        assert!(matches!(
            result,
            Err(Error::BufferLengthMismatch {
                series: "ema",
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_ema_nan_price_becomes_undefined() {
        let prices = vec![1.0_f64, 2.0, f64::NAN, 4.0];
        let result = compute_ema(&prices, 2);

        assert!(approx(result[1], 1.5));
        // NaN poisons the recursion from index 2 onwards
        assert_eq!(result[2], None);
        assert_eq!(result[3], None);
    }

    #[test]
    fn test_lookback_and_min_len() {
        assert_eq!(ema_lookback(0), 0);
        assert_eq!(ema_lookback(20), 19);
        assert_eq!(ema_min_len(20), 20);
        assert!(ema_window_is_valid(3, 3));
        assert!(!ema_window_is_valid(0, 3));
        assert!(!ema_window_is_valid(4, 3));
    }
}
