//! Shared test utilities for ta-signals tests.

use ta_signals::Signal;

/// Approximate equality for optional values; two `None` are equal.
#[allow(dead_code)]
pub fn approx_eq(a: Option<f64>, b: Option<f64>, eps: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() < eps,
        _ => false,
    }
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Verify that exactly the first `n` values are `None`.
#[allow(dead_code)]
pub fn verify_undefined_prefix<T>(data: &[Option<T>], n: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| if i < n { v.is_none() } else { v.is_some() })
}

/// Deterministic oscillating price series with a slight upward drift.
#[allow(dead_code)]
pub fn wave_prices(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            100.0 + (x * 0.2).sin() * 6.0 + (x * 0.05).cos() * 3.0 + x * 0.02
        })
        .collect()
}

/// Counts occurrences of `which` in an optional signal series.
#[allow(dead_code)]
pub fn count_signal(signal: &[Option<Signal>], which: Signal) -> usize {
    signal.iter().filter(|s| **s == Some(which)).count()
}

/// Naive EMA written directly from the recurrence, for cross-checking.
#[allow(dead_code)]
pub fn reference_ema(prices: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; prices.len()];
    if window == 0 || window > prices.len() {
        return out;
    }
    #[allow(clippy::cast_precision_loss)]
    let w = window as f64;
    let alpha = 2.0 / (w + 1.0);
    let mut ema: f64 = prices[..window].iter().sum::<f64>() / w;
    out[window - 1] = Some(ema);
    for i in window..prices.len() {
        ema = alpha * prices[i] + (1.0 - alpha) * ema;
        out[i] = Some(ema);
    }
    out
}

/// Naive Wilder RSI, first defined at `window + 1`.
#[allow(dead_code)]
pub fn reference_rsi(prices: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; prices.len()];
    if window == 0 || window >= prices.len() {
        return out;
    }
    #[allow(clippy::cast_precision_loss)]
    let w = window as f64;

    let change = |i: usize| prices[i] - prices[i - 1];
    let mut avg_gain = (1..=window).map(|i| change(i).max(0.0)).sum::<f64>() / w;
    let mut avg_loss = (1..=window).map(|i| (-change(i)).max(0.0)).sum::<f64>() / w;

    for i in (window + 1)..prices.len() {
        avg_gain = (avg_gain * (w - 1.0) + change(i).max(0.0)) / w;
        avg_loss = (avg_loss * (w - 1.0) + (-change(i)).max(0.0)) / w;
        let rs = if avg_loss == 0.0 {
            if avg_gain > 0.0 {
                1e10
            } else {
                0.0
            }
        } else {
            avg_gain / avg_loss
        };
        out[i] = Some(100.0 - 100.0 / (1.0 + rs));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_undefined_prefix() {
        assert!(verify_undefined_prefix(&[None, None, Some(1.0), Some(2.0)], 2));
        assert!(!verify_undefined_prefix(&[None, Some(1.0), None], 1));
        assert!(verify_undefined_prefix::<f64>(&[], 0));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(Some(1.0), Some(1.0 + 1e-12), EPSILON));
        assert!(approx_eq(None, None, EPSILON));
        assert!(!approx_eq(Some(1.0), None, EPSILON));
    }
}
