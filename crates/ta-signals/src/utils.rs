//! Utility functions for ta-signals.
//!
//! Helpers for comparing and inspecting index-aligned series, used by the
//! tests and by front ends that export series to formats without an
//! "undefined" marker.
//!
//! # Example
//!
//! ```
//! use ta_signals::utils::{approx_eq, EPSILON};
//!
//! assert!(approx_eq(Some(1.0 / 3.0), Some(0.333_333_333_333_333), EPSILON));
//! assert!(approx_eq::<f64>(None, None, EPSILON));
//! assert!(!approx_eq(Some(1.0), None, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving long recursions or `f32` data.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality for optional series values.
///
/// Two undefined values are equal; a defined and an undefined value never are.
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: Option<T>, b: Option<T>, tolerance: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b)
            .abs()
            .to_f64()
            .is_some_and(|diff| diff < tolerance),
        _ => false,
    }
}

/// Counts the undefined values in a series.
#[must_use]
pub fn count_undefined<T>(data: &[Option<T>]) -> usize {
    data.iter().filter(|v| v.is_none()).count()
}

/// Counts the leading undefined values in a series.
///
/// ```
/// use ta_signals::utils::undefined_prefix_len;
///
/// assert_eq!(undefined_prefix_len(&[None, None, Some(1.0), None]), 2);
/// ```
#[must_use]
pub fn undefined_prefix_len<T>(data: &[Option<T>]) -> usize {
    data.iter().take_while(|v| v.is_none()).count()
}

/// Converts a series to plain floats, mapping undefined values to NaN.
#[must_use]
pub fn to_nan_series<T: SeriesElement>(data: &[Option<T>]) -> Vec<T> {
    data.iter().map(|v| v.unwrap_or_else(T::nan)).collect()
}
