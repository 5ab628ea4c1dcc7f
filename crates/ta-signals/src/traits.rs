//! Core traits for ta-signals numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` price data. The module also hosts the output-buffer check shared by
//! every `_into` entry point.
//!
//! # Example
//!
//! ```
//! use ta_signals::traits::SeriesElement;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> ta_signals::Result<T> {
//!     let n = T::from_usize(data.len())?;
//!     Ok(data.iter().fold(T::zero(), |acc, &x| acc + x) / n)
//! }
//!
//! let m = mean(&[1.0_f64, 2.0, 3.0]).unwrap();
//! assert!((m - 2.0).abs() < 1e-12);
//! ```

use std::fmt::Debug;

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements of a price or indicator series.
///
/// Extends `num_traits::Float` with the conversions and constants the
/// indicator engines need.
pub trait SeriesElement: Float + NumCast + Copy + Default + Debug + Send + Sync + 'static {
    /// Creates a series element from a `usize` value, typically a window length.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value, typically a threshold.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 (numerator of the EMA smoothing factor).
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 (RSI scale).
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if 100 is not representable.
    #[inline]
    fn hundred() -> Result<Self> {
        Self::from_usize(100)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Debug + Send + Sync + 'static> SeriesElement for T {}

/// Checks that a caller-supplied output buffer has exactly `expected` elements.
///
/// # Errors
///
/// Returns `Error::BufferLengthMismatch` naming `series` when the lengths differ.
#[inline]
pub const fn validate_output_len(series: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::BufferLengthMismatch {
            series,
            expected,
            actual,
        })
    }
}

/// Stores `value` as defined only if it is a finite number.
///
/// NaN or infinite results can only arise from non-finite prices; they are
/// kept out of indicator series as undefined entries.
#[inline]
#[must_use]
pub fn finite<T: SeriesElement>(value: T) -> Option<T> {
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}
