//! Error types for ta-signals.
//!
//! The signal core reports invalid configurations through undefined output
//! values rather than errors. The variants below cover the remaining failure
//! conditions: mis-sized caller buffers, mismatched signal series, temporary
//! buffer exhaustion, numeric conversion and the strict parameter checks of
//! [`SignalConfig::validate`](crate::pipeline::SignalConfig::validate).

use thiserror::Error;

/// The main error type for ta-signals operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A caller-supplied output buffer does not match the input length.
    ///
    /// Every output series must have exactly as many elements as the price
    /// series it was computed from.
    #[error("output buffer for {series} has {actual} elements, expected {expected}")]
    BufferLengthMismatch {
        /// Name of the output series.
        series: &'static str,
        /// The required length (length of the price series).
        expected: usize,
        /// The length of the buffer that was provided.
        actual: usize,
    },

    /// Two series that must be index-aligned have different lengths.
    #[error("series length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length of the first series.
        expected: usize,
        /// Length of the second series.
        actual: usize,
    },

    /// A temporary working buffer could not be reserved.
    ///
    /// The affected outputs are left fully undefined.
    #[error("failed to allocate {requested} elements of scratch space for {indicator}")]
    AllocationFailed {
        /// Indicator whose scratch space could not be reserved.
        indicator: &'static str,
        /// Number of elements requested.
        requested: usize,
    },

    /// A window parameter is outside the accepted range.
    #[error("invalid window {window}: {reason}")]
    InvalidWindow {
        /// The rejected window length.
        window: usize,
        /// Description of why the window is invalid.
        reason: &'static str,
    },

    /// The slow EMA window is not strictly greater than the fast one.
    #[error("slow window {slow} must be greater than fast window {fast}")]
    InvalidCrossoverWindows {
        /// The slow EMA window.
        slow: usize,
        /// The fast EMA window.
        fast: usize,
    },

    /// RSI entry thresholds are out of range or inverted.
    #[error("invalid RSI thresholds (long {long_entry}, short {short_entry}): {reason}")]
    InvalidThresholds {
        /// The long (oversold) entry threshold.
        long_entry: f64,
        /// The short (overbought) entry threshold.
        short_entry: f64,
        /// Description of the violated rule.
        reason: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the ta-signals Error type.
pub type Result<T> = std::result::Result<T, Error>;
