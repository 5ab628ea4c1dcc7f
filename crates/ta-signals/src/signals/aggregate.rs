//! Final signal aggregation.
//!
//! Combines two index-aligned signal series by taking the sign of their sum:
//!
//! | a \ b | -1 | 0  | +1 |
//! |-------|----|----|----|
//! | -1    | -1 | -1 | 0  |
//! | 0     | -1 | 0  | +1 |
//! | +1    | 0  | +1 | +1 |
//!
//! Both inputs accept either [`Signal`] or `Option<Signal>`; an undefined
//! entry counts as `Hold`, so the result is always fully defined.

use crate::error::{Error, Result};
use crate::signals::Signal;
use crate::traits::validate_output_len;

/// Aggregates two signal series into the final direction.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs have different lengths.
///
/// # Example
///
/// ```
/// use ta_signals::signals::{aggregate_final_signal, Signal};
///
/// let crossover = vec![Some(Signal::Buy), Some(Signal::Sell), None];
/// let threshold = vec![Signal::Buy, Signal::Buy, Signal::Sell];
///
/// let signal = aggregate_final_signal(&crossover, &threshold).unwrap();
/// assert_eq!(signal, vec![Signal::Buy, Signal::Hold, Signal::Sell]);
/// ```
pub fn aggregate_final_signal<A, B>(first: &[A], second: &[B]) -> Result<Vec<Signal>>
where
    A: Copy + Into<Option<Signal>>,
    B: Copy + Into<Option<Signal>>,
{
    if first.len() != second.len() {
        return Err(Error::LengthMismatch {
            expected: first.len(),
            actual: second.len(),
        });
    }

    let mut output = vec![Signal::Hold; first.len()];
    combine_into(first, second, &mut output);
    Ok(output)
}

/// Aggregates two signal series into a caller-supplied buffer.
///
/// # Errors
///
/// - `Error::LengthMismatch` if the inputs have different lengths
/// - `Error::BufferLengthMismatch` if `output.len()` differs from the inputs
pub fn aggregate_final_signal_into<A, B>(
    first: &[A],
    second: &[B],
    output: &mut [Signal],
) -> Result<()>
where
    A: Copy + Into<Option<Signal>>,
    B: Copy + Into<Option<Signal>>,
{
    if first.len() != second.len() {
        return Err(Error::LengthMismatch {
            expected: first.len(),
            actual: second.len(),
        });
    }
    validate_output_len("final signal", first.len(), output.len())?;

    combine_into(first, second, output);
    Ok(())
}

fn combine_into<A, B>(first: &[A], second: &[B], output: &mut [Signal])
where
    A: Copy + Into<Option<Signal>>,
    B: Copy + Into<Option<Signal>>,
{
    for ((out, &a), &b) in output.iter_mut().zip(first).zip(second) {
        *out = combine(a.into(), b.into());
    }
}

#[inline]
fn combine(a: Option<Signal>, b: Option<Signal>) -> Signal {
    let a = a.map_or(0, |s| i32::from(s.value()));
    let b = b.map_or(0, |s| i32::from(s.value()));
    Signal::from_sign(a + b)
}
