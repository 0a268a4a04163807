use super::Scaling;
use super::bitrev::reverse_order;
use super::core::radix_2_dit_fft_core;
use super::twiddle::TwiddleTable;
use super::types::ComplexFixed;
use crate::common::{FftError, block_len};

/// In-place complex FFT of `2^log2n` points.
///
/// The spectrum is left in bit-reversed order; run
/// [`permute`](super::permute) afterwards for natural order.
/// Nothing is touched when the table, buffer and `log2n` disagree.
pub fn transform_complex_in_place(
    buffer: &mut [ComplexFixed],
    twiddles: &TwiddleTable,
    log2n: u32,
    scaling: Scaling,
) -> Result<(), FftError> {
    let n = block_len(log2n)?;
    twiddles.check(log2n)?;
    if buffer.len() != n {
        return Err(FftError::SizeMismatch {
            expected: n,
            found: buffer.len(),
        });
    }

    radix_2_dit_fft_core(buffer, twiddles.as_slice(), 1, scaling);
    Ok(())
}

/// Complex FFT bound to one twiddle table, producing natural-order output.
pub struct CplxFft<'a> {
    twiddles: &'a TwiddleTable,
    scaling: Scaling,
}

impl<'a> CplxFft<'a> {
    pub fn new(twiddles: &'a TwiddleTable, scaling: Scaling) -> Self {
        Self { twiddles, scaling }
    }

    /// Transform length N.
    pub fn len(&self) -> usize {
        1 << self.twiddles.log2n()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Executes the FFT in-place: butterflies, then bit-reversal.
    pub fn process(&self, buffer: &mut [ComplexFixed]) -> Result<(), FftError> {
        transform_complex_in_place(buffer, self.twiddles, self.twiddles.log2n(), self.scaling)?;
        reverse_order(buffer);
        Ok(())
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
