use super::Scaling;
use super::bitrev::reverse_order;
use super::core::radix_2_dit_fft_core;
use super::twiddle::TwiddleTable;
use super::types::{ComplexFixed, Fixed};
use crate::common::{FftError, block_len};

/// Packs `N` real samples into the `N/2 + 1` complex slots the real
/// transform works on: slot `k` holds `(x[2k], x[2k+1])`, the last slot
/// is cleared to receive the Nyquist bin.
pub fn pack_real(samples: &[Fixed], buffer: &mut [ComplexFixed]) -> Result<(), FftError> {
    let half = samples.len() / 2;
    if samples.len() % 2 != 0 || buffer.len() != half + 1 {
        return Err(FftError::SizeMismatch {
            expected: half + 1,
            found: buffer.len(),
        });
    }

    for (slot, pair) in buffer.iter_mut().zip(samples.chunks_exact(2)) {
        *slot = ComplexFixed::new(pair[0], pair[1]);
    }
    buffer[half] = ComplexFixed::ZERO;
    Ok(())
}

/// In-place FFT of `N = 2^log2n` real samples packed by [`pack_real`].
///
/// Runs the complex kernel on the `N/2` packed points (stride 2 into the
/// `N`-point twiddle table), reorders them internally and then splits the
/// even/odd halves into the true spectrum. On return `buffer[k]` holds bin
/// `k` for `k` in `[0, N/2]`; DC and Nyquist are purely real.
///
/// With [`Scaling::PerStage`] the recombination halves once more, so the
/// result carries the same 1/N scale as the complex transform.
pub fn transform_real_in_place(
    buffer: &mut [ComplexFixed],
    twiddles: &TwiddleTable,
    log2n: u32,
    scaling: Scaling,
) -> Result<(), FftError> {
    let n = block_len(log2n)?;
    twiddles.check(log2n)?;
    let half = n / 2;
    if buffer.len() != half + 1 {
        return Err(FftError::SizeMismatch {
            expected: half + 1,
            found: buffer.len(),
        });
    }

    // FFT of the complex sequence of N/2 points, interleaved from real input
    radix_2_dit_fft_core(&mut buffer[..half], twiddles.as_slice(), 2, scaling);
    reverse_order(&mut buffer[..half]);

    let quarter = half / 2;
    let w = twiddles.as_slice();

    // DC = even.re + odd.re, Nyquist = even.re - odd.re, both read from z[0]
    let z0 = buffer[0];
    let (dc, nyquist) = match scaling {
        Scaling::PerStage => (z0.re.half_add(z0.im), z0.re.half_sub(z0.im)),
        Scaling::Unscaled => (z0.re + z0.im, z0.re - z0.im),
    };
    buffer[0] = ComplexFixed::real(dc);
    buffer[half] = ComplexFixed::real(nyquist);

    // At N/4 the twiddle is -i and the split collapses to a conjugate
    buffer[quarter] = match scaling {
        Scaling::PerStage => buffer[quarter].conj().scale_half(),
        Scaling::Unscaled => buffer[quarter].conj(),
    };

    for k in 1..quarter {
        let a = buffer[k];
        let b = buffer[half - k].conj();

        // even = (z[k] + conj(z[N/2-k])) / 2, odd = (z[k] - conj(z[N/2-k])) / 2
        let even = a.half_add(b);
        let odd = a.half_sub(b);

        // tmp = i * odd * W^k
        let tmp = (odd * w[k]).mul_i();

        // X[k] = even - tmp, X[N/2-k] = conj(even + tmp)
        let (low, high) = match scaling {
            Scaling::PerStage => (even.half_sub(tmp), even.half_add(tmp)),
            Scaling::Unscaled => (even - tmp, even + tmp),
        };
        buffer[k] = low;
        buffer[half - k] = high.conj();
    }

    Ok(())
}

/// Real-input FFT bound to one twiddle table.
pub struct RealFft<'a> {
    twiddles: &'a TwiddleTable,
    scaling: Scaling,
}

impl<'a> RealFft<'a> {
    pub fn new(twiddles: &'a TwiddleTable, scaling: Scaling) -> Self {
        Self { twiddles, scaling }
    }

    /// Executes the real FFT; `buffer` holds N/2 + 1 packed slots.
    pub fn process(&self, buffer: &mut [ComplexFixed]) -> Result<(), FftError> {
        transform_real_in_place(buffer, self.twiddles, self.twiddles.log2n(), self.scaling)
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
