// src/fixed/core.rs

use super::Scaling;
use super::types::ComplexFixed;

/// Agnostic sin/cos helper, used only while building twiddle tables.
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Agnostic round-half-away-from-zero helper.
pub(crate) fn round(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.round();

    #[cfg(not(feature = "std"))]
    return libm::round(value);
}

/// Reverses the low `bits` bits of `index`.
#[inline]
pub(crate) fn reverse_bits(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Radix-2 decimation-in-time butterflies, natural order in, bit-reversed order out.
///
/// This is the classic DIT schedule with every buffer address bit-reversed:
/// stage `s` pairs elements `span = N >> (s + 1)` apart, and block `b`
/// (the pairs sharing one twiddle) uses `W^bitrev(b)`, which is the factor
/// `j * 2^(L-1-s)` the in-order schedule gives the same butterfly.
///
/// # Arguments
/// - `buffer`: Input/output samples, length a power of two
/// - `twiddles`: Twiddle table
/// - `twiddle_stride`: Stride into `twiddles` (2 when a N-point table drives a N/2-point transform)
/// - `scaling`: Whether each stage halves its outputs
pub(crate) fn radix_2_dit_fft_core(
    buffer: &mut [ComplexFixed],
    twiddles: &[ComplexFixed],
    twiddle_stride: usize,
    scaling: Scaling,
) {
    let n = buffer.len();
    let log2n = n.trailing_zeros();
    let mut span = n >> 1;

    while span > 0 {
        let blocks = n / (span << 1);

        for block in 0..blocks {
            let w = twiddles[reverse_bits(block, log2n - 1) * twiddle_stride];
            let base = block * (span << 1);

            for top in base..(base + span) {
                let bottom = top + span;
                let a = buffer[top];
                // Butterfly: t = b * w
                let t = buffer[bottom] * w;

                let (v1, v2) = match scaling {
                    Scaling::PerStage => (a.half_add(t), a.half_sub(t)),
                    Scaling::Unscaled => (a + t, a - t),
                };

                buffer[top] = v1;
                buffer[bottom] = v2;
            }
        }
        span >>= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
