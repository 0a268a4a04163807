// src/fixed/twiddle.rs

use super::core::sin_cos;
use super::types::{ComplexFixed, Fixed};
use crate::common::{FftError, MAX_N, block_len};
use core::f64::consts::PI;

/// Precomputed twiddle factors for one transform length.
///
/// Entry `k` holds `W^k = e^{-2πik/N}` in Q15 for `k` in `[0, N/2)`.
/// The table is filled once and read-only afterwards; its length always
/// matches the `log2n` it was built for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwiddleTable {
    factors: [ComplexFixed; MAX_N / 2],
    log2n: u32,
}

impl TwiddleTable {
    /// Computes the table for a transform of `2^log2n` points.
    pub fn generate(log2n: u32) -> Result<Self, FftError> {
        let n = block_len(log2n)?;
        let mut table = Self {
            factors: [ComplexFixed::ZERO; MAX_N / 2],
            log2n,
        };
        generate_into(&mut table.factors[..n / 2], n);
        Ok(table)
    }

    /// Wraps a constant table built offline, e.g. one kept in flash.
    ///
    /// The table must hold exactly `2^(log2n - 1)` entries.
    pub fn from_precomputed(log2n: u32, factors: &[ComplexFixed]) -> Result<Self, FftError> {
        let n = block_len(log2n)?;
        if factors.len() != n / 2 {
            return Err(FftError::TwiddleLengthMismatch {
                expected: n / 2,
                found: factors.len(),
            });
        }

        let mut table = Self {
            factors: [ComplexFixed::ZERO; MAX_N / 2],
            log2n,
        };
        table.factors[..n / 2].copy_from_slice(factors);
        Ok(table)
    }

    pub fn log2n(&self) -> u32 {
        self.log2n
    }

    /// Number of factors, N/2.
    pub fn len(&self) -> usize {
        1 << (self.log2n - 1)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[ComplexFixed] {
        &self.factors[..self.len()]
    }

    /// Fails unless this table was built for a `log2n`-point transform.
    pub(crate) fn check(&self, log2n: u32) -> Result<(), FftError> {
        let expected = block_len(log2n)? / 2;
        if self.len() != expected {
            return Err(FftError::TwiddleLengthMismatch {
                expected,
                found: self.len(),
            });
        }
        Ok(())
    }
}

/// Fills `twiddles[..n/2]` by direct trigonometric evaluation rounded to Q15.
///
/// `cos(0) = 1.0` saturates to `Fixed::MAX`; `sin(-π/2) = -1.0` is exact.
pub(crate) fn generate_into(twiddles: &mut [ComplexFixed], n: usize) {
    for (k, w) in twiddles.iter_mut().take(n / 2).enumerate() {
        let angle = -2.0 * PI * (k as f64) / (n as f64);
        let (sin, cos) = sin_cos(angle);
        *w = ComplexFixed::new(Fixed::from_f64(cos), Fixed::from_f64(sin));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{MAX_LOG2N, MIN_LOG2N};

    const TOLERANCE: i16 = 1;

    #[test]
    fn test_generate_length_and_landmarks() {
        for log2n in MIN_LOG2N..=MAX_LOG2N {
            let table = TwiddleTable::generate(log2n).unwrap();
            let n = 1usize << log2n;
            assert_eq!(table.len(), n / 2);
            assert_eq!(table.as_slice().len(), n / 2);

            // W^0 = (1, 0)
            assert_eq!(table.as_slice()[0], ComplexFixed::new(Fixed::MAX, Fixed::ZERO));

            // W^{N/4} = (0, -1)
            let quarter = table.as_slice()[n / 4];
            assert!(quarter.re.to_bits().abs() <= TOLERANCE, "log2n {}: {:?}", log2n, quarter);
            assert!(
                (quarter.im.to_bits() as i32 + Fixed::MAX.to_bits() as i32).abs() <= TOLERANCE as i32,
                "log2n {}: {:?}",
                log2n,
                quarter
            );
        }
    }

    #[test]
    fn test_generate_symmetry() {
        // W^{N/4 + k} = -i * W^k
        let table = TwiddleTable::generate(7).unwrap();
        let w = table.as_slice();
        for k in 1..32 {
            let rotated = w[k].conj().mul_i().conj();
            let diff_re = (rotated.re.to_bits() as i32 - w[32 + k].re.to_bits() as i32).abs();
            let diff_im = (rotated.im.to_bits() as i32 - w[32 + k].im.to_bits() as i32).abs();
            assert!(diff_re <= 1 && diff_im <= 1, "k {}", k);
        }
    }

    #[test]
    fn test_generate_rejects_unsupported_length() {
        assert_eq!(
            TwiddleTable::generate(10),
            Err(FftError::Log2LengthOutOfRange { log2n: 10 })
        );
    }

    #[test]
    fn test_precomputed_matches_generated() {
        let generated = TwiddleTable::generate(6).unwrap();
        let copied = TwiddleTable::from_precomputed(6, generated.as_slice()).unwrap();
        assert_eq!(generated, copied);
    }

    #[test]
    fn test_precomputed_length_mismatch() {
        let generated = TwiddleTable::generate(6).unwrap();
        assert_eq!(
            TwiddleTable::from_precomputed(7, generated.as_slice()),
            Err(FftError::TwiddleLengthMismatch { expected: 64, found: 32 })
        );
    }

    #[test]
    fn test_check_detects_stale_table() {
        let table = TwiddleTable::generate(8).unwrap();
        assert!(table.check(8).is_ok());
        assert_eq!(
            table.check(9),
            Err(FftError::TwiddleLengthMismatch { expected: 256, found: 128 })
        );
    }
}
