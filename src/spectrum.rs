// src/spectrum.rs

use crate::common::{FftError, MAX_N};
use crate::fixed::{ComplexFixed, Fixed};
use core::fmt;

/// Squared magnitude of one bin, unsigned Q2.30 in a `u32`.
///
/// `re² + im²` of two Q15 values is at most 2.0, so the exact sum always
/// fits and comparisons between bins never see a saturated value.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Magnitude(u32);

impl Magnitude {
    pub const ZERO: Self = Self(0);
    pub const FRAC_BITS: u32 = 30;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// `|z|²` from the exact Q2.30 products.
    pub const fn of(z: ComplexFixed) -> Self {
        let re = z.re.widening_mul(z.re) as u32;
        let im = z.im.widening_mul(z.im) as u32;
        Self(re + im)
    }

    /// Q15 value, truncated and saturated at `Fixed::MAX`.
    pub fn to_fixed(self) -> Fixed {
        let shifted = self.0 >> (Self::FRAC_BITS - crate::fixed::types::FRAC_BITS);
        Fixed::from_bits(shifted.min(i16::MAX as u32) as i16)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << Self::FRAC_BITS) as f64
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9} (raw: {})", self.to_f64(), self.0)
    }
}

/// Squared magnitudes of the first half of a spectrum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagnitudeSpectrum {
    bins: [Magnitude; MAX_N / 2],
    len: usize,
}

impl MagnitudeSpectrum {
    pub fn new() -> Self {
        Self {
            bins: [Magnitude::ZERO; MAX_N / 2],
            len: 0,
        }
    }

    /// Recomputes the spectrum from `bins`; at most 256 bins are accepted.
    pub fn update(&mut self, bins: &[ComplexFixed]) -> Result<(), FftError> {
        if bins.len() > self.bins.len() {
            return Err(FftError::SizeMismatch {
                expected: self.bins.len(),
                found: bins.len(),
            });
        }
        magnitude_squared(bins, &mut self.bins[..bins.len()])?;
        self.len = bins.len();
        Ok(())
    }

    pub fn as_slice(&self) -> &[Magnitude] {
        &self.bins[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for MagnitudeSpectrum {
    fn default() -> Self {
        Self::new()
    }
}

/// `out[k] = re[k]² + im[k]²` for every bin.
pub fn magnitude_squared(bins: &[ComplexFixed], out: &mut [Magnitude]) -> Result<(), FftError> {
    if bins.len() != out.len() {
        return Err(FftError::SizeMismatch {
            expected: bins.len(),
            found: out.len(),
        });
    }

    for (m, &z) in out.iter_mut().zip(bins) {
        *m = Magnitude::of(z);
    }
    Ok(())
}

/// Strongest bin of a spectrum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Peak {
    pub bin: usize,
    pub magnitude: Magnitude,
}

/// Linear scan over every bin, DC included. The lowest index wins ties,
/// so an all-zero (or empty) spectrum reports bin 0.
pub fn find_peak(spectrum: &[Magnitude]) -> Peak {
    find_peak_from(spectrum, 0)
}

/// Same as [`find_peak`] but ignores bins below `first_bin`.
pub fn find_peak_from(spectrum: &[Magnitude], first_bin: usize) -> Peak {
    let mut peak = Peak {
        bin: first_bin.min(spectrum.len().saturating_sub(1)),
        magnitude: Magnitude::ZERO,
    };

    for (bin, &magnitude) in spectrum.iter().enumerate().skip(first_bin) {
        if magnitude > peak.magnitude {
            peak = Peak { bin, magnitude };
        }
    }
    peak
}

/// `floor(bin * sample_rate_hz / n)` in 64-bit integer arithmetic.
///
/// Exact to the hertz for any bin and rate representable here.
pub fn bin_to_frequency(bin: usize, sample_rate_hz: u32, n: usize) -> u32 {
    if n == 0 {
        return 0;
    }
    (bin as u64 * sample_rate_hz as u64 / n as u64) as u32
}
