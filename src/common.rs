// src/common.rs

/// Smallest supported transform exponent (N = 64).
pub const MIN_LOG2N: u32 = 6;
/// Largest supported transform exponent (N = 512).
pub const MAX_LOG2N: u32 = 9;
/// Largest supported transform length.
pub const MAX_N: usize = 1 << MAX_LOG2N;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    Log2LengthOutOfRange { log2n: u32 },
    TwiddleLengthMismatch { expected: usize, found: usize },
    SizeMismatch { expected: usize, found: usize },
    InvalidInputShift { shift: u32 },
    InvalidSampleRate,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::Log2LengthOutOfRange { log2n } => write!(
                f,
                "log2 transform length {} outside supported range [{}, {}]",
                log2n, MIN_LOG2N, MAX_LOG2N
            ),
            FftError::TwiddleLengthMismatch { expected, found } => write!(
                f,
                "Twiddle table holds {} entries, transform needs {}",
                found, expected
            ),
            FftError::SizeMismatch { expected, found } => write!(
                f,
                "Data buffer holds {} entries, transform needs {}",
                found, expected
            ),
            FftError::InvalidInputShift { shift } => {
                write!(f, "Input shift {} is wider than a 16-bit sample", shift)
            }
            FftError::InvalidSampleRate => write!(f, "Sample rate must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Checks that `log2n` is a supported transform exponent and returns N.
pub fn block_len(log2n: u32) -> Result<usize, FftError> {
    if !(MIN_LOG2N..=MAX_LOG2N).contains(&log2n) {
        return Err(FftError::Log2LengthOutOfRange { log2n });
    }
    Ok(1 << log2n)
}
