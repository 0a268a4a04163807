// src/fixed/bitrev.rs

use super::core::reverse_bits;
use crate::common::{FftError, block_len};

/// Reorders `buffer` in place so the element at index `i` moves to the
/// index formed by reversing the `log2n`-bit representation of `i`.
///
/// Used after [`transform_complex_in_place`](super::transform_complex_in_place)
/// to bring its bit-reversed spectrum back into natural frequency order.
/// Applying it twice restores the original order.
pub fn permute<T>(buffer: &mut [T], log2n: u32) -> Result<(), FftError> {
    let n = block_len(log2n)?;
    if buffer.len() != n {
        return Err(FftError::SizeMismatch {
            expected: n,
            found: buffer.len(),
        });
    }

    reverse_order(buffer);
    Ok(())
}

/// Bit-reversal permutation of a power-of-two buffer, without range checks.
///
/// Each pair is swapped once, from the lower index; fixed points stay put.
pub(crate) fn reverse_order<T>(buffer: &mut [T]) {
    let n = buffer.len();
    let bits = n.trailing_zeros();

    for i in 1..n.saturating_sub(1) {
        let j = reverse_bits(i, bits);
        if i < j {
            buffer.swap(i, j);
        }
    }
}
