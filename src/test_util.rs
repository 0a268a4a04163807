// Shared helpers for the unit tests.

use crate::fixed::ComplexFixed;
use core::f64::consts::PI;
use num_complex::Complex;
use std::vec::Vec;

/// O(N^2) floating DFT used as the reference spectrum.
pub(crate) fn reference_dft(input: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(t, x)| x * Complex::from_polar(1.0, -2.0 * PI * (k * t) as f64 / n as f64))
                .sum()
        })
        .collect()
}

/// Deterministic pseudo-random samples in [-amplitude, amplitude).
pub(crate) fn noise(len: usize, amplitude: f64, seed: u32) -> Vec<Complex<f64>> {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    let mut next = move || {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state as f64 / u32::MAX as f64 * 2.0 - 1.0) * amplitude
    };
    (0..len).map(|_| Complex::new(next(), next())).collect()
}

pub(crate) fn assert_complex_close(val: ComplexFixed, expected: Complex<f64>, tolerance: f64) {
    let got = val.to_complex();
    let dist = (got - expected).norm();

    assert!(
        dist < tolerance,
        "Error too large. Expected: ({:.5}, {:.5}), Got: ({:.5}, {:.5}), Dist: {:.5}",
        expected.re,
        expected.im,
        got.re,
        got.im,
        dist
    );
}
