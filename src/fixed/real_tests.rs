use super::*;
use crate::fixed::complex::CplxFft;
use crate::test_util::{assert_complex_close, noise, reference_dft};
use num_complex::Complex;
use std::vec;
use std::vec::Vec;

fn real_noise(n: usize, amplitude: f64, seed: u32) -> Vec<Fixed> {
    noise(n, amplitude, seed)
        .iter()
        .map(|c| Fixed::from_f64(c.re))
        .collect()
}

fn as_reference(samples: &[Fixed]) -> Vec<Complex<f64>> {
    samples.iter().map(|x| Complex::new(x.to_f64(), 0.0)).collect()
}

#[test]
fn test_pack_real_layout() {
    let samples: Vec<Fixed> = (0..8).map(|i| Fixed::from_bits(i * 100)).collect();
    let mut buffer = [ComplexFixed::from_bits(1, 1); 5];

    pack_real(&samples, &mut buffer).unwrap();

    assert_eq!(buffer[0], ComplexFixed::from_bits(0, 100));
    assert_eq!(buffer[3], ComplexFixed::from_bits(600, 700));
    assert_eq!(buffer[4], ComplexFixed::ZERO);
}

#[test]
fn test_pack_real_rejects_wrong_length() {
    let samples = [Fixed::ZERO; 8];
    let mut buffer = [ComplexFixed::ZERO; 4];
    assert_eq!(
        pack_real(&samples, &mut buffer),
        Err(FftError::SizeMismatch { expected: 5, found: 4 })
    );
}

#[test]
fn test_rfft_scaled_matches_reference() {
    for log2n in 6..=9 {
        let n = 1usize << log2n;
        let samples = real_noise(n, 0.5, log2n);
        let expected = reference_dft(&as_reference(&samples));

        let twiddles = TwiddleTable::generate(log2n).unwrap();
        let mut buffer = vec![ComplexFixed::ZERO; n / 2 + 1];
        pack_real(&samples, &mut buffer).unwrap();
        RealFft::new(&twiddles, Scaling::PerStage).process(&mut buffer).unwrap();

        for (k, &val) in buffer.iter().enumerate() {
            assert_complex_close(val, expected[k] / n as f64, 0.002);
        }
    }
}

#[test]
fn test_rfft_unscaled_matches_reference() {
    let log2n = 6;
    let n = 1usize << log2n;
    let samples = real_noise(n, 0.5 / n as f64, 5);
    let expected = reference_dft(&as_reference(&samples));

    let twiddles = TwiddleTable::generate(log2n).unwrap();
    let mut buffer = vec![ComplexFixed::ZERO; n / 2 + 1];
    pack_real(&samples, &mut buffer).unwrap();
    transform_real_in_place(&mut buffer, &twiddles, log2n, Scaling::Unscaled).unwrap();

    for (k, &val) in buffer.iter().enumerate() {
        assert_complex_close(val, expected[k], 0.005);
    }
}

#[test]
fn test_rfft_agrees_with_complex_transform() {
    let log2n = 8;
    let n = 1usize << log2n;
    let samples = real_noise(n, 0.5, 42);
    let twiddles = TwiddleTable::generate(log2n).unwrap();

    let mut real = vec![ComplexFixed::ZERO; n / 2 + 1];
    pack_real(&samples, &mut real).unwrap();
    RealFft::new(&twiddles, Scaling::PerStage).process(&mut real).unwrap();

    let mut complex: Vec<ComplexFixed> = samples.iter().map(|&x| ComplexFixed::real(x)).collect();
    CplxFft::new(&twiddles, Scaling::PerStage).process(&mut complex).unwrap();

    for k in 0..=n / 2 {
        assert_complex_close(real[k], complex[k].to_complex(), 0.002);
    }
}

#[test]
fn test_rfft_dc_and_nyquist_are_real() {
    let log2n = 6;
    // Alternating +-0.25 puts everything at Nyquist
    let samples: Vec<Fixed> = (0..64)
        .map(|i| if i % 2 == 0 { Fixed::from_f64(0.25) } else { Fixed::from_f64(-0.25) })
        .collect();
    let twiddles = TwiddleTable::generate(log2n).unwrap();
    let mut buffer = [ComplexFixed::ZERO; 33];
    pack_real(&samples, &mut buffer).unwrap();
    transform_real_in_place(&mut buffer, &twiddles, log2n, Scaling::PerStage).unwrap();

    assert_eq!(buffer[0], ComplexFixed::ZERO);
    assert_eq!(buffer[32], ComplexFixed::real(Fixed::from_f64(0.25)));
}

#[test]
fn test_rfft_rejects_complex_sized_buffer() {
    let twiddles = TwiddleTable::generate(6).unwrap();
    let mut buffer = [ComplexFixed::ZERO; 64];
    assert_eq!(
        transform_real_in_place(&mut buffer, &twiddles, 6, Scaling::PerStage),
        Err(FftError::SizeMismatch { expected: 33, found: 64 })
    );
}
