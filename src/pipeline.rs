// src/pipeline.rs

//! Peak-frequency pipeline: precondition, transform, magnitude, peak, Hz.
//!
//! A [`PeakPipeline`] owns every buffer it touches, so one instance runs
//! one transform at a time and a run always completes before the next
//! starts.

use crate::common::{FftError, MAX_N, block_len};
use crate::fixed::complex::CplxFft;
use crate::fixed::real::{RealFft, pack_real};
use crate::fixed::types::FRAC_BITS;
use crate::fixed::{ComplexFixed, Fixed, Scaling, TwiddleTable};
use crate::spectrum::{Magnitude, MagnitudeSpectrum, bin_to_frequency, find_peak_from};

/// Which transform feeds the spectrum.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FftVariant {
    /// Samples become complex values with a zero imaginary part.
    #[default]
    Complex,
    /// Samples are packed two per complex slot and run through the real FFT.
    Real,
}

/// Where the twiddle factors come from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TwiddleSource {
    /// Computed once when the pipeline is built.
    #[default]
    Generated,
    /// A constant table built offline; must hold exactly N/2 entries.
    Precomputed(&'static [ComplexFixed]),
}

/// Whether the DC bin takes part in the peak search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PeakSearch {
    #[default]
    IncludeDc,
    ExcludeDc,
}

/// Selected once at pipeline construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub log2n: u32,
    pub sample_rate_hz: u32,
    pub variant: FftVariant,
    pub twiddles: TwiddleSource,
    pub scaling: Scaling,
    /// Arithmetic right shift applied to every raw sample.
    pub input_shift: u32,
    pub peak_search: PeakSearch,
}

impl Default for PipelineConfig {
    /// 256 points at 10 kHz, complex transform, input halved into [-0.5, 0.5).
    fn default() -> Self {
        Self {
            log2n: 8,
            sample_rate_hz: 10_000,
            variant: FftVariant::Complex,
            twiddles: TwiddleSource::Generated,
            scaling: Scaling::PerStage,
            input_shift: 1,
            peak_search: PeakSearch::IncludeDc,
        }
    }
}

impl PipelineConfig {
    pub fn new(log2n: u32, sample_rate_hz: u32) -> Self {
        Self {
            log2n,
            sample_rate_hz,
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: FftVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_twiddles(mut self, twiddles: TwiddleSource) -> Self {
        self.twiddles = twiddles;
        self
    }

    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn with_input_shift(mut self, input_shift: u32) -> Self {
        self.input_shift = input_shift;
        self
    }

    pub fn with_peak_search(mut self, peak_search: PeakSearch) -> Self {
        self.peak_search = peak_search;
        self
    }

    /// Transform length N.
    pub fn block_len(&self) -> Result<usize, FftError> {
        block_len(self.log2n)
    }

    /// Reports the first invalid setting.
    pub fn validate(&self) -> Result<(), FftError> {
        let n = self.block_len()?;
        if self.sample_rate_hz == 0 {
            return Err(FftError::InvalidSampleRate);
        }
        if self.input_shift > FRAC_BITS {
            return Err(FftError::InvalidInputShift {
                shift: self.input_shift,
            });
        }
        if let TwiddleSource::Precomputed(table) = self.twiddles {
            if table.len() != n / 2 {
                return Err(FftError::TwiddleLengthMismatch {
                    expected: n / 2,
                    found: table.len(),
                });
            }
        }
        Ok(())
    }
}

/// Samples of one block, sized for the largest supported transform.
///
/// The complex variant uses the first N slots; the real variant uses the
/// first N/2 + 1 (packed pairs in, bins 0..=N/2 out).
#[derive(Clone, Debug)]
pub struct SignalBuffer {
    data: [ComplexFixed; MAX_N],
    len: usize,
}

impl SignalBuffer {
    fn new(len: usize) -> Self {
        Self {
            data: [ComplexFixed::ZERO; MAX_N],
            len,
        }
    }

    pub fn as_slice(&self) -> &[ComplexFixed] {
        &self.data[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [ComplexFixed] {
        &mut self.data[..self.len]
    }
}

/// Result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakResult {
    pub bin: usize,
    pub frequency_hz: u32,
    pub magnitude: Magnitude,
}

/// Dominant-frequency detector over blocks of `2^log2n` samples.
#[derive(Clone, Debug)]
pub struct PeakPipeline {
    config: PipelineConfig,
    n: usize,
    twiddles: TwiddleTable,
    signal: SignalBuffer,
    spectrum: MagnitudeSpectrum,
}

impl PeakPipeline {
    /// Validates `config` and prepares the twiddle table once.
    pub fn new(config: PipelineConfig) -> Result<Self, FftError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected pipeline configuration {:?}: {}", config, err);
            return Err(err);
        }

        let n = config.block_len()?;
        let twiddles = match config.twiddles {
            TwiddleSource::Generated => TwiddleTable::generate(config.log2n)?,
            TwiddleSource::Precomputed(table) => TwiddleTable::from_precomputed(config.log2n, table)?,
        };
        let slots = match config.variant {
            FftVariant::Complex => n,
            FftVariant::Real => n / 2 + 1,
        };

        log::debug!(
            "peak pipeline: N={} fs={}Hz variant={:?} twiddles={} scaling={:?}",
            n,
            config.sample_rate_hz,
            config.variant,
            match config.twiddles {
                TwiddleSource::Generated => "generated",
                TwiddleSource::Precomputed(_) => "precomputed",
            },
            config.scaling
        );

        Ok(Self {
            config,
            n,
            twiddles,
            signal: SignalBuffer::new(slots),
            spectrum: MagnitudeSpectrum::new(),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Transform length N.
    pub fn block_len(&self) -> usize {
        self.n
    }

    pub fn twiddles(&self) -> &TwiddleTable {
        &self.twiddles
    }

    /// Runs one block of raw signed samples, shifted by `input_shift`.
    pub fn run(&mut self, samples: &[i16]) -> Result<PeakResult, FftError> {
        self.check_len(samples.len())?;
        let shift = self.config.input_shift;
        self.load(samples.iter().map(|&raw| Fixed::from_sample(raw, shift)))?;
        self.analyze()
    }

    /// Runs one block of samples that are already in the fractional domain.
    pub fn run_fractional(&mut self, samples: &[Fixed]) -> Result<PeakResult, FftError> {
        self.check_len(samples.len())?;
        self.load(samples.iter().copied())?;
        self.analyze()
    }

    /// Spectrum bins `[0, N/2)` of the last run, in natural order.
    pub fn bins(&self) -> &[ComplexFixed] {
        &self.signal.as_slice()[..self.n / 2]
    }

    /// `|X[k]|²` for `k` in `[0, N/2)` of the last run.
    pub fn spectrum(&self) -> &[Magnitude] {
        self.spectrum.as_slice()
    }

    fn check_len(&self, len: usize) -> Result<(), FftError> {
        if len != self.n {
            return Err(FftError::SizeMismatch {
                expected: self.n,
                found: len,
            });
        }
        Ok(())
    }

    fn load(&mut self, samples: impl Iterator<Item = Fixed>) -> Result<(), FftError> {
        match self.config.variant {
            FftVariant::Complex => {
                for (slot, x) in self.signal.as_mut_slice().iter_mut().zip(samples) {
                    *slot = ComplexFixed::real(x);
                }
                Ok(())
            }
            FftVariant::Real => {
                let mut block = [Fixed::ZERO; MAX_N];
                for (slot, x) in block.iter_mut().zip(samples) {
                    *slot = x;
                }
                pack_real(&block[..self.n], self.signal.as_mut_slice())
            }
        }
    }

    fn analyze(&mut self) -> Result<PeakResult, FftError> {
        let buffer = self.signal.as_mut_slice();
        match self.config.variant {
            FftVariant::Complex => CplxFft::new(&self.twiddles, self.config.scaling).process(buffer)?,
            FftVariant::Real => RealFft::new(&self.twiddles, self.config.scaling).process(buffer)?,
        }

        let half = self.n / 2;
        self.spectrum.update(&self.signal.as_slice()[..half])?;

        let first_bin = match self.config.peak_search {
            PeakSearch::IncludeDc => 0,
            PeakSearch::ExcludeDc => 1,
        };
        let peak = find_peak_from(self.spectrum.as_slice(), first_bin);
        let frequency_hz = bin_to_frequency(peak.bin, self.config.sample_rate_hz, self.n);

        log::trace!(
            "peak bin {} ({} Hz), magnitude {:?}",
            peak.bin,
            frequency_hz,
            peak.magnitude
        );

        Ok(PeakResult {
            bin: peak.bin,
            frequency_hz,
            magnitude: peak.magnitude,
        })
    }
}
