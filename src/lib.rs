#![no_std]

//! Fixed-point (Q15) radix-2 FFT and dominant-frequency detection for
//! targets without a floating-point unit.
//!
//! ```text
//! raw samples -> Fixed -> FFT (complex or real) -> |X[k]|² -> peak bin -> Hz
//! ```

// The standard library is linked for tests and for the `std` feature only.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fixed;
pub mod pipeline;
pub mod spectrum;

#[cfg(test)]
mod test_util;

pub use common::FftError;
pub use fixed::{ComplexFixed, Fixed, Scaling, TwiddleTable};
pub use pipeline::{FftVariant, PeakPipeline, PeakResult, PeakSearch, PipelineConfig, TwiddleSource};
pub use spectrum::{Magnitude, Peak};
