pub mod types;
mod core;
pub mod bitrev;
pub mod twiddle;
pub mod complex;
pub mod real;

pub use bitrev::permute;
pub use complex::transform_complex_in_place;
pub use real::{pack_real, transform_real_in_place};
pub use twiddle::TwiddleTable;
pub use types::{ComplexFixed, Fixed};

/// Overflow policy of the butterfly stages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Every butterfly output is halved, so the transform is scaled by 1/N
    /// and a [-0.5, 0.5) input can never saturate.
    #[default]
    PerStage,
    /// Plain butterflies; overflow saturates.
    Unscaled,
}
