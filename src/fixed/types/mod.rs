mod fixed;
mod fixed_complex;

pub use fixed::{Fixed, FRAC_BITS};
pub use fixed_complex::ComplexFixed;
