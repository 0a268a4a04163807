use super::fixed::Fixed;
use num_complex::Complex;

/// One time- or frequency-domain sample: a pair of Q15 values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct ComplexFixed {
    pub re: Fixed,
    pub im: Fixed,
}

impl ComplexFixed {
    pub const ZERO: Self = Self::new(Fixed::ZERO, Fixed::ZERO);

    pub const fn new(re: Fixed, im: Fixed) -> Self {
        Self { re, im }
    }

    /// Builds a sample from raw Q15 words.
    pub const fn from_bits(re: i16, im: i16) -> Self {
        Self::new(Fixed::from_bits(re), Fixed::from_bits(im))
    }

    /// Purely real sample.
    pub const fn real(re: Fixed) -> Self {
        Self::new(re, Fixed::ZERO)
    }

    /// Returns the complex conjugate (a - bi)
    #[inline]
    pub fn conj(self) -> Self {
        ComplexFixed {
            re: self.re,
            im: -self.im,
        }
    }

    /// Multiplies by i: (a + bi) * i = -b + ai
    #[inline]
    pub fn mul_i(self) -> Self {
        ComplexFixed {
            re: -self.im,
            im: self.re,
        }
    }

    /// Scales both real and imaginary parts by 0.5 (right shift by 1).
    #[inline]
    pub fn scale_half(self) -> Self {
        ComplexFixed {
            re: self.re.scale_half(),
            im: self.im.scale_half(),
        }
    }

    /// (self + rhs) / 2 per component, without intermediate saturation.
    #[inline]
    pub fn half_add(self, rhs: Self) -> Self {
        ComplexFixed {
            re: self.re.half_add(rhs.re),
            im: self.im.half_add(rhs.im),
        }
    }

    /// (self - rhs) / 2 per component, without intermediate saturation.
    #[inline]
    pub fn half_sub(self, rhs: Self) -> Self {
        ComplexFixed {
            re: self.re.half_sub(rhs.re),
            im: self.im.half_sub(rhs.im),
        }
    }

    /// Rounds and saturates a floating complex value into Q15.
    pub fn from_complex(value: Complex<f64>) -> Self {
        Self::new(Fixed::from_f64(value.re), Fixed::from_f64(value.im))
    }

    pub fn to_complex(self) -> Complex<f64> {
        Complex::new(self.re.to_f64(), self.im.to_f64())
    }
}

/// Raw interleaved Q15 words, e.g. straight from an I/Q converter.
impl From<Complex<i16>> for ComplexFixed {
    fn from(value: Complex<i16>) -> Self {
        Self::from_bits(value.re, value.im)
    }
}

impl From<ComplexFixed> for Complex<f64> {
    fn from(value: ComplexFixed) -> Self {
        value.to_complex()
    }
}

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

impl Add for ComplexFixed {
    type Output = ComplexFixed;

    #[inline]
    fn add(self, rhs: ComplexFixed) -> ComplexFixed {
        ComplexFixed {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for ComplexFixed {
    #[inline]
    fn add_assign(&mut self, rhs: ComplexFixed) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for ComplexFixed {
    type Output = ComplexFixed;

    #[inline]
    fn sub(self, rhs: ComplexFixed) -> ComplexFixed {
        ComplexFixed {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for ComplexFixed {
    #[inline]
    fn sub_assign(&mut self, rhs: ComplexFixed) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

// Each of the four products is rounded and saturated before the saturating combine.
impl Mul for ComplexFixed {
    type Output = ComplexFixed;

    #[inline]
    fn mul(self, rhs: ComplexFixed) -> ComplexFixed {
        // (ac - bd)
        let re = (self.re * rhs.re) - (self.im * rhs.im);
        // (ad + bc)
        let im = (self.re * rhs.im) + (self.im * rhs.re);

        ComplexFixed { re, im }
    }
}
