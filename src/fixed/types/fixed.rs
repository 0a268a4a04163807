// src/fixed/types/fixed.rs

/// Q1.15 fractional value stored in a signed 16-bit word.
///
/// Represents the real range [-1.0, 1.0) with a step of 2^-15.
/// Every arithmetic operator saturates at `MIN` / `MAX` instead of wrapping.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed(i16);

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 15;

impl Fixed {
    pub const ZERO: Self = Self(0);
    /// Largest representable value, 1.0 - 2^-15.
    pub const MAX: Self = Self(i16::MAX);
    /// -1.0
    pub const MIN: Self = Self(i16::MIN);
    pub const HALF: Self = Self(1 << (FRAC_BITS - 1));

    /// Creates a Fixed from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Converts a raw signed ADC word into the fractional domain.
    ///
    /// The word is read as Q15 and arithmetically shifted right by `shift`
    /// bits, so a full-scale input with `shift = 1` lands in [-0.5, 0.5).
    #[inline]
    pub const fn from_sample(raw: i16, shift: u32) -> Self {
        Self(raw >> shift)
    }

    /// Converts an f64 to Fixed, rounding to nearest and saturating.
    pub fn from_f64(value: f64) -> Self {
        let scaled = crate::fixed::core::round(value * (1u32 << FRAC_BITS) as f64);
        if scaled >= i16::MAX as f64 {
            Self::MAX
        } else if scaled <= i16::MIN as f64 {
            Self::MIN
        } else {
            Self(scaled as i16)
        }
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << FRAC_BITS) as f64
    }

    /// Scales the value by 0.5 (arithmetic shift right by 1, rounds toward -inf).
    #[inline]
    pub const fn scale_half(self) -> Self {
        Self(self.0 >> 1)
    }

    /// floor((self + rhs) / 2), computed without intermediate overflow.
    #[inline]
    pub const fn half_add(self, rhs: Self) -> Self {
        Self(((self.0 as i32 + rhs.0 as i32) >> 1) as i16)
    }

    /// floor((self - rhs) / 2), computed without intermediate overflow.
    #[inline]
    pub const fn half_sub(self, rhs: Self) -> Self {
        Self(((self.0 as i32 - rhs.0 as i32) >> 1) as i16)
    }

    /// Exact product as a Q2.30 value.
    #[inline]
    pub const fn widening_mul(self, rhs: Self) -> i32 {
        self.0 as i32 * rhs.0 as i32
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Q15 product, rounded to nearest (ties toward +inf) and saturated.
    ///
    /// The only product that leaves the range is `MIN * MIN`, which clamps to `MAX`.
    #[inline]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        let product = self.widening_mul(rhs);
        let rounded = (product + (1 << (FRAC_BITS - 1))) >> FRAC_BITS;
        Self(saturate(rounded))
    }
}

#[inline]
pub(crate) const fn saturate(value: i32) -> i16 {
    if value > i16::MAX as i32 {
        i16::MAX
    } else if value < i16::MIN as i32 {
        i16::MIN
    } else {
        value as i16
    }
}

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        self.saturating_sub(rhs)
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = *self - rhs;
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed {
        self.saturating_mul(rhs)
    }
}

impl MulAssign for Fixed {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed) {
        *self = *self * rhs;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    /// -(-1.0) saturates to `MAX`.
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(self.0.saturating_neg())
    }
}

use core::fmt;

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decimal value plus the raw word
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
