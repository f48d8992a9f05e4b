//! Single-precision complex scalar with a fixed `(real, imag)` layout.
//!
//! `ComplexScalar` is the leaf type of the crate: every vector and matrix element is one.
//! The struct is `#[repr(C)]` so that a slice of scalars has the same memory image as a
//! C `float _Complex[]` (two IEEE-754 `f32`, real first, no padding).

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Complex number stored as a pair of `f32`.
///
/// `==` is IEEE comparison of both parts. [`ComplexScalar::equals`] is the stricter
/// bit-level identity used by buffer equality; use the `approx` traits when a tolerance
/// is wanted.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexScalar {
    pub real: f32,
    pub imag: f32,
}

impl ComplexScalar {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };
    pub const ONE: Self = Self { real: 1.0, imag: 0.0 };
    pub const I: Self = Self { real: 0.0, imag: 1.0 };

    pub const fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    /// Promote a real number to a complex value with zero imaginary part.
    pub const fn from_real(real: f32) -> Self {
        Self { real, imag: 0.0 }
    }

    pub fn add(self, other: Self) -> Self {
        self + other
    }

    pub fn subtract(self, other: Self) -> Self {
        self - other
    }

    /// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    pub fn multiply(self, other: Self) -> Self {
        self * other
    }

    pub fn negate(self) -> Self {
        -self
    }

    /// Bit-exact comparison of both parts: `NaN` equals an identical `NaN`, and `-0.0`
    /// differs from `0.0`.
    pub fn equals(self, other: Self) -> bool {
        self.real.to_bits() == other.real.to_bits() && self.imag.to_bits() == other.imag.to_bits()
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> f32 {
        self.real * self.real + self.imag * self.imag
    }

    /// Magnitude `sqrt(re² + im²)`, without intermediate overflow or underflow.
    #[inline]
    pub fn abs(self) -> f32 {
        self.real.hypot(self.imag)
    }

    pub fn is_real(self) -> bool {
        self.imag == 0.0
    }

    /// True when the value is real and has no fractional part.
    pub fn is_integral(self) -> bool {
        self.is_real() && self.real.fract() == 0.0
    }
}

impl From<f32> for ComplexScalar {
    fn from(real: f32) -> Self {
        Self::from_real(real)
    }
}

impl From<(f32, f32)> for ComplexScalar {
    fn from((real, imag): (f32, f32)) -> Self {
        Self::new(real, imag)
    }
}

impl Add for ComplexScalar {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for ComplexScalar {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Mul for ComplexScalar {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl Div for ComplexScalar {
    type Output = Self;
    /// (a + bi)/(c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.norm_sqr();
        Self::new(
            (self.real * rhs.real + self.imag * rhs.imag) / denom,
            (self.imag * rhs.real - self.real * rhs.imag) / denom,
        )
    }
}

impl Neg for ComplexScalar {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.real, -self.imag)
    }
}

impl Zero for ComplexScalar {
    fn zero() -> Self {
        Self::ZERO
    }
    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }
}

impl One for ComplexScalar {
    fn one() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ComplexScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag < 0.0 {
            write!(f, "{} - {}i", self.real, -self.imag)
        } else if self.imag == 0.0 {
            write!(f, "{}", self.real)
        } else {
            write!(f, "{} + {}i", self.real, self.imag)
        }
    }
}

impl AbsDiffEq for ComplexScalar {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.real.abs_diff_eq(&other.real, epsilon) && self.imag.abs_diff_eq(&other.imag, epsilon)
    }
}

impl RelativeEq for ComplexScalar {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.real.relative_eq(&other.real, epsilon, max_relative)
            && self.imag.relative_eq(&other.imag, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks `(a + bi)(c + di) = (ac - bd) + (ad + bc)i` on a hand-worked product.
    #[test]
    fn multiply_follows_complex_rule() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let a = ComplexScalar::new(1.0, 2.0);
        let b = ComplexScalar::new(3.0, 4.0);
        assert_eq!(a.multiply(b), ComplexScalar::new(-5.0, 10.0));
    }

    /// Checks the named arithmetic methods against expected components.
    #[test]
    fn add_subtract_negate() {
        let a = ComplexScalar::new(1.5, -2.0);
        let b = ComplexScalar::new(0.5, 4.0);
        assert_eq!(a.add(b), ComplexScalar::new(2.0, 2.0));
        assert_eq!(a.subtract(b), ComplexScalar::new(1.0, -6.0));
        assert_eq!(a.negate(), ComplexScalar::new(-1.5, 2.0));
    }

    /// Dividing a product by one factor recovers the other.
    #[test]
    fn division_inverts_multiplication() {
        let a = ComplexScalar::new(-5.0, 10.0);
        let b = ComplexScalar::new(3.0, 4.0);
        assert_eq!(a / b, ComplexScalar::new(1.0, 2.0));
    }

    /// `equals` has no tolerance; nearby values only match through `approx`.
    #[test]
    fn equality_is_exact() {
        let a = ComplexScalar::new(0.1, 0.2);
        let b = ComplexScalar::new(0.1 + f32::EPSILON, 0.2);
        assert!(a.equals(a));
        assert!(!a.equals(b));
        assert!(approx::abs_diff_eq!(a, b, epsilon = 1e-6));
    }

    /// `equals` compares bit patterns: NaN is equal to itself and the two zeros differ.
    #[test]
    fn equality_is_bitwise() {
        let nan = ComplexScalar::new(f32::NAN, 0.0);
        assert!(nan.equals(nan));
        assert_ne!(nan, nan);

        let pos = ComplexScalar::new(0.0, 1.0);
        let neg = ComplexScalar::new(-0.0, 1.0);
        assert!(!pos.equals(neg));
        assert_eq!(pos, neg);
    }

    /// Display drops a zero imaginary part and prints the sign of a nonzero one.
    #[test]
    fn display_forms() {
        assert_eq!(ComplexScalar::new(3.0, 0.0).to_string(), "3");
        assert_eq!(ComplexScalar::new(1.5, 2.0).to_string(), "1.5 + 2i");
        assert_eq!(ComplexScalar::new(1.0, -2.5).to_string(), "1 - 2.5i");
    }

    /// Magnitude of a 3-4-5 value, and of values whose squares leave the f32 range.
    #[test]
    fn magnitude() {
        let c = ComplexScalar::new(3.0, 4.0);
        assert_eq!(c.norm_sqr(), 25.0);
        assert_eq!(c.abs(), 5.0);

        let tiny = ComplexScalar::new(3e-30, 4e-30);
        approx::assert_relative_eq!(tiny.abs(), 5e-30, max_relative = 1e-6);
        let huge = ComplexScalar::new(3e30, 4e30);
        approx::assert_relative_eq!(huge.abs(), 5e30, max_relative = 1e-6);
    }
}
