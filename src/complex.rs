//! The [Complex] value type: construction, classification, the four
//! arithmetic operators with mixed scalar operands, polar conversion,
//! square roots, integer powers and the tolerant equality/hash model.

use crate::real::*;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{Product, Sum};
use core::ops::*;

/// An immutable complex number `re + im j` over [f64].
///
/// Every operation returns a new value. Equality is epsilon-tolerant,
/// NaN is never equal to anything and all infinite values are unified
/// into the single point [Complex::INFINITY], see [PartialEq] below.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Polar form of a [Complex]: magnitude `rho` and angle `theta` in radians.
///
/// `theta` is in the principal range `(-π, π]` when produced by
/// [Complex::to_polar]. No independent lifecycle: it is built from a
/// [Complex] and consumed to rebuild one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub rho: f64,
    pub theta: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// The imaginary unit.
    pub const J: Self = Self::new(0.0, 1.0);
    pub const PI: Self = Self::new(core::f64::consts::PI, 0.0);
    pub const PI_J: Self = Self::new(0.0, core::f64::consts::PI);
    /// The canonical infinity point.
    ///
    /// Complex infinity is treated as a single unsigned point on the
    /// Riemann sphere, not a directional limit. Any value with an infinite
    /// component (and no NaN component) compares equal to this one.
    pub const INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY);

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A pure real value, `im = 0`.
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// A pure imaginary value, `re = 0`.
    pub const fn imag(im: f64) -> Self {
        Self { re: 0.0, im }
    }

    /// True if either component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True if not NaN and either component is infinite.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// True if both components are strictly within `EPSILON / 1000` of zero.
    ///
    /// This is deliberately tighter than [close](Self::close): a value may
    /// compare equal to [Complex::ZERO] and still not classify as zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        close_eps(self.re, 0.0, STRICT) && close_eps(self.im, 0.0, STRICT)
    }

    /// True if the imaginary component is strictly within `EPSILON / 1000` of zero.
    #[inline]
    pub fn is_real(&self) -> bool {
        close_eps(self.im, 0.0, STRICT)
    }

    /// True if the real component is strictly within `EPSILON / 1000` of zero.
    #[inline]
    pub fn is_imaginary(&self) -> bool {
        close_eps(self.re, 0.0, STRICT)
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Multiply with `j` without going through the multiplication formula.
    #[inline]
    pub fn mul_i(self) -> Self {
        Self::new(-self.im, self.re)
    }

    /// Magnitude, `sqrt(re² + im²)`.
    pub fn abs(&self) -> f64 {
        (square(self.re) + square(self.im)).sqrt()
    }

    /// The principal argument, `atan2(im, re)`, in the range `(-π, π]`.
    #[inline]
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Convert to polar form, such that `self = rho * exp(j * theta)`.
    pub fn to_polar(&self) -> Polar {
        Polar {
            rho: self.abs(),
            theta: self.arg(),
        }
    }

    /// Convert a polar representation `rho * exp(j * theta)` back into a
    /// complex number. Inverse of [to_polar](Self::to_polar) up to floating
    /// point precision.
    pub fn from_polar(rho: f64, theta: f64) -> Self {
        Self::new(rho * theta.cos(), rho * theta.sin())
    }

    /// Compute `cis(theta) := exp(j * theta)`, the unit circle point at
    /// angle `theta`. "cis" is an acronym for "cos i sin".
    pub fn cis(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Multiplicative inverse. Returns [Complex::INFINITY] for a value that
    /// classifies as zero instead of the raw `0/0` NaN artifact.
    pub fn recip(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        Self::ONE / self
    }

    /// Computes the principal square root.
    ///
    /// The result has non-negative real part; exactly on the negative real
    /// axis it has zero real part and non-negative imaginary part, so
    /// `Complex::real(-1.0).sqrt() == Complex::J`.
    pub fn sqrt(self) -> Self {
        if self.im == 0.0 {
            return self.re.csqrt();
        }
        // half-angle formula, avoids a polar round trip
        let m = self.abs();
        let re = ((m + self.re) / 2.0).sqrt();
        let im = ((m - self.re) / 2.0).sqrt();
        Self::new(re, if self.im >= 0.0 { im } else { -im })
    }

    /// Compute the power with an unsigned integer exponent by binary
    /// exponentiation, `O(log n)` multiplications.
    pub fn powu(self, n: u32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        let mut p = self;
        let mut mask = n.midpoint(2).next_power_of_two() >> 1; // mask highest set bit
        while mask != 0 {
            p = p * p;
            if (n & mask) != 0 {
                p = p * self;
            }
            mask >>= 1;
        }
        p
    }

    /// Compute the power with a signed integer exponent.
    ///
    /// A negative exponent on a zero base returns [Complex::INFINITY].
    pub fn powi(self, n: i32) -> Self {
        if n < 0 {
            if self.is_zero() {
                return Self::INFINITY;
            }
            self.recip().powu(n.unsigned_abs())
        } else {
            self.powu(n as u32)
        }
    }

    /// Check closeness with an explicit tolerance.
    ///
    /// False if either side is NaN. True if both sides are infinite,
    /// regardless of which components carry the infinity. Otherwise both
    /// components must agree within `eps`.
    pub fn close_eps(&self, other: &Self, eps: f64) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self.is_infinite() && other.is_infinite() {
            return true;
        }
        close_eps(self.re, other.re, eps) && close_eps(self.im, other.im, eps)
    }

    /// [close_eps](Self::close_eps) with the default tolerance [EPSILON].
    #[inline]
    pub fn close(&self, other: &Self) -> bool {
        self.close_eps(other, EPSILON)
    }
}

impl From<Complex> for Polar {
    fn from(value: Complex) -> Self {
        value.to_polar()
    }
}

impl From<Polar> for Complex {
    fn from(value: Polar) -> Self {
        Complex::from_polar(value.rho, value.theta)
    }
}

/// The real square root extended to the complex plane.
pub trait Csqrt {
    /// Square root of a real number as a [Complex]: non-negative inputs give
    /// the ordinary real root, negative inputs give a pure imaginary root
    /// instead of NaN, so `(-1.0).csqrt() == Complex::J`.
    fn csqrt(self) -> Complex;
}

impl Csqrt for f64 {
    fn csqrt(self) -> Complex {
        if self >= 0.0 {
            Complex::real(self.sqrt())
        } else {
            Complex::imag((-self).sqrt())
        }
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Complex;
    fn add(self, rhs: T) -> Complex {
        let rhs = rhs.into();
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Complex;
    fn sub(self, rhs: T) -> Complex {
        let rhs = rhs.into();
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Complex;
    fn mul(self, rhs: T) -> Complex {
        let rhs = rhs.into();
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Into<Complex>> Div<T> for Complex {
    type Output = Complex;
    /// Division keeps raw IEEE semantics: a zero divisor produces NaN/±∞
    /// components instead of the canonical [Complex::INFINITY]. Use
    /// [recip](Complex::recip) for the intercepted behavior.
    fn div(self, rhs: T) -> Complex {
        let rhs = rhs.into();
        let abs_sqr = square(rhs.re) + square(rhs.im);
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / abs_sqr,
            (self.im * rhs.re - self.re * rhs.im) / abs_sqr,
        )
    }
}

macro_rules! impl_assign_ops {
    ($($OpAssign:ident, $op_assign:ident, $op:ident;)+) => {
        $(impl<T: Into<Complex>> $OpAssign<T> for Complex {
            fn $op_assign(&mut self, rhs: T) {
                *self = (*self).$op(rhs.into());
            }
        })+
    };
}
impl_assign_ops!(
    AddAssign, add_assign, add;
    SubAssign, sub_assign, sub;
    MulAssign, mul_assign, mul;
    DivAssign, div_assign, div;
);

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Self::real(value)
    }
}

// Bounded set of scalar widths that promote to a pure real value.
// Wider integers would silently lose precision, so they are left out.
macro_rules! impl_from_scalar {
    ($($t:ty),+) => {
        $(impl From<$t> for Complex {
            fn from(value: $t) -> Self {
                Self::real(value as f64)
            }
        })+
    };
}
impl_from_scalar!(f32, i8, i16, i32, u8, u16, u32);

// `scalar op Complex` with the scalar promoted to a pure real value.
// Rust requires one impl block per scalar type here, hence the macro.
macro_rules! impl_scalar_ops {
    ($($t:ty),+) => {
        $(
            impl Add<Complex> for $t {
                type Output = Complex;
                fn add(self, rhs: Complex) -> Complex {
                    Complex::from(self) + rhs
                }
            }
            impl Sub<Complex> for $t {
                type Output = Complex;
                fn sub(self, rhs: Complex) -> Complex {
                    Complex::from(self) - rhs
                }
            }
            impl Mul<Complex> for $t {
                type Output = Complex;
                fn mul(self, rhs: Complex) -> Complex {
                    Complex::from(self) * rhs
                }
            }
            impl Div<Complex> for $t {
                type Output = Complex;
                fn div(self, rhs: Complex) -> Complex {
                    Complex::from(self) / rhs
                }
            }
        )+
    };
}
impl_scalar_ops!(f64, f32, i8, i16, i32, u8, u16, u32);

/// Tolerant structural equality.
///
/// - false whenever either side is NaN, including a value compared with
///   itself, so this is `PartialEq` without `Eq` for the same reason floats
///   are;
/// - true whenever both sides are infinite (one unified infinity point);
/// - otherwise [close](Complex::close) at the default [EPSILON].
impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.close(other)
    }
}

/// A [Complex] equals a plain real number iff it classifies as real and its
/// real part is close to that number.
impl PartialEq<f64> for Complex {
    fn eq(&self, other: &f64) -> bool {
        self.is_real() && close(self.re, *other)
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, other: &Complex) -> bool {
        other == self
    }
}

/// Hashing is consistent with equality where the contract demands it:
/// every infinite value hashes to the same state, finite values hash their
/// component bits. NaN never equals anything, so it is exempt (like the
/// float types themselves, which don't implement [Hash] at all).
///
/// Finite values that are merely epsilon-close but not bit-identical can
/// hash apart; don't use this type as a map key when that matters.
impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_infinite() {
            f64::INFINITY.to_bits().hash(state);
            f64::INFINITY.to_bits().hash(state);
        } else {
            self.re.to_bits().hash(state);
            self.im.to_bits().hash(state);
        }
    }
}

/// The error of a [Complex] to [f64] conversion on a value that does not
/// classify as real.
#[derive(Clone, Copy, Debug)]
pub struct NotRealError {
    im: f64,
}

impl fmt::Display for NotRealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "complex value with imaginary part {} cannot be converted to a real number",
            self.im
        )
    }
}

impl core::error::Error for NotRealError {}

/// Narrowing back to a real number is the one hard failure of the crate:
/// the imaginary part must classify as zero.
impl TryFrom<Complex> for f64 {
    type Error = NotRealError;
    fn try_from(value: Complex) -> Result<Self, Self::Error> {
        if value.is_real() {
            Ok(value.re)
        } else {
            Err(NotRealError { im: value.im })
        }
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| acc + *c)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, c| acc * c)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, c| acc * *c)
    }
}

/// Literal syntax for complex values, e.g. `complex![3 + 4 j]`,
/// `complex![1.5 - 2.5 j]`, `complex![2 j]` or `complex![x]` for anything
/// that converts into a [Complex].
#[macro_export]
macro_rules! complex {
    ($x:literal + $y:literal j) => {
        $crate::Complex::new($x as f64, $y as f64)
    };
    ($x:literal - $y:literal j) => {
        $crate::Complex::new($x as f64, -($y as f64))
    };
    ($y:literal j) => {
        $crate::Complex::imag($y as f64)
    };
    ($x:expr) => {
        $crate::Complex::from($x)
    };
}

#[cfg(feature = "serde")]
impl serde::Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.re, self.im).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (re, im) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(re, im))
    }
}

// Safety: `Complex` is `repr(C)` and holds exactly two `f64`, so it has no
// padding and any bit pattern is valid.
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Complex {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Complex {}
