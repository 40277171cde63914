//! The transcendental layer: `exp`, `ln` and `pow`, then the circular,
//! inverse circular, hyperbolic and inverse hyperbolic families, all derived
//! algebraically from the primitives in [complex](crate::complex).
//!
//! Every function is total. Poles return [Complex::INFINITY] instead of raw
//! division artifacts, following the same policy as [Complex::recip].

use crate::complex::Complex;
#[cfg(not(feature = "std"))]
use crate::real::Real;
use core::f64::consts::FRAC_PI_2;

impl Complex {
    /// The natural exponential, `exp(re) * cis(im)`.
    pub fn exp(self) -> Self {
        Self::cis(self.im) * self.re.exp()
    }

    /// Computes the principal value of the natural logarithm.
    ///
    /// The branch cut is `(-∞, 0]`, so the imaginary part of the result is
    /// always in `(-π, π]`. The logarithm of a zero value is
    /// [Complex::INFINITY], not an error.
    pub fn ln(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        let polar = self.to_polar();
        Self::new(polar.rho.ln(), polar.theta)
    }

    /// Raises `self` to a complex power, `exp(exp * ln(self))`.
    ///
    /// No case is special: a zero base inherits the behavior of
    /// [ln](Self::ln), which maps zero to [Complex::INFINITY].
    pub fn pow(self, exp: Self) -> Self {
        (exp * self.ln()).exp()
    }

    /// Raises `self` to a real power through one polar decomposition,
    /// skipping the second complex multiply of [pow](Self::pow).
    pub fn powf(self, p: f64) -> Self {
        let polar = self.to_polar();
        Self::cis(polar.theta * p) * polar.rho.powf(p)
    }

    pub fn sin(self) -> Self {
        Self::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    pub fn cos(self) -> Self {
        Self::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    pub fn tan(self) -> Self {
        // formula: tan(a + bj) = (tan(a) + j tanh(b)) / (1 - j tan(a) tanh(b))
        let (t, th) = (self.re.tan(), self.im.tanh());
        Self::new(t, th) / Self::new(1.0, -t * th)
    }

    /// Secant, [Complex::INFINITY] at the poles of `1/cos`.
    pub fn sec(self) -> Self {
        self.cos().recip()
    }

    /// Cosecant, [Complex::INFINITY] at the poles of `1/sin`.
    pub fn csc(self) -> Self {
        self.sin().recip()
    }

    /// Cotangent, [Complex::INFINITY] at the poles of `1/tan`.
    pub fn cot(self) -> Self {
        self.tan().recip()
    }

    /// Computes the principal value of the inverse sine.
    ///
    /// The branch satisfies `-π/2 ≤ Re(asin(z)) ≤ π/2`.
    pub fn asin(self) -> Self {
        // formula: arcsin(z) = j ln(sqrt(1 - z²) - jz)
        ((Self::ONE - self * self).sqrt() - self.mul_i()).ln().mul_i()
    }

    /// Computes the principal value of the inverse cosine, `π/2 - asin(z)`.
    pub fn acos(self) -> Self {
        Self::real(FRAC_PI_2) - self.asin()
    }

    /// Computes the principal value of the inverse tangent.
    ///
    /// The branch satisfies `-π/2 ≤ Re(atan(z)) ≤ π/2`.
    pub fn atan(self) -> Self {
        // formula: arctan(z) = (-j/2) ln((j - z)/(j + z))
        ((Self::J - self) / (Self::J + self)).ln().mul_i() * -0.5
    }

    /// Computes the principal value of the inverse cotangent.
    pub fn acot(self) -> Self {
        // formula: arccot(z) = (-j/2) ln((z + j)/(z - j))
        ((self + Self::J) / (self - Self::J)).ln().mul_i() * -0.5
    }

    /// Computes the principal value of the inverse cosecant, `asin(1/z)`,
    /// with [Complex::INFINITY] at zero.
    pub fn acsc(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        (Self::ONE / self).asin()
    }

    /// Computes the principal value of the inverse secant, `π/2 - acsc(z)`,
    /// with [Complex::INFINITY] at zero.
    pub fn asec(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        Self::real(FRAC_PI_2) - self.acsc()
    }

    /// Hyperbolic sine, `(exp(z) - exp(-z)) / 2`.
    pub fn sinh(self) -> Self {
        (self.exp() - (-self).exp()) / 2.0
    }

    /// Hyperbolic cosine, `(exp(z) + exp(-z)) / 2`.
    pub fn cosh(self) -> Self {
        (self.exp() + (-self).exp()) / 2.0
    }

    /// Hyperbolic tangent, `(exp(2z) - 1) / (exp(2z) + 1)`.
    pub fn tanh(self) -> Self {
        let e = (self * 2.0).exp();
        (e - 1.0) / (e + 1.0)
    }

    /// Hyperbolic cotangent, [Complex::INFINITY] at zero.
    pub fn coth(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        let e = (self * 2.0).exp();
        (e + 1.0) / (e - 1.0)
    }

    /// Hyperbolic secant, `1/cosh`.
    pub fn sech(self) -> Self {
        self.cosh().recip()
    }

    /// Hyperbolic cosecant, [Complex::INFINITY] at zero.
    pub fn csch(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        2.0 / (self.exp() - (-self).exp())
    }

    /// Computes the principal value of the inverse hyperbolic sine.
    pub fn asinh(self) -> Self {
        // formula: arsinh(z) = ln(z + sqrt(z² + 1))
        (self + (self * self + 1.0).sqrt()).ln()
    }

    /// Computes the principal value of the inverse hyperbolic cosine.
    pub fn acosh(self) -> Self {
        // formula: arcosh(z) = ln(z + sqrt(z + 1) sqrt(z - 1))
        // the two square roots (not sqrt(z² - 1)) keep the principal branch
        (self + (self + 1.0).sqrt() * (self - 1.0).sqrt()).ln()
    }

    /// Computes the principal value of the inverse hyperbolic tangent.
    pub fn atanh(self) -> Self {
        // formula: artanh(z) = (ln(1 + z) - ln(1 - z)) / 2
        ((self + 1.0).ln() - (Self::ONE - self).ln()) / 2.0
    }

    /// Computes the principal value of the inverse hyperbolic cotangent,
    /// with [Complex::INFINITY] at zero.
    pub fn acoth(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        let w = Self::ONE / self;
        ((Self::ONE + w).ln() - (Self::ONE - w).ln()) / 2.0
    }

    /// Computes the principal value of the inverse hyperbolic secant,
    /// with [Complex::INFINITY] at zero.
    pub fn asech(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        let w = Self::ONE / self;
        (w + (w + 1.0).sqrt() * (w - 1.0).sqrt()).ln()
    }

    /// Computes the principal value of the inverse hyperbolic cosecant,
    /// with [Complex::INFINITY] at zero.
    pub fn acsch(self) -> Self {
        if self.is_zero() {
            return Self::INFINITY;
        }
        let w = Self::ONE / self;
        (w + (w * w + 1.0).sqrt()).ln()
    }
}
