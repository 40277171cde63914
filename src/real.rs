//! Scalar helpers for the complex type: the tolerance constants, the
//! NaN-aware closeness test, rounding and squaring.
//!
//! Without the `std` feature, the [f64] math primitives come from [libm]
//! through the crate private [Real] trait. With `std` enabled the inherent
//! methods shadow the trait, so the same call sites use the standard library.

/// General closeness tolerance for double precision values.
pub const EPSILON: f64 = 1.0e-10;

/// Looser tolerance for values that passed through single precision at some
/// point (measurement inputs, [f32] conversions, ...).
pub const EPSILON_F32: f64 = 1.0e-6;

/// Tolerance of the classification predicates `is_zero`, `is_real` and
/// `is_imaginary`. Intentionally a 1000x stricter constant than [EPSILON],
/// so a value can be close to zero without classifying as zero.
pub(crate) const STRICT: f64 = EPSILON / 1000.0;

/// Check if two values are within `eps` of each other (strict `<`).
///
/// Not reflexive: a NaN value is never close to anything, including itself.
/// Symmetric in `a` and `b` for a fixed `eps`.
#[inline]
pub fn close_eps(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// [close_eps] with the default tolerance [EPSILON].
#[inline]
pub fn close(a: f64, b: f64) -> bool {
    close_eps(a, b, EPSILON)
}

/// Round `value` to `decimals` fractional digits, half away from zero.
///
/// Negative `decimals` rounds to a power of ten, e.g.
/// `round(15.0, -1) == 20.0`.
pub fn round(value: f64, decimals: i32) -> f64 {
    let scale = 10.0f64.powi(decimals);
    (value * scale).round() / scale
}

/// `x * x`, named to keep the algebraic derivations readable.
#[inline(always)]
pub fn square(x: f64) -> f64 {
    x * x
}

/// The f64 math used by the crate, forwarded to [libm] on `no_std` builds.
#[cfg(not(feature = "std"))]
pub(crate) trait Real: Sized {
    fn abs(self) -> f64;
    fn sqrt(self) -> f64;
    fn exp(self) -> f64;
    fn ln(self) -> f64;
    fn sin(self) -> f64;
    fn cos(self) -> f64;
    fn tan(self) -> f64;
    fn sinh(self) -> f64;
    fn cosh(self) -> f64;
    fn tanh(self) -> f64;
    fn atan2(self, x: f64) -> f64;
    fn powf(self, p: f64) -> f64;
    fn powi(self, n: i32) -> f64;
    fn round(self) -> f64;
}

#[cfg(not(feature = "std"))]
macro_rules! forward_math_impl {
    ($f:ident, $libm_f:ident) => {
        #[inline(always)]
        fn $f(self) -> f64 {
            libm::$libm_f(self)
        }
    };
}

#[cfg(not(feature = "std"))]
impl Real for f64 {
    forward_math_impl!(abs, fabs);
    forward_math_impl!(sqrt, sqrt);
    forward_math_impl!(exp, exp);
    forward_math_impl!(ln, log);
    forward_math_impl!(sin, sin);
    forward_math_impl!(cos, cos);
    forward_math_impl!(tan, tan);
    forward_math_impl!(sinh, sinh);
    forward_math_impl!(cosh, cosh);
    forward_math_impl!(tanh, tanh);
    forward_math_impl!(round, round);

    #[inline(always)]
    fn atan2(self, x: f64) -> f64 {
        libm::atan2(self, x)
    }

    #[inline(always)]
    fn powf(self, p: f64) -> f64 {
        libm::pow(self, p)
    }

    #[inline(always)]
    fn powi(self, n: i32) -> f64 {
        libm::pow(self, n as f64)
    }
}
