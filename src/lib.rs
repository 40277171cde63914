//! This crate implements a single concrete complex number type over [f64],
//! together with the full set of trigonometric, hyperbolic and transcendental
//! functions and their inverses, all derived algebraically from `exp`, `ln`,
//! `sqrt` and `pow`.
//!
//! Unlike the types in the `num` ecosystem, equality here is tolerant:
//! two values are equal when both components agree within [EPSILON].
//! On top of that, the comparison model makes two deliberate deviations
//! from plain IEEE semantics:
//! - NaN values are never equal or close to anything, including themselves.
//! - All infinite values are unified into one point. The complex plane is
//!   treated as the Riemann sphere with a single unsigned [Complex::INFINITY],
//!   so `Complex::new(f64::INFINITY, 0.0) == Complex::new(0.0, f64::NEG_INFINITY)`.
//!
//! Singularities are data, not errors: `Complex::ZERO.ln()`, `recip()` of zero
//! and every reciprocal trigonometric function at a pole return
//! [Complex::INFINITY] instead of NaN artifacts. The one exception is the
//! plain `/` operator, which keeps raw IEEE division-by-zero behavior,
//! so the operators stay free of hidden branches.
//!
//! The display convention uses the electrical engineering `j` suffix:
//! `Complex::new(-1.5, 1.5)` prints as `-1.5 + 1.5j` and the imaginary unit
//! prints as plain `j`.
//!
//! The crate is `no_std`. With the default `std` feature the math primitives
//! use the standard library, otherwise enable the `libm` feature.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod complex;
mod fmt;
pub mod real;
mod trig;

#[cfg(feature = "rand")]
pub mod rand;

pub use complex::*;
pub use real::{close, close_eps, round, square, EPSILON, EPSILON_F32};
