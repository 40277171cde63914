//! Derived rand distributions for [Complex]: componentwise uniform sampling
//! plus [StandardUnitary] and [StandardNormal].

use crate::complex::Complex;
#[cfg(not(feature = "std"))]
use crate::real::Real;
use crate::real::square;
use ::rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};

/// Standard normal distribution on the complex plane (both components
/// independently normal with variance 1).
pub struct StandardNormal;
/// Unitary distribution, meaning a uniform distribution on the values where
/// the magnitude is 1.
pub struct StandardUnitary;

impl Distribution<Complex> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        Complex::new(rng.sample(self), rng.sample(self))
    }
}

impl Distribution<Complex> for StandardUnitary {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        // Hit or retry on the unit disc, then normalize. Succeeds with a
        // chance of 79% per round (99% after 3 rounds) and never biases
        // the angle the way a naive atan2-free rejection would.
        loop {
            let a = rng.sample::<Complex, _>(StandardUniform) * 2.0 - Complex::new(1.0, 1.0);
            let n = square(a.re) + square(a.im);
            if n != 0.0 && n < 1.0 {
                return a / n.sqrt();
            }
        }
    }
}

impl Distribution<Complex> for StandardNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        // Box-Muller transform, see https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform
        // random number in range (0, 1]
        let x = 1.0 - rng.sample::<f64, _>(StandardUniform);
        rng.sample::<Complex, _>(StandardUnitary) * (-2.0 * x.ln()).sqrt()
    }
}
