//! String rendering of [Complex] values in `j` notation.
//!
//! NaN and infinite values render as the bare tokens `NaN` and `Infinity`.
//! Finite values render as `re`, `imj`, `re + imj` or `re - |im|j`,
//! where components that are close to zero are left out entirely and a
//! coefficient of exactly one before the `j` is dropped (`j`, not `1j`).

use crate::complex::Complex;
use crate::real::close;
use core::fmt;

/// Write one real component, with an optional unit suffix directly behind
/// the digits. `1` and `-1` coefficients collapse into the bare suffix.
fn fmt_part(f: &mut fmt::Formatter<'_>, value: f64, suffix: Option<char>) -> fmt::Result {
    match suffix {
        Some(s) if value == 1.0 => write!(f, "{s}"),
        Some(s) if value == -1.0 => write!(f, "-{s}"),
        Some(s) => write!(f, "{value}{s}"),
        None => write!(f, "{value}"),
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            f.write_str("NaN")
        } else if self.is_infinite() {
            f.write_str("Infinity")
        } else if close(self.im, 0.0) {
            fmt_part(f, self.re, None)
        } else if close(self.re, 0.0) {
            fmt_part(f, self.im, Some('j'))
        } else {
            fmt_part(f, self.re, None)?;
            if self.im < 0.0 {
                f.write_str(" - ")?;
                fmt_part(f, -self.im, Some('j'))
            } else {
                f.write_str(" + ")?;
                fmt_part(f, self.im, Some('j'))
            }
        }
    }
}
