//! Closed-form sinusoid fit along one coordinate.
//!
//! Restricting an NFT-compatible objective to a single coordinate `θ` gives
//! `f(θ) = a·sin(θ - b') + c`. Three samples at `θ`, `θ + π/2` and `θ - π/2`
//! determine the curve exactly, and with it the location and value of its
//! minimum.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Objective samples taken around the current coordinate value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    /// Value at the unperturbed coordinate.
    pub z0: f64,
    /// Value with the coordinate shifted by `+π/2`.
    pub z1: f64,
    /// Value with the coordinate shifted by `-π/2`.
    pub z3: f64,
}

/// Sinusoid fitted through a [`Samples`] triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinusoidFit {
    /// Amplitude `a`.
    pub amplitude: f64,
    /// Vertical offset `c`.
    pub offset: f64,
    /// Coordinate value `b` at which the sinusoid is minimal.
    pub argmin: f64,
}

impl SinusoidFit {
    /// Fits the sinusoid through `samples` taken around `theta`.
    ///
    /// `epsilon` is added to the denominator only when `z0 == z2` exactly,
    /// which also fixes the branch sign in that case. It must be positive for
    /// a flat coordinate (`z0 == z2` and `z1 == z3`) to give a finite argmin.
    /// Non-finite samples are not rejected and propagate into the result.
    #[must_use]
    pub fn fit(samples: Samples, theta: f64, epsilon: f64) -> Self {
        let Samples { z0, z1, z3 } = samples;

        let z2 = z1 + z3 - z0;
        let offset = (z1 + z3) / 2.0;
        let amplitude = ((z0 - z2).powi(2) + (z1 - z3).powi(2)).sqrt() / 2.0;

        #[allow(clippy::float_cmp)]
        let denominator = if z0 == z2 { (z0 - z2) + epsilon } else { z0 - z2 };

        let argmin =
            ((z1 - z3) / denominator).atan() + theta + FRAC_PI_2 + FRAC_PI_2 * sign(denominator);

        Self {
            amplitude,
            offset,
            argmin,
        }
    }

    /// Value of the sinusoid at its minimum, `c - a`.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.offset - self.amplitude
    }
}

/// Sign with `sign(0) == 0`; NaN stays NaN.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        // zero or NaN
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{PI, TAU};

    use approx::assert_relative_eq;

    fn sample(f: impl Fn(f64) -> f64, theta: f64) -> Samples {
        Samples {
            z0: f(theta),
            z1: f(theta + FRAC_PI_2),
            z3: f(theta - FRAC_PI_2),
        }
    }

    fn wrap(theta: f64) -> f64 {
        theta.rem_euclid(TAU)
    }

    #[test]
    fn test_cosine_minimum_from_zero() {
        let fit = SinusoidFit::fit(sample(f64::cos, 0.0), 0.0, 1e-32);
        assert_relative_eq!(fit.amplitude, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.offset, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fit.argmin, PI, epsilon = 1e-12);
        assert_relative_eq!(fit.min_value(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_recovers_shifted_sinusoid() {
        let (a, phase, c) = (0.7, 1.3, -0.4);
        let f = move |t: f64| a * (t - phase).sin() + c;

        for theta in [-2.0, -0.5, 0.0, 0.9, 2.5, 4.0] {
            let fit = SinusoidFit::fit(sample(f, theta), theta, 1e-32);
            assert_relative_eq!(fit.amplitude, a, epsilon = 1e-12);
            assert_relative_eq!(fit.offset, c, epsilon = 1e-12);
            assert_relative_eq!(f(fit.argmin), c - a, epsilon = 1e-12);
            assert_relative_eq!(wrap(fit.argmin), wrap(phase - FRAC_PI_2), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degenerate_z0_equals_z2_uses_epsilon_branch() {
        // z0 == z2 when the sample point sits halfway up the slope
        let samples = Samples {
            z0: 0.0,
            z1: 1.0,
            z3: -1.0,
        };
        let fit = SinusoidFit::fit(samples, 0.0, 1e-32);
        assert!(fit.argmin.is_finite());
        // atan(+huge) + π/2 + π/2 = 3π/2, the minimum of sin
        assert_relative_eq!(fit.argmin, 1.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(fit.min_value(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_objective_is_deterministic() {
        let samples = Samples {
            z0: 2.0,
            z1: 2.0,
            z3: 2.0,
        };
        let fit = SinusoidFit::fit(samples, 0.25, 1e-32);
        assert_relative_eq!(fit.amplitude, 0.0);
        assert_relative_eq!(fit.min_value(), 2.0);
        assert_relative_eq!(fit.argmin, 0.25 + PI, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_propagates() {
        let samples = Samples {
            z0: f64::NAN,
            z1: 0.0,
            z3: 0.0,
        };
        let fit = SinusoidFit::fit(samples, 0.0, 1e-32);
        assert!(fit.argmin.is_nan());
        assert!(fit.min_value().is_nan());
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert!(sign(f64::NAN).is_nan());
    }
}
