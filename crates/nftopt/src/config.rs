//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{NftError, NftResult};

/// Configuration for the Nakanishi-Fujii-Todo optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftConfig {
    /// Cap on objective calls made by the loop.
    ///
    /// Checked after each coordinate update, so a run may end up to one
    /// iteration's worth of calls past the cap.
    pub max_evaluations: usize,

    /// Period, in iterations, of forced fresh evaluations of `z0`.
    ///
    /// Zero or negative disables forced resets.
    pub reset_interval: i64,

    /// Guard added to the fit denominator when `z0 == z2`. Must be positive.
    pub epsilon: f64,

    /// Evaluate the objective once more at the final point.
    pub evaluate_final: bool,
}

impl Default for NftConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 1024,
            reset_interval: 32,
            epsilon: 1e-32,
            evaluate_final: true,
        }
    }
}

impl NftConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `NftError::InvalidArgument` if the evaluation cap is zero or
    /// `epsilon` is not a finite positive number.
    pub fn validate(&self) -> NftResult<()> {
        if self.max_evaluations == 0 {
            return Err(NftError::InvalidArgument {
                reason: "max_evaluations must be positive",
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(NftError::InvalidArgument {
                reason: "epsilon must be finite and positive",
            });
        }
        Ok(())
    }

    /// Returns true if `iteration` must evaluate `z0` instead of recycling it.
    pub fn is_reset_point(&self, iteration: usize) -> bool {
        match usize::try_from(self.reset_interval) {
            Ok(0) | Err(_) => false,
            Ok(interval) => iteration % interval == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NftConfig::default();
        assert_eq!(config.max_evaluations, 1024);
        assert_eq!(config.reset_interval, 32);
        assert!(config.evaluate_final);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_cap() {
        let config = NftConfig {
            max_evaluations: 0,
            ..NftConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(NftError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_epsilon() {
        for epsilon in [0.0, -0.0, -1e-12, f64::NAN, f64::INFINITY] {
            let config = NftConfig {
                epsilon,
                ..NftConfig::default()
            };
            assert!(config.validate().is_err(), "epsilon {epsilon} accepted");
        }
    }

    #[test]
    fn test_reset_points() {
        let config = NftConfig {
            reset_interval: 4,
            ..NftConfig::default()
        };
        let resets: Vec<usize> = (0..12).filter(|&i| config.is_reset_point(i)).collect();
        assert_eq!(resets, vec![0, 4, 8]);
    }

    #[test]
    fn test_non_positive_interval_disables_resets() {
        for reset_interval in [0, -1, i64::MIN] {
            let config = NftConfig {
                reset_interval,
                ..NftConfig::default()
            };
            assert!((0..64).all(|i| !config.is_reset_point(i)));
        }
    }

    #[test]
    fn test_deserialize_partial() {
        let config: NftConfig =
            serde_json::from_str(r#"{"max_evaluations": 200, "reset_interval": -1}"#).unwrap();
        assert_eq!(config.max_evaluations, 200);
        assert_eq!(config.reset_interval, -1);
        assert_eq!(config.epsilon, 1e-32);
        assert!(config.evaluate_final);
    }
}
