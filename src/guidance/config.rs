use nalgebra::SVector;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Guidance configuration
// ---------------------------------------------------------------------------

/// Constants fixed at construction. Defaults reproduce the canonical
/// three-axis intercept setup (gains 0.1/0.01/0.05 at 10 Hz).
#[derive(Debug, Clone)]
pub struct GuidanceConfig<const N: usize> {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
    /// Integration step, s. Must be positive.
    pub time_step: f64,
    /// Actuator limit on commanded acceleration magnitude.
    pub max_thrust: f64,
    /// Fuel on board at launch.
    pub fuel: f64,
    /// Fuel burned per second of active thrust.
    pub fuel_consumption_rate: f64,
    /// Distance below which the target counts as hit.
    pub target_reached_threshold: f64,
    /// Start position.
    pub origin: SVector<f64, N>,
    /// Constant wind, added to velocity as `wind * dt` every integrated tick.
    pub wind: Option<SVector<f64, N>>,
    /// Enable the LAUNCH/ASCENT/DESCENT/HIT flight-phase machine.
    /// When false the controller flies pure guided (ASCENT) until fuel-out.
    pub phased: bool,
    /// Axis index used by LAUNCH and DESCENT. Screen convention: positive
    /// values point groundward, so launch thrust is negative along it.
    pub vertical_axis: usize,
    /// Downward acceleration during DESCENT, along `vertical_axis`.
    pub gravity: f64,
}

impl<const N: usize> Default for GuidanceConfig<N> {
    fn default() -> Self {
        Self {
            kp: 0.1,
            ki: 0.01,
            kd: 0.05,
            time_step: 0.1,
            max_thrust: 10.0,
            fuel: 100.0,
            fuel_consumption_rate: 0.1,
            target_reached_threshold: 1.0,
            origin: SVector::zeros(),
            wind: None,
            phased: false,
            vertical_axis: 1,
            gravity: 9.8,
        }
    }
}

impl<const N: usize> GuidanceConfig<N> {
    /// Reject degenerate configurations before any simulation runs.
    /// A zero time step would make the derivative term and the Euler
    /// integration undefined, so it is a hard construction failure rather
    /// than something discovered mid-flight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_step <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step));
        }
        for (name, value) in [("kp", self.kp), ("ki", self.ki), ("kd", self.kd)] {
            if value < 0.0 {
                return Err(ConfigError::NegativeGain { name, value });
            }
        }
        if self.max_thrust <= 0.0 {
            return Err(ConfigError::NonPositiveMaxThrust(self.max_thrust));
        }
        if self.fuel < 0.0 {
            return Err(ConfigError::NegativeFuel(self.fuel));
        }
        if self.fuel_consumption_rate < 0.0 {
            return Err(ConfigError::NegativeConsumptionRate(
                self.fuel_consumption_rate,
            ));
        }
        if self.target_reached_threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.target_reached_threshold));
        }
        if self.phased && self.vertical_axis >= N {
            return Err(ConfigError::VerticalAxisOutOfRange {
                axis: self.vertical_axis,
                dim: N,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),
    #[error("gain {name} must be non-negative, got {value}")]
    NegativeGain { name: &'static str, value: f64 },
    #[error("max thrust must be positive, got {0}")]
    NonPositiveMaxThrust(f64),
    #[error("initial fuel must be non-negative, got {0}")]
    NegativeFuel(f64),
    #[error("fuel consumption rate must be non-negative, got {0}")]
    NegativeConsumptionRate(f64),
    #[error("target reached threshold must be non-negative, got {0}")]
    NegativeThreshold(f64),
    #[error("vertical axis {axis} out of range for dimension {dim}")]
    VerticalAxisOutOfRange { axis: usize, dim: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(GuidanceConfig::<3>::default().validate().is_ok());
    }

    #[test]
    fn zero_time_step_rejected() {
        let cfg = GuidanceConfig::<3> {
            time_step: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveTimeStep(0.0)));
    }

    #[test]
    fn negative_gain_rejected() {
        let cfg = GuidanceConfig::<3> {
            ki: -0.01,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeGain {
                name: "ki",
                value: -0.01
            })
        );
    }

    #[test]
    fn negative_threshold_rejected() {
        let cfg = GuidanceConfig::<2> {
            target_reached_threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NegativeThreshold(_))
        ));
    }

    #[test]
    fn vertical_axis_checked_only_when_phased() {
        let mut cfg = GuidanceConfig::<2> {
            vertical_axis: 5,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok(), "unphased flight never uses the axis");
        cfg.phased = true;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::VerticalAxisOutOfRange { axis: 5, dim: 2 })
        );
    }
}
