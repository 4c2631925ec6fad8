use std::fmt;

use nalgebra::SVector;

use super::config::{ConfigError, GuidanceConfig};
use super::pid::VectorPid;
use super::thrust::saturate;

// ---------------------------------------------------------------------------
// Flight phases
// ---------------------------------------------------------------------------

/// Discrete flight mode. Ordering is monotonic: Launch → Ascent →
/// {Descent | Hit}; Hit is absorbing. Unphased controllers live in Ascent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Launch,
    Ascent,
    Descent,
    Hit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Launch => "LAUNCH",
            Phase::Ascent => "ASCENT",
            Phase::Descent => "DESCENT",
            Phase::Hit => "HIT",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Guidance controller: kinematics + PID + fuel + phase machine
// ---------------------------------------------------------------------------

/// Closed-loop guidance toward a fixed target, generic over the spatial
/// dimension. One instance per run; [`Guidance::advance`] mutates it in
/// place once per fixed tick and nothing inside blocks or suspends.
#[derive(Debug, Clone)]
pub struct Guidance<const N: usize> {
    config: GuidanceConfig<N>,
    target_position: SVector<f64, N>,
    current_position: SVector<f64, N>,
    velocity: SVector<f64, N>,
    acceleration: SVector<f64, N>,
    pid: VectorPid<N>,
    fuel: f64,
    phase: Phase,
}

/// Planar controller (the phased screen-coordinate scenario).
pub type Guidance2 = Guidance<2>;
/// Full three-axis controller.
pub type Guidance3 = Guidance<3>;

impl<const N: usize> Guidance<N> {
    /// Build a controller at the configured origin with zeroed kinematic and
    /// PID state. Fails on degenerate configuration; physical outcomes like
    /// fuel-out or an unreachable target are never errors.
    pub fn new(
        target_position: SVector<f64, N>,
        config: GuidanceConfig<N>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let phase = if config.phased {
            Phase::Launch
        } else {
            Phase::Ascent
        };
        Ok(Self {
            target_position,
            current_position: config.origin,
            velocity: SVector::zeros(),
            acceleration: SVector::zeros(),
            pid: VectorPid::new(config.kp, config.ki, config.kd),
            fuel: config.fuel,
            phase,
            config,
        })
    }

    /// Advance one tick. Dispatches on the current phase, then evaluates the
    /// hit threshold unconditionally — a hit decided this tick pre-empts any
    /// other transition made the same tick. Returns the post-tick phase.
    pub fn advance(&mut self) -> Phase {
        if self.phase == Phase::Hit {
            return self.phase;
        }
        // Out of fuel with no descent to fall back on: dead in space. The
        // unphased controller freezes here; the phased one only reaches this
        // guard when it was built with zero fuel.
        if self.fuel <= 0.0 && self.phase != Phase::Descent {
            return self.phase;
        }

        match self.phase {
            Phase::Launch => self.launch_tick(),
            Phase::Ascent => self.guided_tick(),
            Phase::Descent => self.descent_tick(),
            Phase::Hit => unreachable!("handled above"),
        }

        if self.distance_to_target() < self.config.target_reached_threshold {
            self.phase = Phase::Hit;
        }
        self.phase
    }

    /// Fixed vertical boost, no PID, no fuel burn. The exit guard fires as
    /// soon as vertical velocity is non-positive, which the launch impulse
    /// itself guarantees — so launch lasts exactly one tick. Kept literal;
    /// see the open-questions section of DESIGN.md.
    fn launch_tick(&mut self) {
        let mut boost = SVector::zeros();
        boost[self.config.vertical_axis] = -self.config.max_thrust;
        self.acceleration = boost;
        self.integrate();
        if self.velocity[self.config.vertical_axis] <= 0.0 {
            self.phase = Phase::Ascent;
        }
    }

    /// PID-guided flight: compute the correction, saturate it at the
    /// actuator limit, integrate, burn fuel.
    fn guided_tick(&mut self) {
        let error = self.target_position - self.current_position;
        let adjustment = self.pid.update(error, self.config.time_step);
        self.acceleration = saturate(adjustment, self.config.max_thrust);
        self.integrate();

        self.fuel =
            (self.fuel - self.config.fuel_consumption_rate * self.config.time_step).max(0.0);
        if self.config.phased && self.fuel <= 0.0 {
            self.phase = Phase::Descent;
        }
    }

    /// Unpowered fall: constant gravity along the vertical axis, guidance
    /// disabled, no fuel involved.
    fn descent_tick(&mut self) {
        let mut pull = SVector::zeros();
        pull[self.config.vertical_axis] = self.config.gravity;
        self.acceleration = pull;
        self.integrate();
    }

    /// Explicit Euler step with the velocity update using this tick's
    /// acceleration. Wind, when configured, increments velocity every tick —
    /// a non-physical simplification retained on purpose.
    fn integrate(&mut self) {
        let dt = self.config.time_step;
        self.velocity += self.acceleration * dt;
        if let Some(wind) = self.config.wind {
            self.velocity += wind * dt;
        }
        self.current_position += self.velocity * dt;
    }

    /// Euclidean distance to the target. Pure; valid in any phase.
    pub fn distance_to_target(&self) -> f64 {
        (self.target_position - self.current_position).norm()
    }

    // -- read-only projections for the driver --------------------------------

    pub fn config(&self) -> &GuidanceConfig<N> {
        &self.config
    }

    pub fn target_position(&self) -> &SVector<f64, N> {
        &self.target_position
    }

    pub fn position(&self) -> &SVector<f64, N> {
        &self.current_position
    }

    pub fn velocity(&self) -> &SVector<f64, N> {
        &self.velocity
    }

    /// Most recent controller output (post-saturation in guided flight).
    pub fn acceleration(&self) -> &SVector<f64, N> {
        &self.acceleration
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prev_error(&self) -> &SVector<f64, N> {
        self.pid.prev_error()
    }

    pub fn integral_error(&self) -> &SVector<f64, N> {
        self.pid.integral()
    }

    /// Mutable access to the integral accumulator. The core never clamps it;
    /// a driver that wants anti-windup can bound it between ticks.
    pub fn integral_error_mut(&mut self) -> &mut SVector<f64, N> {
        self.pid.integral_mut()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
