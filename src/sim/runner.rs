use nalgebra::SVector;
use tracing::{debug, info};

use crate::guidance::{Guidance, Phase};

// ---------------------------------------------------------------------------
// Driver configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Hard stop, simulated seconds. Catches flights that never terminate
    /// (target flyby, endless descent past the target).
    pub max_time: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { max_time: 600.0 }
    }
}

// ---------------------------------------------------------------------------
// Per-tick snapshot and flight outcome
// ---------------------------------------------------------------------------

/// State observed by the driver after a tick (and once at t = 0).
#[derive(Debug, Clone)]
pub struct TickRecord<const N: usize> {
    pub time: f64,
    pub position: SVector<f64, N>,
    pub velocity: SVector<f64, N>,
    pub fuel: f64,
    pub phase: Phase,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Closed within the target threshold.
    Hit,
    /// Tank ran dry with no descent dynamics to fall back on.
    FuelExhausted,
    /// Neither terminal condition inside `max_time`.
    MaxTimeExceeded,
}

// ---------------------------------------------------------------------------
// Fixed-step flight loop
// ---------------------------------------------------------------------------

/// Drive `guidance` at its configured time step until it hits, runs dry, or
/// exceeds `config.max_time`. Pacing to wall-clock time is the caller's
/// business; this loop is synchronous and deterministic.
pub fn simulate<const N: usize>(
    guidance: &mut Guidance<N>,
    config: &SimConfig,
) -> (Vec<TickRecord<N>>, Outcome) {
    let dt = guidance.config().time_step;
    let max_ticks = (config.max_time / dt) as usize;
    let mut trajectory = Vec::with_capacity(max_ticks.min(200_000) + 1);

    trajectory.push(record(guidance, 0.0));
    let mut prev_phase = guidance.phase();

    for tick in 1..=max_ticks {
        let phase = guidance.advance();
        let time = tick as f64 * dt;
        trajectory.push(record(guidance, time));

        if phase != prev_phase {
            debug!(%phase, time, distance = guidance.distance_to_target(), "phase transition");
            prev_phase = phase;
        }

        if phase == Phase::Hit {
            info!(time, "target hit");
            return (trajectory, Outcome::Hit);
        }
        if guidance.fuel() <= 0.0 && phase != Phase::Descent {
            info!(time, distance = guidance.distance_to_target(), "out of fuel");
            return (trajectory, Outcome::FuelExhausted);
        }
    }

    info!(
        max_time = config.max_time,
        distance = guidance.distance_to_target(),
        "simulation time limit reached"
    );
    (trajectory, Outcome::MaxTimeExceeded)
}

fn record<const N: usize>(guidance: &Guidance<N>, time: f64) -> TickRecord<N> {
    TickRecord {
        time,
        position: *guidance.position(),
        velocity: *guidance.velocity(),
        fuel: guidance.fuel(),
        phase: guidance.phase(),
        distance: guidance.distance_to_target(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::GuidanceConfig;
    use nalgebra::Vector3;

    #[test]
    fn close_target_is_hit() {
        let config = GuidanceConfig::<3> {
            target_reached_threshold: 5.0,
            ..Default::default()
        };
        let mut g = Guidance::new(Vector3::new(20.0, 10.0, 5.0), config).unwrap();
        let (traj, outcome) = simulate(&mut g, &SimConfig::default());
        assert_eq!(outcome, Outcome::Hit);
        assert_eq!(traj.last().unwrap().phase, Phase::Hit);
        assert!(traj.last().unwrap().distance < 5.0);
    }

    #[test]
    fn dry_tank_reports_fuel_exhausted() {
        let config = GuidanceConfig::<3> {
            fuel: 0.5,
            fuel_consumption_rate: 1.0,
            ..Default::default()
        };
        let mut g = Guidance::new(Vector3::new(1.0e6, 0.0, 0.0), config).unwrap();
        let (traj, outcome) = simulate(&mut g, &SimConfig::default());
        assert_eq!(outcome, Outcome::FuelExhausted);
        assert_eq!(traj.last().unwrap().fuel, 0.0);
    }

    #[test]
    fn time_cap_stops_endless_flights() {
        // Zero gains: the controller commands nothing and never closes
        let config = GuidanceConfig::<3> {
            kp: 0.0,
            ki: 0.0,
            kd: 0.0,
            ..Default::default()
        };
        let mut g = Guidance::new(Vector3::new(1000.0, 0.0, 0.0), config).unwrap();
        let (traj, outcome) = simulate(&mut g, &SimConfig { max_time: 1.0 });
        assert_eq!(outcome, Outcome::MaxTimeExceeded);
        assert_eq!(traj.len(), 11, "t=0 plus 10 ticks at dt=0.1");
    }

    #[test]
    fn trajectory_times_step_by_dt() {
        let mut g =
            Guidance::new(Vector3::new(50.0, 0.0, 0.0), GuidanceConfig::default()).unwrap();
        let (traj, _) = simulate(&mut g, &SimConfig { max_time: 2.0 });
        for (i, rec) in traj.iter().enumerate() {
            assert!((rec.time - i as f64 * 0.1).abs() < 1e-9);
        }
    }
}
