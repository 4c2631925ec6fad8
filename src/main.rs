use nalgebra::{Vector2, Vector3};
use tracing_subscriber::EnvFilter;

use missile_sim::{simulate, Guidance, GuidanceConfig, Outcome, Phase, SimConfig, TickRecord};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // -----------------------------------------------------------------------
    // Scenario 1: three-axis guided intercept
    // -----------------------------------------------------------------------
    let target = Vector3::new(1000.0, 500.0, 200.0);
    let config = GuidanceConfig::<3> {
        target_reached_threshold: 10.0,
        wind: Some(Vector3::new(5.0, -3.0, 0.0)),
        ..Default::default()
    };
    run_scenario("3D INTERCEPT", Guidance::new(target, config), target.norm());

    // -----------------------------------------------------------------------
    // Scenario 2: planar phased flight (launch / ascent / descent)
    // -----------------------------------------------------------------------
    let target = Vector2::new(700.0, 100.0);
    let config = GuidanceConfig::<2> {
        origin: Vector2::new(100.0, 500.0),
        max_thrust: 5.0,
        target_reached_threshold: 10.0,
        phased: true,
        ..Default::default()
    };
    let initial_distance = (target - config.origin).norm();
    run_scenario("2D PHASED FLIGHT", Guidance::new(target, config), initial_distance);
}

fn run_scenario<const N: usize>(
    name: &str,
    guidance: Result<Guidance<N>, missile_sim::ConfigError>,
    initial_distance: f64,
) {
    let mut guidance = match guidance {
        Ok(g) => g,
        Err(e) => {
            eprintln!("bad configuration for {name}: {e}");
            std::process::exit(1);
        }
    };
    let cfg = guidance.config().clone();
    let (trajectory, outcome) = simulate(&mut guidance, &SimConfig::default());
    let last = trajectory.last().expect("trajectory always has t=0");

    println!();
    println!("====================================================================");
    println!("  MISSILE GUIDANCE SIMULATION — {name}");
    println!("====================================================================");
    println!();
    println!("  Configuration");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Gains:         Kp={:.2} Ki={:.3} Kd={:.2}   dt={:.2} s",
        cfg.kp, cfg.ki, cfg.kd, cfg.time_step
    );
    println!(
        "  Max thrust:    {:>8.1}       Fuel:         {:>8.1} @ {:.2}/s",
        cfg.max_thrust, cfg.fuel, cfg.fuel_consumption_rate
    );
    println!(
        "  Hit threshold: {:>8.1}       Range:        {:>8.1}",
        cfg.target_reached_threshold, initial_distance
    );
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>10}  {:>10}  {:>8}  {:>8}",
        "t (s)", "dist", "speed", "fuel", "phase"
    );
    let sample_interval = (trajectory.len() / 20).max(1);
    for (i, rec) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>8.1}  {:>10.1}  {:>10.1}  {:>8.2}  {:>8}",
            rec.time,
            rec.distance,
            rec.velocity.norm(),
            rec.fuel,
            rec.phase.to_string()
        );
    }
    println!();

    let verdict = match outcome {
        Outcome::Hit => "TARGET HIT",
        Outcome::FuelExhausted => "OUT OF FUEL",
        Outcome::MaxTimeExceeded => "TIME LIMIT REACHED",
    };
    println!("  Result: {verdict}");
    println!(
        "  Final distance {:.2} at t={:.1}s after {} ticks ({})",
        last.distance,
        last.time,
        trajectory.len() - 1,
        phase_history(&trajectory)
    );
    println!("====================================================================");
}

/// Compact "LAUNCH -> ASCENT -> HIT" style summary of the phases visited.
fn phase_history<const N: usize>(trajectory: &[TickRecord<N>]) -> String {
    let mut phases: Vec<Phase> = Vec::new();
    for rec in trajectory {
        if phases.last() != Some(&rec.phase) {
            phases.push(rec.phase);
        }
    }
    phases
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
