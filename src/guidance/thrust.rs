use nalgebra::SVector;

// ---------------------------------------------------------------------------
// Thrust saturation: cap commanded acceleration at the actuator limit
// ---------------------------------------------------------------------------

/// Clamp `adjustment` to `max_thrust` while preserving its direction.
///
/// A zero-magnitude input is returned unchanged (no direction to preserve,
/// and rescaling would divide by zero).
pub fn saturate<const N: usize>(adjustment: SVector<f64, N>, max_thrust: f64) -> SVector<f64, N> {
    let magnitude = adjustment.norm();
    if magnitude > max_thrust && magnitude > 0.0 {
        adjustment * (max_thrust / magnitude)
    } else {
        adjustment
    }
}
