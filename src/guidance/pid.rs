use nalgebra::SVector;

// ---------------------------------------------------------------------------
// PID Controller (componentwise over an N-dimensional error vector)
// ---------------------------------------------------------------------------

/// Vector-valued PID law: all N axes share one set of gains.
///
/// The integral accumulator is deliberately unclamped; sustained error grows
/// it without bound (classic windup). Callers that want clamping can reach
/// the accumulator through [`crate::guidance::Guidance::integral_error_mut`].
#[derive(Debug, Clone)]
pub struct VectorPid<const N: usize> {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    integral: SVector<f64, N>,
    prev_error: SVector<f64, N>,
}

impl<const N: usize> VectorPid<N> {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: SVector::zeros(),
            prev_error: SVector::zeros(),
        }
    }

    /// One controller step: accumulate the integral, estimate the derivative
    /// by backward difference, record the error for the next call.
    /// `dt` must be positive; construction-time validation guarantees it.
    pub fn update(&mut self, error: SVector<f64, N>, dt: f64) -> SVector<f64, N> {
        self.integral += error * dt;
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;
        self.kp * error + self.ki * self.integral + self.kd * derivative
    }

    pub fn integral(&self) -> &SVector<f64, N> {
        &self.integral
    }

    pub fn integral_mut(&mut self) -> &mut SVector<f64, N> {
        &mut self.integral
    }

    pub fn prev_error(&self) -> &SVector<f64, N> {
        &self.prev_error
    }

    pub fn reset(&mut self) {
        self.integral = SVector::zeros();
        self.prev_error = SVector::zeros();
    }
}
