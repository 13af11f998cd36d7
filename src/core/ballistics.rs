use tracing::debug;

use crate::error::TrajectoryError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;
pub const DEFAULT_TOTAL_TIME_S: f64 = 10.0;

/// Largest time grid `projectile_motion` will allocate.
pub const MAX_SAMPLES: usize = 10_000_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    pub initial_speed_mps: f64,
    pub launch_angle_deg: f64,
    pub gravity_mps2: f64,
    pub time_step_s: f64,
    pub total_time_s: f64,
}

impl SimulationParams {
    pub fn new(initial_speed_mps: f64, launch_angle_deg: f64) -> Self {
        Self {
            initial_speed_mps,
            launch_angle_deg,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            time_step_s: DEFAULT_TIME_STEP_S,
            total_time_s: DEFAULT_TOTAL_TIME_S,
        }
    }

    pub fn with_gravity(self, gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..self
        }
    }

    pub fn with_time_step(self, time_step_s: f64) -> Self {
        Self {
            time_step_s,
            ..self
        }
    }

    pub fn with_total_time(self, total_time_s: f64) -> Self {
        Self {
            total_time_s,
            ..self
        }
    }

    /// Rejects anything that would make the time grid empty or unbounded.
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        let fields = [
            ("initial_speed_mps", self.initial_speed_mps),
            ("launch_angle_deg", self.launch_angle_deg),
            ("gravity_mps2", self.gravity_mps2),
            ("time_step_s", self.time_step_s),
            ("total_time_s", self.total_time_s),
        ];
        if let Some((name, value)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(TrajectoryError::invalid(name, value, "must be a finite number"));
        }
        if self.time_step_s <= 0.0 {
            return Err(TrajectoryError::invalid(
                "time_step_s",
                self.time_step_s,
                "must be positive",
            ));
        }
        if self.total_time_s <= 0.0 {
            return Err(TrajectoryError::invalid(
                "total_time_s",
                self.total_time_s,
                "must be positive",
            ));
        }
        if self.total_time_s / self.time_step_s > MAX_SAMPLES as f64 {
            return Err(TrajectoryError::invalid(
                "time_step_s",
                self.time_step_s,
                "grid exceeds 10000000 samples",
            ));
        }
        Ok(())
    }
}

/// Sampled flight path. `x` and `y` share the implicit grid `t_i = i * time_step_s`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    time_step_s: f64,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Trajectory {
    pub fn x_coordinates(&self) -> &[f64] {
        &self.x
    }

    pub fn y_coordinates(&self) -> &[f64] {
        &self.y
    }

    pub fn time_step_s(&self) -> f64 {
        self.time_step_s
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| i as f64 * self.time_step_s)
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn into_coordinates(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

pub fn velocity_components(params: SimulationParams) -> (f64, f64) {
    let theta = params.launch_angle_deg.to_radians();
    let vx = params.initial_speed_mps * theta.cos();
    let vy = params.initial_speed_mps * theta.sin();
    (vx, vy)
}

pub fn trajectory_at_time(params: SimulationParams, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Number of grid points `i * time_step_s` strictly below `total_time_s`.
///
/// Expects positive, finite arguments (see [`SimulationParams::validate`]).
pub fn sample_count(time_step_s: f64, total_time_s: f64) -> usize {
    let mut count = (total_time_s / time_step_s).ceil() as usize;
    // The division can land one either side of the true boundary.
    while count > 0 && (count - 1) as f64 * time_step_s >= total_time_s {
        count -= 1;
    }
    while (count as f64) * time_step_s < total_time_s {
        count += 1;
    }
    count
}

/// Samples the projectile's displacement over `[0, total_time_s)`.
pub fn projectile_motion(params: SimulationParams) -> Result<Trajectory, TrajectoryError> {
    params.validate()?;

    let samples = sample_count(params.time_step_s, params.total_time_s);
    let (x, y): (Vec<f64>, Vec<f64>) = (0..samples)
        .map(|i| trajectory_at_time(params, i as f64 * params.time_step_s))
        .unzip();

    debug!(
        samples,
        speed_mps = params.initial_speed_mps,
        angle_deg = params.launch_angle_deg,
        "sampled trajectory"
    );

    Ok(Trajectory {
        time_step_s: params.time_step_s,
        x,
        y,
    })
}

/// Highest point of the flight as `(time_s, height_m)`.
pub fn apex(params: SimulationParams) -> Option<(f64, f64)> {
    let (_, vy) = velocity_components(params);
    if params.gravity_mps2 <= 0.0 || vy <= 0.0 {
        return None;
    }
    let t_peak = vy / params.gravity_mps2;
    Some((t_peak, (vy * vy) / (2.0 * params.gravity_mps2)))
}

/// Time and horizontal distance at which the projectile returns to launch height.
pub fn flight_time_and_range(params: SimulationParams) -> Option<(f64, f64)> {
    if params.gravity_mps2 <= 0.0 {
        return None;
    }
    let (_, vy) = velocity_components(params);
    let t_land = (2.0 * vy / params.gravity_mps2).max(0.0);
    let (range, _) = trajectory_at_time(params, t_land);
    Some((t_land, range))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSummary {
    pub apex: Option<(f64, f64)>,
    pub landing: Option<(f64, f64)>,
}

impl FlightSummary {
    pub fn from_params(params: SimulationParams) -> Self {
        Self {
            apex: apex(params),
            landing: flight_time_and_range(params),
        }
    }
}
