//! Property-based tests for the trajectory sampler using proptest.

use proptest::prelude::*;

use crate::core::ballistics::{SimulationParams, projectile_motion, sample_count};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The last sample lies strictly inside the window and the next one would not.
    #[test]
    fn prop_grid_is_half_open(
        time_step in 0.001f64..2.0,
        total_time in 0.01f64..100.0,
    ) {
        let params = SimulationParams::new(20.0, 45.0)
            .with_time_step(time_step)
            .with_total_time(total_time);
        let trajectory = projectile_motion(params).expect("valid params");
        let n = trajectory.len();

        prop_assert!(n >= 1);
        prop_assert_eq!(trajectory.x_coordinates().len(), n);
        prop_assert_eq!(trajectory.y_coordinates().len(), n);
        prop_assert!(((n - 1) as f64) * time_step < total_time);
        prop_assert!((n as f64) * time_step >= total_time);
    }

    /// Exact multiples of the step give floor(total / step) samples.
    #[test]
    fn prop_whole_multiples_drop_endpoint(
        steps in 1usize..4000,
        step_exp in -3i32..2,
    ) {
        let time_step = 2f64.powi(step_exp);
        let total_time = steps as f64 * time_step;
        prop_assert_eq!(sample_count(time_step, total_time), steps);
        prop_assert_eq!(sample_count(time_step, total_time), (total_time / time_step).floor() as usize);
    }

    #[test]
    fn prop_starts_at_origin(
        speed in -100.0f64..100.0,
        angle in -360.0f64..360.0,
        gravity in -20.0f64..20.0,
    ) {
        let params = SimulationParams::new(speed, angle).with_gravity(gravity);
        let trajectory = projectile_motion(params).expect("valid params");
        prop_assert_eq!(trajectory.x_coordinates()[0], 0.0);
        prop_assert_eq!(trajectory.y_coordinates()[0], 0.0);
    }

    /// x is linear in speed; in y only the velocity term scales, the gravity term does not.
    #[test]
    fn prop_speed_scaling(
        speed in 0.1f64..200.0,
        angle in 0.0f64..90.0,
        factor in 0.5f64..4.0,
    ) {
        let base = projectile_motion(SimulationParams::new(speed, angle)).expect("valid params");
        let scaled = projectile_motion(SimulationParams::new(speed * factor, angle))
            .expect("valid params");

        for (t, ((x1, y1), (x2, y2))) in base.times().zip(base.points().zip(scaled.points())) {
            let gravity_term = -0.5 * 9.8 * t * t;
            prop_assert!((x2 - factor * x1).abs() <= 1e-9 * (1.0 + x2.abs()));
            let lift1 = y1 - gravity_term;
            let lift2 = y2 - gravity_term;
            prop_assert!((lift2 - factor * lift1).abs() <= 1e-9 * (1.0 + gravity_term.abs() + lift2.abs()));
        }
    }

    #[test]
    fn prop_horizontal_launch_stays_at_or_below_start(
        speed in 0.0f64..500.0,
        gravity in 0.1f64..30.0,
    ) {
        let params = SimulationParams::new(speed, 0.0).with_gravity(gravity);
        let trajectory = projectile_motion(params).expect("valid params");
        prop_assert!(trajectory.y_coordinates().iter().all(|&y| y <= 0.0));
    }
}
