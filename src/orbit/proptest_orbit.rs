//! Property-based tests for the orbit increment rules using proptest.

use proptest::prelude::*;

use super::{BodySpin, OrbitPivot};
use crate::test_utils::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No elapsed time, no motion, whatever the controls say.
    #[test]
    fn prop_zero_delta_is_idempotent(
        orbit_speed in 0.0f32..1.0,
        rotation_speed in 0.0f32..1.0,
        global in 0.0f32..5.0,
        per_body in 0.0f32..5.0,
    ) {
        let mut controls = fixtures::two_body_controls();
        controls.set_global_speed(global);
        controls.set_body_speed("BodyA", per_body);

        prop_assert_eq!(OrbitPivot::primary("BodyA", orbit_speed).increment(0.0, &controls), 0.0);
        prop_assert_eq!(OrbitPivot::satellite(orbit_speed).increment(0.0, &controls), 0.0);
        prop_assert_eq!(BodySpin::new(rotation_speed).increment(0.0, &controls), 0.0);
    }

    /// With both multipliers at 1 a primary advances by exactly orbit_speed * delta.
    #[test]
    fn prop_unit_multipliers_advance_by_rate(
        orbit_speed in 0.0f32..1.0,
        delta in 0.0f32..1.0,
    ) {
        let controls = fixtures::two_body_controls();
        let step = OrbitPivot::primary("BodyA", orbit_speed).increment(delta, &controls);
        prop_assert_eq!(step, orbit_speed * delta);
    }

    /// Under a unit global multiplier the additive correction reduces to scaling by m.
    #[test]
    fn prop_correction_equals_scaling_at_unit_global(
        orbit_speed in 0.0f32..1.0,
        delta in 0.0f32..1.0,
        per_body in 0.0f32..5.0,
    ) {
        let mut controls = fixtures::two_body_controls();
        controls.set_body_speed("BodyA", per_body);
        let m = controls.body_speed("BodyA").unwrap_or(1.0);

        let step = OrbitPivot::primary("BodyA", orbit_speed).increment(delta, &controls);
        let expected = orbit_speed * delta * m;
        prop_assert!((step - expected).abs() <= 1e-5, "step {} expected {}", step, expected);
    }

    /// For any global g and per-body m the increment is rate * delta * (g + m - 1).
    #[test]
    fn prop_correction_is_additive(
        orbit_speed in 0.0f32..1.0,
        delta in 0.0f32..1.0,
        global in 0.0f32..5.0,
        per_body in 0.0f32..5.0,
    ) {
        let mut controls = fixtures::two_body_controls();
        controls.set_global_speed(global);
        controls.set_body_speed("BodyA", per_body);
        let g = controls.global_speed();
        let m = controls.body_speed("BodyA").unwrap_or(1.0);

        let step = OrbitPivot::primary("BodyA", orbit_speed).increment(delta, &controls);
        let expected = orbit_speed * delta * (g + m - 1.0);
        prop_assert!((step - expected).abs() <= 1e-4, "step {} expected {}", step, expected);
    }

    /// Satellites never see the per-body correction.
    #[test]
    fn prop_satellite_uses_global_only(
        orbit_speed in 0.0f32..1.0,
        delta in 0.0f32..1.0,
        global in 0.0f32..5.0,
        per_body in 0.0f32..5.0,
    ) {
        let mut controls = fixtures::two_body_controls();
        controls.set_global_speed(global);
        controls.set_body_speed("BodyA", per_body);

        let step = OrbitPivot::satellite(orbit_speed).increment(delta, &controls);
        prop_assert_eq!(step, orbit_speed * delta * controls.global_speed());
    }
}
