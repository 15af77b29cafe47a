//! Test utilities for the orbit tree.
//!
//! Provides a small two-body catalog shared by the unit tests.

use crate::controls::ControlState;
use crate::registry::{BodyRegistry, BodySpec};

/// Fixtures for registries and control states.
pub mod fixtures {
    use super::*;

    /// Central body plus one planet with the reference rates:
    /// orbit radius 50, orbit speed 0.01, rotation speed 0.03.
    pub fn two_body_registry() -> BodyRegistry {
        BodyRegistry::new(vec![
            BodySpec::new("Central", 10.0, "central.png", 0.0, 0.005, 0.0),
            BodySpec::new("BodyA", 2.0, "body_a.png", 50.0, 0.03, 0.01),
        ])
        .expect("two-body fixture is valid")
    }

    /// Default controls for [`two_body_registry`].
    pub fn two_body_controls() -> ControlState {
        ControlState::from_registry(&two_body_registry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_body_fixture() {
        let registry = fixtures::two_body_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.central().orbit_speed, 0.0);
        assert_eq!(registry.primaries()[0].name, "BodyA");
    }

    #[test]
    fn test_two_body_controls_have_one_slider() {
        let controls = fixtures::two_body_controls();
        assert_eq!(controls.body_speeds().len(), 1);
        assert_eq!(controls.body_speed("BodyA"), Some(1.0));
    }
}
