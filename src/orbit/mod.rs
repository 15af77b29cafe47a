//! Per-frame animation of the orbit tree.
//!
//! Every animated body is split into two nodes: an orbit pivot whose
//! rotation carries the body around its parent, and the body itself whose
//! rotation is its self-spin. Primary bodies hang off the world root;
//! satellites hang off their primary's body node.

use bevy::prelude::*;

use crate::controls::ControlState;
use crate::types::{AppState, FrameSet, SimulationClock, wrap_angle};

#[cfg(test)]
mod proptest_orbit;

/// Plugin providing the animation step.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSet::Clock, FrameSet::Orbits, FrameSet::Spins)
                .chain()
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            (
                advance_orbits.in_set(FrameSet::Orbits),
                advance_spins.in_set(FrameSet::Spins),
            ),
        );
    }
}

/// Which tier of the tree a pivot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitKind {
    /// A top-level body; `name` keys its per-body speed control.
    Primary { name: &'static str },
    /// A satellite of a primary body. Only the global multiplier applies.
    Satellite,
}

/// Orbit pivot: its rotation about +Y is the body's revolution angle.
#[derive(Component, Clone, Debug, PartialEq)]
#[require(Transform, Visibility)]
pub struct OrbitPivot {
    pub kind: OrbitKind,
    /// Revolution rate in radians per second.
    pub orbit_speed: f32,
    /// Accumulated revolution angle in `[0, TAU)`.
    pub angle: f32,
}

impl OrbitPivot {
    pub fn primary(name: &'static str, orbit_speed: f32) -> Self {
        Self {
            kind: OrbitKind::Primary { name },
            orbit_speed,
            angle: 0.0,
        }
    }

    pub fn satellite(orbit_speed: f32) -> Self {
        Self {
            kind: OrbitKind::Satellite,
            orbit_speed,
            angle: 0.0,
        }
    }

    /// Angle gained over `delta` seconds under `controls`.
    ///
    /// Primaries advance by the globally scaled rate plus an additive
    /// correction `orbit_speed * delta * (per_body - 1)`. The two terms
    /// add rather than multiply, so global 2 with per-body 2 gives 3x.
    pub fn increment(&self, delta: f32, controls: &ControlState) -> f32 {
        let scaled = self.orbit_speed * delta * controls.global_speed();
        match self.kind {
            OrbitKind::Primary { name } => {
                let correction = controls
                    .body_speed(name)
                    .filter(|&m| m != 1.0)
                    .map_or(0.0, |m| self.orbit_speed * delta * (m - 1.0));
                scaled + correction
            }
            OrbitKind::Satellite => scaled,
        }
    }
}

/// Body self-spin about its local +Y axis.
#[derive(Component, Clone, Debug, PartialEq)]
#[require(Transform, Visibility)]
pub struct BodySpin {
    /// Spin rate in radians per second.
    pub rotation_speed: f32,
    /// Accumulated spin angle in `[0, TAU)`.
    pub angle: f32,
}

impl BodySpin {
    pub fn new(rotation_speed: f32) -> Self {
        Self {
            rotation_speed,
            angle: 0.0,
        }
    }

    pub fn increment(&self, delta: f32, controls: &ControlState) -> f32 {
        self.rotation_speed * delta * controls.global_speed()
    }
}

/// Advance every orbit pivot, primaries and satellites alike.
pub fn advance_orbits(
    clock: Res<SimulationClock>,
    controls: Res<ControlState>,
    mut pivots: Query<(&mut OrbitPivot, &mut Transform)>,
) {
    let delta = clock.delta();
    if delta == 0.0 {
        return;
    }

    for (mut pivot, mut transform) in &mut pivots {
        let step = pivot.increment(delta, &controls);
        pivot.angle = wrap_angle(pivot.angle + step);
        transform.rotation = Quat::from_rotation_y(pivot.angle);
    }
}

/// Advance every body's self-spin.
pub fn advance_spins(
    clock: Res<SimulationClock>,
    controls: Res<ControlState>,
    mut bodies: Query<(&mut BodySpin, &mut Transform), Without<OrbitPivot>>,
) {
    let delta = clock.delta();
    if delta == 0.0 {
        return;
    }

    for (mut spin, mut transform) in &mut bodies {
        let step = spin.increment(delta, &controls);
        spin.angle = wrap_angle(spin.angle + step);
        transform.rotation = Quat::from_rotation_y(spin.angle);
    }
}
