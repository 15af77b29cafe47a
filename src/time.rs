//! Frame clock for the animation step.
//!
//! Samples Bevy's frame delta once per frame into [`SimulationClock`],
//! bounded so a stalled frame cannot make bodies jump.

use bevy::prelude::*;

use crate::types::{FrameSet, SimulationClock};

/// Plugin providing the bounded frame clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, tick_clock.in_set(FrameSet::Clock));
    }
}

/// Record the time elapsed since the previous frame.
///
/// Frames are paced by the display (vsync), not a fixed timer, so the
/// delta varies from frame to frame.
pub fn tick_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs());
}
