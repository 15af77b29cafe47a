//! Core simulation types shared by the loader, builder and scheduler.

use std::f32::consts::TAU;

use bevy::prelude::*;

/// Application lifecycle.
///
/// `Loading` is the idle phase: textures are being fetched and no scene
/// exists yet. The switch to `Running` happens exactly once, when every
/// requested texture has resolved (or fallen back).
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// System set for ordering the per-frame animation step.
///
/// The clock is sampled before any node is advanced, and orbit pivots are
/// advanced before body self-spin.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Sample elapsed time into [`SimulationClock`].
    Clock,
    /// Advance orbit pivots (primaries and satellites).
    Orbits,
    /// Advance body self-spin.
    Spins,
}

/// Longest frame interval the simulation will integrate, in seconds.
///
/// A stalled frame (window drag, debugger pause) is clamped to this so
/// bodies never jump by an arbitrary amount.
pub const MAX_FRAME_DELTA: f32 = 1.0;

/// Elapsed time since the previous animation step.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Seconds since the previous step, always in `[0, max_delta]`.
    delta: f32,
    /// Upper bound applied to every sample.
    max_delta: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            delta: 0.0,
            max_delta: MAX_FRAME_DELTA,
        }
    }
}

impl SimulationClock {
    /// Record a new raw frame interval, clamped to `[0, max_delta]`.
    ///
    /// Negative and NaN samples become zero.
    pub fn advance(&mut self, raw_secs: f32) {
        self.delta = if raw_secs.is_nan() {
            0.0
        } else {
            raw_secs.clamp(0.0, self.max_delta)
        };
    }

    /// Seconds since the previous step.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Upper bound on a single step.
    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

/// Normalize an angle into `[0, TAU)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
