//! Orrery - Animated Solar System
//!
//! A library crate providing the orbit tree, texture loader and control
//! surface for testing and integration purposes.

pub mod assets;
pub mod camera;
pub mod controls;
pub mod orbit;
pub mod registry;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
