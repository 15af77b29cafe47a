//! Declarative catalog of the bodies in the scene.
//!
//! Distances, sizes and rates are stylized display constants, not physical
//! values. Entry 0 is always the central, self-illuminated body.

use std::collections::HashSet;

use bevy::prelude::*;

/// Texture used for every satellite in the default catalog.
pub const MOON_TEXTURE: &str = "images/moon.jpg";

/// Flat annulus attached to a body.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

/// A single satellite orbiting a primary body.
#[derive(Clone, Debug, PartialEq)]
pub struct SatelliteSpec {
    pub texture: &'static str,
}

/// Static description of one body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpec {
    /// Display name; also keys the per-body speed control.
    pub name: &'static str,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Accent color, used for the body's orbit path.
    pub tint: Option<Color>,
    /// Asset path of the surface texture.
    pub texture: &'static str,
    /// Distance from the parent center; 0 for the central body.
    pub orbit_radius: f32,
    /// Self-spin rate in radians per second.
    pub rotation_speed: f32,
    /// Revolution rate around the parent in radians per second.
    pub orbit_speed: f32,
    pub satellite: Option<SatelliteSpec>,
    pub ring: Option<RingSpec>,
}

impl BodySpec {
    /// Minimal spec with no tint, satellite or ring.
    pub fn new(
        name: &'static str,
        radius: f32,
        texture: &'static str,
        orbit_radius: f32,
        rotation_speed: f32,
        orbit_speed: f32,
    ) -> Self {
        Self {
            name,
            radius,
            tint: None,
            texture,
            orbit_radius,
            rotation_speed,
            orbit_speed,
            satellite: None,
            ring: None,
        }
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn with_satellite(mut self, texture: &'static str) -> Self {
        self.satellite = Some(SatelliteSpec { texture });
        self
    }

    pub fn with_ring(mut self, inner_radius: f32, outer_radius: f32, texture: &'static str) -> Self {
        self.ring = Some(RingSpec {
            inner_radius,
            outer_radius,
            texture,
        });
        self
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("body registry is empty")]
    Empty,

    #[error("central body {0} must have orbit radius and orbit speed of 0")]
    CentralBodyOrbits(&'static str),

    #[error("body {name} has invalid {field}: {value}")]
    InvalidValue {
        name: &'static str,
        field: &'static str,
        value: f32,
    },

    #[error("ring of {0} has inner radius not smaller than outer radius")]
    InvalidRing(&'static str),

    #[error("duplicate body name {0}")]
    DuplicateName(&'static str),
}

/// Ordered, immutable list of bodies.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<BodySpec>,
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self {
            bodies: all_bodies(),
        }
    }
}

impl BodyRegistry {
    /// Validate and wrap a list of bodies.
    pub fn new(bodies: Vec<BodySpec>) -> Result<Self, RegistryError> {
        let Some(central) = bodies.first() else {
            return Err(RegistryError::Empty);
        };
        if central.orbit_radius != 0.0 || central.orbit_speed != 0.0 {
            return Err(RegistryError::CentralBodyOrbits(central.name));
        }

        let mut names = HashSet::new();
        for body in &bodies {
            if !names.insert(body.name) {
                return Err(RegistryError::DuplicateName(body.name));
            }
            check_value(body.name, "radius", body.radius, false)?;
            check_value(body.name, "orbit radius", body.orbit_radius, true)?;
            check_value(body.name, "rotation speed", body.rotation_speed, true)?;
            check_value(body.name, "orbit speed", body.orbit_speed, true)?;
            if let Some(ring) = &body.ring {
                check_value(body.name, "ring inner radius", ring.inner_radius, true)?;
                check_value(body.name, "ring outer radius", ring.outer_radius, false)?;
                if ring.inner_radius >= ring.outer_radius {
                    return Err(RegistryError::InvalidRing(body.name));
                }
            }
        }

        Ok(Self { bodies })
    }

    pub fn bodies(&self) -> &[BodySpec] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The central body (entry 0).
    pub fn central(&self) -> &BodySpec {
        &self.bodies[0]
    }

    /// Every body except the central one, in registry order.
    pub fn primaries(&self) -> &[BodySpec] {
        &self.bodies[1..]
    }

    /// All texture paths the scene needs, in load order: one per body,
    /// then satellite textures, then ring textures.
    pub fn texture_paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<&'static str> = self.bodies.iter().map(|b| b.texture).collect();
        paths.extend(
            self.bodies
                .iter()
                .filter_map(|b| b.satellite.as_ref().map(|s| s.texture)),
        );
        paths.extend(
            self.bodies
                .iter()
                .filter_map(|b| b.ring.as_ref().map(|r| r.texture)),
        );
        paths
    }
}

fn check_value(
    name: &'static str,
    field: &'static str,
    value: f32,
    allow_zero: bool,
) -> Result<(), RegistryError> {
    let ok = value.is_finite() && if allow_zero { value >= 0.0 } else { value > 0.0 };
    if ok {
        Ok(())
    } else {
        Err(RegistryError::InvalidValue { name, field, value })
    }
}

/// The default catalog: the Sun and the eight planets.
pub fn all_bodies() -> Vec<BodySpec> {
    vec![
        BodySpec::new("Sun", 15.0, "images/sun.jpg", 0.0, 0.005, 0.0),
        BodySpec::new("Mercury", 3.2, "images/mercury.jpg", 28.0, 0.006, 0.02)
            .with_tint(Color::srgb_u8(0xb5, 0xb5, 0xb5)),
        BodySpec::new("Venus", 5.8, "images/venus.jpg", 44.0, 0.002, 0.017)
            .with_tint(Color::srgb_u8(0xe6, 0xc2, 0x29)),
        BodySpec::new("Earth", 6.0, "images/earth.jpg", 62.0, 0.03, 0.01)
            .with_tint(Color::srgb_u8(0x34, 0x98, 0xdb))
            .with_satellite(MOON_TEXTURE),
        BodySpec::new("Mars", 4.0, "images/mars.jpg", 78.0, 0.01, 0.008)
            .with_tint(Color::srgb_u8(0xe6, 0x7e, 0x22)),
        BodySpec::new("Jupiter", 12.0, "images/jupiter.jpg", 100.0, 0.04, 0.004)
            .with_tint(Color::srgb_u8(0xf1, 0xc4, 0x0f)),
        BodySpec::new("Saturn", 10.0, "images/saturn.jpg", 138.0, 0.017, 0.003)
            .with_tint(Color::srgb_u8(0xf3, 0x9c, 0x12))
            .with_ring(10.0, 20.0, "images/saturn_ring.png"),
        BodySpec::new("Uranus", 7.0, "images/uranus.jpg", 176.0, 0.012, 0.002)
            .with_tint(Color::srgb_u8(0x1a, 0xbc, 0x9c))
            .with_ring(7.0, 12.0, "images/uranus_ring.png"),
        BodySpec::new("Neptune", 7.0, "images/neptune.jpg", 200.0, 0.01, 0.001)
            .with_tint(Color::srgb_u8(0x34, 0x98, 0xdb)),
    ]
}
