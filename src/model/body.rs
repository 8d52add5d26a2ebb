use nalgebra::{Isometry3, Point3, Translation3};

use crate::consts::{REVOLUTION_STEP, ROTATION_STEP};
use crate::math::orbit::{orbit_translation, spin_rotation, wrap_degrees};

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub radius: f32,
    pub orbit_distance: f32,
    // Degrees per frame, before the per-frame step and time speed are applied
    pub rotation_speed: f64,
    pub revolution_speed: f64,
    pub color: Point3<f32>,
    pub has_rings: bool,
}

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub info: BodyInfo,
    // Both angles are in degrees, kept in [0, 360)
    rotation_angle: f64,
    revolution_angle: f64,
    children: Vec<CelestialBody>,
}

impl BodyInfo {
    pub fn new(
        name: &str,
        radius: f32,
        orbit_distance: f32,
        rotation_speed: f64,
        revolution_speed: f64,
        color: [f32; 3],
    ) -> Self {
        BodyInfo {
            name: name.to_owned(),
            radius,
            orbit_distance,
            rotation_speed,
            revolution_speed,
            color: Point3::from(color),
            has_rings: false,
        }
    }

    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }
}

impl CelestialBody {
    pub fn new(info: BodyInfo) -> Self {
        CelestialBody {
            info,
            rotation_angle: 0.0,
            revolution_angle: 0.0,
            children: vec![],
        }
    }

    pub fn with_child(mut self, child: CelestialBody) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[CelestialBody] {
        &self.children
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn revolution_angle(&self) -> f64 {
        self.revolution_angle
    }

    /// Moves this body and everything orbiting it forward by one frame.
    pub fn advance(&mut self, time_speed: f64) {
        self.revolution_angle = wrap_degrees(
            self.revolution_angle + self.info.revolution_speed * REVOLUTION_STEP * time_speed,
        );
        self.rotation_angle = wrap_degrees(
            self.rotation_angle + self.info.rotation_speed * ROTATION_STEP * time_speed,
        );

        for child in self.children.iter_mut() {
            child.advance(time_speed);
        }
    }

    /// Offset from the parent's origin to this body's center.
    pub fn orbit_offset(&self) -> Translation3<f32> {
        orbit_translation(self.info.orbit_distance, self.revolution_angle)
    }

    /// Transform from this body's spinning frame to its parent's (non-spinning)
    /// frame.
    pub fn local_frame(&self) -> Isometry3<f32> {
        Isometry3::from_parts(self.orbit_offset(), spin_rotation(self.rotation_angle))
    }
}
