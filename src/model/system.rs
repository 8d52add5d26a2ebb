use log::debug;
use nalgebra::{Isometry3, Point3, Translation3};

use super::body::{BodyInfo, CelestialBody};

/// Where a body sits this frame, in world coordinates.
#[derive(Debug, Clone)]
pub struct Placement<'sys> {
    pub body: &'sys CelestialBody,
    // 0 for the sun, 1 for planets, 2 for moons
    pub depth: usize,
    /// Center of the orbit this body travels on.
    pub parent_origin: Point3<f32>,
    /// Transform from the body's spinning frame to world space.
    pub frame: Isometry3<f32>,
}

impl Placement<'_> {
    pub fn center(&self) -> Point3<f32> {
        self.frame * Point3::origin()
    }
}

#[derive(Debug, Clone)]
pub struct SolarSystem {
    sun: CelestialBody,
}

impl SolarSystem {
    /// The fixed scene: the sun, six planets in order of distance, and the
    /// earth's moon. Saturn carries the only set of rings.
    pub fn new() -> Self {
        let body = |name, radius, distance, rotation, revolution, color| {
            CelestialBody::new(BodyInfo::new(name, radius, distance, rotation, revolution, color))
        };

        let moon = body("Moon", 0.1, 1.0, 3.0, 2.0, [0.8, 0.8, 0.8]);
        let saturn = CelestialBody::new(
            BodyInfo::new("Saturn", 1.0, 13.0, 0.7, 0.4, [0.9, 0.8, 0.5]).with_rings(),
        );

        let sun = body("Sun", 2.0, 0.0, 0.5, 0.0, [1.0, 0.8, 0.0])
            .with_child(body("Mercury", 0.2, 3.0, 2.0, 1.5, [0.7, 0.7, 0.7]))
            .with_child(body("Venus", 0.4, 4.5, 1.5, 1.2, [0.9, 0.7, 0.3]))
            .with_child(body("Earth", 0.5, 6.0, 1.0, 1.0, [0.2, 0.4, 0.9]).with_child(moon))
            .with_child(body("Mars", 0.3, 7.5, 1.2, 0.8, [0.8, 0.3, 0.2]))
            .with_child(body("Jupiter", 1.2, 10.0, 0.8, 0.5, [0.8, 0.6, 0.4]))
            .with_child(saturn);

        let system = SolarSystem { sun };
        debug!("Built solar system with {} bodies", system.placements().len());
        system
    }

    pub fn sun(&self) -> &CelestialBody {
        &self.sun
    }

    pub fn planets(&self) -> &[CelestialBody] {
        self.sun.children()
    }

    /// Depth-first search by name, case-insensitive.
    pub fn find(&self, name: &str) -> Option<&CelestialBody> {
        fn search<'a>(body: &'a CelestialBody, name: &str) -> Option<&'a CelestialBody> {
            if body.info.name.eq_ignore_ascii_case(name) {
                return Some(body);
            }
            body.children().iter().find_map(|child| search(child, name))
        }
        search(&self.sun, name)
    }

    /// Moves every body forward by one frame.
    pub fn advance(&mut self, time_speed: f64) {
        self.sun.advance(time_speed);
    }

    /// Every body with its world placement, in draw order: the sun, then each
    /// planet followed by its moons.
    ///
    /// A body orbits its parent's center; the parent's own spin does not carry
    /// its moons around.
    pub fn placements(&self) -> Vec<Placement<'_>> {
        fn visit<'a>(
            body: &'a CelestialBody,
            depth: usize,
            parent_origin: Point3<f32>,
            out: &mut Vec<Placement<'a>>,
        ) {
            let frame = Translation3::from(parent_origin.coords) * body.local_frame();
            let placement = Placement {
                body,
                depth,
                parent_origin,
                frame,
            };
            let center = placement.center();
            out.push(placement);

            for child in body.children() {
                visit(child, depth + 1, center, out);
            }
        }

        let mut out = vec![];
        visit(&self.sun, 0, Point3::origin(), &mut out);
        out
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}
