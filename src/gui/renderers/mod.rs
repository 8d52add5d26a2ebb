use kiss3d::camera::Camera;
use kiss3d::renderer::Renderer;
use nalgebra::{Isometry3, Point3};

use self::body_renderer::BodyRenderer;
use self::orbit_renderer::OrbitRenderer;

mod body_renderer;
mod cache;
mod orbit_renderer;

/// The three drawing primitives. None of them look at bodies directly; they
/// take sizes, colors and a transform to the primitive's local frame.
pub struct CompoundRenderer {
    body_renderer: BodyRenderer,
    orbit_renderer: OrbitRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        CompoundRenderer {
            body_renderer: BodyRenderer::new(),
            orbit_renderer: OrbitRenderer::new(),
        }
    }

    pub fn set_light_position(&mut self, position: Point3<f32>) {
        self.body_renderer.set_light_position(position);
    }

    /// Smooth-shaded sphere centered on the transform's origin.
    pub fn draw_sphere(
        &mut self,
        radius: f32,
        tessellation: (u32, u32),
        color: Point3<f32>,
        transform: Isometry3<f32>,
    ) {
        self.body_renderer
            .add_sphere(radius, tessellation, color, transform);
    }

    /// Flat annulus in the transform's horizontal plane.
    pub fn draw_ring(
        &mut self,
        inner_radius: f32,
        outer_radius: f32,
        color: Point3<f32>,
        transform: Isometry3<f32>,
    ) {
        self.body_renderer
            .add_ring(inner_radius, outer_radius, color, transform);
    }

    /// Closed circle around the transform's origin, in its horizontal plane.
    pub fn draw_orbit(&mut self, distance: f32, color: Point3<f32>, transform: Isometry3<f32>) {
        self.orbit_renderer.add_orbit(distance, color, transform);
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.orbit_renderer.render(pass, camera);
        self.body_renderer.render(pass, camera);
    }
}
