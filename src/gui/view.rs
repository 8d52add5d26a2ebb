use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::Window;
use nalgebra::{Isometry3, Point2, Point3, Vector3};

use super::camera::OrbitCamera;
use super::controller::{Controller, KEY_HELP};
use super::renderers::CompoundRenderer;
use crate::consts::{
    BODY_TESSELLATION, MOON_TESSELLATION, ORBIT_PATH_COLOR, RING_COLOR, RING_INNER_RATIO,
    RING_OUTER_RATIO, RING_TILT_DEGREES,
};
use crate::math::orbit::rotation_degrees;
use crate::model::{Placement, SolarSystem};

// Room left for the FPS label at the right edge
const FPS_LABEL_WIDTH: f32 = 250.0;

/// Top-right corner for the FPS label. Text is placed in framebuffer pixels.
fn fps_label_position(framebuffer_width: u32) -> Point2<f32> {
    let x = (framebuffer_width as f32 - FPS_LABEL_WIDTH).max(0.0);
    Point2::new(x, 0.0)
}

pub struct View {
    // Object state
    system: SolarSystem,
    // Camera
    camera: OrbitCamera,
    // Misc
    renderer: CompoundRenderer,
}

impl View {
    pub fn new(system: SolarSystem) -> Self {
        View {
            system,
            camera: OrbitCamera::new(),
            renderer: CompoundRenderer::new(),
        }
    }

    pub fn update_state_by(&mut self, time_speed: f64) {
        self.system.advance(time_speed);
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    // Queues up everything for the renderer, which draws it once step returns
    pub fn prerender_scene(&mut self, window: &mut Window, controller: &Controller) {
        let placements = self.system.placements();

        // The sun is the light
        if let Some(sun) = placements.first() {
            self.renderer.set_light_position(sun.center());
        }

        for placement in placements.iter() {
            Self::draw_body(&mut self.renderer, placement);
        }

        // Draw text
        let default_font = kiss3d::text::Font::default();
        let text_color = Point3::new(1.0, 1.0, 1.0);
        window.draw_text(
            &self.left_hand_text(controller.time_speed()),
            &Point2::origin(),
            40.0,
            &default_font,
            &text_color,
        );
        window.draw_text(
            &format!("FPS: {:.0}", controller.fps()),
            &fps_label_position(self.camera.viewport().0),
            40.0,
            &default_font,
            &text_color,
        );
    }

    fn draw_body(renderer: &mut CompoundRenderer, placement: &Placement) {
        let info = &placement.body.info;

        // The orbit is drawn around the parent, and doesn't spin with the body
        if info.orbit_distance > 0.0 {
            renderer.draw_orbit(
                info.orbit_distance,
                Point3::from(ORBIT_PATH_COLOR),
                Isometry3::translation(
                    placement.parent_origin.x,
                    placement.parent_origin.y,
                    placement.parent_origin.z,
                ),
            );
        }

        let tessellation = if placement.depth >= 2 {
            MOON_TESSELLATION
        } else {
            BODY_TESSELLATION
        };
        renderer.draw_sphere(info.radius, tessellation, info.color, placement.frame);

        if info.has_rings {
            let tilt = rotation_degrees(&Vector3::x_axis(), RING_TILT_DEGREES.into());
            renderer.draw_ring(
                info.radius * RING_INNER_RATIO,
                info.radius * RING_OUTER_RATIO,
                Point3::from(RING_COLOR),
                placement.frame * tilt,
            );
        }
    }

    fn left_hand_text(&self, time_speed: f64) -> String {
        format!(
            "Time speed: {:.2}x
Camera distance: {:.0}
{}",
            time_speed,
            self.camera.distance(),
            KEY_HELP,
        )
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.renderer), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WINDOW_WIDTH;

    #[test]
    fn test_fps_label_on_screen() {
        // Standard and doubled (hidpi) framebuffers both keep it in view
        for &width in [WINDOW_WIDTH, 2 * WINDOW_WIDTH, 640].iter() {
            let pos = fps_label_position(width);
            assert_eq!(pos.x, width as f32 - 250.0);
            assert!(pos.x < width as f32);
            assert_eq!(pos.y, 0.0);
        }

        // Too narrow for the label: pin it to the left edge
        assert_eq!(fps_label_position(100).x, 0.0);
    }
}
