use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use log::info;

use self::controller::Controller;
use self::view::View;
use crate::model::SolarSystem;

pub mod camera;
pub mod controller;
mod renderers;
pub mod view;

/// All of the application's state. The window's render loop drives it one
/// frame at a time through `State::step`.
pub struct Simulation {
    view: View,
    controller: Controller,
}

impl Simulation {
    pub fn new(system: SolarSystem) -> Self {
        Self {
            view: View::new(system),
            controller: Controller::new(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Mouse events also reach the camera, through Camera::handle_event
        for event in events.iter() {
            self.controller.process_event(event, self.view.camera_mut());
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        if self.controller.quit_requested() {
            info!("Closing window");
            window.close();
            return;
        }

        self.view.update_state_by(self.controller.time_speed());
        self.view.prerender_scene(window, &self.controller);
        self.controller.increment_frame_counter();
    }
}
