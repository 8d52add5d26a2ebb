use kiss3d::light::Light;
use kiss3d::window::Window;
use log::info;

use rust_universe::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use rust_universe::gui::Simulation;
use rust_universe::model::SolarSystem;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    let mut window = Window::new_with_size(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT);
    window.set_background_color(0.0, 0.0, 0.0);
    // Only used by the built-in scene graph, which stays empty
    window.set_light(Light::Absolute(nalgebra::Point3::origin()));

    let system = SolarSystem::new();
    info!(
        "Starting with {} planets around the {}",
        system.planets().len(),
        system.sun().info.name
    );

    let simulation = Simulation::new(system);
    window.render_loop(simulation);
    info!("Goodbye");
}
