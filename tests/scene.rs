use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Point3;
use rust_universe::math::orbit::orbit_path;
use rust_universe::model::{CelestialBody, SimulationClock, SolarSystem};

fn all_bodies(system: &SolarSystem) -> Vec<&CelestialBody> {
    system.placements().into_iter().map(|p| p.body).collect()
}

#[test]
fn test_scene_shape() {
    let system = SolarSystem::new();

    let sun = system.sun();
    assert_eq!(sun.info.name, "Sun");
    assert_eq!(sun.info.orbit_distance, 0.0);
    assert_eq!(system.planets().len(), 6);

    let with_moons: Vec<_> = system
        .planets()
        .iter()
        .filter(|p| !p.children().is_empty())
        .collect();
    assert_eq!(with_moons.len(), 1);
    assert_eq!(with_moons[0].info.name, "Earth");
    assert_eq!(with_moons[0].children().len(), 1);

    let with_rings: Vec<_> = all_bodies(&system)
        .into_iter()
        .filter(|b| b.info.has_rings)
        .collect();
    assert_eq!(with_rings.len(), 1);
    assert_eq!(with_rings[0].info.name, "Saturn");

    // Nothing deeper than sun -> planet -> moon
    assert!(system.placements().iter().all(|p| p.depth <= 2));
}

#[test]
fn test_planet_parameters() {
    let system = SolarSystem::new();
    let expected = [
        ("Mercury", 0.2, 3.0, 2.0, 1.5, [0.7, 0.7, 0.7]),
        ("Venus", 0.4, 4.5, 1.5, 1.2, [0.9, 0.7, 0.3]),
        ("Earth", 0.5, 6.0, 1.0, 1.0, [0.2, 0.4, 0.9]),
        ("Mars", 0.3, 7.5, 1.2, 0.8, [0.8, 0.3, 0.2]),
        ("Jupiter", 1.2, 10.0, 0.8, 0.5, [0.8, 0.6, 0.4]),
        ("Saturn", 1.0, 13.0, 0.7, 0.4, [0.9, 0.8, 0.5]),
    ];

    for (planet, (name, radius, distance, rotation, revolution, color)) in
        system.planets().iter().zip(expected.iter())
    {
        let info = &planet.info;
        assert_eq!(info.name, *name);
        assert_eq!(info.radius, *radius);
        assert_eq!(info.orbit_distance, *distance);
        assert_eq!(info.rotation_speed, *rotation);
        assert_eq!(info.revolution_speed, *revolution);
        assert_eq!(info.color, Point3::from(*color));
    }
}

#[test]
fn test_ten_frames_double_speed() {
    let mut system = SolarSystem::new();
    for _ in 0..10 {
        system.advance(2.0);
    }

    let mercury = system.find("Mercury").unwrap();
    assert_relative_eq!(mercury.revolution_angle(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(mercury.rotation_angle(), 20.0, epsilon = 1e-9);

    // The sun spins in place
    let sun = system.sun();
    assert_eq!(sun.revolution_angle(), 0.0);
    assert_relative_eq!(sun.rotation_angle(), 5.0, epsilon = 1e-9);
}

#[test]
fn test_linear_accumulation_everywhere() {
    let mut clock = SimulationClock::new();
    clock.speed_up();
    let t = clock.time_speed();

    let mut system = SolarSystem::new();
    let n = 17;
    for _ in 0..n {
        system.advance(t);
    }

    for body in all_bodies(&system) {
        let info = &body.info;
        let revolution = (n as f64 * info.revolution_speed * 0.1 * t) % 360.0;
        let rotation = (n as f64 * info.rotation_speed * 0.5 * t) % 360.0;
        assert_relative_eq!(body.revolution_angle(), revolution, epsilon = 1e-9);
        assert_relative_eq!(body.rotation_angle(), rotation, epsilon = 1e-9);
    }
}

#[test]
fn test_clock_drives_scene() {
    let mut clock = SimulationClock::new();
    let mut system = SolarSystem::new();

    system.advance(clock.time_speed());
    clock.speed_up();
    system.advance(clock.time_speed());
    clock.reset();
    system.advance(clock.time_speed());

    // 1 + 1.5 + 1 frames' worth at unit speed
    let earth = system.find("Earth").unwrap();
    assert_relative_eq!(earth.revolution_angle(), 3.5 * 0.1, epsilon = 1e-9);
}

#[test]
fn test_orbit_paths_close() {
    let system = SolarSystem::new();
    for planet in system.planets() {
        let path = orbit_path(planet.info.orbit_distance, 5);
        assert_eq!(path.len(), 73);
        assert_abs_diff_eq!(path[0], path[72], epsilon = 1e-5);
    }
}
