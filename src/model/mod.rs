pub mod body;
pub mod clock;
pub mod system;

pub use body::{BodyInfo, CelestialBody};
pub use clock::SimulationClock;
pub use system::{Placement, SolarSystem};
