pub mod mesh;
pub mod orbit;
pub mod sampling;
