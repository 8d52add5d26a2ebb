// Window
pub const WINDOW_TITLE: &str = "pyUniverse";
pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 800;

// Per-frame scaling of the body rates. Rotation runs faster than revolution.
pub const REVOLUTION_STEP: f64 = 0.1;
pub const ROTATION_STEP: f64 = 0.5;

// Clock
pub const DEFAULT_TIME_SPEED: f64 = 1.0;
pub const TIME_SPEED_FACTOR: f64 = 1.5;

// Camera
pub const DEFAULT_CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_DISTANCE_LIMITS: (f32, f32) = (5.0, 50.0);
pub const CAMERA_ZOOM_STEP: f32 = 1.0;
pub const CAMERA_PITCH_LIMIT: f32 = 89.0;
pub const CAMERA_DRAG_SENSITIVITY: f32 = 0.5;
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_CLIP_PLANES: (f32, f32) = (0.1, 100.0);

// Tessellation, as (slices, stacks)
pub const BODY_TESSELLATION: (u32, u32) = (50, 50);
pub const MOON_TESSELLATION: (u32, u32) = (30, 30);
pub const RING_STEP_DEGREES: u32 = 10;
pub const ORBIT_STEP_DEGREES: u32 = 5;

// Rings, relative to the radius of the body that carries them
pub const RING_INNER_RATIO: f32 = 1.5;
pub const RING_OUTER_RATIO: f32 = 2.2;
pub const RING_TILT_DEGREES: f32 = 45.0;
pub const RING_COLOR: [f32; 3] = [0.8, 0.7, 0.4];

pub const ORBIT_PATH_COLOR: [f32; 3] = [0.3, 0.3, 0.3];

// Lighting
pub const SCENE_AMBIENT: [f32; 3] = [0.2, 0.2, 0.2];
pub const LIGHT_AMBIENT: [f32; 3] = [0.2, 0.2, 0.2];
pub const LIGHT_DIFFUSE: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_SPECULAR: [f32; 3] = [1.0, 1.0, 1.0];
pub const MATERIAL_SPECULAR: [f32; 3] = [1.0, 1.0, 1.0];
pub const MATERIAL_SHININESS: f32 = 50.0;
