use kiss3d::camera::Camera;
use kiss3d::event::{Action, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point2, Point3, Vector3};

use crate::consts::{
    CAMERA_CLIP_PLANES, CAMERA_DISTANCE_LIMITS, CAMERA_DRAG_SENSITIVITY, CAMERA_FOVY_DEGREES,
    CAMERA_PITCH_LIMIT, CAMERA_ZOOM_STEP, DEFAULT_CAMERA_DISTANCE, WINDOW_HEIGHT, WINDOW_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last_cursor: Point2<f32> },
}

// A stripped-down ArcBall. The camera always looks at the world origin, with
// the y-axis as up, from a point described by its distance and two angles:
// yaw swings around the y-axis, pitch lifts above or below the xz-plane.
// Clicking and dragging with the left button adjusts the angles; the scroll
// wheel moves the camera closer or further in fixed steps.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    // -- position --
    distance: f32,
    yaw: f32,   // degrees
    pitch: f32, // degrees
    // -- perspective --
    width: u32,
    height: u32,
    // -- interaction --
    drag: DragState,
    cursor: Point2<f32>,
}

impl OrbitCamera {
    pub fn new() -> Self {
        OrbitCamera {
            distance: DEFAULT_CAMERA_DISTANCE,
            yaw: 0.0,
            pitch: 0.0,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            drag: DragState::Idle,
            cursor: Point2::origin(),
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Framebuffer size, in physical pixels.
    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn begin_drag(&mut self, cursor: Point2<f32>) {
        self.cursor = cursor;
        self.drag = DragState::Dragging {
            last_cursor: cursor,
        };
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Tracks the cursor, and turns the camera if a drag is in progress.
    pub fn move_cursor(&mut self, cursor: Point2<f32>) {
        self.cursor = cursor;
        if let DragState::Dragging { last_cursor } = self.drag {
            let delta = cursor - last_cursor;
            self.rotate(
                delta.x * CAMERA_DRAG_SENSITIVITY,
                delta.y * CAMERA_DRAG_SENSITIVITY,
            );
            self.drag = DragState::Dragging {
                last_cursor: cursor,
            };
        }
    }

    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch = nalgebra::clamp(
            self.pitch + dpitch,
            -CAMERA_PITCH_LIMIT,
            CAMERA_PITCH_LIMIT,
        );
    }

    pub fn zoom_in(&mut self) {
        self.distance = f32::max(CAMERA_DISTANCE_LIMITS.0, self.distance - CAMERA_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.distance = f32::min(CAMERA_DISTANCE_LIMITS.1, self.distance + CAMERA_ZOOM_STEP);
    }

    /// Back to the starting view. A drag in progress is left alone.
    pub fn reset(&mut self) {
        self.distance = DEFAULT_CAMERA_DISTANCE;
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        // Minimized windows report zero; keep the last good aspect ratio
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(
            self.width as f32 / self.height as f32,
            CAMERA_FOVY_DEGREES.to_radians(),
            CAMERA_CLIP_PLANES.0,
            CAMERA_CLIP_PLANES.1,
        )
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera for OrbitCamera {
    fn handle_event(&mut self, _canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                self.move_cursor(Point2::new(x as f32, y as f32));
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                self.begin_drag(self.cursor);
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
                self.end_drag();
            }
            WindowEvent::Scroll(_, off, _) => {
                // wheel towards the screen == move closer
                if off > 0.0 {
                    self.zoom_in();
                } else if off < 0.0 {
                    self.zoom_out();
                }
            }
            WindowEvent::FramebufferSize(w, h) => {
                self.set_viewport(w, h);
            }
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Point3::new(
            self.distance * pitch.cos() * yaw.sin(),
            self.distance * pitch.sin(),
            self.distance * pitch.cos() * yaw.cos(),
        )
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye(), &Point3::origin(), &Vector3::y())
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation()
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.projection().znear(), self.projection().zfar())
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
