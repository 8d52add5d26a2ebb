use kiss3d::camera::Camera;
use kiss3d::context::Context;
use kiss3d::renderer::Renderer;
use kiss3d::resource::{
    AllocationType, BufferType, Effect, GPUVec, ShaderAttribute, ShaderUniform,
};

use nalgebra::{Isometry3, Matrix4, Point3};

use super::cache::{size_key, MeshCache};
use crate::consts::ORBIT_STEP_DEGREES;
use crate::math::orbit::orbit_path;

struct OrbitData {
    distance: f32,
    color: Point3<f32>,
    // Transform from the orbit's center to world space
    transform: Matrix4<f32>,
}

pub struct OrbitRenderer {
    // OpenGL stuff
    shader: Effect,
    pos: ShaderAttribute<Point3<f32>>,
    color: ShaderUniform<Point3<f32>>,
    model: ShaderUniform<Matrix4<f32>>,
    view: ShaderUniform<Matrix4<f32>>,
    proj: ShaderUniform<Matrix4<f32>>,
    line_width: f32,
    // Orbit paths as line lists, keyed by radius. Evaluated around the
    // orbit's center, in the horizontal plane.
    orbit_lines: MeshCache<u32, GPUVec<Point3<f32>>>,
    // Data storage
    orbits: Vec<OrbitData>,
}

impl OrbitRenderer {
    pub fn new() -> Self {
        let mut shader = Effect::new_from_str(VERTEX_SRC, FRAGMENT_SRC);

        shader.use_program();

        OrbitRenderer {
            pos: shader
                .get_attrib::<Point3<f32>>("position")
                .expect("Failed to get shader attribute."),
            color: shader
                .get_uniform::<Point3<f32>>("color")
                .expect("Failed to get shader uniform."),
            model: shader
                .get_uniform::<Matrix4<f32>>("model")
                .expect("Failed to get shader uniform."),
            view: shader
                .get_uniform::<Matrix4<f32>>("view")
                .expect("Failed to get shader uniform."),
            proj: shader
                .get_uniform::<Matrix4<f32>>("proj")
                .expect("Failed to get shader uniform."),
            shader,
            line_width: 1.0,
            orbit_lines: MeshCache::new(),
            orbits: vec![],
        }
    }

    /// Queues a circular orbit of the given radius, centered on the origin of
    /// `transform` and lying in its horizontal plane.
    pub fn add_orbit(&mut self, distance: f32, color: Point3<f32>, transform: Isometry3<f32>) {
        self.orbits.push(OrbitData {
            distance,
            color,
            transform: transform.to_homogeneous(),
        });
    }
}

/// Turns a polyline into a line list: (p0, p1, p1, p2, ...).
fn line_list(points: &[Point3<f32>]) -> Vec<Point3<f32>> {
    points
        .windows(2)
        .flat_map(|pts| [pts[0], pts[1]])
        .collect()
}

impl Renderer for OrbitRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        if self.orbits.is_empty() {
            return;
        }

        self.shader.use_program();
        self.pos.enable();

        camera.upload(pass, &mut self.proj, &mut self.view);

        let ctxt = Context::get();
        ctxt.line_width(self.line_width);

        for orbit in self.orbits.iter() {
            let distance = orbit.distance;
            let lines = self.orbit_lines.get_or_build(size_key(distance), || {
                let data = line_list(&orbit_path(distance, ORBIT_STEP_DEGREES));
                GPUVec::new(data, BufferType::Array, AllocationType::StaticDraw)
            });
            self.pos.bind_sub_buffer(lines, 0, 0);

            self.color.upload(&orbit.color);
            self.model.upload(&orbit.transform);

            ctxt.draw_arrays(Context::LINES, 0, lines.len() as i32);
        }

        self.pos.disable();

        self.orbits.clear();
    }
}

/// Vertex shader for orbit lines.
static VERTEX_SRC: &str = "#version 100
    attribute vec3 position;
    uniform   mat4 model;
    uniform   mat4 proj;
    uniform   mat4 view;
    void main() {
        gl_Position = proj * view * model * vec4(position, 1.0);
    }";

/// Fragment shader for orbit lines.
static FRAGMENT_SRC: &str = "#version 100
#ifdef GL_FRAGMENT_PRECISION_HIGH
   precision highp float;
#else
   precision mediump float;
#endif

    uniform vec3 color;
    void main() {
        gl_FragColor = vec4(color, 1.0);
    }";
