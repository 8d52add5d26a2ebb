use kiss3d::camera::Camera;
use kiss3d::context::Context;
use kiss3d::renderer::Renderer;
use kiss3d::resource::{
    AllocationType, BufferType, Effect, GPUVec, ShaderAttribute, ShaderUniform,
};
use nalgebra::{Isometry3, Matrix4, Point3};

use super::cache::{size_key, MeshCache};
use crate::consts::{
    LIGHT_AMBIENT, LIGHT_DIFFUSE, LIGHT_SPECULAR, MATERIAL_SHININESS, MATERIAL_SPECULAR,
    RING_STEP_DEGREES, SCENE_AMBIENT,
};
use crate::math::mesh::{ring_triangles, sphere_triangles, Vertex};

/// A single point light plus the material response shared by every surface.
/// Surface colors feed the ambient and diffuse terms.
#[derive(Debug, Clone)]
pub struct Lighting {
    pub position: Point3<f32>,
    pub scene_ambient: Point3<f32>,
    pub ambient: Point3<f32>,
    pub diffuse: Point3<f32>,
    pub specular: Point3<f32>,
    pub material_specular: Point3<f32>,
    pub shininess: f32,
}

impl Lighting {
    pub fn new() -> Self {
        Lighting {
            position: Point3::origin(),
            scene_ambient: Point3::from(SCENE_AMBIENT),
            ambient: Point3::from(LIGHT_AMBIENT),
            diffuse: Point3::from(LIGHT_DIFFUSE),
            specular: Point3::from(LIGHT_SPECULAR),
            material_specular: Point3::from(MATERIAL_SPECULAR),
            shininess: MATERIAL_SHININESS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    // Unit sphere, scaled up by the transform
    Sphere { slices: u32, stacks: u32 },
    Ring { inner_radius: f32, outer_radius: f32 },
}

struct SurfaceData {
    shape: Shape,
    transform: Matrix4<f32>,
    color: Point3<f32>,
}

struct LightUniforms {
    position: ShaderUniform<Point3<f32>>,
    scene_ambient: ShaderUniform<Point3<f32>>,
    ambient: ShaderUniform<Point3<f32>>,
    diffuse: ShaderUniform<Point3<f32>>,
    specular: ShaderUniform<Point3<f32>>,
    material_specular: ShaderUniform<Point3<f32>>,
    shininess: ShaderUniform<f32>,
}

pub struct BodyRenderer {
    // OpenGL stuff
    shader: Effect,
    pos: ShaderAttribute<Point3<f32>>,
    normal: ShaderAttribute<Point3<f32>>,
    model: ShaderUniform<Matrix4<f32>>,
    view: ShaderUniform<Matrix4<f32>>,
    proj: ShaderUniform<Matrix4<f32>>,
    eye: ShaderUniform<Point3<f32>>,
    color: ShaderUniform<Point3<f32>>,
    light: LightUniforms,
    // Data storage
    lighting: Lighting,
    // Unit spheres, keyed by (slices, stacks)
    sphere_meshes: MeshCache<(u32, u32), GPUVec<Point3<f32>>>,
    // Rings, keyed by (inner, outer) radius
    ring_meshes: MeshCache<(u32, u32), GPUVec<Point3<f32>>>,
    surfaces: Vec<SurfaceData>,
}

impl BodyRenderer {
    pub fn new() -> Self {
        let mut shader = Effect::new_from_str(VERTEX_SRC, FRAGMENT_SRC);

        shader.use_program();

        macro_rules! uniform {
            ($type:ty, $name:expr) => {
                shader
                    .get_uniform::<$type>($name)
                    .expect("Failed to get shader uniform.")
            };
        }

        let light = LightUniforms {
            position: uniform!(Point3<f32>, "light_position"),
            scene_ambient: uniform!(Point3<f32>, "scene_ambient"),
            ambient: uniform!(Point3<f32>, "light_ambient"),
            diffuse: uniform!(Point3<f32>, "light_diffuse"),
            specular: uniform!(Point3<f32>, "light_specular"),
            material_specular: uniform!(Point3<f32>, "material_specular"),
            shininess: uniform!(f32, "shininess"),
        };

        BodyRenderer {
            pos: shader
                .get_attrib::<Point3<f32>>("position")
                .expect("Failed to get shader attribute."),
            normal: shader
                .get_attrib::<Point3<f32>>("normal")
                .expect("Failed to get shader attribute."),
            model: uniform!(Matrix4<f32>, "model"),
            view: uniform!(Matrix4<f32>, "view"),
            proj: uniform!(Matrix4<f32>, "proj"),
            eye: uniform!(Point3<f32>, "eye"),
            color: uniform!(Point3<f32>, "color"),
            light,
            shader,
            lighting: Lighting::new(),
            sphere_meshes: MeshCache::new(),
            ring_meshes: MeshCache::new(),
            surfaces: vec![],
        }
    }

    pub fn set_light_position(&mut self, position: Point3<f32>) {
        self.lighting.position = position;
    }

    pub fn add_sphere(
        &mut self,
        radius: f32,
        (slices, stacks): (u32, u32),
        color: Point3<f32>,
        transform: Isometry3<f32>,
    ) {
        self.surfaces.push(SurfaceData {
            shape: Shape::Sphere { slices, stacks },
            transform: transform.to_homogeneous() * Matrix4::new_scaling(radius),
            color,
        });
    }

    pub fn add_ring(
        &mut self,
        inner_radius: f32,
        outer_radius: f32,
        color: Point3<f32>,
        transform: Isometry3<f32>,
    ) {
        self.surfaces.push(SurfaceData {
            shape: Shape::Ring {
                inner_radius,
                outer_radius,
            },
            transform: transform.to_homogeneous(),
            color,
        });
    }

    fn upload_lighting(&mut self) {
        let lighting = &self.lighting;
        let uniforms = &mut self.light;
        uniforms.position.upload(&lighting.position);
        uniforms.scene_ambient.upload(&lighting.scene_ambient);
        uniforms.ambient.upload(&lighting.ambient);
        uniforms.diffuse.upload(&lighting.diffuse);
        uniforms.specular.upload(&lighting.specular);
        uniforms.material_specular.upload(&lighting.material_specular);
        uniforms.shininess.upload(&lighting.shininess);
    }
}

/// Packs vertices as (position, normal, position, normal, ...).
fn vertex_buffer(vertices: Vec<Vertex>, allocation: AllocationType) -> GPUVec<Point3<f32>> {
    let data = vertices
        .into_iter()
        .flat_map(|v| [v.position, Point3::from(v.normal)])
        .collect();
    GPUVec::new(data, BufferType::Array, allocation)
}

fn draw_triangles(
    pos: &mut ShaderAttribute<Point3<f32>>,
    normal: &mut ShaderAttribute<Point3<f32>>,
    buffer: &mut GPUVec<Point3<f32>>,
) {
    pos.bind_sub_buffer(buffer, 1, 0);
    normal.bind_sub_buffer(buffer, 1, 1);

    let ctxt = Context::get();
    ctxt.draw_arrays(Context::TRIANGLES, 0, (buffer.len() / 2) as i32);
}

impl Renderer for BodyRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        if self.surfaces.is_empty() {
            return;
        }

        let ctxt = Context::get();
        ctxt.enable(Context::DEPTH_TEST);

        self.shader.use_program();
        self.pos.enable();
        self.normal.enable();

        camera.upload(pass, &mut self.proj, &mut self.view);
        self.eye.upload(&camera.eye());
        self.upload_lighting();

        for surface in self.surfaces.iter() {
            self.model.upload(&surface.transform);
            self.color.upload(&surface.color);

            match surface.shape {
                Shape::Sphere { slices, stacks } => {
                    let buffer = self.sphere_meshes.get_or_build((slices, stacks), || {
                        vertex_buffer(
                            sphere_triangles(1.0, slices, stacks),
                            AllocationType::StaticDraw,
                        )
                    });
                    draw_triangles(&mut self.pos, &mut self.normal, buffer);
                }
                Shape::Ring {
                    inner_radius,
                    outer_radius,
                } => {
                    let key = (size_key(inner_radius), size_key(outer_radius));
                    let buffer = self.ring_meshes.get_or_build(key, || {
                        vertex_buffer(
                            ring_triangles(inner_radius, outer_radius, RING_STEP_DEGREES),
                            AllocationType::StaticDraw,
                        )
                    });
                    draw_triangles(&mut self.pos, &mut self.normal, buffer);
                }
            }
        }

        self.pos.disable();
        self.normal.disable();

        self.surfaces.clear();
    }
}

/// Vertex shader for lit surfaces. Lighting is done in world space.
static VERTEX_SRC: &str = "#version 100
    attribute vec3 position;
    attribute vec3 normal;
    varying   vec3 vWorldPos;
    varying   vec3 vNormal;
    uniform   mat4 model;
    uniform   mat4 proj;
    uniform   mat4 view;
    void main() {
        vec4 world = model * vec4(position, 1.0);
        vWorldPos = world.xyz;
        vNormal = (model * vec4(normal, 0.0)).xyz;
        gl_Position = proj * view * world;
    }";

/// Fragment shader for lit surfaces: Blinn-Phong with the surface color
/// standing in for the ambient and diffuse material.
static FRAGMENT_SRC: &str = "#version 100
#ifdef GL_FRAGMENT_PRECISION_HIGH
   precision highp float;
#else
   precision mediump float;
#endif

    varying vec3 vWorldPos;
    varying vec3 vNormal;
    uniform vec3 eye;
    uniform vec3 color;
    uniform vec3 light_position;
    uniform vec3 scene_ambient;
    uniform vec3 light_ambient;
    uniform vec3 light_diffuse;
    uniform vec3 light_specular;
    uniform vec3 material_specular;
    uniform float shininess;
    void main() {
        vec3 n = normalize(vNormal);
        vec3 l = normalize(light_position - vWorldPos);
        vec3 v = normalize(eye - vWorldPos);
        vec3 h = normalize(l + v);

        float diffuse = max(dot(n, l), 0.0);
        float specular = 0.0;
        if (diffuse > 0.0) {
            specular = pow(max(dot(n, h), 0.0), shininess);
        }

        vec3 lit = (scene_ambient + light_ambient) * color
            + diffuse * light_diffuse * color
            + specular * light_specular * material_specular;
        gl_FragColor = vec4(clamp(lit, 0.0, 1.0), 1.0);
    }";
