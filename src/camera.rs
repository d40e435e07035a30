//! Camera frame, projection and trackball math.
//!
//! The camera is stored as its camera-to-world frame; the view matrix is the
//! orthonormal inverse. [`Projection`] mirrors the zoom-based frustum the
//! vignettes drive from the mouse wheel, and [`trackball_rotation`] is the
//! classic virtual-sphere formula used by the drag-to-rotate vignettes.

use cgmath::{
    InnerSpace, Matrix, Matrix3, Matrix4, Quaternion, Rad, Rotation3, SquareMatrix, Vector2,
    Vector3, Vector4,
};
use wgpu::util::DeviceExt;

/// wgpu clip space uses z in 0..1 while cgmath produces OpenGL's -1..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Radius of the virtual trackball sphere in normalized screen units.
const TRACKBALL_SIZE: f32 = 0.8;

/// Inverts a rigid (rotation + translation) transform without a general
/// matrix inverse.
pub fn invert_orthonormal(m: Matrix4<f32>) -> Matrix4<f32> {
    let r = Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate());
    let rt = r.transpose();
    let t = -(rt * m.w.truncate());
    Matrix4::from_cols(
        rt.x.extend(0.0),
        rt.y.extend(0.0),
        rt.z.extend(0.0),
        t.extend(1.0),
    )
}

/// Projects a point on the trackball disc onto a sphere of radius `r`,
/// falling back to a hyperbolic sheet away from the center so the rotation
/// stays continuous at the rim.
fn project_to_sphere(r: f32, x: f32, y: f32) -> f32 {
    let d = (x * x + y * y).sqrt();
    if d < r * std::f32::consts::FRAC_1_SQRT_2 {
        (r * r - d * d).sqrt()
    } else {
        let t = r / std::f32::consts::SQRT_2;
        t * t / d
    }
}

/// Rotation induced by dragging from `from` to `to`, both in the normalized
/// [-1, 1] screen coordinates produced by
/// [`trackball_coords`](crate::input::trackball_coords).
///
/// Equal points yield the identity so idle frames never drift.
pub fn trackball_rotation(from: Vector2<f32>, to: Vector2<f32>) -> Quaternion<f32> {
    if from == to {
        return Quaternion::new(1.0, 0.0, 0.0, 0.0);
    }

    let p1 = Vector3::new(to.x, to.y, project_to_sphere(TRACKBALL_SIZE, to.x, to.y));
    let p2 = Vector3::new(from.x, from.y, project_to_sphere(TRACKBALL_SIZE, from.x, from.y));

    let axis = p2.cross(p1).normalize();
    let t = ((p1 - p2).magnitude() / (2.0 * TRACKBALL_SIZE)).clamp(-1.0, 1.0);
    let phi = 2.0 * t.asin();
    Quaternion::from_axis_angle(axis, Rad(phi))
}

/// A camera described by its camera-to-world frame.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub transform: Matrix4<f32>,
}

impl Camera {
    /// Camera at the world origin looking down -z.
    pub fn new() -> Self {
        Self {
            transform: Matrix4::identity(),
        }
    }

    /// Camera translated `z` units along +z, the usual vantage point for an
    /// object at the origin.
    pub fn at_z(z: f32) -> Self {
        Self {
            transform: Matrix4::from_translation(Vector3::new(0.0, 0.0, z)),
        }
    }

    /// The world-to-camera (view) matrix.
    pub fn view(&self) -> Matrix4<f32> {
        invert_orthonormal(self.transform)
    }

    pub fn position(&self) -> Vector3<f32> {
        self.transform.w.truncate()
    }

    /// Orbits the camera about the world origin by a trackball rotation.
    ///
    /// The rotation is applied in camera space, conjugated by the position of
    /// the world origin as seen from the camera, so the origin stays fixed on
    /// screen while the camera swings around it.
    pub fn trackball(&mut self, rotation: Quaternion<f32>) {
        let view = self.view();
        let center = (view * Vector4::new(0.0, 0.0, 0.0, 1.0)).truncate();
        let t1 = Matrix4::from_translation(center);
        let t2 = Matrix4::from_translation(-center);
        let view = t1 * Matrix4::from(rotation) * t2 * view;
        self.transform = invert_orthonormal(view);
    }

    /// Orbits around the world's y axis, keeping the distance to the axis.
    pub fn orbit_y(&mut self, angle: f32) {
        let view = self.view() * Matrix4::from_angle_y(Rad(angle));
        self.transform = invert_orthonormal(view);
    }

    /// Translates the view along its own z axis by `step` units.
    pub fn dolly(&mut self, step: f32) {
        let mut view = self.view();
        let dir = view.z;
        view.w -= dir * step;
        self.transform = invert_orthonormal(view);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Zoom-based projection.
///
/// `zoom_x`/`zoom_y` scale the near-plane half extents, so multiplying the
/// zoom by a wheel factor narrows the frustum and magnifies the scene. The
/// orthographic variant is used by the flat, fullscreen-quad vignettes and
/// spans a fixed -1..1 depth box so geometry at z = 0 is never clipped.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub zoom_x: f32,
    pub zoom_y: f32,
    pub near: f32,
    pub far: f32,
    pub orthogonal: bool,
}

impl Projection {
    /// Perspective projection with the aspect ratio folded into `zoom_y`.
    pub fn perspective(width: u32, height: u32) -> Self {
        Self {
            zoom_x: 1.0,
            zoom_y: height as f32 / width as f32,
            near: 1.0,
            far: 100.0,
            orthogonal: false,
        }
    }

    /// Orthographic projection with unit zoom on both axes.
    pub fn orthographic() -> Self {
        Self {
            zoom_x: 1.0,
            zoom_y: 1.0,
            near: 1.0,
            far: 100.0,
            orthogonal: true,
        }
    }

    /// Scales both zoom axes, preserving their ratio.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_x *= factor;
        self.zoom_y *= factor;
    }

    /// Re-derives `zoom_y` from `zoom_x` for a new viewport aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.orthogonal {
            self.zoom_y = self.zoom_x * height as f32 / width as f32;
        }
    }

    /// The clip-space matrix, already corrected for wgpu's depth range.
    pub fn matrix(&self) -> Matrix4<f32> {
        let proj = if self.orthogonal {
            cgmath::ortho(
                -1.0 / self.zoom_x,
                1.0 / self.zoom_x,
                -1.0 / self.zoom_y,
                1.0 / self.zoom_y,
                -1.0,
                1.0,
            )
        } else {
            cgmath::frustum(
                -self.near / self.zoom_x,
                self.near / self.zoom_x,
                -self.near / self.zoom_y,
                self.near / self.zoom_y,
                self.near,
                self.far,
            )
        };
        OPENGL_TO_WGPU_MATRIX * proj
    }
}

/// The uniform block shared by the mesh materials.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Matrix4::identity().into(),
            light_dir: [0.0, 0.0, 1.0, 0.0],
        }
    }

    pub fn update(&mut self, camera: &Camera, projection: &Projection, light_dir: Vector4<f32>) {
        self.view_proj = (projection.matrix() * camera.view()).into();
        self.light_dir = light_dir.into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera plus everything the GPU needs to consume it: the uniform, its
/// buffer, and a bind group at `@group(1)` of the mesh materials.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub projection: Projection,
    pub light_dir: Vector4<f32>,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, camera: Camera, projection: Projection) -> Self {
        let light_dir = Vector4::new(0.2, 0.3, 0.4, 0.0).normalize();
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection, light_dir);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = camera_bind_group_layout(device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            camera,
            projection,
            light_dir,
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Recomputes the uniform from the current camera state and uploads it.
    pub fn update(&mut self, queue: &wgpu::Queue) {
        self.uniform
            .update(&self.camera, &self.projection, self.light_dir);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

pub fn camera_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("camera_bind_group_layout"),
    })
}
