//! Vertex types, GPU meshes and the geometry builders the vignettes share.
//!
//! The builders are plain functions returning vertex and index vectors so
//! they can be inspected without a GPU; [`Mesh`] uploads the result.

use wgpu::util::DeviceExt;

/// Position + normal + texture coordinates, the layout used by the textured
/// and raymarched vignettes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Position + normal + one packed RGBA color word, used by the pointcloud
/// vignette.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: u32,
}

impl ColorVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Uint32,
                },
            ],
        }
    }
}

/// Screen-space position + atlas coordinates + text color, the glyph-quad
/// layout of the font material.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 3],
}

impl TextVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TextVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// An uploaded vertex + index buffer pair.
#[derive(Debug)]
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

impl Mesh {
    pub fn new<V: bytemuck::Pod>(device: &wgpu::Device, vertices: &[V], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            num_indices: indices.len() as u32,
        }
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.num_indices, 0, 0..1);
    }
}

// Face normals, cycled so plane i+2 and i+4 span the face of plane i.
#[rustfmt::skip]
const CUBE_PLANES: [[f32; 3]; 10] = [
    [  1.0, 0.0, 0.0 ],
    [ -1.0, 0.0, 0.0 ],
    [ 0.0,  1.0, 0.0 ],
    [ 0.0, -1.0, 0.0 ],
    [ 0.0, 0.0,  1.0 ],
    [ 0.0, 0.0, -1.0 ],
    [  1.0, 0.0, 0.0 ],
    [ -1.0, 0.0, 0.0 ],
    [ 0.0,  1.0, 0.0 ],
    [ 0.0, -1.0, 0.0 ],
];

/// A unit cube (half extent 1) with 4 vertices per face and outward normals.
pub fn cube() -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for face in 0..6usize {
        for j in 0..4usize {
            let mut s0 = if (j + 0) & 2 != 0 { -1.0f32 } else { 1.0 };
            let s1 = if (j + 1) & 2 != 0 { -1.0f32 } else { 1.0 };
            if face & 1 == 1 {
                s0 = -s0;
            }
            let mut position = [0.0f32; 3];
            for k in 0..3 {
                position[k] = CUBE_PLANES[face][k]
                    + s0 * CUBE_PLANES[face + 2][k]
                    + s1 * CUBE_PLANES[face + 4][k];
            }
            vertices.push(Vertex {
                position,
                normal: CUBE_PLANES[face],
                tex_coords: [
                    if (j + 0) & 2 != 0 { 1.0 } else { 0.0 },
                    if (j + 1) & 2 != 0 { 1.0 } else { 0.0 },
                ],
            });
        }
        let b = (face * 4) as u32;
        indices.extend_from_slice(&[b + 3, b + 2, b + 1, b + 3, b + 1, b + 0]);
    }
    (vertices, indices)
}

// position xyz, normal xyz, uv, one face per six rows
#[rustfmt::skip]
const SKYBOX_VERTICES: [f32; 288] = [
    // back face
    -1.0, -1.0, -1.0,  0.0,  0.0, -1.0, 0.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  0.0, -1.0, 1.0, 1.0,
     1.0, -1.0, -1.0,  0.0,  0.0, -1.0, 1.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  0.0, -1.0, 1.0, 1.0,
    -1.0, -1.0, -1.0,  0.0,  0.0, -1.0, 0.0, 0.0,
    -1.0,  1.0, -1.0,  0.0,  0.0, -1.0, 0.0, 1.0,
    // front face
    -1.0, -1.0,  1.0,  0.0,  0.0,  1.0, 0.0, 0.0,
     1.0, -1.0,  1.0,  0.0,  0.0,  1.0, 1.0, 0.0,
     1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 1.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 1.0, 1.0,
    -1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 0.0, 1.0,
    -1.0, -1.0,  1.0,  0.0,  0.0,  1.0, 0.0, 0.0,
    // left face
    -1.0,  1.0,  1.0, -1.0,  0.0,  0.0, 1.0, 0.0,
    -1.0,  1.0, -1.0, -1.0,  0.0,  0.0, 1.0, 1.0,
    -1.0, -1.0, -1.0, -1.0,  0.0,  0.0, 0.0, 1.0,
    -1.0, -1.0, -1.0, -1.0,  0.0,  0.0, 0.0, 1.0,
    -1.0, -1.0,  1.0, -1.0,  0.0,  0.0, 0.0, 0.0,
    -1.0,  1.0,  1.0, -1.0,  0.0,  0.0, 1.0, 0.0,
    // right face
     1.0,  1.0,  1.0,  1.0,  0.0,  0.0, 1.0, 0.0,
     1.0, -1.0, -1.0,  1.0,  0.0,  0.0, 0.0, 1.0,
     1.0,  1.0, -1.0,  1.0,  0.0,  0.0, 1.0, 1.0,
     1.0, -1.0, -1.0,  1.0,  0.0,  0.0, 0.0, 1.0,
     1.0,  1.0,  1.0,  1.0,  0.0,  0.0, 1.0, 0.0,
     1.0, -1.0,  1.0,  1.0,  0.0,  0.0, 0.0, 0.0,
    // bottom face
    -1.0, -1.0, -1.0,  0.0, -1.0,  0.0, 0.0, 1.0,
     1.0, -1.0, -1.0,  0.0, -1.0,  0.0, 1.0, 1.0,
     1.0, -1.0,  1.0,  0.0, -1.0,  0.0, 1.0, 0.0,
     1.0, -1.0,  1.0,  0.0, -1.0,  0.0, 1.0, 0.0,
    -1.0, -1.0,  1.0,  0.0, -1.0,  0.0, 0.0, 0.0,
    -1.0, -1.0, -1.0,  0.0, -1.0,  0.0, 0.0, 1.0,
    // top face
    -1.0,  1.0, -1.0,  0.0,  1.0,  0.0, 0.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  1.0,  0.0, 1.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  1.0,  0.0, 1.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  1.0,  0.0, 1.0, 0.0,
    -1.0,  1.0, -1.0,  0.0,  1.0,  0.0, 0.0, 1.0,
    -1.0,  1.0,  1.0,  0.0,  1.0,  0.0, 0.0, 0.0,
];

/// The cube used as a skybox: 36 independent vertices, winding mixed so the
/// environment stays visible from inside with culling disabled.
pub fn skybox() -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(36);
    for row in SKYBOX_VERTICES.chunks_exact(8) {
        vertices.push(Vertex {
            position: [row[0], row[1], row[2]],
            normal: [row[3], row[4], row[5]],
            tex_coords: [row[6], row[7]],
        });
    }
    let indices = (0..36u32).collect();
    (vertices, indices)
}

/// A z = 0 quad spanning [-1, 1] on both axes; fullscreen under the
/// orthographic projection.
pub fn quad() -> (Vec<Vertex>, Vec<u32>) {
    let corners = [
        ([-1.0, -1.0], [0.0, 0.0]),
        ([1.0, -1.0], [1.0, 0.0]),
        ([1.0, 1.0], [1.0, 1.0]),
        ([-1.0, 1.0], [0.0, 1.0]),
    ];
    let vertices = corners
        .iter()
        .map(|(p, uv)| Vertex {
            position: [p[0], p[1], 0.0],
            normal: [0.0, 0.0, 1.0],
            tex_coords: *uv,
        })
        .collect();
    (vertices, vec![0, 1, 2, 0, 2, 3])
}

/// A theta/phi lattice on the unit sphere; poles are duplicated, which is
/// fine for a point set.
pub fn sphere_points(nx: u32, ny: u32) -> Vec<[f32; 3]> {
    let mut points = Vec::with_capacity((nx * ny) as usize);
    for x in 0..nx {
        for y in 0..ny {
            let theta = x as f64 / (nx - 1) as f64 * 2.0 * std::f64::consts::PI;
            let phi = y as f64 / (ny - 1) as f64 * std::f64::consts::PI;
            points.push([
                (theta.cos() * phi.sin()) as f32,
                (theta.sin() * phi.sin()) as f32,
                phi.cos() as f32,
            ]);
        }
    }
    points
}

/// Expands each point into a small quad spanned by two axes perpendicular to
/// it, so a pointcloud on the sphere renders as view-independent discs.
///
/// The span axes come from crossing the point with the unit axis of its
/// smallest component, which stays numerically stable over the whole sphere.
pub fn point_quads(points: &[[f32; 3]], colors: &[u32], eps: f32) -> (Vec<ColorVertex>, Vec<u32>) {
    assert_eq!(points.len(), colors.len());
    let mut vertices = Vec::with_capacity(points.len() * 4);
    let mut indices = Vec::with_capacity(points.len() * 6);

    for (j, pt) in points.iter().enumerate() {
        let mut smallest = 0;
        if pt[1].abs() < pt[smallest].abs() {
            smallest = 1;
        }
        if pt[2].abs() < pt[smallest].abs() {
            smallest = 2;
        }
        let mut axis = [0.0f32; 3];
        axis[smallest] = 1.0;

        let cross = [
            pt[1] * axis[2] - pt[2] * axis[1],
            pt[2] * axis[0] - pt[0] * axis[2],
            pt[0] * axis[1] - pt[1] * axis[0],
        ];
        let cross2 = [
            pt[1] * cross[2] - pt[2] * cross[1],
            pt[2] * cross[0] - pt[0] * cross[2],
            pt[0] * cross[1] - pt[1] * cross[0],
        ];

        for span in [cross, cross2] {
            for sign in [1.0f32, -1.0] {
                vertices.push(ColorVertex {
                    position: [
                        pt[0] + sign * eps * span[0],
                        pt[1] + sign * eps * span[1],
                        pt[2] + sign * eps * span[2],
                    ],
                    normal: *pt,
                    color: colors[j],
                });
            }
        }

        let b = (j * 4) as u32;
        indices.extend_from_slice(&[b + 0, b + 2, b + 3, b + 1, b + 3, b + 2]);
    }
    (vertices, indices)
}
