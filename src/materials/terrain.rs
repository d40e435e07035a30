//! The ray-marched terrain material.
//!
//! The host side is a fullscreen quad with three textures; the terrain
//! itself lives entirely in the fragment shader, which marches rays from the
//! camera through a heightfield.

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{mesh::Vertex, texture::Texture},
    materials::mk_render_pipeline,
};

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct TerrainUniform {
    camera: [[f32; 4]; 4],
    resolution: [f32; 4],
}

/// Heightfield raymarcher over heightmap, normalmap and colormap textures.
pub struct TerrainMaterial {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_group: wgpu::BindGroup,
    texture_group: wgpu::BindGroup,
}

impl TerrainMaterial {
    pub fn new(
        ctx: &Context,
        heightmap: &Texture,
        normalmap: &Texture,
        colormap: &Texture,
    ) -> Self {
        let uniform = TerrainUniform {
            camera: Matrix4::from_scale(1.0f32).into(),
            resolution: [1.0, 1.0, 1.0, 0.0],
        };
        let uniform_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Terrain Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let uniform_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                    label: Some("terrain_uniform_bind_group_layout"),
                });

        let uniform_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("terrain_uniform_bind_group"),
        });

        let texture_layout = terrain_texture_layout(&ctx.device);
        let texture_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&heightmap.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(
                        heightmap.sampler.as_ref().expect("heightmap sampler"),
                    ),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&normalmap.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(
                        normalmap.sampler.as_ref().expect("normalmap sampler"),
                    ),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::TextureView(&colormap.view),
                },
                wgpu::BindGroupEntry {
                    binding: 5,
                    resource: wgpu::BindingResource::Sampler(
                        colormap.sampler.as_ref().expect("colormap sampler"),
                    ),
                },
            ],
            label: Some("terrain_texture_bind_group"),
        });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Terrain Pipeline Layout"),
                bind_group_layouts: &[&uniform_layout, &texture_layout],
                push_constant_ranges: &[],
            });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Terrain Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("terrain.wgsl").into()),
        };

        let pipeline = mk_render_pipeline(
            &ctx.device,
            &layout,
            ctx.config.format,
            Some(wgpu::BlendState {
                alpha: wgpu::BlendComponent::REPLACE,
                color: wgpu::BlendComponent::REPLACE,
            }),
            true,
            None,
            &[Vertex::desc()],
            shader,
        );

        Self {
            pipeline,
            uniform_buffer,
            uniform_group,
            texture_group,
        }
    }

    /// Uploads the camera-to-world frame and the viewport resolution.
    pub fn update(&self, queue: &wgpu::Queue, camera_to_world: Matrix4<f32>, width: u32, height: u32) {
        let uniform = TerrainUniform {
            camera: camera_to_world.into(),
            resolution: [width as f32, height as f32, 1.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_group, &[]);
        render_pass.set_bind_group(1, &self.texture_group, &[]);
    }
}

fn terrain_texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    };
    let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            texture_entry(2),
            sampler_entry(3),
            texture_entry(4),
            sampler_entry(5),
        ],
        label: Some("terrain_texture_bind_group_layout"),
    })
}
