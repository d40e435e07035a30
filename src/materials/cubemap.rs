//! The environment cubemap (skybox) material.

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{mesh::Vertex, texture::Texture},
    materials::{mk_render_pipeline, sampled_texture_bind_group, sampled_texture_layout},
};

/// Projection plus the full view matrix; the shader strips the translation so
/// the environment stays at infinity.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SkyUniform {
    proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
}

/// Samples a cube texture along the skybox cube's local positions.
pub struct CubemapMaterial {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
    texture_group: Option<wgpu::BindGroup>,
}

impl CubemapMaterial {
    pub fn new(ctx: &Context) -> Self {
        let uniform = SkyUniform {
            proj: Matrix4::from_scale(1.0f32).into(),
            view: Matrix4::from_scale(1.0f32).into(),
        };
        let uniform_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sky Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let uniform_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                    label: Some("sky_uniform_bind_group_layout"),
                });

        let uniform_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("sky_uniform_bind_group"),
        });

        let texture_layout = sampled_texture_layout(
            &ctx.device,
            wgpu::TextureViewDimension::Cube,
            "sky_texture_bind_group_layout",
        );

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Sky Pipeline Layout"),
                bind_group_layouts: &[&uniform_layout, &texture_layout],
                push_constant_ranges: &[],
            });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Sky Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("cubemap.wgsl").into()),
        };

        // The camera sits inside the cube, so no culling.
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
            texture_layout,
            texture_group: None,
        }
    }

    pub fn set_cubemap(&mut self, ctx: &Context, texture: &Texture) {
        self.texture_group = Some(sampled_texture_bind_group(
            &ctx.device,
            &self.texture_layout,
            texture,
            "sky_texture_bind_group",
        ));
    }

    /// Uploads projection and view from the context's camera.
    pub fn update(&self, ctx: &Context) {
        let uniform = SkyUniform {
            proj: ctx.camera.projection.matrix().into(),
            view: ctx.camera.camera.view().into(),
        };
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_group, &[]);
        render_pass.set_bind_group(
            1,
            self.texture_group.as_ref().expect("no cubemap set"),
            &[],
        );
    }
}
