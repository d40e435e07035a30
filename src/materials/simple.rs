//! The textured, lit mesh material.

use crate::{
    context::Context,
    data_structures::{mesh::Vertex, texture::Texture},
    materials::{mk_render_pipeline, sampled_texture_bind_group, sampled_texture_layout},
};

/// Draws [`Vertex`] meshes with one diffuse texture and the camera's
/// directional light.
pub struct SimpleMaterial {
    pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    texture_group: Option<wgpu::BindGroup>,
}

impl SimpleMaterial {
    pub fn new(ctx: &Context) -> Self {
        let texture_layout = sampled_texture_layout(
            &ctx.device,
            wgpu::TextureViewDimension::D2,
            "simple_texture_bind_group_layout",
        );

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Simple Pipeline Layout"),
                bind_group_layouts: &[&texture_layout, &ctx.camera.bind_group_layout],
                push_constant_ranges: &[],
            });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Simple Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("simple.wgsl").into()),
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
            Some(wgpu::Face::Back),
            &[Vertex::desc()],
            shader,
        );

        Self {
            pipeline,
            texture_layout,
            texture_group: None,
        }
    }

    pub fn set_texture(&mut self, ctx: &Context, texture: &Texture) {
        self.texture_group = Some(sampled_texture_bind_group(
            &ctx.device,
            &self.texture_layout,
            texture,
            "simple_texture_bind_group",
        ));
    }

    /// Binds the pipeline, the texture and the camera for subsequent mesh
    /// draws.
    pub fn bind(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(
            0,
            self.texture_group.as_ref().expect("no texture set"),
            &[],
        );
        render_pass.set_bind_group(1, &ctx.camera.bind_group, &[]);
    }
}
