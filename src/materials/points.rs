//! The vertex-colored material used by the pointcloud vignette.

use crate::{
    context::Context,
    data_structures::mesh::ColorVertex,
    materials::mk_render_pipeline,
};

/// Draws [`ColorVertex`] geometry; the color rides in the vertex stream as a
/// packed word and is unpacked on the GPU.
pub struct PointsMaterial {
    pipeline: wgpu::RenderPipeline,
}

impl PointsMaterial {
    pub fn new(ctx: &Context) -> Self {
        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Points Pipeline Layout"),
                bind_group_layouts: &[&ctx.camera.bind_group_layout],
                push_constant_ranges: &[],
            });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Points Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("points.wgsl").into()),
        };

        // Billboard quads have no consistent winding; draw both sides.
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
            &[ColorVertex::desc()],
            shader,
        );

        Self { pipeline }
    }

    pub fn bind(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
    }
}
