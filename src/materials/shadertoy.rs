//! The shadertoy-style fullscreen animation material.
//!
//! The effect body is an opaque WGSL snippet defining
//! `fn main_image(frag_coord: vec2<f32>) -> vec4<f32>`; it is spliced
//! verbatim into a fixed scaffold that supplies the vertex stage and the
//! `st` uniform (`resolution`, `time`, `time_delta`, `frame`). The snippet
//! is never parsed here.

use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::mesh::Vertex,
    materials::mk_render_pipeline,
};

const SCAFFOLD: &str = include_str!("shadertoy.wgsl");
const SCRIPT_MARK: &str = "//SCRIPT//";

/// The per-frame inputs of the effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadertoyProperties {
    pub time: f32,
    pub time_delta: f32,
    pub frame: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ShadertoyUniform {
    resolution: [f32; 4],
    time: f32,
    time_delta: f32,
    frame: i32,
    pad: u32,
}

pub struct ShadertoyMaterial {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_group: wgpu::BindGroup,
}

impl ShadertoyMaterial {
    /// Compiles the scaffold with `script` spliced in.
    pub fn new(ctx: &Context, script: &str) -> Self {
        let source = SCAFFOLD.replace(SCRIPT_MARK, script);

        let uniform = ShadertoyUniform {
            resolution: [1.0, 1.0, 1.0, 0.0],
            time: 0.0,
            time_delta: 0.0,
            frame: 0,
            pad: 0,
        };
        let uniform_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Shadertoy Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let uniform_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
                    label: Some("shadertoy_uniform_bind_group_layout"),
                });

        let uniform_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("shadertoy_uniform_bind_group"),
        });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Shadertoy Pipeline Layout"),
                bind_group_layouts: &[&uniform_layout],
                push_constant_ranges: &[],
            });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Shadertoy Shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
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
        }
    }

    /// Uploads the clock values and the current viewport size.
    pub fn set_properties(&self, ctx: &Context, props: ShadertoyProperties) {
        let uniform = ShadertoyUniform {
            resolution: [ctx.config.width as f32, ctx.config.height as f32, 1.0, 0.0],
            time: props.time,
            time_delta: props.time_delta,
            frame: props.frame,
            pad: 0,
        };
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_group, &[]);
    }
}
