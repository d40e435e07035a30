//! Text rendering from the packed glyph atlas.
//!
//! [`layout_text`] is the pure half: it walks a string, advancing a pen in
//! NDC units and emitting one quad per visible glyph, with newlines dropping
//! the pen by one line height. [`FontMaterial`] owns the atlas texture and
//! the alpha-blended pipeline that draws the result.

use crate::{
    context::Context,
    data_structures::{
        mesh::{Mesh, TextVertex},
        texture::Texture,
    },
    materials::{mk_render_pipeline, sampled_texture_bind_group, sampled_texture_layout},
    resources::font::FontAtlas,
};

/// Builds the glyph quads for `text` starting at pen position `(x, y)`.
///
/// `sx`/`sy` convert glyph pixels into the target space (pass `2/w`, `2/h`
/// for NDC). `color` is a packed `0x00BBGGRR` word, red in the low byte.
pub fn layout_text(
    atlas: &FontAtlas,
    text: &str,
    x: f32,
    y: f32,
    sx: f32,
    sy: f32,
    color: u32,
) -> (Vec<TextVertex>, Vec<u32>) {
    let x_orig = x;
    let mut x = x;
    let mut y = y;
    let color = [
        (color & 255) as f32 / 255.0,
        ((color >> 8) & 255) as f32 / 255.0,
        ((color >> 16) & 255) as f32 / 255.0,
    ];

    let mut vertices = Vec::with_capacity(text.len() * 4);
    let mut indices = Vec::with_capacity(text.len() * 6);

    for c in text.chars() {
        if c == '\n' {
            y -= atlas.line_height() * sy;
            x = x_orig;
            continue;
        }
        let Some(g) = atlas.glyph(c) else {
            continue;
        };

        let left = x + g.left * sx;
        let top = y + g.top * sy;
        let w = g.width as f32 * sx;
        let h = g.height as f32 * sy;

        // Advance the pen to the start of the next glyph.
        x += g.advance_x * sx;
        y += g.advance_y * sy;

        // Skip zero-pixel glyphs (space advances the pen but draws nothing).
        if w == 0.0 || h == 0.0 {
            continue;
        }

        let u0 = g.uv_x;
        let v0 = g.uv_y;
        let u1 = g.uv_x + g.width as f32 / atlas.width as f32;
        let v1 = g.uv_y + g.height as f32 / atlas.height as f32;

        let b = vertices.len() as u32;
        vertices.push(TextVertex {
            position: [left, top],
            tex_coords: [u0, v0],
            color,
        });
        vertices.push(TextVertex {
            position: [left + w, top],
            tex_coords: [u1, v0],
            color,
        });
        vertices.push(TextVertex {
            position: [left, top - h],
            tex_coords: [u0, v1],
            color,
        });
        vertices.push(TextVertex {
            position: [left + w, top - h],
            tex_coords: [u1, v1],
            color,
        });
        indices.extend_from_slice(&[b, b + 1, b + 2, b + 1, b + 2, b + 3]);
    }

    (vertices, indices)
}

/// Alpha-blended glyph rendering from a single-channel atlas.
pub struct FontMaterial {
    pipeline: wgpu::RenderPipeline,
    atlas: FontAtlas,
    texture_group: wgpu::BindGroup,
}

impl FontMaterial {
    pub fn new(ctx: &Context, atlas: FontAtlas) -> Self {
        let texture = Texture::from_r8(
            &ctx.device,
            &ctx.queue,
            atlas.width,
            atlas.height,
            &atlas.bitmap,
            "font_atlas",
        );
        let texture_layout = sampled_texture_layout(
            &ctx.device,
            wgpu::TextureViewDimension::D2,
            "font_texture_bind_group_layout",
        );
        let texture_group = sampled_texture_bind_group(
            &ctx.device,
            &texture_layout,
            &texture,
            "font_texture_bind_group",
        );

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Font Pipeline Layout"),
                bind_group_layouts: &[&texture_layout],
                push_constant_ranges: &[],
            });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Font Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("font.wgsl").into()),
        };

        // Glyph quads overlap; blend instead of depth-testing them.
        let pipeline = mk_render_pipeline(
            &ctx.device,
            &layout,
            ctx.config.format,
            Some(wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
            }),
            false,
            None,
            &[TextVertex::desc()],
            shader,
        );

        Self {
            pipeline,
            atlas,
            texture_group,
        }
    }

    pub fn atlas(&self) -> &FontAtlas {
        &self.atlas
    }

    /// Lays out and draws `text` in one call; the transient mesh stays alive
    /// for the pass through wgpu's internal reference counting.
    pub fn draw_text(
        &self,
        ctx: &Context,
        render_pass: &mut wgpu::RenderPass<'_>,
        text: &str,
        x: f32,
        y: f32,
        sx: f32,
        sy: f32,
        color: u32,
    ) {
        let (vertices, indices) = layout_text(&self.atlas, text, x, y, sx, sy, color);
        if indices.is_empty() {
            return;
        }
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.texture_group, &[]);
        mesh.draw(render_pass);
    }
}
