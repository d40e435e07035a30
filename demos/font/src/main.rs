//! Rasterizes a font into an atlas and draws some text with it.

use vignette::{
    context::Context,
    materials::font::FontMaterial,
    resources::{self, font::FontAtlas},
    shell::{self, Vignette},
};

struct FontDemo {
    material: FontMaterial,
}

impl FontDemo {
    fn new(ctx: &Context) -> anyhow::Result<Self> {
        let font_bytes = resources::load_binary("Karla-Regular.ttf")?;
        let atlas = FontAtlas::new(&font_bytes, 48.0)?;
        Ok(Self {
            material: FontMaterial::new(ctx, atlas),
        })
    }
}

impl Vignette for FontDemo {
    fn on_render(&mut self, ctx: &Context, render_pass: &mut vignette::RenderPass<'_>) {
        // One glyph pixel maps to one framebuffer pixel at these scales.
        let sx = 2.0 / ctx.config.width as f32;
        let sy = 2.0 / ctx.config.height as f32;

        self.material.draw_text(
            ctx,
            render_pass,
            "The quick brown fox\njumps over the lazy dog",
            -1.0 + 8.0 * sx,
            1.0 - 56.0 * sy,
            sx,
            sy,
            0xffffff,
        );
        self.material.draw_text(
            ctx,
            render_pass,
            "0123456789 !?&():;",
            -1.0 + 8.0 * sx,
            -1.0 + 24.0 * sy,
            sx,
            sy,
            0x0080ff,
        );
    }
}

fn main() -> anyhow::Result<()> {
    shell::run(
        "font",
        800,
        450,
        Box::new(|ctx| {
            let vignette: Box<dyn Vignette> = Box::new(FontDemo::new(ctx)?);
            Ok(vignette)
        }),
    )
}
