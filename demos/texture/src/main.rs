//! A fullscreen quad showing a 16x16 random texture with nearest filtering.

use vignette::{
    Vector4,
    camera::Projection,
    context::Context,
    data_structures::{
        mesh::{self, Mesh},
        texture::Texture,
    },
    materials::simple::SimpleMaterial,
    random::Lcg,
    shell::{self, Vignette},
};

struct TexturedQuad {
    material: SimpleMaterial,
    mesh: Mesh,
}

impl TexturedQuad {
    fn new(ctx: &Context) -> Self {
        let mut rng = Lcg::new();
        let mut pixels = Vec::with_capacity(16 * 16 * 4);
        for _ in 0..256 {
            pixels.push(rng.next_below(256) as u8);
            pixels.push(rng.next_below(256) as u8);
            pixels.push(rng.next_below(256) as u8);
            pixels.push(0xff);
        }
        let texture = Texture::from_rgba(
            &ctx.device,
            &ctx.queue,
            16,
            16,
            &pixels,
            vignette::FilterMode::Nearest,
            "quad_texture",
        );

        let mut material = SimpleMaterial::new(ctx);
        material.set_texture(ctx, &texture);

        let (vertices, indices) = mesh::quad();
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);

        Self { material, mesh }
    }
}

impl Vignette for TexturedQuad {
    fn on_init(&mut self, ctx: &mut Context) {
        ctx.camera.projection = Projection::orthographic();
        ctx.camera.light_dir = Vector4::new(0.0, 0.0, 1.0, 0.0);
    }

    fn on_render(&mut self, ctx: &Context, render_pass: &mut vignette::RenderPass<'_>) {
        self.material.bind(ctx, render_pass);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    shell::run(
        "texture",
        800,
        450,
        Box::new(|ctx| {
            let vignette: Box<dyn Vignette> = Box::new(TexturedQuad::new(ctx));
            Ok(vignette)
        }),
    )
}
