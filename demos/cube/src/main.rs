//! A spinning-by-hand cube: drag to rotate with the trackball, wheel to zoom.

use vignette::{
    MouseScrollDelta, WindowEvent,
    camera::{Camera, trackball_rotation},
    context::Context,
    data_structures::{
        mesh::{self, Mesh},
        texture::Texture,
    },
    input::MouseState,
    materials::simple::SimpleMaterial,
    random::Lcg,
    shell::{self, Vignette},
};

struct Cube {
    material: SimpleMaterial,
    mesh: Mesh,
    mouse: MouseState,
}

impl Cube {
    fn new(ctx: &Context) -> Self {
        // 16x16 random texel pattern, like a broken television.
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
            vignette::FilterMode::Linear,
            "cube_texture",
        );

        let mut material = SimpleMaterial::new(ctx);
        material.set_texture(ctx, &texture);

        let (vertices, indices) = mesh::cube();
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);

        Self {
            material,
            mesh,
            mouse: MouseState::new(),
        }
    }
}

impl Vignette for Cube {
    fn on_init(&mut self, ctx: &mut Context) {
        ctx.camera.camera = Camera::at_z(5.0);
    }

    fn on_window_event(&mut self, ctx: &mut Context, event: &WindowEvent) {
        self.mouse.process(event);
        if let WindowEvent::MouseWheel { delta, .. } = event {
            let scroll = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(p) => p.y as f32,
            };
            if scroll > 0.0 {
                ctx.camera.projection.zoom_by(1.1);
            } else if scroll < 0.0 {
                ctx.camera.projection.zoom_by(1.0 / 1.1);
            }
        }
    }

    fn on_update(&mut self, ctx: &mut Context, _dt: std::time::Duration) {
        if self.mouse.dragging && self.mouse.moved() {
            let (from, to) = self.mouse.trackball_pair(ctx.config.width, ctx.config.height);
            ctx.camera.camera.trackball(trackball_rotation(from, to));
            self.mouse.sync();
        }
    }

    fn on_render(&mut self, ctx: &Context, render_pass: &mut vignette::RenderPass<'_>) {
        self.material.bind(ctx, render_pass);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    shell::run(
        "cube",
        800,
        450,
        Box::new(|ctx| {
            let vignette: Box<dyn Vignette> = Box::new(Cube::new(ctx));
            Ok(vignette)
        }),
    )
}
