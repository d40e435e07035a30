//! An environment cubemap viewed from inside: drag to look around.

use anyhow::ensure;
use vignette::{
    MouseScrollDelta, WindowEvent,
    camera::trackball_rotation,
    context::Context,
    data_structures::{
        mesh::{self, Mesh},
        texture::Texture,
    },
    input::MouseState,
    materials::cubemap::CubemapMaterial,
    resources,
    shell::{self, Vignette},
};

struct Cubemap {
    material: CubemapMaterial,
    mesh: Mesh,
    mouse: MouseState,
}

impl Cubemap {
    fn new(ctx: &Context) -> anyhow::Result<Self> {
        let front = resources::image::load_rgba("front.png")?;
        let back = resources::image::load_rgba("back.png")?;
        let left = resources::image::load_rgba("left.png")?;
        let right = resources::image::load_rgba("right.png")?;
        let top = resources::image::load_rgba("top.png")?;
        let bottom = resources::image::load_rgba("bottom.png")?;

        for face in [&back, &left, &right, &top, &bottom] {
            ensure!(
                face.width == front.width && face.height == front.height,
                "cubemap faces must share one size"
            );
        }

        // Layer order is +x, -x, +y, -y, +z, -z.
        let texture = Texture::cubemap(
            &ctx.device,
            &ctx.queue,
            front.width,
            front.height,
            [
                &right.pixels,
                &left.pixels,
                &top.pixels,
                &bottom.pixels,
                &front.pixels,
                &back.pixels,
            ],
            "environment",
        );

        let mut material = CubemapMaterial::new(ctx);
        material.set_cubemap(ctx, &texture);

        let (vertices, indices) = mesh::skybox();
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);

        Ok(Self {
            material,
            mesh,
            mouse: MouseState::new(),
        })
    }
}

impl Vignette for Cubemap {
    fn on_init(&mut self, ctx: &mut Context) {
        // The camera sits inside the unit cube; pull the near plane in so no
        // face crosses it while rotating.
        ctx.camera.projection.near = 0.5;
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
        self.material.update(ctx);
    }

    fn on_render(&mut self, _ctx: &Context, render_pass: &mut vignette::RenderPass<'_>) {
        self.material.bind(render_pass);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    shell::run(
        "cubemap",
        800,
        450,
        Box::new(|ctx| {
            let vignette: Box<dyn Vignette> = Box::new(Cubemap::new(ctx)?);
            Ok(vignette)
        }),
    )
}
