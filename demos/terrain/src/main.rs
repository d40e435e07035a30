//! A ray-marched heightfield: drag to orbit, wheel to dolly.

use vignette::{
    FilterMode, MouseScrollDelta, WindowEvent,
    camera::Camera,
    context::Context,
    data_structures::{
        mesh::{self, Mesh},
        texture::Texture,
    },
    input::MouseState,
    materials::terrain::TerrainMaterial,
    resources,
    shell::{self, Vignette},
};

struct Terrain {
    material: TerrainMaterial,
    mesh: Mesh,
    rig: Camera,
    mouse: MouseState,
}

impl Terrain {
    fn new(ctx: &Context) -> anyhow::Result<Self> {
        let heightmap = resources::image::load_rgba("heightmap.png")?;
        let normalmap = resources::image::load_rgba("normalmap.png")?;
        let colormap = resources::image::load_rgba("colormap.png")?;

        let upload = |data: &resources::image::RgbaData, label| {
            Texture::from_rgba(
                &ctx.device,
                &ctx.queue,
                data.width,
                data.height,
                &data.pixels,
                FilterMode::Linear,
                label,
            )
        };
        let heightmap = upload(&heightmap, "heightmap");
        let normalmap = upload(&normalmap, "normalmap");
        let colormap = upload(&colormap, "colormap");

        let material = TerrainMaterial::new(ctx, &heightmap, &normalmap, &colormap);
        let (vertices, indices) = mesh::quad();
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);

        Ok(Self {
            material,
            mesh,
            rig: Camera::new(),
            mouse: MouseState::new(),
        })
    }
}

impl Vignette for Terrain {
    fn on_window_event(&mut self, _ctx: &mut Context, event: &WindowEvent) {
        self.mouse.process(event);
        if let WindowEvent::MouseWheel { delta, .. } = event {
            let scroll = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(p) => p.y as f32,
            };
            if scroll > 0.0 {
                self.rig.dolly(0.1);
            } else if scroll < 0.0 {
                self.rig.dolly(-0.1);
            }
        }
    }

    fn on_update(&mut self, ctx: &mut Context, _dt: std::time::Duration) {
        if self.mouse.dragging && self.mouse.moved() {
            let (dx, _) = self.mouse.delta();
            self.rig.orbit_y(dx * 0.01);
            self.mouse.sync();
        }
        self.material.update(
            &ctx.queue,
            self.rig.transform,
            ctx.config.width,
            ctx.config.height,
        );
    }

    fn on_render(&mut self, _ctx: &Context, render_pass: &mut vignette::RenderPass<'_>) {
        self.material.bind(render_pass);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    shell::run(
        "terrain",
        800,
        450,
        Box::new(|ctx| {
            let vignette: Box<dyn Vignette> = Box::new(Terrain::new(ctx)?);
            Ok(vignette)
        }),
    )
}
