//! A spherical pointcloud rendered as colored discs; drag to rotate.

use vignette::{
    MouseScrollDelta, WindowEvent,
    camera::{Camera, trackball_rotation},
    context::Context,
    data_structures::mesh::{self, Mesh},
    input::MouseState,
    materials::points::PointsMaterial,
    random::Lcg,
    shell::{self, Vignette},
};

struct Pointcloud {
    material: PointsMaterial,
    mesh: Mesh,
    mouse: MouseState,
}

impl Pointcloud {
    fn new(ctx: &Context) -> Self {
        let points = mesh::sphere_points(20, 20);
        let mut rng = Lcg::new();
        let colors: Vec<u32> = points
            .iter()
            .map(|_| 0xff000000 | rng.next_below(0x00ffffff))
            .collect();

        let (vertices, indices) = mesh::point_quads(&points, &colors, 0.05);
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);

        Self {
            material: PointsMaterial::new(ctx),
            mesh,
            mouse: MouseState::new(),
        }
    }
}

impl Vignette for Pointcloud {
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
        "pointcloud",
        800,
        450,
        Box::new(|ctx| {
            let vignette: Box<dyn Vignette> = Box::new(Pointcloud::new(ctx));
            Ok(vignette)
        }),
    )
}
