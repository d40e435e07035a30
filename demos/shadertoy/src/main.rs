//! A shadertoy-style animated fragment effect; Space pauses the clock and
//! holding the right arrow fast-forwards it.

use vignette::{
    KeyCode, Vector4, WindowEvent,
    camera::Projection,
    context::Context,
    data_structures::mesh::{self, Mesh},
    input::KeyboardState,
    materials::shadertoy::{ShadertoyMaterial, ShadertoyProperties},
    shell::{self, Vignette},
};

// The opaque effect body spliced into the material's scaffold.
const EFFECT: &str = r#"
fn main_image(frag_coord: vec2<f32>) -> vec4<f32> {
    let uv = frag_coord / st.resolution.xy;
    let col = 0.5 + 0.5 * cos(st.time + uv.xyx + vec3<f32>(0.0, 2.0, 4.0));
    return vec4<f32>(col, 1.0);
}
"#;

struct Shadertoy {
    material: ShadertoyMaterial,
    mesh: Mesh,
    props: ShadertoyProperties,
    keyboard: KeyboardState,
    paused: bool,
}

impl Shadertoy {
    fn new(ctx: &Context) -> Self {
        let material = ShadertoyMaterial::new(ctx, EFFECT);
        let (vertices, indices) = mesh::quad();
        let mesh = Mesh::new(&ctx.device, &vertices, &indices);
        Self {
            material,
            mesh,
            props: ShadertoyProperties::default(),
            keyboard: KeyboardState::new(),
            paused: false,
        }
    }
}

impl Vignette for Shadertoy {
    fn on_init(&mut self, ctx: &mut Context) {
        ctx.camera.projection = Projection::orthographic();
        ctx.camera.light_dir = Vector4::new(0.0, 0.0, 1.0, 0.0);
    }

    fn on_window_event(&mut self, _ctx: &mut Context, event: &WindowEvent) {
        if self.keyboard.process(event) == Some(KeyCode::Space) {
            self.paused = !self.paused;
        }
    }

    fn on_update(&mut self, ctx: &mut Context, dt: std::time::Duration) {
        if !self.paused {
            // Holding the right arrow fast-forwards.
            let speed = if self.keyboard.is_pressed(KeyCode::ArrowRight) {
                4.0
            } else {
                1.0
            };
            self.props.time += dt.as_secs_f32() * speed;
            self.props.time_delta = dt.as_secs_f32() * speed;
            self.props.frame += 1;
        }
        self.material.set_properties(ctx, self.props);
    }

    fn on_render(&mut self, _ctx: &Context, render_pass: &mut vignette::RenderPass<'_>) {
        self.material.bind(render_pass);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    shell::run(
        "shadertoy",
        800,
        450,
        Box::new(|ctx| {
            let vignette: Box<dyn Vignette> = Box::new(Shadertoy::new(ctx));
            Ok(vignette)
        }),
    )
}
