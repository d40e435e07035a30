//! The application shell: window, event loop and per-frame driving.
//!
//! Every demo is a [`Vignette`]: a bundle of GPU resources with a handful of
//! lifecycle hooks. The shell owns everything around it — window creation,
//! the winit event loop, surface reconfiguration, the camera uniform upload
//! and the one render pass per frame that the vignette draws into.
//!
//! # Lifecycle
//!
//! 1. `run()` builds the event loop and window
//! 2. the constructor builds the vignette once the [`Context`] is live
//! 3. `on_init` configures camera/clear colour
//! 4. per frame: window events → `on_window_event`, then `on_update(dt)`,
//!    then one clear-and-draw render pass through `on_render`
//! 5. Escape or closing the window ends the loop

use std::sync::Arc;

use anyhow::Result;
use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::context::Context;

/// A single demo scene driven by the shell.
///
/// Only `on_render` is mandatory; the other hooks default to no-ops so the
/// flat vignettes stay as small as they read.
pub trait Vignette {
    /// Called once after the context is live. The place to position the
    /// camera and set the clear colour.
    fn on_init(&mut self, _ctx: &mut Context) {}

    /// Raw window events (mouse, keyboard, wheel) before the shell's own
    /// handling.
    fn on_window_event(&mut self, _ctx: &mut Context, _event: &WindowEvent) {}

    /// Per-frame state update with the elapsed time since the last frame.
    fn on_update(&mut self, _ctx: &mut Context, _dt: Duration) {}

    /// Issue draw calls into the frame's render pass. The pass is already
    /// cleared and has the depth buffer attached.
    fn on_render(&mut self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>);

    /// The surface was resized; size-dependent resources can be rebuilt here.
    fn on_resize(&mut self, _ctx: &mut Context, _width: u32, _height: u32) {}
}

/// Builds a vignette once the GPU context exists.
pub type VignetteConstructor = Box<dyn FnOnce(&mut Context) -> Result<Box<dyn Vignette>>>;

struct AppState {
    ctx: Context,
    vignette: Box<dyn Vignette>,
}

impl AppState {
    fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
        self.vignette.on_resize(&mut self.ctx, width, height);
    }

    fn render(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        // Keep frames coming; presentation paces us via the swapchain.
        self.ctx.window.request_redraw();

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.ctx.camera.update(&self.ctx.queue);

        let mut encoder: wgpu::CommandEncoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        {
            let mut render_pass: wgpu::RenderPass<'_> =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: &self.ctx.depth_texture.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });

            self.vignette.on_render(&self.ctx, &mut render_pass);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    title: String,
    width: u32,
    height: u32,
    constructor: Option<VignetteConstructor>,
    state: Option<AppState>,
    last_time: Instant,
}

impl App {
    fn new(title: &str, width: u32, height: u32, constructor: VignetteConstructor) -> Result<Self> {
        Ok(Self {
            async_runtime: tokio::runtime::Runtime::new()?,
            title: title.to_string(),
            width,
            height,
            constructor: Some(constructor),
            state: None,
            last_time: Instant::now(),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(self.width, self.height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => panic!("cannot create a window: {}", e),
        };

        let ctx = self.async_runtime.block_on(Context::new(window));
        let mut ctx = match ctx {
            Ok(ctx) => ctx,
            Err(e) => panic!("cannot create the main context: {}", e),
        };

        let constructor = self.constructor.take().unwrap();
        let mut vignette = match constructor(&mut ctx) {
            Ok(vignette) => vignette,
            Err(e) => panic!("vignette setup failed: {}", e),
        };
        vignette.on_init(&mut ctx);

        ctx.window.request_redraw();
        self.last_time = Instant::now();
        self.state = Some(AppState { ctx, vignette });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        state.vignette.on_window_event(&mut state.ctx, &event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();
                state.vignette.on_update(&mut state.ctx, dt);

                match state.render() {
                    Ok(_) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("unable to render: {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Opens a window of the given size and drives the vignette until the user
/// quits.
pub fn run(title: &str, width: u32, height: u32, constructor: VignetteConstructor) -> Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }

    let event_loop: EventLoop<()> = EventLoop::new()?;
    let mut app = App::new(title, width, height, constructor)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
