//! vignette
//!
//! A small collection of GPU rendering vignettes. The crate provides the thin
//! layers every vignette shares: a window/event shell, a GPU context, camera
//! math, input tracking, asset loading, mesh builders and a handful of
//! materials (one shader pair plus its uniform glue per visual effect). The
//! heavy lifting lives in wgpu; nothing here wraps it behind another
//! abstraction.
//!
//! High-level modules
//! - `camera`: camera frame, projection, trackball math and the GPU uniform
//! - `compute`: the add-arrays compute pass with CPU readback
//! - `context`: central GPU and window context that owns device/queue/surface
//! - `data_structures`: vertex types, meshes and texture wrappers
//! - `input`: mouse drag and keyboard state trackers
//! - `materials`: pipelines for the individual effects
//! - `random`: the deterministic generators the demos seed their data with
//! - `resources`: image, font-atlas and raw asset loading
//! - `shell`: the `Vignette` trait and the per-window frame loop
//!

pub mod camera;
pub mod compute;
pub mod context;
pub mod data_structures;
pub mod input;
pub mod materials;
pub mod random;
pub mod resources;
pub mod shell;

// Re-exports commonly used types for convenience in downstream code.
pub use winit::dpi::PhysicalPosition;
pub use cgmath::*;
pub use winit::event::DeviceEvent;
pub use winit::event::MouseScrollDelta;
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
pub use wgpu::*;
