//! wgpu render backend.
//!
//! [`GpuContext`] owns the window surface and acts as the drawing surface;
//! [`WgpuRenderer`] draws the scene's boxes with directional lighting.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Surface and depth texture are always at least 1x1.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, GpuError};
pub use gpu::{FramePass, MAX_LIGHTS, WgpuRenderer};
