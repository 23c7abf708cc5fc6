//! Rendering adapter: renderer-agnostic interface and drawing surfaces.
//!
//! # Invariants
//! - Renderers read the scene and camera; they never mutate them.
//! - A surface's backing store is resized only when its displayed size
//!   differs from it.

mod renderer;
mod surface;

pub use renderer::{Renderer, RendererSettings, TextRenderer};
pub use surface::{DrawingSurface, SurfaceSize, VirtualSurface, resize_to_display_size};

pub fn crate_info() -> &'static str {
    concat!("bouncebox-render v", env!("CARGO_PKG_VERSION"))
}
