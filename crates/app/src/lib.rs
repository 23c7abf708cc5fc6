//! The bouncing cube demo: configuration, scene setup and the frame callback.
//!
//! Both the windowed and the headless binaries drive the same [`DemoApp`];
//! they differ only in the [`DrawingSurface`](bouncebox_render::DrawingSurface)
//! and [`Renderer`](bouncebox_render::Renderer) they pass in.

pub mod config;
mod demo;
mod overlay;

pub use config::{ConfigError, DemoConfig};
pub use demo::{Control, DemoApp, FrameReport};
pub use overlay::{ArButton, Overlay};
