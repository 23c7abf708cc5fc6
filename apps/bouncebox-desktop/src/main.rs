mod overlay;

use anyhow::{Context, Result};
use bouncebox_app::{Control, DemoApp, DemoConfig};
use bouncebox_render_wgpu::{GpuContext, WgpuRenderer};
use clap::Parser;
use overlay::OverlayPainter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "bouncebox-desktop", about = "Spinning, bouncing cube in a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window width, overriding the config
    #[arg(long)]
    width: Option<u32>,

    /// Initial window height, overriding the config
    #[arg(long)]
    height: Option<u32>,
}

/// GPU resources, created once the event loop has resumed.
struct Graphics {
    gpu: GpuContext,
    renderer: WgpuRenderer,
    overlay: OverlayPainter,
}

struct GpuApp {
    config: DemoConfig,
    demo: DemoApp,
    started: Instant,
    graphics: Option<Graphics>,
    error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(config: DemoConfig) -> Self {
        Self {
            demo: DemoApp::new(&config),
            config,
            started: Instant::now(),
            graphics: None,
            error: None,
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let window_config = &self.config.window;
        let attrs = Window::default_attributes()
            .with_title(window_config.title.as_str())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = GpuContext::new(window, window_config.vsync)
            .context("failed to initialize GPU for the window surface")?;
        let renderer = WgpuRenderer::new(&gpu, &self.config.renderer);
        let overlay = OverlayPainter::new(&gpu);

        Ok(Graphics {
            gpu,
            renderer,
            overlay,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    /// The per-frame callback: update, draw scene, draw overlay, present.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        let timestamp_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let report = self.demo.prepare_frame(timestamp_ms, &mut graphics.gpu);
        if report.resized {
            tracing::debug!(frame = report.frame, "surface resized");
        }

        let frame = match graphics.gpu.acquire() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                graphics.gpu.window().request_redraw();
                return;
            }
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.demo
            .render(&mut graphics.renderer.frame(&graphics.gpu, &view));
        graphics
            .overlay
            .paint(&graphics.gpu, &view, &mut self.demo);

        graphics.gpu.window().pre_present_notify();
        frame.present();
        graphics.gpu.window().request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match self.init_graphics(event_loop) {
            Ok(graphics) => {
                graphics.gpu.window().request_redraw();
                self.graphics = Some(graphics);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(graphics) = &mut self.graphics {
            let window = graphics.gpu.window().clone();
            if graphics.overlay.on_window_event(&window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                // The frame callback compares sizes and resizes the surface.
                if let Some(graphics) = &self.graphics {
                    graphics.gpu.window().request_redraw();
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if self.demo.handle_key(&format!("{key:?}")) == Control::Exit {
                    tracing::info!("quit requested");
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.gpu.window().request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(width) = cli.width {
        config.window.width = width;
    }
    if let Some(height) = cli.height {
        config.window.height = height;
    }
    config.validate()?;

    tracing::info!("bouncebox-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
