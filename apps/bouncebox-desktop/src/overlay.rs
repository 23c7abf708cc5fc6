use bouncebox_app::DemoApp;
use bouncebox_input::Action;
use bouncebox_render::DrawingSurface;
use bouncebox_render_wgpu::GpuContext;
use egui::Context as EguiContext;
use winit::event::WindowEvent;
use winit::window::Window;

/// egui state for the on-screen panel.
pub struct OverlayPainter {
    ctx: EguiContext,
    winit_state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl OverlayPainter {
    pub fn new(gpu: &GpuContext) -> Self {
        let ctx = EguiContext::default();
        let window = gpu.window();
        let winit_state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(gpu.device(), gpu.format(), None, 1, false);
        Self {
            ctx,
            winit_state,
            renderer,
        }
    }

    /// Feed a window event to egui. Returns true if egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.winit_state.on_window_event(window, event).consumed
    }

    /// Run the UI and draw it over `view`.
    pub fn paint(&mut self, gpu: &GpuContext, view: &wgpu::TextureView, demo: &mut DemoApp) {
        let window = gpu.window();
        let raw_input = self.winit_state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| draw_ui(ctx, demo));

        self.winit_state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = gpu.backing_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let (device, queue) = (gpu.device(), gpu.queue());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        self.renderer
            .update_buffers(device, queue, &mut encoder, &paint_jobs, &screen_descriptor);
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn draw_ui(ctx: &EguiContext, demo: &mut DemoApp) {
    if !demo.overlay().is_visible() {
        return;
    }

    let heading = demo.overlay().heading().to_string();
    egui::Window::new(heading)
        .default_pos([12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("winit + wgpu + glam");
            if ui.button(demo.overlay().counter_label()).clicked() {
                demo.apply(Action::IncrementCounter);
            }

            let ar = demo.overlay().ar();
            if ui
                .add_enabled(ar.is_enabled(), egui::Button::new(ar.label()))
                .clicked()
            {
                demo.overlay_mut().ar_mut().toggle();
            }

            ui.separator();
            ui.label(format!("Frame: {}", demo.frame_count()));
            if let Some(t) = demo.cube_transform() {
                ui.label(format!("Cube x: {:+.2}", t.position.x));
            }
            ui.label(format!("Moving: {:?}", demo.motion().direction()));
            if demo.is_paused() {
                ui.label("Paused");
            }

            ui.separator();
            ui.small("C: count | Space: pause | R: reset | F1: hide | Esc: quit");
        });
}
