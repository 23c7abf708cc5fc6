use crate::config::DemoConfig;
use crate::overlay::{ArButton, Overlay};
use bouncebox_common::{NodeId, Transform};
use bouncebox_input::{Action, KeyBindings};
use bouncebox_motion::{BounceMotion, FrameStep};
use bouncebox_render::{DrawingSurface, Renderer, RendererSettings, resize_to_display_size};
use bouncebox_scene::{
    BoxGeometry, DirectionalLight, MeshNode, PerspectiveCamera, Scene, StandardMaterial,
};
use glam::Vec3;

/// What the caller should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// What one call of the frame callback did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// 1-based frame number.
    pub frame: u64,
    /// Whether the surface's backing store was resized this frame.
    pub resized: bool,
    /// Motion applied this frame; `None` while paused.
    pub step: Option<FrameStep>,
}

/// Scene, camera and animation state for the bouncing cube.
pub struct DemoApp {
    scene: Scene,
    camera: PerspectiveCamera,
    cube: NodeId,
    motion: BounceMotion,
    settings: RendererSettings,
    bindings: KeyBindings,
    overlay: Overlay,
    paused: bool,
    frame: u64,
}

impl DemoApp {
    /// Build the stock scene: one directional light and one box at the origin,
    /// viewed from `camera.position`.
    ///
    /// No XR runtime is available to this build, so the AR button always
    /// reports unsupported.
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();

        scene.add_light(DirectionalLight {
            color: config.light.color,
            intensity: config.light.intensity,
            position: Vec3::from(config.light.position),
            target: Vec3::ZERO,
        });

        let [w, h, d] = config.cube.size;
        let cube = scene.add_mesh(MeshNode::new(
            BoxGeometry::new(w, h, d),
            StandardMaterial::new(config.cube.color),
        ));

        let mut camera = PerspectiveCamera::new(config.camera.fov_degrees, 1.0);
        camera.set_aspect(config.window.width, config.window.height);
        camera.position = Vec3::from(config.camera.position);

        let overlay = Overlay::new(
            config.window.title.clone(),
            ArButton::new(config.renderer.xr_enabled, false),
        );

        tracing::info!(
            cube = %cube.short(),
            color = %config.cube.color,
            clear = %config.renderer.clear_color,
            "demo scene ready"
        );

        Self {
            scene,
            camera,
            cube,
            motion: BounceMotion::new(config.motion),
            settings: config.renderer,
            bindings: config.bindings.clone(),
            overlay,
            paused: false,
            frame: 0,
        }
    }

    /// Per-frame update: sync the surface size, then advance the animation.
    ///
    /// Call [`DemoApp::render`] afterwards, or use [`DemoApp::frame`] to do both.
    pub fn prepare_frame<S: DrawingSurface + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        surface: &mut S,
    ) -> FrameReport {
        self.frame += 1;

        let resized = resize_to_display_size(surface);
        if resized {
            let size = surface.display_size();
            self.camera.set_aspect(size.width, size.height);
            tracing::debug!(%size, aspect = self.camera.aspect, "camera aspect updated");
        }

        let step = if self.paused {
            None
        } else {
            self.scene
                .mesh_mut(self.cube)
                .map(|cube| self.motion.update(timestamp_ms, &mut cube.transform))
        };

        FrameReport {
            frame: self.frame,
            resized,
            step,
        }
    }

    /// Draw the current state.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> R::Output {
        renderer.render(&self.scene, &self.camera)
    }

    /// The whole frame callback: update, then draw.
    pub fn frame<S, R>(
        &mut self,
        timestamp_ms: f64,
        surface: &mut S,
        renderer: &mut R,
    ) -> (FrameReport, R::Output)
    where
        S: DrawingSurface + ?Sized,
        R: Renderer + ?Sized,
    {
        let report = self.prepare_frame(timestamp_ms, surface);
        let output = self.render(renderer);
        (report, output)
    }

    pub fn apply(&mut self, action: Action) -> Control {
        match action {
            Action::IncrementCounter => self.overlay.increment(),
            Action::ToggleOverlay => self.overlay.toggle_visible(),
            Action::TogglePause => {
                self.paused = !self.paused;
                tracing::info!(paused = self.paused, "animation toggled");
            }
            Action::ResetCube => {
                if let Some(cube) = self.scene.mesh_mut(self.cube) {
                    self.motion.reset(&mut cube.transform);
                    tracing::info!("cube reset");
                }
            }
            Action::Quit => return Control::Exit,
            Action::Noop => {}
        }
        Control::Continue
    }

    /// Translate a key name through the bindings and apply it.
    pub fn handle_key(&mut self, key: &str) -> Control {
        match self.bindings.action_for(key) {
            Some(action) => self.apply(action),
            None => Control::Continue,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn cube_id(&self) -> NodeId {
        self.cube
    }

    pub fn cube_transform(&self) -> Option<&Transform> {
        self.scene.mesh(self.cube).map(|m| &m.transform)
    }

    pub fn motion(&self) -> &BounceMotion {
        &self.motion
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncebox_motion::Direction;
    use bouncebox_render::{SurfaceSize, TextRenderer, VirtualSurface};

    fn app() -> DemoApp {
        DemoApp::new(&DemoConfig::default())
    }

    fn surface() -> VirtualSurface {
        VirtualSurface::new(SurfaceSize::new(500, 500))
    }

    fn cube_x(app: &DemoApp) -> f32 {
        app.cube_transform().unwrap().position.x
    }

    #[test]
    fn builds_stock_scene() {
        let app = app();
        assert_eq!(app.scene().mesh_count(), 1);
        assert_eq!(app.scene().lights().len(), 1);
        assert_eq!(app.camera().position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(app.camera().fov_degrees, 75.0);
        assert_eq!(app.camera().aspect, 1.0);
        assert_eq!(cube_x(&app), 0.0);
        assert_eq!(app.overlay().ar(), ArButton::Unsupported);
    }

    #[test]
    fn frame_moves_cube_right() {
        let mut app = app();
        let mut s = surface();
        let report = app.prepare_frame(16.0, &mut s);
        assert_eq!(report.frame, 1);
        assert!(!report.resized);
        assert_eq!(report.step.unwrap().direction, Direction::Right);
        assert!((cube_x(&app) - 0.04).abs() < 1e-6);
    }

    #[test]
    fn aspect_updates_only_on_resize() {
        let mut app = app();
        let mut s = surface();
        app.prepare_frame(0.0, &mut s);
        assert_eq!(app.camera().aspect, 1.0);

        s.set_display_size(SurfaceSize::new(1000, 500));
        let report = app.prepare_frame(16.0, &mut s);
        assert!(report.resized);
        assert_eq!(app.camera().aspect, 2.0);
        assert_eq!(s.backing_size(), SurfaceSize::new(1000, 500));

        let report = app.prepare_frame(32.0, &mut s);
        assert!(!report.resized);
        assert_eq!(s.resize_count(), 1);
    }

    #[test]
    fn mismatched_initial_backing_resizes_on_first_frame() {
        let mut app = app();
        let mut s = surface();
        s.set_display_size(SurfaceSize::new(300, 150));
        let report = app.prepare_frame(0.0, &mut s);
        assert!(report.resized);
        assert_eq!(app.camera().aspect, 2.0);
    }

    #[test]
    fn cube_bounces_between_bounds() {
        let mut app = app();
        let mut s = surface();
        let mut saw_left = false;
        for i in 0..400 {
            let report = app.prepare_frame(i as f64 * 16.0, &mut s);
            if report.step.unwrap().direction == Direction::Left {
                saw_left = true;
            }
            let x = cube_x(&app);
            assert!((-1.02..=1.05).contains(&x), "x out of range: {x}");
        }
        assert!(saw_left);
    }

    #[test]
    fn pause_freezes_motion() {
        let mut app = app();
        let mut s = surface();
        app.prepare_frame(0.0, &mut s);
        assert_eq!(app.apply(Action::TogglePause), Control::Continue);
        let x = cube_x(&app);
        let report = app.prepare_frame(16.0, &mut s);
        assert!(report.step.is_none());
        assert_eq!(cube_x(&app), x);
        assert!(app.is_paused());
    }

    #[test]
    fn paused_frames_still_resize() {
        let mut app = app();
        let mut s = surface();
        app.apply(Action::TogglePause);
        s.set_display_size(SurfaceSize::new(400, 200));
        assert!(app.prepare_frame(0.0, &mut s).resized);
    }

    #[test]
    fn reset_returns_cube_to_origin() {
        let mut app = app();
        let mut s = surface();
        for i in 0..10 {
            app.prepare_frame(i as f64, &mut s);
        }
        app.apply(Action::ResetCube);
        assert_eq!(cube_x(&app), 0.0);
        assert!(app.motion().is_moving_right());
    }

    #[test]
    fn keys_route_through_bindings() {
        let mut app = app();
        assert_eq!(app.handle_key("KeyC"), Control::Continue);
        assert_eq!(app.overlay().count(), 1);
        assert_eq!(app.handle_key("F1"), Control::Continue);
        assert!(!app.overlay().is_visible());
        assert_eq!(app.handle_key("KeyZ"), Control::Continue);
        assert_eq!(app.handle_key("Escape"), Control::Exit);
    }

    #[test]
    fn frame_renders_after_update() {
        let mut app = app();
        let mut s = surface();
        let mut renderer = TextRenderer::new(*app.settings());
        let (report, text) = app.frame(16.0, &mut s, &mut renderer);
        assert_eq!(report.frame, 1);
        assert!(text.contains("Frame 1"));
        assert!(text.contains("pos=(0.04, 0.00, 0.00)"));
        assert!(text.contains("color=#00ff00"));
    }
}
