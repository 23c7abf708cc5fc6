use bouncebox_common::Color;
use bouncebox_scene::{PerspectiveCamera, Scene};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Renderer-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Color the frame is cleared to before drawing.
    pub clear_color: Color,
    /// Offer an XR session if the platform has a runtime.
    pub xr_enabled: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            clear_color: Color::BLUE,
            xr_enabled: true,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and camera, then produces output. It never
/// mutates them; the frame driver owns the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Self::Output;
}

/// Describes each frame as text. Used by the headless CLI and in tests.
#[derive(Debug, Default)]
pub struct TextRenderer {
    settings: RendererSettings,
    frames: u64,
}

impl TextRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            frames: 0,
        }
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> String {
        self.frames += 1;

        // Writing into a String cannot fail.
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame {} (clear={}) ===",
            self.frames, self.settings.clear_color
        );
        let _ = writeln!(
            out,
            "Camera: pos=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.3}",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.fov_degrees,
            camera.aspect
        );
        let _ = writeln!(out, "Lights: {}", scene.lights().len());

        for (id, mesh) in scene.meshes() {
            let p = mesh.transform.position;
            let (axis, angle) = mesh.transform.rotation.to_axis_angle();
            let _ = writeln!(
                out,
                "  [{}] pos=({:.2}, {:.2}, {:.2}) rot={:.3}rad about ({:.2}, {:.2}, {:.2}) color={}",
                id.short(),
                p.x,
                p.y,
                p.z,
                angle,
                axis.x,
                axis.y,
                axis.z,
                mesh.material.color
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncebox_scene::{BoxGeometry, DirectionalLight, MeshNode, StandardMaterial};
    use glam::Vec3;

    #[test]
    fn text_renderer_empty_scene() {
        let scene = Scene::new();
        let camera = PerspectiveCamera::default();
        let mut renderer = TextRenderer::new(RendererSettings::default());
        let output = renderer.render(&scene, &camera);

        assert!(output.contains("Frame 1"));
        assert!(output.contains("clear=#0000ff"));
        assert!(output.contains("Lights: 0"));
    }

    #[test]
    fn text_renderer_lists_meshes() {
        let mut scene = Scene::new();
        scene.add_light(DirectionalLight::default());
        let id = scene.add_mesh(MeshNode::new(
            BoxGeometry::default(),
            StandardMaterial::new(Color::from_hex(0x00ff00)),
        ));
        scene.mesh_mut(id).unwrap().transform.position = Vec3::new(1.0, 2.0, 3.0);

        let mut renderer = TextRenderer::new(RendererSettings::default());
        renderer.render(&scene, &PerspectiveCamera::default());
        let output = renderer.render(&scene, &PerspectiveCamera::default());

        assert_eq!(renderer.frames(), 2);
        assert!(output.contains("Frame 2"));
        assert!(output.contains("pos=(1.00, 2.00, 3.00)"));
        assert!(output.contains("color=#00ff00"));
    }

    #[test]
    fn settings_default_to_blue_with_xr() {
        let settings = RendererSettings::default();
        assert_eq!(settings.clear_color, Color::BLUE);
        assert!(settings.xr_enabled);

        let parsed: RendererSettings = serde_yaml::from_str("clear_color: black").unwrap();
        assert_eq!(parsed.clear_color, Color::BLACK);
        assert!(parsed.xr_enabled);
    }
}
