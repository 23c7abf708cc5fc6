use bouncebox_common::Color;
use glam::Vec3;

/// Light arriving from a position toward a target, like sunlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 1.0,
            position: Vec3::Y,
            target: Vec3::ZERO,
        }
    }
}

impl DirectionalLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            ..Self::default()
        }
    }

    /// Unit vector the light travels along. Falls back to straight down
    /// when position and target coincide.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Y)
    }

    /// Linear color premultiplied by intensity.
    pub fn radiance(&self) -> [f32; 3] {
        self.color.linear().map(|c| c * self.intensity)
    }
}
