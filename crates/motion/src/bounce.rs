use crate::clock::FrameClock;
use bouncebox_common::Transform;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Per-frame animation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Radians about the local X axis per frame.
    pub rotate_x: f32,
    /// Radians about the local Y axis per frame.
    pub rotate_y: f32,
    /// X distance per frame while moving right.
    pub step_right: f32,
    /// X distance per frame while moving left.
    pub step_left: f32,
    /// Turnaround threshold on either side of the origin.
    pub bound: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            rotate_x: 0.01,
            rotate_y: 0.02,
            step_right: 0.04,
            step_left: 0.01,
            bound: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Right,
    Left,
}

/// What one frame of motion did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// Seconds since the previous frame. Informational only.
    pub delta_seconds: f32,
    /// Direction the cube moved this frame.
    pub direction: Direction,
    /// Whether the direction changed this frame.
    pub flipped: bool,
}

/// Spins a transform and slides it back and forth along X.
#[derive(Debug, Clone, Default)]
pub struct BounceMotion {
    params: MotionParams,
    direction: Direction,
    clock: FrameClock,
}

impl BounceMotion {
    pub fn new(params: MotionParams) -> Self {
        Self {
            params,
            direction: Direction::Right,
            clock: FrameClock::new(),
        }
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_moving_right(&self) -> bool {
        self.direction == Direction::Right
    }

    /// Advance one frame.
    pub fn update(&mut self, timestamp_ms: f64, transform: &mut Transform) -> FrameStep {
        let delta_seconds = self.clock.tick(timestamp_ms);

        transform.rotate_x(self.params.rotate_x);
        transform.rotate_y(self.params.rotate_y);

        let before = self.direction;
        let x = transform.position.x;
        if x > self.params.bound {
            self.direction = Direction::Left;
        }
        if x < -self.params.bound {
            self.direction = Direction::Right;
        }
        let flipped = before != self.direction;
        if flipped {
            tracing::debug!(x, direction = ?self.direction, "cube turned around");
        }

        transform.position.x += match self.direction {
            Direction::Right => self.params.step_right,
            Direction::Left => -self.params.step_left,
        };

        FrameStep {
            delta_seconds,
            direction: self.direction,
            flipped,
        }
    }

    /// Put the cube back at the origin, unrotated, moving right.
    pub fn reset(&mut self, transform: &mut Transform) {
        self.direction = Direction::Right;
        self.clock.reset();
        transform.position = Vec3::ZERO;
        transform.rotation = Quat::IDENTITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32) -> Transform {
        Transform::from_position(Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn starts_moving_right() {
        let motion = BounceMotion::new(MotionParams::default());
        assert!(motion.is_moving_right());
    }

    #[test]
    fn steps_right_by_fixed_amount() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = at(0.0);
        let step = motion.update(16.0, &mut t);
        assert!((t.position.x - 0.04).abs() < 1e-6);
        assert_eq!(step.direction, Direction::Right);
        assert!(!step.flipped);
    }

    #[test]
    fn step_ignores_elapsed_time() {
        let mut fast = BounceMotion::new(MotionParams::default());
        let mut slow = BounceMotion::new(MotionParams::default());
        let mut a = at(0.2);
        let mut b = at(0.2);
        fast.update(1.0, &mut a);
        slow.update(5_000.0, &mut b);
        assert_eq!(a.position.x, b.position.x);
    }

    #[test]
    fn exactly_at_bound_does_not_flip() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = at(1.0);
        let step = motion.update(0.0, &mut t);
        assert!(!step.flipped);
        assert!(motion.is_moving_right());
        assert!((t.position.x - 1.04).abs() < 1e-6);
    }

    #[test]
    fn past_right_bound_turns_left() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = at(1.01);
        let step = motion.update(0.0, &mut t);
        assert!(step.flipped);
        assert_eq!(step.direction, Direction::Left);
        assert!((t.position.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn past_left_bound_turns_right() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = at(1.5);
        motion.update(0.0, &mut t);
        assert_eq!(motion.direction(), Direction::Left);

        t.position.x = -1.001;
        let step = motion.update(16.0, &mut t);
        assert!(step.flipped);
        assert_eq!(step.direction, Direction::Right);
        assert!((t.position.x - (-1.001 + 0.04)).abs() < 1e-6);
    }

    #[test]
    fn moving_left_steps_slowly() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = at(1.5);
        motion.update(0.0, &mut t);
        let x = t.position.x;
        motion.update(16.0, &mut t);
        assert!((x - t.position.x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn position_stays_within_bounds_over_many_frames() {
        let params = MotionParams::default();
        let mut motion = BounceMotion::new(params);
        let mut t = Transform::default();
        let mut flips = 0;
        for frame in 0..5_000 {
            let step = motion.update(frame as f64 * 16.0, &mut t);
            if step.flipped {
                flips += 1;
            }
            let x = t.position.x;
            assert!(x <= params.bound + params.step_right + 1e-4);
            assert!(x >= -params.bound - params.step_left - 1e-4);
        }
        assert!(flips >= 2);
    }

    #[test]
    fn every_frame_spins() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = Transform::default();
        motion.update(0.0, &mut t);
        let expected = Quat::from_rotation_x(0.01) * Quat::from_rotation_y(0.02);
        assert!(t.rotation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn reports_delta_seconds() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = Transform::default();
        motion.update(1000.0, &mut t);
        let step = motion.update(1020.0, &mut t);
        assert!((step.delta_seconds - 0.02).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut motion = BounceMotion::new(MotionParams::default());
        let mut t = at(1.5);
        motion.update(100.0, &mut t);
        motion.reset(&mut t);
        assert!(motion.is_moving_right());
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
    }

    #[test]
    fn params_fill_missing_fields_from_defaults() {
        let params: MotionParams = serde_yaml::from_str("step_right: 0.1").unwrap();
        assert_eq!(params.step_right, 0.1);
        assert_eq!(params.step_left, 0.01);
        assert_eq!(params.bound, 1.0);
    }
}
