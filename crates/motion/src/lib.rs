//! Cube animation: a fixed spin per frame and a back-and-forth slide on X.
//!
//! # Invariants
//! - Position steps are per frame, not per second. The frame clock's delta is
//!   reported but never applied to motion.
//! - The direction only changes when the position is strictly past a bound.

mod bounce;
mod clock;

pub use bounce::{BounceMotion, Direction, FrameStep, MotionParams};
pub use clock::FrameClock;
