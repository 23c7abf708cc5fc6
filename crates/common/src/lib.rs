//! Shared value types used by every bouncebox crate.

mod color;
mod types;

pub use color::{Color, ColorError};
pub use types::{NodeId, Transform};
