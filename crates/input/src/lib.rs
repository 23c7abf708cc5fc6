//! Input: key names mapped to a small set of actions.
//!
//! # Invariants
//! - The frame driver consumes actions, never raw key events.
//! - Key names are winit `KeyCode` debug names, so this crate does not
//!   depend on the windowing layer.

pub mod action;
pub mod bindings;

pub use action::Action;
pub use bindings::KeyBindings;
