use serde::{Deserialize, Serialize};

/// A high-level action produced by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Bump the on-screen click counter.
    IncrementCounter,
    /// Show or hide the overlay panel.
    ToggleOverlay,
    /// Freeze or resume the animation.
    TogglePause,
    /// Put the cube back at the origin.
    ResetCube,
    /// Close the application.
    Quit,
    /// Bound to nothing; used to unbind a default key.
    Noop,
}
