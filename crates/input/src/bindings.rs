use crate::action::Action;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Key name to action table.
///
/// Deserializing merges the given entries over the defaults, so a config
/// file only lists the keys it changes. Bind a key to `noop` to disable it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyBindings {
    map: BTreeMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("KeyC", Action::IncrementCounter);
        bindings.bind("F1", Action::ToggleOverlay);
        bindings.bind("Space", Action::TogglePause);
        bindings.bind("KeyR", Action::ResetCube);
        bindings.bind("Escape", Action::Quit);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, action: Action) {
        self.map.insert(key.into(), action);
    }

    /// Look up the action for a key. Keys bound to [`Action::Noop`] yield `None`.
    pub fn action_for(&self, key: &str) -> Option<Action> {
        match self.map.get(key) {
            Some(Action::Noop) | None => None,
            Some(action) => Some(*action),
        }
    }

    /// Keys bound to `action`, in name order.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = &str> {
        self.map
            .iter()
            .filter(move |(_, a)| **a == action)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let overrides = BTreeMap::<String, Action>::deserialize(deserializer)?;
        let mut bindings = Self::default();
        for (key, action) in overrides {
            tracing::debug!(%key, ?action, "key binding override");
            bindings.bind(key, action);
        }
        Ok(bindings)
    }
}
