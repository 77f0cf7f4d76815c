use crate::action::Action;
use std::collections::BTreeMap;

/// Errors from building key bindings out of configuration.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("key `{key}` is bound to unknown action `{action}`")]
    UnknownAction { key: String, action: String },
    #[error("empty key name in bindings")]
    EmptyKey,
}

/// Maps logical key names to navigation actions.
///
/// Key names are compared case-insensitively, so `W` and `w` hit the same
/// binding. A literal space is accepted as `space`. Several keys may share
/// one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: BTreeMap<String, Action>,
}

impl Default for KeyBindings {
    /// WASD to move, Shift/Space to descend/ascend, E to go fast.
    fn default() -> Self {
        let map = [
            ("w", Action::MoveForward),
            ("s", Action::MoveBackward),
            ("a", Action::MoveLeft),
            ("d", Action::MoveRight),
            ("shift", Action::Descend),
            ("space", Action::Ascend),
            ("e", Action::Fast),
        ]
        .into_iter()
        .map(|(k, a)| (k.to_string(), a))
        .collect();
        Self { map }
    }
}

impl KeyBindings {
    /// A binding set with no keys at all.
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// The default bindings with `overrides` (key name -> action name) merged on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, BindingError> {
        let mut bindings = Self::default();
        for (key, action_name) in overrides {
            let action = action_name
                .parse::<Action>()
                .map_err(|()| BindingError::UnknownAction {
                    key: key.clone(),
                    action: action_name.clone(),
                })?;
            bindings.bind(key, action)?;
        }
        Ok(bindings)
    }

    pub fn bind(&mut self, key: &str, action: Action) -> Result<(), BindingError> {
        let key = normalize(key).ok_or(BindingError::EmptyKey)?;
        tracing::debug!(key = %key, %action, "bind key");
        self.map.insert(key, action);
        Ok(())
    }

    /// Action for a key name, or `None` when the key is not bound.
    pub fn action_for(&self, key: &str) -> Option<Action> {
        normalize(key).and_then(|k| self.map.get(&k).copied())
    }

    /// Keys bound to `action`, in name order.
    pub fn keys_for(&self, action: Action) -> Vec<&str> {
        self.map
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn normalize(key: &str) -> Option<String> {
    if key == " " {
        return Some("space".into());
    }
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_action() {
        let b = KeyBindings::default();
        for action in Action::ALL {
            assert!(!b.keys_for(action).is_empty(), "{action} unbound");
        }
        assert_eq!(b.len(), 7);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let b = KeyBindings::default();
        assert_eq!(b.action_for("W"), Some(Action::MoveForward));
        assert_eq!(b.action_for("Shift"), Some(Action::Descend));
        assert_eq!(b.action_for(" "), Some(Action::Ascend));
    }

    #[test]
    fn unknown_key_is_ignored() {
        let b = KeyBindings::default();
        assert_eq!(b.action_for("q"), None);
        assert_eq!(b.action_for(""), None);
    }

    #[test]
    fn overrides_add_and_replace() {
        let overrides = BTreeMap::from([
            ("q".to_string(), "descend".to_string()),
            ("e".to_string(), "ascend".to_string()),
        ]);
        let b = KeyBindings::with_overrides(&overrides).unwrap();
        assert_eq!(b.action_for("q"), Some(Action::Descend));
        assert_eq!(b.action_for("e"), Some(Action::Ascend));
        assert_eq!(b.keys_for(Action::Fast), Vec::<&str>::new());
        assert_eq!(b.keys_for(Action::Descend), vec!["q", "shift"]);
    }

    #[test]
    fn overrides_reject_unknown_action() {
        let overrides = BTreeMap::from([("j".to_string(), "jump".to_string())]);
        let err = KeyBindings::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, BindingError::UnknownAction { .. }));
        assert!(err.to_string().contains("jump"));
    }

    #[test]
    fn empty_key_is_rejected() {
        let mut b = KeyBindings::empty();
        assert!(matches!(b.bind("  ", Action::Fast), Err(BindingError::EmptyKey)));
        assert!(b.is_empty());
    }
}
