//! Preset keymaps: Standard, Vim, Emacs
//!
//! Every preset binds Ctrl+C to quit and Ctrl+S to submit multiline text, so a
//! text field never loses those two keys.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrow keys, Enter, Esc
    #[default]
    Standard,
    /// Arrows plus j/k
    Vim,
    /// Arrows plus Ctrl+N/Ctrl+P
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+s", Action::Save),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
    ];
    bindings.extend(common_bindings());
    bindings
}

/// Vim-style bindings (j/k alongside the arrows)
fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
    ];
    bindings.extend(common_bindings());
    bindings
}

/// Emacs-style bindings (Ctrl+P/Ctrl+N alongside the arrows)
fn emacs_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("ctrl+h", Action::Backspace),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
    ];
    bindings.extend(common_bindings());
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_binds_core_actions() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            let bindings = preset.bindings();
            for action in [
                Action::MoveUp,
                Action::MoveDown,
                Action::Confirm,
                Action::Save,
                Action::Quit,
                Action::Backspace,
            ] {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} preset is missing {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_all_preset_keys_parse() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "unparseable key {}", binding.key);
            }
        }
    }

    #[test]
    fn test_preset_serialization() {
        let json = serde_json::to_string(&KeymapPreset::Emacs).unwrap();
        assert_eq!(json, "\"emacs\"");
    }
}
