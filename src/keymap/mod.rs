//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::KeyBinding;
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Create a keymap from a preset with no overrides
    pub fn with_preset(preset: KeymapPreset) -> Self {
        Self {
            preset,
            overrides: Vec::new(),
        }
    }

    /// Get the action for a key event, checking overrides first then preset
    /// Note: If an action is overridden, preset bindings for that action are ignored
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Shorthand for `get_action` on a crossterm key event
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.get_action(key.code, key.modifiers)
    }

    /// Get all bindings (overrides + preset)
    /// Overrides shadow preset bindings for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        for preset_binding in self.preset.bindings() {
            let is_overridden = self
                .overrides
                .iter()
                .any(|o| o.action == preset_binding.action);
            if !is_overridden {
                bindings.push(preset_binding);
            }
        }
        bindings
    }

    /// Get the display string for navigation keys (up/down)
    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown)
        )
    }

    /// Get the display string for confirm key
    pub fn confirm_display(&self) -> String {
        self.get_key_display_for_action(Action::Confirm)
    }

    /// Get the display string for a specific action (e.g., Action::Save -> "Ctrl+S")
    /// Checks overrides first, then preset. Returns generic fallback if not found.
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        if let Some(binding) = self.overrides.iter().find(|b| b.action == action) {
            return binding.display();
        }

        if let Some(binding) = self
            .preset
            .bindings()
            .into_iter()
            .find(|b| b.action == action)
        {
            return binding.display();
        }

        format!("{:?}", action)
    }

    /// Footer text for screens driven by a selectable list
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}: Navigate | {}: Select | {}: Quit",
            self.navigation_display(),
            self.confirm_display(),
            self.get_key_display_for_action(Action::Quit)
        )
    }

    /// Footer text for detail panels
    pub fn footer_detail(&self) -> String {
        format!(
            "Any key: Back | {}: Quit",
            self.get_key_display_for_action(Action::Quit)
        )
    }

    /// Footer text for detail panels whose cancel key leaves the whole screen
    pub fn footer_detail_with_exit(&self) -> String {
        format!(
            "{}: Main Menu | Any key: Back | {}: Quit",
            self.get_key_display_for_action(Action::Cancel),
            self.get_key_display_for_action(Action::Quit)
        )
    }

    /// Footer text for text entry
    pub fn footer_text_entry(&self, multiline: bool) -> String {
        let submit = if multiline {
            self.get_key_display_for_action(Action::Save)
        } else {
            self.confirm_display()
        };
        let mut text = format!("{}: Submit", submit);
        if multiline {
            text.push_str(&format!(" | {}: New line", self.confirm_display()));
        }
        text.push_str(&format!(
            " | {}: Quit",
            self.get_key_display_for_action(Action::Quit)
        ));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        // Plain letters stay free for typing in the standard preset
        assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("w", Action::MoveUp)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
            Some(Action::MoveUp)
        );
        // The preset's Up arrow is shadowed by the override
        assert_eq!(keymap.get_action(KeyCode::Up, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap::with_preset(KeymapPreset::Vim);
        assert_eq!(
            keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::MoveDown)
        );
    }

    #[test]
    fn test_footer_reflects_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.footer_navigation(),
            "↑/↓: Navigate | Enter: Select | Ctrl+C: Quit"
        );
        assert!(keymap.footer_text_entry(true).starts_with("Ctrl+S: Submit"));
        assert!(keymap.footer_text_entry(false).starts_with("Enter: Submit"));
    }
}
