//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move the highlight up in a list (wraps to the bottom)
    MoveUp,
    /// Move the highlight down in a list (wraps to the top)
    MoveDown,

    // ============ Selection & Confirmation ============
    /// Commit the highlighted option / submit a single-line field (Enter)
    Confirm,
    /// Leave a detail view (Esc)
    Cancel,
    /// Submit a multiline field (Ctrl+S)
    Save,

    // ============ Global ============
    /// Quit the application from any screen
    Quit,

    // ============ Text editing ============
    /// Remove the last character of a text field
    Backspace,
    /// Remove the last character of a text field (Delete key)
    DeleteChar,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::Confirm => "Select / submit",
            Action::Cancel => "Back",
            Action::Save => "Submit multiline text",
            Action::Quit => "Quit",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp | Action::MoveDown => "Navigation",
            Action::Confirm | Action::Cancel | Action::Save => "Selection",
            Action::Quit => "Global",
            Action::Backspace | Action::DeleteChar => "Text Editing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::MoveUp.description(), "Move up");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveDown.category(), "Navigation");
        assert_eq!(Action::Save.category(), "Selection");
        assert_eq!(Action::Backspace.category(), "Text Editing");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::DeleteChar).unwrap();
        assert_eq!(json, "\"delete_char\"");

        let action: Action = serde_json::from_str("\"move_down\"").unwrap();
        assert_eq!(action, Action::MoveDown);
    }
}
