use crate::keymap::Action;

/// An append-only text buffer backing a text field.
///
/// Characters are only ever added at the end and removed from the end, so the
/// buffer needs no cursor bookkeeping.
///
/// # Example
/// ```
/// use explore_nepal::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.push('h');
/// input.push('i');
/// input.pop();
/// assert_eq!(input.text(), "h");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append a printable character. Control characters are ignored.
    ///
    /// Returns true if the buffer changed.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Append a line break.
    pub fn push_newline(&mut self) {
        self.text.push('\n');
    }

    /// Remove the last character. A no-op on an empty buffer.
    ///
    /// Returns true if a character was removed.
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Check if an action is safe to process when a text input is focused.
    ///
    /// Returns false for actions that should be suppressed so their key can be
    /// typed instead (like 'j' bound to MoveDown in the vim preset).
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Confirm | Action::Save | Action::Backspace | Action::DeleteChar
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut input = TextInput::new();
        assert!(input.push('a'));
        assert!(input.push('ß'));
        assert_eq!(input.text(), "aß");

        assert!(input.pop());
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut input = TextInput::new();
        assert!(!input.pop());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TextInput::new();
        assert!(!input.push('\u{7}'));
        assert!(!input.push('\n'));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_newline_appends() {
        let mut input = TextInput::with_text("hi");
        input.push_newline();
        assert_eq!(input.text(), "hi\n");
    }

    #[test]
    fn test_action_filtering() {
        assert!(TextInput::is_action_allowed_when_focused(&Action::Confirm));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Save));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::MoveDown));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Cancel));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Quit));
    }
}
