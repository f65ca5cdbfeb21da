//! Text field primitive.
//!
//! Single-line fields submit on Enter. Multiline fields treat Enter as a line
//! break and submit on the Save binding (Ctrl+S). A field submits at most once.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::text_input::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Result of feeding one key to a [`TextField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Ignored,
    /// The buffer changed
    Edited,
    /// The field was submitted with this text
    Submitted(String),
}

#[derive(Debug, Clone)]
pub struct TextField {
    input: TextInput,
    placeholder: String,
    multiline: bool,
    active: bool,
}

impl TextField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: TextInput::new(),
            placeholder: placeholder.into(),
            multiline: false,
            active: true,
        }
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.input = TextInput::with_text(value);
        self
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// False once the field has been submitted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one key press to the field.
    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &Keymap) -> FieldOutcome {
        if !self.active {
            return FieldOutcome::Ignored;
        }

        let action = keymap
            .action_for(key)
            .filter(TextInput::is_action_allowed_when_focused);

        match action {
            Some(Action::Confirm) if self.multiline => {
                self.input.push_newline();
                FieldOutcome::Edited
            }
            Some(Action::Confirm) => self.submit(),
            Some(Action::Save) if self.multiline => self.submit(),
            Some(Action::Backspace | Action::DeleteChar) => {
                if self.input.pop() {
                    FieldOutcome::Edited
                } else {
                    FieldOutcome::Ignored
                }
            }
            Some(_) => FieldOutcome::Ignored,
            None => match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    if self.input.push(c) {
                        FieldOutcome::Edited
                    } else {
                        FieldOutcome::Ignored
                    }
                }
                _ => FieldOutcome::Ignored,
            },
        }
    }

    fn submit(&mut self) -> FieldOutcome {
        self.active = false;
        FieldOutcome::Submitted(self.input.text().to_string())
    }

    /// Rows needed: prompt, bordered box and hint.
    pub fn required_height(&self) -> u16 {
        let body = if self.multiline {
            (self.input.text().lines().count().max(1) as u16 + 1).max(4)
        } else {
            1
        };
        1 + body + 2 + 1
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, keymap: &Keymap) {
        let t = theme();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(self.placeholder.as_str()).style(t.emphasis_style()),
            chunks[0],
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.active {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        let inner = block.inner(chunks[1]);
        let body = Paragraph::new(self.input.text())
            .style(t.text_style())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(body, chunks[1]);

        if self.active {
            let last_line = self.input.text().split('\n').next_back().unwrap_or("");
            let line_count = self.input.text().split('\n').count().max(1) as u16;
            let x = inner.x + (last_line.chars().count() as u16).min(inner.width.saturating_sub(1));
            let y = inner.y + (line_count - 1).min(inner.height.saturating_sub(1));
            frame.set_cursor_position((x, y));
        }

        let hint = if self.multiline {
            format!(
                "{} to submit, {} for a new line",
                keymap.get_key_display_for_action(Action::Save),
                keymap.confirm_display()
            )
        } else {
            format!("{} to submit", keymap.confirm_display())
        };
        frame.render_widget(Paragraph::new(hint).style(t.muted_style()), chunks[2]);
    }
}
