//! Selectable list primitive.
//!
//! A vertical list of labeled options with a single highlighted row. Up/down
//! wrap around; confirming commits the highlighted option once and then the
//! list stops reacting until its owner replaces it.

use crate::keymap::{Action, Keymap};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::list_navigation::ListStateExt;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

/// Text shown in place of the list when it has no options.
pub const EMPTY_LIST_TEXT: &str = "No options available";

/// A label/value pair. `value` is unique within one list and is what owners
/// use to map a selection back to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Result of feeding one key to a [`SelectList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// The key had no effect
    Ignored,
    /// The highlight moved
    Moved,
    /// The highlighted option was committed
    Selected(SelectOption),
}

#[derive(Debug, Clone)]
pub struct SelectList {
    items: Vec<SelectOption>,
    state: ListState,
    active: bool,
    placeholder: Option<String>,
    highlight: Option<Color>,
}

impl SelectList {
    /// Create a list highlighting the first option (nothing when empty).
    pub fn new(items: Vec<SelectOption>) -> Self {
        let mut state = ListState::default();
        state.select_clamped(0, items.len());
        Self {
            items,
            state,
            active: true,
            placeholder: None,
            highlight: None,
        }
    }

    /// Prompt line rendered above the options.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Accent used for the highlighted row (defaults to the theme's primary color).
    pub fn highlight_color(mut self, color: Color) -> Self {
        self.highlight = Some(color);
        self
    }

    /// Start with `index` highlighted, clamped into range.
    pub fn with_highlighted(mut self, index: usize) -> Self {
        self.state.select_clamped(index, self.items.len());
        self
    }

    /// Start with the option carrying `value` highlighted, if present.
    pub fn with_highlighted_value(self, value: &str) -> Self {
        match self.items.iter().position(|o| o.value == value) {
            Some(index) => self.with_highlighted(index),
            None => self,
        }
    }

    pub fn items(&self) -> &[SelectOption] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highlighted index; `None` only for an empty list.
    pub fn highlighted(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.highlighted().and_then(|i| self.items.get(i))
    }

    /// False once an option has been committed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one key press to the list.
    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &Keymap) -> ListOutcome {
        if !self.active || self.items.is_empty() {
            return ListOutcome::Ignored;
        }

        match keymap.action_for(key) {
            Some(Action::MoveUp) => {
                self.state.select_previous_wrap(self.items.len());
                ListOutcome::Moved
            }
            Some(Action::MoveDown) => {
                self.state.select_next_wrap(self.items.len());
                ListOutcome::Moved
            }
            Some(Action::Confirm) => match self.highlighted_option().cloned() {
                Some(option) => {
                    self.active = false;
                    ListOutcome::Selected(option)
                }
                None => ListOutcome::Ignored,
            },
            _ => ListOutcome::Ignored,
        }
    }

    /// Rows needed to show every option plus the placeholder.
    pub fn required_height(&self) -> u16 {
        let rows = self.items.len().max(1) as u16;
        rows + u16::from(self.placeholder.is_some())
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let list_area = match &self.placeholder {
            Some(placeholder) => {
                let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
                    .split(area);
                frame.render_widget(
                    Paragraph::new(placeholder.as_str()).style(t.emphasis_style()),
                    chunks[0],
                );
                chunks[1]
            }
            None => area,
        };

        if self.items.is_empty() {
            frame.render_widget(
                Paragraph::new(EMPTY_LIST_TEXT)
                    .style(t.muted_style())
                    .wrap(Wrap { trim: true }),
                list_area,
            );
            return;
        }

        let accent = self.highlight.unwrap_or(t.primary);
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|option| ListItem::new(option.label.as_str()).style(t.text_style()))
            .collect();
        let list = List::new(items)
            .highlight_style(t.highlight_style(accent))
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, list_area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ab_list() -> SelectList {
        SelectList::new(vec![SelectOption::new("A", "a"), SelectOption::new("B", "b")])
    }

    fn options(n: usize) -> Vec<SelectOption> {
        (0..n)
            .map(|i| SelectOption::new(format!("Option {}", i), i.to_string()))
            .collect()
    }

    #[test]
    fn test_down_presses_are_modular() {
        let keymap = Keymap::default();
        for len in 1..6 {
            for start in 0..len {
                for presses in 0..(2 * len + 1) {
                    let mut list = SelectList::new(options(len)).with_highlighted(start);
                    for _ in 0..presses {
                        list.handle_key(&key(KeyCode::Down), &keymap);
                    }
                    assert_eq!(list.highlighted(), Some((start + presses) % len));
                }
            }
        }
    }

    #[test]
    fn test_up_from_first_wraps_to_last() {
        let keymap = Keymap::default();
        for len in 1..6 {
            let mut list = SelectList::new(options(len));
            assert_eq!(list.handle_key(&key(KeyCode::Up), &keymap), ListOutcome::Moved);
            assert_eq!(list.highlighted(), Some(len - 1));
        }
    }

    #[test]
    fn test_two_item_cycle_then_select() {
        let keymap = Keymap::default();
        let mut list = ab_list();
        list.handle_key(&key(KeyCode::Down), &keymap);
        assert_eq!(list.highlighted(), Some(1));
        list.handle_key(&key(KeyCode::Down), &keymap);
        assert_eq!(list.highlighted(), Some(0));

        let outcome = list.handle_key(&key(KeyCode::Enter), &keymap);
        assert_eq!(outcome, ListOutcome::Selected(SelectOption::new("A", "a")));
    }

    #[test]
    fn test_selection_fires_once() {
        let keymap = Keymap::default();
        let mut list = ab_list();
        list.handle_key(&key(KeyCode::Down), &keymap);

        let first = list.handle_key(&key(KeyCode::Enter), &keymap);
        assert_eq!(first, ListOutcome::Selected(SelectOption::new("B", "b")));
        assert!(!list.is_active());

        assert_eq!(list.handle_key(&key(KeyCode::Enter), &keymap), ListOutcome::Ignored);
        assert_eq!(list.handle_key(&key(KeyCode::Down), &keymap), ListOutcome::Ignored);
        assert_eq!(list.highlighted(), Some(1));
    }

    #[test]
    fn test_empty_list_ignores_everything() {
        let keymap = Keymap::default();
        let mut list = SelectList::new(Vec::new());
        for code in [KeyCode::Down, KeyCode::Up, KeyCode::Enter] {
            assert_eq!(list.handle_key(&key(code), &keymap), ListOutcome::Ignored);
            assert_eq!(list.highlighted(), None);
        }
        assert!(list.is_active());
    }

    #[test]
    fn test_vim_keys_navigate() {
        let keymap = Keymap::with_preset(crate::keymap::KeymapPreset::Vim);
        let mut list = ab_list();
        list.handle_key(&key(KeyCode::Char('j')), &keymap);
        assert_eq!(list.highlighted(), Some(1));
        list.handle_key(&key(KeyCode::Char('k')), &keymap);
        assert_eq!(list.highlighted(), Some(0));
    }

    #[test]
    fn test_with_highlighted_value() {
        let list = ab_list().with_highlighted_value("b");
        assert_eq!(list.highlighted(), Some(1));
        let list = ab_list().with_highlighted_value("missing");
        assert_eq!(list.highlighted(), Some(0));
    }

    #[test]
    fn test_empty_list_renders_empty_state() {
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        let mut list = SelectList::new(Vec::new()).placeholder("Pick one");
        terminal.draw(|frame| list.render(frame, frame.area())).unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Pick one"));
        assert!(rendered.contains(EMPTY_LIST_TEXT));
    }

    #[test]
    fn test_highlight_color_paints_highlighted_row() {
        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        let mut list = ab_list().with_highlighted(1).highlight_color(Color::Magenta);
        terminal.draw(|frame| list.render(frame, frame.area())).unwrap();

        let expected = theme().highlight_style(Color::Magenta);
        let buffer = terminal.backend().buffer();
        // Row 1 holds "B", the highlighted option
        let cell = (0..20)
            .map(|x| &buffer[(x, 1)])
            .find(|cell| cell.symbol() == "B")
            .unwrap();
        assert_eq!(cell.fg, expected.fg.unwrap_or(Color::Reset));
    }
}
