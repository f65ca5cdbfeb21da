//! Screen trait and associated types.
//!
//! Screens own their view state, draw themselves and turn key presses into a
//! [`ScreenAction`]. They never terminate the process or reach for their
//! host: leaving a screen is expressed by returning [`ScreenAction::Exit`],
//! and the host decides what that means.

use crate::keymap::Keymap;
use crate::store::MessageStore;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Active key bindings, used for footer hints.
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }
}

/// Context provided for handling events.
///
/// Gives screens the key bindings and the message store.
pub struct ScreenContext<'a> {
    pub keymap: &'a Keymap,
    pub store: &'a mut dyn MessageStore,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap, store: &'a mut dyn MessageStore) -> Self {
        Self { keymap, store }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Leave this screen. Under the root menu this returns to the menu; a
    /// screen run on its own ends the application.
    Exit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     list: SelectList,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         self.list.render(frame, area);
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
///         let Some(key) = key_press(&event) else {
///             return Ok(ScreenAction::None);
///         };
///         match self.list.handle_key(key, ctx.keymap) {
///             ListOutcome::Selected(_) => Ok(ScreenAction::Exit),
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render to.
    /// * `area` - The area to render within.
    /// * `ctx` - Render context with shared resources.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    ///
    /// # Returns
    ///
    /// An action indicating what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is mounted.
    ///
    /// Screens backed by the message store load their data here.
    fn on_enter(&mut self, _ctx: &mut ScreenContext) -> Result<()> {
        Ok(())
    }
}

/// The key of a press event; release and repeat events yield `None`.
pub fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_key_press_ignores_release() {
        let press = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(key_press(&press).is_some());

        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(key_press(&release).is_none());
        assert!(key_press(&Event::FocusGained).is_none());
    }
}
