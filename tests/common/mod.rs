//! Shared test utilities for workflow integration tests.
//!
//! Provides key event builders, a `TestEnv` with an isolated data directory
//! (cleaned up via `TempDir`), and a renderer that draws a session into a
//! ratatui `TestBackend` and returns the screen text.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use explore_nepal::app::{Host, Session};
use explore_nepal::keymap::Keymap;
use explore_nepal::store::{
    seed_messages, JsonFileStore, MessageStore, NewMessage, StoreDestination, StoreError,
    StoredMessage,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

/// A plain key press.
pub fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// A Ctrl+<c> key press.
#[allow(dead_code)]
pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// One key press per character of `text`.
#[allow(dead_code)]
pub fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| press(KeyCode::Char(c))).collect()
}

/// `n` presses of `code`.
#[allow(dead_code)]
pub fn repeat(code: KeyCode, n: usize) -> Vec<Event> {
    (0..n).map(|_| press(code)).collect()
}

/// Feed every event to the session, failing the test on any error.
#[allow(dead_code)]
pub fn send(session: &mut Session, events: impl IntoIterator<Item = Event>) {
    for event in events {
        session.handle_event(event).unwrap();
    }
}

/// Draw the session into a `width` x `height` buffer and return its text.
#[allow(dead_code)]
pub fn render(session: &mut Session, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| session.render(frame).unwrap())
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// An isolated data directory for the JSON message store.
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        Self { temp_dir, data_dir }
    }

    /// Open (or seed) the store in this environment's data directory.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::open(&self.data_dir).unwrap()
    }

    /// A session over this environment's store with the default keymap.
    pub fn session(&self, host: Host) -> Session {
        let mut session = Session::new(host, Keymap::default(), Box::new(self.open_store()));
        session.start().unwrap();
        session
    }
}

/// A store whose reads succeed but whose writes always fail.
#[allow(dead_code)]
pub struct ReadOnlyStore;

impl MessageStore for ReadOnlyStore {
    fn list_all(&self) -> Result<Vec<StoredMessage>, StoreError> {
        Ok(seed_messages())
    }

    fn append(&mut self, _message: NewMessage) -> Result<StoredMessage, StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("messages.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn destinations(&self) -> Result<Vec<StoreDestination>, StoreError> {
        Ok(vec![StoreDestination {
            id: 1,
            name: "Pokhara".to_string(),
        }])
    }

    fn ensure_destination(&mut self, name: &str) -> Result<StoreDestination, StoreError> {
        Ok(StoreDestination {
            id: 1,
            name: name.to_string(),
        })
    }
}
