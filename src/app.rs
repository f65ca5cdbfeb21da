use crate::catalog::StaticCatalog;
use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::screens::{
    key_press, mount, DispatchOutcome, RenderContext, RootDispatcher, Screen, ScreenAction,
    ScreenContext, Topic,
};
use crate::store::{JsonFileStore, MemoryStore, MessageStore};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What the event loop is driving.
pub enum Host {
    /// The root menu, which hosts one topic screen at a time
    Root(RootDispatcher),
    /// A single topic screen; its exit ends the program
    Standalone(Box<dyn Screen>),
}

impl Host {
    /// Root menu over the built-in catalog.
    pub fn root() -> Self {
        Host::Root(RootDispatcher::new(Box::new(StaticCatalog)))
    }

    /// One topic screen over the built-in catalog.
    pub fn standalone(topic: Topic) -> Self {
        Host::Standalone(mount(topic, &StaticCatalog))
    }

    /// Whether a text field inside the hosted screen has focus.
    pub fn is_input_focused(&self) -> bool {
        match self {
            Host::Root(dispatcher) => dispatcher.is_input_focused(),
            Host::Standalone(screen) => screen.is_input_focused(),
        }
    }
}

/// A key a focused text field would type: a character with no Ctrl or Alt.
fn is_typed_char(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Application state independent of the terminal.
///
/// Owns the key bindings, the message store and the host, and turns terminal
/// events into screen transitions.
pub struct Session {
    keymap: Keymap,
    store: Box<dyn MessageStore>,
    host: Host,
    should_quit: bool,
}

impl Session {
    pub fn new(host: Host, keymap: Keymap, store: Box<dyn MessageStore>) -> Self {
        Self {
            keymap,
            store,
            host,
            should_quit: false,
        }
    }

    /// Mount the standalone screen. The root menu mounts topics on demand.
    pub fn start(&mut self) -> Result<()> {
        if let Host::Standalone(screen) = &mut self.host {
            let mut ctx = ScreenContext::new(&self.keymap, self.store.as_mut());
            screen.on_enter(&mut ctx)?;
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn store(&self) -> &dyn MessageStore {
        self.store.as_ref()
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Some(key) = key_press(&event) {
            let typed = self.host.is_input_focused() && is_typed_char(key);
            if !typed && self.keymap.action_for(key) == Some(Action::Quit) {
                info!("Quit requested");
                self.should_quit = true;
                return Ok(());
            }
        }

        let mut ctx = ScreenContext::new(&self.keymap, self.store.as_mut());
        match &mut self.host {
            Host::Root(dispatcher) => {
                if dispatcher.handle_event(event, &mut ctx)? == DispatchOutcome::Quit {
                    info!("Exit selected from the main menu");
                    self.should_quit = true;
                }
            }
            Host::Standalone(screen) => {
                if screen.handle_event(event, &mut ctx)? == ScreenAction::Exit {
                    debug!("Standalone screen exited");
                    self.should_quit = true;
                }
            }
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.keymap);
        match &mut self.host {
            Host::Root(dispatcher) => dispatcher.render(frame, area, &ctx),
            Host::Standalone(screen) => screen.render(frame, area, &ctx),
        }
    }
}

/// Main application: a [`Session`] bound to the terminal.
pub struct App {
    session: Session,
    tui: Tui,
}

impl App {
    pub fn new(config: &Config, topic: Option<Topic>) -> Result<Self> {
        let store = open_store(config);
        let host = match topic {
            Some(topic) => Host::standalone(topic),
            None => Host::root(),
        };
        let session = Session::new(host, config.keymap.clone(), store);
        let tui = Tui::new()?;
        Ok(Self { session, tui })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        self.session.start()?;

        loop {
            self.draw()?;

            if self.session.should_quit() {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.session.handle_event(event)?;
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let mut render_result = Ok(());
        let session = &mut self.session;
        self.tui.terminal_mut().draw(|frame| {
            render_result = session.render(frame);
        })?;
        render_result
    }
}

/// Open the JSON store in the configured data directory, falling back to an
/// in-memory store seeded with the default messages.
pub fn open_store(config: &Config) -> Box<dyn MessageStore> {
    let data_dir = config.data_dir();
    match JsonFileStore::open(&data_dir) {
        Ok(store) => {
            info!("Using message store at {:?}", store.path());
            Box::new(store)
        }
        Err(e) => {
            warn!("Message store unavailable ({}), using in-memory messages", e);
            Box::new(MemoryStore::seeded())
        }
    }
}
