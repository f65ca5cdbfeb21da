mod common;

use common::{press, render, send, typed, TestEnv};
use crossterm::event::{KeyCode, KeyModifiers};
use explore_nepal::app::{Host, Session};
use explore_nepal::config::Config;
use explore_nepal::keymap::{Action, KeyBinding, KeymapPreset};
use explore_nepal::screens::Topic;
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    // Create a config with keymap overrides
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;

    // Map 'x' to Quit (normally Ctrl+C)
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    // Map 'w' to MoveUp (normally 'k' in vim preset)
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    // Overrides take precedence
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );

    // Preset bindings for an overridden action are shadowed
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
        None
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE),
        None
    );

    // Other vim bindings still work
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
        Some(Action::Confirm)
    );
}

#[test]
fn test_overrides_drive_navigation() {
    let env = TestEnv::new();
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("s", Action::MoveDown));

    let mut session = Session::new(
        Host::root(),
        config.keymap.clone(),
        Box::new(env.open_store()),
    );
    session.start().unwrap();

    send(&mut session, [press(KeyCode::Char('s')), press(KeyCode::Enter)]);
    match session.host() {
        Host::Root(dispatcher) => assert_eq!(dispatcher.active_topic(), Some(Topic::Regions)),
        Host::Standalone(_) => unreachable!(),
    }
}

#[test]
fn test_quit_override_is_global() {
    let env = TestEnv::new();
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+q", Action::Quit));

    let mut session = Session::new(
        Host::standalone(Topic::Planner),
        config.keymap.clone(),
        Box::new(env.open_store()),
    );
    session.start().unwrap();

    session
        .handle_event(crossterm::event::Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
    assert!(session.should_quit());
}

#[test]
fn test_quit_letter_is_typed_into_focused_field() {
    let env = TestEnv::new();
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));

    let mut session = Session::new(
        Host::standalone(Topic::Messages),
        config.keymap.clone(),
        Box::new(env.open_store()),
    );
    session.start().unwrap();

    // Write a Message, landing on the username field
    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    assert!(session.host().is_input_focused());

    send(&mut session, typed("alex"));
    assert!(!session.should_quit());
    assert!(render(&mut session, 100, 40).contains("alex"));

    // Back on the menu the letter quits again
    send(&mut session, [press(KeyCode::Esc)]);
    assert!(!session.host().is_input_focused());
    send(&mut session, [press(KeyCode::Char('x'))]);
    assert!(session.should_quit());
}
