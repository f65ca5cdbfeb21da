//! Root menu workflows: mounting topics, returning from them, and the
//! standalone host ending the program on exit.

mod common;

use common::{press, render, repeat, send, TestEnv};
use crossterm::event::KeyCode;
use explore_nepal::app::Host;
use explore_nepal::catalog::StaticCatalog;
use explore_nepal::keymap::Keymap;
use explore_nepal::screens::{DispatchOutcome, RootDispatcher, ScreenContext, Topic};
use explore_nepal::store::MemoryStore;

fn active_topic(session: &explore_nepal::Session) -> Option<Topic> {
    match session.host() {
        Host::Root(dispatcher) => dispatcher.active_topic(),
        Host::Standalone(_) => panic!("expected the root menu host"),
    }
}

#[test]
fn test_root_menu_renders_banner_and_topics() {
    let env = TestEnv::new();
    let mut session = env.session(Host::root());

    let screen = render(&mut session, 100, 40);
    assert!(screen.contains("Welcome to the Interactive Nepal Explorer"));
    assert!(screen.contains("What would you like to explore today?"));
    assert!(screen.contains("Explore Destinations"));
    assert!(screen.contains("Help & About"));
    assert!(screen.contains("non-rectangular flag"));
}

#[test]
fn test_topic_exit_returns_to_menu() {
    let env = TestEnv::new();
    let mut session = env.session(Host::root());

    send(&mut session, [press(KeyCode::Enter)]);
    assert_eq!(active_topic(&session), Some(Topic::Destinations));

    // Back is the first option of every topic
    send(&mut session, [press(KeyCode::Enter)]);
    assert_eq!(active_topic(&session), None);
    assert!(!session.should_quit());

    // The menu is live again and can mount another topic
    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    assert_eq!(active_topic(&session), Some(Topic::Regions));
}

#[test]
fn test_menu_highlights_the_topic_just_left() {
    let keymap = Keymap::default();
    let mut store = MemoryStore::seeded();
    let mut ctx = ScreenContext::new(&keymap, &mut store);
    let mut dispatcher = RootDispatcher::new(Box::new(StaticCatalog));

    for _ in 0..5 {
        dispatcher.handle_event(press(KeyCode::Down), &mut ctx).unwrap();
    }
    dispatcher.handle_event(press(KeyCode::Enter), &mut ctx).unwrap();
    assert_eq!(dispatcher.active_topic(), Some(Topic::Tips));

    dispatcher.handle_event(press(KeyCode::Enter), &mut ctx).unwrap();
    assert_eq!(dispatcher.active_topic(), None);
    assert_eq!(dispatcher.menu().highlighted(), Some(5));
}

#[test]
fn test_detail_any_key_returns_to_list() {
    let env = TestEnv::new();
    let mut session = env.session(Host::root());

    send(&mut session, [press(KeyCode::Enter)]);
    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    let screen = render(&mut session, 100, 40);
    assert!(screen.contains("Best Season"));
    assert!(screen.contains("Any key"));

    send(&mut session, [press(KeyCode::Char('x'))]);
    let screen = render(&mut session, 100, 40);
    assert!(screen.contains("Select a destination to explore:"));
    assert_eq!(active_topic(&session), Some(Topic::Destinations));
}

#[test]
fn test_help_escape_leaves_topic() {
    let env = TestEnv::new();
    let mut session = env.session(Host::root());

    // Help is the last topic, just above Exit
    send(&mut session, repeat(KeyCode::Up, 2));
    send(&mut session, [press(KeyCode::Enter)]);
    assert_eq!(active_topic(&session), Some(Topic::Help));

    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    send(&mut session, [press(KeyCode::Esc)]);
    assert_eq!(active_topic(&session), None);
    assert!(!session.should_quit());
}

#[test]
fn test_exit_option_quits() {
    let keymap = Keymap::default();
    let mut store = MemoryStore::seeded();
    let mut ctx = ScreenContext::new(&keymap, &mut store);
    let mut dispatcher = RootDispatcher::new(Box::new(StaticCatalog));

    dispatcher.handle_event(press(KeyCode::Up), &mut ctx).unwrap();
    let outcome = dispatcher.handle_event(press(KeyCode::Enter), &mut ctx).unwrap();
    assert_eq!(outcome, DispatchOutcome::Quit);
}

#[test]
fn test_standalone_topic_exit_ends_program() {
    let env = TestEnv::new();
    let mut session = env.session(Host::standalone(Topic::Culture));

    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    send(&mut session, [press(KeyCode::Enter)]);
    assert!(!session.should_quit());

    // Detail closed; the highlight is back on the aspect, so move to back
    send(&mut session, [press(KeyCode::Up), press(KeyCode::Enter)]);
    assert!(session.should_quit());
}

#[test]
fn test_every_topic_renders() {
    for topic in Topic::ALL {
        let env = TestEnv::new();
        let mut session = env.session(Host::standalone(topic));
        let screen = render(&mut session, 100, 40);
        assert!(screen.contains("Quit"), "{} footer missing", topic);
    }
}
