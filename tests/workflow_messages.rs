//! Community message workflows: writing, editing before submit, and what
//! happens when the store refuses a write.

mod common;

use common::{ctrl, press, render, repeat, send, typed, ReadOnlyStore, TestEnv};
use crossterm::event::KeyCode;
use explore_nepal::app::Host;
use explore_nepal::catalog::StaticCatalog;
use explore_nepal::keymap::Keymap;
use explore_nepal::screens::{MessagesScreen, Screen, ScreenContext, Topic};
use explore_nepal::store::{JsonFileStore, MessageStore};

/// Menu → write → username → Pokhara → message → 5 stars, ending on the review page.
fn fill_write_form(session: &mut explore_nepal::Session) {
    // Write is the second menu option
    send(session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    send(session, typed("traveler1"));
    send(session, [press(KeyCode::Enter)]);
    // Pokhara is the fourth seeded destination
    send(session, repeat(KeyCode::Down, 3));
    send(session, [press(KeyCode::Enter)]);
    send(session, typed("great trip"));
    send(session, [ctrl('s')]);
    // Five stars is the first rating
    send(session, [press(KeyCode::Enter)]);
}

#[test]
fn test_write_message_is_persisted() {
    let env = TestEnv::new();
    let mut session = env.session(Host::standalone(Topic::Messages));

    fill_write_form(&mut session);
    let screen = render(&mut session, 100, 40);
    assert!(screen.contains("Username: traveler1"));
    assert!(screen.contains("Destination: Pokhara"));
    assert!(screen.contains("Message: great trip"));
    assert!(screen.contains("Excellent (5 stars)"));
    assert!(screen.contains("Submit Message"));

    send(&mut session, [press(KeyCode::Enter)]);
    assert!(!session.should_quit());

    let messages = session.store().list_all().unwrap();
    assert_eq!(messages.len(), 7);
    let newest = &messages[0];
    assert_eq!(newest.id, 7);
    assert_eq!(newest.username, "traveler1");
    assert_eq!(newest.destination, "Pokhara");
    assert_eq!(newest.message, "great trip");
    assert_eq!(newest.rating, 5);

    // Reopening from disk sees the same message
    let reopened = JsonFileStore::open(&env.data_dir).unwrap();
    assert_eq!(reopened.list_all().unwrap()[0].username, "traveler1");

    // Back on the menu, with the new message among the latest
    let screen = render(&mut session, 100, 40);
    assert!(screen.contains("What would you like to do?"));
    assert!(screen.contains("7 Messages Shared"));
}

#[test]
fn test_edit_keeps_previous_answers() {
    let env = TestEnv::new();
    let mut session = env.session(Host::standalone(Topic::Messages));

    fill_write_form(&mut session);
    // Edit is the second review option
    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);

    // Every step comes back prefilled, so confirming each keeps the answers
    send(&mut session, [press(KeyCode::Enter)]);
    send(&mut session, [press(KeyCode::Enter)]);
    send(&mut session, typed(", again"));
    send(&mut session, [ctrl('s'), press(KeyCode::Enter)]);
    send(&mut session, [press(KeyCode::Enter)]);

    let newest = &session.store().list_all().unwrap()[0];
    assert_eq!(newest.username, "traveler1");
    assert_eq!(newest.destination, "Pokhara");
    assert_eq!(newest.message, "great trip, again");
}

#[test]
fn test_cancel_from_review_writes_nothing() {
    let env = TestEnv::new();
    let mut session = env.session(Host::standalone(Topic::Messages));

    fill_write_form(&mut session);
    send(&mut session, repeat(KeyCode::Down, 2));
    send(&mut session, [press(KeyCode::Enter)]);

    assert_eq!(session.store().list_all().unwrap().len(), 6);
    assert!(render(&mut session, 100, 40).contains("What would you like to do?"));
}

#[test]
fn test_blank_username_is_not_accepted() {
    let env = TestEnv::new();
    let mut session = env.session(Host::standalone(Topic::Messages));

    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    send(&mut session, typed("   "));
    send(&mut session, [press(KeyCode::Enter)]);

    assert!(render(&mut session, 100, 40).contains("Step 1 of 4"));
}

#[test]
fn test_failed_write_returns_to_menu() {
    let keymap = Keymap::default();
    let mut store = ReadOnlyStore;
    let mut screen = MessagesScreen::new(&StaticCatalog);
    let mut ctx = ScreenContext::new(&keymap, &mut store);
    screen.on_enter(&mut ctx).unwrap();

    let mut events = vec![press(KeyCode::Down), press(KeyCode::Enter)];
    events.extend(typed("traveler1"));
    // The only destination is Pokhara
    events.extend([press(KeyCode::Enter), press(KeyCode::Enter)]);
    events.extend(typed("great trip"));
    events.extend([ctrl('s'), press(KeyCode::Enter), press(KeyCode::Enter)]);
    for event in events {
        screen.handle_event(event, &mut ctx).unwrap();
    }

    assert!(screen.at_menu());
    assert_eq!(screen.messages().len(), 6);
}

#[test]
fn test_browse_by_destination() {
    let env = TestEnv::new();
    let mut session = env.session(Host::standalone(Topic::Messages));

    send(&mut session, repeat(KeyCode::Down, 2));
    send(&mut session, [press(KeyCode::Enter)]);
    let screen = render(&mut session, 100, 40);
    assert!(screen.contains("Lumbini (1 message)"));

    // Destinations are alphabetical after the back option; open the first
    send(&mut session, [press(KeyCode::Down), press(KeyCode::Enter)]);
    let screen = render(&mut session, 100, 40);
    assert!(screen.contains("AdventureSeeker"));
}
