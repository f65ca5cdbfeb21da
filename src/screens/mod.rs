//! Screen controllers for the application.
//!
//! Every topic is a [`Screen`]: it owns its view state, draws itself and
//! turns key presses into a [`ScreenAction`]. The [`RootDispatcher`] hosts one
//! topic screen at a time behind the root menu.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Root Dispatcher                  │    │
//! │  │  match active {                                │    │
//! │  │    None => root menu                           │    │
//! │  │    Some(screen) => screen.handle_event(...)    │    │
//! │  │  }                                             │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - render(frame, area, context)                │    │
//! │  │  - handle_event(event, context) -> Action      │    │
//! │  │  - on_enter(context)                           │    │
//! │  │  - is_input_focused() -> bool                  │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod adventure;
pub mod browser;
pub mod culture;
pub mod destinations;
pub mod form;
pub mod help;
pub mod messages;
pub mod page;
pub mod planner;
pub mod regions;
pub mod root;
pub mod screen_trait;
pub mod tips;

pub use browser::{BrowserSpec, DrillDownBrowser, BACK_VALUE};
pub use form::{FormOutcome, FormValues, ReviewSpec, StepDescriptor, StepKind, SteppedForm};
pub use messages::MessagesScreen;
pub use planner::PlannerScreen;
pub use root::{DispatchOutcome, RootDispatcher, Topic};
pub use screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
pub use tips::TipsScreen;

use crate::catalog::Catalog;

/// Build a fresh screen for `topic`.
pub fn mount(topic: Topic, catalog: &dyn Catalog) -> Box<dyn Screen> {
    match topic {
        Topic::Destinations => Box::new(destinations::screen(catalog)),
        Topic::Regions => Box::new(regions::screen(catalog)),
        Topic::Culture => Box::new(culture::screen(catalog)),
        Topic::Adventure => Box::new(adventure::screen(catalog)),
        Topic::Messages => Box::new(MessagesScreen::new(catalog)),
        Topic::Tips => Box::new(TipsScreen::new(catalog)),
        Topic::Planner => Box::new(PlannerScreen::new(catalog)),
        Topic::Help => Box::new(help::screen(catalog)),
    }
}
