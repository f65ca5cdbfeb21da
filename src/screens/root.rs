//! Root menu and topic dispatch.
//!
//! The dispatcher shows the topic menu until a topic is chosen, then hosts
//! that topic's screen until the screen asks to exit. Exiting a topic returns
//! here; only the menu's own Exit option ends the application.

use crate::catalog::Catalog;
use crate::components::Footer;
use crate::screens::page::{fact, stat};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::screens::mount;
use crate::styles::theme;
use crate::widgets::banner::BANNER_HEIGHT;
use crate::widgets::{Banner, ListOutcome, SelectList, SelectOption};
use anyhow::{anyhow, Result};
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use std::fmt;
use std::str::FromStr;
use tracing::info;

const EXIT_VALUE: &str = "exit";

/// A browsable topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Destinations,
    Regions,
    Culture,
    Adventure,
    Messages,
    Tips,
    Planner,
    Help,
}

impl Topic {
    /// Every topic, in menu order.
    pub const ALL: [Topic; 8] = [
        Topic::Destinations,
        Topic::Regions,
        Topic::Culture,
        Topic::Adventure,
        Topic::Messages,
        Topic::Tips,
        Topic::Planner,
        Topic::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Destinations => "destinations",
            Topic::Regions => "regions",
            Topic::Culture => "culture",
            Topic::Adventure => "adventure",
            Topic::Messages => "messages",
            Topic::Tips => "tips",
            Topic::Planner => "planner",
            Topic::Help => "help",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Destinations => "🏔️  Explore Destinations",
            Topic::Regions => "🗺️  Browse Regions",
            Topic::Culture => "🕉️  Discover Culture",
            Topic::Adventure => "🏃 Adventure Activities",
            Topic::Messages => "💬 Community Messages",
            Topic::Tips => "💡 Travel Tips",
            Topic::Planner => "🎯 Plan Your Trip",
            Topic::Help => "❓ Help & About",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == name)
            .ok_or_else(|| anyhow!("Unknown topic: {}", s))
    }
}

/// What the host should do after the dispatcher handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Quit,
}

pub struct RootDispatcher {
    catalog: Box<dyn Catalog>,
    active: Option<(Topic, Box<dyn Screen>)>,
    menu: SelectList,
}

impl RootDispatcher {
    pub fn new(catalog: Box<dyn Catalog>) -> Self {
        Self {
            catalog,
            active: None,
            menu: root_menu(None),
        }
    }

    /// The topic whose screen is mounted, `None` while the menu shows.
    pub fn active_topic(&self) -> Option<Topic> {
        self.active.as_ref().map(|(topic, _)| *topic)
    }

    pub fn menu(&self) -> &SelectList {
        &self.menu
    }

    /// Mount `topic`'s screen, replacing whatever is showing.
    pub fn open(&mut self, topic: Topic, ctx: &mut ScreenContext) -> Result<()> {
        let mut screen = mount(topic, self.catalog.as_ref());
        screen.on_enter(ctx)?;
        info!("Entered {}", topic);
        self.active = Some((topic, screen));
        Ok(())
    }

    fn close(&mut self) {
        if let Some((topic, _)) = self.active.take() {
            info!("Left {}", topic);
            self.menu = root_menu(Some(topic));
        }
    }

    pub fn is_input_focused(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|(_, screen)| screen.is_input_focused())
    }

    pub fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<DispatchOutcome> {
        if let Some((_, screen)) = self.active.as_mut() {
            if screen.handle_event(event, ctx)? == ScreenAction::Exit {
                self.close();
            }
            return Ok(DispatchOutcome::Continue);
        }

        let Some(key) = key_press(&event) else {
            return Ok(DispatchOutcome::Continue);
        };
        match self.menu.handle_key(key, ctx.keymap) {
            ListOutcome::Selected(option) if option.value == EXIT_VALUE => Ok(DispatchOutcome::Quit),
            ListOutcome::Selected(option) => {
                match option.value.parse::<Topic>() {
                    Ok(topic) => self.open(topic, ctx)?,
                    Err(_) => self.menu = root_menu(None),
                }
                Ok(DispatchOutcome::Continue)
            }
            _ => Ok(DispatchOutcome::Continue),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        if let Some((_, screen)) = self.active.as_mut() {
            return screen.render(frame, area, ctx);
        }

        let t = theme();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(Footer::HEIGHT),
        ])
        .split(area);

        frame.render_widget(Banner, chunks[1]);

        let welcome = vec![
            Line::default(),
            Line::styled(
                "🇳🇵 Welcome to the Interactive Nepal Explorer 🇳🇵",
                t.title_style(),
            ),
            Line::styled(
                "Discover the beauty, culture, and adventures of Nepal right from your terminal!",
                t.muted_style(),
            ),
        ];
        frame.render_widget(
            Paragraph::new(welcome)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[2],
        );

        let stats = Line::from(vec![
            stat("🏔️", "8/14", "World's Highest Peaks"),
            stat("🌍", "10+", "UNESCO World Heritage Sites"),
            stat("🗣️", 123, "Languages Spoken"),
            stat("🎭", "100+", "Ethnic Groups"),
        ]);
        frame.render_widget(Paragraph::new(stats).alignment(Alignment::Center), chunks[3]);

        self.menu.render(frame, chunks[4]);

        let facts = vec![
            fact("🎯", "Pro Tip", "Use arrow keys to navigate, Enter to select"),
            fact(
                "💡",
                "Did you know?",
                "Nepal is the only country with a non-rectangular flag!",
            ),
            fact(
                "🏔️",
                "Fun Fact",
                "Mount Everest (8,849m) is called \"Sagarmatha\" in Nepali",
            ),
        ];
        frame.render_widget(Paragraph::new(facts), chunks[5]);

        Footer::render(frame, chunks[6], &ctx.keymap.footer_navigation())?;
        Ok(())
    }
}

fn root_menu(highlight: Option<Topic>) -> SelectList {
    let mut options: Vec<SelectOption> = Topic::ALL
        .iter()
        .map(|topic| SelectOption::new(topic.label(), topic.as_str()))
        .collect();
    options.push(SelectOption::new("👋 Exit", EXIT_VALUE));

    let list = SelectList::new(options).placeholder("📋 What would you like to explore today?");
    match highlight {
        Some(topic) => list.with_highlighted_value(topic.as_str()),
        None => list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_round_trips_through_str() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), topic);
        }
        assert_eq!("HELP".parse::<Topic>().unwrap(), Topic::Help);
        assert!("weather".parse::<Topic>().is_err());
    }

    #[test]
    fn test_root_menu_ends_with_exit() {
        let menu = root_menu(None);
        assert_eq!(menu.len(), Topic::ALL.len() + 1);
        assert_eq!(menu.items().last().map(|o| o.value.as_str()), Some(EXIT_VALUE));
    }

    #[test]
    fn test_root_menu_highlights_previous_topic() {
        let menu = root_menu(Some(Topic::Tips));
        assert_eq!(menu.highlighted(), Some(5));
    }
}
