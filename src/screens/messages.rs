//! Community messages.
//!
//! The only screen backed by the message store. Messages are loaded when the
//! screen is mounted and reloaded after every submission; any read failure
//! shows the seed messages instead.

use crate::catalog::{Catalog, Record};
use crate::screens::browser::{BrowserSpec, DrillDownBrowser, BACK_VALUE};
use crate::screens::form::{FormOutcome, FormValues, ReviewSpec, StepDescriptor, StepKind, SteppedForm};
use crate::screens::page::{fact, render_intro_and_list, render_page, stat};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::store::{
    destination_names_or_fallback, messages_or_seed, MessageStore, NewMessage, StoreError,
    StoredMessage, MAX_RATING,
};
use crate::styles::theme;
use crate::widgets::detail::{heading, muted, text};
use crate::widgets::{DetailPanel, ListOutcome, SelectList, SelectOption};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use std::collections::BTreeMap;
use tracing::{info, warn};

const TITLE: &str = "💬 COMMUNITY MESSAGES 💬";
const SUBTITLE: &str = "Share experiences and read stories from fellow Nepal explorers";
const BACK_TO_MESSAGES: &str = "← Back to Messages Menu";

/// Rating choices, best first.
const RATINGS: &[(&str, &str)] = &[
    ("⭐⭐⭐⭐⭐ Excellent (5 stars)", "5"),
    ("⭐⭐⭐⭐ Very Good (4 stars)", "4"),
    ("⭐⭐⭐ Good (3 stars)", "3"),
    ("⭐⭐ Fair (2 stars)", "2"),
    ("⭐ Poor (1 star)", "1"),
];

/// A stored message made listable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    key: String,
    title: String,
    pub message: StoredMessage,
}

impl From<StoredMessage> for MessageEntry {
    fn from(message: StoredMessage) -> Self {
        Self {
            key: message.id.to_string(),
            title: format!("📍 {}", message.destination),
            message,
        }
    }
}

impl Record for MessageEntry {
    fn id(&self) -> &str {
        &self.key
    }

    fn title(&self) -> &str {
        &self.title
    }
}

fn stars(rating: u8) -> String {
    "⭐".repeat(usize::from(rating))
}

enum View {
    Menu(SelectList),
    Read(DrillDownBrowser<MessageEntry>),
    Write(Box<SteppedForm>),
    Browse(SelectList),
    BrowseDestination {
        destination: String,
        browser: DrillDownBrowser<MessageEntry>,
    },
    Stats,
}

pub struct MessagesScreen {
    messages: Vec<StoredMessage>,
    /// Offered by the write form when the store has no destinations
    fallback_destinations: &'static [&'static str],
    view: View,
}

impl MessagesScreen {
    pub fn new(catalog: &dyn Catalog) -> Self {
        Self {
            messages: Vec::new(),
            fallback_destinations: catalog.fallback_destinations(),
            view: View::Menu(menu_list(None)),
        }
    }

    pub fn messages(&self) -> &[StoredMessage] {
        &self.messages
    }

    /// True while the menu is showing.
    pub fn at_menu(&self) -> bool {
        matches!(self.view, View::Menu(_))
    }

    pub fn form(&self) -> Option<&SteppedForm> {
        match &self.view {
            View::Write(form) => Some(&**form),
            _ => None,
        }
    }

    fn reload(&mut self, store: &dyn MessageStore) {
        self.messages = messages_or_seed(store);
    }

    fn show_menu(&mut self, highlight: &str) {
        self.view = View::Menu(menu_list(Some(highlight)));
    }

    pub fn handle_key(&mut self, key: &KeyEvent, ctx: &mut ScreenContext) -> ScreenAction {
        let keymap = ctx.keymap;
        match &mut self.view {
            View::Menu(list) => {
                let ListOutcome::Selected(option) = list.handle_key(key, keymap) else {
                    return ScreenAction::None;
                };
                self.view = match option.value.as_str() {
                    BACK_VALUE => {
                        self.show_menu(BACK_VALUE);
                        return ScreenAction::Exit;
                    }
                    "read" => View::Read(read_browser(&self.messages)),
                    "write" => {
                        let destinations =
                            destination_names_or_fallback(&*ctx.store, self.fallback_destinations);
                        View::Write(Box::new(write_form(destinations)))
                    }
                    "browse" => View::Browse(destination_list(&self.messages, None)),
                    "stats" => View::Stats,
                    _ => View::Menu(menu_list(Some(&option.value))),
                };
            }
            View::Read(browser) => {
                if browser.handle_key(key, keymap) == ScreenAction::Exit {
                    self.show_menu("read");
                }
            }
            View::Write(form) => match form.handle_key(key, keymap) {
                FormOutcome::Pending => {}
                FormOutcome::Submitted(values) => {
                    match submit(&values, &mut *ctx.store) {
                        Ok(stored) => info!(
                            "Message {} from {} saved",
                            stored.id, stored.username
                        ),
                        Err(e) => warn!("Failed to save message: {}", e),
                    }
                    self.reload(&*ctx.store);
                    self.show_menu("write");
                }
                FormOutcome::Cancelled => self.show_menu("write"),
            },
            View::Browse(list) => match list.handle_key(key, keymap) {
                ListOutcome::Selected(option) if option.value == BACK_VALUE => {
                    self.show_menu("browse");
                }
                ListOutcome::Selected(option) => {
                    let entries: Vec<MessageEntry> = self
                        .messages
                        .iter()
                        .filter(|m| m.destination == option.value)
                        .cloned()
                        .map(MessageEntry::from)
                        .collect();
                    self.view = if entries.is_empty() {
                        View::Browse(destination_list(&self.messages, Some(&option.value)))
                    } else {
                        View::BrowseDestination {
                            browser: destination_browser(&option.value, entries),
                            destination: option.value,
                        }
                    };
                }
                _ => {}
            },
            View::BrowseDestination {
                destination,
                browser,
            } => {
                if browser.handle_key(key, keymap) == ScreenAction::Exit {
                    let destination = destination.clone();
                    self.view = View::Browse(destination_list(&self.messages, Some(&destination)));
                }
            }
            View::Stats => self.show_menu("stats"),
        }
        ScreenAction::None
    }

    fn menu_intro(&self) -> Vec<Line<'static>> {
        let t = theme();
        let total = self.messages.len();
        let average = if total == 0 {
            0.0
        } else {
            self.messages.iter().map(|m| f64::from(m.rating)).sum::<f64>() / total as f64
        };
        let destinations = count_by_destination(&self.messages).len();
        let mut members: Vec<&str> = self.messages.iter().map(|m| m.username.as_str()).collect();
        members.sort_unstable();
        members.dedup();

        let mut lines = vec![Line::from(vec![
            stat("💬", total, "Messages Shared"),
            stat("⭐", format!("{:.1}", average), "Average Rating"),
            stat("🏔️", destinations, "Destinations Covered"),
            stat("👥", members.len(), "Active Community Members"),
        ])];

        if !self.messages.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("🔥 Latest Messages:", t.heading_style()));
            lines.extend(self.messages.iter().take(3).map(|m| {
                Line::from(vec![
                    Span::styled(m.username.clone(), t.success_style()),
                    Span::styled(" shared about ", t.text_style()),
                    Span::styled(m.destination.clone(), t.fg(t.primary)),
                    Span::styled(format!(" • {}", stars(m.rating)), t.text_style()),
                ])
            }));
        }

        lines.push(Line::default());
        lines.push(fact(
            "💡",
            "Tip",
            "Share your experiences to help fellow travelers plan their Nepal adventures!",
        ));
        lines
    }
}

fn menu_list(highlight: Option<&str>) -> SelectList {
    let list = SelectList::new(vec![
        SelectOption::new("📖 Read Community Messages", "read"),
        SelectOption::new("✍️ Write a Message", "write"),
        SelectOption::new("🔍 Browse by Destination", "browse"),
        SelectOption::new("📊 Message Statistics", "stats"),
        SelectOption::new("← Back to Main Menu", BACK_VALUE),
    ])
    .placeholder("What would you like to do?")
    .highlight_color(theme().secondary);
    match highlight {
        Some(value) => list.with_highlighted_value(value),
        None => list,
    }
}

fn entry_label(entry: &MessageEntry) -> String {
    let m = &entry.message;
    format!("{} - {} ({}⭐)", m.destination, m.username, m.rating)
}

fn entry_detail(entry: &MessageEntry) -> Vec<Line<'static>> {
    let m = &entry.message;
    vec![
        muted(&format!("By {} • {} • {}", m.username, m.date, stars(m.rating))),
        Line::default(),
        text(&m.message),
    ]
}

fn read_browser(messages: &[StoredMessage]) -> DrillDownBrowser<MessageEntry> {
    let spec = BrowserSpec {
        title: "💬 Community Messages".to_string(),
        subtitle: "Read experiences from fellow Nepal travelers".to_string(),
        placeholder: "Select a message to read:",
        back_label: BACK_TO_MESSAGES,
        label: entry_label,
        summary: |entries: &[MessageEntry]| {
            vec![Line::styled(
                format!("Recent Messages: {}", entries.len()),
                theme().heading_style(),
            )]
        },
        detail: entry_detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(
        spec,
        messages
            .iter()
            .cloned()
            .map(MessageEntry::from)
            .collect::<Vec<_>>(),
    )
}

fn destination_browser(destination: &str, entries: Vec<MessageEntry>) -> DrillDownBrowser<MessageEntry> {
    let spec = BrowserSpec {
        title: format!("📍 {}", destination),
        subtitle: "What travelers say about this destination".to_string(),
        placeholder: "Select a message to read:",
        back_label: "← Back to Destinations",
        label: |entry: &MessageEntry| {
            format!("{} ({}⭐) - {}", entry.message.username, entry.message.rating, entry.message.date)
        },
        summary: |entries: &[MessageEntry]| {
            let average = entries.iter().map(|e| f64::from(e.message.rating)).sum::<f64>()
                / entries.len().max(1) as f64;
            vec![Line::from(vec![
                stat("💬", entries.len(), "Messages"),
                stat("⭐", format!("{:.1}", average), "Average Rating"),
            ])]
        },
        detail: entry_detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(spec, entries)
}

/// Message count per destination, alphabetical.
fn count_by_destination(messages: &[StoredMessage]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for m in messages {
        *counts.entry(m.destination.as_str()).or_insert(0) += 1;
    }
    counts
}

fn destination_list(messages: &[StoredMessage], highlight: Option<&str>) -> SelectList {
    let mut options = vec![SelectOption::new(BACK_TO_MESSAGES, BACK_VALUE)];
    options.extend(count_by_destination(messages).into_iter().map(|(name, count)| {
        let noun = if count == 1 { "message" } else { "messages" };
        SelectOption::new(format!("📍 {} ({} {})", name, count, noun), name)
    }));
    let list = SelectList::new(options).placeholder("Select a destination:");
    match highlight {
        Some(value) => list.with_highlighted_value(value),
        None => list,
    }
}

fn stats_lines(messages: &[StoredMessage]) -> Vec<Line<'static>> {
    let t = theme();
    let total = messages.len();
    let mut lines = vec![text(&format!("Total messages: {}", total))];

    lines.extend(heading("🏔️ Messages by Destination"));
    let mut by_destination: Vec<(&str, usize)> = count_by_destination(messages).into_iter().collect();
    by_destination.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    lines.extend(
        by_destination
            .into_iter()
            .map(|(name, count)| text(&format!("• {}: {}", name, count))),
    );

    lines.extend(heading("⭐ Rating Distribution"));
    for rating in (1..=MAX_RATING).rev() {
        let count = messages.iter().filter(|m| m.rating == rating).count();
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", stars(rating)), t.emphasis_style()),
            Span::styled(format!(" {}", count), t.text_style()),
        ]));
    }
    lines
}

fn write_form(destinations: Vec<String>) -> SteppedForm {
    let steps = vec![
        StepDescriptor {
            key: "username",
            label: "Username",
            prompt: "What should we call you?",
            kind: StepKind::Text {
                placeholder: "Enter your username (e.g., TrekkerJohn, MountainLover):",
                multiline: false,
                required: true,
            },
        },
        StepDescriptor {
            key: "destination",
            label: "Destination",
            prompt: "Which destination are you writing about?",
            kind: StepKind::Choice {
                options: destinations
                    .into_iter()
                    .map(|name| SelectOption::new(name.clone(), name))
                    .collect(),
            },
        },
        StepDescriptor {
            key: "message",
            label: "Message",
            prompt: "Tell us about your experience at {destination}",
            kind: StepKind::Text {
                placeholder: "Share tips, highlights, or advice for other travelers:",
                multiline: true,
                required: true,
            },
        },
        StepDescriptor {
            key: "rating",
            label: "Rating",
            prompt: "How would you rate {destination}?",
            kind: StepKind::Choice {
                options: RATINGS
                    .iter()
                    .map(|(label, value)| SelectOption::new(*label, *value))
                    .collect(),
            },
        },
    ];
    let review = ReviewSpec {
        title: "✍️ Review Your Message",
        question: "Would you like to submit this message?",
        submit_label: "✅ Submit Message",
        edit_label: "✏️ Edit Message",
        cancel_label: "❌ Cancel",
        notes_heading: None,
        notes: &[],
    };
    SteppedForm::new("✍️ Share Your Nepal Experience", steps, review)
}

/// Store a submitted message, resolving its destination against the store.
fn submit(values: &FormValues, store: &mut dyn MessageStore) -> Result<StoredMessage, StoreError> {
    let destination_name = values
        .choice("destination")
        .map(|o| o.value.clone())
        .unwrap_or_default();
    let destination = store.ensure_destination(&destination_name)?;
    let rating = values
        .choice("rating")
        .and_then(|o| o.value.parse().ok())
        .unwrap_or(MAX_RATING);

    store.append(NewMessage {
        username: values.text("username").unwrap_or_default().to_string(),
        destination: destination.name,
        message: values.text("message").unwrap_or_default().to_string(),
        rating,
    })
}

impl Screen for MessagesScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let keymap = ctx.keymap;
        let intro = match &self.view {
            View::Menu(_) => self.menu_intro(),
            _ => Vec::new(),
        };
        match &mut self.view {
            View::Menu(list) => {
                let content = render_page(frame, area, TITLE, SUBTITLE, &keymap.footer_navigation())?;
                render_intro_and_list(frame, content, intro, list);
            }
            View::Read(browser) | View::BrowseDestination { browser, .. } => {
                browser.draw(frame, area, keymap)?;
            }
            View::Write(form) => form.render(frame, area, keymap)?,
            View::Browse(list) => {
                let content = render_page(
                    frame,
                    area,
                    "🔍 Browse by Destination",
                    "Find experiences shared about a specific place",
                    &keymap.footer_navigation(),
                )?;
                render_intro_and_list(frame, content, Vec::new(), list);
            }
            View::Stats => {
                let content = render_page(frame, area, TITLE, SUBTITLE, &keymap.footer_detail())?;
                frame.render_widget(
                    DetailPanel::new("📊 Message Statistics", stats_lines(&self.messages)),
                    content,
                );
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        match key_press(&event) {
            Some(key) => Ok(self.handle_key(key, ctx)),
            None => Ok(ScreenAction::None),
        }
    }

    fn on_enter(&mut self, ctx: &mut ScreenContext) -> Result<()> {
        self.reload(&*ctx.store);
        self.view = View::Menu(menu_list(None));
        Ok(())
    }

    fn is_input_focused(&self) -> bool {
        self.form().is_some_and(SteppedForm::is_input_focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::keymap::Keymap;
    use crate::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_on_enter_loads_messages() {
        let keymap = Keymap::default();
        let mut store = MemoryStore::seeded();
        let mut ctx = ScreenContext::new(&keymap, &mut store);
        let mut screen = MessagesScreen::new(&StaticCatalog);
        screen.on_enter(&mut ctx).unwrap();
        assert_eq!(screen.messages().len(), 6);
    }

    #[test]
    fn test_stats_view_returns_on_any_key() {
        let keymap = Keymap::default();
        let mut store = MemoryStore::seeded();
        let mut ctx = ScreenContext::new(&keymap, &mut store);
        let mut screen = MessagesScreen::new(&StaticCatalog);
        screen.on_enter(&mut ctx).unwrap();

        for _ in 0..3 {
            screen.handle_key(&key(KeyCode::Down), &mut ctx);
        }
        screen.handle_key(&key(KeyCode::Enter), &mut ctx);
        assert!(!screen.at_menu());
        screen.handle_key(&key(KeyCode::Char('q')), &mut ctx);
        assert!(screen.at_menu());
    }

    #[test]
    fn test_browse_lists_destinations_with_messages() {
        let list = destination_list(&MemoryStore::seeded().list_all().unwrap(), None);
        // Back option plus six distinct destinations
        assert_eq!(list.len(), 7);
        assert_eq!(list.items()[1].value, "Annapurna Circuit");
    }

    #[test]
    fn test_stats_rating_distribution() {
        let rendered: Vec<String> = stats_lines(&MemoryStore::seeded().list_all().unwrap())
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(rendered[0], "Total messages: 6");
        assert!(rendered.iter().any(|l| l.starts_with("• Annapurna Circuit: 1")));
    }
}
