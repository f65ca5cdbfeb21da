//! Drill-down browser.
//!
//! Lists a set of records behind a back option and shows one record's detail
//! panel at a time. Static content is borrowed straight from its table; only
//! records built at runtime are owned. Every content topic (destinations, regions, culture,
//! adventures, tips, help, templates, messages) is a browser configured with
//! its own labels and detail layout.

use crate::catalog::Record;
use crate::keymap::{Action, Keymap};
use crate::screens::page::{render_intro_and_list, render_page};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::widgets::{DetailPanel, ListOutcome, SelectList, SelectOption};
use anyhow::Result;
use std::borrow::Cow;
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use tracing::debug;

/// Value of the back option in every browser list.
pub const BACK_VALUE: &str = "back";

/// How a browser presents its records.
pub struct BrowserSpec<R> {
    pub title: String,
    pub subtitle: String,
    /// Prompt above the list
    pub placeholder: &'static str,
    pub back_label: &'static str,
    /// Label of a record's option
    pub label: fn(&R) -> String,
    /// Statistics shown above the list
    pub summary: fn(&[R]) -> Vec<Line<'static>>,
    /// Body of a record's detail panel
    pub detail: fn(&R) -> Vec<Line<'static>>,
    /// When set, Esc in the detail view leaves the browser entirely
    pub escape_exits_detail: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Summary,
    Detail(usize),
}

pub struct DrillDownBrowser<R: Clone + 'static> {
    spec: BrowserSpec<R>,
    records: Cow<'static, [R]>,
    view: View,
    list: SelectList,
}

impl<R: Record + Clone + 'static> DrillDownBrowser<R> {
    pub fn new(spec: BrowserSpec<R>, records: impl Into<Cow<'static, [R]>>) -> Self {
        let records = records.into();
        let list = build_list(&spec, &records, None);
        Self {
            spec,
            records,
            view: View::Summary,
            list,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The record whose detail is showing, `None` in the list view.
    pub fn selected(&self) -> Option<&R> {
        match self.view {
            View::Summary => None,
            View::Detail(index) => self.records.get(index),
        }
    }

    pub fn list(&self) -> &SelectList {
        &self.list
    }

    fn remount(&mut self, highlight: Option<&str>) {
        self.list = build_list(&self.spec, &self.records, highlight);
    }

    fn open(&mut self, value: &str) {
        match self.records.iter().position(|r| r.id() == value) {
            Some(index) => {
                debug!("Opening {}", value);
                self.view = View::Detail(index);
            }
            None => self.remount(Some(value)),
        }
    }

    /// Feed one key press to the browser.
    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &Keymap) -> ScreenAction {
        match self.view {
            View::Summary => match self.list.handle_key(key, keymap) {
                ListOutcome::Selected(option) if option.value == BACK_VALUE => {
                    self.remount(None);
                    ScreenAction::Exit
                }
                ListOutcome::Selected(option) => {
                    self.open(&option.value);
                    ScreenAction::None
                }
                _ => ScreenAction::None,
            },
            View::Detail(index) => {
                if self.spec.escape_exits_detail && keymap.action_for(key) == Some(Action::Cancel) {
                    return ScreenAction::Exit;
                }
                let id = self.records.get(index).map(|r| r.id().to_string());
                self.view = View::Summary;
                self.remount(id.as_deref());
                ScreenAction::None
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, keymap: &Keymap) -> Result<()> {
        match self.view {
            View::Summary => {
                let content = render_page(
                    frame,
                    area,
                    &self.spec.title,
                    &self.spec.subtitle,
                    &keymap.footer_navigation(),
                )?;
                let summary = (self.spec.summary)(&self.records);
                render_intro_and_list(frame, content, summary, &mut self.list);
            }
            View::Detail(index) => {
                let footer = if self.spec.escape_exits_detail {
                    keymap.footer_detail_with_exit()
                } else {
                    keymap.footer_detail()
                };
                let content =
                    render_page(frame, area, &self.spec.title, &self.spec.subtitle, &footer)?;
                if let Some(record) = self.records.get(index) {
                    let lines = (self.spec.detail)(record);
                    frame.render_widget(DetailPanel::new(record.title(), lines), content);
                }
            }
        }
        Ok(())
    }
}

fn build_list<R: Record>(spec: &BrowserSpec<R>, records: &[R], highlight: Option<&str>) -> SelectList {
    let mut options = Vec::with_capacity(records.len() + 1);
    options.push(SelectOption::new(spec.back_label, BACK_VALUE));
    options.extend(
        records
            .iter()
            .map(|r| SelectOption::new((spec.label)(r), r.id())),
    );
    let list = SelectList::new(options).placeholder(spec.placeholder);
    match highlight {
        Some(value) => list.with_highlighted_value(value),
        None => list,
    }
}

impl<R: Record + Clone + 'static> Screen for DrillDownBrowser<R> {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        self.draw(frame, area, ctx.keymap)
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        match key_press(&event) {
            Some(key) => Ok(self.handle_key(key, ctx.keymap)),
            None => Ok(ScreenAction::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[derive(Debug, Clone)]
    struct Peak {
        id: &'static str,
        name: &'static str,
    }

    impl Record for Peak {
        fn id(&self) -> &str {
            self.id
        }

        fn title(&self) -> &str {
            self.name
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn browser(escape_exits_detail: bool) -> DrillDownBrowser<Peak> {
        let spec = BrowserSpec {
            title: "Peaks".to_string(),
            subtitle: "Eight-thousanders".to_string(),
            placeholder: "Select a peak:",
            back_label: "← Back",
            label: |p: &Peak| p.name.to_string(),
            summary: |_: &[Peak]| Vec::new(),
            detail: |p: &Peak| vec![Line::from(p.name)],
            escape_exits_detail,
        };
        DrillDownBrowser::new(
            spec,
            vec![
                Peak { id: "everest", name: "Everest" },
                Peak { id: "lhotse", name: "Lhotse" },
            ],
        )
    }

    #[test]
    fn test_back_option_comes_first() {
        let b = browser(false);
        let values: Vec<&str> = b.list().items().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["back", "everest", "lhotse"]);
    }

    #[test]
    fn test_back_exits() {
        let keymap = Keymap::default();
        let mut b = browser(false);
        assert_eq!(b.handle_key(&key(KeyCode::Enter), &keymap), ScreenAction::Exit);
    }

    #[test]
    fn test_any_key_returns_from_detail_with_highlight_restored() {
        let keymap = Keymap::default();
        let mut b = browser(false);
        b.handle_key(&key(KeyCode::Down), &keymap);
        b.handle_key(&key(KeyCode::Down), &keymap);
        b.handle_key(&key(KeyCode::Enter), &keymap);
        assert_eq!(b.selected().map(|p| p.id), Some("lhotse"));

        assert_eq!(b.handle_key(&key(KeyCode::Char('x')), &keymap), ScreenAction::None);
        assert!(b.selected().is_none());
        assert_eq!(b.list().highlighted(), Some(2));
        assert!(b.list().is_active());
    }

    #[test]
    fn test_escape_in_detail() {
        let keymap = Keymap::default();

        let mut plain = browser(false);
        plain.handle_key(&key(KeyCode::Down), &keymap);
        plain.handle_key(&key(KeyCode::Enter), &keymap);
        assert_eq!(plain.handle_key(&key(KeyCode::Esc), &keymap), ScreenAction::None);
        assert!(plain.selected().is_none());

        let mut help = browser(true);
        help.handle_key(&key(KeyCode::Down), &keymap);
        help.handle_key(&key(KeyCode::Enter), &keymap);
        assert_eq!(help.handle_key(&key(KeyCode::Esc), &keymap), ScreenAction::Exit);
    }

    static RANGE: &[Peak] = &[
        Peak { id: "makalu", name: "Makalu" },
        Peak { id: "cho-oyu", name: "Cho Oyu" },
    ];

    #[test]
    fn test_static_records_are_borrowed() {
        let keymap = Keymap::default();
        let spec = browser(false).spec;
        let mut b = DrillDownBrowser::new(spec, RANGE);
        b.handle_key(&key(KeyCode::Down), &keymap);
        b.handle_key(&key(KeyCode::Enter), &keymap);

        assert!(matches!(b.records, Cow::Borrowed(_)));
        assert!(std::ptr::eq(b.selected().unwrap(), &RANGE[0]));
    }

    #[test]
    fn test_unknown_value_remounts_list() {
        let mut b = browser(false);
        b.open("kangchenjunga");
        assert!(b.selected().is_none());
        assert!(b.list().is_active());
        assert_eq!(b.list().highlighted(), Some(0));
    }
}
