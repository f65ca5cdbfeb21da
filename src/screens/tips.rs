//! Travel tips: categories, then the tips of one category, then one tip.

use crate::catalog::tips::count_by_importance;
use crate::catalog::{Catalog, Importance, Tip, TipCategory};
use crate::keymap::Keymap;
use crate::screens::browser::{BrowserSpec, DrillDownBrowser, BACK_VALUE};
use crate::screens::page::{fact, render_intro_and_list, render_page, stat};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, Theme};
use crate::widgets::detail::text;
use crate::widgets::{ListOutcome, SelectList, SelectOption};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use tracing::debug;

const TITLE: &str = "💡 NEPAL TRAVEL TIPS & ADVICE 💡";
const SUBTITLE: &str = "Essential tips from experienced travelers and local experts";

enum View {
    Categories(SelectList),
    Category {
        id: &'static str,
        browser: DrillDownBrowser<Tip>,
    },
}

pub struct TipsScreen {
    categories: &'static [TipCategory],
    view: View,
}

impl TipsScreen {
    pub fn new(catalog: &dyn Catalog) -> Self {
        let categories = catalog.tip_categories();
        Self {
            categories,
            view: View::Categories(category_list(categories, None)),
        }
    }

    /// Id of the category whose tips are listed, if any.
    pub fn open_category(&self) -> Option<&'static str> {
        match &self.view {
            View::Categories(_) => None,
            View::Category { id, .. } => Some(*id),
        }
    }

    /// The tip being read, if any.
    pub fn open_tip(&self) -> Option<&Tip> {
        match &self.view {
            View::Categories(_) => None,
            View::Category { browser, .. } => browser.selected(),
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &Keymap) -> ScreenAction {
        match &mut self.view {
            View::Categories(list) => match list.handle_key(key, keymap) {
                ListOutcome::Selected(option) if option.value == BACK_VALUE => ScreenAction::Exit,
                ListOutcome::Selected(option) => {
                    match self.categories.iter().find(|c| c.id == option.value) {
                        Some(category) => {
                            debug!("Opening tip category {}", category.id);
                            self.view = View::Category {
                                id: category.id,
                                browser: category_browser(category),
                            };
                        }
                        None => {
                            self.view = View::Categories(category_list(
                                self.categories,
                                Some(&option.value),
                            ));
                        }
                    }
                    ScreenAction::None
                }
                _ => ScreenAction::None,
            },
            View::Category { id, browser } => {
                if browser.handle_key(key, keymap) == ScreenAction::Exit {
                    let id = *id;
                    self.view = View::Categories(category_list(self.categories, Some(id)));
                }
                ScreenAction::None
            }
        }
    }
}

fn category_list(categories: &[TipCategory], highlight: Option<&str>) -> SelectList {
    let mut options = vec![SelectOption::new("← Back to Main Menu", BACK_VALUE)];
    options.extend(
        categories
            .iter()
            .map(|c| SelectOption::new(format!("{} {}", c.emoji, c.name), c.id)),
    );
    let list = SelectList::new(options).placeholder("Select a category to explore:");
    match highlight {
        Some(value) => list.with_highlighted_value(value),
        None => list,
    }
}

fn category_browser(category: &TipCategory) -> DrillDownBrowser<Tip> {
    let spec = BrowserSpec {
        title: format!("{} {}", category.emoji, category.name),
        subtitle: category.description.to_string(),
        placeholder: "Select a tip to read:",
        back_label: "← Back to Categories",
        label: |tip: &Tip| format!("{} {}", tip.importance.icon(), tip.title),
        summary: |_: &[Tip]| {
            vec![Line::styled(
                "Legend: 🚨 Critical • ⚠️ High • ℹ️ Medium • 💡 Low importance",
                theme().muted_style(),
            )]
        },
        detail: tip_detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(spec, category.tips)
}

/// Colour for a tip's importance.
pub fn importance_color(t: &Theme, importance: Importance) -> Color {
    match importance {
        Importance::Critical => t.error,
        Importance::High => t.warning,
        Importance::Medium => t.tertiary,
        Importance::Low => t.text_muted,
    }
}

fn tip_detail(tip: &Tip) -> Vec<Line<'static>> {
    let t = theme();
    vec![
        Line::from(vec![
            Span::styled(
                format!("By {} • Importance: ", tip.author),
                t.muted_style(),
            ),
            Span::styled(
                tip.importance.as_str(),
                t.fg(importance_color(&t, tip.importance))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        text(tip.content),
    ]
}

fn summary(categories: &[TipCategory]) -> Vec<Line<'static>> {
    let total: usize = categories.iter().map(|c| c.tips.len()).sum();
    vec![
        Line::from(vec![
            stat(
                "🚨",
                count_by_importance(categories, Importance::Critical),
                "Critical Tips",
            ),
            stat(
                "⚠️",
                count_by_importance(categories, Importance::High),
                "High Priority",
            ),
            stat(
                "ℹ️",
                count_by_importance(categories, Importance::Medium),
                "Medium Priority",
            ),
            stat("📚", total, "Total Tips"),
        ]),
        Line::default(),
        fact(
            "💡",
            "Pro Tip",
            "Start with Critical and High priority tips for a safe and enjoyable journey!",
        ),
    ]
}

impl Screen for TipsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        match &mut self.view {
            View::Categories(list) => {
                let content = render_page(
                    frame,
                    area,
                    TITLE,
                    SUBTITLE,
                    &ctx.keymap.footer_navigation(),
                )?;
                render_intro_and_list(frame, content, summary(self.categories), list);
                Ok(())
            }
            View::Category { browser, .. } => browser.draw(frame, area, ctx.keymap),
        }
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
    use crate::catalog::StaticCatalog;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_three_levels_and_back() {
        let keymap = Keymap::default();
        let mut screen = TipsScreen::new(&StaticCatalog);
        let first = StaticCatalog.tip_categories()[0].id;

        screen.handle_key(&key(KeyCode::Down), &keymap);
        screen.handle_key(&key(KeyCode::Enter), &keymap);
        assert_eq!(screen.open_category(), Some(first));

        screen.handle_key(&key(KeyCode::Down), &keymap);
        screen.handle_key(&key(KeyCode::Enter), &keymap);
        assert!(screen.open_tip().is_some());

        // Any key back to the tip list, then the back option to categories
        screen.handle_key(&key(KeyCode::Char(' ')), &keymap);
        assert!(screen.open_tip().is_none());
        screen.handle_key(&key(KeyCode::Up), &keymap);
        assert_eq!(screen.handle_key(&key(KeyCode::Enter), &keymap), ScreenAction::None);
        assert_eq!(screen.open_category(), None);

        // Category stays highlighted; back option leaves the screen
        screen.handle_key(&key(KeyCode::Up), &keymap);
        assert_eq!(screen.handle_key(&key(KeyCode::Enter), &keymap), ScreenAction::Exit);
    }

    #[test]
    fn test_summary_totals() {
        let lines = summary(StaticCatalog.tip_categories());
        assert!(lines[0].to_string().contains("30 Total Tips"));
    }
}
