//! Trip planner: templates and a custom plan builder.

use crate::catalog::planner::{BUDGET_RANGES, DIFFICULTIES, DURATIONS, INTERESTS, PLAN_ADVICE};
use crate::catalog::{Catalog, TripTemplate};
use crate::keymap::Keymap;
use crate::screens::browser::{BrowserSpec, DrillDownBrowser, BACK_VALUE};
use crate::screens::form::{FormOutcome, FormValues, ReviewSpec, StepDescriptor, StepKind, SteppedForm};
use crate::screens::page::{fact, render_intro_and_list, render_page, stat};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::widgets::detail::{bullets, field, heading};
use crate::widgets::{ListOutcome, SelectList, SelectOption};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use tracing::info;

const TITLE: &str = "🎯 NEPAL TRIP PLANNER 🎯";
const SUBTITLE: &str = "Plan your perfect Nepal adventure with personalized recommendations";

/// A custom plan saved during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPlan {
    pub name: String,
    pub duration: String,
    pub budget: String,
    pub difficulty: String,
    pub interests: Vec<String>,
}

impl SavedPlan {
    fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.display("name"),
            duration: values.display("duration"),
            budget: values.display("budget"),
            difficulty: values.display("difficulty"),
            interests: values.many("interests").to_vec(),
        }
    }
}

enum View {
    Menu(SelectList),
    Templates(DrillDownBrowser<TripTemplate>),
    Custom(Box<SteppedForm>),
}

pub struct PlannerScreen {
    templates: &'static [TripTemplate],
    saved: Vec<SavedPlan>,
    view: View,
}

impl PlannerScreen {
    pub fn new(catalog: &dyn Catalog) -> Self {
        Self {
            templates: catalog.trip_templates(),
            saved: Vec::new(),
            view: View::Menu(menu_list(None)),
        }
    }

    pub fn saved_plans(&self) -> &[SavedPlan] {
        &self.saved
    }

    pub fn at_menu(&self) -> bool {
        matches!(self.view, View::Menu(_))
    }

    pub fn showing_templates(&self) -> bool {
        matches!(self.view, View::Templates(_))
    }

    fn show_menu(&mut self, highlight: &str) {
        self.view = View::Menu(menu_list(Some(highlight)));
    }

    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &Keymap) -> ScreenAction {
        match &mut self.view {
            View::Menu(list) => {
                let ListOutcome::Selected(option) = list.handle_key(key, keymap) else {
                    return ScreenAction::None;
                };
                match option.value.as_str() {
                    BACK_VALUE => {
                        self.show_menu(BACK_VALUE);
                        return ScreenAction::Exit;
                    }
                    "custom" => self.view = View::Custom(Box::new(custom_form())),
                    // Recommendations, timing and budget are answered by the templates
                    _ => self.view = View::Templates(template_browser(self.templates)),
                }
            }
            View::Templates(browser) => {
                if browser.handle_key(key, keymap) == ScreenAction::Exit {
                    self.show_menu("template");
                }
            }
            View::Custom(form) => match form.handle_key(key, keymap) {
                FormOutcome::Pending => {}
                FormOutcome::Submitted(values) => {
                    let plan = SavedPlan::from_values(&values);
                    info!(
                        "Saved trip plan {:?}: {}, {}, {}, interests [{}]",
                        plan.name,
                        plan.duration,
                        plan.budget,
                        plan.difficulty,
                        plan.interests.join(", ")
                    );
                    self.saved.push(plan);
                    self.show_menu("custom");
                }
                FormOutcome::Cancelled => self.show_menu("custom"),
            },
        }
        ScreenAction::None
    }

    fn menu_intro(&self) -> Vec<Line<'static>> {
        let mut stats = vec![
            stat("📋", self.templates.len(), "Trip Templates"),
            stat("🎯", INTERESTS.len(), "Interest Categories"),
            stat("📅", 4, "Season Options"),
            stat("💰", BUDGET_RANGES.len(), "Budget Ranges"),
        ];
        if !self.saved.is_empty() {
            stats.push(stat("💾", self.saved.len(), "Saved Plans"));
        }
        vec![
            Line::from(stats),
            Line::default(),
            fact(
                "🎯",
                "Planning Tip",
                "Consider your fitness level, budget, and time of year when planning your Nepal adventure!",
            ),
        ]
    }
}

fn menu_list(highlight: Option<&str>) -> SelectList {
    let list = SelectList::new(vec![
        SelectOption::new("📋 Use Trip Template", "template"),
        SelectOption::new("🎯 Create Custom Plan", "custom"),
        SelectOption::new("💡 Get Recommendations", "recommendations"),
        SelectOption::new("📅 Check Best Times to Visit", "timing"),
        SelectOption::new("💰 Budget Calculator", "budget"),
        SelectOption::new("← Back to Main Menu", BACK_VALUE),
    ])
    .placeholder("What would you like to do?");
    match highlight {
        Some(value) => list.with_highlighted_value(value),
        None => list,
    }
}

fn template_browser(templates: &'static [TripTemplate]) -> DrillDownBrowser<TripTemplate> {
    let spec = BrowserSpec {
        title: "📋 Trip Templates".to_string(),
        subtitle: "Choose a pre-designed Nepal adventure".to_string(),
        placeholder: "Select a trip template:",
        back_label: "← Back to Planner Menu",
        label: |t: &TripTemplate| format!("{} ({}, {})", t.name, t.duration, t.difficulty),
        summary: |_: &[TripTemplate]| {
            vec![fact(
                "💡",
                "Tip",
                "Templates can be customized to fit your specific needs and preferences!",
            )]
        },
        detail: template_detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(spec, templates)
}

fn template_detail(t: &TripTemplate) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("📅 Duration", t.duration),
        field("💰 Budget", t.budget),
        field("⚡ Difficulty", t.difficulty),
        field("📅 Best Time", t.best_time),
    ];
    lines.extend(heading("🎯 Interests"));
    lines.extend(bullets("•", t.interests));
    lines.extend(heading("📍 Destinations"));
    lines.extend(bullets("•", t.destinations));
    lines.extend(heading("🎯 Activities"));
    lines.extend(bullets("•", t.activities));
    lines
}

fn choices(options: &[&str]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|option| SelectOption::new(*option, *option))
        .collect()
}

fn custom_form() -> SteppedForm {
    let steps = vec![
        StepDescriptor {
            key: "name",
            label: "Trip Name",
            prompt: "What would you like to call your trip?",
            kind: StepKind::Text {
                placeholder: "Enter trip name (e.g., My Nepal Adventure):",
                multiline: false,
                required: true,
            },
        },
        StepDescriptor {
            key: "duration",
            label: "Duration",
            prompt: "How long will you be traveling?",
            kind: StepKind::Choice {
                options: choices(DURATIONS),
            },
        },
        StepDescriptor {
            key: "budget",
            label: "Budget",
            prompt: "What's your budget range?",
            kind: StepKind::Choice {
                options: choices(BUDGET_RANGES),
            },
        },
        StepDescriptor {
            key: "difficulty",
            label: "Difficulty",
            prompt: "What difficulty level suits you?",
            kind: StepKind::Choice {
                options: choices(DIFFICULTIES),
            },
        },
        StepDescriptor {
            key: "interests",
            label: "Interests",
            prompt: "What are you interested in? (Select multiple)",
            kind: StepKind::MultiChoice {
                options: INTERESTS.iter().map(|s| (*s).to_string()).collect(),
            },
        },
    ];
    let review = ReviewSpec {
        title: "🎯 Your Custom Nepal Trip Plan",
        question: "What would you like to do with this plan?",
        submit_label: "💾 Save Plan",
        edit_label: "✏️ Edit Plan",
        cancel_label: "🏠 Back to Main Menu",
        notes_heading: Some("📋 Recommended based on your preferences:"),
        notes: PLAN_ADVICE,
    };
    SteppedForm::new("🎯 Create Your Custom Nepal Trip", steps, review)
}

impl Screen for PlannerScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let intro = match &self.view {
            View::Menu(_) => self.menu_intro(),
            _ => Vec::new(),
        };
        match &mut self.view {
            View::Menu(list) => {
                let content =
                    render_page(frame, area, TITLE, SUBTITLE, &ctx.keymap.footer_navigation())?;
                render_intro_and_list(frame, content, intro, list);
                Ok(())
            }
            View::Templates(browser) => browser.draw(frame, area, ctx.keymap),
            View::Custom(form) => form.render(frame, area, ctx.keymap),
        }
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        match key_press(&event) {
            Some(key) => Ok(self.handle_key(key, ctx.keymap)),
            None => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        matches!(&self.view, View::Custom(form) if form.is_input_focused())
    }
}
