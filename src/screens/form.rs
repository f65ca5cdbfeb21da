//! Stepped form.
//!
//! Collects one value per step (free text, a single choice or several
//! choices), then shows a review with submit/edit/cancel. Only the current
//! step's list or field is mounted; values of completed steps are kept so an
//! edit pass can prefill every step.

use crate::keymap::{Action, Keymap};
use crate::screens::page::{render_intro, render_intro_and_list, render_page};
use crate::styles::theme;
use crate::widgets::detail::field;
use crate::widgets::{FieldOutcome, ListOutcome, SelectList, SelectOption, TextField};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use tracing::debug;

const CLEAR_VALUE: &str = "clear";
const DONE_VALUE: &str = "done";
const SUBMIT_VALUE: &str = "submit";
const EDIT_VALUE: &str = "edit";
const CANCEL_VALUE: &str = "cancel";

#[derive(Debug, Clone)]
pub enum StepKind {
    Text {
        placeholder: &'static str,
        multiline: bool,
        /// Blank submissions are ignored
        required: bool,
    },
    Choice {
        options: Vec<SelectOption>,
    },
    MultiChoice {
        options: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct StepDescriptor {
    pub key: &'static str,
    /// Label used on the review page
    pub label: &'static str,
    /// Question shown while the step is active; `{key}` is replaced by the
    /// value of an earlier step
    pub prompt: &'static str,
    pub kind: StepKind,
}

/// Labels and notes for the review page.
#[derive(Debug, Clone)]
pub struct ReviewSpec {
    pub title: &'static str,
    pub question: &'static str,
    pub submit_label: &'static str,
    pub edit_label: &'static str,
    pub cancel_label: &'static str,
    pub notes_heading: Option<&'static str>,
    pub notes: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue {
    Text(String),
    Choice(SelectOption),
    Many(Vec<String>),
}

impl StepValue {
    pub fn display(&self) -> String {
        match self {
            StepValue::Text(text) => text.trim().to_string(),
            StepValue::Choice(option) => option.label.clone(),
            StepValue::Many(items) if items.is_empty() => "None selected".to_string(),
            StepValue::Many(items) => items.join(", "),
        }
    }
}

/// Values collected by a completed form, keyed by step key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: Vec<(&'static str, StepValue)>,
}

impl FormValues {
    pub fn get(&self, key: &str) -> Option<&StepValue> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(StepValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn choice(&self, key: &str) -> Option<&SelectOption> {
        match self.get(key) {
            Some(StepValue::Choice(option)) => Some(option),
            _ => None,
        }
    }

    pub fn many(&self, key: &str) -> &[String] {
        match self.get(key) {
            Some(StepValue::Many(items)) => items,
            _ => &[],
        }
    }

    /// Review text of a value; empty when the key is unknown.
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(StepValue::display).unwrap_or_default()
    }
}

/// Result of feeding one key to a [`SteppedForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Pending,
    Submitted(FormValues),
    Cancelled,
}

#[derive(Debug, Clone)]
enum Mounted {
    Field(TextField),
    List(SelectList),
    Review(SelectList),
}

#[derive(Debug, Clone)]
pub struct SteppedForm {
    title: &'static str,
    steps: Vec<StepDescriptor>,
    review: ReviewSpec,
    values: Vec<Option<StepValue>>,
    /// Selections of the multi-choice step being edited
    pending_many: Vec<String>,
    current: usize,
    mounted: Mounted,
    finished: bool,
}

impl SteppedForm {
    pub fn new(title: &'static str, steps: Vec<StepDescriptor>, review: ReviewSpec) -> Self {
        let values = vec![None; steps.len()];
        let mut form = Self {
            title,
            steps,
            review,
            values,
            pending_many: Vec::new(),
            current: 0,
            mounted: Mounted::List(SelectList::new(Vec::new())),
            finished: false,
        };
        form.mount_current();
        form
    }

    /// Index of the active step; equal to the step count on the review page.
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_reviewing(&self) -> bool {
        matches!(self.mounted, Mounted::Review(_))
    }

    pub fn is_input_focused(&self) -> bool {
        matches!(&self.mounted, Mounted::Field(f) if f.is_active())
    }

    /// Values collected so far.
    pub fn values(&self) -> FormValues {
        FormValues {
            values: self
                .steps
                .iter()
                .zip(&self.values)
                .filter_map(|(step, value)| value.clone().map(|v| (step.key, v)))
                .collect(),
        }
    }

    fn prompt(&self) -> String {
        let Some(step) = self.steps.get(self.current) else {
            return self.review.question.to_string();
        };
        let values = self.values();
        let mut prompt = step.prompt.to_string();
        for earlier in &self.steps[..self.current] {
            let placeholder = format!("{{{}}}", earlier.key);
            if prompt.contains(&placeholder) {
                prompt = prompt.replace(&placeholder, &values.display(earlier.key));
            }
        }
        format!(
            "Step {} of {}: {}",
            self.current + 1,
            self.steps.len(),
            prompt
        )
    }

    fn mount_current(&mut self) {
        let Some(step) = self.steps.get(self.current) else {
            self.mounted = Mounted::Review(review_list(&self.review));
            return;
        };
        let previous = self.values.get(self.current).cloned().flatten();

        self.mounted = match &step.kind {
            StepKind::Text {
                placeholder,
                multiline,
                ..
            } => {
                let mut field = TextField::new(*placeholder).multiline(*multiline);
                if let Some(StepValue::Text(text)) = previous {
                    field = field.initial_value(text);
                }
                Mounted::Field(field)
            }
            StepKind::Choice { options } => {
                let list = SelectList::new(options.clone()).placeholder("Select an option:");
                match previous {
                    Some(StepValue::Choice(option)) => {
                        Mounted::List(list.with_highlighted_value(&option.value))
                    }
                    _ => Mounted::List(list),
                }
            }
            StepKind::MultiChoice { .. } => {
                self.pending_many = match previous {
                    Some(StepValue::Many(items)) => items,
                    _ => Vec::new(),
                };
                Mounted::List(self.multi_choice_list(None))
            }
        };
    }

    /// Replace the current text field with an empty one, dropping any
    /// value an edit pass prefilled.
    fn remount_empty_field(&mut self) {
        if let Some(StepKind::Text {
            placeholder,
            multiline,
            ..
        }) = self.steps.get(self.current).map(|s| &s.kind)
        {
            self.mounted = Mounted::Field(TextField::new(*placeholder).multiline(*multiline));
        }
    }

    fn multi_choice_list(&self, highlight: Option<&str>) -> SelectList {
        let options = match self.steps.get(self.current).map(|s| &s.kind) {
            Some(StepKind::MultiChoice { options }) => options.as_slice(),
            _ => &[],
        };
        let mut items: Vec<SelectOption> = options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let marker = if self.pending_many.contains(option) {
                    "✅"
                } else {
                    "⭕"
                };
                SelectOption::new(format!("{} {}", marker, option), i.to_string())
            })
            .collect();
        items.push(SelectOption::new("🧹 Clear All Selections", CLEAR_VALUE));
        items.push(SelectOption::new(
            format!("✅ Done ({} selected)", self.pending_many.len()),
            DONE_VALUE,
        ));

        let list = SelectList::new(items).placeholder("Toggle options, then choose Done:");
        match highlight {
            Some(value) => list.with_highlighted_value(value),
            None => list,
        }
    }

    fn complete_step(&mut self, value: StepValue) {
        debug!("Form step {} set to {:?}", self.current, value);
        if let Some(slot) = self.values.get_mut(self.current) {
            *slot = Some(value);
        }
        self.current += 1;
        self.mount_current();
    }

    /// Feed one key press to the form.
    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &Keymap) -> FormOutcome {
        if self.finished {
            return FormOutcome::Pending;
        }

        if keymap.action_for(key) == Some(Action::Cancel) {
            self.finished = true;
            return FormOutcome::Cancelled;
        }

        match &mut self.mounted {
            Mounted::Field(field) => match field.handle_key(key, keymap) {
                FieldOutcome::Submitted(text) => {
                    let required = matches!(
                        self.steps.get(self.current).map(|s| &s.kind),
                        Some(StepKind::Text { required: true, .. })
                    );
                    if required && text.trim().is_empty() {
                        self.remount_empty_field();
                    } else {
                        self.complete_step(StepValue::Text(text));
                    }
                    FormOutcome::Pending
                }
                _ => FormOutcome::Pending,
            },
            Mounted::List(list) => {
                let ListOutcome::Selected(option) = list.handle_key(key, keymap) else {
                    return FormOutcome::Pending;
                };
                let is_multi = matches!(
                    self.steps.get(self.current).map(|s| &s.kind),
                    Some(StepKind::MultiChoice { .. })
                );
                if is_multi {
                    self.select_multi(option);
                } else {
                    self.complete_step(StepValue::Choice(option));
                }
                FormOutcome::Pending
            }
            Mounted::Review(list) => {
                let ListOutcome::Selected(option) = list.handle_key(key, keymap) else {
                    return FormOutcome::Pending;
                };
                match option.value.as_str() {
                    SUBMIT_VALUE => {
                        self.finished = true;
                        FormOutcome::Submitted(self.values())
                    }
                    EDIT_VALUE => {
                        self.current = 0;
                        self.mount_current();
                        FormOutcome::Pending
                    }
                    _ => {
                        self.finished = true;
                        FormOutcome::Cancelled
                    }
                }
            }
        }
    }

    fn select_multi(&mut self, option: SelectOption) {
        match option.value.as_str() {
            DONE_VALUE => {
                let selected = std::mem::take(&mut self.pending_many);
                self.complete_step(StepValue::Many(selected));
            }
            CLEAR_VALUE => {
                self.pending_many.clear();
                self.mounted = Mounted::List(self.multi_choice_list(Some(CLEAR_VALUE)));
            }
            index => {
                let label = index.parse::<usize>().ok().and_then(|i| {
                    match self.steps.get(self.current).map(|s| &s.kind) {
                        Some(StepKind::MultiChoice { options }) => options.get(i).cloned(),
                        _ => None,
                    }
                });
                if let Some(label) = label {
                    if let Some(pos) = self.pending_many.iter().position(|s| *s == label) {
                        self.pending_many.remove(pos);
                    } else {
                        self.pending_many.push(label);
                    }
                }
                self.mounted = Mounted::List(self.multi_choice_list(Some(index)));
            }
        }
    }

    fn review_lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let values = self.values();
        let mut lines: Vec<Line<'static>> = self
            .steps
            .iter()
            .map(|step| field(step.label, &values.display(step.key)))
            .collect();

        if let Some(heading) = self.review.notes_heading {
            lines.push(Line::default());
            lines.push(Line::styled(heading.to_string(), t.heading_style()));
            lines.extend(
                self.review
                    .notes
                    .iter()
                    .map(|note| Line::styled(format!("• {}", note), t.text_style())),
            );
        }
        lines
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, keymap: &Keymap) -> Result<()> {
        let prompt = self.prompt();
        let footer = match &self.mounted {
            Mounted::Field(field) => keymap.footer_text_entry(field.is_multiline()),
            _ => keymap.footer_navigation(),
        };
        let title = if self.is_reviewing() {
            self.review.title
        } else {
            self.title
        };
        let content = render_page(frame, area, title, &prompt, &footer)?;
        let review_lines = if self.is_reviewing() {
            self.review_lines()
        } else {
            Vec::new()
        };

        match &mut self.mounted {
            Mounted::Field(field) => {
                let height = field.required_height().min(content.height);
                let field_area = Rect { height, ..content };
                field.render(frame, field_area, keymap);
            }
            Mounted::List(list) => {
                let intro = if self.pending_many.is_empty() {
                    Vec::new()
                } else {
                    vec![Line::styled(
                        format!("Selected: {}", self.pending_many.join(", ")),
                        theme().success_style(),
                    )]
                };
                render_intro_and_list(frame, content, intro, list);
            }
            Mounted::Review(list) => {
                let rest = render_intro(frame, content, review_lines);
                list.render(frame, rest);
            }
        }
        Ok(())
    }
}

fn review_list(review: &ReviewSpec) -> SelectList {
    SelectList::new(vec![
        SelectOption::new(review.submit_label, SUBMIT_VALUE),
        SelectOption::new(review.edit_label, EDIT_VALUE),
        SelectOption::new(review.cancel_label, CANCEL_VALUE),
    ])
}
