//! Detail panel and the line builders used to fill it.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// A bordered, wrapping panel showing one record's full content.
pub struct DetailPanel<'a> {
    title: &'a str,
    lines: Vec<Line<'static>>,
}

impl<'a> DetailPanel<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'static>>) -> Self {
        Self { title, lines }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", self.title))
            .title_style(t.title_style())
            .padding(Padding::horizontal(1));
        Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Section heading, preceded by a blank line.
pub fn heading(text: &str) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::styled(text.to_string(), theme().heading_style()),
    ]
}

/// `Label: value` on one line.
pub fn field(label: &str, value: &str) -> Line<'static> {
    let t = theme();
    Line::from(vec![
        Span::styled(format!("{}: ", label), t.emphasis_style()),
        Span::styled(value.to_string(), t.text_style()),
    ])
}

/// `Label: value` with the value drawn in `style`.
pub fn field_styled(label: &str, value: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), theme().emphasis_style()),
        Span::styled(value.to_string(), style),
    ])
}

/// Plain paragraph text.
pub fn text(value: &str) -> Line<'static> {
    Line::styled(value.to_string(), theme().text_style())
}

/// Muted text.
pub fn muted(value: &str) -> Line<'static> {
    Line::styled(value.to_string(), theme().muted_style())
}

/// One line per item, each prefixed with `marker`.
pub fn bullets(marker: &str, items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| text(&format!("{} {}", marker, item)))
        .collect()
}
