//! Page chrome shared by every screen: header, intro block and footer.

use crate::components::{Footer, Header};
use crate::styles::theme;
use crate::utils::{create_standard_layout, split_top};
use crate::widgets::SelectList;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Draw the header and footer, returning the content area between them.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    footer: &str,
) -> Result<Rect> {
    let (header_chunk, content_chunk, footer_chunk) =
        create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
    Header::render(frame, header_chunk, title, subtitle)?;
    Footer::render(frame, footer_chunk, footer)?;
    Ok(content_chunk)
}

/// Draw `intro` lines at the top of `area` and return what is left below.
pub fn render_intro(frame: &mut Frame, area: Rect, intro: Vec<Line<'static>>) -> Rect {
    if intro.is_empty() {
        return area;
    }
    // Leave at least half the area for whatever follows
    let height = (intro.len() as u16 + 1).min(area.height / 2);
    let (intro_area, rest) = split_top(area, height);
    frame.render_widget(
        Paragraph::new(intro)
            .style(theme().text_style())
            .wrap(Wrap { trim: false }),
        intro_area,
    );
    rest
}

/// Draw `intro` followed by `list`.
pub fn render_intro_and_list(
    frame: &mut Frame,
    area: Rect,
    intro: Vec<Line<'static>>,
    list: &mut SelectList,
) {
    let rest = render_intro(frame, area, intro);
    list.render(frame, rest);
}

/// A `label value` statistic line, e.g. `🏔️ 2 Mountain Treks`.
pub fn stat(icon: &str, value: impl ToString, label: &str) -> Span<'static> {
    Span::styled(
        format!("{} {} {}   ", icon, value.to_string(), label),
        theme().emphasis_style(),
    )
}

/// A `💡 Tip: text` line.
pub fn fact(icon: &str, label: &str, text: &str) -> Line<'static> {
    let t = theme();
    Line::from(vec![
        Span::styled(format!("{} ", icon), t.muted_style()),
        Span::styled(format!("{}: ", label), t.text_style().add_modifier(Modifier::BOLD)),
        Span::styled(text.to_string(), t.muted_style()),
    ])
}
