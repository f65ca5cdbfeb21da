//! Culture and traditions.

use crate::catalog::{Catalog, CultureAspect};
use crate::screens::browser::{BrowserSpec, DrillDownBrowser};
use crate::screens::page::{fact, stat};
use crate::widgets::detail::{bullets, heading, text};
use ratatui::prelude::*;

pub fn screen(catalog: &dyn Catalog) -> DrillDownBrowser<CultureAspect> {
    let spec = BrowserSpec {
        title: "🕉️ DISCOVER NEPAL'S RICH CULTURE 🕉️".to_string(),
        subtitle: "Explore the diverse traditions, beliefs, and practices of Nepal's people"
            .to_string(),
        placeholder: "Select a cultural aspect to explore:",
        back_label: "← Back to Main Menu",
        label: |a: &CultureAspect| format!("{} {}", a.emoji, a.name),
        summary: |_: &[CultureAspect]| {
            vec![
                Line::from(vec![
                    stat("🕉️", "81.3%", "Hindu Population"),
                    stat("☸️", "9%", "Buddhist Population"),
                    stat("🎭", "100+", "Ethnic Groups"),
                    stat("📚", 123, "Languages"),
                ]),
                Line::default(),
                fact(
                    "🌸",
                    "Cultural Fact",
                    "\"Namaste\" means \"I bow to the divine in you\" - a beautiful greeting reflecting Nepal's spiritual nature!",
                ),
            ]
        },
        detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(spec, catalog.culture())
}

fn detail(a: &CultureAspect) -> Vec<Line<'static>> {
    let mut lines = vec![text(a.description)];
    lines.extend(heading("📊 Key Information"));
    lines.extend(bullets("•", a.details));
    lines.extend(heading("✨ Cultural Highlights"));
    lines.extend(bullets("•", a.highlights));
    lines.extend(heading("🎯 Traditional Practices"));
    lines.extend(bullets("•", a.practices));
    lines
}
