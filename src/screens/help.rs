//! Help and about.
//!
//! Inside a section, Esc leaves the help screen altogether while any other
//! key goes back to the section list.

use crate::catalog::{Catalog, HelpSection};
use crate::screens::browser::{BrowserSpec, DrillDownBrowser};
use crate::screens::page::{fact, stat};
use crate::styles::theme;
use crate::widgets::detail::text;
use ratatui::prelude::*;

pub fn screen(catalog: &dyn Catalog) -> DrillDownBrowser<HelpSection> {
    let spec = BrowserSpec {
        title: "❓ HELP & ABOUT ❓".to_string(),
        subtitle: "Get help using the Explore Nepal CLI and learn about its features".to_string(),
        placeholder: "Select a help topic:",
        back_label: "← Back to Main Menu",
        label: |s: &HelpSection| format!("{} {}", s.emoji, s.name),
        summary,
        detail,
        escape_exits_detail: true,
    };
    DrillDownBrowser::new(spec, catalog.help_sections())
}

fn summary(_: &[HelpSection]) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            stat("🏔️", "6+", "Major Destinations"),
            stat("🎯", 6, "Adventure Activities"),
            stat("💡", "30+", "Travel Tips"),
            stat("📋", 5, "Trip Templates"),
        ]),
        Line::default(),
        fact(
            "💡",
            "Quick Tip",
            "Use Ctrl+C to exit at any time. Navigate with arrow keys and Enter to select.",
        ),
    ]
}

fn detail(section: &HelpSection) -> Vec<Line<'static>> {
    let t = theme();
    section
        .content
        .iter()
        .map(|line| {
            if line.starts_with('•') {
                Line::styled((*line).to_string(), t.emphasis_style())
            } else {
                text(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn test_detail_keeps_every_content_line() {
        let about = &StaticCatalog.help_sections()[0];
        assert_eq!(detail(about).len(), about.content.len());
    }
}
