//! Adventure activities.

use crate::catalog::{Adventure, Catalog};
use crate::screens::browser::{BrowserSpec, DrillDownBrowser};
use crate::screens::page::{fact, stat};
use crate::styles::{theme, Theme};
use crate::widgets::detail::{bullets, heading, text};
use ratatui::prelude::*;

pub fn screen(catalog: &dyn Catalog) -> DrillDownBrowser<Adventure> {
    let spec = BrowserSpec {
        title: "🏃 NEPAL ADVENTURE ACTIVITIES".to_string(),
        subtitle: "From peaceful treks to extreme sports - find your perfect Nepal adventure"
            .to_string(),
        placeholder: "Select an adventure activity to explore:",
        back_label: "← Back to Main Menu",
        label: |a: &Adventure| format!("{} {}", a.emoji, a.name),
        summary,
        detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(spec, catalog.adventures())
}

fn summary(_: &[Adventure]) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            stat("🥾", "50+", "Trekking Routes"),
            stat("🏔️", 8, "8000m+ Peaks"),
            stat("🚣", 6, "Major Rivers"),
            stat("🎯", 365, "Adventure Days/Year"),
        ]),
        Line::default(),
        fact(
            "⚡",
            "Adventure Fact",
            "Nepal has adventures for every thrill level - from gentle walks to Everest expeditions!",
        ),
    ]
}

/// Colour for a free-form difficulty range; the first level named wins.
pub fn difficulty_color(t: &Theme, difficulty: &str) -> Color {
    if difficulty.contains("Easy") {
        t.success
    } else if difficulty.contains("Moderate") {
        t.warning
    } else if difficulty.contains("Challenging") {
        t.error
    } else if difficulty.contains("Extreme") {
        t.secondary
    } else {
        t.text
    }
}

fn detail(a: &Adventure) -> Vec<Line<'static>> {
    let t = theme();
    let mut lines = vec![text(a.description)];
    lines.extend(heading("📅 Best Time"));
    lines.push(text(a.best_time));
    lines.extend(heading("⚡ Difficulty"));
    lines.push(Line::styled(
        a.difficulty.to_string(),
        t.fg(difficulty_color(&t, a.difficulty))
            .add_modifier(Modifier::BOLD),
    ));
    lines.extend(heading("⏱️ Duration"));
    lines.push(text(a.duration));
    lines.extend(heading("✨ Adventure Highlights"));
    lines.extend(bullets("•", a.highlights));
    lines.extend(heading("📋 Requirements"));
    lines.extend(bullets("•", a.requirements));
    lines.extend(heading("💡 Pro Tips"));
    lines.extend(bullets("•", a.tips));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_color_first_match_wins() {
        let t = Theme::dark();
        assert_eq!(difficulty_color(&t, "Easy to Challenging"), t.success);
        assert_eq!(difficulty_color(&t, "Challenging to Extreme"), t.error);
        assert_eq!(difficulty_color(&t, "Extreme (no experience required)"), t.secondary);
        assert_eq!(difficulty_color(&t, "Beginner to Advanced"), t.text);
    }
}
