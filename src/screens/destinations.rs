//! Top destinations.

use crate::catalog::{region_emoji, Catalog, Destination};
use crate::screens::browser::{BrowserSpec, DrillDownBrowser};
use crate::screens::page::{fact, stat};
use crate::styles::{theme, Theme};
use crate::widgets::detail::{bullets, heading, muted, text};
use ratatui::prelude::*;

pub fn screen(catalog: &dyn Catalog) -> DrillDownBrowser<Destination> {
    let spec = BrowserSpec {
        title: "🏔️ EXPLORE NEPAL'S TOP DESTINATIONS 🏔️".to_string(),
        subtitle: "Discover breathtaking places across the Himalayas and beyond".to_string(),
        placeholder: "Select a destination to explore:",
        back_label: "← Back to Main Menu",
        label,
        summary,
        detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(spec, catalog.destinations())
}

fn label(d: &Destination) -> String {
    format!("{} {} - {}", region_emoji(d.region), d.name, d.region)
}

fn summary(destinations: &[Destination]) -> Vec<Line<'static>> {
    let count = |pred: fn(&Destination) -> bool| destinations.iter().filter(|d| pred(d)).count();
    let treks = count(|d| d.region.contains("Khumbu") || d.region.contains("Annapurna"));
    let heritage = count(|d| d.region.contains("Kathmandu"));
    let wildlife = count(|d| d.region.contains("Terai"));

    vec![
        Line::from(vec![
            stat("🏔️", treks, "Mountain Treks"),
            stat("🏛️", heritage, "Heritage Sites"),
            stat("🦏", wildlife, "Wildlife Parks"),
            stat("📍", destinations.len(), "Total Destinations"),
        ]),
        Line::default(),
        fact(
            "💡",
            "Tip",
            "Each destination offers unique experiences - from world-class trekking to spiritual journeys!",
        ),
    ]
}

/// Colour for a destination difficulty rating.
pub fn difficulty_color(t: &Theme, difficulty: &str) -> Color {
    let lower = difficulty.to_lowercase();
    if lower == "easy" {
        t.success
    } else if lower.starts_with("moderate") {
        t.warning
    } else if lower == "challenging" {
        t.error
    } else {
        t.text
    }
}

fn detail(d: &Destination) -> Vec<Line<'static>> {
    let t = theme();
    let mut lines = vec![
        muted(&format!("{} • {}m altitude", d.region, d.altitude_m)),
        Line::default(),
        text(d.description),
    ];
    lines.extend(heading("📅 Best Season"));
    lines.push(text(d.best_season));
    lines.extend(heading("⚡ Difficulty"));
    lines.push(Line::styled(
        d.difficulty.to_string(),
        t.fg(difficulty_color(&t, d.difficulty)).add_modifier(Modifier::BOLD),
    ));
    lines.extend(heading("🎯 Activities"));
    lines.extend(bullets("•", d.activities));
    lines.extend(heading("✨ Highlights"));
    lines.extend(bullets("•", d.highlights));
    lines.extend(heading("💡 Travel Tips"));
    lines.extend(bullets("•", d.tips));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn test_summary_counts_by_region() {
        let lines = summary(StaticCatalog.destinations());
        let stats = lines[0].to_string();
        assert!(stats.contains("2 Mountain Treks"));
        assert!(stats.contains("1 Heritage Sites"));
        assert!(stats.contains("2 Wildlife Parks"));
        assert!(stats.contains("6 Total Destinations"));
    }

    #[test]
    fn test_label_shows_region() {
        let lumbini = &StaticCatalog.destinations()[5];
        assert_eq!(label(lumbini), "🌿 Lumbini - Terai");
    }

    #[test]
    fn test_difficulty_colors() {
        let t = Theme::dark();
        assert_eq!(difficulty_color(&t, "Easy"), t.success);
        assert_eq!(difficulty_color(&t, "Moderate to Challenging"), t.warning);
        assert_eq!(difficulty_color(&t, "Challenging"), t.error);
    }
}
