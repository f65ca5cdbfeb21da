//! Geographic regions.

use crate::catalog::{Catalog, Region};
use crate::screens::browser::{BrowserSpec, DrillDownBrowser};
use crate::screens::page::{fact, stat};
use crate::widgets::detail::{bullets, heading, muted, text};
use ratatui::prelude::*;

pub fn screen(catalog: &dyn Catalog) -> DrillDownBrowser<Region> {
    let spec = BrowserSpec {
        title: "🗺️ EXPLORE NEPAL'S GEOGRAPHIC REGIONS 🗺️".to_string(),
        subtitle: "From the world's highest peaks to fertile plains - discover Nepal's diverse geography"
            .to_string(),
        placeholder: "Select a region to explore:",
        back_label: "← Back to Main Menu",
        label: |r: &Region| format!("{} {}", r.emoji, r.name),
        summary,
        detail,
        escape_exits_detail: false,
    };
    DrillDownBrowser::new(spec, catalog.regions())
}

fn summary(regions: &[Region]) -> Vec<Line<'static>> {
    let mut stats: Vec<Span<'static>> = regions
        .iter()
        .map(|r| stat(r.emoji, r.population, r.name))
        .collect();
    stats.push(stat("🌡️", regions.len(), "Climate Zones"));

    vec![
        Line::from(stats),
        Line::default(),
        fact(
            "🌍",
            "Geography Fact",
            "Nepal spans from 60m to 8,849m altitude in just 200km width!",
        ),
    ]
}

fn detail(r: &Region) -> Vec<Line<'static>> {
    let mut lines = vec![
        muted(&format!(
            "{} • {} Climate • {} of Nepal's population",
            r.altitude, r.climate, r.population
        )),
        Line::default(),
        text(r.description),
    ];
    lines.extend(heading("✨ Key Highlights"));
    lines.extend(bullets("•", r.highlights));
    lines.extend(heading("🎯 Popular Activities"));
    lines.extend(bullets("•", r.activities));
    lines.extend(heading("📍 Must-Visit Destinations"));
    lines.extend(bullets("•", r.destinations));
    lines.extend(heading("📅 Best Time to Visit"));
    lines.push(text(r.best_time));
    lines.extend(heading("⚠️ Challenges"));
    lines.extend(bullets("•", r.challenges));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn test_summary_lists_population_shares() {
        let lines = summary(StaticCatalog.regions());
        let stats = lines[0].to_string();
        assert!(stats.contains("6.73%"));
        assert!(stats.contains("50.27%"));
        assert!(stats.contains("3 Climate Zones"));
    }

    #[test]
    fn test_detail_sections() {
        let himal = &StaticCatalog.regions()[0];
        let rendered: Vec<String> = detail(himal).iter().map(|l| l.to_string()).collect();
        assert!(rendered[0].contains("of Nepal's population"));
        assert!(rendered.iter().any(|l| l == "⚠️ Challenges"));
    }
}
