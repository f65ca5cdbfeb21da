//! The [`Banner`] widget renders the `EXPLORE NEPAL` title in box drawing
//! letters.
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget};

/// Rows the banner occupies.
pub const BANNER_HEIGHT: u16 = 3;

/// Three-row glyphs, all three rows of a glyph have the same width.
const GLYPHS: &[(char, [&str; 3])] = &[
    ('A', ["┏━┓", "┣━┫", "╹ ╹"]),
    ('E', ["┏━╸", "┣╸ ", "┗━╸"]),
    ('L', ["╻  ", "┃  ", "┗━╸"]),
    ('N', ["┏┓╻", "┃┗┫", "╹ ╹"]),
    ('O', ["┏━┓", "┃ ┃", "┗━┛"]),
    ('P', ["┏━┓", "┣━┛", "╹  "]),
    ('R', ["┏━┓", "┣┳┛", "╹┗╸"]),
    ('X', ["┓ ┏", " ╋ ", "┛ ┗"]),
    (' ', ["  ", "  ", "  "]),
];

/// Render `text` as three rows of box drawing letters.
///
/// Characters without a glyph are skipped.
pub fn banner_rows(text: &str) -> [String; 3] {
    let mut rows = [String::new(), String::new(), String::new()];
    for c in text.chars().map(|c| c.to_ascii_uppercase()) {
        if let Some((_, glyph)) = GLYPHS.iter().find(|(g, _)| *g == c) {
            for (row, part) in rows.iter_mut().zip(glyph) {
                row.push_str(part);
            }
        }
    }
    rows
}

/// A widget that renders the application banner, centered
///
/// Renders:
///
/// ```text
/// ┏━╸┓ ┏┏━┓╻  ┏━┓┏━┓┏━╸  ┏┓╻┏━╸┏━┓┏━┓╻
/// ┣╸  ╋ ┣━┛┃  ┃ ┃┣┳┛┣╸   ┃┗┫┣╸ ┣━┛┣━┫┃
/// ┗━╸┛ ┗╹  ┗━╸┗━┛╹┗╸┗━╸  ╹ ╹┗━╸╹  ╹ ╹┗━╸
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Banner;

impl Widget for Banner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let style = t.fg(t.error).add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = banner_rows("EXPLORE NEPAL")
            .into_iter()
            .map(|row| Line::styled(row, style))
            .collect();
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_have_equal_width() {
        let rows = banner_rows("Explore Nepal");
        let widths: Vec<usize> = rows.iter().map(|r| r.chars().count()).collect();
        assert_eq!(widths[0], widths[1]);
        assert_eq!(widths[1], widths[2]);
        // 12 letters of width 3 and one space of width 2
        assert_eq!(widths[0], 38);
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert_eq!(banner_rows("?!"), banner_rows(""));
    }
}
