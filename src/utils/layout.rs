use ratatui::prelude::*;

/// Split `area` into header, content and footer rows.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Split `area` into a block of `top_height` rows and the remainder.
pub fn split_top(area: Rect, top_height: u16) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(top_height), Constraint::Min(0)]).split(area);
    (chunks[0], chunks[1])
}
