//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border, title row, tabs row, bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Footer is a single hint line
pub const FOOTER_HEIGHT: u16 = 1;

const WIDGET_WIDTH: u16 = 56;
const WIDGET_HEIGHT: u16 = 18;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Page outlet
    pub content: Rect,
    /// Present only on pages that mount the footer
    pub footer: Option<Rect>,
}

/// Split the screen into header, page outlet, and optional footer
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let footer_height = if show_footer { FOOTER_HEIGHT } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(footer_height),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: show_footer.then_some(chunks[2]),
    }
}

/// Floating chat panel anchored to the bottom-right of the page outlet
pub fn chat_widget_area(content: Rect) -> Rect {
    let width = WIDGET_WIDTH.min(content.width.saturating_sub(2));
    let height = WIDGET_HEIGHT.min(content.height);
    Rect::new(
        content.x + content.width.saturating_sub(width + 1),
        content.y + content.height.saturating_sub(height),
        width,
        height,
    )
}

/// Calculate a centered modal rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
