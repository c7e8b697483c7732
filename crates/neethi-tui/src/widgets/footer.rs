//! Single-line key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use neethi_app::Page;

use crate::theme::{palette, styles};

/// Key hints for the active page, plus the widget toggle when available
pub struct Footer {
    page: Page,
    widget_available: bool,
}

impl Footer {
    pub fn new(page: Page, widget_available: bool) -> Self {
        Self {
            page,
            widget_available,
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints: Vec<(&str, &str)> = match self.page {
            Page::Home => vec![("↑↓", "Select"), ("Enter", "Open"), ("a", "Ask Neethi")],
            Page::ECourts => vec![("Enter", "Search"), ("^D", "Demo CNR")],
            Page::TeleLaw => vec![("↑↓", "Select"), ("Enter", "Connect")],
            Page::LegalAid => vec![("↑↓", "Field"), ("←→", "Change"), ("Space", "Toggle")],
            Page::Njdg => Vec::new(),
            Page::Neethi => vec![("Enter", "Send")],
        };
        hints.push(("Tab", "Next page"));
        if self.widget_available {
            hints.push(("^O", "Chat"));
        }
        hints.push(("^C", "Quit"));
        hints
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::NAVY));

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_secondary()));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_lists_page_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(Footer::new(Page::ECourts, true), term.area());
        assert!(term.buffer_contains("Demo CNR"));
        assert!(term.buffer_contains("^O Chat"));
    }

    #[test]
    fn test_footer_omits_chat_toggle_when_unavailable() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(Footer::new(Page::Home, false), term.area());
        assert!(term.buffer_contains("Open"));
        assert!(!term.buffer_contains("Chat"));
    }
}
