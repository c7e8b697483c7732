//! Header bar with the portal title, page tabs, and backend status

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use neethi_app::Page;
use neethi_core::BackendStatus;

use crate::theme::{palette, styles};

/// Main header: title row on top, tabs row below
pub struct MainHeader<'a> {
    active: Page,
    backend: &'a BackendStatus,
}

impl<'a> MainHeader<'a> {
    pub fn new(active: Page, backend: &'a BackendStatus) -> Self {
        Self { active, backend }
    }

    fn title_line(&self, width: u16) -> Line<'static> {
        let (dot, dot_style) = styles::backend_indicator(self.backend);
        let left = vec![
            Span::raw(" "),
            Span::styled(
                "⚖ Neethi",
                Style::default()
                    .fg(palette::SAFFRON)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled("Department of Justice", styles::text_secondary()),
        ];
        let right = vec![
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled(self.backend.label(), dot_style),
            Span::raw(" "),
        ];

        let left_width: usize = left.iter().map(|s| s.width()).sum();
        let right_width: usize = right.iter().map(|s| s.width()).sum();
        let gap = usize::from(width).saturating_sub(left_width + right_width);

        let mut spans = left;
        if gap > 0 {
            spans.push(Span::raw(" ".repeat(gap)));
            spans.extend(right);
        }
        Line::from(spans)
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, page) in Page::ALL.iter().enumerate() {
            let style = if *page == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" F{} ", i + 1), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", page.tab_label()), style));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::NAVY));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_area = Rect { height: 1, ..inner };
        self.title_line(inner.width).render(title_area, buf);

        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            self.tabs_line().render(tabs_area, buf);
        }
    }
}
