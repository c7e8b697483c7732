//! Home page: hero, announcement ticker, headline figures, service cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use neethi_core::content::{HomeStat, HOME_STATS, PENDING_STAT_LABEL, SERVICE_CARDS};

use crate::theme::{palette, styles};

pub struct HomePage<'a> {
    pending_headline: &'a str,
    announcement: &'a str,
    selected: usize,
}

impl<'a> HomePage<'a> {
    pub fn new(pending_headline: &'a str, announcement: &'a str, selected: usize) -> Self {
        Self {
            pending_headline,
            announcement,
            selected,
        }
    }

    /// Static figures with the live pending count after the first one
    fn stats(&self) -> Vec<(&str, &str)> {
        let mut stats: Vec<(&str, &str)> = HOME_STATS
            .iter()
            .map(|HomeStat { value, label }| (*value, *label))
            .collect();
        stats.insert(1, (self.pending_headline, PENDING_STAT_LABEL));
        stats
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled("Access to Justice for All", styles::heading())),
            Line::from(Span::styled(
                "Department of Justice citizen services, one terminal away",
                styles::text_secondary(),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_ticker(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::NAVY));
        Line::from(vec![
            Span::styled(" 📢 ", styles::heading()),
            Span::styled(self.announcement, styles::text_primary()),
        ])
        .render(area, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let stats = self.stats();
        let count = stats.len();
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
            .split(area);

        for ((value, label), column) in stats.into_iter().zip(columns.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*column);
            block.render(*column, buf);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(palette::SAFFRON)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, styles::text_muted())),
            ])
            .alignment(Alignment::Center)
            .render(inner, buf);
        }
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);

        for (i, card) in SERVICE_CARDS.iter().enumerate() {
            let columns =
                Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[i / 2]);
            let cell = columns[i % 2];
            let selected = i == self.selected;

            let title_style = if selected {
                styles::focused_selected()
            } else {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            };
            let block = styles::glass_block(selected)
                .title(Span::styled(format!(" {} {} ", card.icon, card.title), title_style));
            let inner = block.inner(cell);
            block.render(cell, buf);
            Paragraph::new(card.description)
                .style(styles::text_secondary())
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }
    }
}

impl Widget for HomePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

        self.render_hero(chunks[0], buf);
        self.render_ticker(chunks[1], buf);
        self.render_stats(chunks[2], buf);
        self.render_cards(chunks[3], buf);
    }
}
