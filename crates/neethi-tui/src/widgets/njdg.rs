//! NJDG page: pendency dashboard

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use neethi_app::njdg::StatsState;
use neethi_app::FetchState;
use neethi_core::{LakhScale, NjdgDisplay, StateBar};

use crate::theme::{palette, styles};

const NAME_WIDTH: usize = 16;

pub struct NjdgPage<'a> {
    stats: &'a StatsState,
}

impl<'a> NjdgPage<'a> {
    pub fn new(stats: &'a StatsState) -> Self {
        Self { stats }
    }

    fn render_message(&self, area: Rect, buf: &mut Buffer, line: Line<'_>) {
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .render(inset(area), buf);
    }

    fn render_dashboard(&self, display: &NjdgDisplay, area: Rect, buf: &mut Buffer) {
        let notice = self.stats.demo_notice();
        let chunks = Layout::vertical([
            Constraint::Length(u16::from(notice.is_some())),
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

        if let Some(notice) = notice {
            Line::from(Span::styled(format!("ℹ️ {}", notice), styles::status_blue()))
                .render(inset(chunks[0]), buf);
        }

        render_figures(display, chunks[1], buf);

        let columns =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(chunks[2]);
        render_state_bars(&display.top_states, columns[0], buf);
        render_breakdown(display, columns[1], buf);

        if let Some(updated) = &display.last_updated {
            Line::from(Span::styled(
                format!("Last updated: {}", updated),
                styles::text_muted(),
            ))
            .render(inset(chunks[3]), buf);
        }
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn render_figures(display: &NjdgDisplay, area: Rect, buf: &mut Buffer) {
    let figures = [
        (display.total_pending.as_str(), "Total Pending"),
        (display.district_pending.as_str(), "District Courts"),
        (display.high_pending.as_str(), "High Courts"),
        (display.disposal_percentage.as_str(), "Disposal Rate"),
    ];
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((value, label), column) in figures.into_iter().zip(columns.iter()) {
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

/// One chart row: rank, name, bar scaled to `bar_width`, label
fn bar_line(bar: &StateBar, bar_width: usize) -> Line<'static> {
    let filled = (bar.ratio.clamp(0.0, 1.0) * bar_width as f64).round() as usize;
    Line::from(vec![
        Span::styled(format!("{}. ", bar.rank), styles::text_muted()),
        Span::styled(
            format!("{:<w$.w$}", bar.name, w = NAME_WIDTH),
            styles::text_primary(),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(palette::SAFFRON)),
        Span::raw(" ".repeat(bar_width - filled + 1)),
        Span::styled(bar.label.clone(), styles::text_secondary()),
    ])
}

fn render_state_bars(bars: &[StateBar], area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(false).title(Span::styled(
        " Top States by Pendency ",
        styles::text_secondary(),
    ));
    let inner = block.inner(area);
    block.render(area, buf);

    // rank + name + gap + label
    let fixed = 3 + NAME_WIDTH + 1 + 14;
    let bar_width = usize::from(inner.width).saturating_sub(fixed).max(1);
    let lines: Vec<Line> = bars.iter().map(|b| bar_line(b, bar_width)).collect();
    Paragraph::new(lines).render(inner, buf);
}

fn render_breakdown(display: &NjdgDisplay, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(false).title(Span::styled(
        " Case Age & Court Split ",
        styles::text_secondary(),
    ));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines: Vec<Line> = display
        .age_buckets
        .iter()
        .map(|(label, value)| breakdown_row(label, value))
        .collect();
    lines.extend([
        breakdown_row("District civil", &display.district_split.civil),
        breakdown_row("District criminal", &display.district_split.criminal),
        breakdown_row("High Ct civil", &display.high_split.civil),
        breakdown_row("High Ct criminal", &display.high_split.criminal),
        breakdown_row("Filed daily", &display.daily_filing),
        breakdown_row("Disposed daily", &display.daily_disposal),
    ]);

    Paragraph::new(lines).render(inner, buf);
}

fn breakdown_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), styles::text_muted()),
        Span::styled(value.to_string(), styles::text_primary()),
    ])
}

impl Widget for NjdgPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);
        Line::from(Span::styled(
            " 📊 National Judicial Data Grid",
            styles::heading(),
        ))
        .render(chunks[0], buf);

        match &self.stats.stats {
            FetchState::Idle | FetchState::Loading => self.render_message(
                chunks[1],
                buf,
                Line::from(Span::styled("⏳ Loading statistics…", styles::status_yellow())),
            ),
            FetchState::Failed(error) => self.render_message(
                chunks[1],
                buf,
                Line::from(Span::styled(
                    format!("⚠ {}", error.message()),
                    styles::status_red(),
                )),
            ),
            FetchState::Loaded(_) => match self.stats.display(LakhScale::Standard) {
                Some(display) => self.render_dashboard(&display, chunks[1], buf),
                None => self.render_message(
                    chunks[1],
                    buf,
                    Line::from(Span::styled(
                        "No statistics available right now.",
                        styles::text_muted(),
                    )),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use neethi_core::NjdgResponse;

    fn loaded() -> StatsState {
        let response: NjdgResponse = serde_json::from_value(serde_json::json!({
            "data": {
                "total_pending_cases": 45234567,
                "district_courts": {"pending": 41234567, "civil": 11000000, "criminal": 30234567},
                "high_courts": {"pending": 6012345, "civil": 4000000, "criminal": 2012345},
                "disposal_rate": {"disposal_percentage": 92.5, "daily_filing": 45000, "daily_disposal": 42000},
                "top_states": [
                    {"name": "Uttar Pradesh", "pending": 11000000},
                    {"name": "Maharashtra", "pending": 5500000}
                ],
                "age_wise": {"under_1_year": 12000000},
                "last_updated": "2024-01-31"
            },
            "source": "demo"
        }))
        .unwrap();
        let mut stats = StatsState::new();
        stats.begin_load();
        stats.complete_load::<()>(Ok(response));
        stats
    }

    fn render(stats: &StatsState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 22);
        term.render_widget(NjdgPage::new(stats), term.area());
        term
    }

    #[test]
    fn test_dashboard_shows_figures_and_bars() {
        let term = render(&loaded());
        assert!(term.buffer_contains("4.5 Cr"));
        assert!(term.buffer_contains("92.5%"));
        assert!(term.buffer_contains("1. Uttar Pradesh"));
        assert!(term.buffer_contains("2. Maharashtra"));
        assert!(term.buffer_contains("Last updated: 2024-01-31"));
        assert!(term.buffer_contains("45,000"));
    }

    #[test]
    fn test_half_ratio_bar_is_half_width() {
        let full = StateBar {
            rank: 1,
            name: "A".into(),
            label: "x".into(),
            ratio: 1.0,
        };
        let half = StateBar { ratio: 0.5, ..full.clone() };
        let count = |line: &Line| -> usize {
            line.spans
                .iter()
                .map(|s| s.content.matches('█').count())
                .sum()
        };
        assert_eq!(count(&bar_line(&full, 20)), 20);
        assert_eq!(count(&bar_line(&half, 20)), 10);
    }

    #[test]
    fn test_unsorted_payload_bar_is_clamped() {
        let bar = StateBar {
            rank: 2,
            name: "B".into(),
            label: "x".into(),
            ratio: 1.8,
        };
        let filled: usize = bar_line(&bar, 10)
            .spans
            .iter()
            .map(|s| s.content.matches('█').count())
            .sum();
        assert_eq!(filled, 10);
    }

    #[test]
    fn test_loading_and_failure_states() {
        let mut stats = StatsState::new();
        stats.begin_load();
        assert!(render(&stats).buffer_contains("Loading statistics"));

        stats.complete_load::<()>(Err(()));
        assert!(render(&stats).buffer_contains("⚠"));
    }
}
