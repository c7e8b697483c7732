//! eCourts page: CNR search and the case-status result

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use neethi_app::case_lookup::CaseLookupState;
use neethi_core::case_status::{DEMO_CNR, ECOURTS_URL, MIN_CNR_LEN};
use neethi_core::content::{ECOURTS_DEMO_NOTICE, ECOURTS_SERVICES};
use neethi_core::{CaseOutcome, CaseRecord};

use crate::theme::styles;

const LABEL_WIDTH: usize = 14;
const MISSING: &str = "—";

pub struct CaseStatusPage<'a> {
    lookup: &'a CaseLookupState,
}

impl<'a> CaseStatusPage<'a> {
    pub fn new(lookup: &'a CaseLookupState) -> Self {
        Self { lookup }
    }

    fn shows_record(&self) -> bool {
        matches!(self.lookup.result, Some(Ok(CaseOutcome::Found { .. })))
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(
            " CNR Number ",
            styles::text_secondary(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("› ", styles::heading())];
        if self.lookup.cnr_input.is_empty() {
            spans.push(Span::styled(
                format!("e.g. {}", DEMO_CNR),
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(
                self.lookup.cnr_input.as_str(),
                styles::text_primary(),
            ));
            spans.push(Span::styled("▏", styles::heading()));
        }

        let button = if self.lookup.loading {
            Span::styled(" Searching… ", styles::disabled())
        } else {
            Span::styled(" Enter ⏎ Search ", styles::focused_selected())
        };
        let used: usize = spans.iter().map(|s| s.width()).sum();
        let gap = usize::from(inner.width).saturating_sub(used + button.width());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(button);
        Line::from(spans).render(inner, buf);
    }

    fn result_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if self.lookup.loading {
            lines.push(Line::from(Span::styled(
                "⏳ Fetching case status…",
                styles::status_yellow(),
            )));
        }

        match &self.lookup.result {
            None if !self.lookup.loading => {
                lines.push(Line::from(Span::styled(
                    format!(
                        "Enter a {}-character CNR number to check the status of a case.",
                        MIN_CNR_LEN
                    ),
                    styles::text_secondary(),
                )));
                lines.push(Line::from(vec![
                    Span::styled("Ctrl+D", styles::keybinding()),
                    Span::styled(" fills in a demo CNR.", styles::text_muted()),
                ]));
            }
            None => {}
            Some(Err(error)) => {
                lines.push(Line::from(Span::styled(
                    format!("⚠ {}", error.message()),
                    styles::status_red(),
                )));
            }
            Some(Ok(CaseOutcome::Found { record, is_demo })) => {
                if *is_demo {
                    lines.push(Line::from(Span::styled(
                        ECOURTS_DEMO_NOTICE,
                        styles::status_blue(),
                    )));
                }
                lines.extend(record_lines(record));
            }
            Some(Ok(CaseOutcome::NotFound { message })) => {
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    styles::text_primary(),
                )));
                lines.push(Line::from(vec![
                    Span::styled("Check on eCourts → ", styles::text_secondary()),
                    Span::styled(ECOURTS_URL, styles::link()),
                ]));
            }
            Some(Ok(CaseOutcome::Error { message })) => {
                lines.push(Line::from(Span::styled(
                    format!("⚠ {}", message),
                    styles::status_red(),
                )));
            }
        }

        lines
    }

    fn render_services(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            "Other eCourts services",
            styles::text_secondary().add_modifier(Modifier::BOLD),
        ))];
        for (title, detail, url) in ECOURTS_SERVICES {
            lines.push(Line::from(vec![
                Span::styled(title, styles::text_primary()),
                Span::styled(format!(" - {}  ", detail), styles::text_muted()),
                Span::styled(url, styles::link()),
            ]));
        }
        Paragraph::new(lines).render(area, buf);
    }
}

fn record_lines(record: &CaseRecord) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = record
        .detail_rows()
        .into_iter()
        .map(|(label, value)| {
            let value = if value.is_empty() { MISSING } else { value };
            Line::from(vec![
                Span::styled(format!("{:<w$}", label, w = LABEL_WIDTH), styles::text_muted()),
                Span::styled(value.to_string(), styles::text_primary()),
            ])
        })
        .collect();

    if !record.acts.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<w$}", "Acts", w = LABEL_WIDTH), styles::text_muted()),
            Span::styled(record.acts.join(", "), styles::text_primary()),
        ]));
    }
    lines
}

impl Widget for CaseStatusPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let services_height = if self.shows_record() { 0 } else { 4 };
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(services_height),
        ])
        .split(area);

        Line::from(Span::styled(" 🏛️ eCourts Services", styles::heading())).render(chunks[0], buf);
        self.render_input(chunks[1], buf);

        let result_area = Rect {
            x: chunks[2].x + 1,
            width: chunks[2].width.saturating_sub(2),
            ..chunks[2]
        };
        Paragraph::new(self.result_lines())
            .wrap(Wrap { trim: false })
            .render(result_area, buf);

        if services_height > 0 {
            let services_area = Rect {
                x: chunks[3].x + 1,
                width: chunks[3].width.saturating_sub(2),
                ..chunks[3]
            };
            self.render_services(services_area, buf);
        }
    }
}
