//! Legal Aid page: eligibility form and verdict

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use neethi_app::eligibility::{EligibilityField, EligibilityFormState};
use neethi_core::content::LEGAL_AID_CATEGORIES;
use neethi_core::EligibilityVerdict;

use crate::theme::styles;

const LABEL_WIDTH: usize = 20;

pub struct EligibilityPage<'a> {
    form: &'a EligibilityFormState,
}

impl<'a> EligibilityPage<'a> {
    pub fn new(form: &'a EligibilityFormState) -> Self {
        Self { form }
    }

    fn field_line(&self, field: EligibilityField) -> Line<'static> {
        let focused = self.form.focus == field;
        let marker = Span::styled(if focused { "▶ " } else { "  " }, styles::heading());
        let value_style = if focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        match field {
            EligibilityField::Submit => {
                let button = if self.form.loading {
                    Span::styled(" Checking… ", styles::disabled())
                } else {
                    Span::styled(format!(" {} ", field.label()), value_style)
                };
                Line::from(vec![marker, button])
            }
            EligibilityField::AnnualIncome => {
                let value = if self.form.income_input.is_empty() {
                    "0".to_string()
                } else {
                    self.form.income_input.clone()
                };
                Line::from(vec![
                    marker,
                    label(field),
                    Span::styled(format!(" ₹ {} ", value), value_style),
                ])
            }
            EligibilityField::CaseType => Line::from(vec![
                marker,
                label(field),
                Span::styled(format!("◀ {} ▶", self.form.case_type.label()), value_style),
            ]),
            EligibilityField::State => Line::from(vec![
                marker,
                label(field),
                Span::styled(format!("◀ {} ▶", self.form.state.label()), value_style),
            ]),
            _ => {
                let checked = self.form.flag(field).unwrap_or(false);
                let box_text = if checked { "[x]" } else { "[ ]" };
                Line::from(vec![
                    marker,
                    Span::styled(format!("{} {}", box_text, field.label()), value_style),
                ])
            }
        }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(
            " Check Your Eligibility ",
            styles::text_secondary(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = EligibilityField::ALL
            .iter()
            .map(|field| self.field_line(*field))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_side(&self, area: Rect, buf: &mut Buffer) {
        let (title, lines) = match &self.form.result {
            Some(Ok(verdict)) => (" Result ", verdict_lines(verdict)),
            Some(Err(error)) => (
                " Result ",
                vec![Line::from(Span::styled(
                    format!("⚠ {}", error.message()),
                    styles::status_red(),
                ))],
            ),
            None => (
                " Who can get free legal aid ",
                LEGAL_AID_CATEGORIES
                    .iter()
                    .map(|c| Line::from(Span::styled(*c, styles::text_secondary())))
                    .collect(),
            ),
        };

        let block = styles::glass_block(false).title(Span::styled(title, styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn label(field: EligibilityField) -> Span<'static> {
    Span::styled(
        format!("{:<w$}", field.label(), w = LABEL_WIDTH),
        styles::text_muted(),
    )
}

fn verdict_lines(verdict: &EligibilityVerdict) -> Vec<Line<'static>> {
    let headline_style = if verdict.eligible {
        styles::status_green()
    } else {
        styles::status_red()
    };
    let mut lines = vec![Line::from(Span::styled(
        verdict.headline(),
        headline_style.add_modifier(Modifier::BOLD),
    ))];

    for reason in &verdict.reasons {
        lines.push(Line::from(Span::styled(
            format!("• {}", reason),
            styles::text_primary(),
        )));
    }

    if let Some(steps) = verdict.next_steps.as_ref().filter(|s| !s.is_empty()) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Next Steps:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (i, step) in steps.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("{}. {}", i + 1, step),
                styles::text_secondary(),
            )));
        }
    }

    if let Some(reference) = &verdict.reference {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("📚 {}", reference),
            styles::text_muted(),
        )));
    }
    lines
}

impl Widget for EligibilityPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).split(area);
        Line::from(Span::styled(" ⚖️ NALSA Free Legal Aid", styles::heading())).render(rows[0], buf);

        let columns =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(rows[1]);
        self.render_form(columns[0], buf);
        self.render_side(columns[1], buf);
    }
}
