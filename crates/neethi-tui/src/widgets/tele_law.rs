//! Tele-Law page: how it works, and the panel lawyer directory

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use neethi_app::tele_law::LawyerDirectoryState;
use neethi_app::FetchState;
use neethi_core::content::{TELE_LAW_DEMO_NOTICE, TELE_LAW_STEPS};
use neethi_core::Lawyer;

use crate::theme::styles;

/// Rows each lawyer entry takes
const ENTRY_HEIGHT: usize = 2;

pub struct TeleLawPage<'a> {
    directory: &'a LawyerDirectoryState,
}

impl<'a> TeleLawPage<'a> {
    pub fn new(directory: &'a LawyerDirectoryState) -> Self {
        Self { directory }
    }

    fn steps_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (title, _)) in TELE_LAW_STEPS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" → ", styles::text_muted()));
            }
            spans.push(Span::styled(format!("{} ", i + 1), styles::heading()));
            spans.push(Span::styled(*title, styles::text_primary()));
        }
        Line::from(spans)
    }

    fn entry_lines(&self, lawyer: &Lawyer, selected: bool) -> [Line<'static>; ENTRY_HEIGHT] {
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            styles::focused_selected()
        } else {
            styles::text_primary().add_modifier(Modifier::BOLD)
        };
        let availability_style = if lawyer.available {
            styles::status_green()
        } else {
            styles::status_yellow()
        };
        let action = if self.directory.is_connecting(&lawyer.id) {
            Span::styled("[Connecting…]", styles::disabled())
        } else {
            Span::styled(format!("[{}]", lawyer.action_label()), styles::keybinding())
        };

        [
            Line::from(vec![
                Span::styled(marker, styles::heading()),
                Span::styled(lawyer.name.clone(), name_style),
                Span::styled(
                    format!(
                        "  ★ {:.1} · {} yrs · {}",
                        lawyer.rating, lawyer.experience_years, lawyer.specialization
                    ),
                    styles::text_secondary(),
                ),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(lawyer.languages.join(", "), styles::text_muted()),
                Span::raw("  "),
                Span::styled(lawyer.availability_label(), availability_style),
                Span::raw("  "),
                action,
            ]),
        ]
    }

    fn render_directory(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(
            " Panel Lawyers ",
            styles::text_secondary(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = match &self.directory.listing {
            FetchState::Idle | FetchState::Loading => vec![Line::from(Span::styled(
                "⏳ Loading lawyers…",
                styles::status_yellow(),
            ))],
            FetchState::Failed(error) => vec![Line::from(Span::styled(
                format!("⚠ {}", error.message()),
                styles::status_red(),
            ))],
            FetchState::Loaded(listing) => {
                let mut lines = vec![Line::from(Span::styled(
                    listing.summary(),
                    styles::text_secondary(),
                ))];
                let lawyers = &listing.lawyers;
                let rows = usize::from(inner.height).saturating_sub(1) / ENTRY_HEIGHT;
                // Keep the selection in view
                let first = (self.directory.selected + 1).saturating_sub(rows.max(1));
                for (i, lawyer) in lawyers.iter().enumerate().skip(first).take(rows) {
                    lines.extend(self.entry_lines(lawyer, i == self.directory.selected));
                }
                if lawyers.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "No lawyers listed right now.",
                        styles::text_muted(),
                    )));
                }
                lines
            }
        };
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for TeleLawPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(4),
        ])
        .split(area);

        Line::from(Span::styled(
            " 📱 Tele-Law: Connecting Citizens to Lawyers",
            styles::heading(),
        ))
        .render(chunks[0], buf);
        self.steps_line().render(
            Rect {
                x: chunks[1].x + 1,
                width: chunks[1].width.saturating_sub(1),
                ..chunks[1]
            },
            buf,
        );
        Paragraph::new(Span::styled(TELE_LAW_DEMO_NOTICE, styles::status_blue()))
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    x: chunks[2].x + 1,
                    width: chunks[2].width.saturating_sub(2),
                    ..chunks[2]
                },
                buf,
            );
        self.render_directory(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neethi_core::{LawyerId, LawyerListing};

    use crate::test_utils::TestTerminal;

    fn lawyer(id: &str, name: &str, available: bool) -> Lawyer {
        Lawyer {
            id: LawyerId::from(id),
            name: name.into(),
            specialization: "Family Law".into(),
            rating: 4.8,
            experience_years: 12,
            languages: vec!["Hindi".into(), "English".into()],
            available,
            next_available: (!available).then(|| "2:30 PM".to_string()),
            profile_image: String::new(),
        }
    }

    fn loaded() -> LawyerDirectoryState {
        let mut directory = LawyerDirectoryState::new();
        directory.begin_load();
        directory.complete_load::<()>(Ok(LawyerListing {
            total: 2,
            available_now: 1,
            lawyers: vec![
                lawyer("LAW001", "Adv. Priya Sharma", true),
                lawyer("LAW003", "Adv. Sunita Devi", false),
            ],
        }));
        directory
    }

    fn render(directory: &LawyerDirectoryState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 19);
        term.render_widget(TeleLawPage::new(directory), term.area());
        term
    }

    #[test]
    fn test_directory_lists_lawyers_with_actions() {
        let term = render(&loaded());
        assert!(term.buffer_contains("1 of 2 lawyers available now"));
        assert!(term.buffer_contains("▶ Adv. Priya Sharma"));
        assert!(term.buffer_contains("● Available  [Connect Now]"));
        assert!(term.buffer_contains("Next: 2:30 PM  [Join Queue]"));
        assert!(term.buffer_contains("Visit CSC"));
        assert!(term.buffer_contains("This is a demonstration"));
    }

    #[test]
    fn test_connecting_lawyer_shows_progress() {
        let mut directory = loaded();
        directory.begin_connect();
        let term = render(&directory);
        assert!(term.buffer_contains("[Connecting…]"));
        assert!(term.buffer_contains("[Join Queue]"));
    }

    #[test]
    fn test_loading_and_failure_states() {
        let mut directory = LawyerDirectoryState::new();
        directory.begin_load();
        assert!(render(&directory).buffer_contains("Loading lawyers"));

        directory.complete_load::<()>(Err(()));
        assert!(render(&directory).buffer_contains("Unable to load lawyer list"));
    }
}
