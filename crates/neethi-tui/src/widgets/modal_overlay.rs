//! Notice and quit-confirmation dialogs drawn over the page

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use neethi_app::Notice;

use super::wrap::wrap;
use crate::layout::centered_rect;
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 52;

/// Dim every cell in `area` so the dialog stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

fn render_dialog(area: Rect, buf: &mut Buffer, title: &str, body: &str, hint: Line<'_>) {
    dim_background(buf, area);

    let inner_width = usize::from(DIALOG_WIDTH.saturating_sub(4));
    let body_lines = wrap(body, inner_width);
    // borders + blank + body + blank + hint
    let height = body_lines.len() as u16 + 5;
    let dialog = centered_rect(DIALOG_WIDTH, height, area);

    Clear.render(dialog, buf);
    let block = styles::modal_block(title);
    let inner = block.inner(dialog);
    block.render(dialog, buf);

    let mut lines = vec![Line::default()];
    lines.extend(
        body_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, styles::text_primary()))),
    );
    lines.push(Line::default());
    lines.push(hint);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

/// Dismissible message, e.g. a Tele-Law connect result
pub struct NoticeDialog<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" OK", styles::text_muted()),
        ]);
        render_dialog(area, buf, &self.notice.title, &self.notice.message, hint);
    }
}

/// Shown when quitting with requests still in flight
pub struct ConfirmQuitDialog;

impl Widget for ConfirmQuitDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = Line::from(vec![
            Span::styled("y", styles::keybinding()),
            Span::styled(" Quit   ", styles::text_muted()),
            Span::styled("n", styles::keybinding()),
            Span::styled(" Stay", styles::text_muted()),
        ]);
        render_dialog(
            area,
            buf,
            "Quit Neethi?",
            "Some requests are still in progress. Quit anyway?",
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_notice_dialog_shows_title_and_message() {
        let notice = Notice::new("Tele-Law", "Connecting you with Adv. Rajesh Kumar...");
        let mut term = TestTerminal::new();
        term.render_widget(NoticeDialog::new(&notice), term.area());

        assert!(term.buffer_contains(" Tele-Law "));
        assert!(term.buffer_contains("Connecting you with Adv. Rajesh Kumar..."));
        assert!(term.buffer_contains("Enter OK"));
    }

    #[test]
    fn test_confirm_quit_dialog() {
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmQuitDialog, term.area());
        assert!(term.buffer_contains("Quit Neethi?"));
        assert!(term.buffer_contains("y Quit   n Stay"));
    }

    #[test]
    fn test_long_notice_wraps_inside_dialog() {
        let notice = Notice::new("Tele-Law", "word ".repeat(40));
        let mut term = TestTerminal::new();
        term.render_widget(NoticeDialog::new(&notice), term.area());
        // The dialog stays within the 52-column box
        let content = term.content();
        assert!(content
            .lines()
            .all(|l| l.matches("word").count() <= 10));
    }
}
