//! Chat transcript, shared by the assistant page and the floating widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, StatefulWidget, Widget},
};

use neethi_app::conversation::{ChatViewState, ConversationStore};
use neethi_core::content::QUICK_ACTIONS;
use neethi_core::{ChatTurn, Sender};

use super::wrap::{wrap, wrap_paragraphs};
use crate::theme::{palette, styles};

const INDENT: &str = "  ";

/// Chat view over a [`ConversationStore`]
///
/// The full variant adds the page title and the quick-action row; the
/// compact variant is the floating panel drawn over other pages.
pub struct ChatView<'a> {
    turns: &'a [ChatTurn],
    awaiting: bool,
    input: &'a str,
    quick_action: Option<usize>,
    compact: bool,
}

impl<'a> ChatView<'a> {
    pub fn new(conversation: &'a ConversationStore) -> Self {
        Self {
            turns: conversation.turns(),
            awaiting: conversation.is_awaiting_response(),
            input: &conversation.input,
            quick_action: None,
            compact: false,
        }
    }

    pub fn quick_action(mut self, selected: Option<usize>) -> Self {
        self.quick_action = selected;
        self
    }

    /// Render as the floating panel
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    fn render_quick_actions(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" Try: ", styles::text_muted())];
        for (i, prompt) in QUICK_ACTIONS.iter().enumerate() {
            let style = if self.quick_action == Some(i) {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!("[{}]", prompt), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
            .wrap(ratatui::widgets::Wrap { trim: true })
            .render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.awaiting {
            Line::from(Span::styled("Waiting for Neethi…", styles::disabled()))
        } else if self.input.is_empty() {
            Line::from(vec![
                Span::styled("› ", styles::heading()),
                Span::styled("Type your legal question…", styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled("› ", styles::heading()),
                Span::styled(self.input, styles::text_primary()),
                Span::styled("▏", styles::heading()),
            ])
        };
        line.render(inner, buf);
    }
}

/// Transcript as display lines wrapped to `width`
pub fn transcript_lines(turns: &[ChatTurn], awaiting: bool, width: usize) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(INDENT.len());
    let mut lines = Vec::new();

    for (i, turn) in turns.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let (name_style, body_style) = match turn.sender {
            Sender::User => (
                Style::default()
                    .fg(palette::USER_BUBBLE)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(palette::USER_BUBBLE),
            ),
            Sender::Bot => (
                Style::default()
                    .fg(palette::SAFFRON)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(palette::BOT_BUBBLE),
            ),
        };
        let mut header = vec![Span::styled(turn.sender.label(), name_style)];
        if turn.ai_generated {
            header.push(Span::styled(" ✨ AI", styles::text_muted()));
        }
        lines.push(Line::from(header));

        for text in wrap_paragraphs(turn.lines(), body_width) {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(text, body_style),
            ]));
        }

        if !turn.sources.is_empty() {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled("📎 Sources:", styles::text_secondary()),
            ]));
            for source in &turn.sources {
                for piece in wrap(source, body_width.saturating_sub(2)) {
                    lines.push(Line::from(vec![
                        Span::raw(INDENT),
                        Span::raw("  "),
                        Span::styled(piece, styles::link()),
                    ]));
                }
            }
        }
    }

    if awaiting {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Neethi is typing…",
            styles::text_muted().add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

fn render_transcript(
    turns: &[ChatTurn],
    awaiting: bool,
    area: Rect,
    buf: &mut Buffer,
    view: &mut ChatViewState,
) {
    let lines = transcript_lines(turns, awaiting, usize::from(area.width));
    view.update_content_size(lines.len(), usize::from(area.height));

    let offset = u16::try_from(view.offset).unwrap_or(u16::MAX);
    Paragraph::new(lines).scroll((offset, 0)).render(area, buf);
}

impl StatefulWidget for ChatView<'_> {
    type State = ChatViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.compact {
            Clear.render(area, buf);
            let block = styles::modal_block("🤖 Neethi AI");
            let inner = block.inner(area);
            block.render(area, buf);

            let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(inner);
            render_transcript(self.turns, self.awaiting, chunks[0], buf, state);
            self.render_input(chunks[1], buf);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(area);

        Line::from(Span::styled(" 🤖 Neethi AI Assistant", styles::heading())).render(chunks[0], buf);

        let block = styles::glass_block(false);
        let transcript_area = block.inner(chunks[1]);
        block.render(chunks[1], buf);
        render_transcript(self.turns, self.awaiting, transcript_area, buf, state);

        self.render_quick_actions(chunks[2], buf);
        self.render_input(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use neethi_core::ChatReply;

    fn conversation() -> ConversationStore {
        ConversationStore::new("Welcome! How may I assist you today?")
    }

    fn draw(term: &mut TestTerminal, view: ChatView<'_>, state: &mut ChatViewState) {
        let area = term.area();
        term.draw_with(|frame| frame.render_stateful_widget(view, area, state));
    }

    #[test]
    fn test_full_view_shows_welcome_and_quick_actions() {
        let conversation = conversation();
        let mut view_state = ChatViewState::new();
        let mut term = TestTerminal::with_size(120, 24);
        draw(
            &mut term,
            ChatView::new(&conversation).quick_action(Some(1)),
            &mut view_state,
        );

        assert!(term.buffer_contains("Neethi AI Assistant"));
        assert!(term.buffer_contains("How may I assist you today?"));
        assert!(term.buffer_contains("[What is Tele-Law?]"));
        assert!(term.buffer_contains("Type your legal question"));
    }

    #[test]
    fn test_typing_indicator_while_awaiting() {
        let mut conversation = conversation();
        conversation.begin_send("What is Tele-Law?");
        let mut view_state = ChatViewState::new();
        let mut term = TestTerminal::new();
        draw(&mut term, ChatView::new(&conversation), &mut view_state);

        assert!(term.buffer_contains("Neethi is typing"));
        assert!(term.buffer_contains("Waiting for Neethi"));
    }

    #[test]
    fn test_sources_listed_under_reply() {
        let mut conversation = conversation();
        conversation.begin_send("legal aid");
        conversation.complete::<()>(Ok(ChatReply {
            response: "Visit NALSA.".into(),
            sources: Some(vec!["https://nalsa.gov.in".into()]),
            intent: None,
            ai_generated: Some(true),
        }));
        let mut view_state = ChatViewState::new();
        let mut term = TestTerminal::new();
        draw(&mut term, ChatView::new(&conversation), &mut view_state);

        assert!(term.buffer_contains("📎 Sources:"));
        assert!(term.buffer_contains("https://nalsa.gov.in"));
        assert!(term.buffer_contains("✨ AI"));
    }

    #[test]
    fn test_draft_shown_in_input() {
        let mut conversation = conversation();
        for c in "bail".chars() {
            conversation.push_char(c);
        }
        let mut view_state = ChatViewState::new();
        let mut term = TestTerminal::new();
        draw(&mut term, ChatView::new(&conversation).compact(), &mut view_state);
        assert!(term.buffer_contains("› bail"));
    }

    #[test]
    fn test_long_transcript_follows_bottom() {
        let mut conversation = conversation();
        for i in 0..20 {
            conversation.begin_send(&format!("question {}", i));
            conversation.complete::<()>(Ok(ChatReply {
                response: format!("answer {}", i),
                sources: None,
                intent: None,
                ai_generated: None,
            }));
        }
        let mut view_state = ChatViewState::new();
        let mut term = TestTerminal::new();
        draw(&mut term, ChatView::new(&conversation), &mut view_state);

        assert!(view_state.total_lines > view_state.visible_lines);
        assert_eq!(
            view_state.offset,
            view_state.total_lines - view_state.visible_lines
        );
        assert!(term.buffer_contains("answer 19"));
        assert!(!term.buffer_contains("question 0"));
    }

    #[test]
    fn test_transcript_wraps_long_replies() {
        let turns = vec![ChatTurn::bot("one two three four five six")];
        let lines = transcript_lines(&turns, false, 12);
        // name line + wrapped body
        assert_eq!(lines.len(), 4);
    }
}
