//! Conversation store - the chat transcript shared by the assistant page
//! and the floating widget.

use neethi_core::content::CHAT_APOLOGY;
use neethi_core::{ChatReply, ChatTurn};

// ─────────────────────────────────────────────────────────────────────────────
// ChatViewState
// ─────────────────────────────────────────────────────────────────────────────

/// Scroll position of a rendered transcript
///
/// The renderer reports content and viewport height through
/// [`ChatViewState::update_content_size`]; while `auto_scroll` is on the
/// view stays pinned to the newest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatViewState {
    /// Current scroll offset from the top, in lines
    pub offset: usize,
    /// Follow new content
    pub auto_scroll: bool,
    /// Total wrapped lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl Default for ChatViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatViewState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
            total_lines: 0,
            visible_lines: 0,
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines; stops following new content
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    /// Scroll down by n lines; reaching the bottom resumes following
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + n).min(max_offset);

        if self.offset >= max_offset {
            self.auto_scroll = true;
        }
    }

    /// Scroll to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_scroll = true;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Resume following; the next render pins the view to the bottom
    pub fn follow(&mut self) {
        self.auto_scroll = true;
    }

    /// Update with new content size
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;

        if self.auto_scroll {
            self.offset = total.saturating_sub(visible);
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConversationStore
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered chat turns plus the in-flight flag and draft input
///
/// Each accepted send appends exactly one user turn; each settled call
/// appends exactly one bot turn. Turns are never edited or removed.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    turns: Vec<ChatTurn>,
    awaiting_response: bool,
    /// Draft message being typed
    pub input: String,
    pub view: ChatViewState,
}

impl ConversationStore {
    /// Start a conversation seeded with one bot welcome turn
    pub fn new(welcome: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatTurn::bot(welcome)],
            awaiting_response: false,
            input: String::new(),
            view: ChatViewState::new(),
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    /// Accept `text` for sending
    ///
    /// Returns the message to post, or `None` when `text` is blank or a
    /// reply is still pending. The user turn keeps `text` exactly as typed.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.awaiting_response {
            return None;
        }
        self.turns.push(ChatTurn::user(text));
        self.input.clear();
        self.awaiting_response = true;
        self.view.follow();
        Some(text.to_string())
    }

    /// Send whatever is in the draft input
    pub fn submit_input(&mut self) -> Option<String> {
        let text = self.input.clone();
        self.begin_send(&text)
    }

    /// Record the outcome of the pending `/chat` call
    pub fn complete<E>(&mut self, result: Result<ChatReply, E>) {
        let turn = match result {
            Ok(reply) => ChatTurn::from_reply(reply),
            Err(_) => ChatTurn::bot(CHAT_APOLOGY),
        };
        self.turns.push(turn);
        self.awaiting_response = false;
        self.view.follow();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }
}
