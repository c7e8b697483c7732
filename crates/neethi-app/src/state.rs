//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use neethi_core::content::{ANNOUNCEMENTS, ANNOUNCEMENT_ROTATE_SECS, SERVICE_CARDS, WELCOME_MESSAGE};
use neethi_core::BackendStatus;

use crate::case_lookup::CaseLookupState;
use crate::config::Settings;
use crate::conversation::ConversationStore;
use crate::eligibility::EligibilityFormState;
use crate::njdg::StatsState;
use crate::tele_law::LawyerDirectoryState;

/// Top-level pages, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    ECourts,
    TeleLaw,
    LegalAid,
    Njdg,
    Neethi,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::ECourts,
        Page::TeleLaw,
        Page::LegalAid,
        Page::Njdg,
        Page::Neethi,
    ];

    /// Tab label in the header
    pub fn tab_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ECourts => "eCourts",
            Page::TeleLaw => "Tele-Law",
            Page::LegalAid => "Legal Aid",
            Page::Njdg => "NJDG",
            Page::Neethi => "Neethi AI",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Access to Justice for All",
            Page::ECourts => "🏛️ eCourts Services",
            Page::TeleLaw => "📱 Tele-Law: Connecting Citizens to Lawyers",
            Page::LegalAid => "⚖️ NALSA Free Legal Aid",
            Page::Njdg => "📊 National Judicial Data Grid",
            Page::Neethi => "🤖 Neethi AI Assistant",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// F1..F6 map onto the tabs in order
    pub fn from_function_key(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Page a home service card leads to, in card order
    pub fn for_service_card(index: usize) -> Option<Self> {
        [Page::ECourts, Page::TeleLaw, Page::LegalAid, Page::Njdg]
            .get(index)
            .copied()
    }

    /// Whether the page is the full-screen assistant
    pub fn is_assistant(&self) -> bool {
        matches!(self, Page::Neethi)
    }
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which layer currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// The active page
    #[default]
    Normal,
    /// The floating chat widget is open and has focus
    ChatWidget,
    /// A notice overlay is showing
    Notice,
    /// Quit confirmation dialog
    ConfirmQuit,
}

/// Dismissible message overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub page: Page,
    pub settings: Settings,
    /// Backend origin in use, for display
    pub api_base: String,

    /// Shared by the assistant page and the floating widget
    pub conversation: ConversationStore,
    pub case_lookup: CaseLookupState,
    pub eligibility: EligibilityFormState,
    pub lawyers: LawyerDirectoryState,
    pub stats: StatsState,
    pub backend: BackendStatus,

    pub notice: Option<Notice>,
    /// Count of notices raised so far
    pub notices_shown: u64,
    /// Highlighted quick action on the assistant page
    pub quick_action: Option<usize>,
    /// Highlighted service card on the home page
    pub home_selected: usize,
    pub announcement_index: usize,
    pub announcement_shown_at: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let welcome = settings
            .ui
            .welcome_message
            .clone()
            .unwrap_or_else(|| WELCOME_MESSAGE.to_string());
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            page: Page::Home,
            api_base: settings.api.base_url.clone(),
            settings,
            conversation: ConversationStore::new(welcome),
            case_lookup: CaseLookupState::new(),
            eligibility: EligibilityFormState::new(),
            lawyers: LawyerDirectoryState::new(),
            stats: StatsState::new(),
            backend: BackendStatus::Unknown,
            notice: None,
            notices_shown: 0,
            quick_action: None,
            home_selected: 0,
            announcement_index: 0,
            announcement_shown_at: Instant::now(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Whether the footer is mounted on the current page
    pub fn show_footer(&self) -> bool {
        self.settings.ui.show_footer && !self.page.is_assistant()
    }

    /// Whether the floating widget can be used on the current page
    pub fn chat_widget_available(&self) -> bool {
        self.settings.ui.chat_widget && !self.page.is_assistant()
    }

    pub fn is_widget_open(&self) -> bool {
        self.ui_mode == UiMode::ChatWidget
    }

    pub fn select_next_service(&mut self) {
        self.home_selected = (self.home_selected + 1).min(SERVICE_CARDS.len() - 1);
    }

    pub fn select_prev_service(&mut self) {
        self.home_selected = self.home_selected.saturating_sub(1);
    }

    /// Advance the home ticker if its slot has elapsed
    pub fn rotate_announcement(&mut self, now: Instant) {
        if now.duration_since(self.announcement_shown_at)
            >= Duration::from_secs(ANNOUNCEMENT_ROTATE_SECS)
        {
            self.announcement_index = (self.announcement_index + 1) % ANNOUNCEMENTS.len();
            self.announcement_shown_at = now;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────

    /// Show a notice; an open quit prompt stays on top until answered
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notices_shown += 1;
        if self.ui_mode != UiMode::ConfirmQuit {
            self.ui_mode = UiMode::Notice;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Normal;
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    /// Any request whose result has not settled yet
    pub fn has_pending_requests(&self) -> bool {
        self.conversation.is_awaiting_response()
            || self.case_lookup.loading
            || self.eligibility.loading
            || self.lawyers.listing.is_loading()
            || self.lawyers.has_pending_connects()
            || self.stats.stats.is_loading()
    }

    /// Request to quit; asks first if configured and work is in flight
    pub fn request_quit(&mut self) {
        if self.has_pending_requests() && self.settings.behavior.confirm_quit {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = if self.notice.is_some() {
            UiMode::Notice
        } else {
            UiMode::Normal
        };
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
