//! Message types for the application (TEA pattern)

use neethi_core::{
    CaseOutcome, ChatReply, ConnectReply, EligibilityForm, EligibilityVerdict, HealthStatus,
    LawyerId, LawyerListing, NjdgResponse,
};

use crate::input_key::InputKey;
use crate::state::Page;

/// Outcome of a background request; the error is a log-only description
pub type RequestResult<T> = Result<T, String>;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick
    Tick,

    /// Request to quit (may prompt if requests are in flight)
    RequestQuit,
    /// Quit immediately
    Quit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Focused-field editing (routed by page and UI mode)
    // ─────────────────────────────────────────────────────────
    InputChar(char),
    InputBackspace,
    SelectNext,
    SelectPrev,
    /// Activate the highlighted item (home service card)
    SubmitSelection,
    /// Step the focused option list
    CycleOption { forward: bool },
    /// Flip the focused checkbox
    ToggleFocused,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    NavigateTo(Page),
    NextPage,
    PrevPage,
    ToggleChatWidget,
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Assistant
    // ─────────────────────────────────────────────────────────
    /// Send text as a chat message (quick actions, headless input)
    SendChat(String),
    /// Send the draft input
    SubmitChatInput,
    ChatReplied(RequestResult<ChatReply>),
    ChatScrollUp,
    ChatScrollDown,
    ChatPageUp,
    ChatPageDown,
    ChatScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // eCourts
    // ─────────────────────────────────────────────────────────
    /// Replace the CNR input
    SetCnr(String),
    InsertDemoCnr,
    SearchCase,
    CaseStatusSettled {
        request_id: u64,
        cnr: String,
        result: RequestResult<CaseOutcome>,
    },

    // ─────────────────────────────────────────────────────────
    // Legal Aid
    // ─────────────────────────────────────────────────────────
    /// Overwrite every field of the eligibility form
    SetEligibilityForm(EligibilityForm),
    SubmitEligibility,
    EligibilitySettled(RequestResult<EligibilityVerdict>),

    // ─────────────────────────────────────────────────────────
    // Tele-Law
    // ─────────────────────────────────────────────────────────
    LoadLawyers,
    LawyersLoaded(RequestResult<LawyerListing>),
    ConnectSelected,
    ConnectLawyer(LawyerId),
    ConnectSettled {
        id: LawyerId,
        result: RequestResult<ConnectReply>,
    },

    // ─────────────────────────────────────────────────────────
    // Statistics and backend status
    // ─────────────────────────────────────────────────────────
    LoadStats,
    StatsLoaded(RequestResult<NjdgResponse>),
    CheckHealth,
    HealthChecked(RequestResult<HealthStatus>),
}
