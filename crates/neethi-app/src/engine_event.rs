//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! [`Engine::subscribe`](crate::engine::Engine::subscribe). The headless
//! runner turns them into NDJSON lines.

use neethi_core::{
    BackendStatus, CaseOutcome, ChatTurn, EligibilityVerdict, LawyerListing, NjdgResponse,
};

use crate::fetch_state::SlotResult;
use crate::state::{Notice, Page};

/// Domain events emitted by the Engine
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The active page changed
    PageChanged { page: Page },

    /// A turn was appended to the conversation
    ChatTurnAdded { turn: ChatTurn },

    /// A case lookup was rejected or settled
    CaseStatusSettled {
        cnr: String,
        result: SlotResult<CaseOutcome>,
    },

    /// An eligibility check settled
    EligibilitySettled { result: SlotResult<EligibilityVerdict> },

    /// The lawyer directory settled
    LawyersSettled { result: SlotResult<LawyerListing> },

    /// Judicial statistics settled
    StatsSettled { result: SlotResult<NjdgResponse> },

    /// A notice was raised (connect outcomes)
    NoticeShown { notice: Notice },

    /// The backend health indicator changed
    BackendStatusChanged { status: BackendStatus },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::PageChanged { .. } => "page_changed",
            EngineEvent::ChatTurnAdded { .. } => "chat_turn_added",
            EngineEvent::CaseStatusSettled { .. } => "case_status_settled",
            EngineEvent::EligibilitySettled { .. } => "eligibility_settled",
            EngineEvent::LawyersSettled { .. } => "lawyers_settled",
            EngineEvent::StatsSettled { .. } => "stats_settled",
            EngineEvent::NoticeShown { .. } => "notice_shown",
            EngineEvent::BackendStatusChanged { .. } => "backend_status_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
