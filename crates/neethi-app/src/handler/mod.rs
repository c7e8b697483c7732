//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event translation per page and UI mode
//! - `navigation`: Page switching, widget toggle, first-mount fetches
//! - `input`: Focused-field editing
//! - `requests`: Request start and completion handlers

pub(crate) mod input;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod requests;
pub(crate) mod update;


use neethi_core::{EligibilityForm, LawyerId};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Background requests the event loop should start after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// `POST /chat`
    SendChat { message: String },

    /// `GET /case-status/{cnr}`; `request_id` comes back with the result
    FetchCaseStatus { request_id: u64, cnr: String },

    /// `GET /tele-law/lawyers`
    FetchLawyers,

    /// `POST /tele-law/connect/{id}`
    ConnectLawyer { id: LawyerId },

    /// `POST /legal-aid/check`
    CheckEligibility { form: EligibilityForm },

    /// `GET /njdg/stats`
    FetchStats,

    /// `GET /health`
    CheckHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Action if one is needed, otherwise nothing
    pub fn maybe_action(action: Option<UpdateAction>) -> Self {
        Self {
            message: None,
            action,
        }
    }
}
