//! Request start and completion handlers
//!
//! Each `handle_*` start function updates the loading flags synchronously
//! and returns the action that performs the call; completions arrive as
//! settled messages and are applied by the feature state types.

use neethi_core::content::QUICK_ACTIONS;
use neethi_core::{BackendStatus, ConnectReply, HealthStatus, LawyerId};

use crate::message::{Message, RequestResult};
use crate::state::{AppState, Notice};

use super::{UpdateAction, UpdateResult};

pub fn handle_send_chat(state: &mut AppState, text: &str) -> UpdateResult {
    state.quick_action = None;
    let action = state
        .conversation
        .begin_send(text)
        .map(|message| UpdateAction::SendChat { message });
    UpdateResult::maybe_action(action)
}

/// Send the draft, or the highlighted quick action when the draft is empty
pub fn handle_submit_chat_input(state: &mut AppState) -> UpdateResult {
    if state.conversation.input.is_empty() && state.page.is_assistant() {
        if let Some(prompt) = state.quick_action.and_then(|i| QUICK_ACTIONS.get(i)) {
            return UpdateResult::message(Message::SendChat(prompt.to_string()));
        }
    }
    let action = state
        .conversation
        .submit_input()
        .map(|message| UpdateAction::SendChat { message });
    UpdateResult::maybe_action(action)
}

pub fn handle_search_case(state: &mut AppState) -> UpdateResult {
    let action = state
        .case_lookup
        .search()
        .map(|query| UpdateAction::FetchCaseStatus {
            request_id: query.request_id,
            cnr: query.cnr,
        });
    UpdateResult::maybe_action(action)
}

pub fn handle_submit_eligibility(state: &mut AppState) -> UpdateResult {
    let action = state
        .eligibility
        .submit()
        .map(|form| UpdateAction::CheckEligibility { form });
    UpdateResult::maybe_action(action)
}

pub fn handle_load_lawyers(state: &mut AppState) -> UpdateResult {
    let action = state
        .lawyers
        .begin_load()
        .then_some(UpdateAction::FetchLawyers);
    UpdateResult::maybe_action(action)
}

pub fn handle_connect_selected(state: &mut AppState) -> UpdateResult {
    let action = state
        .lawyers
        .begin_connect()
        .map(|id| UpdateAction::ConnectLawyer { id });
    UpdateResult::maybe_action(action)
}

pub fn handle_connect_lawyer(state: &mut AppState, id: LawyerId) -> UpdateResult {
    let action = state
        .lawyers
        .begin_connect_to(id)
        .map(|id| UpdateAction::ConnectLawyer { id });
    UpdateResult::maybe_action(action)
}

pub fn handle_connect_settled(
    state: &mut AppState,
    id: &LawyerId,
    result: RequestResult<ConnectReply>,
) -> UpdateResult {
    let message = state.lawyers.complete_connect(id, result);
    state.show_notice(Notice::new("Tele-Law", message));
    UpdateResult::none()
}

pub fn handle_load_stats(state: &mut AppState) -> UpdateResult {
    let action = state.stats.begin_load().then_some(UpdateAction::FetchStats);
    UpdateResult::maybe_action(action)
}

pub fn handle_health_checked(
    state: &mut AppState,
    result: RequestResult<HealthStatus>,
) -> UpdateResult {
    state.backend = match result {
        Ok(health) => BackendStatus::from_health(&health),
        Err(_) => BackendStatus::Offline,
    };
    UpdateResult::none()
}
