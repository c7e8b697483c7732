//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `input`: Focused-field editing and selection
//! - `navigation`: Page and overlay switching
//! - `requests`: Starting and settling backend requests

use std::time::Instant;

use crate::message::Message;
use crate::state::AppState;

use super::{input, keys::handle_key, navigation, requests, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.rotate_announcement(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Field editing
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => input::handle_char(state, c),
        Message::InputBackspace => input::handle_backspace(state),
        Message::SelectNext => input::handle_select(state, true),
        Message::SelectPrev => input::handle_select(state, false),
        Message::SubmitSelection => input::handle_submit_selection(state),
        Message::CycleOption { forward } => {
            if forward {
                state.eligibility.cycle_forward();
            } else {
                state.eligibility.cycle_backward();
            }
            UpdateResult::none()
        }
        Message::ToggleFocused => {
            state.eligibility.toggle_focused();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NavigateTo(page) => navigation::handle_navigate(state, page),
        Message::NextPage => navigation::handle_navigate(state, state.page.next()),
        Message::PrevPage => navigation::handle_navigate(state, state.page.prev()),
        Message::ToggleChatWidget => navigation::handle_toggle_widget(state),
        Message::DismissNotice => {
            state.dismiss_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Assistant
        // ─────────────────────────────────────────────────────────
        Message::SendChat(text) => requests::handle_send_chat(state, &text),
        Message::SubmitChatInput => requests::handle_submit_chat_input(state),
        Message::ChatReplied(result) => {
            state.conversation.complete(result);
            UpdateResult::none()
        }
        Message::ChatScrollUp => {
            state.conversation.view.scroll_up(1);
            UpdateResult::none()
        }
        Message::ChatScrollDown => {
            state.conversation.view.scroll_down(1);
            UpdateResult::none()
        }
        Message::ChatPageUp => {
            state.conversation.view.page_up();
            UpdateResult::none()
        }
        Message::ChatPageDown => {
            state.conversation.view.page_down();
            UpdateResult::none()
        }
        Message::ChatScrollToBottom => {
            state.conversation.view.scroll_to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // eCourts
        // ─────────────────────────────────────────────────────────
        Message::SetCnr(cnr) => {
            state.case_lookup.set_input(&cnr);
            UpdateResult::none()
        }
        Message::InsertDemoCnr => {
            state.case_lookup.insert_demo_cnr();
            UpdateResult::none()
        }
        Message::SearchCase => requests::handle_search_case(state),
        Message::CaseStatusSettled {
            request_id,
            cnr,
            result,
        } => {
            state.case_lookup.complete(request_id, &cnr, result);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Legal Aid
        // ─────────────────────────────────────────────────────────
        Message::SetEligibilityForm(form) => {
            state.eligibility.load_form(&form);
            UpdateResult::none()
        }
        Message::SubmitEligibility => requests::handle_submit_eligibility(state),
        Message::EligibilitySettled(result) => {
            state.eligibility.complete(result);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tele-Law
        // ─────────────────────────────────────────────────────────
        Message::LoadLawyers => requests::handle_load_lawyers(state),
        Message::LawyersLoaded(result) => {
            state.lawyers.complete_load(result);
            UpdateResult::none()
        }
        Message::ConnectSelected => requests::handle_connect_selected(state),
        Message::ConnectLawyer(id) => requests::handle_connect_lawyer(state, id),
        Message::ConnectSettled { id, result } => {
            requests::handle_connect_settled(state, &id, result)
        }

        // ─────────────────────────────────────────────────────────
        // Statistics and backend status
        // ─────────────────────────────────────────────────────────
        Message::LoadStats => requests::handle_load_stats(state),
        Message::StatsLoaded(result) => {
            state.stats.complete_load(result);
            UpdateResult::none()
        }
        Message::CheckHealth => UpdateResult::action(super::UpdateAction::CheckHealth),
        Message::HealthChecked(result) => requests::handle_health_checked(state, result),
    }
}
