//! Focused-field editing and list selection
//!
//! Character and selection messages are routed by UI mode and page, so a
//! single `InputChar` reaches whichever field currently owns the cursor.

use neethi_core::content::QUICK_ACTIONS;

use crate::eligibility::EligibilityField;
use crate::message::Message;
use crate::state::{AppState, Page, UiMode};

use super::UpdateResult;

pub fn handle_char(state: &mut AppState, c: char) -> UpdateResult {
    if state.ui_mode == UiMode::ChatWidget {
        state.conversation.push_char(c);
        return UpdateResult::none();
    }

    match state.page {
        Page::ECourts => state.case_lookup.push_char(c),
        Page::LegalAid if state.eligibility.focus == EligibilityField::AnnualIncome => {
            state.eligibility.push_income_char(c)
        }
        Page::Neethi => {
            state.quick_action = None;
            state.conversation.push_char(c);
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::ChatWidget {
        state.conversation.backspace();
        return UpdateResult::none();
    }

    match state.page {
        Page::ECourts => state.case_lookup.backspace(),
        Page::LegalAid => state.eligibility.backspace_income(),
        Page::Neethi => state.conversation.backspace(),
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_select(state: &mut AppState, forward: bool) -> UpdateResult {
    match (state.page, forward) {
        (Page::Home, true) => state.select_next_service(),
        (Page::Home, false) => state.select_prev_service(),
        (Page::TeleLaw, true) => state.lawyers.select_next(),
        (Page::TeleLaw, false) => state.lawyers.select_prev(),
        (Page::LegalAid, true) => state.eligibility.focus_next(),
        (Page::LegalAid, false) => state.eligibility.focus_prev(),
        (Page::Neethi, _) => state.quick_action = step_quick_action(state.quick_action, forward),
        _ => {}
    }
    UpdateResult::none()
}

/// Move the quick-action highlight, starting from the first or last chip
fn step_quick_action(current: Option<usize>, forward: bool) -> Option<usize> {
    let last = QUICK_ACTIONS.len() - 1;
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => last,
        (Some(i), true) => (i + 1).min(last),
        (Some(i), false) => i.saturating_sub(1),
    })
}

/// Open the page behind the highlighted home card
pub fn handle_submit_selection(state: &mut AppState) -> UpdateResult {
    match Page::for_service_card(state.home_selected) {
        Some(page) if state.page == Page::Home => {
            UpdateResult::message(Message::NavigateTo(page))
        }
        _ => UpdateResult::none(),
    }
}
