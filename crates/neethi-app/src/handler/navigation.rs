//! Page switching and overlay toggles

use crate::state::{AppState, Page, UiMode};

use super::{UpdateAction, UpdateResult};

/// Switch pages; the directory and dashboard fetch on first visit
pub fn handle_navigate(state: &mut AppState, page: Page) -> UpdateResult {
    if state.page != page {
        tracing::debug!(from = ?state.page, to = ?page, "Navigating");
    }
    state.page = page;
    state.quick_action = None;
    if state.ui_mode == UiMode::ChatWidget && !state.chat_widget_available() {
        state.ui_mode = UiMode::Normal;
    }

    let action = match page {
        Page::TeleLaw if state.lawyers.begin_load() => Some(UpdateAction::FetchLawyers),
        Page::Njdg if state.stats.begin_load() => Some(UpdateAction::FetchStats),
        _ => None,
    };
    UpdateResult::maybe_action(action)
}

/// Open or close the floating assistant
pub fn handle_toggle_widget(state: &mut AppState) -> UpdateResult {
    state.ui_mode = match state.ui_mode {
        UiMode::ChatWidget => UiMode::Normal,
        UiMode::Normal if state.chat_widget_available() => UiMode::ChatWidget,
        other => other,
    };
    UpdateResult::none()
}
