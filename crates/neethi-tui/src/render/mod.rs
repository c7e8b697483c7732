//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use neethi_app::{AppState, Page, UiMode};
use neethi_core::content::announcement;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only the chat scroll state is written; it records the wrapped transcript
/// size so scrolling can clamp.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.show_footer());

    frame.render_widget(widgets::MainHeader::new(state.page, &state.backend), areas.header);

    match state.page {
        Page::Home => {
            let headline = state.stats.headline();
            frame.render_widget(
                widgets::HomePage::new(
                    &headline,
                    announcement(state.announcement_index),
                    state.home_selected,
                ),
                areas.content,
            );
        }
        Page::ECourts => frame.render_widget(
            widgets::CaseStatusPage::new(&state.case_lookup),
            areas.content,
        ),
        Page::TeleLaw => frame.render_widget(widgets::TeleLawPage::new(&state.lawyers), areas.content),
        Page::LegalAid => frame.render_widget(
            widgets::EligibilityPage::new(&state.eligibility),
            areas.content,
        ),
        Page::Njdg => frame.render_widget(widgets::NjdgPage::new(&state.stats), areas.content),
        Page::Neethi => {
            // The widget borrows the whole store, so scroll state is copied out
            let mut view_state = state.conversation.view.clone();
            frame.render_stateful_widget(
                widgets::ChatView::new(&state.conversation).quick_action(state.quick_action),
                areas.content,
                &mut view_state,
            );
            state.conversation.view = view_state;
        }
    }

    if let Some(footer) = areas.footer {
        frame.render_widget(
            widgets::Footer::new(state.page, state.chat_widget_available()),
            footer,
        );
    }

    if state.is_widget_open() && state.chat_widget_available() {
        let panel = layout::chat_widget_area(areas.content);
        let mut view_state = state.conversation.view.clone();
        frame.render_stateful_widget(
            widgets::ChatView::new(&state.conversation).compact(),
            panel,
            &mut view_state,
        );
        state.conversation.view = view_state;
    }

    match state.ui_mode {
        UiMode::Notice => {
            if let Some(notice) = &state.notice {
                frame.render_widget(widgets::NoticeDialog::new(notice), area);
            }
        }
        UiMode::ConfirmQuit => frame.render_widget(widgets::ConfirmQuitDialog, area),
        UiMode::Normal | UiMode::ChatWidget => {}
    }
}
