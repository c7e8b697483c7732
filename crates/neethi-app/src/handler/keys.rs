//! Key event handlers for each UI mode and page

use crate::eligibility::EligibilityField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Page, UiMode};

/// Translate a key press into a message for the current mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
        UiMode::Notice => handle_key_notice(key),
        UiMode::ChatWidget => handle_key_chat_widget(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}

fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissNotice),
        _ => None,
    }
}

fn handle_key_chat_widget(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('o') => Some(Message::ToggleChatWidget),
        InputKey::Enter => Some(Message::SubmitChatInput),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Up => Some(Message::ChatScrollUp),
        InputKey::Down => Some(Message::ChatScrollDown),
        InputKey::PageUp => Some(Message::ChatPageUp),
        InputKey::PageDown => Some(Message::ChatPageDown),
        InputKey::End => Some(Message::ChatScrollToBottom),
        other => other.as_text().map(Message::InputChar),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => return Some(Message::NextPage),
        InputKey::BackTab => return Some(Message::PrevPage),
        InputKey::F(n) => return Page::from_function_key(n).map(Message::NavigateTo),
        InputKey::CharCtrl('o') if state.chat_widget_available() => {
            return Some(Message::ToggleChatWidget)
        }
        _ => {}
    }

    match state.page {
        Page::Home => handle_key_home(key),
        Page::ECourts => handle_key_ecourts(key),
        Page::TeleLaw => handle_key_tele_law(key),
        Page::LegalAid => handle_key_legal_aid(state, key),
        Page::Njdg => handle_key_read_only(key),
        Page::Neethi => handle_key_assistant(state, key),
    }
}

/// Quit keys for pages without a focused text field
fn quit_key(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Left | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Right | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::SubmitSelection),
        InputKey::Char('a') => Some(Message::NavigateTo(Page::Neethi)),
        InputKey::Char('c') => Some(Message::NavigateTo(Page::ECourts)),
        other => quit_key(&other),
    }
}

fn handle_key_ecourts(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SearchCase),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('d') => Some(Message::InsertDemoCnr),
        other => other.as_text().map(Message::InputChar),
    }
}

fn handle_key_tele_law(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::ConnectSelected),
        other => quit_key(&other),
    }
}

fn handle_key_legal_aid(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.eligibility.focus;
    match key {
        InputKey::Up => Some(Message::SelectPrev),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Left => Some(Message::CycleOption { forward: false }),
        InputKey::Right => Some(Message::CycleOption { forward: true }),
        InputKey::Char(' ') if focus.is_flag() => Some(Message::ToggleFocused),
        InputKey::Enter => match focus {
            f if f.is_flag() => Some(Message::ToggleFocused),
            EligibilityField::CaseType | EligibilityField::State => {
                Some(Message::CycleOption { forward: true })
            }
            _ => Some(Message::SubmitEligibility),
        },
        InputKey::Backspace if focus == EligibilityField::AnnualIncome => {
            Some(Message::InputBackspace)
        }
        InputKey::Char(c) if focus == EligibilityField::AnnualIncome && c.is_ascii_digit() => {
            Some(Message::InputChar(c))
        }
        other => quit_key(&other),
    }
}

fn handle_key_read_only(key: InputKey) -> Option<Message> {
    quit_key(&key)
}

fn handle_key_assistant(state: &AppState, key: InputKey) -> Option<Message> {
    let draft_empty = state.conversation.input.is_empty();
    match key {
        InputKey::Enter => Some(Message::SubmitChatInput),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Left if draft_empty => Some(Message::SelectPrev),
        InputKey::Right if draft_empty => Some(Message::SelectNext),
        InputKey::Up => Some(Message::ChatScrollUp),
        InputKey::Down => Some(Message::ChatScrollDown),
        InputKey::PageUp => Some(Message::ChatPageUp),
        InputKey::PageDown => Some(Message::ChatPageDown),
        InputKey::End => Some(Message::ChatScrollToBottom),
        InputKey::Esc if draft_empty => Some(Message::RequestQuit),
        other => other.as_text().map(Message::InputChar),
    }
}
