//! Key event handlers for the focused control

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused control
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Quit works everywhere, even mid-conversion
    if matches!(key, InputKey::Esc | InputKey::CharCtrl('c')) {
        return Some(Message::Quit);
    }

    if state.focus != Focus::PathInput {
        if let Some(msg) = scroll_key(&key) {
            return Some(msg);
        }
    }

    // The upload form is disabled while a conversion is in flight; focus
    // movement and the copy controls stay live
    let form_locked = state.is_converting();

    match key {
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        InputKey::CharCtrl('s') if form_locked => return None,
        InputKey::CharCtrl('s') => return Some(Message::SubmitForm),
        _ => {}
    }

    match state.focus {
        Focus::PathInput | Focus::ConvertButton if form_locked => None,
        Focus::PathInput => handle_key_path_input(key),
        Focus::ConvertButton => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::SubmitForm),
            _ => None,
        },
        Focus::CopyUnitTests | Focus::CopyGeneratedCode => match key {
            InputKey::Enter | InputKey::Char(' ' | 'c') => {
                state.focus.copy_section().map(Message::CopySection)
            }
            _ => None,
        },
    }
}

fn handle_key_path_input(key: InputKey) -> Option<Message> {
    match key {
        // Pick the typed file; a valid pick submits
        InputKey::Enter => Some(Message::PickFile),

        InputKey::Backspace => Some(Message::PathBackspace),
        InputKey::CharCtrl('u') => Some(Message::PathClear),
        InputKey::Char(c) => Some(Message::PathInput(c)),

        // Paging still works while typing
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ => None,
    }
}

fn scroll_key(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        _ => None,
    }
}
