//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tracing::{debug, info, warn};

use ada2py_core::AppPhase;

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Signal(signal) => {
            info!("{} received, shutting down", signal);
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.copy_feedback.expire(Instant::now());
            if state.is_converting() {
                state.tick_spinner();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext | Message::FocusPrev => {
            // Leaving the path input counts as picking what was typed
            if state.focus == Focus::PathInput
                && !state.is_converting()
                && state.upload.has_unpicked_input()
            {
                state.upload.pick();
            }
            let has_result = state.outcome.is_converted();
            state.focus = if matches!(message, Message::FocusNext) {
                state.focus.next(has_result)
            } else {
                state.focus.prev(has_result)
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload Form Messages
        // ─────────────────────────────────────────────────────────
        Message::PathInput(_)
        | Message::PathBackspace
        | Message::PathClear
        | Message::SetPath(_)
            if state.is_converting() =>
        {
            debug!("Path edit ignored: conversion in flight");
            UpdateResult::none()
        }
        Message::PathInput(c) => {
            state.upload.insert_char(c);
            UpdateResult::none()
        }
        Message::PathBackspace => {
            state.upload.backspace();
            UpdateResult::none()
        }
        Message::PathClear => {
            state.upload.clear_input();
            UpdateResult::none()
        }
        Message::SetPath(path) => {
            state.upload.set_input(path);
            UpdateResult::none()
        }

        Message::PickFile => {
            if state.is_converting() {
                return UpdateResult::none();
            }
            if state.upload.pick() {
                UpdateResult::message(Message::SubmitForm)
            } else {
                UpdateResult::none()
            }
        }

        Message::SubmitForm => {
            if state.is_converting() {
                debug!("Submit ignored: conversion already in flight");
                return UpdateResult::none();
            }
            match state.upload.submit() {
                Ok(file) => UpdateResult::message(Message::SubmitConversion { file }),
                Err(e) => {
                    debug!("Submit rejected: {}", e);
                    UpdateResult::none()
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Conversion Messages
        // ─────────────────────────────────────────────────────────
        Message::SubmitConversion { file } => {
            if let Some(in_flight) = state.conversion.in_flight() {
                warn!(
                    "Ignoring {}: request {} for {} still in flight",
                    file, in_flight.request_id, in_flight.file_name
                );
                return UpdateResult::none();
            }

            let request_id = state.conversion.begin(file.name.clone());
            state.spinner_frame = 0;
            info!("Starting conversion #{} of {}", request_id, file);

            UpdateResult::action(UpdateAction::Convert { request_id, file })
        }

        Message::ConversionCompleted { request_id, result } => {
            match state.conversion.finish(request_id) {
                Some(done) => {
                    info!(
                        "Conversion #{} of {} completed in {}ms",
                        request_id,
                        done.file_name,
                        done.started_at.elapsed().as_millis()
                    );
                    state.apply_result(*result, done.file_name);
                }
                None => debug!("Dropping stale conversion result #{}", request_id),
            }
            UpdateResult::none()
        }

        Message::ConversionFailed { request_id, error } => {
            match state.conversion.finish(request_id) {
                Some(done) => {
                    warn!(
                        "Conversion #{} of {} failed: {}",
                        request_id, done.file_name, error
                    );
                    state.apply_failure(error);
                }
                None => debug!("Dropping stale conversion failure #{}", request_id),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Clipboard Messages
        // ─────────────────────────────────────────────────────────
        Message::CopySection(section) => match state.result() {
            Some(result) => UpdateResult::action(UpdateAction::CopyToClipboard {
                section,
                text: result.section_text(section).to_string(),
                result_seq: state.result_seq,
            }),
            None => UpdateResult::none(),
        },

        Message::CopySucceeded {
            section,
            result_seq,
        } => {
            if result_seq != state.result_seq {
                debug!(
                    "Copy of {} finished after its result was replaced",
                    section
                );
                return UpdateResult::none();
            }
            debug!("Copied {} to clipboard", section);
            state.copy_feedback.mark_copied(section, Instant::now());
            UpdateResult::none()
        }

        Message::CopyFailed { section, error } => {
            warn!("Failed to copy {}: {}", section, error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.result_view.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.result_view.scroll_down(1);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.result_view.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.result_view.page_down();
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.result_view.scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.result_view.scroll_to_bottom();
            UpdateResult::none()
        }
    }
}
