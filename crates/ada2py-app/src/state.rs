//! Application state (Model in TEA pattern)

use std::time::Instant;

use chrono::{DateTime, Local};

use ada2py_core::{AppPhase, CodeSection, ConversionResult};

use crate::config::Settings;
use crate::result_view::{ConversionOutcome, CopyFeedback, ResultViewState};
use crate::upload::UploadFormState;

// ─────────────────────────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────────────────────────

/// Focusable controls, in ring order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    PathInput,
    ConvertButton,
    CopyUnitTests,
    CopyGeneratedCode,
}

impl Focus {
    const RING: [Focus; 4] = [
        Focus::PathInput,
        Focus::ConvertButton,
        Focus::CopyUnitTests,
        Focus::CopyGeneratedCode,
    ];

    /// Copy controls only exist while a result is shown
    fn ring(has_result: bool) -> &'static [Focus] {
        if has_result {
            &Self::RING
        } else {
            &Self::RING[..2]
        }
    }

    fn step(self, has_result: bool, forward: bool) -> Focus {
        let ring = Self::ring(has_result);
        let idx = ring.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % ring.len()
        } else {
            (idx + ring.len() - 1) % ring.len()
        };
        ring[next]
    }

    pub fn next(self, has_result: bool) -> Focus {
        self.step(has_result, true)
    }

    pub fn prev(self, has_result: bool) -> Focus {
        self.step(has_result, false)
    }

    /// The result section a copy control belongs to
    pub fn copy_section(self) -> Option<CodeSection> {
        match self {
            Focus::CopyUnitTests => Some(CodeSection::UnitTests),
            Focus::CopyGeneratedCode => Some(CodeSection::GeneratedCode),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion Tracking
// ─────────────────────────────────────────────────────────────────────────────

/// A submitted conversion waiting for its answer
#[derive(Debug, Clone)]
pub struct InFlight {
    pub request_id: u64,
    pub file_name: String,
    pub started_at: Instant,
}

/// Issues request ids and remembers the latest one.
///
/// Ids increase monotonically; only the completion carrying the latest id
/// is applied.
#[derive(Debug, Clone, Default)]
pub struct ConversionTracker {
    last_issued: u64,
    in_flight: Option<InFlight>,
}

impl ConversionTracker {
    /// Start tracking a new request and return its id
    pub fn begin(&mut self, file_name: impl Into<String>) -> u64 {
        self.last_issued += 1;
        self.in_flight = Some(InFlight {
            request_id: self.last_issued,
            file_name: file_name.into(),
            started_at: Instant::now(),
        });
        self.last_issued
    }

    pub fn is_latest(&self, request_id: u64) -> bool {
        request_id == self.last_issued && self.in_flight.is_some()
    }

    /// Finish the latest request. Returns `None` for stale ids.
    pub fn finish(&mut self, request_id: u64) -> Option<InFlight> {
        if self.is_latest(request_id) {
            self.in_flight.take()
        } else {
            None
        }
    }

    pub fn in_flight(&self) -> Option<&InFlight> {
        self.in_flight.as_ref()
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Effective backend base URL, shown in the header
    pub api_base_url: String,

    pub focus: Focus,

    pub upload: UploadFormState,

    pub conversion: ConversionTracker,

    /// Single result/error slot
    pub outcome: ConversionOutcome,

    pub copy_feedback: CopyFeedback,

    /// Bumped whenever the outcome slot is replaced; copy acknowledgements
    /// for an older value are dropped
    pub result_seq: u64,

    pub result_view: ResultViewState,

    /// Spinner animation frame, advanced on tick while converting
    pub spinner_frame: u64,

    /// When the shown result arrived, and from which file
    pub converted_at: Option<DateTime<Local>>,
    pub converted_file: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings, api_base_url: impl Into<String>) -> Self {
        Self {
            settings,
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    pub fn is_converting(&self) -> bool {
        self.conversion.in_flight().is_some()
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.outcome.result()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Store a successful result, replacing any previous result or error
    pub fn apply_result(&mut self, result: ConversionResult, file_name: String) {
        self.outcome = ConversionOutcome::Converted(Box::new(result));
        self.result_seq += 1;
        self.copy_feedback.clear();
        self.result_view.reset();
        self.converted_at = Some(Local::now());
        self.converted_file = Some(file_name);
    }

    /// Store a failure message, clearing any previous result
    pub fn apply_failure(&mut self, message: String) {
        self.outcome = ConversionOutcome::Failed(message);
        self.result_seq += 1;
        self.copy_feedback.clear();
        self.result_view.reset();
        self.converted_at = None;
        self.converted_file = None;

        if self.focus.copy_section().is_some() {
            self.focus = Focus::ConvertButton;
        }
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_ring_without_result() {
        assert_eq!(Focus::PathInput.next(false), Focus::ConvertButton);
        assert_eq!(Focus::ConvertButton.next(false), Focus::PathInput);
        assert_eq!(Focus::PathInput.prev(false), Focus::ConvertButton);
    }

    #[test]
    fn test_focus_ring_with_result() {
        assert_eq!(Focus::ConvertButton.next(true), Focus::CopyUnitTests);
        assert_eq!(Focus::CopyUnitTests.next(true), Focus::CopyGeneratedCode);
        assert_eq!(Focus::CopyGeneratedCode.next(true), Focus::PathInput);
        assert_eq!(Focus::PathInput.prev(true), Focus::CopyGeneratedCode);
    }

    #[test]
    fn test_tracker_ids_increase() {
        let mut tracker = ConversionTracker::default();
        let first = tracker.begin("a.adb");
        let second = tracker.begin("b.adb");
        assert!(second > first);
        assert!(!tracker.is_latest(first));
        assert!(tracker.is_latest(second));
    }

    #[test]
    fn test_tracker_finish_ignores_stale() {
        let mut tracker = ConversionTracker::default();
        let first = tracker.begin("a.adb");
        let second = tracker.begin("b.adb");

        assert!(tracker.finish(first).is_none());
        assert!(tracker.in_flight().is_some());

        let done = tracker.finish(second).unwrap();
        assert_eq!(done.file_name, "b.adb");
        assert!(tracker.in_flight().is_none());

        // Finished ids are no longer accepted
        assert!(tracker.finish(second).is_none());
    }

    #[test]
    fn test_apply_result_clears_error() {
        let mut state = AppState::new();
        state.apply_failure("Conversion failed".into());
        state.apply_result(ConversionResult::default(), "a.adb".into());

        assert!(state.outcome.is_converted());
        assert!(state.outcome.error_message().is_none());
        assert_eq!(state.converted_file.as_deref(), Some("a.adb"));
        assert_eq!(state.result_seq, 2);
    }

    #[test]
    fn test_apply_failure_clears_result_and_copy_focus() {
        let mut state = AppState::new();
        state.apply_result(ConversionResult::default(), "a.adb".into());
        state.focus = Focus::CopyGeneratedCode;

        state.apply_failure("File is empty".into());

        assert!(state.result().is_none());
        assert_eq!(state.focus, Focus::ConvertButton);
        assert!(state.converted_at.is_none());
    }
}
