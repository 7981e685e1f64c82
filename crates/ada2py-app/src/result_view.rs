//! Result display state - outcome slot, copy feedback, and scrolling.
//!
//! Used by the handler layer (to store outcomes and record copies) and by
//! the TUI layer (to render the three result sections).

use std::time::{Duration, Instant};

use ada2py_core::{CodeSection, ConversionResult};

/// How long a copy control shows "Copied!"
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

// ─────────────────────────────────────────────────────────────────────────────
// ConversionOutcome
// ─────────────────────────────────────────────────────────────────────────────

/// The single result/error slot. Only one is ever shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConversionOutcome {
    #[default]
    Empty,
    Converted(Box<ConversionResult>),
    /// Message shown in the error banner
    Failed(String),
}

impl ConversionOutcome {
    pub fn result(&self) -> Option<&ConversionResult> {
        match self {
            ConversionOutcome::Converted(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted(_))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CopyFeedback
// ─────────────────────────────────────────────────────────────────────────────

/// Per-section "Copied!" timestamps. The two sections are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    unit_tests: Option<Instant>,
    generated_code: Option<Instant>,
}

impl CopyFeedback {
    fn slot(&mut self, section: CodeSection) -> &mut Option<Instant> {
        match section {
            CodeSection::UnitTests => &mut self.unit_tests,
            CodeSection::GeneratedCode => &mut self.generated_code,
        }
    }

    /// Record a successful copy at `now`, restarting that section's timer
    pub fn mark_copied(&mut self, section: CodeSection, now: Instant) {
        *self.slot(section) = Some(now);
    }

    pub fn is_copied(&self, section: CodeSection) -> bool {
        match section {
            CodeSection::UnitTests => self.unit_tests.is_some(),
            CodeSection::GeneratedCode => self.generated_code.is_some(),
        }
    }

    /// Label for a section's copy control
    pub fn label(&self, section: CodeSection) -> &'static str {
        if self.is_copied(section) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    /// Revert sections whose feedback has lasted [`COPY_FEEDBACK_DURATION`].
    /// Returns `true` if anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for section in CodeSection::ALL {
            let slot = self.slot(section);
            if let Some(copied_at) = *slot {
                if now.saturating_duration_since(copied_at) >= COPY_FEEDBACK_DURATION {
                    *slot = None;
                    changed = true;
                }
            }
        }
        changed
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ResultViewState
// ─────────────────────────────────────────────────────────────────────────────

/// Vertical scroll state for the result display
#[derive(Debug, Clone, Default)]
pub struct ResultViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ResultViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
