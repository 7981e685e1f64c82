//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. Headless mode turns them into NDJSON lines.

use ada2py_core::{CodeSection, ConversionResult};

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Upload Form
    // ─────────────────────────────────────────────────────────
    /// The form rejected a submission or pick
    ValidationFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────
    /// A file was handed to the conversion service
    ConversionStarted { request_id: u64, file_name: String },

    /// The service returned a result
    ConversionCompleted {
        request_id: u64,
        result: Box<ConversionResult>,
    },

    /// The service call failed
    ConversionFailed { request_id: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────
    /// A section was copied to the clipboard
    Copied { section: CodeSection },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ValidationFailed { .. } => "validation_failed",
            Self::ConversionStarted { .. } => "conversion_started",
            Self::ConversionCompleted { .. } => "conversion_completed",
            Self::ConversionFailed { .. } => "conversion_failed",
            Self::Copied { .. } => "copied",
            Self::Shutdown => "shutdown",
        }
    }
}
