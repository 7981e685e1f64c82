//! Message types for the application (TEA pattern)

use ada2py_core::{CodeSection, ConversionResult, SourceFile};

use crate::input_key::InputKey;
use crate::signals::ShutdownSignal;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick: expires copy feedback, animates the spinner
    Tick,

    /// Request application quit
    Quit,

    /// The process received a termination signal
    Signal(ShutdownSignal),

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Upload Form
    // ─────────────────────────────────────────────────────────
    /// Type a character into the path input
    PathInput(char),
    /// Delete the last character of the path input
    PathBackspace,
    /// Clear the path input
    PathClear,
    /// Replace the path input (command-line prefill, headless)
    SetPath(String),
    /// Confirm the typed path as the selected file (validates immediately)
    PickFile,
    /// Activate the Convert control
    SubmitForm,

    // ─────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────
    /// A validated file handed from the form to the orchestrator
    SubmitConversion { file: SourceFile },

    /// The service returned a result
    ConversionCompleted {
        request_id: u64,
        result: Box<ConversionResult>,
    },

    /// The service call failed; `error` is the message to display
    ConversionFailed { request_id: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────
    /// Copy the text of a result section
    CopySection(CodeSection),
    CopySucceeded {
        section: CodeSection,
        result_seq: u64,
    },
    CopyFailed { section: CodeSection, error: String },

    // ─────────────────────────────────────────────────────────
    // Result Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}
