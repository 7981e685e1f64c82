//! Headless mode - NDJSON event output instead of the TUI
//!
//! Runs one conversion through the same upload-form validation and engine
//! as the TUI and reports progress as newline-delimited JSON on stdout.
//!
//! # Example Output
//!
//! ```json
//! {"event":"conversion_started","request_id":1,"file_name":"hello.adb","timestamp":1704700001000}
//! {"event":"conversion_completed","request_id":1,"logic":"...","unit_tests":"...","converted_code":"...","timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;

use ada2py_app::EngineEvent;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The file was rejected before any request was sent
    ValidationFailed { message: String, timestamp: i64 },

    /// The file was handed to the conversion service
    ConversionStarted {
        request_id: u64,
        file_name: String,
        timestamp: i64,
    },

    /// The service returned a result
    ConversionCompleted {
        request_id: u64,
        logic: String,
        unit_tests: String,
        converted_code: String,
        timestamp: i64,
    },

    /// The service call failed
    ConversionFailed {
        request_id: u64,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Whether this event ends a headless run
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::ConversionStarted { .. })
    }

    /// Whether this event reports success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::ConversionCompleted { .. })
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event to its NDJSON form. Copy and shutdown events have
    /// no headless counterpart.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::ValidationFailed { message } => Some(Self::ValidationFailed {
                message: message.clone(),
                timestamp,
            }),
            EngineEvent::ConversionStarted {
                request_id,
                file_name,
            } => Some(Self::ConversionStarted {
                request_id: *request_id,
                file_name: file_name.clone(),
                timestamp,
            }),
            EngineEvent::ConversionCompleted { request_id, result } => {
                Some(Self::ConversionCompleted {
                    request_id: *request_id,
                    logic: result.logic.clone(),
                    unit_tests: result.unit_tests.clone(),
                    converted_code: result.converted_code.clone(),
                    timestamp,
                })
            }
            EngineEvent::ConversionFailed { request_id, error } => Some(Self::ConversionFailed {
                request_id: *request_id,
                error: error.clone(),
                timestamp,
            }),
            EngineEvent::Copied { .. } | EngineEvent::Shutdown => None,
        }
    }
}
