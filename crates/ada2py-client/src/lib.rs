//! # ada2py-client - External Collaborators
//!
//! Wraps everything ada2py talks to outside its own process: the remote
//! conversion service (one multipart `POST`) and the system clipboard.
//!
//! Depends on [`ada2py_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Conversion Service
//! - [`ApiConfig`] - Resolved backend base URL and timeout setting
//! - [`ConversionClient`] - reqwest-backed client for `POST /api/v1/convert`
//! - [`ConvertApi`] / [`LocalConvertApi`] - Seam used by the orchestrator
//! - [`error_message_from_body()`] - Error envelope normalization
//!
//! ### Clipboard
//! - [`ClipboardWriter`] - Write-only clipboard seam
//! - [`SystemClipboard`] - Platform clipboard via `arboard`

pub mod api;
pub mod clipboard;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{
    error_message_from_body, ApiConfig, ConversionClient, ConvertApi, LocalConvertApi,
    CONVERT_PATH, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, FALLBACK_ERROR_MESSAGE, FILE_FIELD,
};
pub use clipboard::{ClipboardWriter, SystemClipboard};
