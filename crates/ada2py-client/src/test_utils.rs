//! Test doubles for the conversion service and clipboard
//!
//! Available to this crate's tests and, through the `test-helpers` feature,
//! to downstream crates.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use ada2py_core::prelude::*;
use ada2py_core::{ConversionResult, SourceFile};

use crate::api::ConvertApi;
use crate::clipboard::ClipboardWriter;

/// Scripted reply for [`FakeConverter`]
#[derive(Debug, Clone)]
pub enum FakeReply {
    Success(ConversionResult),
    /// Service-style failure with the given status and message
    Failure { status: u16, message: String },
}

impl FakeReply {
    fn into_result(self) -> Result<ConversionResult> {
        match self {
            FakeReply::Success(result) => Ok(result),
            FakeReply::Failure { status, message } => Err(Error::conversion(status, message)),
        }
    }
}

/// In-memory [`ConvertApi`] that records every submitted file.
///
/// Replies are taken from a queue in order; once it is empty the default
/// reply is returned. With [`FakeConverter::gated`] every call waits until
/// [`FakeConverter::release`] is called.
#[derive(Debug, Clone, Default)]
pub struct FakeConverter {
    replies: Arc<Mutex<VecDeque<FakeReply>>>,
    default_reply: Option<FakeReply>,
    calls: Arc<Mutex<Vec<SourceFile>>>,
    gate: Option<Arc<Notify>>,
}

impl FakeConverter {
    /// Always succeed with `result`
    pub fn succeeding(result: ConversionResult) -> Self {
        Self {
            default_reply: Some(FakeReply::Success(result)),
            ..Default::default()
        }
    }

    /// Always fail with `status` and `message`
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            default_reply: Some(FakeReply::Failure {
                status,
                message: message.into(),
            }),
            ..Default::default()
        }
    }

    /// Hold every call until [`Self::release`]
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Queue a reply used before the default one
    pub fn push_reply(&self, reply: FakeReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Let one waiting call proceed
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Files received so far, in call order
    pub fn calls(&self) -> Vec<SourceFile> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    fn next_reply(&self) -> Result<ConversionResult> {
        let queued = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        match queued.or_else(|| self.default_reply.clone()) {
            Some(reply) => reply.into_result(),
            None => Ok(ConversionResult::default()),
        }
    }
}

impl ConvertApi for FakeConverter {
    async fn convert(&self, file: &SourceFile) -> Result<ConversionResult> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(file.clone());
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.next_reply()
    }
}

/// [`ClipboardWriter`] that remembers what was written
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail_with: Option<String>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.writes().last().cloned()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(Error::clipboard(message.clone()));
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}
