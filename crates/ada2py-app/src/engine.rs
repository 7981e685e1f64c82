//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, and the
//! external collaborators (conversion service and clipboard). Both runners
//! feed it messages and read state or events back out.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use ada2py_client::{ApiConfig, ClipboardWriter, ConversionClient, ConvertApi, SystemClipboard};
use ada2py_core::prelude::*;
use ada2py_core::CodeSection;

use crate::actions::Services;
use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::result_view::ConversionOutcome;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    rejections: u64,
    in_flight: Option<u64>,
    copied: [bool; 2],
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            rejections: state.upload.rejections,
            in_flight: state.conversion.in_flight().map(|f| f.request_id),
            copied: CodeSection::ALL.map(|s| state.copy_feedback.is_copied(s)),
        }
    }
}

/// Orchestration engine for ada2py.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Conversion service and clipboard
/// - Event broadcasting for external consumers
pub struct Engine<C = ConversionClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Resolved backend configuration
    pub api_config: ApiConfig,

    services: Services<C>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<ConversionClient> {
    /// Create an Engine for the real conversion service and system clipboard.
    ///
    /// Loads settings from `project_path`, resolves the backend URL (command
    /// line override first) and spawns the signal handler. An invalid backend
    /// URL is returned as an error.
    pub fn new(project_path: &Path, base_url_override: Option<&str>) -> Result<Self> {
        let settings = config::load_settings(project_path);
        let api_config = config::resolve_api_config(&settings, base_url_override)?;

        let client = ConversionClient::new(api_config.clone())?;
        let clipboard: Arc<dyn ClipboardWriter> = Arc::new(SystemClipboard::new());

        let engine = Self::with_services(settings, api_config, Services::new(client, clipboard));
        signals::spawn_signal_handler(engine.msg_tx.clone());

        Ok(engine)
    }
}

impl<C> Engine<C>
where
    C: ConvertApi + Sync + 'static,
{
    /// Create an Engine around explicit collaborators
    pub fn with_services(settings: Settings, api_config: ApiConfig, services: Services<C>) -> Self {
        let state = AppState::with_settings(settings, api_config.base_url.clone());

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(64);

        info!("Engine ready (backend {})", api_config.base_url);

        Self {
            state,
            msg_tx,
            msg_rx,
            api_config,
            services,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Returns a receiver that gets EngineEvents after each message
    /// processing cycle. Multiple subscribers are supported.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.services);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Drop "Copied!" labels whose window has passed.
    ///
    /// Called once per frame by the TUI runner so expiry does not depend on
    /// the input poll timing out. Returns true if a label changed.
    pub fn expire_copy_feedback(&mut self) -> bool {
        self.state.copy_feedback.expire(Instant::now())
    }

    /// Wait for the next message from background tasks or signals
    pub async fn recv_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    ///
    /// In-flight conversions are not awaited; their results are dropped with
    /// the channel.
    pub fn shutdown(&mut self) {
        if let Some(in_flight) = self.state.conversion.in_flight() {
            info!(
                "Shutting down with conversion #{} still in flight",
                in_flight.request_id
            );
        }
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        // Form rejected something
        if post.rejections > pre.rejections {
            if let Some(message) = &self.state.upload.error {
                self.emit(EngineEvent::ValidationFailed {
                    message: message.clone(),
                });
            }
        }

        // The latest request finished
        if let Some(request_id) = pre.in_flight {
            if post.in_flight != Some(request_id) {
                match &self.state.outcome {
                    ConversionOutcome::Converted(result) => {
                        self.emit(EngineEvent::ConversionCompleted {
                            request_id,
                            result: result.clone(),
                        })
                    }
                    ConversionOutcome::Failed(error) => self.emit(EngineEvent::ConversionFailed {
                        request_id,
                        error: error.clone(),
                    }),
                    ConversionOutcome::Empty => {}
                }
            }
        }

        // A new request went out
        if let Some(in_flight) = self.state.conversion.in_flight() {
            if pre.in_flight != post.in_flight {
                self.emit(EngineEvent::ConversionStarted {
                    request_id: in_flight.request_id,
                    file_name: in_flight.file_name.clone(),
                });
            }
        }

        for (idx, section) in CodeSection::ALL.into_iter().enumerate() {
            if post.copied[idx] && !pre.copied[idx] {
                self.emit(EngineEvent::Copied { section });
            }
        }
    }

    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
