//! ada2py-app - Application state and orchestration for ada2py
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the upload form and result display state, the `update`
//! function, the actions that reach the conversion service and clipboard, and
//! the [`Engine`] shared by the terminal UI and headless mode.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod result_view;
pub mod signals;
pub mod state;
pub mod upload;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use result_view::{ConversionOutcome, CopyFeedback, ResultViewState, COPY_FEEDBACK_DURATION};
pub use state::{AppState, Focus};
pub use upload::UploadFormState;
