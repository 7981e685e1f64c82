//! Custom widget components

mod error_banner;
mod header;
mod result_view;
mod status_bar;
mod upload_form;

pub use error_banner::ErrorBanner;
pub use header::MainHeader;
pub use result_view::{logic_lines, wrap_hard, ResultView};
pub use status_bar::StatusBar;
pub use upload_form::UploadForm;

// Re-export state types from app layer (these are used by render/)
pub use ada2py_app::result_view::ResultViewState;
