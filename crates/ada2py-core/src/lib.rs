//! # ada2py-core - Core Domain Types
//!
//! Foundation crate for ada2py. Provides the conversion domain types, error
//! handling and logging setup shared by every other crate.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SourceFile`] - A file chosen in the upload form (path + display name)
//! - [`ConversionResult`] - The three text fields returned by the service
//! - [`CodeSection`] - The two copyable sections of a result
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ada2py_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all ada2py crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result};
pub use types::{
    has_accepted_extension, AppPhase, CodeSection, ConversionResult, SourceFile,
    ACCEPTED_EXTENSIONS,
};
