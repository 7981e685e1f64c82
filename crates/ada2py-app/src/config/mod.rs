//! Configuration for ada2py
//!
//! Supports:
//! - `.ada2py/config.toml` - Project-local settings
//! - `ADA2PY_API_BASE_URL` - Backend override from the environment

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, resolve_api_config, BaseUrlSource};
pub use types::*;
