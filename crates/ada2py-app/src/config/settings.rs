//! Settings loading and backend resolution

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use ada2py_client::{ApiConfig, DEFAULT_BASE_URL};
use ada2py_core::prelude::*;

use super::types::{Settings, ADA2PY_DIR, BASE_URL_ENV_VAR, CONFIG_FILENAME};

/// Load settings from .ada2py/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(ADA2PY_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in .ada2py/
///
/// An existing file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let ada2py_dir = project_path.join(ADA2PY_DIR);

    if !ada2py_dir.exists() {
        std::fs::create_dir_all(&ada2py_dir)
            .map_err(|e| Error::config(format!("Failed to create .ada2py dir: {}", e)))?;
    }

    let config_path = ada2py_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = format!(
            r#"# ada2py Configuration

[api]
# Conversion service base URL. Overridden by --base-url and ${env}.
# base_url = "{base}"
timeout_ms = 100000     # Carried for reference, not enforced

[ui]
icons = "unicode"       # "unicode" or "nerd_fonts"
"#,
            env = BASE_URL_ENV_VAR,
            base = DEFAULT_BASE_URL,
        );

        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

/// Where the effective backend URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    CommandLine,
    Environment,
    ConfigFile,
    Default,
}

impl fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseUrlSource::CommandLine => write!(f, "--base-url"),
            BaseUrlSource::Environment => write!(f, "{}", BASE_URL_ENV_VAR),
            BaseUrlSource::ConfigFile => write!(f, "config file"),
            BaseUrlSource::Default => write!(f, "default"),
        }
    }
}

/// Pick the base URL by precedence: command line, environment, config file,
/// built-in default. Blank values are skipped.
fn select_base_url(
    settings: &Settings,
    cli_override: Option<&str>,
    env_value: Option<&str>,
) -> (String, BaseUrlSource) {
    let non_blank = |v: &&str| !v.trim().is_empty();

    if let Some(url) = cli_override.filter(non_blank) {
        return (url.to_string(), BaseUrlSource::CommandLine);
    }
    if let Some(url) = env_value.filter(non_blank) {
        return (url.to_string(), BaseUrlSource::Environment);
    }
    if let Some(url) = settings.api.base_url.as_deref().filter(non_blank) {
        return (url.to_string(), BaseUrlSource::ConfigFile);
    }
    (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default)
}

/// Build the [`ApiConfig`] used for the whole run.
///
/// Reads [`BASE_URL_ENV_VAR`] from the environment. The chosen URL is
/// validated; an invalid one is a startup error.
pub fn resolve_api_config(settings: &Settings, cli_override: Option<&str>) -> Result<ApiConfig> {
    let env_value = std::env::var(BASE_URL_ENV_VAR).ok();
    let (base_url, source) = select_base_url(settings, cli_override, env_value.as_deref());

    let config = ApiConfig::parse(&base_url, settings.api.timeout_ms)?;
    info!(
        "Conversion service: {} (from {}, timeout setting {}ms)",
        config.base_url, source, config.timeout_ms
    );
    Ok(config)
}
