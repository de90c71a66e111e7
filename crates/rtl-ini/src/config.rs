//! TOML-based configuration for the `rtl-ini` tool.
//!
//! The file is optional.  When it is absent every setting takes its default.
//! Lookup order for the file itself:
//!
//! 1. `--config <PATH>` (or the `RTL_INI_CONFIG` environment variable)
//! 2. The platform config directory:
//!    - Windows:  `%APPDATA%\rtl-ini\config.toml`
//!    - Linux:    `~/.config/rtl-ini/config.toml` (honours `XDG_CONFIG_HOME`)
//!    - macOS:    `~/Library/Application Support/rtl-ini/config.toml`
//!
//! ```toml
//! [store]
//! case_sensitive = false
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Missing tables and fields fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level tool configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// How INI files are opened.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Compare section and key names exactly instead of ignoring case.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// `tracing` filter used when `RUST_LOG` is not set: `"error"`, `"warn"`,
    /// `"info"`, `"debug"` or `"trace"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path to the platform config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads a [`ToolConfig`] from `path`, returning the defaults if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<ToolConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: ToolConfig = toml::from_str(&content)?;
            debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ToolConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads the configuration from `explicit` if given, otherwise from the
/// platform config file.  A platform without a config directory just gets
/// the defaults.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn resolve_config(explicit: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }
    match config_file_path() {
        Ok(path) => load_config_from(&path),
        Err(ConfigError::NoPlatformConfigDir) => Ok(ToolConfig::default()),
        Err(e) => Err(e),
    }
}

/// Directory holding `config.toml`: the per-user configuration root of the
/// current platform plus `rtl-ini`.
fn platform_config_dir() -> Option<PathBuf> {
    user_config_root().map(|root| root.join("rtl-ini"))
}

#[cfg(target_os = "windows")]
fn user_config_root() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(target_os = "macos")]
fn user_config_root() -> Option<PathBuf> {
    home_dir().map(|home| home.join("Library/Application Support"))
}

#[cfg(target_os = "linux")]
fn user_config_root() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|home| home.join(".config")))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn user_config_root() -> Option<PathBuf> {
    None
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
