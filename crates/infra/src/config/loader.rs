//! Configuration loader
//!
//! Loads RankSync configuration from a file, falling back to defaults, with
//! a small set of environment overrides applied last.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file
//! 2. If one is found, parse it (format chosen by extension)
//! 3. Otherwise start from [`Config::default`]
//! 4. Apply environment overrides
//!
//! ## Environment Variables
//! - `RANKSYNC_API_ENDPOINT`: Base URL of the remote service
//! - `RANKSYNC_API_TOKEN`: Bearer token
//! - `RANKSYNC_API_TIMEOUT_MS`: Connect/read timeout in milliseconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./ranksync.toml` or `./ranksync.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names one and two directories up
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};

use ranksync_domain::{Config, RankSyncError, Result};

use crate::errors::InfraError;

pub const ENV_API_ENDPOINT: &str = "RANKSYNC_API_ENDPOINT";
pub const ENV_API_TOKEN: &str = "RANKSYNC_API_TOKEN";
pub const ENV_API_TIMEOUT_MS: &str = "RANKSYNC_API_TIMEOUT_MS";

const FILE_NAMES: [&str; 4] = ["ranksync.toml", "ranksync.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `RankSyncError::Config` if a config file exists but cannot be
/// read or parsed, or if an environment override is invalid.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::info!("No config file found, using defaults");
            Config::default()
        }
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `RankSyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RankSyncError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RankSyncError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RankSyncError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `RankSyncError::Config` if format is invalid or parsing fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RankSyncError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(RankSyncError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Overlay `RANKSYNC_API_*` environment variables onto `config`.
///
/// # Errors
/// Returns `RankSyncError::Config` if `RANKSYNC_API_TIMEOUT_MS` is not a
/// number.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(endpoint) = std::env::var(ENV_API_ENDPOINT) {
        config.api.endpoint = endpoint;
    }
    if let Ok(token) = std::env::var(ENV_API_TOKEN) {
        config.api.token = token;
    }
    if let Ok(timeout) = std::env::var(ENV_API_TIMEOUT_MS) {
        config.api.timeout = timeout
            .trim()
            .parse()
            .map_err(|e| RankSyncError::Config(format!("Invalid API timeout: {e}")))?;
    }
    Ok(())
}
