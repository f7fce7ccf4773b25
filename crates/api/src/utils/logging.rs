//! Tracing setup and structured command logging

use std::time::Duration;

use ranksync_domain::{LoggingConfig, RankSyncError, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Filter layer whose directives can be swapped after installation.
pub type FilterLayer = reload::Layer<EnvFilter, Registry>;

/// Filter used when `RUST_LOG` is unset.
///
/// `logging.debug` raises every ranksync crate to `debug`; `log-api-calls`
/// alone only raises the API client so request/response lines are emitted.
pub fn default_filter(config: &LoggingConfig) -> String {
    if config.debug {
        "info,ranksync_domain=debug,ranksync_core=debug,ranksync_infra=debug,ranksync_app=debug"
            .to_owned()
    } else if config.log_api_calls {
        "info,ranksync_infra::api=debug".to_owned()
    } else {
        "info".to_owned()
    }
}

/// Handle to the installed log filter.
///
/// Follows the `logging` config section across reloads unless `RUST_LOG`
/// pinned the filter at startup.
pub struct LogFilter {
    handle: Option<reload::Handle<EnvFilter, Registry>>,
    pinned: bool,
}

impl LogFilter {
    /// Build a reloadable filter layer for `config` plus its handle.
    ///
    /// Hosts composing their own subscriber can add the layer themselves.
    pub fn reloadable(config: &LoggingConfig) -> (FilterLayer, Self) {
        let (filter, pinned) = match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, true),
            Err(_) => (EnvFilter::new(default_filter(config)), false),
        };
        let (layer, handle) = reload::Layer::new(filter);
        (layer, Self { handle: Some(handle), pinned })
    }

    /// A filter that is not attached to any subscriber; `apply` does nothing.
    pub const fn detached() -> Self {
        Self { handle: None, pinned: false }
    }

    /// Current directives, if attached to a live subscriber.
    pub fn directives(&self) -> Option<String> {
        self.handle.as_ref()?.with_current(|filter| filter.to_string()).ok()
    }

    /// Re-derive the directives from `config`.
    ///
    /// # Errors
    /// Returns `RankSyncError::Internal` if the subscriber has been dropped.
    pub fn apply(&self, config: &LoggingConfig) -> Result<()> {
        let Some(handle) = &self.handle else {
            return Ok(());
        };
        if self.pinned {
            debug!("RUST_LOG is set, keeping log filter");
            return Ok(());
        }

        let directives = default_filter(config);
        handle
            .modify(|filter| *filter = EnvFilter::new(&directives))
            .map_err(|e| RankSyncError::Internal(format!("Failed to update log filter: {e}")))?;
        info!(filter = %directives, "log filter updated");
        Ok(())
    }
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the `logging` section. The returned
/// [`LogFilter`] re-applies that section after a config reload.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<LogFilter> {
    let (filter, log_filter) = LogFilter::reloadable(config);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .try_init()
        .map_err(|e| RankSyncError::Internal(format!("Failed to initialize tracing: {e}")))?;

    Ok(log_filter)
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` must not carry player-supplied text such as link codes.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `RankSyncError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &RankSyncError) -> &'static str {
    match error {
        RankSyncError::Config(_) => "config",
        RankSyncError::Network(_) => "network",
        RankSyncError::Serialization(_) => "serialization",
        RankSyncError::Directory(_) => "directory",
        RankSyncError::InvalidInput(_) => "invalid_input",
        RankSyncError::Internal(_) => "internal",
    }
}
