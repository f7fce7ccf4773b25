//! Configuration management
//!
//! Every field carries a serde default so partial files (or none at all)
//! produce a usable configuration. Keys are kebab-case on disk.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_ENDPOINT, DEFAULT_API_TIMEOUT_MS};
use crate::impl_wire_enum_conversions;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub api: ApiConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
    pub messages: MessagesConfig,
}

/// Remote endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApiConfig {
    pub endpoint: String,
    #[serde(skip_serializing)]
    pub token: String,
    /// Connect and read timeout in milliseconds. Zero waits indefinitely.
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            token: String::new(),
            timeout: DEFAULT_API_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout)
    }
}

/// Event relay toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SyncConfig {
    pub on_join: bool,
    pub on_rank_change: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { on_join: true, on_rank_change: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Verbose diagnostics for the relay and workflow.
    pub debug: bool,
    /// Log every outbound request and inbound response.
    pub log_api_calls: bool,
}

/// User-facing message templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MessagesConfig {
    pub prefix: String,
    pub no_permission: String,
    pub reload_success: String,
    pub reload_fail: String,
    pub link_success: String,
    pub link_fail: String,
    pub unlink_success: String,
    pub unlink_fail: String,
    pub status_linked: String,
    pub status_not_linked: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            prefix: "[RankSync] ".to_string(),
            no_permission: "You do not have permission to use this command.".to_string(),
            reload_success: "Configuration reloaded.".to_string(),
            reload_fail: "Configuration reload failed; see the server log.".to_string(),
            link_success: "Your account has been linked!".to_string(),
            link_fail: "Linking failed. Check your code and try again.".to_string(),
            unlink_success: "Your account has been unlinked.".to_string(),
            unlink_fail: "Unlinking failed. Is your account linked?".to_string(),
            status_linked: "Your account is linked.".to_string(),
            status_not_linked: "Your account is not linked.".to_string(),
        }
    }
}

/// Fixed user-visible message identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    NoPermission,
    ReloadSuccess,
    ReloadFail,
    LinkSuccess,
    LinkFail,
    UnlinkSuccess,
    UnlinkFail,
    StatusLinked,
    StatusNotLinked,
}

impl_wire_enum_conversions!(MessageKey {
    NoPermission => "no-permission",
    ReloadSuccess => "reload-success",
    ReloadFail => "reload-fail",
    LinkSuccess => "link-success",
    LinkFail => "link-fail",
    UnlinkSuccess => "unlink-success",
    UnlinkFail => "unlink-fail",
    StatusLinked => "status-linked",
    StatusNotLinked => "status-not-linked",
});

impl MessagesConfig {
    fn template(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::NoPermission => &self.no_permission,
            MessageKey::ReloadSuccess => &self.reload_success,
            MessageKey::ReloadFail => &self.reload_fail,
            MessageKey::LinkSuccess => &self.link_success,
            MessageKey::LinkFail => &self.link_fail,
            MessageKey::UnlinkSuccess => &self.unlink_success,
            MessageKey::UnlinkFail => &self.unlink_fail,
            MessageKey::StatusLinked => &self.status_linked,
            MessageKey::StatusNotLinked => &self.status_not_linked,
        }
    }

    /// Prefix followed by the configured text for `key`.
    pub fn render(&self, key: MessageKey) -> String {
        format!("{}{}", self.prefix, self.template(key))
    }
}
