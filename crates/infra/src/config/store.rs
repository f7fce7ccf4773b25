//! [`ConfigStore`] implementations
//!
//! Both stores hand out `Arc<Config>` snapshots. A reload swaps the `Arc`,
//! so readers that already hold a snapshot keep a consistent view.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use ranksync_core::ConfigStore;
use ranksync_domain::{Config, Result};
use tracing::{info, warn};

use super::loader::{apply_env_overrides, load_from_file, probe_config_paths};

/// File-backed store with hot reload.
pub struct FileConfigStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<Config>>,
}

impl FileConfigStore {
    /// Load `path` and keep it as the reload source.
    ///
    /// # Errors
    /// Returns `RankSyncError::Config` if the file is missing or invalid.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = read(Some(&path))?;
        Ok(Self { path: Some(path), current: RwLock::new(Arc::new(config)) })
    }

    /// Use the first file found in the standard locations, or defaults when
    /// there is none.
    ///
    /// # Errors
    /// Returns `RankSyncError::Config` if a discovered file is invalid.
    pub fn discover() -> Result<Self> {
        let path = probe_config_paths();
        let config = read(path.as_deref())?;
        Ok(Self { path, current: RwLock::new(Arc::new(config)) })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn read(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(Some(path.to_path_buf()))?,
        None => Config::default(),
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

impl ConfigStore for FileConfigStore {
    fn snapshot(&self) -> Arc<Config> {
        Arc::clone(&self.current.read())
    }

    /// Re-read the backing file. On failure the previous snapshot stays live.
    fn reload(&self) -> Result<()> {
        match read(self.path.as_deref()) {
            Ok(config) => {
                *self.current.write() = Arc::new(config);
                info!(path = ?self.path, "configuration reloaded");
                Ok(())
            }
            Err(err) => {
                warn!(path = ?self.path, error = %err, "configuration reload failed");
                Err(err)
            }
        }
    }
}

/// In-memory store for embedding and tests.
#[derive(Default)]
pub struct StaticConfigStore {
    current: RwLock<Arc<Config>>,
}

impl StaticConfigStore {
    pub fn new(config: Config) -> Self {
        Self { current: RwLock::new(Arc::new(config)) }
    }

    /// Swap in a new configuration; the next snapshot sees it.
    pub fn replace(&self, config: Config) {
        *self.current.write() = Arc::new(config);
    }
}

impl ConfigStore for StaticConfigStore {
    fn snapshot(&self) -> Arc<Config> {
        Arc::clone(&self.current.read())
    }

    fn reload(&self) -> Result<()> {
        Ok(())
    }
}
