//! Application context - dependency injection container

use std::sync::Arc;

use ranksync_core::{
    register_adapters, ConfigStore, DirectoryService, EventSource, LinkingWorkflow, SyncRelay,
    SyncTransport,
};
use ranksync_domain::Result;
use ranksync_infra::{FileConfigStore, HttpSyncClient};
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::utils::logging::{init_tracing, LogFilter};

/// Type alias for config store port trait object
type DynConfigStore = dyn ConfigStore;

/// Type alias for directory port trait object
type DynDirectoryService = dyn DirectoryService;

/// Type alias for transport port trait object
type DynSyncTransport = dyn SyncTransport;

/// Application context - holds all services and dependencies
///
/// The transport is constructed once and shared by every adapter and command.
pub struct AppContext {
    pub config: Arc<DynConfigStore>,
    pub directory: Arc<DynDirectoryService>,
    pub transport: Arc<DynSyncTransport>,
    pub relay: SyncRelay,
    pub linking: LinkingWorkflow,
    pub log_filter: LogFilter,
}

impl AppContext {
    /// Wire the context onto the current tokio runtime.
    ///
    /// # Errors
    /// Returns `RankSyncError::Internal` when called outside a runtime.
    pub fn new(
        config: Arc<DynConfigStore>,
        directory: Arc<DynDirectoryService>,
        transport: Arc<DynSyncTransport>,
    ) -> Result<Self> {
        let relay = SyncRelay::from_current(Arc::clone(&transport))?;
        Ok(Self::assemble(config, directory, transport, relay))
    }

    /// Wire the context onto an explicit runtime, for hosts that construct
    /// it from their own threads.
    pub fn with_runtime(
        config: Arc<DynConfigStore>,
        directory: Arc<DynDirectoryService>,
        transport: Arc<DynSyncTransport>,
        runtime: Handle,
    ) -> Self {
        let relay = SyncRelay::new(Arc::clone(&transport), runtime);
        Self::assemble(config, directory, transport, relay)
    }

    /// Full startup: `.env`, config discovery, tracing, and the HTTP
    /// transport.
    ///
    /// # Errors
    /// Returns an error if the discovered config file is invalid or the HTTP
    /// client cannot be built.
    pub fn bootstrap(directory: Arc<DynDirectoryService>, runtime: Handle) -> Result<Self> {
        let dotenv = dotenvy::dotenv();

        let store = Arc::new(FileConfigStore::discover()?);
        let log_filter = match init_tracing(&store.snapshot().logging) {
            Ok(filter) => filter,
            Err(err) => {
                // Host already installed a subscriber; keep using it.
                tracing::debug!(error = %err, "tracing already initialised");
                LogFilter::detached()
            }
        };

        match dotenv {
            Ok(path) => info!(path = %path.display(), "loaded .env"),
            Err(err) => warn!(error = %err, "no .env file loaded"),
        }
        match store.path() {
            Some(path) => info!(path = %path.display(), "using config file"),
            None => info!("no config file found, using defaults"),
        }

        let transport = Arc::new(HttpSyncClient::new(store.clone())?);
        Ok(Self::with_runtime(store, directory, transport, runtime).with_log_filter(log_filter))
    }

    fn assemble(
        config: Arc<DynConfigStore>,
        directory: Arc<DynDirectoryService>,
        transport: Arc<DynSyncTransport>,
        relay: SyncRelay,
    ) -> Self {
        let linking = LinkingWorkflow::new(relay.clone(), Arc::clone(&config));
        Self { config, directory, transport, relay, linking, log_filter: LogFilter::detached() }
    }

    /// Let config reloads drive `filter`.
    #[must_use]
    pub fn with_log_filter(mut self, filter: LogFilter) -> Self {
        self.log_filter = filter;
        self
    }

    /// Subscribe the directory event adapters to `source`.
    pub fn register(&self, source: &dyn EventSource) {
        register_adapters(
            source,
            &self.relay,
            Arc::clone(&self.directory),
            Arc::clone(&self.config),
        );
    }
}
