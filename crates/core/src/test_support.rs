//! Shared fakes for the core unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use ranksync_domain::{Config, Outcome, Payload, RankSyncError, Result, UserSnapshot};
use uuid::Uuid;

use crate::config_ports::ConfigStore;
use crate::directory_ports::DirectoryService;
use crate::linking::ports::CommandActor;
use crate::transport::SyncTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Join(Payload),
    RankChange(Payload),
    Link { identity: Uuid, display_name: String, code: String },
    Unlink(Uuid),
    CheckLinked(Uuid),
}

/// Transport that records every call and answers with a fixed outcome.
pub struct RecordingTransport {
    response: Outcome,
    delay: Duration,
    calls: Mutex<Vec<TransportCall>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl RecordingTransport {
    pub fn responding(response: Outcome) -> Self {
        Self {
            response,
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::responding(Outcome::from_status(200, r#"{"success":true}"#))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Poll until at least `count` calls were recorded or `timeout` elapses.
    pub async fn wait_for_calls(&self, count: usize, timeout: Duration) {
        let deadline = tokio::time::Instant::now() + timeout;
        while self.calls.lock().len() < count && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    async fn record(&self, call: TransportCall) -> Outcome {
        self.calls.lock().push(call);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.response.clone()
    }
}

#[async_trait]
impl SyncTransport for RecordingTransport {
    async fn notify_join(&self, payload: &Payload) -> Outcome {
        self.record(TransportCall::Join(payload.clone())).await
    }

    async fn notify_rank_change(&self, payload: &Payload) -> Outcome {
        self.record(TransportCall::RankChange(payload.clone())).await
    }

    async fn link(&self, identity: Uuid, display_name: &str, code: &str) -> Outcome {
        self.record(TransportCall::Link {
            identity,
            display_name: display_name.to_owned(),
            code: code.to_owned(),
        })
        .await
    }

    async fn unlink(&self, identity: Uuid) -> Outcome {
        self.record(TransportCall::Unlink(identity)).await
    }

    async fn check_linked(&self, identity: Uuid) -> Outcome {
        self.record(TransportCall::CheckLinked(identity)).await
    }
}

#[derive(Default)]
pub struct TestConfigStore {
    current: RwLock<Arc<Config>>,
}

impl TestConfigStore {
    pub fn update(&self, change: impl FnOnce(&mut Config)) {
        let mut next = (**self.current.read()).clone();
        change(&mut next);
        *self.current.write() = Arc::new(next);
    }
}

impl ConfigStore for TestConfigStore {
    fn snapshot(&self) -> Arc<Config> {
        Arc::clone(&self.current.read())
    }

    fn reload(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDirectory {
    users: HashMap<Uuid, UserSnapshot>,
    failure: Option<RankSyncError>,
}

impl FakeDirectory {
    pub fn with_user(snapshot: UserSnapshot) -> Self {
        let mut users = HashMap::new();
        users.insert(snapshot.identity, snapshot);
        Self { users, failure: None }
    }

    pub fn failing(error: RankSyncError) -> Self {
        Self { users: HashMap::new(), failure: Some(error) }
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn load_user(&self, identity: Uuid) -> Result<Option<UserSnapshot>> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.users.get(&identity).cloned()),
        }
    }
}

/// Command sender that collects the messages it receives.
pub struct FakeActor {
    identity: Option<Uuid>,
    name: String,
    permissions: Vec<String>,
    messages: Mutex<Vec<String>>,
}

impl FakeActor {
    pub fn player(identity: Uuid, name: &str, permissions: &[&str]) -> Self {
        Self {
            identity: Some(identity),
            name: name.to_owned(),
            permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn console() -> Self {
        Self {
            identity: None,
            name: "CONSOLE".to_owned(),
            permissions: Vec::new(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl CommandActor for FakeActor {
    fn identity(&self) -> Option<Uuid> {
        self.identity
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().push(message.to_owned());
    }
}
