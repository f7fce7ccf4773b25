use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use ranksync_app::AppContext;
use ranksync_core::{CommandActor, DirectoryService};
use ranksync_domain::{Config, Node, Result, UserSnapshot};
use ranksync_infra::{HttpSyncClient, StaticConfigStore};
use uuid::Uuid;
use wiremock::{MockServer, Request};

pub const ALICE: Uuid = Uuid::from_u128(0x0001);

/// Directory serving a fixed set of users.
#[derive(Default)]
pub struct StaticDirectory {
    users: HashMap<Uuid, UserSnapshot>,
}

impl StaticDirectory {
    pub fn with(mut self, snapshot: UserSnapshot) -> Self {
        self.users.insert(snapshot.identity, snapshot);
        self
    }
}

#[async_trait]
impl DirectoryService for StaticDirectory {
    async fn load_user(&self, identity: Uuid) -> Result<Option<UserSnapshot>> {
        Ok(self.users.get(&identity).cloned())
    }
}

pub fn alice_snapshot() -> UserSnapshot {
    UserSnapshot {
        identity: ALICE,
        username: Some("Alice".into()),
        primary_group: Some("vip".into()),
        nodes: vec![Node::inheritance("vip"), Node::inheritance("default")],
    }
}

/// Player or console that records every message sent to it.
pub struct RecordingActor {
    identity: Option<Uuid>,
    name: String,
    permissions: Vec<&'static str>,
    messages: Mutex<Vec<String>>,
}

impl RecordingActor {
    pub fn player(identity: Uuid, name: &str, permissions: &[&'static str]) -> Arc<Self> {
        Arc::new(Self {
            identity: Some(identity),
            name: name.to_owned(),
            permissions: permissions.to_vec(),
            messages: Mutex::new(Vec::new()),
        })
    }

    pub fn console(permissions: &[&'static str]) -> Arc<Self> {
        Arc::new(Self {
            identity: None,
            name: "CONSOLE".to_owned(),
            permissions: permissions.to_vec(),
            messages: Mutex::new(Vec::new()),
        })
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl CommandActor for RecordingActor {
    fn identity(&self) -> Option<Uuid> {
        self.identity
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| *p == permission)
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().push(message.to_owned());
    }
}

pub fn config_for(endpoint: &str) -> Config {
    let mut config = Config::default();
    config.api.endpoint = endpoint.to_owned();
    config.api.token = "e2e-token".to_owned();
    config.messages.prefix = String::new();
    config
}

/// Context backed by the real HTTP transport and an in-memory config store.
pub fn context(
    config: Config,
    directory: StaticDirectory,
) -> (AppContext, Arc<StaticConfigStore>) {
    let store = Arc::new(StaticConfigStore::new(config));
    let transport = Arc::new(HttpSyncClient::new(store.clone()).expect("http sync client"));
    let ctx = AppContext::new(store.clone(), Arc::new(directory), transport).expect("app context");
    (ctx, store)
}

/// Poll the mock server until `count` requests arrived or `timeout` passes.
pub async fn wait_for_requests(
    server: &MockServer,
    count: usize,
    timeout: Duration,
) -> Vec<Request> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        let requests = server.received_requests().await.unwrap_or_default();
        if requests.len() >= count || tokio::time::Instant::now() >= deadline {
            return requests;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
