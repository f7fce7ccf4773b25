//! Reqwest-backed sync transport
//!
//! Every call reads endpoint, token, and timeout from the config store at
//! call time, performs exactly one request, and folds whatever happens into
//! an [`Outcome`].

use std::sync::Arc;

use async_trait::async_trait;
use ranksync_core::{ConfigStore, SyncTransport};
use ranksync_domain::constants::{
    PATH_LINK, PATH_LINKED_PREFIX, PATH_PLAYER_JOIN, PATH_RANK_UPDATE, PATH_UNLINK,
};
use ranksync_domain::{Config, LinkRequest, Outcome, Payload, RankSyncError, UnlinkRequest};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, error, instrument};
use url::Url;
use uuid::Uuid;

use super::errors::ApiError;
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("ranksync/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of [`SyncTransport`].
pub struct HttpSyncClient {
    http: HttpClient,
    config: Arc<dyn ConfigStore>,
}

impl HttpSyncClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Arc<dyn ConfigStore>) -> Result<Self, RankSyncError> {
        let http = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, config })
    }

    async fn post<T>(&self, operation: &'static str, path: &str, record: &T) -> Outcome
    where
        T: Serialize + Sync,
    {
        match serde_json::to_string(record) {
            Ok(body) => self.execute(operation, Method::POST, path, Some(body)).await,
            Err(err) => fail(operation, path, ApiError::from(err)),
        }
    }

    async fn execute(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Outcome {
        let config = self.config.snapshot();
        match self.try_execute(&config, method, path, body).await {
            Ok(outcome) => outcome,
            Err(err) => fail(operation, path, err),
        }
    }

    #[instrument(name = "sync_call", skip(self, config, body))]
    async fn try_execute(
        &self,
        config: &Config,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Outcome, ApiError> {
        let api = &config.api;
        let log_calls = config.logging.log_api_calls;
        let timeout = api.timeout();
        let url = Url::parse(&format!("{}{path}", api.endpoint.trim_end_matches('/')))?;

        if log_calls {
            debug!("{method} {path} -> {}", body.as_deref().unwrap_or_default());
        }

        let mut request = self
            .http
            .request(method, url, timeout)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .header(AUTHORIZATION, format!("Bearer {}", api.token));
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response =
            self.http.send(request).await.map_err(|err| ApiError::from_reqwest(&err, timeout))?;

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(text) => text.lines().map(str::trim).collect::<String>(),
            Err(err) => ApiError::Body(err.to_string()).to_string(),
        };

        if log_calls {
            debug!("Response: {status} -> {body}");
        }

        Ok(Outcome::from_status(status, body))
    }
}

fn fail(operation: &'static str, path: &str, err: ApiError) -> Outcome {
    error!(operation, path, error = %err, "sync call failed");
    Outcome::failed(err)
}

#[async_trait]
impl SyncTransport for HttpSyncClient {
    async fn notify_join(&self, payload: &Payload) -> Outcome {
        self.post("notify_join", PATH_PLAYER_JOIN, payload).await
    }

    async fn notify_rank_change(&self, payload: &Payload) -> Outcome {
        self.post("notify_rank_change", PATH_RANK_UPDATE, payload).await
    }

    async fn link(&self, identity: Uuid, display_name: &str, code: &str) -> Outcome {
        let request = LinkRequest {
            uuid: identity,
            player_name: display_name.to_owned(),
            link_code: code.to_owned(),
        };
        self.post("link", PATH_LINK, &request).await
    }

    async fn unlink(&self, identity: Uuid) -> Outcome {
        self.post("unlink", PATH_UNLINK, &UnlinkRequest { uuid: identity }).await
    }

    async fn check_linked(&self, identity: Uuid) -> Outcome {
        let path = format!("{PATH_LINKED_PREFIX}{identity}");
        self.execute("check_linked", Method::GET, &path, None).await
    }
}
