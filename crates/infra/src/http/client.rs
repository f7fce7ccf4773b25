use std::time::Duration;

use parking_lot::Mutex;
use ranksync_domain::RankSyncError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// Single-attempt HTTP client whose connector follows the configured timeout.
///
/// The timeout is read per call, so the underlying reqwest client is cached
/// for the last timeout seen and rebuilt only when that value changes. A zero
/// timeout disables both the connect and the read timeout.
pub struct HttpClient {
    user_agent: Option<String>,
    cached: Mutex<Option<(Duration, ReqwestClient)>>,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder whose connect and read timeouts are `timeout`.
    pub fn request<U>(
        &self,
        method: Method,
        url: U,
        timeout: Duration,
    ) -> Result<RequestBuilder, RankSyncError>
    where
        U: reqwest::IntoUrl,
    {
        Ok(self.client_for(timeout)?.request(method, url))
    }

    /// Execute the request once. Non-2xx statuses are returned, not mapped
    /// to errors; the raw reqwest error is kept so callers can classify it.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, reqwest::Error> {
        let (client, request) = builder.build_split();
        let request = request?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(err)
            }
        }
    }

    fn client_for(&self, timeout: Duration) -> Result<ReqwestClient, RankSyncError> {
        let mut cached = self.cached.lock();
        if let Some((cached_timeout, client)) = cached.as_ref() {
            if *cached_timeout == timeout {
                return Ok(client.clone());
            }
        }

        debug!(timeout_ms = timeout.as_millis(), "building HTTP connector");
        let client = self.build_client(timeout)?;
        *cached = Some((timeout, client.clone()));
        Ok(client)
    }

    fn build_client(&self, timeout: Duration) -> Result<ReqwestClient, RankSyncError> {
        let mut builder = ReqwestClient::builder().no_proxy();

        if !timeout.is_zero() {
            builder = builder.connect_timeout(timeout).read_timeout(timeout);
        }

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        builder.build().map_err(|err| InfraError::from(err).into())
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, RankSyncError> {
        Ok(HttpClient { user_agent: self.user_agent, cached: Mutex::new(None) })
    }
}
