//! reqwest-backed transports.
//!
//! Every call builds its own client and drops it before returning, so no
//! connection state outlives a single request.

use crate::config::ClientConfig;
use crate::domain::ports::{AsyncTransport, BlockingTransport};
use crate::utils::error::{FerienError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

fn status_error(url: &str, status: StatusCode, body: String) -> FerienError {
    tracing::warn!("Request to {} failed with status {}", url, status);
    FerienError::Transport {
        status: status.as_u16(),
        body,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        Ok(builder.build()?)
    }
}

#[async_trait]
impl AsyncTransport for ReqwestTransport {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let client = self.build_client()?;

        tracing::debug!("Making API request to: {}", url);
        let response = client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await?;
            return Err(status_error(url, status, body));
        }
        Ok(response.json().await?)
    }
}

/// Blocking variant. Must not be called from inside an async runtime thread;
/// wrap it in `tokio::task::spawn_blocking` there.
#[derive(Debug, Clone, Default)]
pub struct ReqwestBlockingTransport {
    config: ClientConfig,
}

impl ReqwestBlockingTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn build_client(&self) -> Result<reqwest::blocking::Client> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        Ok(builder.build()?)
    }
}

impl BlockingTransport for ReqwestBlockingTransport {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        let client = self.build_client()?;

        tracing::debug!("Making blocking API request to: {}", url);
        let response = client.get(url).send()?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text()?;
            return Err(status_error(url, status, body));
        }
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_async_fetch_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/holidays");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([{"year": 2017}]));
        });

        let config = ClientConfig {
            user_agent: Some("ferien-test".to_string()),
            ..ClientConfig::default()
        };
        let transport = ReqwestTransport::new(config);
        let value = transport.fetch_json(&server.url("/holidays")).await.unwrap();

        api_mock.assert();
        assert_eq!(value, json!([{"year": 2017}]));
    }

    #[tokio::test]
    async fn test_async_non_200_keeps_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/holidays");
            then.status(404).body("Unknown path");
        });

        let err = ReqwestTransport::default()
            .fetch_json(&server.url("/holidays"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, FerienError::Transport { status: 404, ref body } if body == "Unknown path")
        );
    }

    #[test]
    fn test_blocking_fetch_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/holidays/HH");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([]));
        });

        let value = ReqwestBlockingTransport::default()
            .fetch_json(&server.url("/holidays/HH"))
            .unwrap();

        api_mock.assert();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_blocking_invalid_json_is_request_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/holidays");
            then.status(200).body("not json");
        });

        let err = ReqwestBlockingTransport::default()
            .fetch_json(&server.url("/holidays"))
            .unwrap_err();
        assert!(matches!(err, FerienError::Request(_)));
    }

    #[test]
    fn test_blocking_connection_failure() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let err = ReqwestBlockingTransport::new(ClientConfig {
            timeout_seconds: Some(2),
            ..ClientConfig::default()
        })
        .fetch_json("http://127.0.0.1:9/holidays")
        .unwrap_err();
        assert!(err.is_transport());
    }
}
