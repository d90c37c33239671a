//! Sending orders to the order endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::order::{OrderAck, OrderRequest};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/checkout";

/// Overall request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for order transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Unreadable response (HTTP {status}): {message}")]
    InvalidResponse { status: u16, message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connection(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// Sends an order and returns the endpoint's acknowledgment.
#[async_trait]
pub trait OrderTransport: Send + Sync {
    /// Send `order` once. No retries.
    async fn send(&self, order: &OrderRequest) -> Result<OrderAck, TransportError>;
}

#[async_trait]
impl<T: OrderTransport + ?Sized> OrderTransport for Box<T> {
    async fn send(&self, order: &OrderRequest) -> Result<OrderAck, TransportError> {
        (**self).send(order).await
    }
}

/// Where and how to send orders.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// Order endpoint URL.
    pub endpoint: String,
    /// Overall request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl SubmitConfig {
    /// Create a config for an endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Set the overall request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Posts orders as JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport from a config.
    pub fn new(config: &SubmitConfig) -> Result<Self, TransportError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| TransportError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint orders are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl OrderTransport for HttpTransport {
    async fn send(&self, order: &OrderRequest) -> Result<OrderAck, TransportError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(order)
            .send()
            .await?;

        // The body carries the verdict even on 4xx, so status alone is not
        // treated as failure.
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;
        debug!(status, bytes = bytes.len(), "order endpoint replied");

        serde_json::from_slice(&bytes).map_err(|e| TransportError::InvalidResponse {
            status,
            message: e.to_string(),
        })
    }
}
