use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use campuschat_shared::{ChatRequest, Message};

#[derive(Debug, Error)]
pub enum TransportError {
  #[error("relay request failed: {0}")]
  Request(#[from] reqwest::Error),
  #[error("relay responded with status {0}")]
  Status(StatusCode),
}

#[async_trait]
pub trait RelayTransport: Send + Sync {
  async fn send(&self, messages: &[Message]) -> Result<String, TransportError>;
}

/// Talks to the relay endpoint over HTTP; the reply body is the answer text.
pub struct HttpRelay {
  client: Client,
  endpoint: String,
}

impl HttpRelay {
  #[must_use]
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      endpoint: endpoint.into(),
    }
  }
}

#[async_trait]
impl RelayTransport for HttpRelay {
  async fn send(&self, messages: &[Message]) -> Result<String, TransportError> {
    let request = ChatRequest {
      messages: messages.to_vec(),
    };

    let response = self
      .client
      .post(&self.endpoint)
      .json(&request)
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(TransportError::Status(response.status()));
    }

    Ok(response.text().await?)
  }
}
