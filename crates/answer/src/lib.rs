//! Client for the remote answering service (the hosted RAG API). The service
//! takes a single question and returns a plain-text answer; anything other
//! than a 2xx is treated as a failure so the caller can fall back locally.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Ceiling for one round trip to the answering service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait AnswerService: Send + Sync {
  async fn ask(&self, message: &str) -> anyhow::Result<String>;
}

pub struct RemoteAnswerService {
  client: Client,
  url: String,
}

impl RemoteAnswerService {
  pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(Self {
      client,
      url: url.into(),
    })
  }
}

#[async_trait]
impl AnswerService for RemoteAnswerService {
  async fn ask(&self, message: &str) -> anyhow::Result<String> {
    let response = self
      .client
      .post(&self.url)
      .json(&json!({ "message": message }))
      .send()
      .await?
      .error_for_status()?;

    let body = response.text().await?;
    tracing::debug!(bytes = body.len(), "answering service replied");
    Ok(body)
  }
}
