use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
  User,
  Assistant,
}

/// One conversational turn. Lives only in memory for the duration of a
/// session; ids are fresh v4 uuids minted at creation time.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Message {
  pub id: Uuid,
  pub role: MessageRole,
  pub content: String,
  pub timestamp: DateTime<Utc>,
}

impl Message {
  #[must_use]
  pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
    Self {
      id: Uuid::new_v4(),
      role,
      content: content.into(),
      timestamp: Utc::now(),
    }
  }

  #[must_use]
  pub fn user(content: impl Into<String>) -> Self {
    Self::new(MessageRole::User, content)
  }

  #[must_use]
  pub fn assistant(content: impl Into<String>) -> Self {
    Self::new(MessageRole::Assistant, content)
  }
}

/// Inbound wire shape of the relay endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
  pub messages: Vec<Message>,
}

/// A thumbs-up/down annotation on an assistant message. Client-local only;
/// never transmitted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
  Positive,
  Negative,
}
