use std::collections::HashMap;

use uuid::Uuid;

use campuschat_shared::{FeedbackKind, Message, MessageRole};

use crate::transport::RelayTransport;

/// Assistant turn shown locally when the relay itself is unreachable.
const APOLOGY: &str = "I'm here to help with your UNILORIN academic questions! Please try asking again, or contact the appropriate department for official matters.";
const CONNECTION_BANNER: &str = "I'm having trouble connecting right now. Please try again.";

/// One chat session: the ordered message list, the draft being typed, the
/// per-message feedback annotations, and a dismissible error banner. At most
/// one request is in flight at a time; further submissions are rejected
/// rather than queued. Nothing here is persisted.
pub struct Conversation<T: RelayTransport> {
  transport: T,
  messages: Vec<Message>,
  feedback: HashMap<Uuid, FeedbackKind>,
  input: String,
  in_flight: bool,
  error_banner: Option<String>,
}

impl<T: RelayTransport> Conversation<T> {
  pub fn new(transport: T) -> Self {
    Self {
      transport,
      messages: Vec::new(),
      feedback: HashMap::new(),
      input: String::new(),
      in_flight: false,
      error_banner: None,
    }
  }

  #[must_use]
  pub fn messages(&self) -> &[Message] {
    &self.messages
  }

  #[must_use]
  pub fn input(&self) -> &str {
    &self.input
  }

  #[must_use]
  pub const fn is_busy(&self) -> bool {
    self.in_flight
  }

  #[must_use]
  pub fn error_banner(&self) -> Option<&str> {
    self.error_banner.as_deref()
  }

  #[must_use]
  pub fn feedback(&self, id: Uuid) -> Option<FeedbackKind> {
    self.feedback.get(&id).copied()
  }

  /// Replace the draft. Typing again dismisses a stale connection banner.
  pub fn set_input(&mut self, text: impl Into<String>) {
    self.input = text.into();
    if !self.input.is_empty() {
      self.error_banner = None;
    }
  }

  /// Submit the current draft. A blank draft or an outstanding request makes
  /// this a no-op; otherwise the draft is cleared immediately, a user message
  /// is appended, and exactly one assistant message follows once the relay
  /// answers (or fails).
  ///
  /// Returns whether a submission actually happened.
  pub async fn submit(&mut self) -> bool {
    let content = self.input.trim().to_owned();
    if content.is_empty() || self.in_flight {
      return false;
    }

    self.input.clear();
    self.send(content).await;
    true
  }

  /// Resubmit the content of the most recent user message, if any.
  pub async fn retry(&mut self) -> bool {
    if self.in_flight {
      return false;
    }
    self.error_banner = None;

    let Some(content) = self
      .messages
      .iter()
      .rev()
      .find(|message| message.role == MessageRole::User)
      .map(|message| message.content.clone())
    else {
      return false;
    };

    self.send(content).await;
    true
  }

  async fn send(&mut self, content: String) {
    self.in_flight = true;
    self.error_banner = None;

    let user = Message::user(content);
    self.messages.push(user.clone());

    // The relay only needs the newest turn; it keeps no history either.
    match self.transport.send(std::slice::from_ref(&user)).await {
      Ok(reply) => self.messages.push(Message::assistant(reply)),
      Err(err) => {
        tracing::warn!(error = %err, "relay unreachable");
        self.error_banner = Some(CONNECTION_BANNER.to_owned());
        self.messages.push(Message::assistant(APOLOGY));
      }
    }

    self.in_flight = false;
  }

  /// Record a thumbs-up/down for one message. Overwrites any earlier value
  /// for that id; purely local, no network effect.
  pub fn record_feedback(&mut self, id: Uuid, kind: FeedbackKind) {
    self.feedback.insert(id, kind);
  }

  pub fn dismiss_error(&mut self) {
    self.error_banner = None;
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use async_trait::async_trait;
  use reqwest::StatusCode;

  use crate::transport::TransportError;

  use super::*;

  struct EchoRelay;

  #[async_trait]
  impl RelayTransport for EchoRelay {
    async fn send(&self, messages: &[Message]) -> Result<String, TransportError> {
      Ok(format!("echo: {}", messages.last().unwrap().content))
    }
  }

  struct DeadRelay;

  #[async_trait]
  impl RelayTransport for DeadRelay {
    async fn send(&self, _messages: &[Message]) -> Result<String, TransportError> {
      Err(TransportError::Status(StatusCode::BAD_GATEWAY))
    }
  }

  /// Fails the first call, answers afterwards, and records every outbound
  /// query so retries can be asserted on.
  struct FlakyRelay {
    sent: Mutex<Vec<String>>,
  }

  impl FlakyRelay {
    fn new() -> Self {
      Self {
        sent: Mutex::new(Vec::new()),
      }
    }
  }

  #[async_trait]
  impl RelayTransport for FlakyRelay {
    async fn send(&self, messages: &[Message]) -> Result<String, TransportError> {
      let mut sent = self.sent.lock().unwrap();
      sent.push(messages.last().unwrap().content.clone());
      if sent.len() == 1 {
        Err(TransportError::Status(StatusCode::BAD_GATEWAY))
      } else {
        Ok("answered".to_owned())
      }
    }
  }

  #[tokio::test]
  async fn submit_appends_one_user_and_one_assistant_message() {
    let mut chat = Conversation::new(EchoRelay);
    chat.set_input("how do I pay fees?");

    assert!(chat.submit().await);

    assert_eq!(chat.input(), "");
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[0].role, MessageRole::User);
    assert_eq!(chat.messages()[0].content, "how do I pay fees?");
    assert_eq!(chat.messages()[1].role, MessageRole::Assistant);
    assert_eq!(chat.messages()[1].content, "echo: how do I pay fees?");
    assert!(!chat.is_busy());
  }

  #[tokio::test]
  async fn blank_draft_is_not_submitted() {
    let mut chat = Conversation::new(EchoRelay);
    chat.set_input("   ");

    assert!(!chat.submit().await);
    assert!(chat.messages().is_empty());
  }

  #[tokio::test]
  async fn transport_failure_sets_banner_and_apology() {
    let mut chat = Conversation::new(DeadRelay);
    chat.set_input("hello?");

    assert!(chat.submit().await);

    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[1].role, MessageRole::Assistant);
    assert!(chat.messages()[1].content.contains("try asking again"));
    assert!(chat.error_banner().is_some());
    assert!(!chat.is_busy());
  }

  #[tokio::test]
  async fn typing_dismisses_the_banner() {
    let mut chat = Conversation::new(DeadRelay);
    chat.set_input("hello?");
    chat.submit().await;
    assert!(chat.error_banner().is_some());

    chat.set_input("h");
    assert!(chat.error_banner().is_none());
  }

  #[tokio::test]
  async fn dismiss_clears_the_banner() {
    let mut chat = Conversation::new(DeadRelay);
    chat.set_input("hello?");
    chat.submit().await;
    assert!(chat.error_banner().is_some());

    chat.dismiss_error();
    assert!(chat.error_banner().is_none());
  }

  #[tokio::test]
  async fn retry_resubmits_the_last_user_message() {
    let relay = FlakyRelay::new();
    let mut chat = Conversation::new(relay);
    chat.set_input("what is the add/drop deadline?");
    chat.submit().await;
    assert!(chat.error_banner().is_some());

    assert!(chat.retry().await);

    assert!(chat.error_banner().is_none());
    assert_eq!(
      *chat.transport.sent.lock().unwrap(),
      vec![
        "what is the add/drop deadline?".to_owned(),
        "what is the add/drop deadline?".to_owned(),
      ]
    );
    assert_eq!(chat.messages().last().unwrap().content, "answered");
  }

  #[tokio::test]
  async fn retry_with_no_user_message_is_a_noop() {
    let mut chat = Conversation::new(EchoRelay);
    assert!(!chat.retry().await);
    assert!(chat.messages().is_empty());
  }

  #[tokio::test]
  async fn feedback_is_isolated_per_message_id() {
    let mut chat = Conversation::new(EchoRelay);
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    chat.record_feedback(a, FeedbackKind::Positive);
    chat.record_feedback(b, FeedbackKind::Negative);
    assert_eq!(chat.feedback(a), Some(FeedbackKind::Positive));
    assert_eq!(chat.feedback(b), Some(FeedbackKind::Negative));

    chat.record_feedback(a, FeedbackKind::Negative);
    assert_eq!(chat.feedback(a), Some(FeedbackKind::Negative));
    assert_eq!(chat.feedback(b), Some(FeedbackKind::Negative));
  }
}
