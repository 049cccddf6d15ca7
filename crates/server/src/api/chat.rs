use axum::{
  body::Bytes,
  extract::State,
  http::{HeaderName, HeaderValue, header},
  response::{IntoResponse, Response},
};
use serde_json::Value;

use campuschat_shared::AppError;

use crate::utils::AppState;

/// Marks a reply relayed verbatim from the answering service.
pub const X_CUSTOM_API: HeaderName = HeaderName::from_static("x-custom-api");
/// Marks a reply composed locally because the answering service failed.
pub const X_FALLBACK: HeaderName = HeaderName::from_static("x-fallback");

const INVALID_PAYLOAD: &str = "Please provide a valid message to get started.";

fn relayed(body: String) -> Response {
  (
    [
      (header::CONTENT_TYPE, HeaderValue::from_static("text/plain")),
      (X_CUSTOM_API, HeaderValue::from_static("true")),
    ],
    body,
  )
    .into_response()
}

fn fallback(body: &'static str) -> Response {
  (
    [
      (header::CONTENT_TYPE, HeaderValue::from_static("text/plain")),
      (X_FALLBACK, HeaderValue::from_static("true")),
    ],
    body,
  )
    .into_response()
}

/// Pull the newest message's content out of the payload. A missing, empty or
/// non-array message list is a client error; a missing content field on the
/// newest entry reads as an empty query.
fn latest_query(payload: &Value) -> Result<&str, AppError> {
  let messages = payload
    .get("messages")
    .and_then(Value::as_array)
    .filter(|list| !list.is_empty())
    .ok_or_else(|| AppError::bad_request(INVALID_PAYLOAD))?;

  Ok(
    messages
      .last()
      .and_then(|message| message.get("content"))
      .and_then(Value::as_str)
      .unwrap_or_default(),
  )
}

/// Relay the newest user message to the answering service
///
/// The body is parsed leniently on purpose: a garbled body still gets a
/// canned greeting with a success status, so end users never see a server
/// error. Swallowed failures are logged for operators.
#[utoipa::path(
  post,
  path = "/api/v0/chat",
  request_body = campuschat_shared::ChatRequest,
  responses(
    (status = 200, description = "Answer text; X-Custom-API marks a relayed answer, X-Fallback a locally generated one", body = String),
    (status = 400, description = "Message list absent, empty, or not a list")
  )
)]
#[axum::debug_handler]
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
  let Ok(payload) = serde_json::from_slice::<Value>(&body) else {
    tracing::warn!("unreadable chat payload, replying with a canned greeting");
    return Ok(fallback(campuschat_fallback::default_greeting()));
  };

  let query = latest_query(&payload)?;

  match state.answers.ask(query).await {
    Ok(answer) => Ok(relayed(answer)),
    Err(err) => {
      tracing::warn!(error = %err, "answering service unavailable, falling back");
      let reply = campuschat_fallback::contextual_response(query, &mut rand::rng());
      Ok(fallback(reply))
    }
  }
}
