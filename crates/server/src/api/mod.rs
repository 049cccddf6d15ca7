use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod chat;

pub use chat::{X_CUSTOM_API, X_FALLBACK};

#[derive(OpenApi)]
#[openapi(
  info(
    title = "CampusChat API",
    version = "0.1.0",
    description = "Chat relay for the UNILORIN student-support assistant"
  ),
  paths(chat::chat),
  components(schemas(
    campuschat_shared::ChatRequest,
    campuschat_shared::Message,
    campuschat_shared::MessageRole,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/api/v0/chat", post(chat::chat))
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
