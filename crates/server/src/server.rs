use std::sync::Arc;

use axum::{Router, response::Html, routing::get};
use campuschat_answer::{AnswerService, RemoteAnswerService};
use campuschat_shared::{APP_ENV, AppError};
use tokio::net::TcpListener;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

#[axum::debug_handler]
async fn handler() -> Html<&'static str> {
  Html("<h1>CampusChat</h1><p>POST /api/v0/chat &middot; docs at <a href=\"/openapi/\">/openapi/</a></p>")
}

pub async fn server() -> Result<(), AppError> {
  let answers: Arc<dyn AnswerService> =
    Arc::new(RemoteAnswerService::new(APP_ENV.answer_api_url.clone())?);
  let app_state = AppState::new(answers);

  let app = Router::new()
    .route("/", get(handler))
    .merge(api::app())
    .with_state(app_state);

  let listener = TcpListener::bind(&APP_ENV.bind_addr).await?;

  tracing::info!("server started at http://{}", APP_ENV.bind_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}
