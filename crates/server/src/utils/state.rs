use std::sync::Arc;

use campuschat_answer::AnswerService;

#[derive(Clone)]
pub struct AppState {
  pub answers: Arc<dyn AnswerService>,
}

impl AppState {
  #[must_use]
  pub fn new(answers: Arc<dyn AnswerService>) -> Self {
    Self { answers }
  }
}
