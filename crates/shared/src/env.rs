use std::env;
use std::sync::LazyLock;

/// Production endpoint of the hosted answering service.
const DEFAULT_ANSWER_API_URL: &str = "https://lilsher-rag.onrender.com/";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub struct AppEnv {
  pub answer_api_url: String,
  pub bind_addr: String,
}

impl AppEnv {
  fn new() -> Self {
    Self {
      answer_api_url: env::var("ANSWER_API_URL")
        .unwrap_or_else(|_| DEFAULT_ANSWER_API_URL.to_owned()),
      bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned()),
    }
  }
}

pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);
