//! Line-oriented terminal chat against a running relay.
//!
//! Usage: `campuschat-cli [relay-url]`

use std::io::{self, BufRead, Write};

use campuschat_client::{Conversation, HttpRelay};

const DEFAULT_RELAY: &str = "http://localhost:3000/api/v0/chat";

const SUGGESTIONS: &[&str] = &[
  "How do I register for courses this semester?",
  "What are the important academic calendar dates?",
  "How can I check my current GPA and results?",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let endpoint = std::env::args()
    .nth(1)
    .unwrap_or_else(|| DEFAULT_RELAY.to_owned());
  let mut chat = Conversation::new(HttpRelay::new(endpoint));

  println!("CampusChat — ask anything about your academics.");
  for suggestion in SUGGESTIONS {
    println!("  e.g. {suggestion}");
  }
  println!("Commands: /retry  /quit");

  let stdin = io::stdin();
  let mut line = String::new();

  loop {
    print!("> ");
    io::stdout().flush()?;

    line.clear();
    if stdin.lock().read_line(&mut line)? == 0 {
      break;
    }

    let submitted = match line.trim() {
      "/quit" => break,
      "/retry" => chat.retry().await,
      text => {
        chat.set_input(text);
        chat.submit().await
      }
    };

    if !submitted {
      continue;
    }

    if let Some(banner) = chat.error_banner() {
      eprintln!("! {banner}");
    }
    if let Some(reply) = chat.messages().last() {
      println!("{}\n", reply.content);
    }
  }

  Ok(())
}
