mod conversation;
pub use conversation::Conversation;

mod transport;
pub use transport::{HttpRelay, RelayTransport, TransportError};

pub use campuschat_shared::{FeedbackKind, Message, MessageRole};
