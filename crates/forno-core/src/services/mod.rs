//! Clients for the external collaborators.
//!
//! Three outbound integrations exist: chef comment generation and voice
//! order interpretation (both chat-completion calls against the same
//! endpoint) and the one-way notification webhook. Each collaborator is
//! reached through a trait so checkout and the voice flow can be tested
//! without touching the network.

pub mod chat;
pub mod chef;
pub mod interpreter;
pub mod notifier;

pub use chat::{ChatClient, ChatError};
pub use chef::{order_summary, ChefCommentClient, CommentGenerator, FALLBACK_COMMENT};
pub use interpreter::{VoiceInterpreter, VoiceOrderClient};
pub use notifier::{NotifyError, OrderNotifier, WebhookNotifier};
