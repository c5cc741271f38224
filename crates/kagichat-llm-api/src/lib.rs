//! # kagichat-llm-api
//!
//! Client for the Kagi Assistant prompt endpoint.
//!
//! The endpoint does not speak a JSON API: its replies are a text stream in
//! which JSON descriptors follow literal markers (`thread.json:`,
//! `new_message.json:`). This crate recovers those descriptors, tracks the
//! thread/message identifiers that continue a conversation, turns the HTML
//! reply into readable text and caches replies to prompts sent outside a
//! conversation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kagichat_llm_api::{KagiClient, KagiConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut client = KagiClient::new(KagiConfig::from_env())?;
//!
//!     println!("{}", client.send("What is Bun?").await);
//!     // Continues the same thread
//!     println!("{}", client.send("Does it run Node packages?").await);
//!
//!     client.reset();
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod conversation;
pub mod error;
pub mod extract;
pub mod normalize;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use cache::{cache_key, ResponseCache};
pub use client::{KagiClient, STREAM_CONTENT_TYPE};
pub use config::{
    KagiConfig,
    KAGI_PROMPT_URL,
    ASSISTANT_REFERER,
    DEFAULT_USER_AGENT,
    parse_bool,
};
pub use conversation::{ConversationState, Phase};
pub use error::KagiError;
pub use extract::{extract, MESSAGE_MARKER, THREAD_MARKER};
pub use normalize::{collapse_blank_lines, normalize};
