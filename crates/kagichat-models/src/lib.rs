// Models module - data structures exchanged with the assistant endpoint
pub mod types;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use types::ModelTier;
pub use requests::{PromptRequest, Focus, Profile, BRANCH_ID};
pub use responses::{ThreadDescriptor, MessageDescriptor, MESSAGE_STATE_DONE};
