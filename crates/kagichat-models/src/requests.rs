use serde::Serialize;

use super::types::ModelTier;

/// Branch identifier the endpoint expects on every prompt
pub const BRANCH_ID: &str = "00000000-0000-4000-0000-000000000000";

/// Prompt request body posted to the assistant endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PromptRequest {
    pub focus: Focus,
    pub profile: Profile,
}

/// Conversation focus: which thread (and message) the prompt continues
#[derive(Debug, Clone, Serialize)]
pub struct Focus {
    pub thread_id: Option<String>,
    pub branch_id: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Assistant profile settings sent with each prompt
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Option<String>,
    pub personalizations: bool,
    pub internet_access: bool,
    pub model: ModelTier,
    pub lens_id: Option<String>,
}

impl Profile {
    pub fn new(model: ModelTier, internet_access: bool, lens_id: Option<String>) -> Self {
        Self {
            id: None,
            personalizations: true,
            internet_access,
            model,
            lens_id,
        }
    }
}

impl Focus {
    pub fn new(prompt: &str, thread_id: Option<String>, message_id: Option<String>) -> Self {
        Self {
            thread_id,
            branch_id: BRANCH_ID.to_string(),
            prompt: prompt.to_string(),
            message_id,
        }
    }
}
