use serde::Deserialize;

/// Value of `state` marking a finished assistant turn
pub const MESSAGE_STATE_DONE: &str = "done";

/// Thread descriptor embedded after the `thread.json:` marker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreadDescriptor {
    #[serde(default)]
    pub id: Option<String>,
}

impl ThreadDescriptor {
    /// Thread identifier, if present and non-empty
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Message descriptor embedded after the `new_message.json:` marker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageDescriptor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub reply: Option<String>,
}

impl MessageDescriptor {
    /// Message identifier, if present and non-empty
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_done(&self) -> bool {
        self.state.as_deref() == Some(MESSAGE_STATE_DONE)
    }

    /// Reply body of a finished turn. `None` while the turn is still running or the reply is empty.
    pub fn completed_reply(&self) -> Option<&str> {
        if !self.is_done() {
            return None;
        }
        self.reply.as_deref().filter(|reply| !reply.is_empty())
    }
}
