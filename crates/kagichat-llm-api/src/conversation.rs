use std::fmt;
use std::mem;

/// Continuity state of a multi-turn exchange.
///
/// A message identifier can only exist alongside a thread identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Fresh,
    Threaded {
        thread_id: String,
    },
    Active {
        thread_id: String,
        message_id: String,
    },
}

/// Continuity phase without the identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fresh,
    Threaded,
    Active,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Fresh => "fresh",
            Phase::Threaded => "threaded",
            Phase::Active => "active",
        };
        f.write_str(name)
    }
}

impl ConversationState {
    pub fn new() -> Self {
        Self::Fresh
    }

    pub fn phase(&self) -> Phase {
        match self {
            ConversationState::Fresh => Phase::Fresh,
            ConversationState::Threaded { .. } => Phase::Threaded,
            ConversationState::Active { .. } => Phase::Active,
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, ConversationState::Fresh)
    }

    pub fn thread_id(&self) -> Option<&str> {
        match self {
            ConversationState::Fresh => None,
            ConversationState::Threaded { thread_id } | ConversationState::Active { thread_id, .. } => {
                Some(thread_id)
            }
        }
    }

    pub fn message_id(&self) -> Option<&str> {
        match self {
            ConversationState::Active { message_id, .. } => Some(message_id),
            _ => None,
        }
    }

    /// Record the thread identifier from a thread descriptor.
    /// An existing message identifier is kept.
    pub fn apply_thread(&mut self, thread_id: &str) {
        let thread_id = thread_id.to_string();
        *self = match mem::take(self) {
            ConversationState::Fresh | ConversationState::Threaded { .. } => {
                ConversationState::Threaded { thread_id }
            }
            ConversationState::Active { message_id, .. } => {
                ConversationState::Active { thread_id, message_id }
            }
        };
    }

    /// Record the newest message identifier. Ignored (returns `false`) while no thread exists.
    pub fn apply_message(&mut self, message_id: &str) -> bool {
        match mem::take(self) {
            ConversationState::Fresh => false,
            ConversationState::Threaded { thread_id } | ConversationState::Active { thread_id, .. } => {
                *self = ConversationState::Active {
                    thread_id,
                    message_id: message_id.to_string(),
                };
                true
            }
        }
    }

    /// Forget both identifiers and start over.
    pub fn reset(&mut self) {
        *self = ConversationState::Fresh;
    }
}
